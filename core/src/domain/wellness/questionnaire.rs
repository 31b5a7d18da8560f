use std::collections::HashMap;

use crate::domain::{
    common::entities::app_errors::CoreError,
    wellness::entities::{AnswerOption, Question, StressAssessment, StressLevel},
};

struct QuestionTemplate {
    id: &'static str,
    text: &'static str,
    options: [(&'static str, &'static str); 4],
    /// Option values counted as a high-stress answer.
    high_stress: [&'static str; 2],
}

const FREQUENCY_OPTIONS: [(&str, &str); 4] = [
    ("not-at-all", "Not at all"),
    ("several-days", "Several days"),
    ("more-than-half", "More than half the days"),
    ("nearly-every-day", "Nearly every day"),
];

const QUESTIONS: [QuestionTemplate; 5] = [
    QuestionTemplate {
        id: "q1",
        text: "How often have you been feeling down, depressed, or hopeless over the past two weeks?",
        options: FREQUENCY_OPTIONS,
        high_stress: ["nearly-every-day", "more-than-half"],
    },
    QuestionTemplate {
        id: "q2",
        text: "How often have you had little interest or pleasure in doing things over the past two weeks?",
        options: FREQUENCY_OPTIONS,
        high_stress: ["nearly-every-day", "more-than-half"],
    },
    QuestionTemplate {
        id: "q3",
        text: "How would you rate your ability to cope with stress over the past month?",
        options: [
            ("excellent", "Excellent"),
            ("good", "Good"),
            ("fair", "Fair"),
            ("poor", "Poor"),
        ],
        high_stress: ["fair", "poor"],
    },
    QuestionTemplate {
        id: "q4",
        text: "How often do you feel excessively worried or anxious?",
        options: [
            ("rarely", "Rarely or never"),
            ("occasionally", "Occasionally"),
            ("frequently", "Frequently"),
            ("constantly", "Constantly"),
        ],
        high_stress: ["frequently", "constantly"],
    },
    QuestionTemplate {
        id: "q5",
        text: "How would you rate your sleep quality over the past month?",
        options: [
            ("very-good", "Very good"),
            ("fairly-good", "Fairly good"),
            ("fairly-bad", "Fairly bad"),
            ("very-bad", "Very bad"),
        ],
        high_stress: ["fairly-bad", "very-bad"],
    },
];

const HIGH_THRESHOLD: u8 = 4;
const MODERATE_THRESHOLD: u8 = 2;

pub fn questionnaire() -> Vec<Question> {
    QUESTIONS
        .iter()
        .map(|template| Question {
            id: template.id.to_string(),
            text: template.text.to_string(),
            options: template
                .options
                .iter()
                .map(|(value, label)| AnswerOption {
                    value: value.to_string(),
                    label: label.to_string(),
                })
                .collect(),
        })
        .collect()
}

pub fn stress_level(high_stress_answers: u8) -> StressLevel {
    if high_stress_answers >= HIGH_THRESHOLD {
        StressLevel::High
    } else if high_stress_answers >= MODERATE_THRESHOLD {
        StressLevel::Moderate
    } else {
        StressLevel::Low
    }
}

/// Scores a complete set of answers keyed by question id. Every question must
/// be answered with one of its own option values; unknown question ids are
/// rejected.
pub fn assess_answers(answers: &HashMap<String, String>) -> Result<StressAssessment, CoreError> {
    if let Some(unknown) = answers
        .keys()
        .find(|id| !QUESTIONS.iter().any(|q| q.id == id.as_str()))
    {
        return Err(CoreError::Invalid(format!("unknown question: {unknown}")));
    }

    let mut high_stress_answers = 0u8;
    for question in &QUESTIONS {
        let answer = answers
            .get(question.id)
            .ok_or_else(|| CoreError::Invalid(format!("question {} is unanswered", question.id)))?;

        if !question.options.iter().any(|(value, _)| value == answer) {
            return Err(CoreError::Invalid(format!(
                "invalid answer for {}: {answer}",
                question.id
            )));
        }
        if question.high_stress.contains(&answer.as_str()) {
            high_stress_answers += 1;
        }
    }

    let level = stress_level(high_stress_answers);

    Ok(StressAssessment {
        level,
        high_stress_answers,
        summary: summary(level).to_string(),
        next_steps: next_steps(level),
    })
}

fn summary(level: StressLevel) -> &'static str {
    match level {
        StressLevel::High => {
            "Your responses suggest you're experiencing significant stress or mood challenges. Consider speaking with a mental health professional for personalized support. The coping techniques may help in the meantime."
        }
        StressLevel::Moderate => {
            "Your responses indicate moderate stress or mood challenges. The coping techniques provided may be helpful, and if symptoms persist or worsen, consider consulting with a mental health professional."
        }
        StressLevel::Low => {
            "Your responses suggest relatively low stress levels. Continue practicing good self-care and the preventive techniques provided to maintain your mental wellness."
        }
    }
}

fn next_steps(level: StressLevel) -> Vec<String> {
    let mut steps = vec![
        "Explore the coping techniques".to_string(),
        "Establish a regular self-care routine".to_string(),
        "Consider tracking your mood daily to identify patterns".to_string(),
    ];
    if matches!(level, StressLevel::High | StressLevel::Moderate) {
        steps.push("Chat with our AI assistant about mental health strategies".to_string());
    }
    if level == StressLevel::High {
        steps.push("Reach out to a mental health professional for personalized support".to_string());
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(values: [&str; 5]) -> HashMap<String, String> {
        ["q1", "q2", "q3", "q4", "q5"]
            .into_iter()
            .zip(values)
            .map(|(id, value)| (id.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_questionnaire_shape() {
        let questions = questionnaire();
        assert_eq!(questions.len(), 5);
        assert!(questions.iter().all(|q| q.options.len() == 4));
        assert_eq!(questions[3].options[0].label, "Rarely or never");
    }

    #[test]
    fn test_low_stress() {
        let assessment = assess_answers(&answers([
            "not-at-all",
            "several-days",
            "good",
            "rarely",
            "fairly-bad",
        ]))
        .unwrap();
        assert_eq!(assessment.level, StressLevel::Low);
        assert_eq!(assessment.high_stress_answers, 1);
        assert_eq!(assessment.next_steps.len(), 3);
    }

    #[test]
    fn test_moderate_stress() {
        let assessment = assess_answers(&answers([
            "more-than-half",
            "not-at-all",
            "poor",
            "occasionally",
            "very-good",
        ]))
        .unwrap();
        assert_eq!(assessment.level, StressLevel::Moderate);
        assert_eq!(assessment.next_steps.len(), 4);
    }

    #[test]
    fn test_high_stress() {
        let assessment = assess_answers(&answers([
            "nearly-every-day",
            "more-than-half",
            "fair",
            "constantly",
            "fairly-good",
        ]))
        .unwrap();
        assert_eq!(assessment.level, StressLevel::High);
        assert_eq!(assessment.high_stress_answers, 4);
        assert_eq!(
            assessment.next_steps.last().map(String::as_str),
            Some("Reach out to a mental health professional for personalized support")
        );
    }

    #[test]
    fn test_incomplete_answers_rejected() {
        let mut partial = answers(["not-at-all", "not-at-all", "good", "rarely", "very-good"]);
        partial.remove("q4");
        assert_eq!(
            assess_answers(&partial),
            Err(CoreError::Invalid("question q4 is unanswered".to_string()))
        );
    }

    #[test]
    fn test_option_from_other_question_rejected() {
        let wrong = answers(["poor", "not-at-all", "good", "rarely", "very-good"]);
        assert!(matches!(assess_answers(&wrong), Err(CoreError::Invalid(_))));

        let mut extra = answers(["not-at-all", "not-at-all", "good", "rarely", "very-good"]);
        extra.insert("q6".into(), "good".into());
        assert!(matches!(assess_answers(&extra), Err(CoreError::Invalid(_))));
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(stress_level(0), StressLevel::Low);
        assert_eq!(stress_level(1), StressLevel::Low);
        assert_eq!(stress_level(2), StressLevel::Moderate);
        assert_eq!(stress_level(3), StressLevel::Moderate);
        assert_eq!(stress_level(4), StressLevel::High);
        assert_eq!(stress_level(5), StressLevel::High);
    }
}
