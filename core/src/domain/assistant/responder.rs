use rand::{Rng, seq::SliceRandom};
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

const BUILTIN_RULES: [(&str, &[&str], &str); 4] = [
    (
        "headache",
        &["headache", "head pain"],
        "Headaches can have many causes, including stress, dehydration, lack of sleep, or eye strain. For occasional headaches, rest, hydration, and over-the-counter pain relievers may help. If you're experiencing severe, persistent, or unusual headaches, particularly if they're accompanied by other symptoms like fever, confusion, or vision changes, you should seek medical attention promptly.",
    ),
    (
        "nutrition",
        &["diet", "nutrition", "food"],
        "A balanced diet typically includes a variety of fruits and vegetables, whole grains, lean proteins, and healthy fats. It's generally recommended to limit processed foods, added sugars, and excessive sodium. Individual dietary needs can vary based on factors like age, sex, activity level, and health conditions. If you have specific dietary concerns or requirements, consulting with a registered dietitian can provide personalized guidance.",
    ),
    (
        "exercise",
        &["exercise", "workout"],
        "Regular physical activity is important for overall health. Adults are generally recommended to get at least 150 minutes of moderate-intensity aerobic activity or 75 minutes of vigorous activity each week, along with muscle-strengthening activities at least twice a week. If you're new to exercise or have health concerns, start slowly and consider consulting with a healthcare provider before beginning a new exercise regimen.",
    ),
    (
        "mental-health",
        &["stress", "anxiety", "depress"],
        "Mental health is as important as physical health. Stress, anxiety, and depression are common conditions that can benefit from various approaches, including therapy, lifestyle changes, and sometimes medication. Techniques like mindfulness meditation, deep breathing exercises, regular physical activity, and ensuring adequate sleep can help manage stress and anxiety. If you're experiencing persistent mental health concerns, please reach out to a mental health professional for proper assessment and support.",
    ),
];

const BUILTIN_FALLBACKS: [&str; 8] = [
    "Based on your symptoms, it sounds like you might be experiencing a common cold. Rest, hydration, and over-the-counter medications can help manage your symptoms. If they persist for more than a week, consider consulting with a healthcare provider.",
    "Your symptoms could be related to seasonal allergies. I'd recommend avoiding known allergens, trying an over-the-counter antihistamine, and keeping indoor air clean. If symptoms worsen, a doctor can help with prescription options.",
    "It's important to maintain a balanced diet rich in fruits, vegetables, whole grains, and lean proteins. Aim for 150 minutes of moderate exercise weekly, stay hydrated, and ensure you're getting 7-9 hours of quality sleep each night.",
    "For stress management, consider practicing mindfulness meditation, deep breathing exercises, or progressive muscle relaxation. Regular physical activity, adequate sleep, and connecting with supportive people can also significantly reduce stress levels.",
    "While I can provide general health information, I'm not a replacement for professional medical advice. If you're experiencing concerning symptoms, please consult with a healthcare provider for proper diagnosis and treatment.",
    "A Mediterranean-style diet has been shown to support heart health. This includes plenty of fruits, vegetables, whole grains, fish, olive oil, and nuts, while limiting red meat, processed foods, and added sugars.",
    "Regular screenings are important for preventive health. Depending on your age, gender, and risk factors, these might include blood pressure, cholesterol, diabetes, various cancers, and mental health assessments. Your primary care provider can recommend an appropriate screening schedule.",
    "For improving sleep quality, maintain a consistent sleep schedule, create a restful environment, limit daytime naps, manage stress, and avoid caffeine, alcohol, and large meals before bedtime. If sleep problems persist, consider speaking with a healthcare provider.",
];

#[derive(Debug, Clone)]
pub struct ResponseRule {
    pub topic: String,
    pattern: Regex,
    pub response: String,
}

impl ResponseRule {
    /// Matches when the message contains any of `keywords`, ignoring case.
    pub fn new(topic: &str, keywords: &[&str], response: &str) -> Result<Self, CoreError> {
        if keywords.is_empty() {
            return Err(CoreError::Invalid(format!("rule {topic} has no keywords")));
        }

        let alternatives = keywords
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!("(?i){alternatives}"))
            .map_err(|e| CoreError::Invalid(format!("rule {topic}: {e}")))?;

        Ok(Self {
            topic: topic.to_string(),
            pattern,
            response: response.to_string(),
        })
    }

    pub fn matches(&self, message: &str) -> bool {
        self.pattern.is_match(message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AssistantReply {
    pub message: String,
    /// Topic of the rule that produced the reply; `None` for a general reply.
    pub topic: Option<String>,
}

/// First-match-wins keyword responder with a pool of general replies.
#[derive(Debug, Clone)]
pub struct KeywordResponder {
    rules: Vec<ResponseRule>,
    fallbacks: Vec<String>,
}

impl KeywordResponder {
    pub fn new(rules: Vec<ResponseRule>, fallbacks: Vec<String>) -> Result<Self, CoreError> {
        if fallbacks.is_empty() {
            return Err(CoreError::Invalid(
                "responder needs at least one fallback reply".to_string(),
            ));
        }
        Ok(Self { rules, fallbacks })
    }

    pub fn builtin() -> Result<Self, CoreError> {
        let rules = BUILTIN_RULES
            .iter()
            .map(|(topic, keywords, response)| ResponseRule::new(topic, keywords, response))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(
            rules,
            BUILTIN_FALLBACKS.iter().map(|s| s.to_string()).collect(),
        )
    }

    pub fn rules(&self) -> &[ResponseRule] {
        &self.rules
    }

    pub fn fallbacks(&self) -> &[String] {
        &self.fallbacks
    }

    pub fn reply(&self, message: &str) -> Result<AssistantReply, CoreError> {
        self.reply_with_rng(message, &mut rand::thread_rng())
    }

    pub fn reply_with_rng<R: Rng + ?Sized>(
        &self,
        message: &str,
        rng: &mut R,
    ) -> Result<AssistantReply, CoreError> {
        if message.trim().is_empty() {
            return Err(CoreError::Invalid("message is empty".to_string()));
        }

        if let Some(rule) = self.rules.iter().find(|rule| rule.matches(message)) {
            return Ok(AssistantReply {
                message: rule.response.clone(),
                topic: Some(rule.topic.clone()),
            });
        }

        let fallback = self
            .fallbacks
            .choose(rng)
            .ok_or(CoreError::InternalServerError)?;

        Ok(AssistantReply {
            message: fallback.clone(),
            topic: None,
        })
    }
}
