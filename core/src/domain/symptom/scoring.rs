use std::collections::HashMap;

use tracing::debug;

use crate::domain::symptom::{
    entities::{Condition, ScoredCondition, Symptom},
    knowledge::AssociationTable,
    selection::SelectionState,
};

/// Maximum number of conditions returned by [`score_conditions`].
pub const MAX_RANKED_CONDITIONS: usize = 3;

/// Ranks conditions by how many selected symptoms point at them.
///
/// Selected symptoms are visited in lexicographic order of their labels and
/// each associated condition gets one vote. Conditions are sorted by
/// descending votes; equal counts keep the order in which the condition was
/// first reached during that visit, so the result does not depend on the
/// order symptoms were picked in. Symptoms missing from `associations`
/// contribute nothing. At most [`MAX_RANKED_CONDITIONS`] entries are returned.
pub fn score_conditions(
    selection: &SelectionState,
    associations: &AssociationTable,
) -> Vec<ScoredCondition> {
    if selection.is_empty() {
        return Vec::new();
    }

    let mut symptoms: Vec<&Symptom> = selection.symptoms().iter().collect();
    symptoms.sort();

    let mut first_seen: Vec<&Condition> = Vec::new();
    let mut votes: HashMap<&Condition, u32> = HashMap::new();
    for symptom in symptoms {
        for condition in associations.conditions_for(symptom.as_str()) {
            let count = votes.entry(condition).or_insert_with(|| {
                first_seen.push(condition);
                0
            });
            *count += 1;
        }
    }

    let mut ranked: Vec<ScoredCondition> = first_seen
        .into_iter()
        .map(|condition| ScoredCondition {
            condition: condition.clone(),
            votes: votes.get(condition).copied().unwrap_or_default(),
        })
        .collect();

    // stable: ties stay in first-seen order
    ranked.sort_by(|a, b| b.votes.cmp(&a.votes));
    ranked.truncate(MAX_RANKED_CONDITIONS);

    debug!(
        selected = selection.len(),
        ranked = ?ranked.iter().map(|r| r.condition.as_str()).collect::<Vec<_>>(),
        "scored conditions"
    );

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> AssociationTable {
        let rows: [(&str, &[&str]); 5] = [
            (
                "Headache",
                &["Common Cold", "Flu", "Migraine", "Stress", "Dehydration"],
            ),
            (
                "Fever",
                &["Common Cold", "Flu", "COVID-19", "Infection", "Pneumonia"],
            ),
            (
                "Nausea",
                &["Food Poisoning", "Gastroenteritis", "Morning Sickness", "Migraine"],
            ),
            (
                "Vomiting",
                &["Food Poisoning", "Gastroenteritis", "Migraine", "Motion Sickness"],
            ),
            ("Rash", &["Allergies", "Eczema", "Measles", "Hives"]),
        ];
        rows.into_iter()
            .map(|(symptom, conditions)| {
                (
                    Symptom::from(symptom),
                    conditions.iter().map(|c| Condition::from(*c)).collect(),
                )
            })
            .collect()
    }

    fn select(labels: &[&str]) -> SelectionState {
        labels.iter().map(|l| Symptom::from(*l)).collect()
    }

    fn names(ranked: &[ScoredCondition]) -> Vec<&str> {
        ranked.iter().map(|r| r.condition.as_str()).collect()
    }

    #[test]
    fn test_empty_selection_yields_nothing() {
        assert!(score_conditions(&SelectionState::new(), &table()).is_empty());
    }

    #[test]
    fn test_shared_conditions_rank_first() {
        let ranked = score_conditions(&select(&["Headache", "Fever"]), &table());
        assert_eq!(names(&ranked), vec!["Common Cold", "Flu", "COVID-19"]);
        assert_eq!(ranked[0].votes, 2);
        assert_eq!(ranked[1].votes, 2);
        assert_eq!(ranked[2].votes, 1);
    }

    #[test]
    fn test_gastro_symptoms() {
        let ranked = score_conditions(&select(&["Vomiting", "Nausea"]), &table());
        assert_eq!(
            names(&ranked),
            vec!["Food Poisoning", "Gastroenteritis", "Migraine"]
        );
        assert!(ranked.iter().all(|r| r.votes == 2));
    }

    #[test]
    fn test_unknown_symptom_contributes_nothing() {
        let table = table();
        let with_unknown = score_conditions(&select(&["Fever", "Foo"]), &table);
        let without = score_conditions(&select(&["Fever"]), &table);
        assert_eq!(with_unknown, without);

        assert!(score_conditions(&select(&["Foo"]), &table).is_empty());
    }

    #[test]
    fn test_four_way_tie_is_capped_and_stable() {
        let table = table();
        let first = score_conditions(&select(&["Rash"]), &table);
        assert_eq!(names(&first), vec!["Allergies", "Eczema", "Measles"]);

        let again = score_conditions(&select(&["Rash"]), &table);
        assert_eq!(first, again);
    }

    #[test]
    fn test_pick_order_does_not_change_ranking() {
        let table = table();
        let a = score_conditions(&select(&["Nausea", "Headache", "Fever"]), &table);
        let b = score_conditions(&select(&["Fever", "Nausea", "Headache"]), &table);
        let c = score_conditions(&select(&["Headache", "Fever", "Nausea"]), &table);
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_votes_are_non_increasing() {
        let table = table();
        let ranked = score_conditions(
            &select(&["Headache", "Fever", "Nausea", "Vomiting", "Rash"]),
            &table,
        );
        assert!(ranked.len() <= MAX_RANKED_CONDITIONS);
        assert!(ranked.windows(2).all(|w| w[0].votes >= w[1].votes));
        assert_eq!(ranked[0].condition.as_str(), "Migraine");
        assert_eq!(ranked[0].votes, 3);
    }
}
