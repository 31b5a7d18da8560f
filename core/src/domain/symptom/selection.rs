use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{common::entities::app_errors::CoreError, symptom::entities::Symptom};

/// Upper bound on the symptoms one selection or one check can hold.
pub const MAX_SELECTED_SYMPTOMS: usize = 32;

/// Symptoms currently chosen by the user.
///
/// Membership has set semantics. The insertion order is kept only so the
/// selected symptoms can be shown back in the order they were picked; scoring
/// does not depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SelectionState {
    symptoms: Vec<Symptom>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `symptom`. Returns `true` when the symptom is
    /// selected afterwards. Unknown labels are accepted; scoring ignores them.
    pub fn toggle(&mut self, symptom: Symptom) -> bool {
        match self.symptoms.iter().position(|s| *s == symptom) {
            Some(index) => {
                self.symptoms.remove(index);
                false
            }
            None => {
                self.symptoms.push(symptom);
                true
            }
        }
    }

    /// Like [`toggle`](Self::toggle), but refuses to add a symptom once
    /// [`MAX_SELECTED_SYMPTOMS`] are selected. Removing is always allowed.
    pub fn toggle_bounded(&mut self, symptom: Symptom) -> Result<bool, CoreError> {
        if self.len() >= MAX_SELECTED_SYMPTOMS && !self.symptoms.contains(&symptom) {
            return Err(CoreError::Invalid(format!(
                "at most {MAX_SELECTED_SYMPTOMS} symptoms can be selected"
            )));
        }
        Ok(self.toggle(symptom))
    }

    pub fn clear(&mut self) {
        self.symptoms.clear();
    }

    pub fn contains(&self, symptom: &str) -> bool {
        self.symptoms.iter().any(|s| s.as_str() == symptom)
    }

    /// Selected symptoms in the order they were picked.
    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }
}

/// Builds a selection from a list that may contain repeats. Repeats collapse
/// to one entry instead of toggling back out.
impl FromIterator<Symptom> for SelectionState {
    fn from_iter<T: IntoIterator<Item = Symptom>>(iter: T) -> Self {
        let mut state = Self::new();
        for symptom in iter {
            if !state.symptoms.contains(&symptom) {
                state.symptoms.push(symptom);
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut state = SelectionState::new();
        assert!(state.toggle("Fever".into()));
        assert!(state.contains("Fever"));
        assert!(!state.toggle("Fever".into()));
        assert!(state.is_empty());
    }

    #[test]
    fn test_double_toggle_restores_membership() {
        let mut state: SelectionState = ["Cough", "Chills"].into_iter().map(Symptom::from).collect();
        let before = state.clone();

        state.toggle("Nausea".into());
        state.toggle("Nausea".into());
        assert_eq!(state, before);

        state.toggle("Cough".into());
        state.toggle("Cough".into());
        assert_eq!(state.len(), 2);
        assert!(state.contains("Cough"));
        assert!(state.contains("Chills"));
    }

    #[test]
    fn test_keeps_pick_order() {
        let mut state = SelectionState::new();
        state.toggle("Nausea".into());
        state.toggle("Cough".into());
        state.toggle("Fever".into());
        let labels: Vec<&str> = state.symptoms().iter().map(Symptom::as_str).collect();
        assert_eq!(labels, vec!["Nausea", "Cough", "Fever"]);
    }

    #[test]
    fn test_collect_collapses_repeats() {
        let state: SelectionState = ["Fever", "Fever", "Cough", "Fever"]
            .into_iter()
            .map(Symptom::from)
            .collect();
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_clear_and_unknown_labels() {
        let mut state = SelectionState::new();
        assert!(state.toggle("Foo".into()));
        state.toggle("Fever".into());
        state.clear();
        assert!(state.is_empty());
        assert!(!state.contains("Foo"));
    }

    #[test]
    fn test_bounded_toggle_stops_at_limit() {
        let mut state: SelectionState = (0..MAX_SELECTED_SYMPTOMS)
            .map(|i| Symptom::from(format!("S{i}")))
            .collect();

        assert!(matches!(
            state.toggle_bounded("Fever".into()),
            Err(CoreError::Invalid(_))
        ));
        assert_eq!(state.len(), MAX_SELECTED_SYMPTOMS);

        assert_eq!(state.toggle_bounded("S0".into()), Ok(false));
        assert_eq!(state.toggle_bounded("Fever".into()), Ok(true));
    }
}
