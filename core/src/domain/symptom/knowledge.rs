use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError,
    symptom::entities::{Condition, Symptom},
};

/// Serialized form of the knowledge base. Lists of entries rather than maps so
/// that table order survives a round trip through JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct KnowledgeBaseDocument {
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub associations: Vec<AssociationEntry>,
    #[serde(default)]
    pub diet_advice: Vec<DietAdviceEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssociationEntry {
    pub symptom: String,
    pub conditions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DietAdviceEntry {
    pub condition: String,
    pub advice: Vec<String>,
}

/// The fixed set of symptom labels a user can pick from, in display order.
#[derive(Debug, Clone, Default)]
pub struct SymptomCatalog {
    symptoms: Vec<Symptom>,
}

impl SymptomCatalog {
    pub fn iter(&self) -> impl Iterator<Item = &Symptom> {
        self.symptoms.iter()
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.symptoms.iter().any(|s| s.as_str() == label)
    }

    /// Case-insensitive substring match over the catalog, keeping catalog
    /// order. A blank term matches everything.
    pub fn search(&self, term: &str) -> Vec<&Symptom> {
        let needle = term.trim().to_lowercase();
        self.symptoms
            .iter()
            .filter(|symptom| symptom.as_str().to_lowercase().contains(&needle))
            .collect()
    }
}

impl FromIterator<Symptom> for SymptomCatalog {
    fn from_iter<T: IntoIterator<Item = Symptom>>(iter: T) -> Self {
        Self {
            symptoms: iter.into_iter().collect(),
        }
    }
}

/// Symptom -> ordered candidate conditions.
#[derive(Debug, Clone, Default)]
pub struct AssociationTable {
    entries: HashMap<Symptom, Vec<Condition>>,
}

impl AssociationTable {
    /// Conditions associated with `symptom`; empty for unknown symptoms.
    pub fn conditions_for(&self, symptom: &str) -> &[Condition] {
        self.entries
            .get(symptom)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Symptom, Vec<Condition>)> for AssociationTable {
    fn from_iter<T: IntoIterator<Item = (Symptom, Vec<Condition>)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Condition -> ordered diet advice. Order decides precedence when the
/// aggregated advice list is truncated.
#[derive(Debug, Clone, Default)]
pub struct DietAdviceTable {
    entries: HashMap<Condition, Vec<String>>,
}

impl DietAdviceTable {
    /// Advice for `condition`; empty when the table has no entry.
    pub fn advice_for(&self, condition: &str) -> &[String] {
        self.entries
            .get(condition)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, condition: &str) -> bool {
        self.entries.contains_key(condition)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Condition, Vec<String>)> for DietAdviceTable {
    fn from_iter<T: IntoIterator<Item = (Condition, Vec<String>)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Validated catalog and lookup tables. Built once at startup and shared
/// read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    catalog: SymptomCatalog,
    associations: AssociationTable,
    diet_advice: DietAdviceTable,
    conditions: Vec<Condition>,
}

impl KnowledgeBase {
    pub fn catalog(&self) -> &SymptomCatalog {
        &self.catalog
    }

    pub fn associations(&self) -> &AssociationTable {
        &self.associations
    }

    pub fn diet_advice(&self) -> &DietAdviceTable {
        &self.diet_advice
    }

    /// Every known condition, associated ones first in table order, then
    /// conditions that only appear in the diet table.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn knows_condition(&self, condition: &str) -> bool {
        self.conditions.iter().any(|c| c.as_str() == condition)
    }

    pub fn advice_for(&self, condition: &str) -> &[String] {
        self.diet_advice.advice_for(condition)
    }

    /// Conditions that fall back to generic advice, in [`conditions`](Self::conditions) order.
    pub fn conditions_without_advice(&self) -> impl Iterator<Item = &Condition> {
        self.conditions
            .iter()
            .filter(|condition| !self.diet_advice.contains(condition.as_str()))
    }
}

impl TryFrom<KnowledgeBaseDocument> for KnowledgeBase {
    type Error = CoreError;

    fn try_from(document: KnowledgeBaseDocument) -> Result<Self, Self::Error> {
        let mut catalog = Vec::with_capacity(document.symptoms.len());
        let mut seen_symptoms = HashSet::new();
        for label in document.symptoms {
            require_identifier(&label, "symptom")?;
            if !seen_symptoms.insert(label.clone()) {
                return Err(invalid(format!("duplicate symptom `{label}` in catalog")));
            }
            catalog.push(Symptom::from(label));
        }

        let mut associations = HashMap::with_capacity(document.associations.len());
        let mut conditions: Vec<Condition> = Vec::new();
        for entry in document.associations {
            if !seen_symptoms.contains(&entry.symptom) {
                return Err(invalid(format!(
                    "association for `{}` which is not in the catalog",
                    entry.symptom
                )));
            }

            let mut listed = HashSet::new();
            let mut entry_conditions = Vec::with_capacity(entry.conditions.len());
            for name in entry.conditions {
                require_identifier(&name, "condition")?;
                if !listed.insert(name.clone()) {
                    return Err(invalid(format!(
                        "condition `{name}` listed twice for `{}`",
                        entry.symptom
                    )));
                }
                let condition = Condition::from(name);
                if !conditions.contains(&condition) {
                    conditions.push(condition.clone());
                }
                entry_conditions.push(condition);
            }

            let symptom = Symptom::from(entry.symptom);
            if associations.contains_key(&symptom) {
                return Err(invalid(format!("duplicate association for `{symptom}`")));
            }
            associations.insert(symptom, entry_conditions);
        }

        let associated: HashSet<Condition> = conditions.iter().cloned().collect();
        let mut diet_advice = HashMap::with_capacity(document.diet_advice.len());
        for entry in document.diet_advice {
            require_identifier(&entry.condition, "condition")?;
            if let Some(blank) = entry.advice.iter().position(|a| a.trim().is_empty()) {
                return Err(invalid(format!(
                    "blank advice at position {blank} for `{}`",
                    entry.condition
                )));
            }

            let condition = Condition::from(entry.condition);
            if diet_advice.contains_key(&condition) {
                return Err(invalid(format!("duplicate diet advice for `{condition}`")));
            }
            if !associated.contains(&condition) {
                warn!(%condition, "diet advice for a condition no symptom points to");
                conditions.push(condition.clone());
            }
            diet_advice.insert(condition, entry.advice);
        }

        let knowledge_base = Self {
            catalog: SymptomCatalog { symptoms: catalog },
            associations: AssociationTable {
                entries: associations,
            },
            diet_advice: DietAdviceTable {
                entries: diet_advice,
            },
            conditions,
        };

        for condition in knowledge_base.conditions_without_advice() {
            warn!(%condition, "condition has no diet advice, generic advice will be used");
        }

        info!(
            symptoms = knowledge_base.catalog.len(),
            conditions = knowledge_base.conditions.len(),
            diet_entries = knowledge_base.diet_advice.len(),
            "knowledge base loaded"
        );

        Ok(knowledge_base)
    }
}

fn require_identifier(value: &str, kind: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(invalid(format!("blank {kind} identifier")));
    }
    Ok(())
}

fn invalid(message: String) -> CoreError {
    CoreError::InvalidKnowledgeBase(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> KnowledgeBaseDocument {
        KnowledgeBaseDocument {
            symptoms: vec!["Headache".into(), "Fever".into(), "Sore throat".into()],
            associations: vec![
                AssociationEntry {
                    symptom: "Headache".into(),
                    conditions: vec!["Common Cold".into(), "Migraine".into()],
                },
                AssociationEntry {
                    symptom: "Fever".into(),
                    conditions: vec!["Common Cold".into(), "Flu".into()],
                },
            ],
            diet_advice: vec![
                DietAdviceEntry {
                    condition: "Common Cold".into(),
                    advice: vec!["Warm fluids".into()],
                },
                DietAdviceEntry {
                    condition: "Scurvy".into(),
                    advice: vec!["Citrus".into()],
                },
            ],
        }
    }

    #[test]
    fn test_build_valid_document() {
        let kb = KnowledgeBase::try_from(document()).unwrap();
        assert_eq!(kb.catalog().len(), 3);
        assert_eq!(kb.associations().len(), 2);
        assert_eq!(
            kb.associations().conditions_for("Fever"),
            &[Condition::from("Common Cold"), Condition::from("Flu")]
        );
        assert_eq!(kb.advice_for("Common Cold"), &["Warm fluids".to_string()]);
        assert!(kb.advice_for("Flu").is_empty());
    }

    #[test]
    fn test_conditions_keep_first_seen_order() {
        let kb = KnowledgeBase::try_from(document()).unwrap();
        let names: Vec<&str> = kb.conditions().iter().map(Condition::as_str).collect();
        assert_eq!(names, vec!["Common Cold", "Migraine", "Flu", "Scurvy"]);
        assert!(kb.knows_condition("Scurvy"));
        assert!(!kb.knows_condition("Gout"));
    }

    #[test]
    fn test_conditions_without_advice_in_table_order() {
        let kb = KnowledgeBase::try_from(document()).unwrap();
        let missing: Vec<&str> = kb
            .conditions_without_advice()
            .map(Condition::as_str)
            .collect();
        assert_eq!(missing, vec!["Migraine", "Flu"]);
    }

    #[test]
    fn test_unknown_symptom_lookup_is_empty() {
        let kb = KnowledgeBase::try_from(document()).unwrap();
        assert!(kb.associations().conditions_for("Foo").is_empty());
        assert!(kb.associations().conditions_for("Sore throat").is_empty());
    }

    #[test]
    fn test_rejects_association_outside_catalog() {
        let mut doc = document();
        doc.associations.push(AssociationEntry {
            symptom: "Chills".into(),
            conditions: vec!["Flu".into()],
        });
        let err = KnowledgeBase::try_from(doc).unwrap_err();
        assert!(matches!(err, CoreError::InvalidKnowledgeBase(msg) if msg.contains("Chills")));
    }

    #[test]
    fn test_rejects_duplicate_catalog_symptom() {
        let mut doc = document();
        doc.symptoms.push("Fever".into());
        assert!(matches!(
            KnowledgeBase::try_from(doc),
            Err(CoreError::InvalidKnowledgeBase(_))
        ));
    }

    #[test]
    fn test_rejects_condition_listed_twice_for_one_symptom() {
        let mut doc = document();
        doc.associations[0].conditions.push("Migraine".into());
        assert!(matches!(
            KnowledgeBase::try_from(doc),
            Err(CoreError::InvalidKnowledgeBase(_))
        ));
    }

    #[test]
    fn test_rejects_blank_advice() {
        let mut doc = document();
        doc.diet_advice[0].advice.push("  ".into());
        assert!(matches!(
            KnowledgeBase::try_from(doc),
            Err(CoreError::InvalidKnowledgeBase(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_diet_entry() {
        let mut doc = document();
        doc.diet_advice.push(DietAdviceEntry {
            condition: "Common Cold".into(),
            advice: vec!["Rest".into()],
        });
        assert!(matches!(
            KnowledgeBase::try_from(doc),
            Err(CoreError::InvalidKnowledgeBase(_))
        ));
    }

    #[test]
    fn test_search_is_case_insensitive_and_ordered() {
        let kb = KnowledgeBase::try_from(document()).unwrap();
        let found: Vec<&str> = kb
            .catalog()
            .search("E")
            .into_iter()
            .map(Symptom::as_str)
            .collect();
        assert_eq!(found, vec!["Headache", "Fever", "Sore throat"]);

        let found = kb.catalog().search("THROAT");
        assert_eq!(found.len(), 1);
        assert_eq!(kb.catalog().search("   ").len(), 3);
        assert!(kb.catalog().search("xyz").is_empty());
    }
}
