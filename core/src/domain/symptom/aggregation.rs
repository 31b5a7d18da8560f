use std::collections::HashSet;

use crate::domain::symptom::{entities::ScoredCondition, knowledge::DietAdviceTable};

/// Maximum number of advice strings returned by [`aggregate_diet_advice`].
pub const MAX_DIET_ADVICE: usize = 5;

/// Flattens the diet advice of ranked conditions into one list.
///
/// Conditions are read in rank order and their advice in table order. An
/// advice string is kept the first time it appears (exact, case-sensitive
/// match). The list stops at [`MAX_DIET_ADVICE`], so advice from
/// higher-ranked conditions wins. Conditions without a table entry add
/// nothing.
pub fn aggregate_diet_advice(ranked: &[ScoredCondition], table: &DietAdviceTable) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut advice = Vec::with_capacity(MAX_DIET_ADVICE);

    let candidates = ranked
        .iter()
        .flat_map(|scored| table.advice_for(scored.condition.as_str()));
    for item in candidates {
        if advice.len() == MAX_DIET_ADVICE {
            break;
        }
        if seen.insert(item.as_str()) {
            advice.push(item.clone());
        }
    }

    advice
}
