use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct AssessStressInput {
    /// Option value keyed by question id.
    pub answers: HashMap<String, String>,
}
