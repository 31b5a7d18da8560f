use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AssessStressValidator {
    /// Option value keyed by question id, e.g. `{"q1": "rarely"}`.
    #[validate(length(min = 1, message = "answers are required"))]
    pub answers: HashMap<String, String>,
}
