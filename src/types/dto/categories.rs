use serde::Deserialize;

use crate::types::db::category;

/// Raw category form submission, exactly as posted
#[derive(Deserialize, Debug, Default)]
pub struct CategoryFormData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Sanitized category values built from a submission.
///
/// Carries the trimmed/escaped field values whether or not validation passed,
/// so a failed submission can be echoed back into the form without data loss.
/// `id` is set only on update, always from the request path.
#[derive(Debug, Clone)]
pub struct CategoryCandidate {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
}

impl From<&category::Model> for CategoryCandidate {
    fn from(model: &category::Model) -> Self {
        Self {
            id: Some(model.id.clone()),
            name: model.name.clone(),
            description: model.description.clone(),
        }
    }
}
