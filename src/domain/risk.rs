use serde::{Deserialize, Serialize};

/// Risk register entry for one project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub project_id: String,
    pub risk_category: String,
    pub probability: String,
    pub impact: String,
    pub mitigation: String,
}
