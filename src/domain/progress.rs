use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One point on a project's S-curve. Progress is percent, costs are cumulative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSample {
    pub project_id: String,
    pub date: NaiveDate,
    pub planned_progress: f64,
    pub actual_progress: f64,
    pub planned_cost: f64,
    pub actual_cost: f64,
}
