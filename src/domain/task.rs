use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::project::Priority;

/// A schedule entry shown on the Gantt layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleTask {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub progress: f64,
    /// Ids of predecessor tasks. Carried for display only; nothing schedules on them.
    #[serde(default)]
    pub dependencies: Vec<String>,
    pub assignee: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub date: NaiveDate,
    pub status: MilestoneStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MilestoneStatus {
    Completed,
    Upcoming,
    #[serde(rename = "At Risk")]
    AtRisk,
    Planned,
}

impl ScheduleTask {
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 100.0
    }
}

impl MilestoneStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneStatus::Completed => "Completed",
            MilestoneStatus::Upcoming => "Upcoming",
            MilestoneStatus::AtRisk => "At Risk",
            MilestoneStatus::Planned => "Planned",
        }
    }
}
