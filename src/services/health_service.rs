use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::project::{Project, ProjectHealth};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthRow {
    pub project_id: String,
    pub project_name: String,
    pub health: ProjectHealth,
    pub budget_variance: f64,
    pub days_remaining: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub today: NaiveDate,
    pub rows: Vec<HealthRow>,
}

impl HealthReport {
    pub fn count(&self, health: ProjectHealth) -> usize {
        self.rows.iter().filter(|r| r.health == health).count()
    }
}

/// Health of every filtered project as of `today`, in filtered order.
pub fn project_health(projects: &[&Project], today: NaiveDate) -> Option<HealthReport> {
    if projects.is_empty() {
        return None;
    }

    let rows = projects
        .iter()
        .map(|p| HealthRow {
            project_id: p.id.clone(),
            project_name: p.name.clone(),
            health: p.health(today),
            budget_variance: p.budget_variance(),
            days_remaining: (p.end_date - today).num_days(),
        })
        .collect();

    Some(HealthReport { today, rows })
}
