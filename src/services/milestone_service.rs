use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

use crate::domain::project::Project;
use crate::domain::risk::RiskAssessment;
use crate::domain::task::{Milestone, MilestoneStatus};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneRow {
    pub id: String,
    pub project_id: String,
    pub project_name: String,
    pub name: String,
    pub date: NaiveDate,
    pub status: MilestoneStatus,
}

/// Milestones of the filtered projects, earliest first. Milestones sharing a
/// date keep catalog order.
pub fn upcoming_milestones(projects: &[&Project], milestones: &[Milestone]) -> Option<Vec<MilestoneRow>> {
    let names: HashMap<&str, &str> = projects
        .iter()
        .map(|p| (p.id.as_str(), p.name.as_str()))
        .collect();

    let mut rows: Vec<MilestoneRow> = milestones
        .iter()
        .filter_map(|m| {
            names.get(m.project_id.as_str()).map(|name| MilestoneRow {
                id: m.id.clone(),
                project_id: m.project_id.clone(),
                project_name: name.to_string(),
                name: m.name.clone(),
                date: m.date,
                status: m.status,
            })
        })
        .collect();

    if rows.is_empty() {
        return None;
    }
    rows.sort_by_key(|row| row.date);
    Some(rows)
}

/// Risk register entries of the filtered projects, in catalog order.
pub fn risk_register<'a>(projects: &[&Project], assessments: &'a [RiskAssessment]) -> Option<Vec<&'a RiskAssessment>> {
    let rows: Vec<&RiskAssessment> = assessments
        .iter()
        .filter(|r| projects.iter().any(|p| p.id == r.project_id))
        .collect();

    if rows.is_empty() { None } else { Some(rows) }
}
