use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::project::{budget_variance, Project, ProjectStatus};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub total_projects: usize,
    pub by_status: BTreeMap<ProjectStatus, usize>,
    pub total_budget: f64,
    pub total_spent: f64,
    pub budget_variance: f64,
    pub avg_completion: f64,
    pub critical_projects: usize,
    pub high_risk_projects: usize,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum VarianceTrend {
    UnderBudget,
    OnBudget,
    OverBudget,
}

impl VarianceTrend {
    pub fn from_variance(variance: f64) -> Self {
        if variance < 0.0 {
            VarianceTrend::UnderBudget
        } else if variance > 10.0 {
            VarianceTrend::OverBudget
        } else {
            VarianceTrend::OnBudget
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VarianceTrend::UnderBudget => "Under budget",
            VarianceTrend::OnBudget => "On budget",
            VarianceTrend::OverBudget => "Over budget",
        }
    }
}

impl KpiSummary {
    pub fn status_count(&self, status: ProjectStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }

    pub fn variance_trend(&self) -> VarianceTrend {
        VarianceTrend::from_variance(self.budget_variance)
    }

    pub fn is_on_track(&self) -> bool {
        self.avg_completion > 50.0
    }
}

pub fn kpi_summary(projects: &[&Project]) -> Option<KpiSummary> {
    if projects.is_empty() {
        return None;
    }

    let total = projects.len();
    let mut by_status: BTreeMap<ProjectStatus, usize> =
        ProjectStatus::ALL.iter().map(|s| (*s, 0)).collect();
    for project in projects {
        *by_status.entry(project.status).or_insert(0) += 1;
    }

    let total_budget: f64 = projects.iter().map(|p| p.budget).sum();
    let total_spent: f64 = projects.iter().map(|p| p.actual_spend).sum();
    let completion_sum: f64 = projects.iter().map(|p| p.completion_percentage).sum();

    Some(KpiSummary {
        total_projects: total,
        by_status,
        total_budget,
        total_spent,
        budget_variance: budget_variance(total_budget, total_spent),
        avg_completion: completion_sum / total as f64,
        critical_projects: projects.iter().filter(|p| p.is_critical()).count(),
        high_risk_projects: projects.iter().filter(|p| p.is_high_risk()).count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::{test_project, Priority, RiskLevel};

    #[test]
    fn test_empty_collection_has_no_summary() {
        assert!(kpi_summary(&[]).is_none());
    }

    #[test]
    fn test_summary_totals() {
        let mut a = test_project("A");
        a.priority = Priority::Critical;
        a.completion_percentage = 20.0;
        let mut b = test_project("B");
        b.status = ProjectStatus::Completed;
        b.risk = RiskLevel::High;
        b.actual_spend = 1_500_000.0;
        b.completion_percentage = 100.0;

        let summary = kpi_summary(&[&a, &b]).unwrap();
        assert_eq!(summary.total_projects, 2);
        assert_eq!(summary.status_count(ProjectStatus::Active), 1);
        assert_eq!(summary.status_count(ProjectStatus::Completed), 1);
        assert_eq!(summary.status_count(ProjectStatus::OnHold), 0);
        assert_eq!(summary.total_budget, 2_000_000.0);
        assert_eq!(summary.total_spent, 2_000_000.0);
        assert_eq!(summary.budget_variance, 0.0);
        assert_eq!(summary.avg_completion, 60.0);
        assert_eq!(summary.critical_projects, 1);
        assert_eq!(summary.high_risk_projects, 1);
        assert!(summary.is_on_track());
        assert_eq!(summary.variance_trend(), VarianceTrend::OnBudget);
    }

    #[test]
    fn test_zero_budget_variance_is_zero() {
        let mut a = test_project("A");
        a.budget = 0.0;
        a.actual_spend = 10_000.0;

        let summary = kpi_summary(&[&a]).unwrap();
        assert_eq!(summary.budget_variance, 0.0);
    }

    #[test]
    fn test_variance_trend_thresholds() {
        assert_eq!(VarianceTrend::from_variance(-0.1), VarianceTrend::UnderBudget);
        assert_eq!(VarianceTrend::from_variance(0.0), VarianceTrend::OnBudget);
        assert_eq!(VarianceTrend::from_variance(10.0), VarianceTrend::OnBudget);
        assert_eq!(VarianceTrend::from_variance(10.1), VarianceTrend::OverBudget);
        assert_eq!(VarianceTrend::OverBudget.label(), "Over budget");
    }
}
