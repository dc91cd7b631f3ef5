use serde::Serialize;

use crate::domain::project::{FelStage, Project, ProjectStatus};

/// Statuses shown on the status funnel, in display order.
pub const STATUS_FUNNEL: [ProjectStatus; 4] = [
    ProjectStatus::Planning,
    ProjectStatus::Active,
    ProjectStatus::Completed,
    ProjectStatus::OnHold,
];

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FunnelRow<K> {
    pub key: K,
    pub project_count: usize,
    pub total_budget: f64,
    pub total_spent: f64,
    pub avg_progress: f64,
    pub critical_count: usize,
    pub high_risk_count: usize,
    /// Share of the filtered collection, in percent.
    pub conversion_rate: f64,
    /// Bar length relative to the fullest bucket, in percent.
    pub width_percentage: f64,
    pub project_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Funnel<K> {
    pub rows: Vec<FunnelRow<K>>,
    pub total_projects: usize,
    pub max_bucket_count: usize,
}

pub type StageFunnel = Funnel<FelStage>;
pub type StatusFunnel = Funnel<ProjectStatus>;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FunnelInsights<K> {
    pub largest_bucket: K,
    pub total_budget: f64,
    pub high_risk_total: usize,
    pub critical_total: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PipelineSummary {
    /// FEL 1 and FEL 2.
    pub early_stage_count: usize,
    /// FEL 3 and Execute.
    pub development_count: usize,
    pub total_budget: f64,
    pub critical_total: usize,
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Bucket `projects` by `key_of` over the fixed `keys`, in that order.
/// Projects whose key is not listed fall out of every bucket.
pub fn bucket_by<K, F>(projects: &[&Project], keys: &[K], key_of: F) -> Option<Funnel<K>>
where
    K: Copy + PartialEq,
    F: Fn(&Project) -> K,
{
    if projects.is_empty() {
        return None;
    }
    let total = projects.len();

    let mut rows: Vec<FunnelRow<K>> = keys
        .iter()
        .map(|key| {
            let members: Vec<&Project> = projects
                .iter()
                .copied()
                .filter(|p| key_of(*p) == *key)
                .collect();
            let count = members.len();
            let progress_sum: f64 = members.iter().map(|p| p.completion_percentage).sum();

            FunnelRow {
                key: *key,
                project_count: count,
                total_budget: members.iter().map(|p| p.budget).sum(),
                total_spent: members.iter().map(|p| p.actual_spend).sum(),
                avg_progress: if count > 0 { progress_sum / count as f64 } else { 0.0 },
                critical_count: members.iter().filter(|p| p.is_critical()).count(),
                high_risk_count: members.iter().filter(|p| p.is_high_risk()).count(),
                conversion_rate: percent(count, total),
                width_percentage: 0.0,
                project_ids: members.iter().map(|p| p.id.clone()).collect(),
            }
        })
        .collect();

    let max_bucket_count = rows.iter().map(|r| r.project_count).max().unwrap_or(0);
    for row in &mut rows {
        row.width_percentage = percent(row.project_count, max_bucket_count);
    }

    Some(Funnel {
        rows,
        total_projects: total,
        max_bucket_count,
    })
}

pub fn stage_funnel(projects: &[&Project]) -> Option<StageFunnel> {
    bucket_by(projects, &FelStage::ALL, |p| p.fel_stage)
}

pub fn status_funnel(projects: &[&Project]) -> Option<StatusFunnel> {
    bucket_by(projects, &STATUS_FUNNEL, |p| p.status)
}

impl<K: Copy + PartialEq> Funnel<K> {
    pub fn row(&self, key: K) -> Option<&FunnelRow<K>> {
        self.rows.iter().find(|r| r.key == key)
    }

    pub fn bucketed_count(&self) -> usize {
        self.rows.iter().map(|r| r.project_count).sum()
    }

    pub fn insights(&self) -> Option<FunnelInsights<K>> {
        // Ties keep the earliest bucket.
        let largest = self.rows.iter().fold(None::<&FunnelRow<K>>, |best, row| match best {
            Some(b) if b.project_count >= row.project_count => Some(b),
            _ => Some(row),
        })?;

        Some(FunnelInsights {
            largest_bucket: largest.key,
            total_budget: self.rows.iter().map(|r| r.total_budget).sum(),
            high_risk_total: self.rows.iter().map(|r| r.high_risk_count).sum(),
            critical_total: self.rows.iter().map(|r| r.critical_count).sum(),
        })
    }
}

impl StatusFunnel {
    pub fn active_rate(&self) -> f64 {
        let active = self.row(ProjectStatus::Active).map_or(0, |r| r.project_count);
        percent(active, self.total_projects)
    }

    pub fn completion_rate(&self) -> f64 {
        let completed = self.row(ProjectStatus::Completed).map_or(0, |r| r.project_count);
        percent(completed, self.total_projects)
    }
}

impl StageFunnel {
    pub fn pipeline_summary(&self) -> PipelineSummary {
        let count_of = |stages: &[FelStage]| -> usize {
            stages
                .iter()
                .filter_map(|s| self.row(*s))
                .map(|r| r.project_count)
                .sum()
        };

        PipelineSummary {
            early_stage_count: count_of(&[FelStage::Fel1, FelStage::Fel2]),
            development_count: count_of(&[FelStage::Fel3, FelStage::Execute]),
            total_budget: self.rows.iter().map(|r| r.total_budget).sum(),
            critical_total: self.rows.iter().map(|r| r.critical_count).sum(),
        }
    }
}
