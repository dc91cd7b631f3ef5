use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

use crate::domain::budget::CategoryBudget;
use crate::domain::progress::ProgressSample;
use crate::domain::project::Project;
use crate::domain::resource::ResourceAllocation;
use crate::domain::risk::RiskAssessment;
use crate::domain::task::{Milestone, ScheduleTask};
use crate::services::error_handling::{DashboardError, Result};

use super::seed;

/// The read-only project catalog every view derives from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub projects: Vec<Project>,
    #[serde(default)]
    pub gantt_tasks: Vec<ScheduleTask>,
    #[serde(default, rename = "sCurveData")]
    pub s_curve_data: Vec<ProgressSample>,
    #[serde(default)]
    pub resource_allocation: Vec<ResourceAllocation>,
    #[serde(default)]
    pub budget_by_category: Vec<CategoryBudget>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub risk_assessment: Vec<RiskAssessment>,
}

impl Catalog {
    /// The built-in sample portfolio.
    pub fn seed() -> Self {
        Self {
            projects: seed::projects(),
            gantt_tasks: seed::gantt_tasks(),
            s_curve_data: seed::s_curve_data(),
            resource_allocation: seed::resource_allocation(),
            budget_by_category: seed::budget_by_category(),
            milestones: seed::milestones(),
            risk_assessment: seed::risk_assessment(),
        }
    }

    pub fn from_json_str(raw: &str, origin: &Path) -> Result<Self> {
        let catalog: Catalog =
            serde_json::from_str(raw).map_err(|source| DashboardError::CatalogParse {
                path: origin.to_path_buf(),
                source,
            })?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| DashboardError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&raw, path)?;
        info!(
            path = %path.display(),
            projects = catalog.projects.len(),
            tasks = catalog.gantt_tasks.len(),
            samples = catalog.s_curve_data.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Project ids must be unique. Auxiliary rows pointing at unknown
    /// projects are tolerated; they never join.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id.as_str()) {
                return Err(DashboardError::DuplicateProjectId {
                    id: project.id.clone(),
                });
            }
        }

        let orphans = self
            .gantt_tasks
            .iter()
            .map(|t| t.project_id.as_str())
            .chain(self.s_curve_data.iter().map(|s| s.project_id.as_str()))
            .filter(|id| !seen.contains(id))
            .count();
        if orphans > 0 {
            debug!(orphans, "Catalog has rows for unknown projects");
        }
        Ok(())
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
