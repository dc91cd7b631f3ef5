use chrono::{NaiveDate, Utc};
use csv::Writer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::domain::project::{FelStage, Project};
use crate::repository::Catalog;
use crate::services::error_handling::{DashboardError, Result};
use crate::services::filter_engine::filter_projects;
use crate::services::filter_state::FilterState;
use crate::utils::format::{format_currency, format_percentage};

pub struct ExportService {
    catalog: Arc<Catalog>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportedProject {
    pub id: String,
    pub name: String,
    pub status: String,
    pub fel_stage: String,
    pub priority: String,
    pub category: String,
    pub department: String,
    pub business_unit: String,
    pub company: String,
    pub project_manager: String,
    pub risk: String,
    pub budget: f64,
    pub actual_spend: f64,
    pub budget_variance: f64,
    pub completion_percentage: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<&Project> for ExportedProject {
    fn from(project: &Project) -> Self {
        ExportedProject {
            id: project.id.clone(),
            name: project.name.clone(),
            status: project.status.to_string(),
            fel_stage: project.fel_stage.to_string(),
            priority: project.priority.to_string(),
            category: project.category.to_string(),
            department: project.department.clone(),
            business_unit: project.business_unit.clone(),
            company: project.company.clone(),
            project_manager: project.project_manager.clone(),
            risk: project.risk.to_string(),
            budget: project.budget,
            actual_spend: project.actual_spend,
            budget_variance: project.budget_variance(),
            completion_percentage: project.completion_percentage,
            start_date: project.start_date,
            end_date: project.end_date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
    Markdown,
}

impl ExportService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    fn projects(&self, state: &FilterState) -> Vec<&Project> {
        filter_projects(&self.catalog.projects, state)
    }

    /// Export filtered projects to JSON format
    pub fn export_to_json(&self, state: &FilterState) -> Result<String> {
        let exported: Vec<ExportedProject> =
            self.projects(state).into_iter().map(Into::into).collect();
        Ok(serde_json::to_string_pretty(&exported)?)
    }

    /// Export filtered projects to CSV format
    pub fn export_to_csv(&self, state: &FilterState) -> Result<String> {
        let mut wtr = Writer::from_writer(vec![]);

        wtr.write_record([
            "ID",
            "Name",
            "Status",
            "FEL Stage",
            "Priority",
            "Category",
            "Department",
            "Business Unit",
            "Company",
            "Project Manager",
            "Risk",
            "Budget",
            "Actual Spend",
            "Budget Variance",
            "Completion",
            "Start Date",
            "End Date",
        ])?;

        for project in self.projects(state) {
            wtr.write_record([
                project.id.clone(),
                project.name.clone(),
                project.status.to_string(),
                project.fel_stage.to_string(),
                project.priority.to_string(),
                project.category.to_string(),
                project.department.clone(),
                project.business_unit.clone(),
                project.company.clone(),
                project.project_manager.clone(),
                project.risk.to_string(),
                project.budget.to_string(),
                project.actual_spend.to_string(),
                format!("{:.1}", project.budget_variance()),
                project.completion_percentage.to_string(),
                project.start_date.to_string(),
                project.end_date.to_string(),
            ])?;
        }

        let data = wtr.into_inner().map_err(|e| DashboardError::Export {
            message: e.to_string(),
        })?;
        String::from_utf8(data).map_err(|e| DashboardError::Export {
            message: e.to_string(),
        })
    }

    /// Export filtered projects to Markdown, one section per FEL stage
    pub fn export_to_markdown(&self, state: &FilterState) -> Result<String> {
        let projects = self.projects(state);
        let mut output = String::new();

        output.push_str("# Portfolio Export\n\n");
        output.push_str(&format!(
            "Generated: {}\n\n",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ));
        output.push_str(&format!(
            "{} projects, {} active filters\n",
            projects.len(),
            state.active_filter_count()
        ));

        let mut by_stage: HashMap<FelStage, Vec<&Project>> = HashMap::new();
        for project in projects {
            by_stage.entry(project.fel_stage).or_default().push(project);
        }

        for stage in FelStage::ALL {
            let Some(members) = by_stage.get(&stage) else {
                continue;
            };
            output.push_str(&format!("\n## {} ({})\n\n", stage.label(), members.len()));

            for project in members {
                output.push_str(&format!("### {} ({})\n", project.name, project.id));
                output.push_str(&format!("- **Status:** {}\n", project.status));
                output.push_str(&format!("- **Priority:** {}\n", project.priority));
                output.push_str(&format!("- **Manager:** {}\n", project.project_manager));
                output.push_str(&format!(
                    "- **Budget:** {} (spent {}, variance {})\n",
                    format_currency(project.budget),
                    format_currency(project.actual_spend),
                    format_percentage(project.budget_variance())
                ));
                output.push_str(&format!(
                    "- **Completion:** {}\n",
                    format_percentage(project.completion_percentage)
                ));
                output.push_str(&format!(
                    "- **Schedule:** {} to {} ({} days)\n",
                    project.start_date,
                    project.end_date,
                    project.duration_days()
                ));
                output.push('\n');
            }
        }

        Ok(output)
    }

    pub fn export(&self, state: &FilterState, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Json => self.export_to_json(state),
            ExportFormat::Csv => self.export_to_csv(state),
            ExportFormat::Markdown => self.export_to_markdown(state),
        }
    }

    /// Save export to file
    pub fn export_to_file(&self, state: &FilterState, format: ExportFormat, path: &Path) -> Result<()> {
        let content = self.export(state, format)?;

        let mut file = std::fs::File::create(path)?;
        file.write_all(content.as_bytes())?;

        info!(path = %path.display(), format = ?format, "Export written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::filter_state::FilterAction;
    use tempfile::TempDir;

    fn setup_test_service() -> ExportService {
        ExportService::new(Arc::new(Catalog::seed()))
    }

    fn active_only() -> FilterState {
        FilterState::default().apply(FilterAction::ToggleStatus("Active".into()))
    }

    #[test]
    fn test_export_to_json() {
        let service = setup_test_service();

        let json = service.export_to_json(&active_only()).unwrap();
        let parsed: Vec<ExportedProject> = serde_json::from_str(&json).unwrap();

        let ids: Vec<&str> = parsed.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["PRJ-001", "PRJ-002", "PRJ-004", "PRJ-006"]);
        assert!(json.contains("\"felStage\""));
    }

    #[test]
    fn test_export_to_csv() {
        let service = setup_test_service();

        let csv = service.export_to_csv(&FilterState::default()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("ID,Name,Status,FEL Stage"));
        assert!(lines[1].starts_with("PRJ-001,"));
    }

    #[test]
    fn test_export_to_markdown() {
        let service = setup_test_service();

        let markdown = service.export_to_markdown(&active_only()).unwrap();

        assert!(markdown.contains("# Portfolio Export"));
        assert!(markdown.contains("4 projects, 1 active filters"));
        assert!(markdown.contains("- **Status:** Active"));
        assert!(!markdown.contains("- **Status:** Completed"));
        assert!(markdown.contains("- **Schedule:** 2024-01-15 to 2024-12-31 (351 days)"));
    }

    #[test]
    fn test_export_empty_selection() {
        let service = setup_test_service();
        let state = FilterState::default().apply(FilterAction::SetSearchQuery("zzz".into()));

        assert_eq!(service.export_to_json(&state).unwrap().trim(), "[]");
        assert_eq!(service.export_to_csv(&state).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_export_to_file() {
        let service = setup_test_service();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("portfolio.csv");

        service
            .export_to_file(&FilterState::default(), ExportFormat::Csv, &path)
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("PRJ-006"));
    }
}
