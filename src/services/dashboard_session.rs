use chrono::NaiveDate;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::project::Project;
use crate::domain::risk::RiskAssessment;
use crate::repository::Catalog;
use crate::services::budget_service::{category_rollup, CategoryRollup};
use crate::services::distribution_service::{business_unit_shares, company_shares, Share};
use crate::services::error_handling::{DashboardError, Result};
use crate::services::filter_engine::{filter_projects, FilterOptions};
use crate::services::filter_state::{FilterAction, FilterState};
use crate::services::funnel_service::{stage_funnel, status_funnel, PipelineSummary, StageFunnel, StatusFunnel};
use crate::services::health_service::{project_health, HealthReport};
use crate::services::kpi_service::{kpi_summary, KpiSummary};
use crate::services::milestone_service::{risk_register, upcoming_milestones, MilestoneRow};
use crate::services::resource_service::{resource_utilization, ResourceUtilization};
use crate::services::s_curve_service::{s_curve, SCurvePoint};
use crate::services::schedule_layout::{schedule_layout, ScheduleLayout};

/// Everything the dashboard views show for one filter state. Each `None`
/// is that view's "no data" case.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub state: FilterState,
    pub today: NaiveDate,
    pub project_ids: Vec<String>,
    pub kpis: Option<KpiSummary>,
    pub stage_funnel: Option<StageFunnel>,
    pub status_funnel: Option<StatusFunnel>,
    pub pipeline: Option<PipelineSummary>,
    pub category_budgets: Option<Vec<CategoryRollup>>,
    pub resources: Option<ResourceUtilization>,
    pub business_units: Option<Vec<Share>>,
    pub companies: Option<Vec<Share>>,
    pub s_curve: Option<Vec<SCurvePoint>>,
    pub schedule: Option<ScheduleLayout>,
    pub milestones: Option<Vec<MilestoneRow>>,
    pub risks: Option<Vec<RiskAssessment>>,
    pub health: Option<HealthReport>,
}

impl DashboardSnapshot {
    /// Run the whole filter-and-derive pipeline once.
    pub fn derive(catalog: &Catalog, state: &FilterState, today: NaiveDate) -> Self {
        let filtered = filter_projects(&catalog.projects, state);
        let stages = stage_funnel(&filtered);
        let pipeline = stages.as_ref().map(|f| f.pipeline_summary());

        Self {
            state: state.clone(),
            today,
            project_ids: filtered.iter().map(|p| p.id.clone()).collect(),
            kpis: kpi_summary(&filtered),
            stage_funnel: stages,
            status_funnel: status_funnel(&filtered),
            pipeline,
            category_budgets: category_rollup(&filtered, &catalog.budget_by_category),
            resources: resource_utilization(&filtered, &catalog.resource_allocation),
            business_units: business_unit_shares(&filtered),
            companies: company_shares(&filtered),
            s_curve: s_curve(&filtered, &catalog.s_curve_data),
            schedule: schedule_layout(&filtered, &catalog.gantt_tasks),
            milestones: upcoming_milestones(&filtered, &catalog.milestones),
            risks: risk_register(&filtered, &catalog.risk_assessment)
                .map(|rows| rows.into_iter().cloned().collect()),
            health: project_health(&filtered, today),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.project_ids.is_empty()
    }
}

/// One user's view of a shared catalog. The filter state is owned here and
/// only changes through [`DashboardSession::dispatch`].
pub struct DashboardSession {
    catalog: Arc<Catalog>,
    state: FilterState,
    today: NaiveDate,
    cached: Option<DashboardSnapshot>,
    recomputations: usize,
}

impl DashboardSession {
    pub fn new(catalog: Arc<Catalog>, today: NaiveDate) -> Self {
        Self {
            catalog,
            state: FilterState::default(),
            today,
            cached: None,
            recomputations: 0,
        }
    }

    pub fn with_state(mut self, state: FilterState) -> Self {
        self.state = state;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn dispatch(&mut self, action: FilterAction) {
        debug!(action = ?action, "Dispatching filter action");
        self.state = self.state.apply(action);
    }

    pub fn replay<I>(&mut self, actions: I)
    where
        I: IntoIterator<Item = FilterAction>,
    {
        for action in actions {
            self.dispatch(action);
        }
    }

    pub fn filtered(&self) -> Vec<&Project> {
        filter_projects(&self.catalog.projects, &self.state)
    }

    /// Options come from the whole catalog so a value never disappears from
    /// the panel while it is selected.
    pub fn options(&self) -> FilterOptions {
        FilterOptions::from_projects(&self.catalog.projects)
    }

    /// The derived views for the current state. Recomputed only when the
    /// state differs from the one the cached snapshot was built for.
    pub fn snapshot(&mut self) -> &DashboardSnapshot {
        let snapshot = match self.cached.take() {
            Some(snapshot) if snapshot.state == self.state => snapshot,
            _ => {
                let snapshot = DashboardSnapshot::derive(&self.catalog, &self.state, self.today);
                self.recomputations += 1;
                debug!(
                    filtered = snapshot.project_ids.len(),
                    recomputations = self.recomputations,
                    "Dashboard recomputed"
                );
                snapshot
            }
        };
        self.cached.insert(snapshot)
    }

    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}

/// Read a recorded action log: a JSON array of `{"type": ..., "payload": ...}`.
pub fn load_action_log(path: &Path) -> Result<Vec<FilterAction>> {
    let raw = std::fs::read_to_string(path).map_err(|source| DashboardError::ActionLogRead {
        path: path.to_path_buf(),
        source,
    })?;
    let actions: Vec<FilterAction> =
        serde_json::from_str(&raw).map_err(|source| DashboardError::ActionLogParse {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), actions = actions.len(), "Action log loaded");
    Ok(actions)
}
