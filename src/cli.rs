use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use portfolio_dashboard::repository::Catalog;
use portfolio_dashboard::services::error_handling::LogHelper;
use portfolio_dashboard::services::{
    DateRange, ExportFormat, FilterAction, FilterDimension, FilterOptions, QuickFilter,
};

#[derive(Debug, Parser)]
#[command(name = "portfolio-dashboard")]
#[command(about = "Project portfolio analytics: KPIs, FEL funnel, S-curve and timeline")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON catalog to load instead of the built-in sample portfolio
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Date project health is measured against (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(flatten)]
    pub filters: FilterArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Render the dashboard for the selected filters (default)
    Show,
    /// List the filter values present in the catalog
    Options,
    /// Export the filtered projects
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Print config path and create default file if missing
    ConfigPath,
}

#[derive(Debug, Default, Args)]
pub struct FilterArgs {
    /// Project id (repeatable)
    #[arg(long = "project", global = true)]
    pub projects: Vec<String>,

    #[arg(long = "status", global = true)]
    pub statuses: Vec<String>,

    /// FEL stage label, e.g. "FEL 2"
    #[arg(long = "stage", global = true)]
    pub stages: Vec<String>,

    #[arg(long = "department", global = true)]
    pub departments: Vec<String>,

    #[arg(long = "business-unit", global = true)]
    pub business_units: Vec<String>,

    #[arg(long = "company", global = true)]
    pub companies: Vec<String>,

    #[arg(long = "priority", global = true)]
    pub priorities: Vec<String>,

    #[arg(long = "category", global = true)]
    pub categories: Vec<String>,

    /// Start of the date range; ignored without --to
    #[arg(long, global = true)]
    pub from: Option<NaiveDate>,

    /// End of the date range; ignored without --from
    #[arg(long, global = true)]
    pub to: Option<NaiveDate>,

    #[arg(long, global = true)]
    pub search: Option<String>,

    /// active, critical, at-risk or completed
    #[arg(long, global = true)]
    pub quick: Option<QuickFilter>,

    /// JSON action log replayed after the flags
    #[arg(long, global = true)]
    pub actions: Option<PathBuf>,
}

impl FilterArgs {
    fn selections(&self) -> [(FilterDimension, &[String]); 8] {
        [
            (FilterDimension::Project, self.projects.as_slice()),
            (FilterDimension::Status, self.statuses.as_slice()),
            (FilterDimension::FelStage, self.stages.as_slice()),
            (FilterDimension::Department, self.departments.as_slice()),
            (FilterDimension::BusinessUnit, self.business_units.as_slice()),
            (FilterDimension::Company, self.companies.as_slice()),
            (FilterDimension::Priority, self.priorities.as_slice()),
            (FilterDimension::Category, self.categories.as_slice()),
        ]
    }

    /// Flags as reducer actions. A quick filter replaces the whole state, so
    /// it goes first and the individual flags narrow it further.
    pub fn to_actions(&self, default_quick: Option<QuickFilter>) -> Vec<FilterAction> {
        let mut actions = Vec::new();

        if let Some(quick) = self.quick.or(default_quick) {
            actions.push(FilterAction::SetQuickFilter(quick));
        }
        for (dimension, values) in self.selections() {
            actions.extend(values.iter().map(|v| FilterAction::toggle(dimension, v.clone())));
        }
        if self.from.is_some() || self.to.is_some() {
            actions.push(FilterAction::SetDateRange(DateRange::new(self.from, self.to)));
        }
        if let Some(search) = &self.search {
            actions.push(FilterAction::SetSearchQuery(search.clone()));
        }
        actions
    }

    /// Flag values the catalog never uses, in flag order.
    pub fn unknown_values(&self, catalog: &Catalog) -> Vec<(FilterDimension, String)> {
        let options = FilterOptions::from_projects(&catalog.projects);
        let mut unknown = Vec::new();
        for (dimension, values) in self.selections() {
            for value in values {
                let known = match options.for_dimension(dimension) {
                    Some(known) => known.iter().any(|k| k == value),
                    None => catalog.project(value).is_some(),
                };
                if !known {
                    unknown.push((dimension, value.clone()));
                }
            }
        }
        unknown
    }

    /// Warn about flag values the catalog never uses; they still apply.
    pub fn warn_unknown_values(&self, catalog: &Catalog) {
        for (dimension, value) in self.unknown_values(catalog) {
            LogHelper::log_rejected_input(dimension.title(), &value, "not present in catalog");
        }
        if self.from.is_some() != self.to.is_some() {
            LogHelper::log_rejected_input("date range", "", "both --from and --to are required");
        }
    }
}
