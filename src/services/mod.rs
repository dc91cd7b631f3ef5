pub mod budget_service;
pub mod dashboard_session;
pub mod distribution_service;
pub mod error_handling;
pub mod export_service;
pub mod filter_engine;
pub mod filter_state;
pub mod funnel_service;
pub mod health_service;
pub mod kpi_service;
pub mod milestone_service;
pub mod resource_service;
pub mod s_curve_service;
pub mod schedule_layout;

pub use dashboard_session::{DashboardSession, DashboardSnapshot};
pub use error_handling::{DashboardError, Result};
pub use export_service::{ExportFormat, ExportService};
pub use filter_engine::{filter_projects, FilterOptions};
pub use filter_state::{apply, DateRange, FilterAction, FilterDimension, FilterState, QuickFilter};
