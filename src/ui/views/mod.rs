pub mod distribution_view;
pub mod filters_view;
pub mod funnel_view;
pub mod gantt_view;
pub mod health_view;
pub mod kpi_cards;
pub mod milestone_view;
pub mod pipeline_view;
pub mod resource_budget_view;
pub mod s_curve_view;
