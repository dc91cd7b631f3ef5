use chrono::NaiveDate;
use portfolio_dashboard::config::DashboardConfig;
use portfolio_dashboard::domain::project::ProjectHealth;
use portfolio_dashboard::repository::Catalog;
use portfolio_dashboard::services::dashboard_session::load_action_log;
use portfolio_dashboard::services::export_service::ExportedProject;
use portfolio_dashboard::services::{
    DashboardError, DashboardSession, ExportFormat, ExportService, FilterAction, QuickFilter,
};
use portfolio_dashboard::ui::{render_dashboard, RenderOptions};
use std::sync::Arc;
use tempfile::tempdir;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

#[test]
fn test_session_round_trip_through_catalog_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("portfolio.json");
    std::fs::write(&path, Catalog::seed().to_json().unwrap()).unwrap();

    let catalog = Arc::new(Catalog::load(&path).unwrap());
    assert_eq!(*catalog, Catalog::seed());

    let mut session = DashboardSession::new(Arc::clone(&catalog), today());
    session.dispatch(FilterAction::SetQuickFilter(QuickFilter::Active));
    session.dispatch(FilterAction::ToggleDepartment("IT".into()));

    let snapshot = session.snapshot();
    assert_eq!(snapshot.project_ids, vec!["PRJ-001", "PRJ-006"]);
    let kpis = snapshot.kpis.as_ref().unwrap();
    assert_eq!(kpis.total_budget, 3_700_000.0);
    assert_eq!(kpis.critical_projects, 2);

    let milestones = snapshot.milestones.as_ref().unwrap();
    let names: Vec<&str> = milestones.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Phase 1 Complete", "Security Audit Complete", "System Go-Live"]
    );

    let schedule = snapshot.schedule.as_ref().unwrap();
    assert_eq!(schedule.bars.len(), 4);
    assert!(schedule.bars.iter().all(|b| b.project_id == "PRJ-001"));
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let mut catalog = Catalog::seed();
    let copy = catalog.projects[0].clone();
    catalog.projects.push(copy);

    let dir = tempdir().unwrap();
    let path = dir.path().join("dupes.json");
    std::fs::write(&path, catalog.to_json().unwrap()).unwrap();

    match Catalog::load(&path) {
        Err(DashboardError::DuplicateProjectId { id }) => assert_eq!(id, "PRJ-001"),
        other => panic!("expected duplicate id error, got {:?}", other.map(|c| c.projects.len())),
    }
}

#[test]
fn test_s_curve_for_seed_portfolio() {
    let mut session = DashboardSession::new(Arc::new(Catalog::seed()), today());
    let points = session.snapshot().s_curve.clone().unwrap();

    assert!(points.windows(2).all(|w| w[0].date < w[1].date));
    let total_samples: usize = points.iter().map(|p| p.sample_count).sum();
    assert_eq!(total_samples, 15);
}

#[test]
fn test_health_uses_session_date() {
    let mut session = DashboardSession::new(Arc::new(Catalog::seed()), today());
    session.dispatch(FilterAction::ToggleProject("PRJ-006".into()));

    // 35% complete with 121 days left is not yet behind
    let report = session.snapshot().health.clone().unwrap();
    assert_eq!(report.rows[0].health, ProjectHealth::Good);

    let late = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
    let mut session = DashboardSession::new(Arc::new(Catalog::seed()), late)
        .with_state(session.state().clone());
    let report = session.snapshot().health.clone().unwrap();
    assert_eq!(report.rows[0].health, ProjectHealth::Warning);
}

#[test]
fn test_replayed_log_matches_direct_dispatch() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("actions.json");
    let actions = vec![
        FilterAction::ToggleCompany("TechCorp".into()),
        FilterAction::SetSearchQuery("security".into()),
    ];
    std::fs::write(&path, serde_json::to_string(&actions).unwrap()).unwrap();

    let mut replayed = DashboardSession::new(Arc::new(Catalog::seed()), today());
    replayed.replay(load_action_log(&path).unwrap());

    let mut direct = DashboardSession::new(Arc::new(Catalog::seed()), today());
    for action in actions {
        direct.dispatch(action);
    }

    assert_eq!(replayed.state(), direct.state());
    assert_eq!(replayed.snapshot().project_ids, vec!["PRJ-006"]);
}

#[test]
fn test_render_with_config_currency() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, "currency_symbol = \"€\"\ncolor = false\n").unwrap();
    let config = DashboardConfig::load_from(&config_path).unwrap();

    let mut session = DashboardSession::new(Arc::new(Catalog::seed()), today());
    session.dispatch(FilterAction::SetQuickFilter(QuickFilter::Active));
    let text = render_dashboard(session.snapshot(), &RenderOptions::from_config(&config));

    assert!(text.contains("€27,600,000"));
    assert!(text.contains("1 active filters | Status: Active"));
    assert!(!text.contains('\x1b'));
}

#[test]
fn test_export_every_format() {
    let catalog = Arc::new(Catalog::seed());
    let exporter = ExportService::new(Arc::clone(&catalog));
    let state = QuickFilter::Completed.preset();
    let dir = tempdir().unwrap();

    let json_path = dir.path().join("out.json");
    exporter.export_to_file(&state, ExportFormat::Json, &json_path).unwrap();
    let exported: Vec<ExportedProject> =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(exported.len(), 1);
    assert_eq!(exported[0].id, "PRJ-005");
    assert_eq!(exported[0].fel_stage, "Operate");

    let csv = exporter.export(&state, ExportFormat::Csv).unwrap();
    assert_eq!(csv.lines().count(), 2);

    let markdown = exporter.export(&state, ExportFormat::Markdown).unwrap();
    assert!(markdown.contains("## Operate - Operations (1)"));
    assert!(markdown.contains("Supply Chain Optimization"));
}
