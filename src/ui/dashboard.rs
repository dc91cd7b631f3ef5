use crate::services::dashboard_session::DashboardSnapshot;
use crate::ui::views::{
    distribution_view, filters_view, funnel_view, gantt_view, health_view, kpi_cards,
    milestone_view, pipeline_view, resource_budget_view, s_curve_view,
};
use crate::ui::widgets::RenderOptions;

/// The full dashboard for one snapshot, top to bottom.
pub fn render_dashboard(snapshot: &DashboardSnapshot, options: &RenderOptions) -> String {
    let header = format!(
        "Portfolio Dashboard: {} projects\n{}\n",
        snapshot.project_ids.len(),
        filters_view::active_filters_line(&snapshot.state)
    );

    let sections = [
        header,
        kpi_cards::render(snapshot.kpis.as_ref(), options),
        pipeline_view::render(snapshot.stage_funnel.as_ref(), snapshot.pipeline.as_ref(), options),
        funnel_view::render_stage_funnel(snapshot.stage_funnel.as_ref(), options),
        funnel_view::render_status_funnel(snapshot.status_funnel.as_ref(), options),
        s_curve_view::render(snapshot.s_curve.as_deref(), options),
        gantt_view::render(snapshot.schedule.as_ref(), options),
        milestone_view::render_milestones(snapshot.milestones.as_deref(), options),
        resource_budget_view::render_resources(snapshot.resources.as_ref(), options),
        resource_budget_view::render_budgets(snapshot.category_budgets.as_deref(), options),
        distribution_view::render_business_units(snapshot.business_units.as_deref(), options),
        distribution_view::render_companies(snapshot.companies.as_deref(), options),
        health_view::render(snapshot.health.as_ref(), options),
        milestone_view::render_risks(snapshot.risks.as_deref(), options),
    ];

    sections.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::Catalog;
    use crate::services::filter_state::{FilterAction, FilterState};
    use crate::ui::widgets::NO_DATA;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_full_render_has_every_section() {
        let snapshot = DashboardSnapshot::derive(&Catalog::seed(), &FilterState::default(), today());
        let text = render_dashboard(&snapshot, &RenderOptions::plain());

        for title in [
            "Key Metrics",
            "FEL Pipeline",
            "FEL Stage Funnel",
            "Status Funnel",
            "S-Curve Progress",
            "Project Timeline",
            "Milestones",
            "Resource Utilization",
            "Budget by Category",
            "Business Units",
            "Companies",
            "Project Health",
            "Risk Register",
        ] {
            assert!(text.contains(&format!("== {} ==", title)), "missing {}", title);
        }
        assert!(text.contains("Portfolio Dashboard: 6 projects"));
        assert!(!text.contains(NO_DATA));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_empty_render_shows_no_data_everywhere() {
        let state = FilterState::default().apply(FilterAction::ToggleProject("PRJ-404".into()));
        let snapshot = DashboardSnapshot::derive(&Catalog::seed(), &state, today());
        let text = render_dashboard(&snapshot, &RenderOptions::plain());

        assert!(text.contains("Portfolio Dashboard: 0 projects"));
        assert_eq!(text.matches(NO_DATA).count(), 13);
    }
}
