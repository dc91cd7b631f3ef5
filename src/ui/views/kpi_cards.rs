use crate::domain::project::ProjectStatus;
use crate::services::kpi_service::{KpiSummary, VarianceTrend};
use crate::ui::widgets::{Panel, RenderOptions};
use crate::utils::format::format_percentage;
use crate::utils::palette::Tone;

const TITLE: &str = "Key Metrics";

pub fn render(kpis: Option<&KpiSummary>, options: &RenderOptions) -> String {
    let Some(kpis) = kpis else {
        return Panel::no_data(TITLE);
    };

    let variance_tone = match kpis.variance_trend() {
        VarianceTrend::UnderBudget => Tone::Green,
        VarianceTrend::OnBudget => Tone::Yellow,
        VarianceTrend::OverBudget => Tone::Red,
    };
    let (schedule_label, schedule_tone) = if kpis.is_on_track() {
        ("On track", Tone::Green)
    } else {
        ("Behind schedule", Tone::Yellow)
    };

    let mut panel = Panel::new(TITLE);
    panel
        .line(format!(
            "Total Projects     {:>14}   {} active",
            kpis.total_projects,
            kpis.status_count(ProjectStatus::Active)
        ))
        .line(format!(
            "Total Budget       {:>14}   {} spent",
            options.currency(kpis.total_budget),
            options.currency(kpis.total_spent)
        ))
        .line(format!(
            "Budget Variance    {:>14}   {}",
            format_percentage(kpis.budget_variance),
            options.paint(variance_tone, kpis.variance_trend().label())
        ))
        .line(format!(
            "Avg Completion     {:>14}   {}",
            format_percentage(kpis.avg_completion),
            options.paint(schedule_tone, schedule_label)
        ))
        .line(format!(
            "Critical Projects  {:>14}",
            options.paint(Tone::Red, &kpis.critical_projects.to_string())
        ))
        .line(format!(
            "High Risk          {:>14}",
            options.paint(Tone::Orange, &kpis.high_risk_projects.to_string())
        ));

    let breakdown: Vec<String> = ProjectStatus::ALL
        .iter()
        .map(|status| format!("{} {}", status, kpis.status_count(*status)))
        .collect();
    panel.blank().line(breakdown.join(" | "));

    panel.render()
}
