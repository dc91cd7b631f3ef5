use crate::domain::project::FelStage;
use crate::services::funnel_service::{PipelineSummary, StageFunnel};
use crate::ui::widgets::{Panel, RenderOptions};
use crate::utils::format::format_percentage;
use crate::utils::palette::stage_tone;

const TITLE: &str = "FEL Pipeline";

/// Stage cards in progression order followed by the pipeline totals.
pub fn render(funnel: Option<&StageFunnel>, summary: Option<&PipelineSummary>, options: &RenderOptions) -> String {
    let (Some(funnel), Some(summary)) = (funnel, summary) else {
        return Panel::no_data(TITLE);
    };

    let mut panel = Panel::new(TITLE);
    for stage in FelStage::ALL {
        let Some(row) = funnel.row(stage) else {
            continue;
        };
        panel
            .line(options.paint(stage_tone(stage.as_str()), stage.label()))
            .line(format!("  {}", stage.description()))
            .line(format!(
                "  {} projects | {} budget | {} avg progress",
                row.project_count,
                options.currency(row.total_budget),
                format_percentage(row.avg_progress)
            ));
        if row.critical_count > 0 || row.high_risk_count > 0 {
            panel.line(format!(
                "  {} critical, {} high risk",
                row.critical_count, row.high_risk_count
            ));
        }
    }

    panel.blank().line(format!(
        "Early stage: {} | In development: {} | Pipeline value: {} | Critical: {}",
        summary.early_stage_count,
        summary.development_count,
        options.currency(summary.total_budget),
        summary.critical_total
    ));
    panel.render()
}
