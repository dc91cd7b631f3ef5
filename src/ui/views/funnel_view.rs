use std::fmt::Display;

use crate::services::funnel_service::{Funnel, StageFunnel, StatusFunnel};
use crate::ui::widgets::{meter, Panel, RenderOptions};
use crate::utils::format::format_percentage;
use crate::utils::palette::{stage_tone, status_tone, Tone};

const BAR_COLUMNS: usize = 24;

fn funnel_rows<K>(panel: &mut Panel, funnel: &Funnel<K>, tone_of: fn(&str) -> Tone, options: &RenderOptions)
where
    K: Copy + PartialEq + Display,
{
    for row in &funnel.rows {
        let label = row.key.to_string();
        panel.line(format!(
            "{:<10} {} {:>3} {:>7}  {:>13}  avg {:>6}  crit {} / high risk {}",
            label,
            options.paint(tone_of(&label), &meter(row.width_percentage, BAR_COLUMNS)),
            row.project_count,
            format_percentage(row.conversion_rate),
            options.currency(row.total_budget),
            format_percentage(row.avg_progress),
            row.critical_count,
            row.high_risk_count,
        ));
    }
}

fn insights<K>(panel: &mut Panel, funnel: &Funnel<K>, options: &RenderOptions)
where
    K: Copy + PartialEq + Display,
{
    if let Some(insights) = funnel.insights() {
        panel.blank().line(format!(
            "Largest: {} | Budget: {} | Critical: {} | High risk: {}",
            insights.largest_bucket,
            options.currency(insights.total_budget),
            insights.critical_total,
            insights.high_risk_total,
        ));
    }
}

pub fn render_stage_funnel(funnel: Option<&StageFunnel>, options: &RenderOptions) -> String {
    const TITLE: &str = "FEL Stage Funnel";
    let Some(funnel) = funnel else {
        return Panel::no_data(TITLE);
    };

    let mut panel = Panel::new(TITLE);
    funnel_rows(&mut panel, funnel, stage_tone, options);
    insights(&mut panel, funnel, options);
    panel.render()
}

pub fn render_status_funnel(funnel: Option<&StatusFunnel>, options: &RenderOptions) -> String {
    const TITLE: &str = "Status Funnel";
    let Some(funnel) = funnel else {
        return Panel::no_data(TITLE);
    };

    let mut panel = Panel::new(TITLE);
    funnel_rows(&mut panel, funnel, status_tone, options);
    insights(&mut panel, funnel, options);
    panel.line(format!(
        "Active rate: {} | Completion rate: {}",
        format_percentage(funnel.active_rate()),
        format_percentage(funnel.completion_rate()),
    ));
    panel.render()
}
