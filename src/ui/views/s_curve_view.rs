use crate::services::s_curve_service::SCurvePoint;
use crate::ui::widgets::{Panel, RenderOptions};
use crate::utils::format::{format_date, format_percentage};
use crate::utils::palette::Tone;

const TITLE: &str = "S-Curve Progress";

pub fn render(points: Option<&[SCurvePoint]>, options: &RenderOptions) -> String {
    let Some(points) = points else {
        return Panel::no_data(TITLE);
    };

    let mut panel = Panel::new(TITLE);
    panel.line(format!(
        "{:<14} {:>8} {:>8} {:>8} {:>14} {:>14}",
        "Date", "Planned", "Actual", "Var", "Planned Cost", "Actual Cost"
    ));
    for point in points {
        let tone = if point.progress_variance < 0.0 {
            Tone::Red
        } else {
            Tone::Green
        };
        let variance = format!("{:>8}", format_percentage(point.progress_variance));
        panel.line(format!(
            "{:<14} {:>8} {:>8} {} {:>14} {:>14}",
            format_date(point.date),
            format_percentage(point.planned_progress),
            format_percentage(point.actual_progress),
            options.paint(tone, &variance),
            options.currency(point.planned_cost),
            options.currency(point.actual_cost),
        ));
    }
    panel.render()
}
