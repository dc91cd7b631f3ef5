use crate::domain::project::ProjectHealth;
use crate::services::health_service::HealthReport;
use crate::ui::widgets::{Panel, RenderOptions};
use crate::utils::format::{format_date, format_percentage};
use crate::utils::palette::Tone;

const TITLE: &str = "Project Health";

fn tone(health: ProjectHealth) -> Tone {
    match health {
        ProjectHealth::Excellent => Tone::Emerald,
        ProjectHealth::Good => Tone::Blue,
        ProjectHealth::Warning => Tone::Yellow,
        ProjectHealth::Critical => Tone::Red,
    }
}

pub fn render(report: Option<&HealthReport>, options: &RenderOptions) -> String {
    let Some(report) = report else {
        return Panel::no_data(TITLE);
    };

    let mut panel = Panel::new(TITLE);
    panel.line(format!("As of {}", format_date(report.today)));
    for row in &report.rows {
        let label = format!("{:<9}", row.health.as_str());
        let days = if row.days_remaining >= 0 {
            format!("{} days left", row.days_remaining)
        } else {
            format!("ended {} days ago", -row.days_remaining)
        };
        panel.line(format!(
            "{} {:<36} variance {:>7}  {}",
            options.paint(tone(row.health), &label),
            row.project_name,
            format_percentage(row.budget_variance),
            days
        ));
    }

    let counts: Vec<String> = [
        ProjectHealth::Excellent,
        ProjectHealth::Good,
        ProjectHealth::Warning,
        ProjectHealth::Critical,
    ]
    .iter()
    .map(|h| format!("{} {}", h.as_str(), report.count(*h)))
    .collect();
    panel.blank().line(counts.join(" | "));
    panel.render()
}
