use crate::services::budget_service::CategoryRollup;
use crate::services::resource_service::ResourceUtilization;
use crate::ui::widgets::{meter, Panel, RenderOptions};
use crate::utils::format::format_percentage;
use crate::utils::palette::{category_tone, Tone};

const BAR_COLUMNS: usize = 20;

pub fn render_resources(resources: Option<&ResourceUtilization>, options: &RenderOptions) -> String {
    const TITLE: &str = "Resource Utilization";
    let Some(resources) = resources else {
        return Panel::no_data(TITLE);
    };

    let mut panel = Panel::new(TITLE);
    if resources.rows.is_empty() {
        panel.line("No allocation rows for the departments in view");
    }
    for row in &resources.rows {
        let utilization = row.utilization_percentage();
        let tone = if utilization > 90.0 {
            Tone::Red
        } else if utilization > 75.0 {
            Tone::Yellow
        } else {
            Tone::Green
        };
        let mut line = format!(
            "{:<14} {} {:>6}  {}/{} utilized, {} allocated",
            row.department,
            options.paint(tone, &meter(utilization, BAR_COLUMNS)),
            format_percentage(utilization),
            row.utilized,
            row.capacity,
            row.allocated,
        );
        if row.is_overloaded() {
            line.push_str(&format!("  {}", options.paint(Tone::Red, "overloaded")));
        }
        panel.line(line);
    }
    panel.blank().line(format!(
        "Overall: {}/{} ({}%)",
        resources.total_utilized, resources.total_capacity, resources.utilization_percentage
    ));
    panel.render()
}

pub fn render_budgets(rollup: Option<&[CategoryRollup]>, options: &RenderOptions) -> String {
    const TITLE: &str = "Budget by Category";
    let Some(rollup) = rollup else {
        return Panel::no_data(TITLE);
    };

    let mut panel = Panel::new(TITLE);
    panel.line(format!(
        "{:<15} {:>14} {:>14} {:>14} {:>8} {:>4}",
        "Category", "Budget", "Spent", "Remaining", "Var", "#"
    ));
    for row in rollup {
        let name = format!("{:<15}", row.category.as_str());
        panel.line(format!(
            "{} {:>14} {:>14} {:>14} {:>8} {:>4}",
            options.paint(category_tone(row.category.as_str()), &name),
            options.currency(row.budget),
            options.currency(row.spent),
            options.currency(row.remaining),
            format_percentage(row.variance),
            row.projects,
        ));
    }
    panel.render()
}
