use chrono::Datelike;

use crate::services::schedule_layout::ScheduleLayout;
use crate::ui::widgets::{gantt_track, Panel, RenderOptions};
use crate::utils::format::{format_date, format_month, format_percentage};
use crate::utils::palette::priority_tone;

const TITLE: &str = "Project Timeline";
const LABEL_WIDTH: usize = 30;

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        format!("{:<width$}", text, width = width)
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

/// Month labels placed at their offset along the track; labels that would
/// collide with the previous one are dropped.
fn month_ruler(layout: &ScheduleLayout, columns: usize) -> String {
    let span = layout.span_days.max(1) as f64;
    let mut ruler = vec![' '; columns];
    let mut next_free = 0;

    for month in &layout.month_headers {
        let offset = (*month - layout.span_start).num_days() as f64 / span;
        let at = (offset * columns as f64).round() as usize;
        let label = if month.month() == 1 || at == 0 {
            format_month(*month)
        } else {
            month.format("%b").to_string()
        };
        if at < next_free || at + label.chars().count() > columns {
            continue;
        }
        for (i, ch) in label.chars().enumerate() {
            ruler[at + i] = ch;
        }
        next_free = at + label.chars().count() + 1;
    }

    ruler.into_iter().collect()
}

pub fn render(layout: Option<&ScheduleLayout>, options: &RenderOptions) -> String {
    let Some(layout) = layout else {
        return Panel::no_data(TITLE);
    };
    let columns = options.gantt_width;

    let mut panel = Panel::new(TITLE);
    panel
        .line(format!(
            "{} to {} ({} days)",
            format_date(layout.span_start),
            format_date(layout.span_end),
            layout.span_days
        ))
        .line(format!("{} {}", " ".repeat(LABEL_WIDTH), month_ruler(layout, columns)));

    let mut current_project = "";
    for bar in &layout.bars {
        if bar.project_id != current_project {
            panel.line(format!("{} ({})", bar.project_name, bar.project_id));
            current_project = bar.project_id.as_str();
        }
        let track = gantt_track(bar.offset, bar.width, bar.progress, columns);
        let mut row = format!(
            "  {} {} {:>6}  {}",
            truncate(&bar.task_name, LABEL_WIDTH - 2),
            options.paint(priority_tone(bar.priority.as_str()), &track),
            format_percentage(bar.progress),
            bar.assignee
        );
        if bar.complete {
            row.push_str(" (done)");
        }
        panel.line(row);
    }
    panel.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::test_project;
    use crate::repository::seed;
    use crate::services::schedule_layout::schedule_layout;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abc", 5), "abc  ");
        assert_eq!(truncate("abcdefgh", 5), "abcd…");
    }

    #[test]
    fn test_render_seed_timeline() {
        let projects = seed::projects();
        let filtered: Vec<_> = projects.iter().collect();
        let layout = schedule_layout(&filtered, &seed::gantt_tasks()).unwrap();

        let text = render(Some(&layout), &RenderOptions::plain());
        assert!(text.contains("Digital Transformation Initiative (PRJ-001)"));
        assert!(text.contains("Requirements Analysis"));
        assert!(text.contains("Sarah Chen"));
        assert!(text.contains("Jan 23"));

        let done: Vec<&str> = text.lines().filter(|l| l.ends_with(" (done)")).collect();
        assert!(done.iter().any(|l| l.contains("Requirements Analysis")));
        assert!(done.iter().all(|l| l.contains("100.0%")));
    }

    #[test]
    fn test_tracks_have_configured_width() {
        let project = test_project("A");
        let layout = schedule_layout(&[&project], &[]);
        assert!(layout.is_none());
        assert!(render(None, &RenderOptions::plain()).contains("No data"));

        let layout = ScheduleLayout {
            span_start: project.start_date,
            span_end: project.end_date,
            span_days: 365,
            bars: vec![],
            month_headers: vec![project.start_date],
        };
        let ruler = month_ruler(&layout, 20);
        assert_eq!(ruler.chars().count(), 20);
        assert!(ruler.starts_with("Jan 24"));
    }
}
