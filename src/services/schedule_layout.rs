use chrono::{Months, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;

use crate::domain::project::{Priority, Project};
use crate::domain::task::ScheduleTask;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GanttBar {
    pub task_id: String,
    pub task_name: String,
    pub project_id: String,
    pub project_name: String,
    pub assignee: String,
    pub priority: Priority,
    pub progress: f64,
    pub complete: bool,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Distance from the span start as a fraction of the span.
    pub offset: f64,
    /// Bar length as a fraction of the span, at least one day.
    pub width: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleLayout {
    pub span_start: NaiveDate,
    pub span_end: NaiveDate,
    pub span_days: i64,
    pub bars: Vec<GanttBar>,
    /// Span start plus N months for N = 0, 1, .. while not past the span end.
    pub month_headers: Vec<NaiveDate>,
}

/// Lay out the tasks of the filtered projects on a shared time axis spanning
/// every task and project date.
pub fn schedule_layout(projects: &[&Project], tasks: &[ScheduleTask]) -> Option<ScheduleLayout> {
    let by_id: HashMap<&str, &Project> = projects.iter().map(|p| (p.id.as_str(), *p)).collect();
    let joined: Vec<(&ScheduleTask, &Project)> = tasks
        .iter()
        .filter_map(|t| by_id.get(t.project_id.as_str()).map(|p| (t, *p)))
        .collect();

    if joined.is_empty() {
        return None;
    }

    let all_dates = joined
        .iter()
        .flat_map(|(t, _)| [t.start_date, t.end_date])
        .chain(projects.iter().flat_map(|p| [p.start_date, p.end_date]));
    let (span_start, span_end) = all_dates.fold(
        (NaiveDate::MAX, NaiveDate::MIN),
        |(lo, hi), d| (lo.min(d), hi.max(d)),
    );
    let span_days = (span_end - span_start).num_days();
    let divisor = span_days.max(1) as f64;

    let bars = joined
        .into_iter()
        .map(|(task, project)| {
            let offset_days = (task.start_date - span_start).num_days().max(0);
            let duration_days = task.duration_days().max(1);
            GanttBar {
                task_id: task.id.clone(),
                task_name: task.name.clone(),
                project_id: project.id.clone(),
                project_name: project.name.clone(),
                assignee: task.assignee.clone(),
                priority: task.priority,
                progress: task.progress,
                complete: task.is_complete(),
                start_date: task.start_date,
                end_date: task.end_date,
                offset: offset_days as f64 / divisor,
                width: duration_days as f64 / divisor,
            }
        })
        .collect();

    Some(ScheduleLayout {
        span_start,
        span_end,
        span_days,
        bars,
        month_headers: month_headers(span_start, span_end),
    })
}

fn month_headers(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    (0u32..)
        .map_while(|i| start.checked_add_months(Months::new(i)))
        .take_while(|d| *d <= end)
        .collect()
}
