use crate::services::filter_engine::FilterOptions;
use crate::services::filter_state::{FilterDimension, FilterState, QuickFilter};
use crate::ui::widgets::{Panel, RenderOptions};
use crate::utils::format::format_date;
use crate::utils::palette::Tone;

/// One-line summary of what is narrowing the dashboard.
pub fn active_filters_line(state: &FilterState) -> String {
    if !state.has_active_filters() {
        return "No active filters".to_string();
    }

    let mut parts: Vec<String> = FilterDimension::ALL
        .iter()
        .filter(|d| !state.selected(**d).is_empty())
        .map(|d| {
            let values: Vec<&str> = state.selected(*d).iter().map(String::as_str).collect();
            format!("{}: {}", d.title(), values.join(", "))
        })
        .collect();

    if let Some((start, end)) = state.date_range.bounds() {
        parts.push(format!("Dates: {} to {}", format_date(start), format_date(end)));
    } else if !state.date_range.is_empty() {
        parts.push("Dates: incomplete range (ignored)".to_string());
    }
    if !state.search_query.is_empty() {
        parts.push(format!("Search: \"{}\"", state.search_query));
    }

    format!("{} active filters | {}", state.active_filter_count(), parts.join(" | "))
}

/// The filter panel: every option per dimension with its selection mark.
pub fn render(options_available: &FilterOptions, state: &FilterState, options: &RenderOptions) -> String {
    let mut panel = Panel::new("Filters");
    panel.line(active_filters_line(state)).blank();

    let quick: Vec<String> = QuickFilter::ALL
        .iter()
        .map(|q| format!("{} ({})", q.label(), q.as_str()))
        .collect();
    panel.line(format!("Quick filters: {}", quick.join(", ")));

    for dimension in FilterDimension::ALL {
        let Some(values) = options_available.for_dimension(dimension) else {
            continue;
        };
        let selected = state.selected(dimension);
        let entries: Vec<String> = values
            .iter()
            .map(|value| {
                if selected.contains(value) {
                    options.paint(Tone::Blue, &format!("[x] {}", value))
                } else {
                    format!("[ ] {}", value)
                }
            })
            .collect();
        panel.line(format!("{:<14} {}", dimension.title(), entries.join("  ")));
    }
    panel.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::seed;
    use crate::services::filter_state::{DateRange, FilterAction};
    use chrono::NaiveDate;

    #[test]
    fn test_no_filters() {
        assert_eq!(active_filters_line(&FilterState::default()), "No active filters");
    }

    #[test]
    fn test_summary_line() {
        let state = QuickFilter::AtRisk
            .preset()
            .apply(FilterAction::SetSearchQuery("chen".into()))
            .apply(FilterAction::SetDateRange(DateRange::new(
                NaiveDate::from_ymd_opt(2024, 1, 1),
                None,
            )));

        let line = active_filters_line(&state);
        assert!(line.starts_with("5 active filters"));
        assert!(line.contains("Status: Active"));
        assert!(line.contains("Priority: Critical, High"));
        assert!(line.contains("incomplete range"));
        assert!(line.contains("Search: \"chen\""));
    }

    #[test]
    fn test_panel_marks_selection() {
        let projects = seed::projects();
        let available = FilterOptions::from_projects(&projects);
        let state = FilterState::default().apply(FilterAction::ToggleDepartment("IT".into()));

        let text = render(&available, &state, &RenderOptions::plain());
        assert!(text.contains("[x] IT"));
        assert!(text.contains("[ ] Operations"));
        assert!(text.contains("At Risk (at-risk)"));
    }
}
