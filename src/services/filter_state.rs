use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::domain::project::{Priority, ProjectStatus};
use crate::services::error_handling::DashboardError;

/// The user's current narrowing criteria. An empty set places no
/// restriction on its dimension.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub selected_projects: BTreeSet<String>,
    pub selected_statuses: BTreeSet<String>,
    #[serde(rename = "selectedFELStages")]
    pub selected_fel_stages: BTreeSet<String>,
    pub selected_departments: BTreeSet<String>,
    pub selected_business_units: BTreeSet<String>,
    pub selected_companies: BTreeSet<String>,
    pub selected_priorities: BTreeSet<String>,
    pub selected_categories: BTreeSet<String>,
    pub date_range: DateRange,
    pub search_query: String,
}

/// Only applied when both bounds are present.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FilterDimension {
    Project,
    Status,
    FelStage,
    Department,
    BusinessUnit,
    Company,
    Priority,
    Category,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum QuickFilter {
    Active,
    Critical,
    AtRisk,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterAction {
    ToggleProject(String),
    ToggleStatus(String),
    ToggleFelStage(String),
    ToggleDepartment(String),
    ToggleBusinessUnit(String),
    ToggleCompany(String),
    TogglePriority(String),
    ToggleCategory(String),
    SetDateRange(DateRange),
    SetSearchQuery(String),
    ClearFilters,
    SetQuickFilter(QuickFilter),
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Both bounds, or nothing. A lone bound is ignored by the filter.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

impl FilterDimension {
    pub const ALL: [FilterDimension; 8] = [
        FilterDimension::Project,
        FilterDimension::Status,
        FilterDimension::FelStage,
        FilterDimension::Department,
        FilterDimension::BusinessUnit,
        FilterDimension::Company,
        FilterDimension::Priority,
        FilterDimension::Category,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            FilterDimension::Project => "Project",
            FilterDimension::Status => "Status",
            FilterDimension::FelStage => "FEL Stage",
            FilterDimension::Department => "Department",
            FilterDimension::BusinessUnit => "Business Unit",
            FilterDimension::Company => "Company",
            FilterDimension::Priority => "Priority",
            FilterDimension::Category => "Category",
        }
    }
}

impl QuickFilter {
    pub const ALL: [QuickFilter; 4] = [
        QuickFilter::Active,
        QuickFilter::Critical,
        QuickFilter::AtRisk,
        QuickFilter::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuickFilter::Active => "active",
            QuickFilter::Critical => "critical",
            QuickFilter::AtRisk => "at-risk",
            QuickFilter::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuickFilter::Active => "Active Projects",
            QuickFilter::Critical => "Critical Priority",
            QuickFilter::AtRisk => "At Risk",
            QuickFilter::Completed => "Completed",
        }
    }

    /// The preset this quick filter installs, discarding everything else.
    pub fn preset(&self) -> FilterState {
        let mut state = FilterState::default();
        match self {
            QuickFilter::Active => {
                state.selected_statuses = labels([ProjectStatus::Active.as_str()]);
            }
            QuickFilter::Critical => {
                state.selected_priorities = labels([Priority::Critical.as_str()]);
            }
            QuickFilter::AtRisk => {
                state.selected_statuses = labels([ProjectStatus::Active.as_str()]);
                state.selected_priorities =
                    labels([Priority::High.as_str(), Priority::Critical.as_str()]);
            }
            QuickFilter::Completed => {
                state.selected_statuses = labels([ProjectStatus::Completed.as_str()]);
            }
        }
        state
    }
}

fn labels<const N: usize>(values: [&str; N]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl fmt::Display for QuickFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuickFilter {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuickFilter::ALL
            .into_iter()
            .find(|quick| quick.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownQuickFilter {
                name: s.to_string(),
            })
    }
}

impl FilterAction {
    pub fn toggle(dimension: FilterDimension, value: impl Into<String>) -> Self {
        let value = value.into();
        match dimension {
            FilterDimension::Project => FilterAction::ToggleProject(value),
            FilterDimension::Status => FilterAction::ToggleStatus(value),
            FilterDimension::FelStage => FilterAction::ToggleFelStage(value),
            FilterDimension::Department => FilterAction::ToggleDepartment(value),
            FilterDimension::BusinessUnit => FilterAction::ToggleBusinessUnit(value),
            FilterDimension::Company => FilterAction::ToggleCompany(value),
            FilterDimension::Priority => FilterAction::TogglePriority(value),
            FilterDimension::Category => FilterAction::ToggleCategory(value),
        }
    }
}

impl FilterState {
    pub fn selected(&self, dimension: FilterDimension) -> &BTreeSet<String> {
        match dimension {
            FilterDimension::Project => &self.selected_projects,
            FilterDimension::Status => &self.selected_statuses,
            FilterDimension::FelStage => &self.selected_fel_stages,
            FilterDimension::Department => &self.selected_departments,
            FilterDimension::BusinessUnit => &self.selected_business_units,
            FilterDimension::Company => &self.selected_companies,
            FilterDimension::Priority => &self.selected_priorities,
            FilterDimension::Category => &self.selected_categories,
        }
    }

    fn selected_mut(&mut self, dimension: FilterDimension) -> &mut BTreeSet<String> {
        match dimension {
            FilterDimension::Project => &mut self.selected_projects,
            FilterDimension::Status => &mut self.selected_statuses,
            FilterDimension::FelStage => &mut self.selected_fel_stages,
            FilterDimension::Department => &mut self.selected_departments,
            FilterDimension::BusinessUnit => &mut self.selected_business_units,
            FilterDimension::Company => &mut self.selected_companies,
            FilterDimension::Priority => &mut self.selected_priorities,
            FilterDimension::Category => &mut self.selected_categories,
        }
    }

    pub fn has_active_filters(&self) -> bool {
        self.active_filter_count() > 0
    }

    /// Selected values across all dimensions, plus one each for a date range
    /// and a search query.
    pub fn active_filter_count(&self) -> usize {
        let selections: usize = FilterDimension::ALL
            .iter()
            .map(|d| self.selected(*d).len())
            .sum();
        let date = usize::from(!self.date_range.is_empty());
        let search = usize::from(!self.search_query.is_empty());
        selections + date + search
    }

    /// Pure transition: the same state and action always yield the same result.
    pub fn apply(&self, action: FilterAction) -> FilterState {
        match action {
            FilterAction::ToggleProject(v) => self.toggled(FilterDimension::Project, v),
            FilterAction::ToggleStatus(v) => self.toggled(FilterDimension::Status, v),
            FilterAction::ToggleFelStage(v) => self.toggled(FilterDimension::FelStage, v),
            FilterAction::ToggleDepartment(v) => self.toggled(FilterDimension::Department, v),
            FilterAction::ToggleBusinessUnit(v) => self.toggled(FilterDimension::BusinessUnit, v),
            FilterAction::ToggleCompany(v) => self.toggled(FilterDimension::Company, v),
            FilterAction::TogglePriority(v) => self.toggled(FilterDimension::Priority, v),
            FilterAction::ToggleCategory(v) => self.toggled(FilterDimension::Category, v),
            FilterAction::SetDateRange(range) => FilterState {
                date_range: range,
                ..self.clone()
            },
            FilterAction::SetSearchQuery(query) => FilterState {
                search_query: query,
                ..self.clone()
            },
            FilterAction::ClearFilters => FilterState::default(),
            FilterAction::SetQuickFilter(quick) => quick.preset(),
        }
    }

    fn toggled(&self, dimension: FilterDimension, value: String) -> FilterState {
        let mut next = self.clone();
        let set = next.selected_mut(dimension);
        if !set.remove(&value) {
            set.insert(value);
        }
        next
    }
}

/// Reducer entry point.
pub fn apply(state: &FilterState, action: FilterAction) -> FilterState {
    state.apply(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn busy_state() -> FilterState {
        let state = FilterState::default()
            .apply(FilterAction::ToggleDepartment("IT".into()))
            .apply(FilterAction::ToggleCategory("Digital".into()))
            .apply(FilterAction::ToggleStatus("Planning".into()))
            .apply(FilterAction::SetSearchQuery("chen".into()));
        state.apply(FilterAction::SetDateRange(DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1),
            NaiveDate::from_ymd_opt(2024, 6, 30),
        )))
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = FilterState::default();
        assert!(!state.has_active_filters());
        assert_eq!(state.active_filter_count(), 0);
        assert!(state.date_range.bounds().is_none());
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let state = FilterState::default();
        let once = state.apply(FilterAction::ToggleStatus("Active".into()));
        assert_eq!(once.selected_statuses, set(&["Active"]));

        let twice = once.apply(FilterAction::ToggleStatus("Active".into()));
        assert_eq!(twice, state);
    }

    #[rstest]
    #[case(FilterDimension::Project, "PRJ-001")]
    #[case(FilterDimension::Status, "Active")]
    #[case(FilterDimension::FelStage, "FEL 2")]
    #[case(FilterDimension::Department, "IT")]
    #[case(FilterDimension::BusinessUnit, "Technology")]
    #[case(FilterDimension::Company, "TechCorp")]
    #[case(FilterDimension::Priority, "Critical")]
    #[case(FilterDimension::Category, "Digital")]
    fn test_toggle_only_touches_its_dimension(
        #[case] dimension: FilterDimension,
        #[case] value: &str,
    ) {
        let before = busy_state();
        let after = before.apply(FilterAction::toggle(dimension, value));

        for other in FilterDimension::ALL {
            if other == dimension {
                assert_ne!(after.selected(other), before.selected(other));
            } else {
                assert_eq!(after.selected(other), before.selected(other));
            }
        }
        assert_eq!(after.date_range, before.date_range);
        assert_eq!(after.search_query, before.search_query);

        let restored = after.apply(FilterAction::toggle(dimension, value));
        assert_eq!(restored, before);
    }

    #[test]
    fn test_set_date_range_does_not_validate_order() {
        let reversed = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 12, 31),
            NaiveDate::from_ymd_opt(2024, 1, 1),
        );
        let state = FilterState::default().apply(FilterAction::SetDateRange(reversed));
        assert_eq!(state.date_range, reversed);
    }

    #[test]
    fn test_lone_bound_has_no_bounds() {
        let range = DateRange::new(NaiveDate::from_ymd_opt(2024, 1, 1), None);
        assert!(range.bounds().is_none());
        assert!(!range.is_empty());
    }

    #[test]
    fn test_clear_filters_from_any_state() {
        assert_eq!(busy_state().apply(FilterAction::ClearFilters), FilterState::default());
        assert_eq!(
            FilterState::default().apply(FilterAction::ClearFilters),
            FilterState::default()
        );
    }

    #[rstest]
    #[case(QuickFilter::Active, &["Active"], &[])]
    #[case(QuickFilter::Critical, &[], &["Critical"])]
    #[case(QuickFilter::AtRisk, &["Active"], &["High", "Critical"])]
    #[case(QuickFilter::Completed, &["Completed"], &[])]
    fn test_quick_filter_replaces_state(
        #[case] quick: QuickFilter,
        #[case] statuses: &[&str],
        #[case] priorities: &[&str],
    ) {
        let state = apply(&busy_state(), FilterAction::SetQuickFilter(quick));

        assert_eq!(state.selected_statuses, set(statuses));
        assert_eq!(state.selected_priorities, set(priorities));
        assert!(state.selected_departments.is_empty());
        assert!(state.selected_categories.is_empty());
        assert!(state.date_range.is_empty());
        assert!(state.search_query.is_empty());
    }

    #[test]
    fn test_apply_is_deterministic() {
        let state = busy_state();
        let action = FilterAction::TogglePriority("High".into());
        assert_eq!(state.apply(action.clone()), state.apply(action));
    }

    #[test]
    fn test_active_filter_count() {
        assert_eq!(busy_state().active_filter_count(), 5);
    }

    #[test]
    fn test_quick_filter_parsing() {
        assert_eq!("at-risk".parse::<QuickFilter>().unwrap(), QuickFilter::AtRisk);
        assert_eq!("completed".parse::<QuickFilter>().unwrap(), QuickFilter::Completed);
        assert!(matches!(
            "urgent".parse::<QuickFilter>(),
            Err(DashboardError::UnknownQuickFilter { .. })
        ));
    }

    #[test]
    fn test_action_wire_format() {
        let json = serde_json::to_string(&FilterAction::ToggleFelStage("FEL 1".into())).unwrap();
        assert_eq!(json, r#"{"type":"TOGGLE_FEL_STAGE","payload":"FEL 1"}"#);

        let clear: FilterAction = serde_json::from_str(r#"{"type":"CLEAR_FILTERS"}"#).unwrap();
        assert_eq!(clear, FilterAction::ClearFilters);

        let quick: FilterAction =
            serde_json::from_str(r#"{"type":"SET_QUICK_FILTER","payload":"at-risk"}"#).unwrap();
        assert_eq!(quick, FilterAction::SetQuickFilter(QuickFilter::AtRisk));

        let range: FilterAction = serde_json::from_str(
            r#"{"type":"SET_DATE_RANGE","payload":{"start":"2024-01-01","end":null}}"#,
        )
        .unwrap();
        assert_eq!(
            range,
            FilterAction::SetDateRange(DateRange::new(NaiveDate::from_ymd_opt(2024, 1, 1), None))
        );
    }
}
