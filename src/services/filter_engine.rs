use serde::Serialize;
use std::collections::BTreeSet;

use crate::domain::project::Project;
use crate::services::filter_state::{FilterDimension, FilterState};

/// The value a project contributes to one filterable dimension.
pub fn dimension_value(project: &Project, dimension: FilterDimension) -> &str {
    match dimension {
        FilterDimension::Project => &project.id,
        FilterDimension::Status => project.status.as_str(),
        FilterDimension::FelStage => project.fel_stage.as_str(),
        FilterDimension::Department => &project.department,
        FilterDimension::BusinessUnit => &project.business_unit,
        FilterDimension::Company => &project.company,
        FilterDimension::Priority => project.priority.as_str(),
        FilterDimension::Category => project.category.as_str(),
    }
}

/// Narrow `projects` to those passing every active predicate.
///
/// Membership predicates run first in dimension order, then the date overlap
/// (only with both bounds set), then the case-insensitive search. The result
/// borrows from `projects` and keeps catalog order.
pub fn filter_projects<'a>(projects: &'a [Project], state: &FilterState) -> Vec<&'a Project> {
    let mut filtered: Vec<&Project> = projects.iter().collect();

    for dimension in FilterDimension::ALL {
        let selected = state.selected(dimension);
        if selected.is_empty() {
            continue;
        }
        filtered.retain(|project| selected.contains(dimension_value(project, dimension)));
    }

    if let Some((start, end)) = state.date_range.bounds() {
        filtered.retain(|project| project.overlaps(start, end));
    }

    if !state.search_query.is_empty() {
        let query = state.search_query.to_lowercase();
        filtered.retain(|project| project.matches_search(&query));
    }

    filtered
}

/// Distinct values per dimension, in first-seen catalog order.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub statuses: Vec<String>,
    pub fel_stages: Vec<String>,
    pub departments: Vec<String>,
    pub business_units: Vec<String>,
    pub companies: Vec<String>,
    pub priorities: Vec<String>,
    pub categories: Vec<String>,
}

impl FilterOptions {
    pub fn from_projects(projects: &[Project]) -> Self {
        let distinct = |dimension: FilterDimension| -> Vec<String> {
            let mut seen = BTreeSet::new();
            projects
                .iter()
                .map(|p| dimension_value(p, dimension))
                .filter(|value| seen.insert(*value))
                .map(str::to_string)
                .collect()
        };

        Self {
            statuses: distinct(FilterDimension::Status),
            fel_stages: distinct(FilterDimension::FelStage),
            departments: distinct(FilterDimension::Department),
            business_units: distinct(FilterDimension::BusinessUnit),
            companies: distinct(FilterDimension::Company),
            priorities: distinct(FilterDimension::Priority),
            categories: distinct(FilterDimension::Category),
        }
    }

    pub fn for_dimension(&self, dimension: FilterDimension) -> Option<&[String]> {
        match dimension {
            FilterDimension::Project => None,
            FilterDimension::Status => Some(&self.statuses),
            FilterDimension::FelStage => Some(&self.fel_stages),
            FilterDimension::Department => Some(&self.departments),
            FilterDimension::BusinessUnit => Some(&self.business_units),
            FilterDimension::Company => Some(&self.companies),
            FilterDimension::Priority => Some(&self.priorities),
            FilterDimension::Category => Some(&self.categories),
        }
    }
}
