use serde::Serialize;
use std::collections::HashSet;

use crate::domain::project::Project;
use crate::domain::resource::ResourceAllocation;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUtilization {
    pub rows: Vec<ResourceAllocation>,
    pub total_utilized: f64,
    pub total_capacity: f64,
    /// Whole percent, rounded.
    pub utilization_percentage: f64,
}

/// Allocation rows for the departments that still have projects after filtering.
pub fn resource_utilization(
    projects: &[&Project],
    allocations: &[ResourceAllocation],
) -> Option<ResourceUtilization> {
    if projects.is_empty() {
        return None;
    }

    let departments: HashSet<&str> = projects.iter().map(|p| p.department.as_str()).collect();
    let rows: Vec<ResourceAllocation> = allocations
        .iter()
        .filter(|row| departments.contains(row.department.as_str()))
        .cloned()
        .collect();

    let total_utilized: f64 = rows.iter().map(|r| r.utilized).sum();
    let total_capacity: f64 = rows.iter().map(|r| r.capacity).sum();
    let utilization_percentage = if total_capacity > 0.0 {
        (total_utilized / total_capacity * 100.0).round()
    } else {
        0.0
    };

    Some(ResourceUtilization {
        rows,
        total_utilized,
        total_capacity,
        utilization_percentage,
    })
}
