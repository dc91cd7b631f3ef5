use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::domain::progress::ProgressSample;
use crate::domain::project::Project;

/// Portfolio S-curve point. Progress values are means over the samples on
/// that date; costs are totals.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SCurvePoint {
    pub date: NaiveDate,
    pub planned_progress: f64,
    pub actual_progress: f64,
    pub planned_cost: f64,
    pub actual_cost: f64,
    pub progress_variance: f64,
    pub sample_count: usize,
}

#[derive(Default)]
struct Accumulator {
    planned_progress: f64,
    actual_progress: f64,
    planned_cost: f64,
    actual_cost: f64,
    count: usize,
}

/// Samples of the filtered projects grouped by date, ascending.
pub fn s_curve(projects: &[&Project], samples: &[ProgressSample]) -> Option<Vec<SCurvePoint>> {
    let ids: HashSet<&str> = projects.iter().map(|p| p.id.as_str()).collect();

    let mut by_date: BTreeMap<NaiveDate, Accumulator> = BTreeMap::new();
    for sample in samples.iter().filter(|s| ids.contains(s.project_id.as_str())) {
        let acc = by_date.entry(sample.date).or_default();
        acc.planned_progress += sample.planned_progress;
        acc.actual_progress += sample.actual_progress;
        acc.planned_cost += sample.planned_cost;
        acc.actual_cost += sample.actual_cost;
        acc.count += 1;
    }

    if by_date.is_empty() {
        return None;
    }

    let points = by_date
        .into_iter()
        .map(|(date, acc)| {
            let (planned, actual) = if acc.count > 0 {
                let n = acc.count as f64;
                (acc.planned_progress / n, acc.actual_progress / n)
            } else {
                (0.0, 0.0)
            };
            SCurvePoint {
                date,
                planned_progress: planned,
                actual_progress: actual,
                planned_cost: acc.planned_cost,
                actual_cost: acc.actual_cost,
                progress_variance: actual - planned,
                sample_count: acc.count,
            }
        })
        .collect();

    Some(points)
}
