use serde::Serialize;

use crate::domain::project::Project;
use crate::utils::palette::{cycle_color, BUSINESS_UNIT_COLORS, COMPANY_COLORS};

/// One pie slice.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Share {
    pub name: String,
    pub project_count: usize,
    pub budget: f64,
    pub percentage: f64,
    pub color: &'static str,
}

fn shares<'a, F>(projects: &[&'a Project], palette: &[&'static str], key_of: F) -> Option<Vec<Share>>
where
    F: Fn(&'a Project) -> &'a str,
{
    if projects.is_empty() {
        return None;
    }

    let mut names: Vec<&str> = Vec::new();
    for project in projects {
        let name = key_of(*project);
        if !names.contains(&name) {
            names.push(name);
        }
    }

    let total = projects.len() as f64;
    let slices = names
        .into_iter()
        .enumerate()
        .map(|(index, name)| {
            let members: Vec<&Project> = projects
                .iter()
                .copied()
                .filter(|p| key_of(*p) == name)
                .collect();
            Share {
                name: name.to_string(),
                project_count: members.len(),
                budget: members.iter().map(|p| p.budget).sum(),
                percentage: members.len() as f64 / total * 100.0,
                color: cycle_color(palette, index),
            }
        })
        .collect();

    Some(slices)
}

/// Business-unit slices in first-seen order.
pub fn business_unit_shares(projects: &[&Project]) -> Option<Vec<Share>> {
    shares(projects, &BUSINESS_UNIT_COLORS, |p| p.business_unit.as_str())
}

/// Company slices in first-seen order.
pub fn company_shares(projects: &[&Project]) -> Option<Vec<Share>> {
    shares(projects, &COMPANY_COLORS, |p| p.company.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::test_project;

    #[test]
    fn test_company_shares() {
        let a = test_project("A");
        let mut b = test_project("B");
        b.company = "OtherCo".into();
        b.budget = 4_000_000.0;
        let c = test_project("C");

        let slices = company_shares(&[&a, &b, &c]).unwrap();
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].name, "TechCorp");
        assert_eq!(slices[0].project_count, 2);
        assert_eq!(slices[0].budget, 2_000_000.0);
        assert!((slices[0].percentage - 66.666).abs() < 0.01);
        assert_eq!(slices[0].color, COMPANY_COLORS[0]);
        assert_eq!(slices[1].name, "OtherCo");
        assert_eq!(slices[1].color, COMPANY_COLORS[1]);
    }

    #[test]
    fn test_business_unit_shares_sum_to_hundred() {
        let a = test_project("A");
        let mut b = test_project("B");
        b.business_unit = "Innovation".into();

        let slices = business_unit_shares(&[&a, &b]).unwrap();
        let total: f64 = slices.iter().map(|s| s.percentage).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_collection_has_no_shares() {
        assert!(company_shares(&[]).is_none());
    }
}
