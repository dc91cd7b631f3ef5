use serde::Serialize;

use crate::domain::budget::CategoryBudget;
use crate::domain::project::{budget_variance, Category, Project};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRollup {
    pub category: Category,
    pub budget: f64,
    pub spent: f64,
    pub remaining: f64,
    pub variance: f64,
    pub projects: usize,
}

/// Budget and spend over the filtered projects for each category the catalog
/// budgets, in catalog row order. Categories without budget are left out.
pub fn category_rollup(projects: &[&Project], budgets: &[CategoryBudget]) -> Option<Vec<CategoryRollup>> {
    if projects.is_empty() {
        return None;
    }

    let mut categories: Vec<Category> = Vec::with_capacity(budgets.len());
    for row in budgets {
        if !categories.contains(&row.category) {
            categories.push(row.category);
        }
    }

    let rows = categories
        .into_iter()
        .map(|category| {
            let members = projects.iter().filter(|p| p.category == category);
            let (budget, spent, count) = members.fold((0.0, 0.0, 0), |(b, s, n), p| {
                (b + p.budget, s + p.actual_spend, n + 1)
            });
            CategoryRollup {
                category,
                budget,
                spent,
                remaining: (budget - spent).max(0.0),
                variance: budget_variance(budget, spent),
                projects: count,
            }
        })
        .filter(|row| row.budget > 0.0)
        .collect();

    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::test_project;
    use crate::repository::seed;

    #[test]
    fn test_rollup_excludes_zero_budget_categories() {
        let mut a = test_project("A");
        a.category = Category::Digital;
        let mut b = test_project("B");
        b.category = Category::Digital;
        b.actual_spend = 1_250_000.0;
        let mut c = test_project("C");
        c.category = Category::Operations;
        c.budget = 0.0;

        let rows = category_rollup(&[&a, &b, &c], &seed::budget_by_category()).unwrap();
        assert_eq!(rows.len(), 1);

        let digital = &rows[0];
        assert_eq!(digital.category, Category::Digital);
        assert_eq!(digital.projects, 2);
        assert_eq!(digital.budget, 2_000_000.0);
        assert_eq!(digital.spent, 1_750_000.0);
        assert_eq!(digital.remaining, 250_000.0);
        assert_eq!(digital.variance, -12.5);
    }

    #[test]
    fn test_remaining_never_negative() {
        let mut a = test_project("A");
        a.actual_spend = 2_000_000.0;
        let rows = category_rollup(&[&a], &seed::budget_by_category()).unwrap();
        assert_eq!(rows[0].remaining, 0.0);
        assert_eq!(rows[0].variance, 100.0);
    }

    #[test]
    fn test_empty_collection_has_no_rollup() {
        assert!(category_rollup(&[], &seed::budget_by_category()).is_none());
    }

    fn budget_row(category: Category) -> CategoryBudget {
        CategoryBudget {
            category,
            budget: 0.0,
            spent: 0.0,
            projects: 0,
        }
    }

    #[test]
    fn test_catalog_rows_set_categories_and_order() {
        let mut a = test_project("A");
        a.category = Category::Digital;
        let mut b = test_project("B");
        b.category = Category::Operations;
        let mut c = test_project("C");
        c.category = Category::RnD;

        let budgets = vec![
            budget_row(Category::Operations),
            budget_row(Category::Digital),
            budget_row(Category::Operations),
        ];
        let rows = category_rollup(&[&a, &b, &c], &budgets).unwrap();
        let categories: Vec<Category> = rows.iter().map(|r| r.category).collect();
        assert_eq!(categories, vec![Category::Operations, Category::Digital]);
    }

    #[test]
    fn test_no_budget_rows_means_no_categories() {
        let a = test_project("A");
        assert_eq!(category_rollup(&[&a], &[]), Some(vec![]));
    }
}
