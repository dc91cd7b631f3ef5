use serde::{Deserialize, Serialize};

use super::project::Category;

/// Portfolio-wide budget rollup row for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryBudget {
    pub category: Category,
    pub budget: f64,
    pub spent: f64,
    pub projects: usize,
}
