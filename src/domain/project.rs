use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub status: ProjectStatus,
    pub fel_stage: FelStage,
    pub budget: f64,
    pub actual_spend: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub completion_percentage: f64,
    pub priority: Priority,
    pub department: String,
    pub business_unit: String,
    pub company: String,
    pub project_manager: String,
    #[serde(rename = "risks")]
    pub risk: RiskLevel,
    pub category: Category,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProjectStatus {
    Planning,
    Active,
    #[serde(rename = "On Hold")]
    OnHold,
    Completed,
    Cancelled,
}

/// Front-End Loading lifecycle, in progression order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FelStage {
    #[serde(rename = "FEL 1")]
    Fel1,
    #[serde(rename = "FEL 2")]
    Fel2,
    #[serde(rename = "FEL 3")]
    Fel3,
    Execute,
    Operate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Infrastructure,
    Digital,
    Manufacturing,
    #[serde(rename = "R&D")]
    RnD,
    Operations,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProjectHealth {
    Excellent,
    Good,
    Warning,
    Critical,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 5] = [
        ProjectStatus::Planning,
        ProjectStatus::Active,
        ProjectStatus::OnHold,
        ProjectStatus::Completed,
        ProjectStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::Active => "Active",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Cancelled => "Cancelled",
        }
    }
}

impl FelStage {
    pub const ALL: [FelStage; 5] = [
        FelStage::Fel1,
        FelStage::Fel2,
        FelStage::Fel3,
        FelStage::Execute,
        FelStage::Operate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FelStage::Fel1 => "FEL 1",
            FelStage::Fel2 => "FEL 2",
            FelStage::Fel3 => "FEL 3",
            FelStage::Execute => "Execute",
            FelStage::Operate => "Operate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FelStage::Fel1 => "FEL 1 - Opportunity Identification",
            FelStage::Fel2 => "FEL 2 - Concept Development",
            FelStage::Fel3 => "FEL 3 - Basic Engineering",
            FelStage::Execute => "Execute - Implementation",
            FelStage::Operate => "Operate - Operations",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FelStage::Fel1 => "Business Objectives & Concept Selection",
            FelStage::Fel2 => "Basic Engineering & Project Definition",
            FelStage::Fel3 => "Detailed Engineering & Execution Planning",
            FelStage::Execute => "Construction & Commissioning",
            FelStage::Operate => "Operations & Maintenance",
        }
    }
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }
}

impl Category {
    /// Rollup order used by the budget views.
    pub const ALL: [Category; 5] = [
        Category::Digital,
        Category::Manufacturing,
        Category::Infrastructure,
        Category::RnD,
        Category::Operations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Infrastructure => "Infrastructure",
            Category::Digital => "Digital",
            Category::Manufacturing => "Manufacturing",
            Category::RnD => "R&D",
            Category::Operations => "Operations",
        }
    }
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl ProjectHealth {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectHealth::Excellent => "excellent",
            ProjectHealth::Good => "good",
            ProjectHealth::Warning => "warning",
            ProjectHealth::Critical => "critical",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(ProjectStatus, FelStage, Priority, Category, RiskLevel, ProjectHealth);

/// (spend - budget) / budget as a percentage; 0 when there is no budget.
pub fn budget_variance(budget: f64, spend: f64) -> f64 {
    if budget > 0.0 {
        ((spend - budget) / budget) * 100.0
    } else {
        0.0
    }
}

impl Project {
    pub fn budget_variance(&self) -> f64 {
        budget_variance(self.budget, self.actual_spend)
    }

    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    pub fn is_critical(&self) -> bool {
        self.priority == Priority::Critical
    }

    pub fn is_high_risk(&self) -> bool {
        self.risk == RiskLevel::High
    }

    /// Interval overlap as the date-range filter defines it.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        (self.start_date >= start && self.start_date <= end)
            || (self.end_date >= start && self.end_date <= end)
            || (self.start_date <= start && self.end_date >= end)
    }

    pub fn matches_search(&self, needle_lower: &str) -> bool {
        [
            &self.name,
            &self.project_manager,
            &self.department,
            &self.business_unit,
            &self.company,
            &self.id,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle_lower))
    }

    /// Over 10% above budget is a budget problem; under half done with less
    /// than 90 days left is a schedule problem.
    pub fn health(&self, today: NaiveDate) -> ProjectHealth {
        let variance = self.budget_variance();
        let days_to_end = (self.end_date - today).num_days();
        let over_budget = variance > 10.0;
        let behind_schedule = self.completion_percentage < 50.0 && days_to_end < 90;

        match (over_budget, behind_schedule) {
            (true, true) => ProjectHealth::Critical,
            (true, false) | (false, true) => ProjectHealth::Warning,
            _ if self.completion_percentage > 80.0 && variance < 5.0 => ProjectHealth::Excellent,
            _ => ProjectHealth::Good,
        }
    }
}

#[cfg(test)]
pub(crate) fn test_project(id: &str) -> Project {
    Project {
        id: id.to_string(),
        name: format!("Project {}", id),
        status: ProjectStatus::Active,
        fel_stage: FelStage::Fel1,
        budget: 1_000_000.0,
        actual_spend: 500_000.0,
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        completion_percentage: 50.0,
        priority: Priority::Medium,
        department: "IT".to_string(),
        business_unit: "Technology".to_string(),
        company: "TechCorp".to_string(),
        project_manager: "Pat Doe".to_string(),
        risk: RiskLevel::Low,
        category: Category::Digital,
    }
}
