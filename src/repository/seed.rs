//! Built-in sample portfolio used when no catalog file is configured.

use chrono::NaiveDate;

use crate::domain::budget::CategoryBudget;
use crate::domain::progress::ProgressSample;
use crate::domain::project::{
    Category, FelStage, Priority, Project, ProjectStatus, RiskLevel,
};
use crate::domain::resource::ResourceAllocation;
use crate::domain::risk::RiskAssessment;
use crate::domain::task::{Milestone, MilestoneStatus, ScheduleTask};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: &str,
    name: &str,
    status: ProjectStatus,
    fel_stage: FelStage,
    budget: f64,
    actual_spend: f64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    completion_percentage: f64,
    priority: Priority,
    (department, business_unit, company): (&str, &str, &str),
    project_manager: &str,
    risk: RiskLevel,
    category: Category,
) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        status,
        fel_stage,
        budget,
        actual_spend,
        start_date,
        end_date,
        completion_percentage,
        priority,
        department: department.to_string(),
        business_unit: business_unit.to_string(),
        company: company.to_string(),
        project_manager: project_manager.to_string(),
        risk,
        category,
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        project(
            "PRJ-001",
            "Digital Transformation Initiative",
            ProjectStatus::Active,
            FelStage::Fel2,
            2_500_000.0,
            1_200_000.0,
            date(2024, 1, 15),
            date(2024, 12, 31),
            48.0,
            Priority::Critical,
            ("IT", "Technology", "TechCorp"),
            "Sarah Chen",
            RiskLevel::Medium,
            Category::Digital,
        ),
        project(
            "PRJ-002",
            "Manufacturing Plant Expansion",
            ProjectStatus::Active,
            FelStage::Fel3,
            15_000_000.0,
            8_500_000.0,
            date(2023, 6, 1),
            date(2025, 3, 15),
            65.0,
            Priority::High,
            ("Operations", "Manufacturing", "IndustrialCorp"),
            "Michael Rodriguez",
            RiskLevel::High,
            Category::Manufacturing,
        ),
        project(
            "PRJ-003",
            "R&D Innovation Lab Setup",
            ProjectStatus::Planning,
            FelStage::Fel1,
            3_200_000.0,
            150_000.0,
            date(2024, 3, 1),
            date(2024, 11, 30),
            15.0,
            Priority::Medium,
            ("R&D", "Innovation", "TechCorp"),
            "Dr. Lisa Park",
            RiskLevel::Low,
            Category::RnD,
        ),
        project(
            "PRJ-004",
            "Infrastructure Modernization",
            ProjectStatus::Active,
            FelStage::Execute,
            8_900_000.0,
            7_200_000.0,
            date(2023, 9, 15),
            date(2024, 8, 30),
            85.0,
            Priority::High,
            ("Engineering", "Infrastructure", "EngineeringCorp"),
            "James Wilson",
            RiskLevel::Medium,
            Category::Infrastructure,
        ),
        project(
            "PRJ-005",
            "Supply Chain Optimization",
            ProjectStatus::Completed,
            FelStage::Operate,
            1_800_000.0,
            1_650_000.0,
            date(2023, 1, 1),
            date(2023, 10, 15),
            100.0,
            Priority::Medium,
            ("Supply Chain", "Operations", "LogisticsCorp"),
            "Emma Thompson",
            RiskLevel::Low,
            Category::Operations,
        ),
        project(
            "PRJ-006",
            "Cybersecurity Enhancement",
            ProjectStatus::Active,
            FelStage::Fel2,
            1_200_000.0,
            450_000.0,
            date(2024, 2, 1),
            date(2024, 9, 30),
            35.0,
            Priority::Critical,
            ("IT", "Technology", "TechCorp"),
            "Alex Kumar",
            RiskLevel::High,
            Category::Digital,
        ),
    ]
}

fn sample(
    project_id: &str,
    on: NaiveDate,
    planned_progress: f64,
    actual_progress: f64,
    planned_cost: f64,
    actual_cost: f64,
) -> ProgressSample {
    ProgressSample {
        project_id: project_id.to_string(),
        date: on,
        planned_progress,
        actual_progress,
        planned_cost,
        actual_cost,
    }
}

pub fn s_curve_data() -> Vec<ProgressSample> {
    vec![
        // PRJ-001
        sample("PRJ-001", date(2024, 1, 15), 0.0, 0.0, 0.0, 0.0),
        sample("PRJ-001", date(2024, 2, 15), 8.0, 5.0, 200_000.0, 125_000.0),
        sample("PRJ-001", date(2024, 3, 15), 18.0, 15.0, 450_000.0, 375_000.0),
        sample("PRJ-001", date(2024, 4, 15), 30.0, 25.0, 750_000.0, 625_000.0),
        sample("PRJ-001", date(2024, 5, 15), 42.0, 38.0, 1_050_000.0, 950_000.0),
        sample("PRJ-001", date(2024, 6, 15), 55.0, 48.0, 1_375_000.0, 1_200_000.0),
        // PRJ-002
        sample("PRJ-002", date(2023, 6, 1), 0.0, 0.0, 0.0, 0.0),
        sample("PRJ-002", date(2023, 9, 1), 15.0, 12.0, 2_250_000.0, 1_800_000.0),
        sample("PRJ-002", date(2023, 12, 1), 35.0, 32.0, 5_250_000.0, 4_800_000.0),
        sample("PRJ-002", date(2024, 3, 1), 55.0, 52.0, 8_250_000.0, 7_800_000.0),
        sample("PRJ-002", date(2024, 6, 1), 70.0, 65.0, 10_500_000.0, 8_500_000.0),
        // PRJ-004
        sample("PRJ-004", date(2023, 9, 15), 0.0, 0.0, 0.0, 0.0),
        sample("PRJ-004", date(2023, 12, 15), 25.0, 22.0, 2_225_000.0, 1_958_000.0),
        sample("PRJ-004", date(2024, 3, 15), 55.0, 58.0, 4_895_000.0, 5_162_000.0),
        sample("PRJ-004", date(2024, 6, 15), 80.0, 85.0, 7_120_000.0, 7_200_000.0),
    ]
}

#[allow(clippy::too_many_arguments)]
fn task(
    id: &str,
    project_id: &str,
    name: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    progress: f64,
    dependencies: &[&str],
    assignee: &str,
    priority: Priority,
) -> ScheduleTask {
    ScheduleTask {
        id: id.to_string(),
        project_id: project_id.to_string(),
        name: name.to_string(),
        start_date,
        end_date,
        progress,
        dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
        assignee: assignee.to_string(),
        priority,
    }
}

pub fn gantt_tasks() -> Vec<ScheduleTask> {
    vec![
        task("T-001", "PRJ-001", "Requirements Analysis", date(2024, 1, 15), date(2024, 2, 28), 100.0, &[], "John Smith", Priority::High),
        task("T-002", "PRJ-001", "System Architecture Design", date(2024, 2, 15), date(2024, 4, 15), 85.0, &["T-001"], "Sarah Chen", Priority::Critical),
        task("T-003", "PRJ-001", "Development Phase 1", date(2024, 3, 1), date(2024, 6, 30), 45.0, &["T-002"], "Dev Team A", Priority::High),
        task("T-004", "PRJ-001", "Testing & QA", date(2024, 6, 1), date(2024, 9, 30), 10.0, &["T-003"], "QA Team", Priority::Medium),
        task("T-005", "PRJ-002", "Site Preparation", date(2023, 6, 1), date(2023, 9, 30), 100.0, &[], "Construction Team", Priority::Critical),
        task("T-006", "PRJ-002", "Foundation Work", date(2023, 8, 1), date(2024, 1, 31), 100.0, &["T-005"], "Civil Engineers", Priority::High),
        task("T-007", "PRJ-002", "Equipment Installation", date(2024, 1, 15), date(2024, 8, 31), 65.0, &["T-006"], "Technical Team", Priority::High),
        task("T-008", "PRJ-002", "Commissioning", date(2024, 8, 1), date(2025, 3, 15), 15.0, &["T-007"], "Operations Team", Priority::Medium),
    ]
}

pub fn resource_allocation() -> Vec<ResourceAllocation> {
    [
        ("IT", 45.0, 38.0, 50.0),
        ("Engineering", 32.0, 30.0, 35.0),
        ("Operations", 28.0, 25.0, 30.0),
        ("R&D", 15.0, 12.0, 20.0),
        ("Supply Chain", 8.0, 8.0, 10.0),
    ]
    .into_iter()
    .map(|(department, allocated, utilized, capacity)| ResourceAllocation {
        department: department.to_string(),
        allocated,
        utilized,
        capacity,
    })
    .collect()
}

pub fn budget_by_category() -> Vec<CategoryBudget> {
    [
        (Category::Digital, 3_700_000.0, 1_650_000.0, 2),
        (Category::Manufacturing, 15_000_000.0, 8_500_000.0, 1),
        (Category::Infrastructure, 8_900_000.0, 7_200_000.0, 1),
        (Category::RnD, 3_200_000.0, 150_000.0, 1),
        (Category::Operations, 1_800_000.0, 1_650_000.0, 1),
    ]
    .into_iter()
    .map(|(category, budget, spent, projects)| CategoryBudget {
        category,
        budget,
        spent,
        projects,
    })
    .collect()
}

pub fn milestones() -> Vec<Milestone> {
    [
        ("M-001", "PRJ-001", "Phase 1 Complete", date(2024, 4, 30), MilestoneStatus::Completed),
        ("M-002", "PRJ-001", "System Go-Live", date(2024, 10, 15), MilestoneStatus::Upcoming),
        ("M-003", "PRJ-002", "Production Line 1 Ready", date(2024, 9, 30), MilestoneStatus::AtRisk),
        ("M-004", "PRJ-004", "Infrastructure Cutover", date(2024, 7, 15), MilestoneStatus::Upcoming),
        ("M-005", "PRJ-006", "Security Audit Complete", date(2024, 8, 31), MilestoneStatus::Planned),
    ]
    .into_iter()
    .map(|(id, project_id, name, on, status)| Milestone {
        id: id.to_string(),
        project_id: project_id.to_string(),
        name: name.to_string(),
        date: on,
        status,
    })
    .collect()
}

pub fn risk_assessment() -> Vec<RiskAssessment> {
    [
        ("PRJ-001", "Technical", "Medium", "High", "Additional testing cycles"),
        ("PRJ-002", "Budget", "High", "Critical", "Cost optimization review"),
        ("PRJ-002", "Schedule", "Medium", "High", "Resource reallocation"),
        ("PRJ-004", "Resource", "Low", "Medium", "Cross-training program"),
        ("PRJ-006", "Security", "High", "Critical", "Enhanced monitoring"),
    ]
    .into_iter()
    .map(|(project_id, risk_category, probability, impact, mitigation)| RiskAssessment {
        project_id: project_id.to_string(),
        risk_category: risk_category.to_string(),
        probability: probability.to_string(),
        impact: impact.to_string(),
        mitigation: mitigation.to_string(),
    })
    .collect()
}
