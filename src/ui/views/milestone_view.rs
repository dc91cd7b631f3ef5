use crate::domain::risk::RiskAssessment;
use crate::domain::task::MilestoneStatus;
use crate::services::milestone_service::MilestoneRow;
use crate::ui::widgets::{Panel, RenderOptions};
use crate::utils::format::format_date;
use crate::utils::palette::{risk_tone, Tone};

pub fn render_milestones(milestones: Option<&[MilestoneRow]>, options: &RenderOptions) -> String {
    const TITLE: &str = "Milestones";
    let Some(milestones) = milestones else {
        return Panel::no_data(TITLE);
    };

    let mut panel = Panel::new(TITLE);
    for milestone in milestones {
        let tone = match milestone.status {
            MilestoneStatus::Completed => Tone::Green,
            MilestoneStatus::Upcoming => Tone::Blue,
            MilestoneStatus::AtRisk => Tone::Red,
            MilestoneStatus::Planned => Tone::Neutral,
        };
        let status = format!("{:<10}", milestone.status.as_str());
        panel.line(format!(
            "{:<14} {} {} ({})",
            format_date(milestone.date),
            options.paint(tone, &status),
            milestone.name,
            milestone.project_name
        ));
    }
    panel.render()
}

pub fn render_risks(risks: Option<&[RiskAssessment]>, options: &RenderOptions) -> String {
    const TITLE: &str = "Risk Register";
    let Some(risks) = risks else {
        return Panel::no_data(TITLE);
    };

    let mut panel = Panel::new(TITLE);
    for risk in risks {
        panel
            .line(format!(
                "{} {}: probability {}, impact {}",
                risk.project_id,
                risk.risk_category,
                options.paint(risk_tone(&risk.probability), &risk.probability),
                options.paint(risk_tone(&risk.impact), &risk.impact),
            ))
            .line(format!("  Mitigation: {}", risk.mitigation));
    }
    panel.render()
}
