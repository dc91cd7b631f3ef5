use crate::services::distribution_service::Share;
use crate::ui::widgets::{meter, Panel, RenderOptions};
use crate::utils::format::format_percentage;

const BAR_COLUMNS: usize = 20;

fn render_shares(title: &str, shares: Option<&[Share]>, options: &RenderOptions) -> String {
    let Some(shares) = shares else {
        return Panel::no_data(title);
    };

    let mut panel = Panel::new(title);
    for share in shares {
        panel.line(format!(
            "{:<16} {} {:>6}  {} projects  {}  {}",
            share.name,
            meter(share.percentage, BAR_COLUMNS),
            format_percentage(share.percentage),
            share.project_count,
            options.currency(share.budget),
            share.color,
        ));
    }
    panel.render()
}

pub fn render_business_units(shares: Option<&[Share]>, options: &RenderOptions) -> String {
    render_shares("Business Units", shares, options)
}

pub fn render_companies(shares: Option<&[Share]>, options: &RenderOptions) -> String {
    render_shares("Companies", shares, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::test_project;
    use crate::services::distribution_service::company_shares;

    #[test]
    fn test_render_companies() {
        let a = test_project("A");
        let mut b = test_project("B");
        b.company = "OtherCo".into();

        let shares = company_shares(&[&a, &b]);
        let text = render_companies(shares.as_deref(), &RenderOptions::plain());
        assert!(text.starts_with("== Companies =="));
        assert!(text.contains("TechCorp"));
        assert!(text.contains("50.0%"));
        assert!(text.contains("#2563EB"));
    }

    #[test]
    fn test_render_empty() {
        assert!(render_business_units(None, &RenderOptions::plain()).contains("No data"));
    }
}
