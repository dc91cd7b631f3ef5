use crate::config::DashboardConfig;
use crate::utils::format::format_currency_with;
use crate::utils::palette::Tone;

pub const NO_DATA: &str = "No data for the current filters";

/// Presentation settings shared by every view.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub color: bool,
    pub currency_symbol: String,
    pub gantt_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&DashboardConfig::default())
    }
}

impl RenderOptions {
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            color: config.color,
            currency_symbol: config.currency_symbol.clone(),
            gantt_width: config.gantt_width,
        }
    }

    pub fn plain() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }

    pub fn currency(&self, amount: f64) -> String {
        format_currency_with(amount, &self.currency_symbol)
    }

    pub fn paint(&self, tone: Tone, text: &str) -> String {
        tone.paint(text, self.color)
    }
}

/// A titled block of lines.
pub struct Panel {
    title: String,
    lines: Vec<String>,
}

impl Panel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    pub fn no_data(title: impl Into<String>) -> String {
        let mut panel = Panel::new(title);
        panel.line(NO_DATA);
        panel.render()
    }

    pub fn render(&self) -> String {
        let mut out = format!("== {} ==\n", self.title);
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}
