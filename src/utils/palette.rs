//! Display tones for enumerated labels. Labels the dashboard does not know
//! map to `Tone::Neutral` instead of failing.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Tone {
    Green,
    Emerald,
    Blue,
    Indigo,
    Purple,
    Yellow,
    Orange,
    Red,
    Neutral,
}

impl Tone {
    /// ANSI SGR foreground code.
    pub fn ansi_code(&self) -> &'static str {
        match self {
            Tone::Green | Tone::Emerald => "32",
            Tone::Blue | Tone::Indigo => "34",
            Tone::Purple => "35",
            Tone::Yellow | Tone::Orange => "33",
            Tone::Red => "31",
            Tone::Neutral => "37",
        }
    }

    pub fn paint(&self, text: &str, enabled: bool) -> String {
        if enabled {
            format!("\x1b[{}m{}\x1b[0m", self.ansi_code(), text)
        } else {
            text.to_string()
        }
    }
}

pub fn status_tone(status: &str) -> Tone {
    match status.to_lowercase().as_str() {
        "completed" => Tone::Green,
        "active" => Tone::Blue,
        "planning" => Tone::Yellow,
        "on hold" => Tone::Neutral,
        "cancelled" => Tone::Red,
        _ => Tone::Neutral,
    }
}

pub fn stage_tone(stage: &str) -> Tone {
    match stage {
        "FEL 1" => Tone::Purple,
        "FEL 2" => Tone::Indigo,
        "FEL 3" => Tone::Blue,
        "Execute" => Tone::Orange,
        "Operate" => Tone::Green,
        _ => Tone::Neutral,
    }
}

pub fn priority_tone(priority: &str) -> Tone {
    match priority.to_lowercase().as_str() {
        "critical" => Tone::Red,
        "high" => Tone::Orange,
        "medium" => Tone::Yellow,
        "low" => Tone::Green,
        _ => Tone::Neutral,
    }
}

pub fn risk_tone(risk: &str) -> Tone {
    match risk.to_lowercase().as_str() {
        "high" => Tone::Red,
        "medium" => Tone::Yellow,
        "low" => Tone::Green,
        _ => Tone::Neutral,
    }
}

pub fn category_tone(category: &str) -> Tone {
    match category {
        "Digital" => Tone::Blue,
        "Manufacturing" => Tone::Green,
        "Infrastructure" => Tone::Orange,
        "R&D" => Tone::Red,
        "Operations" => Tone::Purple,
        _ => Tone::Neutral,
    }
}

pub const BUSINESS_UNIT_COLORS: [&str; 8] = [
    "#8B5CF6", "#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#6366F1", "#EC4899", "#14B8A6",
];

pub const COMPANY_COLORS: [&str; 6] = [
    "#7C3AED", "#2563EB", "#059669", "#D97706", "#DC2626", "#4F46E5",
];

/// Cycles through `palette`; an empty palette yields a neutral grey.
pub fn cycle_color(palette: &[&'static str], index: usize) -> &'static str {
    if palette.is_empty() {
        "#9CA3AF"
    } else {
        palette[index % palette.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(status_tone("Active"), Tone::Blue);
        assert_eq!(status_tone("on hold"), Tone::Neutral);
        assert_eq!(stage_tone("Execute"), Tone::Orange);
        assert_eq!(priority_tone("CRITICAL"), Tone::Red);
        assert_eq!(risk_tone("Low"), Tone::Green);
        assert_eq!(category_tone("R&D"), Tone::Red);
    }

    #[test]
    fn test_unknown_labels_fall_back_to_neutral() {
        assert_eq!(status_tone("Archived"), Tone::Neutral);
        assert_eq!(stage_tone("FEL 4"), Tone::Neutral);
        assert_eq!(priority_tone(""), Tone::Neutral);
        assert_eq!(risk_tone("Extreme"), Tone::Neutral);
        assert_eq!(category_tone("Mining"), Tone::Neutral);
    }

    #[test]
    fn test_cycle_color_wraps() {
        assert_eq!(cycle_color(&COMPANY_COLORS, 0), "#7C3AED");
        assert_eq!(cycle_color(&COMPANY_COLORS, 6), "#7C3AED");
        assert_eq!(cycle_color(&[], 3), "#9CA3AF");
    }

    #[test]
    fn test_paint() {
        assert_eq!(Tone::Red.paint("x", false), "x");
        assert_eq!(Tone::Red.paint("x", true), "\x1b[31mx\x1b[0m");
    }
}
