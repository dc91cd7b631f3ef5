use chrono::NaiveDate;

/// Whole currency units with thousands grouping, e.g. `$2,500,000`.
pub fn format_currency(amount: f64) -> String {
    format_currency_with(amount, "$")
}

pub fn format_currency_with(amount: f64, symbol: &str) -> String {
    if !amount.is_finite() {
        return format!("{}0", symbol);
    }
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, symbol, group_thousands(rounded.abs() as u64))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One decimal place and a trailing `%`.
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

/// `Jan 15, 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `Jan 24`, used on timeline headers.
pub fn format_month(date: NaiveDate) -> String {
    date.format("%b %y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(1_000.0), "$1,000");
        assert_eq!(format_currency(2_500_000.0), "$2,500,000");
        assert_eq!(format_currency(27_600_000.0), "$27,600,000");
        assert_eq!(format_currency(1_234.56), "$1,235");
        assert_eq!(format_currency(-45_000.0), "-$45,000");
        assert_eq!(format_currency(f64::NAN), "$0");
    }

    #[test]
    fn test_format_currency_with_symbol() {
        assert_eq!(format_currency_with(1_500.0, "€"), "€1,500");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(48.0), "48.0%");
        assert_eq!(format_percentage(66.666), "66.7%");
        assert_eq!(format_percentage(-5.24), "-5.2%");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "Jan 5, 2024");
        assert_eq!(format_month(date), "Jan 24");
    }
}
