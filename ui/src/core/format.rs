//! Formatting helpers for vote counts and shares.

/// `1234567` -> `"1,234,567"`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One-decimal percentage, e.g. `66.7%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Short axis label: `20M`, `150M`, `2.5M`, `750K`.
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1_000_000.0 {
        (value / 1_000_000.0, "M")
    } else if abs >= 1_000.0 {
        (value / 1_000.0, "K")
    } else {
        (value, "")
    };

    if (scaled - scaled.round()).abs() < 1e-9 {
        format!("{scaled:.0}{suffix}")
    } else {
        format!("{scaled:.1}{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_400), "1,400");
        assert_eq!(format_thousands(81_283_501), "81,283,501");
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(66.666_666), "66.7%");
        assert_eq!(format_percent(40.0), "40.0%");
    }

    #[test]
    fn compact_labels() {
        assert_eq!(format_compact(0.0), "0");
        assert_eq!(format_compact(20_000_000.0), "20M");
        assert_eq!(format_compact(5_000_000.0), "5M");
        assert_eq!(format_compact(2_500_000.0), "2.5M");
        assert_eq!(format_compact(750_000.0), "750K");
    }
}
