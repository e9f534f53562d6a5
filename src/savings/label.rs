//! Display helpers for projection output
//!
//! The engine reports raw month indices and unrounded amounts; rounding and
//! wording happen here, at display time only.

/// Round a currency amount to cents
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Format a currency amount with a dollar sign and two decimals
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", round_cents(amount))
}

fn plural(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// Human readable duration for a month count.
///
/// Up to a year is shown in months ("10 months"); longer spans are shown as
/// years plus leftover months, with the months omitted when there are none.
pub fn format_months(months: u32) -> String {
    if months <= 12 {
        return plural(months, "month");
    }
    let years = months / 12;
    let remaining = months % 12;
    if remaining == 0 {
        plural(years, "year")
    } else {
        format!("{} {}", plural(years, "year"), plural(remaining, "month"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_months() {
        assert_eq!(format_months(0), "0 months");
        assert_eq!(format_months(1), "1 month");
        assert_eq!(format_months(12), "12 months");
        assert_eq!(format_months(13), "1 year 1 month");
        assert_eq!(format_months(24), "2 years");
        assert_eq!(format_months(30), "2 years 6 months");
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(10.004), 10.0);
        assert_eq!(round_cents(10.006), 10.01);
        assert_eq!(format_currency(1234.5), "$1234.50");
    }
}
