//! Human-readable money formatting shared by every table and chart label.

/// Format a USD amount the way the dashboard displays it:
/// `$1.25B`, `$2.5M`, `$750K`, or `$950` (thousands-separated) below 1e3.
pub fn fmt_amount(n: f64) -> String {
    if n >= 1e9 {
        format!("${:.2}B", n / 1e9)
    } else if n >= 1e6 {
        format!("${:.1}M", n / 1e6)
    } else if n >= 1e3 {
        format!("${:.0}K", n / 1e3)
    } else {
        format!("${}", thousands(n.round() as i64))
    }
}

/// Insert `,` thousands separators into an integer.
fn thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    let first = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - first) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_and_decimals() {
        assert_eq!(fmt_amount(2_500_000.0), "$2.5M");
        assert_eq!(fmt_amount(1_250_000_000.0), "$1.25B");
        assert_eq!(fmt_amount(750_000.0), "$750K");
        assert_eq!(fmt_amount(1_000.0), "$1K");
        assert_eq!(fmt_amount(999.0), "$999");
        assert_eq!(fmt_amount(0.0), "$0");
    }

    #[test]
    fn thousands_separators_below_1k() {
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }
}
