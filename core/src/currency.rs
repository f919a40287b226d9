//! Currency formatting for display.

/// Format an amount as whole-unit USD with thousands separators.
///
/// Values are rounded to the nearest dollar for display only; stored
/// amounts keep full precision.
pub fn format_usd(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_amounts() {
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(500.0), "$500");
        assert_eq!(format_usd(1300.0), "$1,300");
        assert_eq!(format_usd(76800.0), "$76,800");
        assert_eq!(format_usd(1234567.0), "$1,234,567");
    }

    #[test]
    fn test_rounding() {
        assert_eq!(format_usd(999.5), "$1,000");
        assert_eq!(format_usd(1299.9), "$1,300");
        assert_eq!(format_usd(216.66666), "$217");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_usd(-1300.0), "-$1,300");
    }
}
