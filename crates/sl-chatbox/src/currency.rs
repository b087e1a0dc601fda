//! Naira amount formatting for price replies.

/// Naira sign prefixed to every amount.
pub const NAIRA: char = '₦';

/// Format an amount the way listing prices are shown: `₦` followed by the
/// comma-grouped whole part, with kobo only when the amount is fractional.
///
/// Digits come from the decimal rendering of the `f64`, so amounts of any
/// magnitude keep their value.
pub fn format_naira(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    let whole = group_thousands(whole);
    if frac == "00" {
        format!("{sign}{NAIRA}{whole}")
    } else {
        format!("{sign}{NAIRA}{whole}.{frac}")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
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
    fn whole_amounts_have_no_decimals() {
        assert_eq!(format_naira(5000.0), "₦5,000");
        assert_eq!(format_naira(0.0), "₦0");
        assert_eq!(format_naira(999.0), "₦999");
    }

    #[test]
    fn large_amounts_are_grouped() {
        assert_eq!(format_naira(1_250_000.0), "₦1,250,000");
        assert_eq!(format_naira(100_000.0), "₦100,000");
    }

    #[test]
    fn fractional_amounts_keep_two_places() {
        assert_eq!(format_naira(1500.5), "₦1,500.50");
        assert_eq!(format_naira(99.999), "₦100");
    }

    #[test]
    fn amounts_beyond_integer_range_keep_their_digits() {
        assert_eq!(format_naira(2e17), "₦200,000,000,000,000,000");
        assert_eq!(format_naira(1e20), "₦100,000,000,000,000,000,000");
    }

    #[test]
    fn tiny_negative_amount_has_no_sign() {
        assert_eq!(format_naira(-0.001), "₦0");
    }

    #[test]
    fn negative_amounts_keep_sign() {
        assert_eq!(format_naira(-2500.0), "-₦2,500");
    }
}
