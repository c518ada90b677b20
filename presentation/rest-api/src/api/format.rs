use bigdecimal::{BigDecimal, RoundingMode};

/// Character budget for `details` on listing cards.
pub const DETAILS_EXCERPT_CHARS: usize = 70;

/// Marker shown next to pinned products on every listing surface.
pub const PINNED_BADGE: &str = "PINNED";

/// Two decimals, rounded half away from zero.
pub fn plain_price(price: &BigDecimal) -> String {
    price
        .with_scale_round(2, RoundingMode::HalfUp)
        .to_plain_string()
}

/// Currency symbol, thousands separators, two decimals: `₹1,234.50`.
pub fn format_price(currency_symbol: &str, price: &BigDecimal) -> String {
    let plain = plain_price(price);
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}{currency_symbol}{grouped}.{fraction}")
}

/// Cuts `details` to `limit` characters for list display, appending `...` when cut.
pub fn excerpt(details: &str, limit: usize) -> String {
    if details.chars().count() <= limit {
        return details.to_string();
    }
    let cut: String = details.chars().take(limit).collect();
    format!("{}...", cut.trim_end())
}

pub fn badge(is_pinned: bool) -> Option<String> {
    is_pinned.then(|| PINNED_BADGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn price(raw: &str) -> BigDecimal {
        BigDecimal::from_str(raw).unwrap()
    }

    #[test]
    fn should_format_price_with_two_decimals() {
        assert_eq!(format_price("₹", &price("49")), "₹49.00");
    }

    #[test]
    fn should_group_thousands_in_price() {
        assert_eq!(format_price("₹", &price("1234567.5")), "₹1,234,567.50");
    }

    #[test]
    fn should_not_group_three_digit_price() {
        assert_eq!(format_price("₹", &price("999.99")), "₹999.99");
    }

    #[test]
    fn should_round_half_up_when_formatting() {
        assert_eq!(format_price("₹", &price("10.005")), "₹10.01");
    }

    #[test]
    fn should_format_zero_price() {
        assert_eq!(format_price("$", &price("0")), "$0.00");
    }

    #[test]
    fn should_render_plain_price_without_symbol() {
        assert_eq!(plain_price(&price("1234.5")), "1234.50");
    }

    #[test]
    fn should_keep_short_details_untouched() {
        assert_eq!(excerpt("Single origin", DETAILS_EXCERPT_CHARS), "Single origin");
    }

    #[test]
    fn should_truncate_long_details_to_limit() {
        let details = "a".repeat(71);

        let cut = excerpt(&details, DETAILS_EXCERPT_CHARS);

        assert_eq!(cut, format!("{}...", "a".repeat(70)));
    }

    #[test]
    fn should_trim_trailing_space_before_ellipsis() {
        assert_eq!(excerpt("Rich dark roast blend", 10), "Rich dark...");
    }

    #[test]
    fn should_count_characters_not_bytes() {
        let details = "चाय".repeat(30);

        let cut = excerpt(&details, DETAILS_EXCERPT_CHARS);

        assert_eq!(cut.chars().count(), DETAILS_EXCERPT_CHARS + 3);
    }

    #[test]
    fn should_show_badge_only_when_pinned() {
        assert_eq!(badge(true).as_deref(), Some("PINNED"));
        assert!(badge(false).is_none());
    }
}
