/// Currency suffix the client appends to every amount.
pub const MONEY_UNIT: &str = "원";

/// Chip amounts are whole won; nothing in the source is fractional.
pub type Chips = i64;

/// Largest magnitude accepted from the source. Anything bigger is treated as
/// malformed so sums over a hand can't overflow.
pub const MAX_AMOUNT: Chips = 1_000_000_000_000_000;

/// Parse a source amount such as `-1,000원`, `254,674`, or ` 0원 `.
///
/// Thousands separators, the currency suffix and surrounding whitespace are
/// stripped. A leading `-` is kept so net amounts come out signed; callers that
/// want a magnitude use [`parse_unsigned`].
pub fn parse_signed(text: &str) -> Option<Chips> {
    let cleaned: String = text
        .trim()
        .trim_end_matches(MONEY_UNIT)
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned
        .parse::<Chips>()
        .ok()
        .filter(|amount| amount.unsigned_abs() <= MAX_AMOUNT.unsigned_abs())
}

/// Parse an amount ignoring any sign, e.g. the `-2,000원` of an ante line.
pub fn parse_unsigned(text: &str) -> Option<Chips> {
    parse_signed(text.trim().trim_start_matches(['-', '+'])).map(Chips::abs)
}

/// Like [`parse_signed`] but malformed input counts as zero.
pub fn parse_or_zero(text: &str) -> Chips {
    parse_signed(text).unwrap_or(0)
}

/// Render an amount for the PokerStars text with an optional currency prefix.
pub fn fmt_chips(amount: Chips, symbol: &str) -> String {
    if amount < 0 {
        format!("-{}{}", symbol, amount.unsigned_abs())
    } else {
        format!("{}{}", symbol, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_signed() {
        assert_eq!(parse_signed("254,674원"), Some(254_674));
        assert_eq!(parse_signed("-30,000"), Some(-30_000));
        assert_eq!(parse_signed(" 0원 "), Some(0));
        assert_eq!(parse_signed("원"), None);
        assert_eq!(parse_signed("abc"), None);
        assert_eq!(parse_signed("-9,223,372,036,854,775,808"), None);
    }

    #[test]
    fn test_parse_unsigned_strips_sign() {
        assert_eq!(parse_unsigned("-2,000원"), Some(2_000));
        assert_eq!(parse_unsigned("2,000"), Some(2_000));
    }

    #[test]
    fn test_parse_or_zero() {
        assert_eq!(parse_or_zero(""), 0);
        assert_eq!(parse_or_zero("141,263"), 141_263);
    }

    #[test]
    fn test_fmt_chips() {
        assert_eq!(fmt_chips(1000, ""), "1000");
        assert_eq!(fmt_chips(1000, "$"), "$1000");
        assert_eq!(fmt_chips(-5, "$"), "-$5");
    }
}
