// ============================================================================
// Parse Styles
// Flag set gating which grammar elements the parser accepts
// ============================================================================

use bitflags::bitflags;

bitflags! {
    /// Grammar gates for [`parse_with`](crate::text::parse_with).
    ///
    /// Each flag admits one element of the number grammar; the composite
    /// constants cover the common call sites.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ParseStyle: u16 {
        /// Whitespace before the number
        const LEADING_WHITESPACE = 1 << 0;
        /// Whitespace after the number
        const TRAILING_WHITESPACE = 1 << 1;
        /// A sign token before the digits
        const LEADING_SIGN = 1 << 2;
        /// A decimal separator and fraction digits
        const DECIMAL_POINT = 1 << 3;
        /// Group separators between integer digits
        const GROUP_SEPARATORS = 1 << 4;
        /// A scientific exponent suffix
        const EXPONENT = 1 << 5;
        /// Parentheses marking a negative value
        const PARENTHESES = 1 << 6;
        /// The locale's currency symbol before or after the number
        const CURRENCY_SYMBOL = 1 << 7;
    }
}

impl ParseStyle {
    /// Digits only, no adornments
    pub const NONE: Self = Self::empty();

    /// Whitespace and a leading sign around plain digits
    pub const INTEGER: Self = Self::LEADING_WHITESPACE
        .union(Self::TRAILING_WHITESPACE)
        .union(Self::LEADING_SIGN);

    /// Integer elements plus decimal point and thousands grouping
    pub const NUMBER: Self = Self::INTEGER
        .union(Self::DECIMAL_POINT)
        .union(Self::GROUP_SEPARATORS);

    /// Integer elements plus decimal point and exponent
    pub const FLOAT: Self = Self::INTEGER
        .union(Self::DECIMAL_POINT)
        .union(Self::EXPONENT);

    /// Number elements plus currency symbol and parenthesized negatives
    pub const CURRENCY: Self = Self::NUMBER
        .union(Self::PARENTHESES)
        .union(Self::CURRENCY_SYMBOL);

    /// Every grammar element enabled
    pub const ANY: Self = Self::all();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composites() {
        assert!(ParseStyle::FLOAT.contains(ParseStyle::DECIMAL_POINT));
        assert!(ParseStyle::FLOAT.contains(ParseStyle::EXPONENT));
        assert!(!ParseStyle::FLOAT.contains(ParseStyle::GROUP_SEPARATORS));
        assert!(!ParseStyle::INTEGER.contains(ParseStyle::DECIMAL_POINT));
        assert!(ParseStyle::CURRENCY.contains(ParseStyle::PARENTHESES));
        assert!(ParseStyle::ANY.contains(ParseStyle::CURRENCY));
        assert_eq!(ParseStyle::NONE, ParseStyle::empty());
    }
}
