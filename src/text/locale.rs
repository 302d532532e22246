// ============================================================================
// Number Format Rules
// Locale symbols and patterns consumed by the parser and formatter
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Negative Patterns
// ============================================================================

/// Placement of the minus for negative renderings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NegativePattern {
    /// Sign before the digits: `-1,234.50`
    LeadingSign,
    /// Parenthesized: `(1,234.50)`
    Parentheses,
}

// ============================================================================
// Format Rules
// ============================================================================

/// Locale rules for decimal text conversion.
///
/// Pure data; the engine never calls back into the locale. Pass it
/// explicitly to [`parse_with`](crate::text::parse_with) and
/// [`format_with`](crate::text::format_with) — there is no ambient culture.
/// `Default` is the invariant culture.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumberFormat {
    /// Separator between integer and fraction digits
    pub decimal_separator: String,

    /// Separator between integer digit groups
    pub group_separator: String,

    /// Group sizes from the least significant group outward; the last entry
    /// repeats, a trailing zero stops further grouping
    pub group_sizes: Vec<u8>,

    /// Token marking a negative value
    pub negative_sign: String,

    /// Token accepted for explicitly positive values
    pub positive_sign: String,

    /// Symbol for the currency style
    pub currency_symbol: String,

    /// How the number style renders negatives
    pub negative_pattern: NegativePattern,

    /// How the currency style renders negatives
    pub currency_negative_pattern: NegativePattern,

    /// Fraction digits used by the fixed, number and currency styles when
    /// the format spec does not name a count
    pub default_decimal_digits: u8,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::invariant()
    }
}

impl NumberFormat {
    /// Invariant rules: `.` point, `,` thousands in groups of three, `-`/`+`
    /// signs, `$` currency with parenthesized negatives, two fixed digits.
    pub fn invariant() -> Self {
        Self {
            decimal_separator: ".".to_string(),
            group_separator: ",".to_string(),
            group_sizes: vec![3],
            negative_sign: "-".to_string(),
            positive_sign: "+".to_string(),
            currency_symbol: "$".to_string(),
            negative_pattern: NegativePattern::LeadingSign,
            currency_negative_pattern: NegativePattern::Parentheses,
            default_decimal_digits: 2,
        }
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Builder method: set the decimal separator
    pub fn with_decimal_separator(mut self, separator: impl Into<String>) -> Self {
        self.decimal_separator = separator.into();
        self
    }

    /// Builder method: set the group separator
    pub fn with_group_separator(mut self, separator: impl Into<String>) -> Self {
        self.group_separator = separator.into();
        self
    }

    /// Builder method: set the group sizes
    pub fn with_group_sizes(mut self, sizes: Vec<u8>) -> Self {
        self.group_sizes = sizes;
        self
    }

    /// Builder method: set the negative sign token
    pub fn with_negative_sign(mut self, sign: impl Into<String>) -> Self {
        self.negative_sign = sign.into();
        self
    }

    /// Builder method: set the currency symbol
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Builder method: set the number negative pattern
    pub fn with_negative_pattern(mut self, pattern: NegativePattern) -> Self {
        self.negative_pattern = pattern;
        self
    }

    /// Builder method: set the currency negative pattern
    pub fn with_currency_negative_pattern(mut self, pattern: NegativePattern) -> Self {
        self.currency_negative_pattern = pattern;
        self
    }

    /// Builder method: set the default fraction digit count
    pub fn with_decimal_digits(mut self, digits: u8) -> Self {
        self.default_decimal_digits = digits;
        self
    }

    // ========================================================================
    // Preset Cultures (Factory Methods)
    // ========================================================================

    /// United States English: same symbols as the invariant culture
    pub fn en_us() -> Self {
        Self::invariant()
    }

    /// German: comma decimal point, dot thousands, euro currency
    pub fn de_de() -> Self {
        Self::invariant()
            .with_decimal_separator(",")
            .with_group_separator(".")
            .with_currency_symbol("\u{20AC}")
    }

    /// Indian English: lakh/crore grouping (3, then 2s), rupee currency
    pub fn en_in() -> Self {
        Self::invariant()
            .with_group_sizes(vec![3, 2])
            .with_currency_symbol("\u{20B9}")
    }

    /// Validate the rules
    pub fn validate(&self) -> Result<(), String> {
        if self.decimal_separator.is_empty() {
            return Err("Decimal separator cannot be empty".to_string());
        }
        if self.decimal_separator == self.group_separator {
            return Err("Decimal and group separators must differ".to_string());
        }
        if self.negative_sign.is_empty() {
            return Err("Negative sign cannot be empty".to_string());
        }
        if self.group_sizes.iter().rev().skip(1).any(|size| *size == 0) {
            return Err("Only the last group size may be zero".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_defaults() {
        let rules = NumberFormat::default();
        assert_eq!(rules.decimal_separator, ".");
        assert_eq!(rules.group_separator, ",");
        assert_eq!(rules.group_sizes, vec![3]);
        assert_eq!(rules.negative_pattern, NegativePattern::LeadingSign);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let rules = NumberFormat::invariant()
            .with_decimal_separator(",")
            .with_group_separator(" ")
            .with_currency_symbol("kr")
            .with_decimal_digits(3);

        assert_eq!(rules.decimal_separator, ",");
        assert_eq!(rules.group_separator, " ");
        assert_eq!(rules.currency_symbol, "kr");
        assert_eq!(rules.default_decimal_digits, 3);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        assert_eq!(NumberFormat::en_us(), NumberFormat::invariant());

        let german = NumberFormat::de_de();
        assert_eq!(german.decimal_separator, ",");
        assert_eq!(german.group_separator, ".");
        assert!(german.validate().is_ok());

        let indian = NumberFormat::en_in();
        assert_eq!(indian.group_sizes, vec![3, 2]);
    }

    #[test]
    fn test_validation() {
        let clashing = NumberFormat::invariant().with_decimal_separator(",");
        assert!(clashing.validate().is_err());

        let empty_sign = NumberFormat::invariant().with_negative_sign("");
        assert!(empty_sign.validate().is_err());

        let bad_sizes = NumberFormat::invariant().with_group_sizes(vec![0, 3]);
        assert!(bad_sizes.validate().is_err());

        let terminated = NumberFormat::invariant().with_group_sizes(vec![3, 0]);
        assert!(terminated.validate().is_ok());
    }
}
