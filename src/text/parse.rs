// ============================================================================
// Decimal Parsing
// Style-gated linear state machine over the locale's number grammar
// ============================================================================

use super::locale::NumberFormat;
use super::style::ParseStyle;
use crate::decimal::{Decimal, DecimalError, DecimalResult, MAX_MAGNITUDE, POW10};
use std::str::FromStr;

/// Parse `text` under the given style and locale rules.
///
/// # Errors
/// - `InvalidFormat` when the text does not match the grammar the style
///   permits, contains no digits, or carries trailing input.
/// - `Overflow` when the value does not fit the decimal range.
pub fn parse_with(text: &str, style: ParseStyle, rules: &NumberFormat) -> DecimalResult<Decimal> {
    match Scanner::new(text, style, rules).run() {
        Ok(value) => Ok(value),
        Err(error) => {
            tracing::trace!(input = text, %error, "decimal parse rejected");
            Err(error)
        },
    }
}

/// Non-raising variant of [`parse_with`]: `None` instead of an error.
pub fn try_parse_with(text: &str, style: ParseStyle, rules: &NumberFormat) -> Option<Decimal> {
    Scanner::new(text, style, rules).run().ok()
}

/// Parse with [`ParseStyle::FLOAT`] and the invariant rules.
///
/// # Errors
/// Same as [`parse_with`].
pub fn parse(text: &str) -> DecimalResult<Decimal> {
    parse_with(text, ParseStyle::FLOAT, &NumberFormat::invariant())
}

/// Non-raising variant of [`parse`].
pub fn try_parse(text: &str) -> Option<Decimal> {
    parse(text).ok()
}

impl FromStr for Decimal {
    type Err = DecimalError;

    /// Parse from a decimal string with [`ParseStyle::FLOAT`] and the
    /// invariant rules.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

// ============================================================================
// Scanner
// ============================================================================

/// Scanner states in the order the grammar admits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    LeadingWhite,
    Sign,
    IntegerDigits,
    GroupSeparator,
    DecimalPoint,
    FractionDigits,
    Exponent,
    TrailingWhite,
    Done,
}

struct Scanner<'a> {
    text: &'a str,
    pos: usize,
    style: ParseStyle,
    rules: &'a NumberFormat,
    state: State,

    negative: bool,
    sign_seen: bool,
    paren_open: bool,
    currency_seen: bool,

    magnitude: u128,
    scale: u8,
    any_digits: bool,
    /// First fraction digit that no longer fit; drives half-away rounding
    first_dropped: Option<u8>,

    exponent: i32,
    exponent_negative: bool,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str, style: ParseStyle, rules: &'a NumberFormat) -> Self {
        Self {
            text,
            pos: 0,
            style,
            rules,
            state: State::LeadingWhite,
            negative: false,
            sign_seen: false,
            paren_open: false,
            currency_seen: false,
            magnitude: 0,
            scale: 0,
            any_digits: false,
            first_dropped: None,
            exponent: 0,
            exponent_negative: false,
        }
    }

    #[inline]
    fn allows(&self, flag: ParseStyle) -> bool {
        self.style.contains(flag)
    }

    #[inline]
    fn rest(&self) -> &str {
        &self.text[self.pos..]
    }

    fn eat(&mut self, token: &str) -> bool {
        if !token.is_empty() && self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn peek_digit(&self) -> Option<u8> {
        match self.rest().as_bytes().first() {
            Some(byte) if byte.is_ascii_digit() => Some(byte - b'0'),
            _ => None,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.rest().chars().next() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn push_integer_digit(&mut self, digit: u8) -> DecimalResult<()> {
        self.magnitude = self
            .magnitude
            .checked_mul(10)
            .and_then(|m| m.checked_add(digit as u128))
            .filter(|m| *m <= MAX_MAGNITUDE)
            .ok_or(DecimalError::Overflow)?;
        self.any_digits = true;
        self.pos += 1;
        Ok(())
    }

    fn push_fraction_digit(&mut self, digit: u8) {
        self.any_digits = true;
        self.pos += 1;
        if self.first_dropped.is_some() {
            return;
        }
        if self.scale >= Decimal::MAX_SCALE {
            self.first_dropped = Some(digit);
            return;
        }
        let extended = self
            .magnitude
            .checked_mul(10)
            .and_then(|m| m.checked_add(digit as u128))
            .filter(|m| *m <= MAX_MAGNITUDE);
        match extended {
            Some(magnitude) => {
                self.magnitude = magnitude;
                self.scale += 1;
            },
            None => self.first_dropped = Some(digit),
        }
    }

    fn run(mut self) -> DecimalResult<Decimal> {
        let rules = self.rules;

        loop {
            match self.state {
                State::LeadingWhite => {
                    if self.allows(ParseStyle::LEADING_WHITESPACE) {
                        self.skip_whitespace();
                    }
                    self.state = State::Sign;
                },

                State::Sign => {
                    // parentheses, a sign and the currency symbol may precede
                    // the digits; the symbol may sit on either side of the sign
                    for _ in 0..2 {
                        if self.allows(ParseStyle::CURRENCY_SYMBOL) && !self.currency_seen {
                            self.currency_seen = self.eat(&rules.currency_symbol);
                        }
                        if !self.sign_seen {
                            if self.allows(ParseStyle::PARENTHESES) && self.eat("(") {
                                self.paren_open = true;
                                self.negative = true;
                                self.sign_seen = true;
                            } else if self.allows(ParseStyle::LEADING_SIGN) {
                                if self.eat(&rules.negative_sign) {
                                    self.negative = true;
                                    self.sign_seen = true;
                                } else if self.eat(&rules.positive_sign) {
                                    self.sign_seen = true;
                                }
                            }
                        }
                    }
                    self.state = State::IntegerDigits;
                },

                State::IntegerDigits => {
                    if let Some(digit) = self.peek_digit() {
                        self.push_integer_digit(digit)?;
                    } else if self.allows(ParseStyle::GROUP_SEPARATORS)
                        && self.any_digits
                        && !rules.group_separator.is_empty()
                        && self.rest().starts_with(rules.group_separator.as_str())
                    {
                        self.state = State::GroupSeparator;
                    } else if self.allows(ParseStyle::DECIMAL_POINT)
                        && self.rest().starts_with(rules.decimal_separator.as_str())
                    {
                        self.state = State::DecimalPoint;
                    } else if self.allows(ParseStyle::EXPONENT)
                        && self.any_digits
                        && matches!(self.rest().as_bytes().first(), Some(b'e' | b'E'))
                    {
                        self.state = State::Exponent;
                    } else {
                        self.state = State::TrailingWhite;
                    }
                },

                State::GroupSeparator => {
                    self.pos += rules.group_separator.len();
                    if self.peek_digit().is_none() {
                        return Err(DecimalError::InvalidFormat);
                    }
                    self.state = State::IntegerDigits;
                },

                State::DecimalPoint => {
                    self.pos += rules.decimal_separator.len();
                    self.state = State::FractionDigits;
                },

                State::FractionDigits => {
                    if let Some(digit) = self.peek_digit() {
                        self.push_fraction_digit(digit);
                    } else if self.allows(ParseStyle::EXPONENT)
                        && self.any_digits
                        && matches!(self.rest().as_bytes().first(), Some(b'e' | b'E'))
                    {
                        self.state = State::Exponent;
                    } else {
                        self.state = State::TrailingWhite;
                    }
                },

                State::Exponent => {
                    self.pos += 1; // the e/E marker
                    if self.eat(&rules.negative_sign) || self.eat("-") {
                        self.exponent_negative = true;
                    } else {
                        let _ = self.eat(&rules.positive_sign) || self.eat("+");
                    }
                    let mut exponent_digits = false;
                    while let Some(digit) = self.peek_digit() {
                        // saturate far beyond the representable range
                        self.exponent = (self.exponent * 10 + digit as i32).min(10_000);
                        exponent_digits = true;
                        self.pos += 1;
                    }
                    if !exponent_digits {
                        return Err(DecimalError::InvalidFormat);
                    }
                    self.state = State::TrailingWhite;
                },

                State::TrailingWhite => {
                    if self.paren_open && !self.eat(")") {
                        return Err(DecimalError::InvalidFormat);
                    }
                    if self.allows(ParseStyle::CURRENCY_SYMBOL) && !self.currency_seen {
                        self.currency_seen = self.eat(&rules.currency_symbol);
                    }
                    if self.allows(ParseStyle::TRAILING_WHITESPACE) {
                        self.skip_whitespace();
                    }
                    self.state = State::Done;
                },

                State::Done => break,
            }
        }

        if !self.any_digits || self.pos != self.text.len() {
            return Err(DecimalError::InvalidFormat);
        }
        self.finish()
    }

    /// Apply capacity rounding and the exponent to the scanned digits.
    fn finish(self) -> DecimalResult<Decimal> {
        let mut magnitude = self.magnitude;
        let mut scale = self.scale as i32;

        if let Some(dropped) = self.first_dropped {
            if dropped >= 5 {
                magnitude += 1;
                if magnitude > MAX_MAGNITUDE {
                    if scale == 0 {
                        return Err(DecimalError::Overflow);
                    }
                    magnitude /= 10;
                    scale -= 1;
                }
            }
        }

        let exponent = if self.exponent_negative {
            -self.exponent
        } else {
            self.exponent
        };
        scale -= exponent;

        if magnitude == 0 {
            let scale = scale.clamp(0, Decimal::MAX_SCALE as i32);
            return Ok(Decimal::from_raw_parts(0, scale as u8, self.negative));
        }

        if scale < 0 {
            let shift = -scale;
            if shift > Decimal::MAX_SCALE as i32 {
                return Err(DecimalError::Overflow);
            }
            magnitude = magnitude
                .checked_mul(POW10[shift as usize])
                .filter(|m| *m <= MAX_MAGNITUDE)
                .ok_or(DecimalError::Overflow)?;
            scale = 0;
        } else if scale > Decimal::MAX_SCALE as i32 {
            // more fractional digits than the type holds: round half away
            // from zero at the maximum scale
            let excess = scale - Decimal::MAX_SCALE as i32;
            if excess > 29 {
                magnitude = 0;
            } else {
                let unit = if excess == 29 {
                    POW10[28] * 10
                } else {
                    POW10[excess as usize]
                };
                let rem = magnitude % unit;
                magnitude /= unit;
                if rem * 2 >= unit {
                    magnitude += 1;
                }
            }
            scale = Decimal::MAX_SCALE as i32;
        }

        Ok(Decimal::from_raw_parts(magnitude, scale as u8, self.negative))
    }
}

// ============================================================================
// Tests
// ============================================================================
