// ============================================================================
// Decimal Formatting
// Style-driven rendering against a locale's number rules
// ============================================================================

use super::locale::{NegativePattern, NumberFormat};
use crate::decimal::{Decimal, DecimalError, DecimalResult, POW10};
use arrayvec::ArrayVec;

/// Render `value` under a format spec and locale rules.
///
/// Specs:
/// - `G` (or empty): all stored-scale digits, no grouping
/// - `F[n]`: fixed `n` fraction digits (locale default when omitted)
/// - `N[n]`: fixed digits plus grouping and the number negative pattern
/// - `C[n]`: `N` plus the currency symbol and its negative pattern
/// - `X`: the 4-word bit encoding as hex, flags word first
///
/// Fraction counts below the stored scale round half away from zero; counts
/// above it pad with zeros.
///
/// # Errors
/// Returns `InvalidFormat` for any other spec character or a digit count
/// above 28.
pub fn format_with(value: &Decimal, spec: &str, rules: &NumberFormat) -> DecimalResult<String> {
    let (kind, digits) = match parse_spec(spec) {
        Ok(parsed) => parsed,
        Err(error) => {
            tracing::trace!(spec, "unsupported decimal format spec");
            return Err(error);
        },
    };
    let resolved = digits.unwrap_or(rules.default_decimal_digits);
    Ok(match kind {
        b'G' => render(value, None, rules, false, NegativePattern::LeadingSign, None),
        b'F' => render(
            value,
            Some(resolved),
            rules,
            false,
            NegativePattern::LeadingSign,
            None,
        ),
        b'N' => render(value, Some(resolved), rules, true, rules.negative_pattern, None),
        b'C' => render(
            value,
            Some(resolved),
            rules,
            true,
            rules.currency_negative_pattern,
            Some(rules.currency_symbol.as_str()),
        ),
        _ => hex_bits(value),
    })
}

impl Decimal {
    /// Method form of [`format_with`].
    ///
    /// # Errors
    /// Same as [`format_with`].
    pub fn format_with(&self, spec: &str, rules: &NumberFormat) -> DecimalResult<String> {
        format_with(self, spec, rules)
    }
}

fn parse_spec(spec: &str) -> DecimalResult<(u8, Option<u8>)> {
    if spec.is_empty() {
        return Ok((b'G', None));
    }
    let kind = spec.as_bytes()[0].to_ascii_uppercase();
    let digits_text = &spec[1..];
    match kind {
        b'G' | b'X' => {
            if digits_text.is_empty() {
                Ok((kind, None))
            } else {
                Err(DecimalError::InvalidFormat)
            }
        },
        b'F' | b'N' | b'C' => {
            if digits_text.is_empty() {
                return Ok((kind, None));
            }
            let digits: u8 = digits_text.parse().map_err(|_| DecimalError::InvalidFormat)?;
            if digits > Decimal::MAX_SCALE {
                return Err(DecimalError::InvalidFormat);
            }
            Ok((kind, Some(digits)))
        },
        _ => Err(DecimalError::InvalidFormat),
    }
}

// ============================================================================
// Renderer
// ============================================================================

/// Magnitude digits, most significant first, without heap traffic.
fn digit_buffer(mut magnitude: u128) -> ArrayVec<u8, 40> {
    let mut buffer = ArrayVec::new();
    if magnitude == 0 {
        buffer.push(b'0');
        return buffer;
    }
    while magnitude > 0 {
        buffer.push(b'0' + (magnitude % 10) as u8);
        magnitude /= 10;
    }
    buffer.reverse();
    buffer
}

fn render(
    value: &Decimal,
    fraction_digits: Option<u8>,
    rules: &NumberFormat,
    grouped: bool,
    pattern: NegativePattern,
    currency: Option<&str>,
) -> String {
    // bring the magnitude to the requested fraction digit count
    let (magnitude, scale) = match fraction_digits {
        Some(target) if target < value.scale() => {
            let unit = POW10[(value.scale() - target) as usize];
            let (quotient, rem) = (value.magnitude() / unit, value.magnitude() % unit);
            (quotient + (rem * 2 >= unit) as u128, target)
        },
        _ => (value.magnitude(), value.scale()),
    };
    let target = fraction_digits.unwrap_or(scale);

    let digits = digit_buffer(magnitude);
    let digit_count = digits.len();
    let int_digits: &[u8] = if digit_count > scale as usize {
        &digits[..digit_count - scale as usize]
    } else {
        b"0"
    };
    let frac_digits: &[u8] = if scale == 0 {
        &[]
    } else if digit_count >= scale as usize {
        &digits[digit_count - scale as usize..]
    } else {
        &digits[..]
    };

    let mut body = String::with_capacity(digit_count + 8);
    if let Some(symbol) = currency {
        body.push_str(symbol);
    }

    if grouped {
        push_grouped(&mut body, int_digits, rules);
    } else {
        for byte in int_digits {
            body.push(*byte as char);
        }
    }

    if target > 0 {
        body.push_str(&rules.decimal_separator);
        for _ in 0..(scale as usize).saturating_sub(frac_digits.len()) {
            body.push('0');
        }
        for byte in frac_digits {
            body.push(*byte as char);
        }
        for _ in 0..(target - scale) {
            body.push('0');
        }
    }

    if value.is_sign_negative() {
        match pattern {
            NegativePattern::LeadingSign => format!("{}{}", rules.negative_sign, body),
            NegativePattern::Parentheses => format!("({})", body),
        }
    } else {
        body
    }
}

/// Write the integer digits with the locale's group separators. The first
/// group size is the rightmost; the last repeats; a zero stops grouping.
fn push_grouped(out: &mut String, digits: &[u8], rules: &NumberFormat) {
    if rules.group_separator.is_empty() || rules.group_sizes.is_empty() {
        for byte in digits {
            out.push(*byte as char);
        }
        return;
    }

    let mut chunks: Vec<&[u8]> = Vec::new();
    let mut remaining = digits;
    let mut size_index = 0;
    loop {
        let size = rules.group_sizes[size_index];
        if size == 0 || remaining.len() <= size as usize {
            chunks.push(remaining);
            break;
        }
        let (head, tail) = remaining.split_at(remaining.len() - size as usize);
        chunks.push(tail);
        remaining = head;
        if size_index + 1 < rules.group_sizes.len() {
            size_index += 1;
        }
    }

    for (index, chunk) in chunks.iter().rev().enumerate() {
        if index > 0 {
            out.push_str(&rules.group_separator);
        }
        for byte in *chunk {
            out.push(*byte as char);
        }
    }
}

fn hex_bits(value: &Decimal) -> String {
    let bits = value.to_bits();
    format!(
        "{:08X}{:08X}{:08X}{:08X}",
        bits[3] as u32, bits[2] as u32, bits[1] as u32, bits[0] as u32
    )
}

// ============================================================================
// Tests
// ============================================================================
