// ============================================================================
// Primitive Conversions
// Constructors from integers and floats, narrowing conversions back out
// ============================================================================

use super::errors::{DecimalError, DecimalResult};
use super::value::{Decimal, MAX_MAGNITUDE, POW10};

// ============================================================================
// From Integers
// ============================================================================

macro_rules! impl_from_int {
    (signed $ty:ty) => {
        impl From<$ty> for Decimal {
            #[inline]
            fn from(value: $ty) -> Self {
                Self::from_raw_parts(value.unsigned_abs() as u128, 0, value < 0)
            }
        }
    };
    (unsigned $ty:ty) => {
        impl From<$ty> for Decimal {
            #[inline]
            fn from(value: $ty) -> Self {
                Self::from_raw_parts(value as u128, 0, false)
            }
        }
    };
}

impl_from_int!(unsigned u8);
impl_from_int!(unsigned u16);
impl_from_int!(unsigned u32);
impl_from_int!(unsigned u64);
impl_from_int!(signed i8);
impl_from_int!(signed i16);
impl_from_int!(signed i32);
impl_from_int!(signed i64);

impl Decimal {
    /// Create from a signed 64-bit integer at scale 0.
    #[inline]
    pub fn from_i64(value: i64) -> Self {
        Self::from(value)
    }

    /// Create from an unsigned 64-bit integer at scale 0.
    #[inline]
    pub fn from_u64(value: u64) -> Self {
        Self::from(value)
    }

    // ========================================================================
    // From Floats
    // ========================================================================

    /// Create from an IEEE 754 double.
    ///
    /// The float is rendered to its nearest decimal within 15 significant
    /// digits and that rendering is taken as the exact value; trailing-zero
    /// factors are normalized out. Values below half of the smallest decimal
    /// step collapse to zero.
    ///
    /// # Errors
    /// Returns `Overflow` for NaN, infinities and magnitudes beyond the
    /// decimal range.
    pub fn from_f64(value: f64) -> DecimalResult<Self> {
        Self::from_float(value, 14)
    }

    /// Create from an IEEE 754 single, using 7 significant digits.
    ///
    /// # Errors
    /// Returns `Overflow` for NaN, infinities and magnitudes beyond the
    /// decimal range.
    pub fn from_f32(value: f32) -> DecimalResult<Self> {
        // f32 -> f64 is exact, so the 7-digit rendering below is the
        // rendering of the original single.
        Self::from_float(value as f64, 6)
    }

    fn from_float(value: f64, fraction_digits: usize) -> DecimalResult<Self> {
        if !value.is_finite() {
            return Err(DecimalError::Overflow);
        }
        if value == 0.0 {
            return Ok(Self::from_raw_parts(0, 0, value.is_sign_negative()));
        }

        let negative = value < 0.0;
        let text = format!("{:.*e}", fraction_digits, value.abs());
        let Some((mantissa_text, exponent_text)) = text.split_once('e') else {
            return Err(DecimalError::InvalidFormat);
        };
        let exponent: i32 = exponent_text
            .parse()
            .map_err(|_| DecimalError::InvalidFormat)?;

        let mut digits: u128 = 0;
        for byte in mantissa_text.bytes() {
            match byte {
                b'.' => {},
                b'0'..=b'9' => digits = digits * 10 + (byte - b'0') as u128,
                _ => return Err(DecimalError::InvalidFormat),
            }
        }

        Self::from_scientific_parts(digits, exponent - fraction_digits as i32, negative)
    }

    /// `digits * 10^exponent` under the crate rounding policy.
    fn from_scientific_parts(digits: u128, exponent: i32, negative: bool) -> DecimalResult<Self> {
        if digits == 0 {
            return Ok(Self::from_raw_parts(0, 0, negative));
        }
        if exponent >= 0 {
            if exponent > Self::MAX_SCALE as i32 {
                return Err(DecimalError::Overflow);
            }
            let magnitude = digits
                .checked_mul(POW10[exponent as usize])
                .filter(|m| *m <= MAX_MAGNITUDE)
                .ok_or(DecimalError::Overflow)?;
            return Ok(Self::normalize(magnitude, 0, negative));
        }

        let scale = -exponent;
        if scale <= Self::MAX_SCALE as i32 {
            return Ok(Self::normalize(digits, scale as u8, negative));
        }

        // More fractional digits than the type holds: round half away from
        // zero at the maximum scale. The float path never carries more than
        // 15 digits, so an excess beyond the table means the value is below
        // half the smallest step.
        let excess = scale - Self::MAX_SCALE as i32;
        if excess > Self::MAX_SCALE as i32 {
            return Ok(Self::from_raw_parts(0, 0, negative));
        }
        let unit = POW10[excess as usize];
        let (mut magnitude, rem) = (digits / unit, digits % unit);
        if rem * 2 >= unit {
            magnitude += 1;
        }
        Ok(Self::normalize(magnitude, Self::MAX_SCALE, negative))
    }

    // ========================================================================
    // Narrowing Conversions
    // ========================================================================

    /// Truncated integer magnitude as a signed 128-bit value.
    fn truncated_signed(&self) -> i128 {
        let truncated = (self.magnitude() / POW10[self.scale() as usize]) as i128;
        if self.is_sign_negative() {
            -truncated
        } else {
            truncated
        }
    }
}

macro_rules! impl_to_int {
    ($fn_name:ident, $ty:ty) => {
        impl Decimal {
            /// Truncate toward zero and convert.
            ///
            /// # Errors
            /// Returns `Overflow` when the truncated value is out of the
            /// target range.
            pub fn $fn_name(&self) -> DecimalResult<$ty> {
                <$ty>::try_from(self.truncated_signed()).map_err(|_| DecimalError::Overflow)
            }
        }

        impl TryFrom<Decimal> for $ty {
            type Error = DecimalError;

            fn try_from(value: Decimal) -> DecimalResult<$ty> {
                value.$fn_name()
            }
        }
    };
}

impl_to_int!(to_i8, i8);
impl_to_int!(to_i16, i16);
impl_to_int!(to_i32, i32);
impl_to_int!(to_i64, i64);
impl_to_int!(to_u8, u8);
impl_to_int!(to_u16, u16);
impl_to_int!(to_u32, u32);
impl_to_int!(to_u64, u64);

impl Decimal {
    /// Nearest double; lossy beyond 15-16 significant digits.
    pub fn to_f64(&self) -> f64 {
        let value = self.magnitude() as f64 / POW10[self.scale() as usize] as f64;
        if self.is_sign_negative() {
            -value
        } else {
            value
        }
    }

    /// Nearest single; lossy beyond 7 significant digits.
    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }
}

impl From<Decimal> for f64 {
    fn from(value: Decimal) -> f64 {
        value.to_f64()
    }
}

impl From<Decimal> for f32 {
    fn from(value: Decimal) -> f32 {
        value.to_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(text: &str) -> Decimal {
        text.parse().unwrap()
    }

    #[test]
    fn test_from_int_widths() {
        assert_eq!(Decimal::from(i32::MAX).to_string(), "2147483647");
        assert_eq!(Decimal::from(i64::MAX).to_string(), "9223372036854775807");
        assert_eq!(Decimal::from(i64::MIN).to_string(), "-9223372036854775808");
        assert_eq!(Decimal::from(u32::MAX).to_string(), "4294967295");
        assert_eq!(Decimal::from(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(Decimal::from(-128i8).to_string(), "-128");
        assert_eq!(Decimal::from(255u8).to_string(), "255");
        assert_eq!(Decimal::from_i64(-42), Decimal::from(-42i64));
        assert_eq!(Decimal::from_u64(42), Decimal::from(42u64));
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(
            Decimal::from_f64(123456789.123456).unwrap().to_string(),
            "123456789.123456"
        );
        assert_eq!(Decimal::from_f64(0.5).unwrap(), dec("0.5"));
        assert_eq!(Decimal::from_f64(-2.5).unwrap(), dec("-2.5"));
        assert_eq!(Decimal::from_f64(1e20).unwrap().to_string(), "100000000000000000000");
        assert_eq!(Decimal::from_f64(1e27).unwrap().to_string(), "1000000000000000000000000000");
    }

    #[test]
    fn test_from_f64_zero_and_tiny() {
        let negative_zero = Decimal::from_f64(-0.0).unwrap();
        assert!(negative_zero.is_zero());
        assert!(negative_zero.is_sign_negative());

        // below half of 10^-28 collapses to zero
        assert_eq!(Decimal::from_f64(1e-30).unwrap(), Decimal::ZERO);
        assert_eq!(Decimal::from_f64(1e-300).unwrap(), Decimal::ZERO);
        // just above half a step rounds to the smallest value
        assert_eq!(
            Decimal::from_f64(5.1e-29).unwrap().to_string(),
            "0.0000000000000000000000000001"
        );
    }

    #[test]
    fn test_from_f64_invalid() {
        assert_eq!(Decimal::from_f64(f64::NAN), Err(DecimalError::Overflow));
        assert_eq!(Decimal::from_f64(f64::INFINITY), Err(DecimalError::Overflow));
        assert_eq!(
            Decimal::from_f64(f64::NEG_INFINITY),
            Err(DecimalError::Overflow)
        );
        assert_eq!(Decimal::from_f64(1e29), Err(DecimalError::Overflow));
        assert_eq!(Decimal::from_f64(-8e28), Err(DecimalError::Overflow));
    }

    #[test]
    fn test_from_f32() {
        // the nearest single to 123456789.123456 carries 7 significant digits
        let single = 123456789.123456_f32;
        assert_eq!(Decimal::from_f32(single).unwrap().to_string(), "123456800");

        assert_eq!(Decimal::from_f32(12345.5).unwrap(), dec("12345.5"));
        assert_eq!(Decimal::from_f32(f32::NAN), Err(DecimalError::Overflow));
        assert_eq!(Decimal::from_f32(1e38), Err(DecimalError::Overflow));
    }

    #[test]
    fn test_to_float_round_trips() {
        for value in [12345.12_f32, 1e20, 1e27] {
            assert_eq!(Decimal::from_f32(value).unwrap().to_f32(), value);
            assert_eq!(Decimal::from_f32(-value).unwrap().to_f32(), -value);
        }
        for value in [123456789.123456_f64, 1e20, 1e27] {
            assert_eq!(Decimal::from_f64(value).unwrap().to_f64(), value);
            assert_eq!(Decimal::from_f64(-value).unwrap().to_f64(), -value);
        }
        assert_eq!(Decimal::from(i64::MAX).to_f64(), i64::MAX as f64);
        assert_eq!(Decimal::from(-i64::MAX).to_f64(), -(i64::MAX as f64));
    }

    #[test]
    fn test_to_signed_ints() {
        assert_eq!(Decimal::from(i8::MIN).to_i8(), Ok(i8::MIN));
        assert_eq!(dec("-123").to_i8(), Ok(-123));
        assert_eq!(dec("123").to_i8(), Ok(123));
        assert_eq!(Decimal::from(i8::MAX).to_i8(), Ok(i8::MAX));
        assert_eq!(dec("-129").to_i8(), Err(DecimalError::Overflow));
        assert_eq!(dec("128").to_i8(), Err(DecimalError::Overflow));

        assert_eq!(Decimal::from(i16::MIN).to_i16(), Ok(i16::MIN));
        assert_eq!(dec("-32769").to_i16(), Err(DecimalError::Overflow));
        assert_eq!(dec("32768").to_i16(), Err(DecimalError::Overflow));

        assert_eq!(Decimal::from(i32::MIN).to_i32(), Ok(i32::MIN));
        assert_eq!(Decimal::from(i32::MAX).to_i32(), Ok(i32::MAX));
        assert_eq!(dec("-2147483649").to_i32(), Err(DecimalError::Overflow));
        assert_eq!(dec("2147483648").to_i32(), Err(DecimalError::Overflow));

        assert_eq!(Decimal::from(i64::MIN).to_i64(), Ok(i64::MIN));
        assert_eq!(Decimal::from(i64::MAX).to_i64(), Ok(i64::MAX));
        assert_eq!(Decimal::MAX.to_i64(), Err(DecimalError::Overflow));
    }

    #[test]
    fn test_to_unsigned_ints() {
        assert_eq!(dec("0").to_u8(), Ok(0));
        assert_eq!(dec("123").to_u8(), Ok(123));
        assert_eq!(dec("255").to_u8(), Ok(255));
        assert_eq!(dec("-1").to_u8(), Err(DecimalError::Overflow));
        assert_eq!(dec("256").to_u8(), Err(DecimalError::Overflow));

        assert_eq!(dec("65535").to_u16(), Ok(u16::MAX));
        assert_eq!(dec("65536").to_u16(), Err(DecimalError::Overflow));

        assert_eq!(Decimal::from(u32::MAX).to_u32(), Ok(u32::MAX));
        assert_eq!(dec("4294967296").to_u32(), Err(DecimalError::Overflow));

        assert_eq!(Decimal::from(u64::MAX).to_u64(), Ok(u64::MAX));
        assert_eq!(dec("-1").to_u64(), Err(DecimalError::Overflow));
        assert_eq!(Decimal::MAX.to_u64(), Err(DecimalError::Overflow));
    }

    #[test]
    fn test_narrowing_truncates_toward_zero() {
        assert_eq!(dec("123.999").to_i32(), Ok(123));
        assert_eq!(dec("-123.999").to_i32(), Ok(-123));
        // a negative fraction truncates to zero, which is in range
        assert_eq!(dec("-0.9").to_u32(), Ok(0));
    }

    #[test]
    fn test_try_from_mirrors_named_functions() {
        assert_eq!(i32::try_from(dec("123.45")), Ok(123));
        assert_eq!(u8::try_from(dec("300")), Err(DecimalError::Overflow));
        assert_eq!(f64::from(dec("1.5")), 1.5);
    }
}
