// ============================================================================
// Decimal Value
// 96-bit magnitude, base-10 scaled fixed-point number
// ============================================================================

use super::errors::{DecimalError, DecimalResult};
use super::wide::UInt192;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// Scaled fixed-point decimal number.
///
/// Internally stores an unsigned 96-bit magnitude, a power-of-ten scale in
/// `0..=28` and an explicit sign:
///
/// ```text
/// value = (-1)^sign * magnitude * 10^-scale
/// ```
///
/// # Value Range
/// - Maximum: +79,228,162,514,264,337,593,543,950,335
/// - Minimum: -79,228,162,514,264,337,593,543,950,335
/// - Smallest nonzero step: 10^-28
///
/// Values are immutable; every operation allocates a fresh result, so sharing
/// across threads needs no synchronization. Arithmetic results are
/// renormalized to the smallest scale that represents them exactly, while
/// constructors, parsing and the bit API preserve the scale they were given —
/// `from_bits(d.to_bits())` reproduces `d` word for word, not just
/// numerically.
///
/// # Example
/// ```
/// use decimal_engine::Decimal;
///
/// let price: Decimal = "123.45".parse().unwrap();
/// let qty = Decimal::from(3);
/// let total = price.checked_mul(qty).unwrap();
/// assert_eq!(total.to_string(), "370.35");
/// ```
#[derive(Clone, Copy)]
pub struct Decimal {
    magnitude: u128,
    scale: u8,
    negative: bool,
}

// ============================================================================
// Scale Constants
// ============================================================================

/// Compute 10^n at compile time
const fn pow10(n: u8) -> u128 {
    let mut result: u128 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// Powers of ten up to the maximum scale
pub(crate) const POW10: [u128; 29] = {
    let mut table = [0u128; 29];
    let mut i = 0u8;
    while i < 29 {
        table[i as usize] = pow10(i);
        i += 1;
    }
    table
};

/// Largest magnitude that fits in 96 bits: 2^96 - 1
pub(crate) const MAX_MAGNITUDE: u128 = (1 << 96) - 1;

const SIGN_FLAG: u32 = 0x8000_0000;
const SCALE_MASK: u32 = 0x00FF_0000;
const SCALE_SHIFT: u32 = 16;

impl Decimal {
    /// Highest admissible scale (number of fractional digits)
    pub const MAX_SCALE: u8 = 28;

    /// Zero value
    pub const ZERO: Self = Self::from_raw_parts(0, 0, false);

    /// One (1)
    pub const ONE: Self = Self::from_raw_parts(1, 0, false);

    /// Minus one (-1)
    pub const MINUS_ONE: Self = Self::from_raw_parts(1, 0, true);

    /// Maximum representable value: 79,228,162,514,264,337,593,543,950,335
    pub const MAX: Self = Self::from_raw_parts(MAX_MAGNITUDE, 0, false);

    /// Minimum representable value: -79,228,162,514,264,337,593,543,950,335
    pub const MIN: Self = Self::from_raw_parts(MAX_MAGNITUDE, 0, true);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Internal constructor. Callers guarantee the invariants.
    #[inline]
    pub(crate) const fn from_raw_parts(magnitude: u128, scale: u8, negative: bool) -> Self {
        debug_assert!(magnitude <= MAX_MAGNITUDE);
        debug_assert!(scale <= Self::MAX_SCALE);
        Self {
            magnitude,
            scale,
            negative,
        }
    }

    /// Create from three magnitude words, a sign and a scale.
    ///
    /// The words are the low, middle and high 32 bits of the 96-bit
    /// magnitude.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `scale > 28`.
    pub fn from_parts(lo: u32, mid: u32, hi: u32, negative: bool, scale: u8) -> DecimalResult<Self> {
        if scale > Self::MAX_SCALE {
            return Err(DecimalError::InvalidArgument);
        }
        let magnitude = lo as u128 | ((mid as u128) << 32) | ((hi as u128) << 64);
        Ok(Self::from_raw_parts(magnitude, scale, negative))
    }

    /// Create from the canonical 4-word encoding `[lo, mid, hi, flags]`.
    ///
    /// The `flags` word encodes the sign in bit 31 and the scale in bits
    /// 16-23; all other bits are reserved.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if a reserved bit is set or the scale
    /// exceeds 28.
    pub fn from_bits(bits: [i32; 4]) -> DecimalResult<Self> {
        let flags = bits[3] as u32;
        if flags & !(SIGN_FLAG | SCALE_MASK) != 0 {
            return Err(DecimalError::InvalidArgument);
        }
        let scale = ((flags & SCALE_MASK) >> SCALE_SHIFT) as u8;
        Self::from_parts(
            bits[0] as u32,
            bits[1] as u32,
            bits[2] as u32,
            flags & SIGN_FLAG != 0,
            scale,
        )
    }

    /// Create from a word slice, validating its length.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `bits.len() != 4` or the words fail the
    /// [`from_bits`](Self::from_bits) checks.
    pub fn try_from_bits(bits: &[i32]) -> DecimalResult<Self> {
        let words: [i32; 4] = bits
            .try_into()
            .map_err(|_| DecimalError::InvalidArgument)?;
        Self::from_bits(words)
    }

    /// The canonical 4-word encoding `[lo, mid, hi, flags]`.
    ///
    /// Round-tripping through [`from_bits`](Self::from_bits) reproduces the
    /// exact sign, scale and magnitude.
    pub fn to_bits(&self) -> [i32; 4] {
        let mut flags = (self.scale as u32) << SCALE_SHIFT;
        if self.negative {
            flags |= SIGN_FLAG;
        }
        [
            self.magnitude as u32 as i32,
            (self.magnitude >> 32) as u32 as i32,
            (self.magnitude >> 64) as u32 as i32,
            flags as i32,
        ]
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The unsigned 96-bit magnitude.
    #[inline]
    pub const fn magnitude(&self) -> u128 {
        self.magnitude
    }

    /// The power-of-ten scale (number of fractional digits), `0..=28`.
    #[inline]
    pub const fn scale(&self) -> u8 {
        self.scale
    }

    /// Whether the sign flag is set. True for negative zero as well.
    #[inline]
    pub const fn is_sign_negative(&self) -> bool {
        self.negative
    }

    /// Check if the value is zero (of either sign, at any scale).
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.magnitude == 0
    }

    /// Check if the value is strictly positive.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.magnitude != 0 && !self.negative
    }

    /// Check if the value is strictly negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.magnitude != 0 && self.negative
    }

    /// Absolute value.
    #[inline]
    pub const fn abs(self) -> Self {
        Self {
            magnitude: self.magnitude,
            scale: self.scale,
            negative: false,
        }
    }

    /// Value with the sign flag flipped. Zero keeps a printable `-0`.
    #[inline]
    pub const fn negate(self) -> Self {
        Self {
            magnitude: self.magnitude,
            scale: self.scale,
            negative: !self.negative,
        }
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    /// Reduce to the smallest scale that represents the value exactly.
    pub(crate) fn normalize(mut magnitude: u128, mut scale: u8, negative: bool) -> Self {
        while scale > 0 && magnitude % 10 == 0 {
            magnitude /= 10;
            scale -= 1;
        }
        Self::from_raw_parts(magnitude, scale, negative)
    }

    /// Magnitudes of both operands brought to the common (larger) scale.
    fn aligned(a: &Self, b: &Self) -> (UInt192, UInt192, u8) {
        let scale = a.scale.max(b.scale);
        let wa = UInt192::mul_128(a.magnitude, POW10[(scale - a.scale) as usize]);
        let wb = UInt192::mul_128(b.magnitude, POW10[(scale - b.scale) as usize]);
        (wa, wb, scale)
    }

    /// Split the magnitude at the decimal point: (integer part, fraction).
    #[inline]
    fn split_at_point(&self) -> (u128, u128) {
        let unit = POW10[self.scale as usize];
        (self.magnitude / unit, self.magnitude % unit)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// Operands are aligned to the larger scale; a result that no longer
    /// fits in 96 bits is rescued by trailing-zero removal only.
    ///
    /// # Errors
    /// Returns `Overflow` if the result magnitude exceeds 96 bits even at
    /// the smallest exact scale.
    pub fn checked_add(self, rhs: Self) -> DecimalResult<Self> {
        let (wa, wb, mut scale) = Self::aligned(&self, &rhs);

        let (mut wide, negative) = if self.negative == rhs.negative {
            (wa.add(wb), self.negative)
        } else {
            // signed-magnitude: subtract the smaller, keep the larger's sign
            match wa.cmp(&wb) {
                Ordering::Greater => (wa.sub(wb), self.negative),
                Ordering::Less => (wb.sub(wa), rhs.negative),
                Ordering::Equal => return Ok(Self::ZERO),
            }
        };

        // Smallest exact scale; this is also the only rescue permitted when
        // the aligned sum needs more than 96 bits.
        while scale > 0 {
            let (q, r) = wide.div_rem_u64(10);
            if r != 0 {
                break;
            }
            wide = q;
            scale -= 1;
        }

        if !wide.fits_u128() {
            return Err(DecimalError::Overflow);
        }
        let magnitude = wide.to_u128();
        if magnitude > MAX_MAGNITUDE {
            return Err(DecimalError::Overflow);
        }
        Ok(Self::from_raw_parts(magnitude, scale, negative))
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` under the same conditions as
    /// [`checked_add`](Self::checked_add).
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> DecimalResult<Self> {
        self.checked_add(rhs.negate())
    }

    /// Checked multiplication.
    ///
    /// The magnitudes are multiplied into a 192-bit intermediate at the sum
    /// of the input scales. While the product needs more than 96 bits or a
    /// scale above 28, it is divided by ten with the scale decremented; the
    /// last removed digit rounds the retained value half away from zero.
    ///
    /// # Errors
    /// Returns `Overflow` when the scale reaches zero and the product still
    /// does not fit.
    pub fn checked_mul(self, rhs: Self) -> DecimalResult<Self> {
        let negative = self.negative != rhs.negative;
        let mut wide = UInt192::mul_128(self.magnitude, rhs.magnitude);
        let mut scale = self.scale as u32 + rhs.scale as u32;

        let mut last_removed = 0u64;
        while scale > Self::MAX_SCALE as u32 || !wide.fits_u128() || wide.to_u128() > MAX_MAGNITUDE
        {
            if scale == 0 {
                return Err(DecimalError::Overflow);
            }
            let (q, r) = wide.div_rem_u64(10);
            wide = q;
            last_removed = r;
            scale -= 1;
        }

        let mut magnitude = wide.to_u128();
        if last_removed >= 5 {
            magnitude += 1;
            if magnitude > MAX_MAGNITUDE {
                if scale == 0 {
                    return Err(DecimalError::Overflow);
                }
                magnitude /= 10;
                scale -= 1;
            }
        }
        Ok(Self::normalize(magnitude, scale as u8, negative))
    }

    /// Checked division.
    ///
    /// Long division carried to the full 96-bit/28-digit precision; the first
    /// digit that no longer fits rounds the quotient half away from zero.
    ///
    /// # Errors
    /// - `DivisionByZero` when `rhs` is zero (for every dividend).
    /// - `Overflow` when the quotient's integer part exceeds 96 bits.
    pub fn checked_div(self, rhs: Self) -> DecimalResult<Self> {
        let divisor = rhs.magnitude;
        if divisor == 0 {
            return Err(DecimalError::DivisionByZero);
        }
        let negative = self.negative != rhs.negative;

        let mut scale = self.scale as i32 - rhs.scale as i32;
        let mut quotient = self.magnitude / divisor;
        let mut rem = self.magnitude % divisor;

        // Generate decimal digits until the value is exact, the magnitude is
        // saturated, or the scale limit is reached. A negative running scale
        // means the integer part is still incomplete, so failure to extend
        // there is an overflow rather than a rounding point.
        while scale < 0 || (rem != 0 && scale < Self::MAX_SCALE as i32) {
            let digit = rem * 10 / divisor;
            let next_rem = rem * 10 % divisor;
            let extended = quotient
                .checked_mul(10)
                .and_then(|q| q.checked_add(digit))
                .filter(|q| *q <= MAX_MAGNITUDE);
            match extended {
                Some(q) => {
                    quotient = q;
                    rem = next_rem;
                    scale += 1;
                },
                None => {
                    if scale < 0 {
                        return Err(DecimalError::Overflow);
                    }
                    break;
                },
            }
        }

        // Round half away from zero on the first undelivered digit.
        if rem != 0 && rem * 10 / divisor >= 5 {
            quotient += 1;
            if quotient > MAX_MAGNITUDE {
                quotient /= 10;
                scale -= 1;
            }
        }
        if scale < 0 {
            return Err(DecimalError::Overflow);
        }
        Ok(Self::normalize(quotient, scale as u8, negative))
    }

    /// Checked remainder: `a - trunc(a / b) * b`, keeping the sign of `a`
    /// (a negative zero result stays printable as negative).
    ///
    /// # Errors
    /// - `DivisionByZero` when `rhs` is zero.
    /// - `Overflow` when `trunc(a / b)` itself is unrepresentable.
    pub fn checked_rem(self, rhs: Self) -> DecimalResult<Self> {
        if rhs.magnitude == 0 {
            return Err(DecimalError::DivisionByZero);
        }

        let (wa, wb, scale) = Self::aligned(&self, &rhs);
        let (wq, wr) = wa.div_rem(wb);

        if !wq.fits_u128() || wq.to_u128() > MAX_MAGNITUDE {
            return Err(DecimalError::Overflow);
        }
        // The remainder is bounded by whichever operand carries the common
        // scale, so it always fits in 96 bits.
        debug_assert!(wr.fits_u128() && wr.to_u128() <= MAX_MAGNITUDE);
        Ok(Self::normalize(wr.to_u128(), scale, self.negative))
    }

    /// Checked increment by the unit value 1.
    ///
    /// # Errors
    /// Returns `Overflow` past [`Decimal::MAX`].
    #[inline]
    pub fn checked_increment(self) -> DecimalResult<Self> {
        self.checked_add(Self::ONE)
    }

    /// Checked decrement by the unit value 1.
    ///
    /// # Errors
    /// Returns `Overflow` past [`Decimal::MIN`].
    #[inline]
    pub fn checked_decrement(self) -> DecimalResult<Self> {
        self.checked_sub(Self::ONE)
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Integer part, rounding toward zero.
    pub fn trunc(self) -> Self {
        let (int_part, _) = self.split_at_point();
        Self::from_raw_parts(int_part, 0, self.negative)
    }

    /// Largest integer less than or equal to the value.
    pub fn floor(self) -> Self {
        let (int_part, frac) = self.split_at_point();
        let magnitude = if self.negative && frac != 0 {
            int_part + 1
        } else {
            int_part
        };
        Self::from_raw_parts(magnitude, 0, self.negative)
    }

    /// Smallest integer greater than or equal to the value.
    pub fn ceil(self) -> Self {
        let (int_part, frac) = self.split_at_point();
        let magnitude = if !self.negative && frac != 0 {
            int_part + 1
        } else {
            int_part
        };
        Self::from_raw_parts(magnitude, 0, self.negative)
    }

    /// Round to `decimals` fractional digits, half away from zero.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `decimals > 28`.
    pub fn round_to(self, decimals: u8) -> DecimalResult<Self> {
        if decimals > Self::MAX_SCALE {
            return Err(DecimalError::InvalidArgument);
        }
        if decimals >= self.scale {
            return Ok(self);
        }
        let unit = POW10[(self.scale - decimals) as usize];
        let (mut magnitude, rem) = (self.magnitude / unit, self.magnitude % unit);
        if rem * 2 >= unit {
            magnitude += 1;
        }
        Ok(Self::normalize(magnitude, decimals, self.negative))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Decimal {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Decimal {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    /// Scale-insensitive numeric order: `1.0` equals `1.00`, zeros compare
    /// equal regardless of sign and scale.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.magnitude == 0, other.magnitude == 0) {
            (true, true) => Ordering::Equal,
            (true, false) => {
                if other.negative {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            },
            (false, true) => {
                if self.negative {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            },
            (false, false) => {
                if self.negative != other.negative {
                    return if self.negative {
                        Ordering::Less
                    } else {
                        Ordering::Greater
                    };
                }
                let (wa, wb, _) = Self::aligned(self, other);
                let ordering = wa.cmp(&wb);
                if self.negative {
                    ordering.reverse()
                } else {
                    ordering
                }
            },
        }
    }
}

impl Hash for Decimal {
    /// Hashes the canonical triple so equal values hash equally even when
    /// their scales differ.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let canonical =
            Self::normalize(self.magnitude, self.scale, self.negative && self.magnitude != 0);
        canonical.magnitude.hash(state);
        canonical.scale.hash(state);
        canonical.negative.hash(state);
    }
}

impl Neg for Decimal {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

// Infallible operators for ergonomics (panic on failure - use checked_* in
// production code paths)
impl Add for Decimal {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("decimal addition overflow")
    }
}

impl Sub for Decimal {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("decimal subtraction overflow")
    }
}

impl Mul for Decimal {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).expect("decimal multiplication overflow")
    }
}

impl Div for Decimal {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).expect("decimal division failed")
    }
}

impl Rem for Decimal {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: Self) -> Self::Output {
        self.checked_rem(rhs).expect("decimal remainder failed")
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Decimal({}, magnitude={}, scale={})",
            self, self.magnitude, self.scale
        )
    }
}

impl fmt::Display for Decimal {
    /// Plain rendering with all stored-scale digits and `.` as separator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        let digits = self.magnitude.to_string();
        let scale = self.scale as usize;
        if scale == 0 {
            f.write_str(&digits)
        } else if digits.len() > scale {
            let point = digits.len() - scale;
            f.write_str(&digits[..point])?;
            f.write_str(".")?;
            f.write_str(&digits[point..])
        } else {
            f.write_str("0.")?;
            for _ in 0..scale - digits.len() {
                f.write_str("0")?;
            }
            f.write_str(&digits)
        }
    }
}

// ============================================================================
// Serde (string form keeps the exact scale across the wire)
// ============================================================================

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Decimal;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Decimal {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    struct DecimalVisitor;

    impl<'de> de::Visitor<'de> for DecimalVisitor {
        type Value = Decimal;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("a decimal number or its string form")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Decimal, E> {
            value.parse().map_err(E::custom)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Decimal, E> {
            Ok(Decimal::from(value))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Decimal, E> {
            Ok(Decimal::from(value))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Decimal, E> {
            Decimal::from_f64(value).map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Decimal {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
            deserializer.deserialize_any(DecimalVisitor)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_decimal() -> impl Strategy<Value = Decimal> {
        (any::<u128>(), 0u8..=28, any::<bool>()).prop_map(|(raw, scale, negative)| {
            Decimal::from_raw_parts(raw % (MAX_MAGNITUDE + 1), scale, negative)
        })
    }

    proptest! {
        #[test]
        fn prop_bits_round_trip_is_exact(d in arb_decimal()) {
            let bits = d.to_bits();
            let back = Decimal::from_bits(bits).unwrap();
            prop_assert_eq!(back.to_bits(), bits);
            prop_assert_eq!(back.magnitude(), d.magnitude());
            prop_assert_eq!(back.scale(), d.scale());
            prop_assert_eq!(back.is_sign_negative(), d.is_sign_negative());
        }

        #[test]
        fn prop_additive_identity(d in arb_decimal()) {
            prop_assert_eq!(d.checked_add(Decimal::ZERO).unwrap(), d);
        }

        #[test]
        fn prop_additive_inverse(d in arb_decimal()) {
            prop_assert_eq!(d.checked_add(d.negate()).unwrap(), Decimal::ZERO);
        }

        #[test]
        fn prop_multiplicative_identity(d in arb_decimal()) {
            prop_assert_eq!(d.checked_mul(Decimal::ONE).unwrap(), d);
        }

        #[test]
        fn prop_add_commutes(a in arb_decimal(), b in arb_decimal()) {
            prop_assert_eq!(a.checked_add(b), b.checked_add(a));
        }

        #[test]
        fn prop_compare_ignores_scale(d in arb_decimal()) {
            if d.magnitude() <= MAX_MAGNITUDE / 10 && d.scale() < Decimal::MAX_SCALE {
                let rescaled = Decimal::from_raw_parts(
                    d.magnitude() * 10,
                    d.scale() + 1,
                    d.is_sign_negative(),
                );
                prop_assert_eq!(rescaled, d);
            }
        }

        #[test]
        fn prop_display_parse_round_trip(d in arb_decimal()) {
            let text = d.to_string();
            let back: Decimal = text.parse().unwrap();
            prop_assert_eq!(back, d);
        }
    }

    // Cross-check against rust_decimal on a domain where no rescale rounding
    // can kick in, so both implementations must agree exactly.
    mod oracle {
        use super::*;

        fn from_oracle(value: rust_decimal::Decimal) -> Decimal {
            value.to_string().parse().unwrap()
        }

        proptest! {
            #[test]
            fn prop_add_matches_rust_decimal(
                ma in -1_000_000_000i64..1_000_000_000,
                sa in 0u32..=9,
                mb in -1_000_000_000i64..1_000_000_000,
                sb in 0u32..=9,
            ) {
                let a = rust_decimal::Decimal::new(ma, sa);
                let b = rust_decimal::Decimal::new(mb, sb);
                let mine = from_oracle(a).checked_add(from_oracle(b)).unwrap();
                prop_assert_eq!(mine, from_oracle(a + b));
            }

            #[test]
            fn prop_mul_matches_rust_decimal(
                ma in -1_000_000_000i64..1_000_000_000,
                sa in 0u32..=9,
                mb in -1_000_000_000i64..1_000_000_000,
                sb in 0u32..=9,
            ) {
                let a = rust_decimal::Decimal::new(ma, sa);
                let b = rust_decimal::Decimal::new(mb, sb);
                let mine = from_oracle(a).checked_mul(from_oracle(b)).unwrap();
                prop_assert_eq!(mine, from_oracle(a * b));
            }
        }
    }
}
