// ============================================================================
// Decimal Engine Library
// 96-bit scaled fixed-point decimal arithmetic with exact rounding
// ============================================================================

//! # Decimal Engine
//!
//! A 128-bit decimal number type for exact base-10 arithmetic: a 96-bit
//! unsigned magnitude, a power-of-ten scale in `0..=28` and an explicit sign.
//!
//! ## Features
//!
//! - **Checked arithmetic** (add, subtract, multiply, divide, remainder) with
//!   overflow detection and half-away-from-zero rescale rounding
//! - **Bit-exact decomposition** to and from the canonical 4-word encoding
//! - **Style- and locale-driven text conversion** with an explicit rules
//!   struct instead of an ambient culture
//! - **Narrowing conversions** to every fixed-width integer and both float
//!   widths
//! - **Immutable values**: operations allocate fresh results, so sharing
//!   across threads needs no locking
//!
//! ## Example
//!
//! ```rust
//! use decimal_engine::prelude::*;
//!
//! let price: Decimal = "15".parse().unwrap();
//! let half = price.checked_div(Decimal::from(2)).unwrap();
//! assert_eq!(half.to_string(), "7.5");
//!
//! // locale-aware formatting via explicit rules
//! let german = NumberFormat::de_de();
//! let rendered = format_with(&half, "N2", &german).unwrap();
//! assert_eq!(rendered, "7,50");
//!
//! // styles gate the parse grammar
//! let refund = parse_with("(123)", ParseStyle::CURRENCY, &NumberFormat::invariant()).unwrap();
//! assert_eq!(refund, Decimal::from(-123));
//! ```

pub mod decimal;
pub mod text;

// Re-exports for convenience
pub use decimal::{Decimal, DecimalError, DecimalResult};
pub use text::{NumberFormat, ParseStyle};

pub mod prelude {
    pub use crate::decimal::{Decimal, DecimalError, DecimalResult};
    pub use crate::text::{
        format_with, parse, parse_with, try_parse, try_parse_with, NegativePattern, NumberFormat,
        ParseStyle,
    };
}
