//! This module and its submodules contain the fixed-point core: a validated
//! layout with its bound operation set, and the scaled-integer values it
//! operates on.
//!
//! Everything here is deterministic by construction: operations are pure
//! functions of their scaled-integer inputs and the layout, every result is
//! wrapped to the layout's width with two's-complement semantics, and no
//! code path consults host-dependent arithmetic (the one exception,
//! [`Fixed::to_float`], is display-only and documented as such).
//!
//! Some notation used in the comments:
//!
//!   - **Raw/scaled value**: the stored integer, `2^fraction_bits` times the
//!     logical number.
//!   - **Wide value**: an intermediate in the backing's widened type, not
//!     yet wrapped to the layout width.

use std::sync::OnceLock;

use crate::backing::Backing;
use crate::error::LayoutError;

/// A fixed-point layout with `fraction_bits` of fractional precision in a
/// `total_bits` wide two's-complement word, bound to the backing `B`; the
/// full operation set for values of that layout.
///
/// Examples:
///
/// ```
/// # use detfix::Fixed;
/// # use malachite::Integer;
/// let q16 = Fixed::<i32>::new(16, 32)?;        // Q16.16 in a 32-bit word
/// let q48 = Fixed::<Integer>::new(16, 64)?;    // Q48.16, arbitrary precision
/// # Ok::<(), detfix::LayoutError>(())
/// ```
pub struct Fixed<B: Backing> {
  frac_bits: u32,
  total_bits: u32,
  /// Sine samples rescaled to this layout; built on first use, then shared.
  table: OnceLock<Vec<B>>,
}

/// A scaled-integer value: the logical number `v` stored as
/// `round(v * 2^fraction_bits)` in the backing `B`.
///
/// A `Num` carries no reference to the layout that produced it; operations
/// go through the [`Fixed`] that made it. The derived comparisons are raw
/// scaled comparisons, only meaningful between values of the same layout.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Num<B: Backing>(pub(crate) B);

/// Construction, validation, raw access.
mod basics;

/// Layout constants (one, epsilon, min, max).
mod consts;

/// Conversions to and from integers, floats, and decimal strings.
mod convert;

/// Debug formatting.
mod fmt;

/// Square root and table-backed trigonometry.
mod math;

/// Arithmetic operators.
mod ops;
