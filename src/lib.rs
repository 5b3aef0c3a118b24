//! This crate provides deterministic fixed-point arithmetic: scaled-integer
//! numbers whose every operation produces bitwise-identical results across
//! hosts, so that lockstep simulations replay identically regardless of the
//! executing machine.
//!
//! # Introduction
//!
//! A fixed-point value is a plain integer equal to the logical number times
//! `2^fraction_bits`. All arithmetic here is integer arithmetic, wrapped to
//! the layout's total width with two's-complement semantics after every
//! operation; there are no transcendental calls (sine and cosine come from a
//! canonical lookup table, square roots from an integer Newton iteration)
//! and no float-dependent code path other than the explicitly lossy
//! [`Fixed::to_float`].
//!
//! Two interchangeable backings store the same logical values: a native
//! 32-bit word for layouts up to 32 total bits, and an arbitrary-precision
//! integer for anything wider. Both produce identical scaled integers for
//! identical inputs; that equivalence is the central invariant of the
//! crate, and the test suite leans on it heavily.
//!
//! # Usage
//!
//! ```
//! use detfix::q16_16;
//!
//! // The default layout: 16 fractional bits in a 32-bit word.
//! let fx = q16_16();
//! let a = fx.from_int(2);
//! let b = fx.from_str("1.5")?;
//! assert_eq!(fx.mul(&a, &b), fx.from_int(3));
//! assert_eq!(fx.to_int(&fx.from_float(-2.25)?), -2);
//!
//! // Overflow wraps rather than saturating or faulting.
//! assert_eq!(fx.add(&fx.max(), &fx.epsilon()), fx.min());
//! # Ok::<(), detfix::Error>(())
//! ```
//!
//! Layouts are chosen at runtime; the [`Engine`] builder picks the backing
//! from the requested width:
//!
//! ```
//! use detfix::Engine;
//! use malachite::Integer;
//!
//! let fx = Engine::builder().fraction_bits(16).total_bits(64).build()?;
//! let v = fx.from_int(1 << 40);
//! assert_eq!(fx.to_int(&v)?, Integer::from(1i64 << 40));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod backing;
mod engine;
mod error;
mod fixed;

pub use backing::Backing;
pub use engine::{Builder, Engine, Value};
pub use error::{Error, LayoutError};
pub use fixed::{Fixed, Num};

use std::sync::OnceLock;

/// The default layout: Q16.16 in the word backing, shared process-wide.
pub fn q16_16() -> &'static Fixed<i32> {
  static Q16_16: OnceLock<Fixed<i32>> = OnceLock::new();
  Q16_16.get_or_init(|| Fixed::new(16, 32).expect("Q16.16 is a valid layout"))
}

/// Shared proptest case count: thorough in release, quick in debug.
#[cfg(test)]
pub(crate) const PROPTEST_CASES: u32 = if cfg!(debug_assertions) { 0x400 } else { 0x4000 };

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_instance() {
    let fx = q16_16();
    assert_eq!(fx.fraction_bits(), 16);
    assert_eq!(fx.total_bits(), 32);
    assert_eq!(fx.to_int(&fx.from_int(-1024)), -1024);
  }
}
