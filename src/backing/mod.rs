//! This module contains the storage contract shared by the two backings of a
//! fixed-point layout: the *word* backing (a native `i32`, legal up to 32
//! total bits) and the *big* backing (an arbitrary-precision
//! [`Integer`], mandatory above that width). The end-user only sees the
//! sealed [`Backing`] trait.
//!
//! Every operation that can outgrow the storage width runs in the backing's
//! widened type first and is truncated back down with [`Sealed::wrap`], so
//! both backings observe the exact same two's-complement results.

/// The word backing.
mod word;

/// The big backing.
mod big;

pub(crate) use big::wrap_big;
pub(crate) use word::WORD_BITS;

use malachite::Integer;

/// The trait for the storage types that can back a fixed-point layout (only
/// satisfied by `i32`, the word backing, and [`Integer`], the big backing).
///
/// This is a *sealed* type.
pub trait Backing: Sealed {}

/// Actual operations implemented here.
pub trait Sealed:
  Clone + Eq + Ord + core::hash::Hash +
  core::fmt::Debug + core::fmt::Display +
  Sized
{
  /// The widened type intermediates are computed in. Wide enough that no
  /// single operation on in-range operands can overflow it.
  type Wide: Clone + Eq + Ord;

  /// Maximum legal total width for this storage, if it has one.
  const WIDTH_LIMIT: Option<u32>;

  fn from_i64(n: i64) -> Self;

  /// Narrow an arbitrary-precision value that already lies within the
  /// storage's range.
  fn from_big(n: &Integer) -> Self;

  fn to_big(&self) -> Integer;

  fn widen(&self) -> Self::Wide;

  fn wide_from_i64(n: i64) -> Self::Wide;

  fn wide_add(a: Self::Wide, b: Self::Wide) -> Self::Wide;
  fn wide_sub(a: Self::Wide, b: Self::Wide) -> Self::Wide;
  fn wide_neg(a: Self::Wide) -> Self::Wide;
  fn wide_mul(a: Self::Wide, b: Self::Wide) -> Self::Wide;

  fn wide_shl(a: Self::Wide, n: u32) -> Self::Wide;

  /// Arithmetic right shift: the quotient by `2^n` rounded toward negative
  /// infinity.
  fn wide_shr(a: Self::Wide, n: u32) -> Self::Wide;

  /// Quotient truncated toward zero. `b` cannot be zero.
  fn wide_div(a: Self::Wide, b: Self::Wide) -> Self::Wide;

  /// Remainder of the truncated division: the sign follows `a`. `b` cannot
  /// be zero.
  fn wide_rem(a: Self::Wide, b: Self::Wide) -> Self::Wide;

  fn wide_is_negative(a: &Self::Wide) -> bool;

  /// Narrow a small non-negative intermediate (a table index) to `usize`.
  fn wide_index(a: &Self::Wide) -> usize;

  /// Two's-complement truncation to the low `bits` bits: discard everything
  /// above them, then reinterpret the sign bit.
  fn wrap(wide: Self::Wide, bits: u32) -> Self;

  /// Lossy conversion for display purposes only.
  fn to_f64(&self) -> f64;
}
