use super::{Backing, Sealed};

use malachite::Integer;
use malachite::base::num::conversion::traits::ExactFrom;

/// Width of the word backing.
pub(crate) const WORD_BITS: u32 = 32;

impl Backing for i32 {}
impl Sealed for i32 {
  // Wide enough for any product of two in-range scaled values plus the
  // fraction shift, even though operands fit the native width. Using the
  // native width for intermediates would overflow long before the wrap.
  type Wide = i128;

  const WIDTH_LIMIT: Option<u32> = Some(WORD_BITS);

  #[inline]
  fn from_i64(n: i64) -> Self {
    debug_assert!(i32::try_from(n).is_ok());
    n as i32
  }

  fn from_big(n: &Integer) -> Self {
    i32::exact_from(n)
  }

  fn to_big(&self) -> Integer {
    Integer::from(*self)
  }

  #[inline]
  fn widen(&self) -> i128 {
    i128::from(*self)
  }

  #[inline]
  fn wide_from_i64(n: i64) -> i128 {
    i128::from(n)
  }

  #[inline]
  fn wide_add(a: i128, b: i128) -> i128 { a + b }

  #[inline]
  fn wide_sub(a: i128, b: i128) -> i128 { a - b }

  #[inline]
  fn wide_neg(a: i128) -> i128 { -a }

  #[inline]
  fn wide_mul(a: i128, b: i128) -> i128 { a * b }

  #[inline]
  fn wide_shl(a: i128, n: u32) -> i128 { a << n }

  #[inline]
  fn wide_shr(a: i128, n: u32) -> i128 { a >> n }

  #[inline]
  fn wide_div(a: i128, b: i128) -> i128 { a / b }

  #[inline]
  fn wide_rem(a: i128, b: i128) -> i128 { a % b }

  #[inline]
  fn wide_is_negative(a: &i128) -> bool { *a < 0 }

  #[inline]
  fn wide_index(a: &i128) -> usize {
    debug_assert!(usize::try_from(*a).is_ok());
    *a as usize
  }

  #[inline]
  fn wrap(wide: i128, bits: u32) -> Self {
    // Shift the significant bits to the top, then arithmetic-shift them back
    // down: the same sign-extension trick as narrowing a two's complement
    // integer by hand.
    let junk = i128::BITS - bits;
    ((wide << junk) >> junk) as i32
  }

  fn to_f64(&self) -> f64 {
    f64::from(*self)
  }
}
