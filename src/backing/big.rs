use super::{Backing, Sealed};

use malachite::Integer;
use malachite::base::num::basic::traits::{One, Zero};
use malachite::base::num::conversion::traits::ExactFrom;

impl Backing for Integer {}
impl Sealed for Integer {
  // Arbitrary precision is its own widened type.
  type Wide = Integer;

  const WIDTH_LIMIT: Option<u32> = None;

  fn from_i64(n: i64) -> Self {
    Integer::from(n)
  }

  fn from_big(n: &Integer) -> Self {
    n.clone()
  }

  fn to_big(&self) -> Integer {
    self.clone()
  }

  fn widen(&self) -> Integer {
    self.clone()
  }

  fn wide_from_i64(n: i64) -> Integer {
    Integer::from(n)
  }

  fn wide_add(a: Integer, b: Integer) -> Integer { a + b }

  fn wide_sub(a: Integer, b: Integer) -> Integer { a - b }

  fn wide_neg(a: Integer) -> Integer { -a }

  fn wide_mul(a: Integer, b: Integer) -> Integer { a * b }

  fn wide_shl(a: Integer, n: u32) -> Integer { a << u64::from(n) }

  fn wide_shr(a: Integer, n: u32) -> Integer { a >> u64::from(n) }

  fn wide_div(a: Integer, b: Integer) -> Integer { a / b }

  fn wide_rem(a: Integer, b: Integer) -> Integer { a % b }

  fn wide_is_negative(a: &Integer) -> bool { *a < Integer::ZERO }

  fn wide_index(a: &Integer) -> usize {
    usize::exact_from(a)
  }

  fn wrap(wide: Integer, bits: u32) -> Self {
    wrap_big(wide, bits)
  }

  fn to_f64(&self) -> f64 {
    // Display only. Values beyond f64 range parse to an infinity.
    self.to_string().parse().unwrap_or(f64::INFINITY)
  }
}

/// Two's-complement truncation of `x` to the low `bits` bits, in arbitrary
/// precision: reduce to the non-negative residue mod `2^bits`, then pull
/// everything at or above the sign threshold `2^(bits-1)` down by `2^bits`.
pub(crate) fn wrap_big(x: Integer, bits: u32) -> Integer {
  let modulus = Integer::ONE << u64::from(bits);
  let mut residue = x % &modulus;
  if residue < Integer::ZERO {
    residue += &modulus;
  }
  if residue >= (&modulus >> 1u64) {
    residue - modulus
  } else {
    residue
  }
}
