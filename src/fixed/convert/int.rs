use super::*;
use crate::backing::Sealed;

impl<B: Backing> Fixed<B> {
  /// Scale an integer: `wrap(n * 2^fraction_bits)`.
  pub fn from_int(&self, n: i64) -> Num<B> {
    self.wrap(B::wide_shl(B::wide_from_i64(n), self.frac_bits))
  }

  /// The integer part of `v`, truncated toward zero.
  //
  // A right shift would round toward negative infinity; truncation needs a
  // widened division by the scale factor.
  pub fn to_int(&self, v: &Num<B>) -> B {
    let one = B::wide_shl(B::wide_from_i64(1), self.frac_bits);
    B::wrap(B::wide_div(v.0.widen(), one), self.total_bits)
  }
}
