use super::*;
use crate::backing::Sealed;
use crate::error::Error;

impl<B: Backing> Fixed<B> {
  /// `a / b`: `(a << fraction_bits) / b` in the backing's widened type,
  /// truncated toward zero, wrapped. Fails on a zero divisor.
  pub fn div(&self, a: &Num<B>, b: &Num<B>) -> Result<Num<B>, Error> {
    if b.0 == B::from_i64(0) {
      return Err(Error::DivisionByZero);
    }
    Ok(self.wrap(B::wide_div(B::wide_shl(a.0.widen(), self.frac_bits), b.0.widen())))
  }

  /// `a % b` on the raw scaled integers: the truncated remainder, sign
  /// following the dividend, *not* rescaled. Fails on a zero divisor.
  pub fn rem(&self, a: &Num<B>, b: &Num<B>) -> Result<Num<B>, Error> {
    if b.0 == B::from_i64(0) {
      return Err(Error::DivisionByZero);
    }
    Ok(self.wrap(B::wide_rem(a.0.widen(), b.0.widen())))
  }
}
