use super::*;
use crate::backing::Sealed;

impl<B: Backing> Fixed<B> {
  /// `a * b`.
  ///
  /// The full-width product is computed in the backing's widened type (a
  /// premature narrow here would overflow for most operands), shifted right
  /// by `fraction_bits` to drop the doubled scale (an arithmetic shift, so
  /// this step rounds toward negative infinity), then wrapped.
  pub fn mul(&self, a: &Num<B>, b: &Num<B>) -> Num<B> {
    self.wrap(B::wide_shr(B::wide_mul(a.0.widen(), b.0.widen()), self.frac_bits))
  }
}
