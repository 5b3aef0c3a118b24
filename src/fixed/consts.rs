use super::*;

impl<B: Backing> Fixed<B> {
  /// Zero.
  pub fn zero(&self) -> Num<B> {
    Num(B::from_i64(0))
  }

  /// One: the scale factor `2^fraction_bits` as a scaled value.
  //
  // Wrapped like everything else, so the degenerate layout with
  // `fraction_bits == total_bits - 1` sees its own `one` overflow into the
  // sign bit. That is the layout's arithmetic, not a special case.
  pub fn one(&self) -> Num<B> {
    self.wrap(B::wide_shl(B::wide_from_i64(1), self.frac_bits))
  }

  /// The smallest representable step: one raw scaled unit.
  pub fn epsilon(&self) -> Num<B> {
    Num(B::from_i64(1))
  }

  /// Smallest representable value, `-2^(total_bits - 1)`.
  pub fn min(&self) -> Num<B> {
    self.wrap(B::wide_neg(B::wide_shl(B::wide_from_i64(1), self.total_bits - 1)))
  }

  /// Largest representable value, `2^(total_bits - 1) - 1`.
  pub fn max(&self) -> Num<B> {
    self.wrap(B::wide_sub(
      B::wide_shl(B::wide_from_i64(1), self.total_bits - 1),
      B::wide_from_i64(1),
    ))
  }
}
