use super::*;

use core::fmt::Debug;

impl<B: Backing> Debug for Fixed<B> {
  // The memoized table is deliberately omitted.
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Fixed")
      .field("fraction_bits", &self.frac_bits)
      .field("total_bits", &self.total_bits)
      .finish_non_exhaustive()
  }
}

impl<B: Backing> Debug for Num<B> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("Num").field(&self.0).finish()
  }
}
