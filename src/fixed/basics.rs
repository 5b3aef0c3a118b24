use super::*;
use crate::backing::Sealed;

impl<B: Backing> Fixed<B> {
  /// Validate a layout and return the operation set bound to it.
  ///
  /// Rejected layouts, per [`LayoutError`]: zero fractional bits, a total
  /// width that does not exceed the fractional width, and a total width
  /// beyond the backing's limit (32 bits for the word backing; the big
  /// backing has none).
  pub fn new(fraction_bits: u32, total_bits: u32) -> Result<Self, LayoutError> {
    if fraction_bits == 0 {
      return Err(LayoutError::FractionBitsZero);
    }
    if total_bits <= fraction_bits {
      return Err(LayoutError::TotalNotAboveFraction { fraction_bits, total_bits });
    }
    if let Some(limit) = B::WIDTH_LIMIT {
      if total_bits > limit {
        return Err(LayoutError::WordTooNarrow { total_bits, limit });
      }
    }
    Ok(Self { frac_bits: fraction_bits, total_bits, table: OnceLock::new() })
  }

  /// Fractional bits of this layout.
  #[inline]
  pub fn fraction_bits(&self) -> u32 {
    self.frac_bits
  }

  /// Total width of this layout, in bits.
  #[inline]
  pub fn total_bits(&self) -> u32 {
    self.total_bits
  }

  /// Construct a value from its raw scaled representation, wrapped into this
  /// layout's range.
  #[inline]
  pub fn from_raw(&self, raw: B) -> Num<B> {
    self.wrap(raw.widen())
  }

  /// Truncate a wide intermediate to this layout's width.
  #[inline]
  pub(crate) fn wrap(&self, wide: B::Wide) -> Num<B> {
    Num(B::wrap(wide, self.total_bits))
  }
}

impl<B: Backing> Num<B> {
  /// The raw scaled integer.
  #[inline]
  pub fn raw(&self) -> &B {
    &self.0
  }

  /// The raw scaled integer as an arbitrary-precision value. Useful for
  /// comparing results across backings, or hashing simulation state.
  pub fn to_big(&self) -> malachite::Integer {
    self.0.to_big()
  }
}
