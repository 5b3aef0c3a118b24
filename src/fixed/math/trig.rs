use super::*;
use super::sin_table::{SIN_Q16, SIN_SAMPLES};
use crate::backing::Sealed;

/// Fractional bits of the canonical table and constants.
const TABLE_FRAC_BITS: u32 = 16;

/// 2π at 16 fractional bits.
const TWO_PI_Q16: i64 = 411_775;

/// π/2 at 16 fractional bits.
const PI_HALF_Q16: i64 = 102_944;

impl<B: Backing> Fixed<B> {
  /// Rescale a canonical 16-fractional-bit quantity to this layout, without
  /// wrapping. Shifting left appends zero bits rather than recomputing at
  /// higher resolution; shifting right truncates low bits. Precision for
  /// layouts above 16 fractional bits is therefore bounded by the canonical
  /// resolution.
  fn rescale(&self, canonical: i64) -> B::Wide {
    let wide = B::wide_from_i64(canonical);
    if self.frac_bits >= TABLE_FRAC_BITS {
      B::wide_shl(wide, self.frac_bits - TABLE_FRAC_BITS)
    } else {
      B::wide_shr(wide, TABLE_FRAC_BITS - self.frac_bits)
    }
  }

  /// 2π as a scaled value of this layout.
  pub fn two_pi(&self) -> Num<B> {
    self.wrap(self.rescale(TWO_PI_Q16))
  }

  /// π/2 as a scaled value of this layout.
  pub fn pi_half(&self) -> Num<B> {
    self.wrap(self.rescale(PI_HALF_Q16))
  }

  /// The sine table rescaled to this layout. Built on first use, then
  /// shared for the life of the engine; racing first callers compute the
  /// same table, so no divergence is possible.
  fn table(&self) -> &[B] {
    self.table.get_or_init(|| {
      SIN_Q16
        .iter()
        .map(|&sample| B::wrap(self.rescale(i64::from(sample)), self.total_bits))
        .collect()
    })
  }

  /// Sine of `theta` (radians, as a scaled value), by table lookup.
  ///
  /// `theta` is reduced into `[0, 2π)` by the truncated modulo (plus one
  /// period when negative) and mapped to sample
  /// `floor(theta * SIN_SAMPLES / 2π)`, all in widened arithmetic.
  pub fn sin(&self, theta: &Num<B>) -> Num<B> {
    // The unwrapped period: positive for every layout, including those too
    // narrow to represent 2π, so the reduction below is total.
    let period = self.rescale(TWO_PI_Q16);
    let mut t = B::wide_rem(theta.0.widen(), period.clone());
    if B::wide_is_negative(&t) {
      t = B::wide_add(t, period.clone());
    }
    let scaled = B::wide_mul(t, B::wide_from_i64(SIN_SAMPLES as i64));
    let index = B::wide_index(&B::wide_div(scaled, period)) % SIN_SAMPLES;
    Num(self.table()[index].clone())
  }

  /// Cosine: a quarter-period phase shift, `sin(wrap(theta + π/2))`, not an
  /// independently tabulated function.
  pub fn cos(&self, theta: &Num<B>) -> Num<B> {
    self.sin(&self.add(theta, &self.pi_half()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use malachite::Integer;

  #[test]
  fn quarter_period_points() {
    let fx = Fixed::<i32>::new(16, 32).unwrap();
    assert_eq!(fx.sin(&fx.zero()), fx.zero());
    assert_eq!(fx.sin(&fx.pi_half()), fx.one());
    assert_eq!(fx.cos(&fx.zero()), fx.one());
    assert_eq!(fx.sin(&fx.neg(&fx.pi_half())), fx.neg(&fx.one()));
  }

  #[test]
  fn sample_values() {
    let fx = Fixed::<i32>::new(16, 32).unwrap();
    // sin(1.0) lands on sample 651 of the canonical table.
    assert_eq!(fx.sin(&fx.one()).raw(), &55098);
    // A full period away, the same sample.
    let shifted = fx.add(&fx.one(), &fx.two_pi());
    assert_eq!(fx.sin(&shifted).raw(), &55098);
  }

  #[test]
  fn cos_is_shifted_sin() {
    let fx = Fixed::<i32>::new(16, 32).unwrap();
    for n in [-7i64, -3, -1, 0, 1, 2, 5, 100] {
      let theta = fx.from_int(n);
      assert_eq!(
        fx.cos(&theta),
        fx.sin(&fx.add(&theta, &fx.pi_half())),
        "theta = {n}",
      );
    }
  }

  #[test]
  fn rescaled_layouts() {
    // At 8 fractional bits the rescaled quarter period still lands exactly
    // on the peak sample.
    let fx = Fixed::<i32>::new(8, 16).unwrap();
    assert_eq!(fx.cos(&fx.zero()), fx.one());
    assert_eq!(fx.sin(&fx.pi_half()), fx.one());
    // At 20 fractional bits the canonical samples gain four zero bits.
    let fx = Fixed::<i32>::new(20, 32).unwrap();
    assert_eq!(fx.sin(&fx.pi_half()), fx.one());
    assert_eq!(fx.sin(&fx.zero()), fx.zero());
  }

  #[test]
  fn negative_angles_reduce() {
    let fx = Fixed::<i32>::new(16, 32).unwrap();
    // sin(theta - 2π) == sin(theta).
    for n in [0i64, 1, 2, 4] {
      let theta = fx.from_int(n);
      let reduced = fx.sub(&theta, &fx.two_pi());
      assert_eq!(fx.sin(&reduced), fx.sin(&theta), "theta = {n}");
    }
  }

  #[test]
  fn degenerate_layout_is_total() {
    // Too narrow to represent 2π; sin must still return without faulting.
    let fx = Fixed::<i32>::new(1, 2).unwrap();
    let _ = fx.sin(&fx.epsilon());
    let _ = fx.cos(&fx.min());
  }

  #[test]
  fn matches_across_backings() {
    let w = Fixed::<i32>::new(16, 32).unwrap();
    let g = Fixed::<Integer>::new(16, 32).unwrap();
    for n in [-100i64, -7, -1, 0, 1, 3, 7, 1000] {
      assert_eq!(
        w.sin(&w.from_int(n)).to_big(),
        g.sin(&g.from_int(n)).to_big(),
        "sin({n})",
      );
    }
  }

  mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
      #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

      #[test]
      fn bounded_by_one(theta in Fixed::<i32>::cases(32)) {
        let fx = Fixed::<i32>::new(16, 32).unwrap();
        let s = fx.sin(&theta);
        prop_assert!(s <= fx.one() && s >= fx.neg(&fx.one()));
      }

      #[test]
      fn periodic(raw in -(1i64 << 30)..(1i64 << 30)) {
        let fx = Fixed::<i32>::new(16, 32).unwrap();
        // Stay clear of the range ends so adding a period cannot wrap.
        let theta = fx.from_raw(raw as i32);
        prop_assert_eq!(fx.sin(&fx.add(&theta, &fx.two_pi())), fx.sin(&theta));
      }
    }
  }
}
