use super::*;
use crate::backing::{Sealed, wrap_big};
use crate::error::Error;

use malachite::Integer;
use malachite::base::num::basic::traits::{One, Zero};

/// Explicit mantissa bits of an `f64`.
const MANTISSA_EXPLICIT: u32 = f64::MANTISSA_DIGITS - 1;

/// A normal `f64` with exponent field `e` and full 53-bit mantissa `m` has
/// the value `m * 2^(e + EXP_OFFSET)`.
const EXP_OFFSET: i64 = f64::MIN_EXP as i64 - 2 - MANTISSA_EXPLICIT as i64;

/// Decompose a finite nonzero float into `(negative, mantissa, exponent)`
/// with `|num| = mantissa * 2^exponent`, exactly.
fn decode_finite(num: f64) -> (bool, u64, i64) {
  debug_assert!(num.is_finite() && num != 0.0);
  let negative = num.is_sign_negative();
  let bits = num.abs().to_bits();
  let mantissa = bits & ((1u64 << MANTISSA_EXPLICIT) - 1);
  let field = (bits >> MANTISSA_EXPLICIT) as i64;
  if field == 0 {
    // Subnormal: no hidden bit, minimum exponent.
    (negative, mantissa, EXP_OFFSET + 1)
  } else {
    (negative, mantissa | (1 << MANTISSA_EXPLICIT), field + EXP_OFFSET)
  }
}

/// `round(f * 2^frac_bits)` with ties away from zero, computed exactly from
/// the float's bit representation. Rounding a single finite float to an
/// integer this way is bit-exact on every host, which is what makes
/// [`Fixed::from_float`] admissible in a deterministic pipeline at all.
pub(crate) fn float_to_scaled(f: f64, frac_bits: u32) -> Result<Integer, Error> {
  if !f.is_finite() {
    return Err(Error::NonFinite);
  }
  if f == 0.0 {
    return Ok(Integer::ZERO);
  }
  let (negative, mantissa, exponent) = decode_finite(f);
  let shift = exponent + i64::from(frac_bits);
  let magnitude = if shift >= 0 {
    Integer::from(mantissa) << shift as u64
  } else {
    // Divide by 2^-shift, rounding half away from zero (the magnitude is
    // positive, so half away is half up here).
    let k = (-shift) as u64;
    let whole = Integer::from(mantissa);
    let floor = &whole >> k;
    let remainder = whole - (&floor << k);
    if (remainder << 1u64) >= (Integer::ONE << k) {
      floor + Integer::ONE
    } else {
      floor
    }
  };
  Ok(if negative { -magnitude } else { magnitude })
}

impl<B: Backing> Fixed<B> {
  /// `wrap(round(f * 2^fraction_bits))`, ties away from zero.
  ///
  /// This is the one place floating input is accepted; the conversion reads
  /// the float's bits directly and runs in exact integer arithmetic, so two
  /// hosts converting the same finite value always get the same scaled
  /// integer. Fails on NaN or an infinity.
  pub fn from_float(&self, f: f64) -> Result<Num<B>, Error> {
    let scaled = float_to_scaled(f, self.frac_bits)?;
    Ok(Num(B::from_big(&wrap_big(scaled, self.total_bits))))
  }

  /// `v / 2^fraction_bits` as a float.
  ///
  /// Lossy and for display only: this is the single operation excluded from
  /// the determinism contract.
  pub fn to_float(&self, v: &Num<B>) -> f64 {
    v.0.to_f64() * 2f64.powi(-(self.frac_bits as i32))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn exact_binary_fractions() {
    let fx = Fixed::<i32>::new(16, 32).unwrap();
    assert_eq!(fx.from_float(0.0).unwrap(), fx.zero());
    assert_eq!(fx.from_float(-0.0).unwrap(), fx.zero());
    assert_eq!(fx.from_float(1.0).unwrap(), fx.one());
    assert_eq!(fx.from_float(-1.0).unwrap(), fx.neg(&fx.one()));
    assert_eq!(fx.from_float(2.5).unwrap().raw(), &163_840);
    assert_eq!(fx.from_float(-2.25).unwrap().raw(), &-147_456);
    assert_eq!(fx.from_float(0.5).unwrap().raw(), &32768);
  }

  #[test]
  fn rounds_to_nearest() {
    let fx = Fixed::<i32>::new(16, 32).unwrap();
    // 0.1 * 65536 = 6553.6, rounds to 6554.
    assert_eq!(fx.from_float(0.1).unwrap().raw(), &6554);
    assert_eq!(fx.from_float(-0.1).unwrap().raw(), &-6554);
  }

  #[test]
  fn ties_round_away_from_zero() {
    let fx = Fixed::<i32>::new(16, 32).unwrap();
    // 3 * 2^-17 scales to exactly 1.5 raw units.
    let tie = 3.0 / 131072.0;
    assert_eq!(fx.from_float(tie).unwrap().raw(), &2);
    assert_eq!(fx.from_float(-tie).unwrap().raw(), &-2);
  }

  #[test]
  fn subnormal_rounds_to_zero() {
    let fx = Fixed::<i32>::new(16, 32).unwrap();
    assert_eq!(fx.from_float(f64::MIN_POSITIVE / 2.0).unwrap(), fx.zero());
  }

  #[test]
  fn non_finite_fails() {
    let fx = Fixed::<i32>::new(16, 32).unwrap();
    assert_eq!(fx.from_float(f64::NAN).unwrap_err(), Error::NonFinite);
    assert_eq!(fx.from_float(f64::INFINITY).unwrap_err(), Error::NonFinite);
    assert_eq!(fx.from_float(f64::NEG_INFINITY).unwrap_err(), Error::NonFinite);
  }

  #[test]
  fn huge_floats_wrap() {
    let fx = Fixed::<i32>::new(16, 32).unwrap();
    // 2^80 scaled by 2^16 is a multiple of 2^32, so it wraps to zero.
    let huge = (2.0f64).powi(80);
    assert_eq!(fx.from_float(huge).unwrap(), fx.zero());
  }

  #[test]
  fn to_float_round_trips_small_values() {
    let fx = Fixed::<i32>::new(16, 32).unwrap();
    for f in [0.0, 1.0, -1.0, 0.5, -0.25, 2.5, -2.25, 127.0] {
      assert_eq!(fx.to_float(&fx.from_float(f).unwrap()), f);
    }
  }

  #[test]
  fn matches_across_backings() {
    let w = Fixed::<i32>::new(16, 32).unwrap();
    let g = Fixed::<malachite::Integer>::new(16, 32).unwrap();
    for f in [0.0, 0.1, -0.1, 1.0, -2.25, 1e9, -1e9, 3.0 / 131072.0] {
      assert_eq!(
        w.from_float(f).unwrap().to_big(),
        g.from_float(f).unwrap().to_big(),
        "{f}",
      );
    }
  }
}
