use super::*;
use crate::backing::{Sealed, wrap_big};
use crate::error::Error;

use malachite::Integer;
use malachite::base::num::basic::traits::Zero;

impl<B: Backing> Fixed<B> {
  /// Square root: the floor integer square root of `v << fraction_bits`,
  /// which is the scaled representation of `sqrt(v)`.
  ///
  /// Runs Newton's iteration on plain integers, always in arbitrary
  /// precision, so both backings agree bit for bit. Fails on negative input;
  /// `sqrt(0)` is `0`.
  pub fn sqrt(&self, v: &Num<B>) -> Result<Num<B>, Error> {
    let raw = v.0.to_big();
    if raw < Integer::ZERO {
      return Err(Error::SqrtOfNegative);
    }
    if raw == Integer::ZERO {
      return Ok(Num(B::from_i64(0)));
    }
    let n = raw << u64::from(self.frac_bits);
    // x1 = (x0 + n/x0) / 2 decreases strictly until it reaches
    // floor(sqrt(n)), then stops shrinking; starting from n itself keeps
    // every iterate positive.
    let mut x0 = n.clone();
    loop {
      let x1: Integer = (&x0 + &n / &x0) >> 1u64;
      if x1 >= x0 {
        break;
      }
      x0 = x1;
    }
    Ok(Num(B::from_big(&wrap_big(x0, self.total_bits))))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use malachite::Integer;

  #[test]
  fn perfect_squares() {
    let fx = Fixed::<i32>::new(16, 32).unwrap();
    assert_eq!(fx.sqrt(&fx.zero()).unwrap(), fx.zero());
    assert_eq!(fx.sqrt(&fx.one()).unwrap(), fx.one());
    assert_eq!(fx.sqrt(&fx.from_int(4)).unwrap(), fx.from_int(2));
    assert_eq!(fx.sqrt(&fx.from_int(144)).unwrap(), fx.from_int(12));
  }

  #[test]
  fn inexact_roots_floor() {
    let fx = Fixed::<i32>::new(16, 32).unwrap();
    // sqrt(2) * 65536 = 92681.9, floored.
    assert_eq!(fx.sqrt(&fx.from_int(2)).unwrap().raw(), &92681);
    // sqrt(0.25) is exact.
    assert_eq!(fx.sqrt(&fx.from_float(0.25).unwrap()).unwrap().raw(), &32768);
  }

  #[test]
  fn negative_fails() {
    let fx = Fixed::<i32>::new(16, 32).unwrap();
    assert_eq!(fx.sqrt(&fx.from_int(-1)).unwrap_err(), Error::SqrtOfNegative);
    assert_eq!(fx.sqrt(&fx.neg(&fx.epsilon())).unwrap_err(), Error::SqrtOfNegative);
  }

  #[test]
  fn matches_across_backings() {
    let w = Fixed::<i32>::new(16, 32).unwrap();
    let g = Fixed::<Integer>::new(16, 32).unwrap();
    for n in [0i64, 1, 2, 3, 4, 10, 144, 32767] {
      assert_eq!(
        w.sqrt(&w.from_int(n)).unwrap().to_big(),
        g.sqrt(&g.from_int(n)).unwrap().to_big(),
        "sqrt({n})",
      );
    }
  }

  #[test]
  fn wide_layout() {
    let fx = Fixed::<Integer>::new(32, 96).unwrap();
    // sqrt(4) = 2 exactly, regardless of scale.
    assert_eq!(fx.sqrt(&fx.from_int(4)).unwrap(), fx.from_int(2));
  }
}
