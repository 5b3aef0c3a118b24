use super::*;
use crate::backing::Sealed;

impl<B: Backing> Fixed<B> {
  /// `a + b`, wrapped. Overflow wraps rather than saturating or faulting:
  /// `add(max, epsilon)` is `min`.
  pub fn add(&self, a: &Num<B>, b: &Num<B>) -> Num<B> {
    self.wrap(B::wide_add(a.0.widen(), b.0.widen()))
  }

  /// `a - b`, wrapped. `sub(min, epsilon)` is `max`.
  pub fn sub(&self, a: &Num<B>, b: &Num<B>) -> Num<B> {
    self.wrap(B::wide_sub(a.0.widen(), b.0.widen()))
  }

  /// `-a`, wrapped (`neg(min)` is `min` again).
  pub fn neg(&self, a: &Num<B>) -> Num<B> {
    self.wrap(B::wide_neg(a.0.widen()))
  }

  /// Absolute value: `neg(a)` if `a` is negative, else `a` unchanged. Like
  /// every other result this wraps, so `abs(min)` is `min`.
  pub fn abs(&self, a: &Num<B>) -> Num<B> {
    if a.0 < B::from_i64(0) {
      self.neg(a)
    } else {
      a.clone()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use malachite::Integer;

  /// Instantiate the wraparound suite for one layout.
  macro_rules! make_tests {
    ($backing:ty, $frac:expr, $total:expr) => {
      use super::*;

      fn fixed() -> Fixed<$backing> {
        Fixed::new($frac, $total).unwrap()
      }

      #[test]
      fn add_wraps_at_max() {
        let fx = fixed();
        assert_eq!(fx.add(&fx.max(), &fx.epsilon()), fx.min());
      }

      #[test]
      fn sub_wraps_at_min() {
        let fx = fixed();
        assert_eq!(fx.sub(&fx.min(), &fx.epsilon()), fx.max());
      }

      #[test]
      fn add_sub_inverse() {
        let fx = fixed();
        let a = fx.from_int(-3);
        let b = fx.from_int(2);
        assert_eq!(fx.sub(&fx.add(&a, &b), &b), a);
      }

      #[test]
      fn neg_min_wraps() {
        let fx = fixed();
        assert_eq!(fx.neg(&fx.min()), fx.min());
        assert_eq!(fx.abs(&fx.min()), fx.min());
      }

      #[test]
      fn abs() {
        let fx = fixed();
        let a = fx.from_int(-2);
        assert_eq!(fx.abs(&a), fx.from_int(2));
        assert_eq!(fx.abs(&fx.from_int(2)), fx.from_int(2));
        assert_eq!(fx.abs(&fx.zero()), fx.zero());
      }
    };
  }

  mod q4_8 { make_tests!{i32, 4, 8} }
  mod q16_32 { make_tests!{i32, 16, 32} }
  mod q16_32_big { make_tests!{Integer, 16, 32} }
  mod q16_64_big { make_tests!{Integer, 16, 64} }
  mod q64_128_big { make_tests!{Integer, 64, 128} }

  mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
      #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

      #[test]
      fn sub_undoes_add(a in Fixed::<i32>::cases(32), b in Fixed::<i32>::cases(32)) {
        let fx = Fixed::<i32>::new(16, 32).unwrap();
        prop_assert_eq!(fx.sub(&fx.add(&a, &b), &b), a);
      }

      #[test]
      fn neg_is_involutive(a in Fixed::<i32>::cases(32)) {
        let fx = Fixed::<i32>::new(16, 32).unwrap();
        prop_assert_eq!(fx.neg(&fx.neg(&a)), a);
      }

      #[test]
      fn abs_is_non_negative_except_min(a in Fixed::<i32>::cases(32)) {
        let fx = Fixed::<i32>::new(16, 32).unwrap();
        let abs = fx.abs(&a);
        prop_assert!(abs >= fx.zero() || a == fx.min());
      }
    }
  }
}
