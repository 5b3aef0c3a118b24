use super::*;
use crate::backing::wrap_big;
use crate::error::Error;

use malachite::Integer;
use malachite::base::num::basic::traits::{One, Zero};

/// Parse `[sign]digits[.digits]` into `round(value * 2^frac_bits)`, ties
/// away from zero, entirely in arbitrary-precision integer arithmetic.
//
// Decimal-to-float parsing is not guaranteed bit-identical across runtimes,
// so this path never touches a float.
pub(crate) fn parse_scaled(s: &str, frac_bits: u32) -> Result<Integer, Error> {
  let s = s.trim();
  let (negative, digits) = match s.as_bytes() {
    [b'+', ..] => (false, &s[1..]),
    [b'-', ..] => (true, &s[1..]),
    _ => (false, s),
  };
  let (int_digits, frac_digits) = match digits.split_once('.') {
    Some((int, frac)) => (int, frac),
    None => (digits, ""),
  };
  if int_digits.is_empty() && frac_digits.is_empty() {
    return Err(Error::MalformedLiteral);
  }

  // Accumulate all digits as one magnitude; a second dot or any other
  // stray character lands in here and is rejected.
  let mut magnitude = Integer::ZERO;
  for c in int_digits.chars().chain(frac_digits.chars()) {
    let digit = c.to_digit(10).ok_or(Error::MalformedLiteral)?;
    magnitude = magnitude * Integer::from(10u32) + Integer::from(digit);
  }

  // scaled = magnitude * 2^frac_bits / 10^len(frac_digits), rounded.
  let numerator = magnitude << u64::from(frac_bits);
  let denominator =
    (0..frac_digits.len()).fold(Integer::ONE, |d, _| d * Integer::from(10u32));
  let floor = &numerator / &denominator;
  let remainder = numerator - &floor * &denominator;
  let magnitude = if (remainder << 1u64) >= denominator {
    floor + Integer::ONE
  } else {
    floor
  };
  Ok(if negative { -magnitude } else { magnitude })
}

impl<B: Backing> Fixed<B> {
  /// Parse a signed decimal literal: an optional `+` or `-`, digits,
  /// optionally a `.` and more digits; at least one digit overall. No
  /// exponents, separators, or interior whitespace (leading and trailing
  /// whitespace is trimmed). Ties round away from zero; the result wraps.
  ///
  /// The parse runs entirely in arbitrary-precision integer arithmetic,
  /// never through a float, so every host produces the same scaled integer
  /// for the same literal.
  pub fn from_str(&self, s: &str) -> Result<Num<B>, Error> {
    let scaled = parse_scaled(s, self.frac_bits)?;
    Ok(Num(B::from_big(&wrap_big(scaled, self.total_bits))))
  }
}
