use thiserror::Error;

/// A layout rejected at construction. Construction never silently corrects
/// an invalid layout.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
  /// A scale factor of `2^0` would leave no fractional precision at all.
  #[error("fraction bits must be at least 1")]
  FractionBitsZero,

  #[error("total bits ({total_bits}) must exceed fraction bits ({fraction_bits})")]
  TotalNotAboveFraction { fraction_bits: u32, total_bits: u32 },

  /// The word backing was requested for a width it cannot hold.
  #[error("total bits ({total_bits}) exceed the {limit}-bit word backing")]
  WordTooNarrow { total_bits: u32, limit: u32 },
}

/// An operation-level failure. Every variant reflects invalid caller input,
/// never a transient condition; nothing is retried internally.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Division or remainder by zero.
  #[error("division by zero")]
  DivisionByZero,

  /// Square root of a negative value.
  #[error("square root of a negative value")]
  SqrtOfNegative,

  /// A float operand that is NaN or an infinity.
  #[error("non-finite float operand")]
  NonFinite,

  /// A decimal literal outside `[sign]digits[.digits]`.
  #[error("malformed decimal literal")]
  MalformedLiteral,

  /// A value from one backing passed to an engine bound to the other.
  #[error("operands from mismatched backings")]
  MixedBacking,
}
