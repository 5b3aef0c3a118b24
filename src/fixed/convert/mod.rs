use super::*;

/// Integer conversions.
mod int;

/// Float conversions.
mod float;

/// Decimal-string parsing.
mod string;
