use super::*;

/// Canonical sine samples (generated data).
mod sin_table;

/// Integer square root.
mod sqrt;

/// Table-backed sine and cosine.
mod trig;
