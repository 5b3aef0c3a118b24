//! The runtime-selected surface: a builder that picks the backing from the
//! requested width (or an explicit flag) once at construction, and a tagged
//! value union to match. The backing of an [`Engine`] and of every [`Value`]
//! it produces never changes afterwards; handing a value from one backing to
//! an engine bound to the other is rejected, not coerced.

use core::cmp::Ordering;

use malachite::Integer;

use crate::backing::WORD_BITS;
use crate::error::{Error, LayoutError};
use crate::fixed::{Fixed, Num};

/// Configuration for an [`Engine`]. Defaults to Q16.16 in the word backing.
#[derive(Debug, Clone, Copy)]
pub struct Builder {
  fraction_bits: u32,
  total_bits: u32,
  unbounded: Option<bool>,
}

impl Default for Builder {
  fn default() -> Self {
    Self { fraction_bits: 16, total_bits: 32, unbounded: None }
  }
}

impl Builder {
  pub fn fraction_bits(mut self, bits: u32) -> Self {
    self.fraction_bits = bits;
    self
  }

  pub fn total_bits(mut self, bits: u32) -> Self {
    self.total_bits = bits;
    self
  }

  /// Force the big backing. With `false`, force the word backing, in which
  /// case an over-wide layout becomes a construction error instead of a
  /// silent upgrade.
  pub fn unbounded(mut self, unbounded: bool) -> Self {
    self.unbounded = Some(unbounded);
    self
  }

  /// Validate the layout and return the engine bound to it. Unless forced,
  /// the backing is the word storage whenever the width fits it.
  pub fn build(self) -> Result<Engine, LayoutError> {
    let unbounded = self.unbounded.unwrap_or(self.total_bits > WORD_BITS);
    if unbounded {
      Ok(Engine::Big(Fixed::new(self.fraction_bits, self.total_bits)?))
    } else {
      Ok(Engine::Word(Fixed::new(self.fraction_bits, self.total_bits)?))
    }
  }
}

/// A [`Fixed`] operation set with the backing chosen at construction time.
#[derive(Debug)]
pub enum Engine {
  Word(Fixed<i32>),
  Big(Fixed<Integer>),
}

/// A scaled value of either backing, produced and consumed by [`Engine`].
///
/// Values of different backings never compare equal or ordered; operations
/// mixing them fail with [`Error::MixedBacking`].
#[derive(Debug, Clone)]
pub enum Value {
  Word(Num<i32>),
  Big(Num<Integer>),
}

impl PartialEq for Value {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Value::Word(a), Value::Word(b)) => a == b,
      (Value::Big(a), Value::Big(b)) => a == b,
      _ => false,
    }
  }
}

impl PartialOrd for Value {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    match (self, other) {
      (Value::Word(a), Value::Word(b)) => Some(a.cmp(b)),
      (Value::Big(a), Value::Big(b)) => Some(a.cmp(b)),
      _ => None,
    }
  }
}

/// Dispatch helpers: each expands one public method that matches the engine
/// and its operands onto the same backing, or fails with
/// [`Error::MixedBacking`].
macro_rules! mk_nullary {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    pub fn $name(&self) -> Value {
      match self {
        Engine::Word(fx) => Value::Word(fx.$name()),
        Engine::Big(fx) => Value::Big(fx.$name()),
      }
    }
  };
}

macro_rules! mk_unary {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    pub fn $name(&self, v: &Value) -> Result<Value, Error> {
      match (self, v) {
        (Engine::Word(fx), Value::Word(v)) => Ok(Value::Word(fx.$name(v))),
        (Engine::Big(fx), Value::Big(v)) => Ok(Value::Big(fx.$name(v))),
        _ => Err(Error::MixedBacking),
      }
    }
  };
}

macro_rules! mk_unary_fallible {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    pub fn $name(&self, v: &Value) -> Result<Value, Error> {
      match (self, v) {
        (Engine::Word(fx), Value::Word(v)) => fx.$name(v).map(Value::Word),
        (Engine::Big(fx), Value::Big(v)) => fx.$name(v).map(Value::Big),
        _ => Err(Error::MixedBacking),
      }
    }
  };
}

macro_rules! mk_binary {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    pub fn $name(&self, a: &Value, b: &Value) -> Result<Value, Error> {
      match (self, a, b) {
        (Engine::Word(fx), Value::Word(a), Value::Word(b)) => Ok(Value::Word(fx.$name(a, b))),
        (Engine::Big(fx), Value::Big(a), Value::Big(b)) => Ok(Value::Big(fx.$name(a, b))),
        _ => Err(Error::MixedBacking),
      }
    }
  };
}

macro_rules! mk_binary_fallible {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    pub fn $name(&self, a: &Value, b: &Value) -> Result<Value, Error> {
      match (self, a, b) {
        (Engine::Word(fx), Value::Word(a), Value::Word(b)) => fx.$name(a, b).map(Value::Word),
        (Engine::Big(fx), Value::Big(a), Value::Big(b)) => fx.$name(a, b).map(Value::Big),
        _ => Err(Error::MixedBacking),
      }
    }
  };
}

impl Engine {
  pub fn builder() -> Builder {
    Builder::default()
  }

  pub fn fraction_bits(&self) -> u32 {
    match self {
      Engine::Word(fx) => fx.fraction_bits(),
      Engine::Big(fx) => fx.fraction_bits(),
    }
  }

  pub fn total_bits(&self) -> u32 {
    match self {
      Engine::Word(fx) => fx.total_bits(),
      Engine::Big(fx) => fx.total_bits(),
    }
  }

  mk_nullary!{
    /// Zero.
    zero
  }
  mk_nullary!{
    /// One: the scale factor as a scaled value.
    one
  }
  mk_nullary!{
    /// The smallest representable step.
    epsilon
  }
  mk_nullary!{
    /// Smallest representable value.
    min
  }
  mk_nullary!{
    /// Largest representable value.
    max
  }
  mk_nullary!{
    /// 2π as a scaled value.
    two_pi
  }
  mk_nullary!{
    /// π/2 as a scaled value.
    pi_half
  }

  /// Scale an integer into a value of this engine's layout.
  pub fn from_int(&self, n: i64) -> Value {
    match self {
      Engine::Word(fx) => Value::Word(fx.from_int(n)),
      Engine::Big(fx) => Value::Big(fx.from_int(n)),
    }
  }

  /// See [`Fixed::from_float`].
  pub fn from_float(&self, f: f64) -> Result<Value, Error> {
    match self {
      Engine::Word(fx) => fx.from_float(f).map(Value::Word),
      Engine::Big(fx) => fx.from_float(f).map(Value::Big),
    }
  }

  /// See [`Fixed::from_str`].
  pub fn from_str(&self, s: &str) -> Result<Value, Error> {
    match self {
      Engine::Word(fx) => fx.from_str(s).map(Value::Word),
      Engine::Big(fx) => fx.from_str(s).map(Value::Big),
    }
  }

  /// The integer part of `v`, truncated toward zero.
  pub fn to_int(&self, v: &Value) -> Result<Integer, Error> {
    match (self, v) {
      (Engine::Word(fx), Value::Word(v)) => Ok(Integer::from(fx.to_int(v))),
      (Engine::Big(fx), Value::Big(v)) => Ok(fx.to_int(v)),
      _ => Err(Error::MixedBacking),
    }
  }

  /// See [`Fixed::to_float`]. Display only.
  pub fn to_float(&self, v: &Value) -> Result<f64, Error> {
    match (self, v) {
      (Engine::Word(fx), Value::Word(v)) => Ok(fx.to_float(v)),
      (Engine::Big(fx), Value::Big(v)) => Ok(fx.to_float(v)),
      _ => Err(Error::MixedBacking),
    }
  }

  mk_binary!{
    /// `a + b`, wrapped.
    add
  }
  mk_binary!{
    /// `a - b`, wrapped.
    sub
  }
  mk_binary!{
    /// `a * b`, wrapped.
    mul
  }
  mk_binary_fallible!{
    /// `a / b`, truncated toward zero, wrapped. Fails on a zero divisor.
    div
  }
  mk_binary_fallible!{
    /// Truncated remainder on the raw scaled integers. Fails on a zero
    /// divisor.
    rem
  }
  mk_unary!{
    /// `-v`, wrapped.
    neg
  }
  mk_unary!{
    /// Absolute value, wrapped.
    abs
  }
  mk_unary!{
    /// Table-lookup sine.
    sin
  }
  mk_unary!{
    /// Table-lookup cosine.
    cos
  }
  mk_unary_fallible!{
    /// Integer-Newton square root. Fails on negative input.
    sqrt
  }
}
