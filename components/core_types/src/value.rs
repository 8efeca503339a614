//! Cypsa runtime value representation.
//!
//! Every value the virtual machine manipulates is an IEEE 754
//! double-precision number. The newtype keeps the constant pool, the value
//! stack and the printed result on one type, and gives the arithmetic
//! opcodes a single place to live.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A Cypsa runtime value.
///
/// Arithmetic follows native floating-point semantics: division by zero
/// yields an infinity or NaN rather than an error.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// let sum = Value::new(1.0) + Value::new(2.0) * Value::new(3.0);
/// assert_eq!(sum, Value::new(7.0));
/// assert_eq!((-sum).to_string(), "-7");
/// assert!((Value::new(1.0) / Value::new(0.0)).as_number().is_infinite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Value(f64);

impl Value {
    /// Wrap a raw number.
    pub const fn new(number: f64) -> Self {
        Self(number)
    }

    /// The underlying number.
    pub const fn as_number(self) -> f64 {
        self.0
    }

    /// Raw IEEE 754 bits, for exact comparisons that must also cover NaN.
    pub fn to_bits(self) -> u64 {
        self.0.to_bits()
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self(number)
    }
}

impl From<Value> for f64 {
    fn from(value: Value) -> Self {
        value.0
    }
}

impl Add for Value {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        Value(self.0 + rhs.0)
    }
}

impl Sub for Value {
    type Output = Value;

    fn sub(self, rhs: Value) -> Value {
        Value(self.0 - rhs.0)
    }
}

impl Mul for Value {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        Value(self.0 * rhs.0)
    }
}

impl Div for Value {
    type Output = Value;

    fn div(self, rhs: Value) -> Value {
        Value(self.0 / rhs.0)
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        Value(-self.0)
    }
}

/// Prints the shortest representation that round-trips, dropping a
/// trailing `.0` so integral results read as `7` rather than `7.0`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0;
        if n.is_nan() {
            return f.write_str("nan");
        }
        if n.is_infinite() {
            return f.write_str(if n > 0.0 { "inf" } else { "-inf" });
        }

        let mut buffer = ryu::Buffer::new();
        let printed = buffer.format_finite(n);
        f.write_str(printed.strip_suffix(".0").unwrap_or(printed))
    }
}
