// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::value::Value;

/// Exponent argument of [`pow_op`].
///
/// Only `Constant` exponents are supported; `pow_op` rejects `Tracked`.
#[derive(Debug, Clone)]
pub enum Exponent {
    Constant(f64),
    Tracked(Value),
}

impl From<f64> for Exponent {
    fn from(k: f64) -> Self {
        Exponent::Constant(k)
    }
}

impl From<f32> for Exponent {
    fn from(k: f32) -> Self {
        Exponent::Constant(f64::from(k))
    }
}

impl From<i32> for Exponent {
    fn from(k: i32) -> Self {
        Exponent::Constant(f64::from(k))
    }
}

impl From<Value> for Exponent {
    fn from(v: Value) -> Self {
        Exponent::Tracked(v)
    }
}

impl From<&Value> for Exponent {
    fn from(v: &Value) -> Self {
        Exponent::Tracked(v.clone())
    }
}

/// Raises `base` to a constant power: `base ** k`.
///
/// # Errors
/// `InvalidOperandKind` if the exponent is a tracked `Value`.
pub fn pow_op(base: &Value, exponent: impl Into<Exponent>) -> Result<Value, ScalarGradError> {
    match exponent.into() {
        Exponent::Constant(k) => Ok(powf_op(base, k)),
        Exponent::Tracked(v) => Err(ScalarGradError::InvalidOperandKind {
            operation: "pow".to_string(),
            reason: format!(
                "exponent must be a plain real number, got tracked {}",
                v
            ),
        }),
    }
}

/// Infallible form of [`pow_op`] for an exponent known to be constant.
///
/// Backward: `base` receives `k * base.data^(k-1) * grad`.
/// A zero base with a negative `k` yields `inf` (IEEE-754), not an error.
pub fn powf_op(base: &Value, k: f64) -> Value {
    Value::from_op(base.data().powf(k), vec![base.clone()], BackwardOp::Pow(k))
}

impl Value {
    /// `self ** exponent`. See [`pow_op`].
    pub fn pow(&self, exponent: impl Into<Exponent>) -> Result<Value, ScalarGradError> {
        pow_op(self, exponent)
    }

    /// `self ** k` for a constant `k`.
    pub fn powf(&self, k: f64) -> Value {
        powf_op(self, k)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
