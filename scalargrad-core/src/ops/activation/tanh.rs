use crate::autograd::BackwardOp;
use crate::value::Value;

/// Hyperbolic tangent, computed as `(e^(2x) - 1) / (e^(2x) + 1)`.
///
/// Backward: `a` receives `(1 - tanh^2) * grad`. Large positive inputs
/// overflow `e^(2x)` and give `NaN`.
pub fn tanh_op(a: &Value) -> Value {
    let e2x = (2.0 * a.data()).exp();
    let t = (e2x - 1.0) / (e2x + 1.0);
    Value::from_op(t, vec![a.clone()], BackwardOp::Tanh)
}

impl Value {
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
