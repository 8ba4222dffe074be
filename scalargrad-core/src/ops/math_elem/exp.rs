// scalargrad-core/src/ops/math_elem/exp.rs

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Natural exponential `e^a`.
///
/// Backward: `a` receives `e^a * grad`, reusing the forward result.
pub fn exp_op(a: &Value) -> Value {
    Value::from_op(a.data().exp(), vec![a.clone()], BackwardOp::Exp)
}

impl Value {
    pub fn exp(&self) -> Value {
        exp_op(self)
    }
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
