use crate::autograd::BackwardOp;
use crate::value::Value;

/// Applies the Rectified Linear Unit: `max(a, 0)`.
///
/// Backward uses the sub-gradient 0 at `a == 0`.
pub fn relu_op(a: &Value) -> Value {
    let x = a.data();
    let data = if x > 0.0 { x } else { 0.0 };
    Value::from_op(data, vec![a.clone()], BackwardOp::Relu)
}

impl Value {
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
