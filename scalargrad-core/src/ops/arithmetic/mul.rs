// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::value::Value;
use std::iter::Product;

/// Multiplies two values: `a * b`.
///
/// Backward: `a` receives `b.data * grad`, `b` receives `a.data * grad`.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() * b.data(), vec![a.clone(), b.clone()], BackwardOp::Mul)
}

impl_binary_operator!(Mul, mul, MulAssign, mul_assign, mul_op);

fn product_values<I: Iterator<Item = Value>>(mut iter: I) -> Value {
    match iter.next() {
        Some(first) => iter.fold(first, |acc, v| mul_op(&acc, &v)),
        None => Value::new(1.0),
    }
}

impl Product for Value {
    fn product<I: Iterator<Item = Value>>(iter: I) -> Value {
        product_values(iter)
    }
}

impl<'a> Product<&'a Value> for Value {
    fn product<I: Iterator<Item = &'a Value>>(iter: I) -> Value {
        product_values(iter.cloned())
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
