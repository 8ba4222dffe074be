// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::value::Value;
use std::iter::Sum;

/// Adds two values: `a + b`.
///
/// Backward: both operands receive the upstream gradient unchanged.
pub fn add_op(a: &Value, b: &Value) -> Value {
    Value::from_op(a.data() + b.data(), vec![a.clone(), b.clone()], BackwardOp::Add)
}

impl_binary_operator!(Add, add, AddAssign, add_assign, add_op);

/// Left fold with `+`. An empty iterator sums to a fresh `0.0` leaf.
fn sum_values<I: Iterator<Item = Value>>(mut iter: I) -> Value {
    match iter.next() {
        Some(first) => iter.fold(first, |acc, v| add_op(&acc, &v)),
        None => Value::new(0.0),
    }
}

impl Sum for Value {
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Value {
        sum_values(iter)
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Value {
        sum_values(iter.cloned())
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
