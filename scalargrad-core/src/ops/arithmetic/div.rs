use crate::ops::arithmetic::mul::mul_op;
use crate::ops::arithmetic::pow::powf_op;
use crate::value::Value;

/// Divides two values, recorded as `a * b**-1`.
///
/// Division by a zero-valued `b` is not guarded: the power step produces
/// `inf`/`NaN` following IEEE-754, in both the value and the gradients.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &powf_op(b, -1.0))
}

impl_binary_operator!(Div, div, DivAssign, div_assign, div_op);

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
