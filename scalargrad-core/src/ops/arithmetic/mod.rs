// src/ops/arithmetic/mod.rs

/// Implements a `std::ops` binary operator and its compound-assignment form
/// for every combination of `Value`, `&Value` and `f64`, by delegating to the
/// given `fn(&Value, &Value) -> Value`.
///
/// Literals are coerced with `Value::from` on whichever side they appear, so
/// `a + 5.0` and `5.0 + a` build the same graph shape.
/// Compound assignment rebinds the handle to the new result node.
macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op_fn:ident) => {
        impl std::ops::$trait<&Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl std::ops::$trait<Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(self, &rhs)
            }
        }

        impl std::ops::$trait<&Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&self, rhs)
            }
        }

        impl std::ops::$trait<Value> for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&self, &rhs)
            }
        }

        impl std::ops::$trait<f64> for &Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $op_fn(self, &Value::from(rhs))
            }
        }

        impl std::ops::$trait<f64> for Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $op_fn(&self, &Value::from(rhs))
            }
        }

        impl std::ops::$trait<&Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&Value::from(self), rhs)
            }
        }

        impl std::ops::$trait<Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&Value::from(self), &rhs)
            }
        }

        impl std::ops::$assign_trait<&Value> for Value {
            fn $assign_method(&mut self, rhs: &Value) {
                *self = $op_fn(&*self, rhs);
            }
        }

        impl std::ops::$assign_trait<Value> for Value {
            fn $assign_method(&mut self, rhs: Value) {
                *self = $op_fn(&*self, &rhs);
            }
        }

        impl std::ops::$assign_trait<f64> for Value {
            fn $assign_method(&mut self, rhs: f64) {
                *self = $op_fn(&*self, &Value::from(rhs));
            }
        }
    };
}

pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;

pub use add::add_op;
pub use div::div_op;
pub use mul::mul_op;
pub use neg::neg_op;
pub use pow::{pow_op, powf_op, Exponent};
pub use sub::sub_op;
