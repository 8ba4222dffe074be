// src/ops/mod.rs
// Differentiable operations on `Value`.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

pub use activation::{relu_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, powf_op, sub_op, Exponent};
pub use math_elem::exp_op;
