use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError};
use crate::autograd::BackwardOp;
use approx::assert_relative_eq;

#[test]
fn test_div_forward_backward() {
    let a = Value::new(6.0);
    let b = Value::new(4.0);
    let c = div_op(&a, &b);
    assert_relative_eq!(c.data(), 1.5);
    assert_eq!(c.op(), BackwardOp::Mul);
    assert_eq!(c.operands()[1].op(), BackwardOp::Pow(-1.0));
    c.backward();
    assert_relative_eq!(a.grad(), 0.25);
    // d(a/b)/db = -a/b^2
    assert_relative_eq!(b.grad(), -6.0 / 16.0);
}

#[test]
fn test_div_with_literals() {
    let a = Value::new(2.0);
    assert_relative_eq!((&a / 4.0).data(), 0.5);
    assert_relative_eq!((1.0 / &a).data(), 0.5);
    let mut acc = a.clone();
    acc /= 8.0;
    assert_relative_eq!(acc.data(), 0.25);
}

#[test]
fn test_div_by_zero_is_not_guarded() {
    let a = Value::new(1.0);
    let zero = Value::new(0.0);
    let c = &a / &zero;
    assert!(c.data().is_infinite());
    c.backward();
    assert!(a.grad().is_infinite());
    assert!(!zero.grad().is_finite());
}

#[test]
fn test_div_grad_check() -> Result<(), GradCheckError> {
    let func = |inputs: &[Value]| Ok(&inputs[0] / &inputs[1]);
    check_grad(func, &[0.9, 1.7], 1e-6, 1e-5)
}
