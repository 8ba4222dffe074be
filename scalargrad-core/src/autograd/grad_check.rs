use crate::error::ScalarGradError;
use crate::value::Value;
use log::trace;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Finite-difference step must be positive and finite, got {0}")]
    InvalidEpsilon(f64),
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central finite differences.
///
/// `func` is evaluated once on fresh leaves built from `inputs` and
/// differentiated with `backward()`. Then, for each input `i`, it is evaluated
/// again on fresh leaves with `inputs[i]` shifted by `+epsilon` and `-epsilon`;
/// the estimate `(f(x+eps) - f(x-eps)) / 2eps` must match the analytical
/// gradient within `tolerance`, scaled by the larger gradient magnitude when
/// that exceeds 1.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }

    // --- 1. Analytical gradients ---
    let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves)?;
    output.backward();

    // --- 2. Numerical gradients, one input at a time ---
    for (input_index, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.grad();
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let loss_plus = evaluate_shifted(&func, inputs, input_index, epsilon)?;
        let loss_minus = evaluate_shifted(&func, inputs, input_index, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        let scale = analytical_grad.abs().max(numerical_grad.abs()).max(1.0);
        trace!(
            "check_grad: input {} analytical={} numerical={} diff={}",
            input_index,
            analytical_grad,
            numerical_grad,
            difference
        );
        if difference > tolerance * scale {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }
    Ok(())
}

/// Runs `func` on fresh leaves where `inputs[index]` is moved by `shift`.
fn evaluate_shifted<F>(
    func: &F,
    inputs: &[f64],
    index: usize,
    shift: f64,
) -> Result<f64, GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    let shifted: Vec<Value> = inputs
        .iter()
        .enumerate()
        .map(|(i, &x)| Value::new(if i == index { x + shift } else { x }))
        .collect();
    Ok(func(&shifted)?.data())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
