use scalargrad_core::nn::Neuron;
use scalargrad_core::Value;

// Helpers shared by the integration tests.
// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub fn leaves(data: &[f64]) -> Vec<Value> {
    data.iter().map(|&x| Value::new(x)).collect()
}

/// Neuron with the given weights and bias instead of random ones.
#[allow(dead_code)]
pub fn fixed_neuron(weights: &[f64], bias: f64, nonlinear: bool) -> Neuron {
    Neuron::from_parameters(leaves(weights), Value::new(bias), nonlinear)
        .expect("fixed neuron needs at least one weight")
}

/// Central finite difference of `f` with respect to argument `index`.
#[allow(dead_code)]
pub fn finite_difference<F>(f: F, point: &[f64], index: usize, eps: f64) -> f64
where
    F: Fn(&[f64]) -> f64,
{
    let mut plus = point.to_vec();
    let mut minus = point.to_vec();
    plus[index] += eps;
    minus[index] -= eps;
    (f(&plus) - f(&minus)) / (2.0 * eps)
}
