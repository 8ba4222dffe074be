use crate::error::ScalarGradError;
use crate::value::Value;

/// Result of evaluating a module: one value, or one value per output unit.
///
/// A layer with a single neuron yields `Scalar` directly rather than a
/// one-element `Vector`.
#[derive(Debug, Clone)]
pub enum Output {
    Scalar(Value),
    Vector(Vec<Value>),
}

impl Output {
    /// Wraps `values`, unwrapping a single element to `Scalar`.
    pub(crate) fn from_values(mut values: Vec<Value>) -> Self {
        if values.len() == 1 {
            Output::Scalar(values.remove(0))
        } else {
            Output::Vector(values)
        }
    }

    /// Number of values carried.
    pub fn len(&self) -> usize {
        match self {
            Output::Scalar(_) => 1,
            Output::Vector(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value if this is a `Scalar`.
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Output::Scalar(value) => Some(value),
            Output::Vector(_) => None,
        }
    }

    pub fn into_scalar(self) -> Option<Value> {
        match self {
            Output::Scalar(value) => Some(value),
            Output::Vector(_) => None,
        }
    }

    /// Flattens into a sequence, usable as the input of the next module.
    pub fn into_vec(self) -> Vec<Value> {
        match self {
            Output::Scalar(value) => vec![value],
            Output::Vector(values) => values,
        }
    }
}

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// This trait defines the operations every module supports: a forward pass
/// that builds graph nodes, and enumeration of the learnable parameters.
pub trait Module: std::fmt::Debug + std::fmt::Display {
    /// Performs a forward pass of the module.
    ///
    /// # Errors
    /// `InputLengthMismatch` if `input` does not have the module's input count.
    fn forward(&self, input: &[Value]) -> Result<Output, ScalarGradError>;

    /// Returns every learnable `Value` of the module and its sub-modules.
    ///
    /// The order is deterministic and stable across calls for a given instance.
    /// Returned values are handles: mutating their gradient or data mutates
    /// the module's parameters.
    fn parameters(&self) -> Vec<Value>;

    /// Returns the parameters together with hierarchical names
    /// (e.g. `"layers.1.neurons.0.weight.2"`), in the order of `parameters()`.
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Total number of learnable scalars.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Sets the gradient of every parameter to `0.0`.
    /// Values not owned by the module (e.g. inputs) are not touched.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    /// Evaluates the module on raw numbers or values, coercing each to a `Value`.
    fn call<X>(&self, input: &[X]) -> Result<Output, ScalarGradError>
    where
        X: Into<Value> + Clone,
        Self: Sized,
    {
        let values: Vec<Value> = input.iter().cloned().map(Into::into).collect();
        self.forward(&values)
    }
}

/// Prefixes every name of `named` with `prefix.`.
pub(crate) fn prefix_names(prefix: &str, named: Vec<(String, Value)>) -> Vec<(String, Value)> {
    named
        .into_iter()
        .map(|(name, value)| (format!("{}.{}", prefix, name), value))
        .collect()
}

/// Fails with `InputLengthMismatch` unless `input.len() == expected`.
pub(crate) fn check_input_len(input: &[Value], expected: usize) -> Result<(), ScalarGradError> {
    if input.len() != expected {
        return Err(ScalarGradError::InputLengthMismatch {
            expected,
            actual: input.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "module_test.rs"]
mod tests;
