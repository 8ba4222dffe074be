use crate::error::ScalarGradError;
use crate::nn::init;
use crate::nn::module::{check_input_len, Module, Output};
use crate::ops::arithmetic::{add_op, mul_op};
use crate::value::Value;
use log::debug;
use rand::Rng;
use std::fmt;

/// A single unit computing `bias + sum(weight_i * input_i)`, optionally
/// followed by ReLU.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    nonlinear: bool,
}

impl Neuron {
    /// Creates a neuron with `input_count` weights drawn from `U[-1, 1]` and a zero bias.
    ///
    /// # Errors
    /// `InvalidArgument` if `input_count` is zero.
    pub fn new(input_count: usize, nonlinear: bool) -> Result<Self, ScalarGradError> {
        Self::new_with_rng(input_count, nonlinear, &mut rand::thread_rng())
    }

    /// Like [`Neuron::new`], drawing weights from the caller's `rng`.
    pub fn new_with_rng<R: Rng + ?Sized>(
        input_count: usize,
        nonlinear: bool,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if input_count == 0 {
            return Err(ScalarGradError::InvalidArgument {
                argument: "input_count".to_string(),
                reason: "a neuron needs at least one input".to_string(),
            });
        }
        debug!("Neuron::new: {} inputs, nonlinear={}", input_count, nonlinear);
        Ok(Neuron {
            weights: init::uniform(input_count, -1.0, 1.0, rng),
            bias: init::zero(),
            nonlinear,
        })
    }

    /// Builds a neuron around existing parameter values.
    ///
    /// # Errors
    /// `InvalidArgument` if `weights` is empty.
    pub fn from_parameters(
        weights: Vec<Value>,
        bias: Value,
        nonlinear: bool,
    ) -> Result<Self, ScalarGradError> {
        if weights.is_empty() {
            return Err(ScalarGradError::InvalidArgument {
                argument: "weights".to_string(),
                reason: "a neuron needs at least one weight".to_string(),
            });
        }
        Ok(Neuron {
            weights,
            bias,
            nonlinear,
        })
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    pub fn is_nonlinear(&self) -> bool {
        self.nonlinear
    }

    pub fn input_count(&self) -> usize {
        self.weights.len()
    }

    /// Evaluates the neuron, returning its single activation.
    pub fn activate(&self, input: &[Value]) -> Result<Value, ScalarGradError> {
        check_input_len(input, self.weights.len())?;
        let act = self
            .weights
            .iter()
            .zip(input)
            .fold(self.bias.clone(), |acc, (w, x)| add_op(&acc, &mul_op(w, x)));
        Ok(if self.nonlinear { act.relu() } else { act })
    }
}

impl Module for Neuron {
    fn forward(&self, input: &[Value]) -> Result<Output, ScalarGradError> {
        self.activate(input).map(Output::Scalar)
    }

    /// Bias first, then weights in input order.
    fn parameters(&self) -> Vec<Value> {
        let mut params = Vec::with_capacity(self.weights.len() + 1);
        params.push(self.bias.clone());
        params.extend(self.weights.iter().cloned());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut named = vec![("bias".to_string(), self.bias.clone())];
        named.extend(
            self.weights
                .iter()
                .enumerate()
                .map(|(i, w)| (format!("weight.{}", i), w.clone())),
        );
        named
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.nonlinear { "ReLU" } else { "Linear" };
        write!(f, "{} Neuron({})", kind, self.weights.len())
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
