use crate::error::ScalarGradError;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::{check_input_len, prefix_names, Module, Output};
use crate::value::Value;
use log::debug;
use rand::Rng;
use std::fmt;

/// A fully connected layer: `output_count` neurons sharing the same inputs.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
    input_count: usize,
}

impl Layer {
    /// Creates a layer of `output_count` neurons with `input_count` inputs each.
    ///
    /// # Errors
    /// `InvalidArgument` if either count is zero.
    pub fn new(
        input_count: usize,
        output_count: usize,
        nonlinear: bool,
    ) -> Result<Self, ScalarGradError> {
        Self::new_with_rng(input_count, output_count, nonlinear, &mut rand::thread_rng())
    }

    pub fn new_with_rng<R: Rng + ?Sized>(
        input_count: usize,
        output_count: usize,
        nonlinear: bool,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if output_count == 0 {
            return Err(ScalarGradError::InvalidArgument {
                argument: "output_count".to_string(),
                reason: "a layer needs at least one neuron".to_string(),
            });
        }
        debug!(
            "Layer::new: {} -> {}, nonlinear={}",
            input_count, output_count, nonlinear
        );
        let neurons = (0..output_count)
            .map(|_| Neuron::new_with_rng(input_count, nonlinear, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer {
            neurons,
            input_count,
        })
    }

    /// Builds a layer from existing neurons, which must agree on their input count.
    ///
    /// # Errors
    /// `InvalidArgument` if `neurons` is empty or input counts differ.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, ScalarGradError> {
        let input_count = match neurons.first() {
            Some(first) => first.input_count(),
            None => {
                return Err(ScalarGradError::InvalidArgument {
                    argument: "neurons".to_string(),
                    reason: "a layer needs at least one neuron".to_string(),
                })
            }
        };
        if let Some(odd) = neurons.iter().find(|n| n.input_count() != input_count) {
            return Err(ScalarGradError::InvalidArgument {
                argument: "neurons".to_string(),
                reason: format!(
                    "input counts differ: {} vs {}",
                    input_count,
                    odd.input_count()
                ),
            });
        }
        Ok(Layer {
            neurons,
            input_count,
        })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn input_count(&self) -> usize {
        self.input_count
    }

    pub fn output_count(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    /// Applies every neuron to the same input. A single-neuron layer yields
    /// `Output::Scalar`.
    fn forward(&self, input: &[Value]) -> Result<Output, ScalarGradError> {
        check_input_len(input, self.input_count)?;
        let outputs = self
            .neurons
            .iter()
            .map(|neuron| neuron.activate(input))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Output::from_values(outputs))
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| prefix_names(&format!("neurons.{}", i), n.named_parameters()))
            .collect()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let neurons: Vec<String> = self.neurons.iter().map(|n| n.to_string()).collect();
        write!(f, "Layer of [{}]", neurons.join(", "))
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
