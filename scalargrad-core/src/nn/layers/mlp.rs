use crate::error::ScalarGradError;
use crate::nn::layers::layer::Layer;
use crate::nn::module::{check_input_len, prefix_names, Module, Output};
use crate::value::Value;
use log::debug;
use rand::Rng;
use std::fmt;

/// Multi-layer perceptron: a chain of fully connected layers.
///
/// One layer is built per entry of the size list. Every layer applies ReLU
/// except the last, which is linear.
#[derive(Debug)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates an MLP taking `input_count` inputs, with `layer_sizes[i]`
    /// neurons in layer `i`.
    ///
    /// # Errors
    /// `InvalidArgument` if `layer_sizes` is empty or any count is zero.
    pub fn new(input_count: usize, layer_sizes: &[usize]) -> Result<Self, ScalarGradError> {
        Self::new_with_rng(input_count, layer_sizes, &mut rand::thread_rng())
    }

    pub fn new_with_rng<R: Rng + ?Sized>(
        input_count: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if layer_sizes.is_empty() {
            return Err(ScalarGradError::InvalidArgument {
                argument: "layer_sizes".to_string(),
                reason: "an MLP needs at least one layer".to_string(),
            });
        }
        debug!("Mlp::new: {} inputs, layer sizes {:?}", input_count, layer_sizes);

        let last = layer_sizes.len() - 1;
        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut fan_in = input_count;
        for (i, &size) in layer_sizes.iter().enumerate() {
            layers.push(Layer::new_with_rng(fan_in, size, i != last, rng)?);
            fan_in = size;
        }
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn input_count(&self) -> usize {
        self.layers[0].input_count()
    }

    pub fn output_count(&self) -> usize {
        self.layers[self.layers.len() - 1].output_count()
    }
}

impl Module for Mlp {
    /// Threads `input` through every layer and returns the last layer's output.
    fn forward(&self, input: &[Value]) -> Result<Output, ScalarGradError> {
        check_input_len(input, self.input_count())?;
        let mut x = input.to_vec();
        let mut layers = self.layers.iter().peekable();
        while let Some(layer) = layers.next() {
            let output = layer.forward(&x)?;
            if layers.peek().is_none() {
                return Ok(output);
            }
            x = output.into_vec();
        }
        Ok(Output::from_values(x))
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, l)| prefix_names(&format!("layers.{}", i), l.named_parameters()))
            .collect()
    }
}

impl fmt::Display for Mlp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layers: Vec<String> = self.layers.iter().map(|l| l.to_string()).collect();
        write!(f, "MLP of [{}]", layers.join(", "))
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
