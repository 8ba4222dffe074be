// src/nn/mod.rs
// Parametric modules built from `Value` graphs: neurons, layers and the MLP.

pub mod init;
pub mod layers;
pub mod module;

// Re-export common items
pub use layers::{Layer, Mlp, Neuron};
pub use module::{Module, Output};
