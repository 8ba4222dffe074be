// Main modules of the crate
pub mod autograd;
pub mod ops;
pub mod value;
pub mod value_data;

pub mod nn;

pub mod error;

// Re-export the core types so they are reachable as `scalargrad_core::Value`, etc.
pub use error::ScalarGradError;
pub use ops::arithmetic::Exponent;
pub use value::Value;
