// src/value/create.rs
use crate::value::Value;

impl Value {
    /// Creates a leaf node with a diagnostic label.
    pub fn with_label(data: f64, label: impl Into<String>) -> Self {
        let value = Value::new(data);
        value.set_label(label);
        value
    }
}

// --- Literal coercion ---
// Every operation accepting "a number or a node" goes through these impls,
// on either operand position.

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl From<f32> for Value {
    fn from(data: f32) -> Self {
        Value::new(f64::from(data))
    }
}

impl From<i32> for Value {
    fn from(data: i32) -> Self {
        Value::new(f64::from(data))
    }
}

impl From<&Value> for Value {
    /// Shares the node; does not create a new leaf.
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

/// Creates one leaf per element of `data`.
pub fn from_slice(data: &[f64]) -> Vec<Value> {
    data.iter().map(|&x| Value::new(x)).collect()
}
