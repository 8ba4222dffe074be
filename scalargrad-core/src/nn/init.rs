use crate::value::Value;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Creates `count` leaves drawn independently from `U[low, high]`.
pub fn uniform<R: Rng + ?Sized>(count: usize, low: f64, high: f64, rng: &mut R) -> Vec<Value> {
    let dist = Uniform::new_inclusive(low, high);
    (0..count).map(|_| Value::new(dist.sample(rng))).collect()
}

/// Creates a leaf initialized to `0.0`.
pub fn zero() -> Value {
    Value::new(0.0)
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
