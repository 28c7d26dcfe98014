use crate::value::Value;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Lower bound (inclusive) of the weight initialisation range.
pub const WEIGHT_INIT_LOW: f64 = -1.0;
/// Upper bound (exclusive) of the weight initialisation range.
pub const WEIGHT_INIT_HIGH: f64 = 1.0;

/// Creates `n` independent leaves drawn uniformly from `[low, high)`.
///
/// # Panics
/// Panics if `low >= high`, like `rand_distr::Uniform::new`.
pub fn uniform<R: Rng + ?Sized>(n: usize, low: f64, high: f64, rng: &mut R) -> Vec<Value> {
    let dist = Uniform::new(low, high);
    (0..n).map(|_| Value::new(dist.sample(rng))).collect()
}

/// Creates `n` weights drawn uniformly from `[-1, 1)`.
pub fn default_weights<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Value> {
    uniform(n, WEIGHT_INIT_LOW, WEIGHT_INIT_HIGH, rng)
}

/// Overwrites the data of every value with `data`. Gradients are left untouched.
pub fn fill_(values: &[&Value], data: f64) {
    for v in values {
        v.set_data(data);
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
