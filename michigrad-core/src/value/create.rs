use crate::value::Value;

/// Wraps each number in a fresh leaf `Value`, preserving order.
///
/// Convenience for feeding raw inputs to `Module::forward`.
pub fn values_from(data: &[f64]) -> Vec<Value> {
    data.iter().map(|&x| Value::new(x)).collect()
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}
