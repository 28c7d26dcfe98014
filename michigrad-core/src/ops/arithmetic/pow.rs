use crate::autograd::BackwardOp;
use crate::error::MichigradError;
use crate::value::Value;
use std::sync::Arc;

/// Backward operation context for raising a value to a constant power.
#[derive(Debug)]
struct PowBackward {
    base: Value,
    base_data: f64,
    exponent: f64,
}

impl BackwardOp for PowBackward {
    fn inputs(&self) -> Vec<Value> {
        vec![self.base.clone()]
    }

    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, MichigradError> {
        // d(x^n)/dx = n * x^(n-1)
        let local = self.exponent * self.base_data.powf(self.exponent - 1.0);
        Ok(vec![grad_output * local])
    }
}

/// Computes `base^exponent` for a constant exponent.
pub fn pow_op(base: &Value, exponent: f64) -> Value {
    let base_data = base.data();
    Value::from_op(
        base_data.powf(exponent),
        "pow",
        Arc::new(PowBackward {
            base: base.clone(),
            base_data,
            exponent,
        }),
    )
}

impl Value {
    /// Raises this value to a constant power.
    pub fn pow(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
