use crate::autograd::BackwardOp;
use crate::error::MichigradError;
use crate::value::Value;
use std::sync::Arc;

// --- Backward Operation ---

#[derive(Debug)]
struct ReluBackward {
    input: Value,
    output: f64,
}

impl BackwardOp for ReluBackward {
    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }

    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, MichigradError> {
        // The derivative at exactly zero is taken as 0.
        let mask = if self.output > 0.0 { 1.0 } else { 0.0 };
        Ok(vec![grad_output * mask])
    }
}

// --- Forward Operation ---

/// Applies the Rectified Linear Unit: `ReLU(x) = max(0, x)`.
pub fn relu_op(input: &Value) -> Value {
    let x = input.data();
    let output = if x > 0.0 { x } else { 0.0 };
    Value::from_op(
        output,
        "relu",
        Arc::new(ReluBackward {
            input: input.clone(),
            output,
        }),
    )
}

impl Value {
    /// Applies the Rectified Linear Unit activation.
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
