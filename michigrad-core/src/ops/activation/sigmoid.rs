use crate::autograd::BackwardOp;
use crate::error::MichigradError;
use crate::value::Value;
use std::sync::Arc;

#[derive(Debug)]
struct SigmoidBackward {
    input: Value,
    output: f64,
}

impl BackwardOp for SigmoidBackward {
    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }

    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, MichigradError> {
        // sigma'(x) = sigma(x) * (1 - sigma(x))
        Ok(vec![grad_output * self.output * (1.0 - self.output)])
    }
}

/// Applies the logistic function `1 / (1 + e^-x)`.
pub fn sigmoid_op(input: &Value) -> Value {
    let output = 1.0 / (1.0 + (-input.data()).exp());
    Value::from_op(
        output,
        "sigmoid",
        Arc::new(SigmoidBackward {
            input: input.clone(),
            output,
        }),
    )
}

impl Value {
    /// Applies the logistic sigmoid activation.
    pub fn sigmoid(&self) -> Value {
        sigmoid_op(self)
    }
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;
