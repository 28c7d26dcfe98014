use crate::autograd::BackwardOp;
use crate::error::MichigradError;
use crate::value::Value;
use std::sync::Arc;

#[derive(Debug)]
struct TanhBackward {
    input: Value,
    output: f64,
}

impl BackwardOp for TanhBackward {
    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }

    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, MichigradError> {
        // tanh'(x) = 1 - tanh(x)^2
        Ok(vec![grad_output * (1.0 - self.output * self.output)])
    }
}

/// Applies the hyperbolic tangent.
pub fn tanh_op(input: &Value) -> Value {
    let output = input.data().tanh();
    Value::from_op(
        output,
        "tanh",
        Arc::new(TanhBackward {
            input: input.clone(),
            output,
        }),
    )
}

impl Value {
    /// Applies the hyperbolic tangent activation.
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
