use crate::autograd::BackwardOp;
use crate::error::MichigradError;
use crate::value::Value;
use std::sync::Arc;

#[derive(Debug)]
struct ExpBackward {
    input: Value,
    output: f64,
}

impl BackwardOp for ExpBackward {
    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }

    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, MichigradError> {
        Ok(vec![grad_output * self.output])
    }
}

/// Computes `e^input`.
pub fn exp_op(input: &Value) -> Value {
    let output = input.data().exp();
    Value::from_op(
        output,
        "exp",
        Arc::new(ExpBackward {
            input: input.clone(),
            output,
        }),
    )
}

impl Value {
    /// Computes the natural exponential of this value.
    pub fn exp(&self) -> Value {
        exp_op(self)
    }
}
