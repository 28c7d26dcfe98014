use crate::autograd::BackwardOp;
use crate::error::MichigradError;
use crate::value::Value;
use std::sync::Arc;

/// Backward operation context for subtraction.
#[derive(Debug)]
struct SubBackward {
    a: Value,
    b: Value,
}

impl BackwardOp for SubBackward {
    fn inputs(&self) -> Vec<Value> {
        vec![self.a.clone(), self.b.clone()]
    }

    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, MichigradError> {
        Ok(vec![grad_output, -grad_output])
    }
}

/// Computes `a - b` and records it in the computation graph.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    let result = a.data() - b.data();
    Value::from_op(
        result,
        "-",
        Arc::new(SubBackward {
            a: a.clone(),
            b: b.clone(),
        }),
    )
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
