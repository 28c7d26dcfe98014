use crate::autograd::BackwardOp;
use crate::error::MichigradError;
use crate::value::Value;
use std::sync::Arc;

/// Backward operation context for unary negation.
#[derive(Debug)]
struct NegBackward {
    input: Value,
}

impl BackwardOp for NegBackward {
    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }

    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, MichigradError> {
        Ok(vec![-grad_output])
    }
}

/// Computes `-input` and records it in the computation graph.
pub fn neg_op(input: &Value) -> Value {
    Value::from_op(
        -input.data(),
        "neg",
        Arc::new(NegBackward {
            input: input.clone(),
        }),
    )
}
