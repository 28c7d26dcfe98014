use crate::autograd::BackwardOp;
use crate::error::MichigradError;
use crate::value::Value;
use std::sync::Arc;

// --- Backward Operation Structure ---

/// Backward operation context for addition.
#[derive(Debug)]
struct AddBackward {
    a: Value,
    b: Value,
}

impl BackwardOp for AddBackward {
    fn inputs(&self) -> Vec<Value> {
        vec![self.a.clone(), self.b.clone()]
    }

    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, MichigradError> {
        // d(a + b)/da = d(a + b)/db = 1
        Ok(vec![grad_output, grad_output])
    }
}

/// Adds two values and records the sum in the computation graph.
pub fn add_op(a: &Value, b: &Value) -> Value {
    let result = a.data() + b.data();
    Value::from_op(
        result,
        "+",
        Arc::new(AddBackward {
            a: a.clone(),
            b: b.clone(),
        }),
    )
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
