use crate::autograd::BackwardOp;
use crate::error::MichigradError;
use crate::value::Value;
use std::sync::Arc;

// --- Backward Operation Structure ---

/// Backward operation context for multiplication.
#[derive(Debug)]
struct MulBackward {
    a: Value,
    b: Value,
    a_data: f64,
    b_data: f64,
}

// --- Backward Operation Implementation ---

impl BackwardOp for MulBackward {
    fn inputs(&self) -> Vec<Value> {
        vec![self.a.clone(), self.b.clone()]
    }

    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, MichigradError> {
        // grad_a = grad_output * b
        let grad_a = grad_output * self.b_data;
        // grad_b = grad_output * a
        let grad_b = grad_output * self.a_data;
        Ok(vec![grad_a, grad_b])
    }
}

/// Multiplies two values and records the product in the computation graph.
///
/// The operands' data is captured here, so later `set_data` calls do not
/// change the derivatives of this node.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    let a_data = a.data();
    let b_data = b.data();
    Value::from_op(
        a_data * b_data,
        "*",
        Arc::new(MulBackward {
            a: a.clone(),
            b: b.clone(),
            a_data,
            b_data,
        }),
    )
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
