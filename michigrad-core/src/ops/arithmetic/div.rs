use crate::autograd::BackwardOp;
use crate::error::MichigradError;
use crate::value::Value;
use std::sync::Arc;

/// Backward operation context for division.
#[derive(Debug)]
struct DivBackward {
    a: Value,
    b: Value,
    a_data: f64,
    b_data: f64,
}

impl BackwardOp for DivBackward {
    fn inputs(&self) -> Vec<Value> {
        vec![self.a.clone(), self.b.clone()]
    }

    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, MichigradError> {
        let (a, b) = (self.a_data, self.b_data);
        // d(a/b)/da = 1/b, d(a/b)/db = -a/b^2
        Ok(vec![grad_output / b, -grad_output * a / (b * b)])
    }
}

/// Computes `a / b` and records it in the computation graph.
///
/// Division by zero follows IEEE-754 and yields an infinite or NaN value.
pub fn div_op(a: &Value, b: &Value) -> Value {
    let a_data = a.data();
    let b_data = b.data();
    Value::from_op(
        a_data / b_data,
        "/",
        Arc::new(DivBackward {
            a: a.clone(),
            b: b.clone(),
            a_data,
            b_data,
        }),
    )
}

// --- Tests ---
#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
