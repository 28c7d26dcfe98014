use crate::error::MichigradError;
use crate::value::Value;
use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable scalar operation.
///
/// Any operation that creates a non-leaf `Value` stores an implementation of this
/// trait in the output's `grad_fn` field. `Value::backward()` uses it to propagate
/// gradients according to the chain rule.
///
/// The trait requires `Debug + Send + Sync` because the `Arc<dyn BackwardOp>` is
/// shared between every handle of the output node, and handles may cross threads.
pub trait BackwardOp: Debug + Send + Sync {
    /// Computes dL/dInput_i for each input, given dL/dOutput (`grad_output`).
    ///
    /// The order of the returned gradients **must** match the order of `inputs()`.
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, MichigradError>;

    /// Returns handles to the nodes that participated in the forward operation.
    ///
    /// These are the edges followed by the topological sort. An operand used twice
    /// (as in `x * x`) appears twice.
    fn inputs(&self) -> Vec<Value>;
}
