use crate::autograd::graph::topological_sort;
use crate::error::MichigradError;
use crate::value::Value;

impl Value {
    /// Performs the backward pass starting from this value.
    ///
    /// Seeds this node's gradient with `1.0`, then walks the graph in reverse
    /// topological order, applying each node's local derivative rule and
    /// accumulating the results into the gradients of its inputs.
    ///
    /// Gradients accumulate (`+=`) on every node except the root, so callers
    /// that reuse leaves across passes must reset them with `zero_grad()` first
    /// (typically through `Module::zero_grad`).
    ///
    /// # Errors
    /// Returns `MichigradError::BackwardError` if a backward rule returns a
    /// number of gradients that does not match its inputs.
    pub fn backward(&self) -> Result<(), MichigradError> {
        let sorted_nodes = topological_sort(self);
        log::trace!("backward: {} nodes reachable from root", sorted_nodes.len());

        self.set_grad(1.0);

        for node in sorted_nodes.iter().rev() {
            let grad_fn = match node.grad_fn() {
                Some(grad_fn) => grad_fn,
                None => continue,
            };

            let grad_output = node.grad();
            let input_grads = grad_fn.backward(grad_output)?;
            let inputs = grad_fn.inputs();

            if input_grads.len() != inputs.len() {
                return Err(MichigradError::BackwardError(format!(
                    "BackwardOp returned {} gradients, but expected {} (for op: {:?})",
                    input_grads.len(),
                    inputs.len(),
                    grad_fn
                )));
            }

            log::trace!(
                "backward: {:?} propagated grad {} to {} inputs",
                node.op(),
                grad_output,
                inputs.len()
            );

            for (input, grad) in inputs.iter().zip(input_grads) {
                input.accumulate_grad(grad);
            }
        }

        Ok(())
    }
}
