// src/value_data.rs
use std::fmt::Debug;
use std::sync::Arc;

use crate::autograd::BackwardOp;

/// Internal storage and autograd metadata for a `Value`.
///
/// It is wrapped in `Arc<RwLock<ValueData>>` by the `Value` struct to allow
/// shared ownership of graph nodes and interior mutability of `grad`.
#[derive(Debug)]
pub struct ValueData {
    /// The scalar held by this node.
    pub(crate) data: f64,
    /// Accumulated gradient of the backward root with respect to this node.
    /// Zero until a backward pass reaches the node.
    pub(crate) grad: f64,
    /// The operation that produced this node. Leaves have `grad_fn = None`.
    pub(crate) grad_fn: Option<Arc<dyn BackwardOp + Send + Sync>>,
    /// Short label of the producing operation, for debugging.
    pub(crate) op: Option<&'static str>,
}

impl ValueData {
    /// Creates a leaf node with a zero gradient.
    pub fn new(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            grad_fn: None,
            op: None,
        }
    }

    /// Creates a non-leaf node produced by `op`.
    pub(crate) fn from_op(
        data: f64,
        op: &'static str,
        grad_fn: Arc<dyn BackwardOp + Send + Sync>,
    ) -> Self {
        ValueData {
            data,
            grad: 0.0,
            grad_fn: Some(grad_fn),
            op: Some(op),
        }
    }

    /// Returns `true` if this node was created directly rather than by an operation.
    pub fn is_leaf(&self) -> bool {
        self.grad_fn.is_none()
    }
}

impl Drop for ValueData {
    /// Releases the graph behind this node without recursing through it.
    ///
    /// Dropping a `grad_fn` would otherwise drop its input handles, whose nodes
    /// drop their own `grad_fn`, and so on down the whole chain. Backward nodes
    /// owned solely by this chain are unlinked onto an explicit stack instead.
    fn drop(&mut self) {
        let mut pending: Vec<Arc<dyn BackwardOp + Send + Sync>> =
            self.grad_fn.take().into_iter().collect();

        while let Some(grad_fn) = pending.pop() {
            // Shared backward nodes stay alive elsewhere; releasing ours is shallow.
            if Arc::strong_count(&grad_fn) != 1 {
                continue;
            }
            // The clones keep every input alive while the op releases its own handles
            let inputs = grad_fn.inputs();
            drop(grad_fn);

            for input in inputs {
                if let Ok(lock) = Arc::try_unwrap(input.inner) {
                    let mut data = lock.into_inner().unwrap_or_else(|p| p.into_inner());
                    pending.extend(data.grad_fn.take());
                }
            }
        }
    }
}

