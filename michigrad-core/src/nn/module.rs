use crate::error::MichigradError;
use crate::value::Value;
use std::fmt::Debug;

pub(crate) mod sealed {
    /// Restricts `Module` to the composites defined in this crate.
    pub trait Sealed {}
}

/// The capability shared by every trainable composite: `Neuron`, `Layer` and `MLP`.
///
/// The trait is sealed. Parameter enumeration is the contract optimizers and
/// gradient resets rely on, so it is only implemented by types whose
/// enumeration is known to be complete.
pub trait Module: Debug + Send + Sync + sealed::Sealed {
    /// What a forward pass produces.
    type Output;

    /// Performs a forward pass of the module.
    ///
    /// # Errors
    /// Returns `MichigradError::ShapeMismatch` if `input.len()` differs from the
    /// module's input arity.
    fn forward(&self, input: &[Value]) -> Result<Self::Output, MichigradError>;

    /// Returns handles to every trainable scalar owned by the module.
    ///
    /// The order is deterministic: depth-first, children in construction order.
    /// Each parameter appears exactly once. The handles borrow from the module,
    /// so its structure cannot change while they are alive.
    fn parameters(&self) -> Vec<&Value> {
        Vec::new()
    }

    /// Returns the parameters along with hierarchical names.
    ///
    /// Names follow the same order as `parameters()` (e.g. `"layers.0.neurons.2.w.1"`).
    fn named_parameters(&self) -> Vec<(String, &Value)> {
        Vec::new()
    }

    /// Number of trainable scalars.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Resets the gradient of every parameter to zero. Idempotent.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}

/// Prefixes each child parameter name with `"{prefix}.{index}."`.
pub(crate) fn prefixed<'a>(
    prefix: &str,
    index: usize,
    named: Vec<(String, &'a Value)>,
) -> impl Iterator<Item = (String, &'a Value)> {
    let prefix = format!("{}.{}.", prefix, index);
    named
        .into_iter()
        .map(move |(name, param)| (format!("{}{}", prefix, name), param))
}
