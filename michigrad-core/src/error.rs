use thiserror::Error;

/// Custom error type for the michigrad framework.
///
/// Errors fall in two families: configuration errors, raised while a model is
/// being assembled, and shape errors, raised when a forward pass receives an
/// input of the wrong length. Neither is recoverable by retrying.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum MichigradError {
    #[error("Invalid arity for {component}: {name} must be positive, got {value}")]
    InvalidArity {
        component: &'static str,
        name: &'static str,
        value: usize,
    },

    #[error("An MLP needs at least one layer size")]
    EmptyLayerSizes,

    #[error("Broken arity chain at layer {layer}: expected nin {expected}, got {actual}")]
    BrokenArityChain {
        layer: usize,
        expected: usize,
        actual: usize,
    },

    #[error("The output layer of an MLP must use the Identity activation, got {actual}")]
    OutputActivation { actual: &'static str },

    #[error("Unknown activation '{0}'")]
    UnknownActivation(String),

    #[error("Shape mismatch: expected {expected} inputs, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Backward error: {0}")]
    BackwardError(String),
}

impl MichigradError {
    /// Returns `true` for errors raised while building a model.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            MichigradError::InvalidArity { .. }
                | MichigradError::EmptyLayerSizes
                | MichigradError::BrokenArityChain { .. }
                | MichigradError::OutputActivation { .. }
                | MichigradError::UnknownActivation(_)
        )
    }

    /// Returns `true` for forward-pass input length mismatches.
    pub fn is_shape_error(&self) -> bool {
        matches!(self, MichigradError::ShapeMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::MichigradError;

    #[test]
    fn test_error_classification() {
        let configuration = [
            MichigradError::InvalidArity {
                component: "Layer",
                name: "nin",
                value: 0,
            },
            MichigradError::EmptyLayerSizes,
            MichigradError::BrokenArityChain {
                layer: 1,
                expected: 3,
                actual: 4,
            },
            MichigradError::OutputActivation { actual: "relu" },
            MichigradError::UnknownActivation("swish".to_string()),
        ];
        for err in &configuration {
            assert!(err.is_configuration_error(), "{:?}", err);
            assert!(!err.is_shape_error(), "{:?}", err);
        }

        let shape = MichigradError::ShapeMismatch {
            expected: 3,
            actual: 2,
            operation: "Layer::forward".to_string(),
        };
        assert!(shape.is_shape_error());
        assert!(!shape.is_configuration_error());

        let backward = MichigradError::BackwardError("bad arity".to_string());
        assert!(!backward.is_shape_error() && !backward.is_configuration_error());
    }
}
