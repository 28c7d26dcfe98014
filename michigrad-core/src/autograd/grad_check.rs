use crate::error::MichigradError;
use crate::value::{values_from, Value};
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(MichigradError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(MichigradError),
}

/// Compares the analytical gradients of `func` with central finite differences.
///
/// `func` is evaluated once on fresh leaves built from `inputs` and
/// differentiated with `backward()`. Each input is then perturbed by
/// `±epsilon` and the numerical derivative
/// `(f(x + eps) - f(x - eps)) / (2 * eps)` is compared with the analytical one.
///
/// Two gradients agree when they are within `abs_tol` of each other, or
/// relatively within `rel_tol`.
///
/// # Arguments
/// * `func`: builds a scalar output from the input leaves.
/// * `inputs`: the point at which the gradients are checked.
/// * `epsilon`: finite difference step.
/// * `abs_tol`: absolute tolerance.
/// * `rel_tol`: relative tolerance.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    abs_tol: f64,
    rel_tol: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, MichigradError>,
{
    let leaves = values_from(inputs);
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    output
        .backward()
        .map_err(GradCheckError::BackwardPassError)?;

    for (input_index, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.grad();

        let evaluate_at = |shift: f64| -> Result<f64, GradCheckError> {
            let mut shifted = inputs.to_vec();
            shifted[input_index] += shift;
            let out = func(&values_from(&shifted)).map_err(GradCheckError::ForwardPassError)?;
            Ok(out.data())
        };
        let loss_plus = evaluate_at(epsilon)?;
        let loss_minus = evaluate_at(-epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        let close = relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = abs_tol,
            max_relative = rel_tol
        );
        if !close {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}
