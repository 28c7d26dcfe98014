use super::*;
use crate::autograd::grad_check::check_grad;
use approx::assert_relative_eq;

#[test]
fn test_add_forward() {
    let a = Value::new(2.0);
    let b = Value::new(-5.5);
    let c = add_op(&a, &b);
    assert_relative_eq!(c.data(), -3.5);
    assert_eq!(c.op(), Some("+"));
    assert!(!c.is_leaf());
    assert_eq!(c.grad(), 0.0);
}

#[test]
fn test_add_operator_variants() {
    let a = Value::new(1.5);
    let b = Value::new(2.0);
    assert_relative_eq!((&a + &b).data(), 3.5);
    assert_relative_eq!((a.clone() + 1.0).data(), 2.5);
    assert_relative_eq!((3.0 + &b).data(), 5.0);
    assert_relative_eq!((a + b).data(), 3.5);
}

#[test]
fn test_add_backward() {
    let a = Value::new(4.0);
    let b = Value::new(-1.0);
    let c = &a + &b;
    c.backward().unwrap();
    assert_relative_eq!(a.grad(), 1.0);
    assert_relative_eq!(b.grad(), 1.0);
    assert_relative_eq!(c.grad(), 1.0);
}

#[test]
fn test_add_same_operand_accumulates() {
    let a = Value::new(3.0);
    let b = &a + &a;
    b.backward().unwrap();
    assert_relative_eq!(b.data(), 6.0);
    assert_relative_eq!(a.grad(), 2.0);
}

#[test]
fn test_add_grad_check() {
    let func = |x: &[Value]| Ok(add_op(&x[0], &x[1]));
    let result = check_grad(func, &[0.25, -1.75], 1e-6, 1e-7, 1e-5);
    assert!(result.is_ok(), "Add grad check failed: {:?}", result.err());
}
