//! Known-answer tests for GF(2^293) arithmetic

use onb293::algorithms::FieldElement;
use onb293_tests::vectors::ONB293_KAT;
use onb293_tests::{element, exponent};

#[test]
fn test_vector_file_metadata() {
    assert_eq!(ONB293_KAT.field, "GF(2^293)");
    assert_eq!(ONB293_KAT.prime, 587);
    assert!(!ONB293_KAT.binary_op.is_empty());
    assert!(!ONB293_KAT.unary_op.is_empty());
}

#[test]
fn test_binary_op_vectors() {
    for v in &ONB293_KAT.binary_op {
        let lhs = element(&v.name, &v.lhs);
        let rhs = element(&v.name, &v.rhs);
        let got = match v.op.as_str() {
            "add" => lhs.add(&rhs),
            "mul" => lhs.mul(&rhs),
            other => panic!("{}: unknown op {}", v.name, other),
        };
        assert_eq!(got.to_hex(), v.result, "{}", v.name);
    }
}

#[test]
fn test_unary_op_vectors() {
    for v in &ONB293_KAT.unary_op {
        let input = element(&v.name, &v.input);
        let got = match v.op.as_str() {
            "square" => input.square(),
            "sqrt" => input.sqrt(),
            "invert" => input.invert(),
            other => panic!("{}: unknown op {}", v.name, other),
        };
        assert_eq!(got.to_hex(), v.result, "{}", v.name);
    }
}

#[test]
fn test_pow_vectors() {
    for v in &ONB293_KAT.pow {
        let base = element(&v.name, &v.base);
        let e = exponent(&v.name, &v.exponent);
        assert_eq!(base.pow(&e).to_hex(), v.result, "{}", v.name);
    }
}

#[test]
fn test_trace_vectors() {
    for v in &ONB293_KAT.trace {
        let input = element("trace", &v.input);
        assert_eq!(input.trace(), v.result, "trace of {}", v.input);
    }
}

#[test]
fn test_all_ones_binary_string_is_one() {
    let bits = "1".repeat(293);
    let one = FieldElement::from_binary_str(&bits).unwrap();
    assert!(one.is_one());
    assert_eq!(one, FieldElement::one());
    assert_eq!(one.trace(), 1);
}
