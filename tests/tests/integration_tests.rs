//! Integration tests for the onb293 facade crate

use std::thread;

use onb293::algorithms::Error as FieldError;
use onb293::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_prelude_field_roundtrip() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x293);
    let a = FieldElement::random(&mut rng);
    let b = FieldElement::random(&mut rng);

    let q = a.mul(&b).div(&b);
    if b.is_zero() {
        assert!(q.is_zero());
    } else {
        assert_eq!(q, a);
    }

    let bytes = Serialize::to_bytes(&a);
    assert_eq!(bytes.len(), 37);
    let back = <FieldElement as Serialize>::from_bytes(&bytes).unwrap();
    assert_eq!(back, a);
}

#[test]
fn test_binary_field_trait_dispatch() {
    fn frobenius_fixed<F: BinaryField>(x: &F) -> bool {
        x.frobenius(F::DEGREE) == *x
    }

    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let a = FieldElement::random(&mut rng);
    assert!(frobenius_fixed(&a));
    assert_eq!(<FieldElement as BinaryField>::DEGREE, 293);
    assert!(<FieldElement as BinaryField>::one().is_one());
    assert_eq!(BinaryField::trace(&FieldElement::one()), 1);
}

#[test]
fn test_display_and_parse() {
    let one = FieldElement::one();
    let hex = one.to_string();
    assert_eq!(hex.len(), 74);
    assert!(hex.starts_with('F'));
    assert!(hex.ends_with('8'));
    assert_eq!(format!("{:X}", one), hex);
    assert_eq!(hex.parse::<FieldElement>().unwrap(), one);
    assert_eq!(FieldElement::zero().to_string(), "0");
}

#[test]
fn test_error_conversion_through_prelude() {
    let err = FieldElement::from_hex("12G4").unwrap_err();
    assert_eq!(err, FieldError::InvalidDigit { position: 2, found: 'G' });

    let core: Error = err.into();
    assert!(matches!(core, Error::SerializationError { .. }));

    let err = FieldElement::from_binary_str("01").unwrap_err();
    assert!(matches!(err, FieldError::InvalidFormat { .. }));

    let err = FieldElement::from_hex(&"F".repeat(75)).unwrap_err();
    assert!(matches!(err, FieldError::Overflow { .. }));

    let short = <FieldElement as Serialize>::from_bytes(&[0u8; 12]).unwrap_err();
    assert!(matches!(
        short,
        Error::InvalidLength { expected: 37, actual: 12, .. }
    ));
}

#[test]
fn test_result_ext_context() {
    let res: onb293::algorithms::Result<FieldElement> = FieldElement::from_hex("");
    let wrapped = res.map_err(Error::from).with_context("parsing fixture");
    match wrapped {
        Err(e) => assert_eq!(e.context(), "parsing fixture"),
        Ok(_) => panic!("empty hex must be rejected"),
    }
}

#[test]
fn test_constant_time_helpers() {
    let a = FieldElement::one();
    let b = FieldElement::zero();
    assert!(bool::from(a.ct_eq(&a)));
    assert!(!bool::from(a.ct_eq(&b)));
    assert_eq!(FieldElement::conditional_select(&a, &b, 1.into()), b);
    assert_eq!(FieldElement::conditional_select(&a, &b, 0.into()), a);

    let mut secret = a;
    secret.zeroize();
    assert!(secret.is_zero());
}

#[test]
fn test_global_table_shared_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let table = MultiplicationTable::global();
                let x = FieldElement::one().pow_u64(i);
                (table as *const MultiplicationTable as usize, table.len(), x.mul(&x))
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let first = results[0].0;
    for (ptr, len, sq) in results {
        assert_eq!(ptr, first);
        assert_eq!(len, 585);
        assert!(sq.is_one());
    }
}

#[test]
fn test_injected_table_matches_global() {
    let table = MultiplicationTable::try_build().unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let a = FieldElement::random(&mut rng);
    let b = FieldElement::random(&mut rng);
    assert_eq!(a.mul_with(&b, &table), a.mul(&b));
}

#[test]
fn test_params_reexport() {
    use onb293::params::field::onb293::{ONB_M, ONB_P};
    assert_eq!(ONB_M, 293);
    assert_eq!(ONB_P, 587);
}
