//! proptest strategies for GF(2^293) values

use onb293::algorithms::{Exponent, FieldElement};
use onb293::params::field::onb293::ONB_WORDS;
use proptest::prelude::*;

/// Any canonical field element
pub fn field_element() -> impl Strategy<Value = FieldElement> {
    any::<[u32; ONB_WORDS]>().prop_map(FieldElement::from_words)
}

/// Any non-zero field element
pub fn nonzero_field_element() -> impl Strategy<Value = FieldElement> {
    field_element().prop_filter("element must be non-zero", |e| !e.is_zero())
}

/// Elements with only a few coordinates set, to exercise word boundaries
pub fn sparse_field_element() -> impl Strategy<Value = FieldElement> {
    prop::collection::vec(0usize..293, 1..4).prop_map(|positions| {
        let mut bits = vec!['0'; 293];
        for p in positions {
            bits[292 - p] = '1';
        }
        let s: String = bits.into_iter().collect();
        FieldElement::from_binary_str(&s).expect("generated binary string is well formed")
    })
}

/// Any exponent of at most 64 bits
pub fn small_exponent() -> impl Strategy<Value = (u64, Exponent)> {
    any::<u64>().prop_map(|e| (e, Exponent::from_u64(e)))
}
