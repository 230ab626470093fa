use std::collections::HashSet;

use cantor::lattice::gcd;
use cantor::{fraction_at, fraction_to_sequence, index_of_str, Enumerator, NotEnumerated};

#[test]
fn index_round_trip() {
    for k in 0..1000 {
        let q = fraction_at(k);
        assert_eq!(
            fraction_to_sequence(q.numerator() as i64, q.denominator() as i64),
            Ok(k),
            "{q} at {k}"
        );
        assert_eq!(index_of_str(&q.to_string()), Some(k));
    }
}

#[test]
fn fraction_round_trip() {
    for n in 1..=50u64 {
        for d in 1..=50u64 {
            let result = fraction_to_sequence(n as i64, d as i64);
            if gcd(n, d) != 1 {
                assert_eq!(result, Err(NotEnumerated::Reducible { gcd: gcd(n, d) }));
                continue;
            }
            let k = result.unwrap();
            let q = fraction_at(k);
            assert_eq!((q.numerator(), q.denominator()), (n, d));
        }
    }
}

#[test]
fn no_duplicates() {
    let seen: HashSet<_> = (0..500).map(fraction_at).collect();
    assert_eq!(seen.len(), 500);
}

#[test]
fn far_corners() {
    assert_eq!(fraction_to_sequence(50, 1), Ok(774));
    assert_eq!(fraction_to_sequence(1, 50), Ok(805));

    let mut e = Enumerator::new();
    assert_eq!(e.index_of(1, 50), Ok(805));
    assert_eq!(e.fraction_at(774).to_string(), "50/1");
}
