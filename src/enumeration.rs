//! The two inverse lookups between sequence numbers and fractions, computed by re-running the
//! walk from `(1, 1)` on every call.
//!
//! See [`crate::checkpoint::Enumerator`] for a variant that keeps its progress between queries.

use crate::error::{InvalidArgument, NotEnumerated, Rejection};
use crate::fraction::{Fraction, Ratio};
use crate::lattice::{gcd, LatticePoint, Walk};

/// Iterator over `(index, fraction)` for every enumerated fraction, starting from index 1.
pub fn rationals() -> impl Iterator<Item = (u64, Fraction)> {
    rationals_from(Walk::new())
}

pub(crate) fn rationals_from(walk: Walk) -> impl Iterator<Item = (u64, Fraction)> {
    walk.filter_map(|v| v.index.map(|k| (k, Fraction::from(v.point))))
}

/// The `k`-th fraction of the enumeration. Index 0 is `0/1`.
pub fn fraction_at(k: u64) -> Fraction {
    if k == 0 {
        return Fraction::ZERO;
    }
    find_index(Walk::new(), k)
}

/// Resume `walk` until the running count reaches `k`. The walk must not have passed `k` yet.
pub(crate) fn find_index(walk: Walk, k: u64) -> Fraction {
    for (index, q) in rationals_from(walk) {
        if index == k {
            return q;
        }
    }
    unreachable!("the walk is infinite")
}

/// Like [`fraction_at`], but rejects negative indices.
pub fn sequence_to_fraction(k: i64) -> Result<Fraction, InvalidArgument> {
    u64::try_from(k)
        .map(fraction_at)
        .map_err(|_| InvalidArgument::NegativeIndex(k))
}

/// The outcome of the validation gate in front of the inverse lookup.
pub(crate) enum Target {
    Zero,
    Point(LatticePoint),
}

/// Checks, in order: zero denominator, zero numerator, signs, reducibility. Only a
/// [`Target::Point`] may be searched for, since every irreducible positive point is visited.
pub(crate) fn validate(numerator: i64, denominator: i64) -> Result<Target, NotEnumerated> {
    if denominator == 0 {
        return Err(NotEnumerated::ZeroDenominator);
    }
    if numerator == 0 {
        return Ok(Target::Zero);
    }
    if numerator < 0 || denominator < 0 {
        return Err(NotEnumerated::Negative);
    }
    let (n, d) = (numerator as u64, denominator as u64);
    match gcd(n, d) {
        1 => LatticePoint::new(n, d)
            .map(Target::Point)
            .ok_or(NotEnumerated::ZeroDenominator),
        gcd => Err(NotEnumerated::Reducible { gcd }),
    }
}

/// Resume `walk` until it stands on `target` and return its sequence number.
///
/// Terminates only if `target` is irreducible and not yet passed by `walk`. Anything that has
/// gone through [`validate`] satisfies the first condition.
pub(crate) fn find_point(walk: Walk, target: LatticePoint) -> u64 {
    for v in walk {
        if v.point == target {
            return v.index.unwrap_or_else(|| unreachable!("{target} is reducible"));
        }
    }
    unreachable!("the walk is infinite")
}

/// The sequence number of `numerator / denominator`.
pub fn fraction_to_sequence(numerator: i64, denominator: i64) -> Result<u64, NotEnumerated> {
    Ok(match validate(numerator, denominator)? {
        Target::Zero => 0,
        Target::Point(p) => find_point(Walk::new(), p),
    })
}

/// The sequence number of a fraction written as `"n/d"`.
pub fn sequence_of(input: &str) -> Result<u64, Rejection> {
    let Ratio {
        numerator,
        denominator,
    } = input.parse()?;
    Ok(fraction_to_sequence(numerator, denominator)?)
}

/// Like [`sequence_of`], but collapses every rejection into `None`.
pub fn index_of_str(input: &str) -> Option<u64> {
    sequence_of(input).ok()
}
