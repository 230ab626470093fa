//! A caching enumerator for repeated lookups.
//!
//! The walk visits diagonals one at a time, so the traversal state at the first point of each
//! diagonal is a natural checkpoint: a lookup of `n / d` only needs to walk diagonal `n + d`,
//! and a lookup of index `k` only needs to walk the diagonal containing the `k`-th fraction.
//! The table is filled lazily and never shrinks.

use crate::enumeration::{find_index, find_point, validate, Target};
use crate::error::{InvalidArgument, NotEnumerated, Rejection};
use crate::fraction::{Fraction, Ratio};
use crate::lattice::{TraversalState, Walk};

#[derive(Debug, Clone)]
pub struct Enumerator {
    /// `starts[i]` stands on the first point of diagonal `i + 2`. Never empty.
    starts: Vec<TraversalState>,
}

impl Default for Enumerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Enumerator {
    pub fn new() -> Self {
        Self {
            starts: vec![TraversalState::start()],
        }
    }

    /// Number of diagonals whose starting state is known.
    pub fn diagonals(&self) -> usize {
        self.starts.len()
    }

    fn last(&self) -> TraversalState {
        self.starts[self.starts.len() - 1]
    }

    /// Walk the last known diagonal to the end and record the start of the next one.
    fn push_next(&mut self) {
        let last = self.last();
        let mut walk = Walk::from_state(last);
        // Diagonal `s` has `s - 1` points.
        for _ in 1..last.point().diagonal() {
            walk.next();
        }
        self.starts.push(walk.state());
    }

    fn extend_while(&mut self, mut pred: impl FnMut(&TraversalState) -> bool) {
        let before = self.starts.len();
        while pred(&self.last()) {
            self.push_next();
        }
        if self.starts.len() > before {
            tracing::debug!(
                diagonals = self.starts.len(),
                count = self.last().count(),
                "extended checkpoint table"
            );
        }
    }

    /// The `k`-th fraction of the enumeration. Agrees with [`crate::fraction_at`].
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn fraction_at(&mut self, k: u64) -> Fraction {
        if k == 0 {
            return Fraction::ZERO;
        }
        // Afterwards the k-th fraction lies strictly before the last checkpoint.
        self.extend_while(|s| s.count() < k);

        // `starts[0].count()` is 0, so at least one checkpoint precedes the k-th fraction.
        let i = self.starts.partition_point(|s| s.count() < k);
        find_index(Walk::from_state(self.starts[i - 1]), k)
    }

    pub fn sequence_to_fraction(&mut self, k: i64) -> Result<Fraction, InvalidArgument> {
        match u64::try_from(k) {
            Ok(k) => Ok(self.fraction_at(k)),
            Err(_) => Err(InvalidArgument::NegativeIndex(k)),
        }
    }

    /// The sequence number of `numerator / denominator`. Agrees with
    /// [`crate::fraction_to_sequence`].
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn index_of(&mut self, numerator: i64, denominator: i64) -> Result<u64, NotEnumerated> {
        let p = match validate(numerator, denominator)? {
            Target::Zero => return Ok(0),
            Target::Point(p) => p,
        };
        let diagonal = p.diagonal();
        self.extend_while(|s| s.point().diagonal() < diagonal);

        let start = self.starts[(diagonal - 2) as usize];
        Ok(find_point(Walk::from_state(start), p))
    }

    pub fn sequence_of(&mut self, input: &str) -> Result<u64, Rejection> {
        let Ratio {
            numerator,
            denominator,
        } = input.parse()?;
        Ok(self.index_of(numerator, denominator)?)
    }
}
