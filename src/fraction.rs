use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::InvalidArgument;
use crate::lattice::LatticePoint;

/// An enumerated rational in lowest terms: either `0/1` or an irreducible lattice point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Fraction {
    numerator: u64,
    denominator: u64,
}

impl Fraction {
    /// The rational with sequence number 0. It lies outside the lattice walk.
    pub const ZERO: Self = Self {
        numerator: 0,
        denominator: 1,
    };

    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    /// The lattice point of a non-zero fraction.
    pub fn point(&self) -> Option<LatticePoint> {
        LatticePoint::new(self.numerator, self.denominator)
    }
}

impl From<LatticePoint> for Fraction {
    fn from(p: LatticePoint) -> Self {
        debug_assert!(p.is_irreducible(), "{p} is not in lowest terms");
        Self {
            numerator: p.numerator(),
            denominator: p.denominator(),
        }
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// A fraction as written, before any validation: `"<int>/<int>"` with optional whitespace around
/// either token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratio {
    pub numerator: i64,
    pub denominator: i64,
}

impl Ratio {
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl From<Fraction> for Ratio {
    fn from(q: Fraction) -> Self {
        Self::new(q.numerator as i64, q.denominator as i64)
    }
}

impl FromStr for Ratio {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split('/').map(str::trim).collect();
        let [numerator, denominator] = tokens[..] else {
            return Err(InvalidArgument::TokenCount {
                input: s.to_string(),
                found: tokens.len(),
            });
        };
        Ok(Self::new(parse_token(numerator)?, parse_token(denominator)?))
    }
}

fn parse_token(token: &str) -> Result<i64, InvalidArgument> {
    token
        .parse()
        .map_err(|source| InvalidArgument::NotAnInteger {
            token: token.to_string(),
            source,
        })
}

impl Display for Ratio {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
