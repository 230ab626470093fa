use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Why a fraction has no sequence number. These are ordinary outcomes of a lookup rather than
/// failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotEnumerated {
    ZeroDenominator,
    /// Only positive rationals are enumerated.
    Negative,
    /// Reducible fractions are skipped by the walk; the reduced form carries the index.
    Reducible { gcd: u64 },
}

impl Display for NotEnumerated {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDenominator => write!(f, "denominator is zero"),
            Self::Negative => write!(f, "fraction is negative"),
            Self::Reducible { gcd } => {
                write!(f, "fraction is reducible (common factor {gcd})")
            }
        }
    }
}

impl std::error::Error for NotEnumerated {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    /// The input does not consist of exactly two tokens separated by `/`.
    TokenCount { input: String, found: usize },
    NotAnInteger { token: String, source: ParseIntError },
    NegativeIndex(i64),
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::TokenCount { input, found } => write!(
                f,
                "expected a fraction of the form n/d, found {found} token(s) in '{input}'"
            ),
            Self::NotAnInteger { token, source } => {
                write!(f, "'{token}' is not an integer: {source}")
            }
            Self::NegativeIndex(k) => write!(f, "sequence index {k} is negative"),
        }
    }
}

impl std::error::Error for InvalidArgument {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotAnInteger { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result of looking up a fraction given as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Invalid(InvalidArgument),
    NotEnumerated(NotEnumerated),
}

impl Display for Rejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(e) => write!(f, "invalid argument: {e}"),
            Self::NotEnumerated(e) => write!(f, "not enumerated: {e}"),
        }
    }
}

impl std::error::Error for Rejection {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(e) => Some(e),
            Self::NotEnumerated(e) => Some(e),
        }
    }
}

impl From<InvalidArgument> for Rejection {
    fn from(e: InvalidArgument) -> Self {
        Self::Invalid(e)
    }
}

impl From<NotEnumerated> for Rejection {
    fn from(e: NotEnumerated) -> Self {
        Self::NotEnumerated(e)
    }
}
