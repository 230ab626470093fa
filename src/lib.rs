//! Cantor's enumeration of the positive rationals.
//!
//! Walking the lattice of pairs `(n, d)` along its anti-diagonals and skipping every reducible
//! pair lists each positive rational exactly once. Numbering that list from 1, and giving 0 the
//! number 0, yields a bijection between the naturals and the non-negative rationals:
//!
//! ```
//! assert_eq!(cantor::fraction_at(5).to_string(), "3/1");
//! assert_eq!(cantor::fraction_to_sequence(3, 1), Ok(5));
//! assert_eq!(cantor::index_of_str("6 / 9"), None);
//! ```
//!
//! The free functions re-run the walk on every call. [`Enumerator`] caches checkpoints for
//! workloads with many lookups.
#![allow(clippy::many_single_char_names)]
#![warn(clippy::default_trait_access)]
#![warn(clippy::if_not_else)]
#![warn(clippy::needless_continue)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::explicit_into_iter_loop)]

pub mod checkpoint;
pub mod enumeration;
pub mod error;
pub mod fraction;
pub mod lattice;
pub mod report;
pub mod utils;

pub use checkpoint::Enumerator;
pub use enumeration::{
    fraction_at, fraction_to_sequence, index_of_str, rationals, sequence_of, sequence_to_fraction,
};
pub use error::{InvalidArgument, NotEnumerated, Rejection};
pub use fraction::{Fraction, Ratio};
pub use lattice::{LatticePoint, TraversalState, Walk};
