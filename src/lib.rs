//! Binary relations on small finite sets, stored as square boolean matrices.
//!
//! The crate computes reflexive, symmetric and transitive closures, finds
//! equivalence classes, reads and writes relations as text files, and counts
//! transitive relations by brute force.
//!
//! Example usage:
//! ```
//! use relations::{transitive_closure, is_transitive, RelationMatrix};
//!
//! let chain: RelationMatrix = "010\n001\n000\n".parse().unwrap();
//! assert!(!is_transitive(&chain));
//!
//! let closure = transitive_closure(&chain);
//! assert_eq!(closure.to_string(), "011\n001\n000\n");
//! assert!(is_transitive(&closure));
//! ```
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod closure;
pub mod counting;
pub mod equivalence;
pub mod error;
pub mod formats;
mod matrix;

pub use closure::{
    equivalence_closure, is_reflexive, is_symmetric, is_transitive, reflexive_closure,
    symmetric_closure, transitive_closure,
};
pub use counting::{count_transitive_relations, matrix_from_int};
pub use equivalence::{Property, equivalence_classes};
pub use error::{Error, ParseError};
pub use formats::{read_matrix, write_matrix};
pub use matrix::RelationMatrix;
