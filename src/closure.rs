//! Closures of a relation under reflexivity, symmetry and transitivity.
//!
//! Every function here takes the relation by reference and returns a new
//! matrix, the input is never modified.

use crate::RelationMatrix;

/// The smallest reflexive relation containing `matrix`.
#[must_use]
pub fn reflexive_closure(matrix: &RelationMatrix) -> RelationMatrix {
    let mut closure = matrix.clone();
    for i in 0..closure.dim() {
        closure[(i, i)] = true;
    }
    closure
}

/// The smallest symmetric relation containing `matrix`.
#[must_use]
pub fn symmetric_closure(matrix: &RelationMatrix) -> RelationMatrix {
    let mut closure = matrix.clone();
    for i in 0..closure.dim() {
        for j in 0..closure.dim() {
            if closure[(i, j)] {
                closure[(j, i)] = true;
            }
        }
    }
    closure
}

/// The smallest transitive relation containing `matrix`, using Warshall's
/// algorithm.
///
/// After iteration `k` of the outer loop, `(i, j)` is set if there is a path
/// from `i` to `j` whose intermediate elements are all at most `k`, so `k`
/// has to be the outermost loop.
#[must_use]
pub fn transitive_closure(matrix: &RelationMatrix) -> RelationMatrix {
    let mut closure = matrix.clone();
    let n = closure.dim();
    for k in 0..n {
        for i in 0..n {
            if !closure[(i, k)] {
                continue;
            }
            for j in 0..n {
                if closure[(k, j)] {
                    closure[(i, j)] = true;
                }
            }
        }
    }
    closure
}

/// The smallest equivalence relation containing `matrix`.
#[must_use]
pub fn equivalence_closure(matrix: &RelationMatrix) -> RelationMatrix {
    transitive_closure(&symmetric_closure(&reflexive_closure(matrix)))
}

pub fn is_reflexive(matrix: &RelationMatrix) -> bool {
    *matrix == reflexive_closure(matrix)
}

pub fn is_symmetric(matrix: &RelationMatrix) -> bool {
    *matrix == symmetric_closure(matrix)
}

/// Returns `true` if the transitive closure of `matrix` adds nothing to it.
pub fn is_transitive(matrix: &RelationMatrix) -> bool {
    *matrix == transitive_closure(matrix)
}
