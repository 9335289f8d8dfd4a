use std::fmt;

use log::warn;

use crate::{
    RelationMatrix,
    closure::{is_reflexive, is_symmetric, is_transitive},
};

/// A property a relation needs to be an equivalence relation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    Reflexive,
    Symmetric,
    Transitive,
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Property::Reflexive => "reflexive",
            Property::Symmetric => "symmetric",
            Property::Transitive => "transitive",
        };
        f.write_str(name)
    }
}

/// Returns the first property, in the order reflexive, symmetric,
/// transitive, that `matrix` does not have.
pub fn first_violation(matrix: &RelationMatrix) -> Option<Property> {
    if !is_reflexive(matrix) {
        Some(Property::Reflexive)
    } else if !is_symmetric(matrix) {
        Some(Property::Symmetric)
    } else if !is_transitive(matrix) {
        Some(Property::Transitive)
    } else {
        None
    }
}

/// Split the elements into the equivalence classes of `matrix`.
///
/// Each class is sorted. Classes are listed in the order they are first seen,
/// going through the rows in order, and a row whose class is already listed
/// adds nothing. Returns the first violated property if `matrix` is not an
/// equivalence relation, see [`first_violation`].
pub fn equivalence_classes(matrix: &RelationMatrix) -> Result<Vec<Vec<usize>>, Property> {
    if let Some(property) = first_violation(matrix) {
        warn!("relation is not {}", property);
        return Err(property);
    }

    let mut classes: Vec<Vec<usize>> = Vec::new();
    for i in 0..matrix.dim() {
        let class: Vec<usize> = (0..matrix.dim()).filter(|&j| matrix[(i, j)]).collect();
        // Classes are built in ascending order, so equal sets are equal vectors
        if !classes.contains(&class) {
            classes.push(class);
        }
    }
    Ok(classes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::closure::equivalence_closure;

    fn from_ints(rows: &[&[u8]]) -> RelationMatrix {
        let rows: Vec<Vec<bool>> =
            rows.iter().map(|row| row.iter().map(|&x| x == 1).collect()).collect();
        RelationMatrix::from_rows(&rows)
    }

    #[test]
    fn two_classes() {
        let m = from_ints(&[&[1, 1, 0], &[1, 1, 0], &[0, 0, 1]]);
        assert_eq!(equivalence_classes(&m), Ok(vec![vec![0, 1], vec![2]]));
    }

    #[test]
    fn identity_singletons() {
        let m = RelationMatrix::identity(4);
        assert_eq!(equivalence_classes(&m), Ok(vec![vec![0], vec![1], vec![2], vec![3]]));
    }

    #[test]
    fn interleaved_classes() {
        let m = from_ints(&[&[1, 0, 1], &[0, 1, 0], &[1, 0, 1]]);
        assert_eq!(equivalence_classes(&m), Ok(vec![vec![0, 2], vec![1]]));
    }

    #[test]
    fn first_seen_order() {
        let m = from_ints(&[&[1, 0, 0, 1], &[0, 1, 1, 0], &[0, 1, 1, 0], &[1, 0, 0, 1]]);
        assert_eq!(equivalence_classes(&m), Ok(vec![vec![0, 3], vec![1, 2]]));
    }

    #[test]
    fn empty_set() {
        assert_eq!(equivalence_classes(&RelationMatrix::new(0)), Ok(Vec::new()));
    }

    #[test]
    fn not_reflexive_first() {
        // Violates all three properties
        let m = from_ints(&[&[0, 1, 0], &[0, 1, 1], &[0, 0, 1]]);
        assert_eq!(equivalence_classes(&m), Err(Property::Reflexive));
    }

    #[test]
    fn not_symmetric_before_transitive() {
        let m = from_ints(&[&[1, 1, 0], &[0, 1, 1], &[0, 0, 1]]);
        assert!(!is_transitive(&m));
        assert_eq!(equivalence_classes(&m), Err(Property::Symmetric));
    }

    #[test]
    fn not_transitive() {
        let m = from_ints(&[&[1, 1, 0], &[1, 1, 1], &[0, 1, 1]]);
        assert_eq!(equivalence_classes(&m), Err(Property::Transitive));
    }

    #[test]
    fn property_display() {
        assert_eq!(Property::Symmetric.to_string(), "symmetric");
    }

    #[quickcheck]
    fn classes_partition(m: RelationMatrix) -> bool {
        let e = equivalence_closure(&m);
        let classes = match equivalence_classes(&e) {
            Ok(classes) => classes,
            Err(_) => return false,
        };
        let mut seen = vec![false; e.dim()];
        for class in &classes {
            for &i in class {
                if seen[i] {
                    return false;
                }
                seen[i] = true;
                // Closed: everything related to `i` is in the same class
                if (0..e.dim()).any(|j| e[(i, j)] != class.contains(&j)) {
                    return false;
                }
            }
        }
        seen.into_iter().all(|x| x)
    }

    #[quickcheck]
    fn violation_matches_classes(m: RelationMatrix) -> bool {
        equivalence_classes(&m).is_err() == first_violation(&m).is_some()
    }
}
