use log::debug;

use crate::{RelationMatrix, closure::is_transitive};

/// Largest `n` such that every relation on `n` elements has a `u64` code.
pub const MAX_CODE_ELEMENTS: usize = 7;

/// Decode the relation whose row-major entries are the binary digits of
/// `num`, left-padded with zeros to `n * n` digits. The most significant
/// digit is the entry `(0, 0)` and the least significant is
/// `(n - 1, n - 1)`.
///
/// # Panics
///
/// If `n` is larger than [`MAX_CODE_ELEMENTS`] or `num` has more than
/// `n * n` binary digits.
#[must_use]
pub fn matrix_from_int(num: u64, n: usize) -> RelationMatrix {
    assert!(n <= MAX_CODE_ELEMENTS, "relation on {} elements does not fit in a u64", n);
    let bits = n * n;
    assert!(num >> bits == 0, "{} has more than {} binary digits", num, bits);
    let elements = (0..bits).map(|index| (num >> (bits - 1 - index)) & 1 == 1).collect();
    RelationMatrix::from_vec(elements, n)
}

/// Count the transitive relations on `n` elements by checking every one of
/// the `2^(n * n)` relations. This takes a long time for `n >= 5`.
///
/// # Panics
///
/// If `n` is larger than [`MAX_CODE_ELEMENTS`].
pub fn count_transitive_relations(n: usize) -> u64 {
    assert!(n <= MAX_CODE_ELEMENTS, "relation on {} elements does not fit in a u64", n);
    let total: u64 = 1 << (n * n);
    debug!("checking {} relations on {} elements", total, n);
    let mut count = 0;
    for num in 0..total {
        if is_transitive(&matrix_from_int(num, n)) {
            count += 1;
        }
    }
    debug!("found {} transitive relations on {} elements", count, n);
    count
}
