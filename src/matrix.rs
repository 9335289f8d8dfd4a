use std::ops::{Index, IndexMut};

use rand::{
    Rng,
    distr::{Bernoulli, Distribution, StandardUniform},
};

/// A binary relation on the set `{0, .., dim - 1}`, stored as a square
/// adjacency matrix. `self[(i, j)]` is `true` if and only if `i` is related to
/// `j`.
#[derive(Debug, PartialEq, Eq, Default, Hash)]
pub struct RelationMatrix {
    dim: usize,
    // Row-major, `elements[i * dim + j]` is the entry `(i, j)`
    elements: Vec<bool>,
}

impl Clone for RelationMatrix {
    fn clone(&self) -> Self {
        Self { dim: self.dim, elements: self.elements.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.dim = source.dim;
        self.elements.clone_from(&source.elements);
    }
}

impl RelationMatrix {
    /// The empty relation on `dim` elements.
    #[must_use]
    pub fn new(dim: usize) -> Self {
        let size = dim.checked_mul(dim).expect("relation matrix size overflows");
        Self { dim, elements: vec![false; size] }
    }

    /// The identity relation on `dim` elements.
    #[must_use]
    pub fn identity(dim: usize) -> Self {
        let mut matrix = Self::new(dim);
        for i in 0..dim {
            matrix[(i, i)] = true;
        }
        matrix
    }

    /// Create a matrix from row-major `elements`.
    ///
    /// # Panics
    ///
    /// If `elements` does not contain exactly `dim * dim` entries.
    pub fn from_vec(elements: Vec<bool>, dim: usize) -> Self {
        assert!(dim * dim == elements.len());
        Self { dim, elements }
    }

    /// Create a matrix from a list of rows.
    ///
    /// # Panics
    ///
    /// If the rows do not form a square.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Self {
        let dim = rows.len();
        let mut elements = Vec::with_capacity(dim * dim);
        for row in rows {
            let row = row.as_ref();
            assert!(row.len() == dim, "relation matrix must be square");
            elements.extend_from_slice(row);
        }
        Self { dim, elements }
    }

    /// Sample a relation where every pair is related with probability `p`,
    /// where 0.0 <= `p` <= 1.0
    pub fn bernoulli<R: Rng>(rng: &mut R, dim: usize, p: f64) -> Self {
        let dist = Bernoulli::new(p).unwrap();
        let elements = dist.sample_iter(rng).take(dim * dim).collect();
        Self { dim, elements }
    }

    /// Sample a relation uniformly among all `2^(dim * dim)` relations.
    pub fn random<R: Rng>(rng: &mut R, dim: usize) -> Self {
        let elements = rng.sample_iter(StandardUniform).take(dim * dim).collect();
        Self { dim, elements }
    }

    /// Number of elements of the underlying set.
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.dim == 0
    }

    pub fn row(&self, i: usize) -> &[bool] {
        assert!(i < self.dim);
        &self.elements[i * self.dim..(i + 1) * self.dim]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        // `chunks_exact` panics on a zero chunk size
        self.elements.chunks_exact(self.dim.max(1))
    }

    /// Iterate over every related pair `(i, j)`, in row-major order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let dim = self.dim;
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, related)| **related)
            .map(move |(index, _)| (index / dim, index % dim))
    }
}

impl Index<(usize, usize)> for RelationMatrix {
    type Output = bool;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        debug_assert!(i < self.dim && j < self.dim);
        &self.elements[i * self.dim + j]
    }
}

impl IndexMut<(usize, usize)> for RelationMatrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        debug_assert!(i < self.dim && j < self.dim);
        &mut self.elements[i * self.dim + j]
    }
}
