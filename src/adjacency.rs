use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("row {row} has {len} entries, expected {expected}")]
    NotSquare { row: usize, len: usize, expected: usize },
    #[error("entry ({row}, {col}) is {value}, expected 0 or 1")]
    NotBinary { row: usize, col: usize, value: u8 },
}

/// Square binary adjacency matrix over vertices `0..order`.
///
/// Entry (i, j) is 1 iff the arc i -> j exists, with capacity exactly 1.
#[derive(Default, PartialEq, Eq, Debug, Clone)]
pub struct AdjacencyMatrix {
    order: usize,
    entries: Vec<u8>,
}

impl AdjacencyMatrix {
    pub fn new(order: usize) -> Self {
        AdjacencyMatrix { order, entries: vec![0; order * order] }
    }

    /// Builds a matrix from its rows, rejecting non-square or non-binary input.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, MatrixError> {
        let order = rows.len();
        let mut matrix = AdjacencyMatrix::new(order);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != order {
                return Err(MatrixError::NotSquare { row: i, len: row.len(), expected: order });
            }
            for (j, &value) in row.iter().enumerate() {
                match value {
                    0 => {}
                    1 => matrix.add_arc(i, j),
                    _ => return Err(MatrixError::NotBinary { row: i, col: j, value }),
                }
            }
        }
        Ok(matrix)
    }

    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    #[inline]
    pub fn has_arc(&self, from: usize, to: usize) -> bool {
        self.entries[from * self.order + to] == 1
    }

    pub fn add_arc(&mut self, from: usize, to: usize) {
        self.entries[from * self.order + to] = 1;
    }

    pub fn remove_arc(&mut self, from: usize, to: usize) {
        self.entries[from * self.order + to] = 0;
    }

    /// Nonzero columns of row `u`.
    pub fn successors(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.order).filter(move |&v| self.has_arc(u, v))
    }

    /// Nonzero rows of column `u`.
    pub fn predecessors(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.order).filter(move |&v| self.has_arc(v, u))
    }

    /// All arcs in row-major order.
    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.order).flat_map(move |u| self.successors(u).map(move |v| (u, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn rejects_non_square_rows() {
        let rows = vec![vec![0, 1], vec![0]];
        assert_eq!(
            AdjacencyMatrix::from_rows(&rows),
            Err(MatrixError::NotSquare { row: 1, len: 1, expected: 2 })
        );
    }

    #[test]
    fn rejects_non_binary_entries() {
        let rows = vec![vec![0, 2], vec![0, 0]];
        assert_eq!(
            AdjacencyMatrix::from_rows(&rows),
            Err(MatrixError::NotBinary { row: 0, col: 1, value: 2 })
        );
    }

    #[rstest]
    #[case(0, vec![1, 2])]
    #[case(1, vec![])]
    #[case(2, vec![0])]
    fn successors_follow_rows(#[case] u: usize, #[case] expected: Vec<usize>) {
        let rows = vec![vec![0, 1, 1], vec![0, 0, 0], vec![1, 0, 0]];
        let g = AdjacencyMatrix::from_rows(&rows).unwrap();
        assert_eq!(g.successors(u).collect::<Vec<_>>(), expected);
    }

    #[rstest]
    #[case(0, vec![2])]
    #[case(1, vec![0])]
    #[case(2, vec![0])]
    fn predecessors_follow_columns(#[case] u: usize, #[case] expected: Vec<usize>) {
        let rows = vec![vec![0, 1, 1], vec![0, 0, 0], vec![1, 0, 0]];
        let g = AdjacencyMatrix::from_rows(&rows).unwrap();
        assert_eq!(g.predecessors(u).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn arcs_enumerate_nonzero_entries() {
        let rows = vec![vec![0, 1, 1], vec![0, 0, 0], vec![1, 0, 0]];
        let g = AdjacencyMatrix::from_rows(&rows).unwrap();
        assert_eq!(g.arcs().collect::<Vec<_>>(), vec![(0, 1), (0, 2), (2, 0)]);
    }
}
