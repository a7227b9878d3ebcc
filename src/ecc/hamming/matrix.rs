use super::bits::{BitVector, DisplayBits};
use super::params::CodeParameters;
use bitvec::prelude::*;
use log::debug;
use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The `m x n` parity-check matrix of a Hamming code.
///
/// Row `i` is the parity check for bit weight `2^i`; column `j` is the `m`-bit
/// binary representation of the codeword position `j + 1`. Every nonzero
/// `m`-bit pattern therefore appears as exactly one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParityCheckMatrix {
    params: CodeParameters,
    /// Row-major bits, `rows[i][j]` set iff bit `i` of `j + 1` is set
    rows: Vec<BitVector>,
}

impl ParityCheckMatrix {
    /// Builds the matrix for the given code dimensions.
    pub fn new(params: CodeParameters) -> Self {
        let m = params.parity_bits();
        let n = params.length();

        #[cfg(feature = "parallel")]
        let rows: Vec<BitVector> = (0..m).into_par_iter().map(|i| build_row(i, n)).collect();
        #[cfg(not(feature = "parallel"))]
        let rows: Vec<BitVector> = (0..m).map(|i| build_row(i, n)).collect();

        debug!("built {}x{} parity-check matrix", m, n);

        ParityCheckMatrix { params, rows }
    }

    pub fn parameters(&self) -> CodeParameters {
        self.params
    }

    /// Number of rows (`m`)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (`n`)
    pub fn column_count(&self) -> usize {
        self.params.length()
    }

    pub fn rows(&self) -> &[BitVector] {
        &self.rows
    }

    pub fn row(&self, i: usize) -> Option<&BitSlice<u8, Lsb0>> {
        self.rows.get(i).map(|row| row.as_bitslice())
    }

    /// Whether parity check `i` covers column `j`
    pub fn get(&self, i: usize, j: usize) -> Option<bool> {
        self.rows.get(i).and_then(|row| row.get(j).map(|bit| *bit))
    }

    /// The `m` bits of column `j`, row 0 first
    pub fn column(&self, j: usize) -> Option<BitVector> {
        if j >= self.column_count() {
            return None;
        }
        Some(self.rows.iter().map(|row| row[j]).collect())
    }

    /// Finds the column whose bits equal `pattern` by scanning every column.
    ///
    /// Returns the 0-indexed column. `Syndrome::value` gives the same answer
    /// directly; this scan is kept to cross-check it.
    pub fn find_column(&self, pattern: &BitSlice<u8, Lsb0>) -> Option<usize> {
        if pattern.len() != self.row_count() {
            return None;
        }
        (0..self.column_count()).find(|&j| {
            self.rows
                .iter()
                .zip(pattern.iter().by_vals())
                .all(|(row, bit)| row[j] == bit)
        })
    }
}

fn build_row(i: usize, n: usize) -> BitVector {
    let weight = 1usize << i;
    (0..n).map(|j| ((j + 1) & weight) != 0).collect()
}

impl fmt::Display for ParityCheckMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            writeln!(f, "P{}: {}", i + 1, DisplayBits(row))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn matrix(m: usize) -> ParityCheckMatrix {
        ParityCheckMatrix::new(CodeParameters::new(m).unwrap())
    }

    #[test]
    fn test_matrix_7_4() {
        let h = matrix(3);
        assert_eq!(h.row_count(), 3);
        assert_eq!(h.column_count(), 7);
        assert_eq!(h.rows()[0], bitvec![u8, Lsb0; 1, 0, 1, 0, 1, 0, 1]);
        assert_eq!(h.rows()[1], bitvec![u8, Lsb0; 0, 1, 1, 0, 0, 1, 1]);
        assert_eq!(h.rows()[2], bitvec![u8, Lsb0; 0, 0, 0, 1, 1, 1, 1]);
    }

    #[test]
    fn test_columns_are_binary_positions() {
        for m in 2..=6 {
            let h = matrix(m);
            assert_eq!(h.row_count(), m);
            assert_eq!(h.column_count(), (1 << m) - 1);

            let mut seen = HashSet::new();
            for j in 0..h.column_count() {
                let column = h.column(j).unwrap();
                let value = column
                    .iter_ones()
                    .fold(0usize, |value, row| value | (1 << row));
                assert_eq!(value, j + 1);
                assert!(column.any());
                assert!(seen.insert(value));
            }
        }
    }

    #[test]
    fn test_matrix_degenerate() {
        let h = matrix(1);
        assert_eq!(h.row_count(), 1);
        assert_eq!(h.column_count(), 1);
        assert_eq!(h.get(0, 0), Some(true));
        assert_eq!(h.get(0, 1), None);
        assert_eq!(h.get(1, 0), None);
    }

    #[test]
    fn test_find_column() {
        let h = matrix(4);
        for j in 0..h.column_count() {
            let column = h.column(j).unwrap();
            assert_eq!(h.find_column(&column), Some(j));
        }
        assert_eq!(h.find_column(bits![u8, Lsb0; 0, 0, 0, 0]), None);
        assert_eq!(h.find_column(bits![u8, Lsb0; 1, 0]), None);
        assert!(h.column(15).is_none());
    }

    #[test]
    fn test_matrix_display() {
        let h = matrix(2);
        assert_eq!(h.to_string(), "P1: [1 0 1]\nP2: [0 1 1]\n");
    }
}
