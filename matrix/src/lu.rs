use crate::{Float, Matrix};

/// The [LU decomposition](https://en.wikipedia.org/wiki/LU_decomposition) of a
/// squared matrix, with partial pivoting: $`PA = LU`$.
///
/// Both $`L`$ (unit diagonal, not stored) and $`U`$ are kept in the same
/// matrix.
#[derive(Debug, Clone)]
pub struct LuDecomposition {
    /// Lower and upper triangles
    lu: Matrix,

    /// `permutation[i]` is the row of the original matrix that
    /// ended up in row `i`
    permutation: Vec<usize>,

    /// `1` if an even number of row swaps were made, `-1` otherwise
    sign: Float,

    /// Did we find a column with no possible pivot?
    singular: bool,
}

impl LuDecomposition {
    /// The determinant of the decomposed matrix; i.e., the product of the
    /// diagonal of $`U`$ times the parity of the permutation.
    ///
    /// The determinant of a 0x0 matrix is 1.
    pub fn determinant(&self) -> Float {
        if self.singular {
            return 0.0;
        }
        let n = self.lu.nrows;
        (0..n).fold(self.sign, |acc, i| acc * self.lu.data[self.lu.index(i, i)])
    }

    /// Checks whether a zero pivot was found while decomposing
    pub fn is_singular(&self) -> bool {
        self.singular
    }

    /// The row permutation applied to the original matrix
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }
}

impl Matrix {
    /// Decomposes a squared matrix into $`PA=LU`$, choosing the largest
    /// available pivot on each column.
    ///
    /// A column whose candidate pivots are all exactly zero marks the matrix
    /// as singular; that is not an error.
    pub fn lu_decomposition(&self) -> Result<LuDecomposition, String> {
        if self.nrows != self.ncols {
            return Err(format!(
                "LU decomposition only works for squared matrices... found {} by {}",
                self.nrows, self.ncols
            ));
        }
        let n = self.nrows;
        let mut lu = self.clone();
        let mut permutation: Vec<usize> = (0..n).collect();
        let mut sign = 1.0;
        let mut singular = false;

        for c in 0..n {
            // Find the pivot
            let mut pivot_row = c;
            let mut max = lu.data[lu.index(c, c)].abs();
            for r in (c + 1)..n {
                let v = lu.data[lu.index(r, c)].abs();
                if v > max {
                    max = v;
                    pivot_row = r;
                }
            }
            if max == 0.0 {
                singular = true;
                continue;
            }

            if pivot_row != c {
                for k in 0..n {
                    let a = lu.index(c, k);
                    let b = lu.index(pivot_row, k);
                    lu.data.swap(a, b);
                }
                permutation.swap(c, pivot_row);
                sign = -sign;
            }

            // Eliminate below
            let pivot = lu.data[lu.index(c, c)];
            for r in (c + 1)..n {
                let i = lu.index(r, c);
                let factor = lu.data[i] / pivot;
                lu.data[i] = factor;
                if factor == 0.0 {
                    continue;
                }
                for k in (c + 1)..n {
                    let from = lu.data[lu.index(c, k)];
                    let into = lu.index(r, k);
                    lu.data[into] -= factor * from;
                }
            }
        }

        Ok(LuDecomposition {
            lu,
            permutation,
            sign,
            singular,
        })
    }

    /// Calculates the determinant of a squared matrix through its
    /// [`LuDecomposition`]
    pub fn determinant(&self) -> Result<Float, String> {
        Ok(self.lu_decomposition()?.determinant())
    }

    /// Calculates the rank of a matrix (of any shape) by reducing it into its
    /// row-echelon form with partial pivoting.
    ///
    /// Pivots whose absolute value is not larger than `tolerance` are considered
    /// to be zero.
    pub fn rank(&self, tolerance: Float) -> usize {
        let mut m = self.clone();
        let (nrows, ncols) = m.size();
        let mut rank = 0;
        for c in 0..ncols {
            if rank == nrows {
                break;
            }
            let mut pivot_row = rank;
            let mut max = m.data[m.index(rank, c)].abs();
            for r in (rank + 1)..nrows {
                let v = m.data[m.index(r, c)].abs();
                if v > max {
                    max = v;
                    pivot_row = r;
                }
            }
            if max <= tolerance {
                continue;
            }
            if pivot_row != rank {
                for k in 0..ncols {
                    let a = m.index(rank, k);
                    let b = m.index(pivot_row, k);
                    m.data.swap(a, b);
                }
            }
            let pivot = m.data[m.index(rank, c)];
            for r in (rank + 1)..nrows {
                let factor = m.data[m.index(r, c)] / pivot;
                if factor == 0.0 {
                    continue;
                }
                for k in c..ncols {
                    let from = m.data[m.index(rank, k)];
                    let into = m.index(r, k);
                    m.data[into] -= factor * from;
                }
            }
            rank += 1;
        }
        rank
    }
}
