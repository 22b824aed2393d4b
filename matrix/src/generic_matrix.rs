use crate::traits::Numberish;
use serde::{Deserialize, Serialize};

/// The main Structure in this library
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SerializedMatrix<T>")]
pub struct GenericMatrix<T: Numberish> {
    pub(crate) ncols: usize,
    pub(crate) nrows: usize,

    // Contains the data ordered by row,
    // Going left to right, and up and down.
    pub(crate) data: Vec<T>,
}

/// A matrix as read from a file, before checking that its
/// size matches its data
#[derive(Deserialize)]
struct SerializedMatrix<T> {
    ncols: usize,
    nrows: usize,
    data: Vec<T>,
}

impl<T: Numberish> TryFrom<SerializedMatrix<T>> for GenericMatrix<T> {
    type Error = String;

    fn try_from(value: SerializedMatrix<T>) -> Result<Self, Self::Error> {
        let SerializedMatrix { ncols, nrows, data } = value;
        if nrows * ncols != data.len() {
            return Err(format!(
                "A matrix of {} rows and {} columns needs {} elements, found {}",
                nrows,
                ncols,
                nrows * ncols,
                data.len()
            ));
        }
        Ok(Self { ncols, nrows, data })
    }
}

impl<T: Numberish> std::fmt::Display for GenericMatrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            write!(f, "\n\t")?;
            for v in row {
                write!(f, "{}, ", v)?;
            }
        }
        Ok(())
    }
}

impl<T: Numberish> GenericMatrix<T> {
    /// Creates a `GenericMatrix` from a vector containing the elements of the matrix
    ///
    /// # Panics
    /// Panics if `data.len() != nrows * ncols`
    #[must_use]
    pub fn from_data(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            nrows * ncols,
            data.len(),
            "A matrix of {} rows and {} columns needs {} elements",
            nrows,
            ncols,
            nrows * ncols
        );
        Self { nrows, ncols, data }
    }

    /// Creates a `GenericMatrix` of `nrows` and `ncols` full of values `v`
    #[must_use]
    pub fn new(v: T, nrows: usize, ncols: usize) -> Self {
        GenericMatrix {
            nrows,
            ncols,
            data: vec![v; nrows * ncols],
        }
    }

    /// Creates a `GenericMatrix` of `nrows` and `ncols` full of zeroes
    #[must_use]
    pub fn zeroes(nrows: usize, ncols: usize) -> Self {
        Self::new(T::zero(), nrows, ncols)
    }

    /// Creates an Identity matrix of size NxN
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut ret = Self::zeroes(n, n);
        for i in 0..n {
            ret.data[i * (n + 1)] = T::one();
        }
        ret
    }

    /// Creates an empty Matrix (i.e., size 0x0)
    #[must_use]
    pub fn empty() -> Self {
        GenericMatrix {
            nrows: 0,
            ncols: 0,
            data: Vec::with_capacity(0),
        }
    }

    /// Checks whether a Matrix has Zero columns and Zero rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nrows == 0 && self.ncols == 0
    }

    /// Returns a tuple with number of rows and columns    
    pub fn size(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Gets the index of an element within the `data` array of the Matrix
    pub(crate) fn index(&self, nrow: usize, ncol: usize) -> usize {
        self.ncols * nrow + ncol
    }

    /// Gets an element from the matrix    
    pub fn get(&self, nrow: usize, ncol: usize) -> Result<T, String> {
        if nrow < self.nrows && ncol < self.ncols {
            let i: usize = self.index(nrow, ncol);
            Ok(self.data[i])
        } else {
            Err(format!(
                "Row or Column out of bounds: ({},{}) in a {} by {} matrix",
                nrow, ncol, self.nrows, self.ncols
            ))
        }
    }

    /// Sets an element into the matrix    
    pub fn set(&mut self, nrow: usize, ncol: usize, v: T) -> Result<T, String> {
        if nrow < self.nrows && ncol < self.ncols {
            let i: usize = self.index(nrow, ncol);
            self.data[i] = v;
            Ok(v)
        } else {
            Err(format!(
                "Row or Column out of bounds: ({},{}) in a {} by {} matrix",
                nrow, ncol, self.nrows, self.ncols
            ))
        }
    }

    /// Adds `v` to the element in position `nrow,ncol`.
    pub fn add_to_element(&mut self, nrow: usize, ncol: usize, v: T) -> Result<(), String> {
        if nrow < self.nrows && ncol < self.ncols {
            let i: usize = self.index(nrow, ncol);
            self.data[i] += v;
            Ok(())
        } else {
            Err("Row or Column out of bounds.".to_string())
        }
    }

    /// Borrows row `nrow` as a slice
    ///
    /// # Panics
    /// Panics if the row does not exist
    pub fn row(&self, nrow: usize) -> &[T] {
        assert!(
            nrow < self.nrows,
            "Row {} out of bounds in a matrix with {} rows",
            nrow,
            self.nrows
        );
        let ini = self.index(nrow, 0);
        &self.data[ini..ini + self.ncols]
    }

    /// Mutably borrows row `nrow` as a slice
    ///
    /// # Panics
    /// Panics if the row does not exist
    pub fn row_mut(&mut self, nrow: usize) -> &mut [T] {
        assert!(
            nrow < self.nrows,
            "Row {} out of bounds in a matrix with {} rows",
            nrow,
            self.nrows
        );
        let ini = self.index(nrow, 0);
        let ncols = self.ncols;
        &mut self.data[ini..ini + ncols]
    }

    /// Iterates over the rows of the matrix
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks() panics with a size of zero
        let n = self.ncols.max(1);
        self.data.chunks(n).take(self.nrows)
    }

    /// Builds a new matrix keeping only the columns in `cols`, in
    /// the given order
    pub fn select_columns(&self, cols: &[usize]) -> Result<Self, String> {
        let mut data = Vec::with_capacity(self.nrows * cols.len());
        for r in 0..self.nrows {
            for &c in cols {
                data.push(self.get(r, c)?);
            }
        }
        Ok(Self::from_data(self.nrows, cols.len(), data))
    }

    /// Divides all the elements in row `nrow` by `s`
    pub fn div_row(&mut self, nrow: usize, s: T) -> Result<(), String> {
        if nrow >= self.nrows {
            return Err(format!(
                "Row {} out of bounds in a matrix with {} rows",
                nrow, self.nrows
            ));
        }
        self.row_mut(nrow).iter_mut().for_each(|v| *v /= s);
        Ok(())
    }

    /// Borrows the underlying data, row by row
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use crate::{Float, GenericMatrix, Matrix};

    #[test]
    fn test_serde() -> Result<(), String> {
        let m = Matrix::from_data(2, 2, vec![1., 2., 3., 4.]);
        let json = serde_json::to_string(&m).map_err(|e| e.to_string())?;

        let m2: Matrix = serde_json::from_str(&json).map_err(|e| e.to_string())?;
        assert_eq!(m, m2);

        Ok(())
    }

    #[test]
    fn test_serde_inconsistent_size() {
        let json = r#"{"ncols": 3, "nrows": 2, "data": [1.0, 2.0]}"#;
        let e = serde_json::from_str::<Matrix>(json).unwrap_err();
        assert!(e.to_string().contains("needs 6 elements, found 2"), "{}", e);

        let json = r#"{"ncols": 8760, "nrows": 7, "data": []}"#;
        assert!(serde_json::from_str::<Matrix>(json).is_err());

        let json = r#"{"ncols": 0, "nrows": 0, "data": []}"#;
        let m: Matrix = serde_json::from_str(json).unwrap();
        assert!(m.is_empty());
    }

    #[test]
    fn test_default() {
        let m = Matrix::default();

        assert_eq!(m.ncols, 0);
        assert_eq!(m.nrows, 0);
        assert_eq!(m.data.len(), 0);
        assert!(m.is_empty());
        assert!(Matrix::empty().is_empty());
    }

    #[test]
    fn test_display() {
        let t = Matrix::eye(2);
        assert_eq!(format!("{}", t), "\n\t1, 0, \n\t0, 1, ");
    }

    #[test]
    #[should_panic]
    fn test_from_data_fail() {
        let data = vec![0.; 2];
        let _ = GenericMatrix::from_data(1, 1, data);
    }

    #[test]
    fn test_new() {
        let nrows: usize = 3;
        let ncols: usize = 12;
        let a_val: Float = 2.0;

        let a = Matrix::new(a_val, nrows, ncols);

        assert_eq!(a.size(), (nrows, ncols));
        assert!(a.data.iter().all(|v| *v == a_val));

        let z = Matrix::zeroes(nrows, ncols);
        assert!(z.data.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_get_set() -> Result<(), String> {
        let mut a = Matrix::zeroes(3, 4);
        a.set(2, 3, 9.)?;
        assert_eq!(a.get(2, 3)?, 9.);
        a.add_to_element(2, 3, 1.)?;
        assert_eq!(a.get(2, 3)?, 10.);

        assert!(a.get(3, 0).is_err());
        assert!(a.get(0, 4).is_err());
        assert!(a.set(3, 0, 1.).is_err());
        assert!(a.add_to_element(0, 4, 1.).is_err());
        Ok(())
    }

    #[test]
    fn test_rows() -> Result<(), String> {
        let mut a = Matrix::from_data(2, 3, vec![1., 2., 3., 4., 5., 6.]);
        assert_eq!(a.row(1), &[4., 5., 6.]);
        a.row_mut(0)[1] = 20.;
        assert_eq!(a.get(0, 1)?, 20.);

        let rows: Vec<&[Float]> = a.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &[1., 20., 3.]);

        a.div_row(1, 2.)?;
        assert_eq!(a.row(1), &[2., 2.5, 3.]);
        assert!(a.div_row(2, 2.).is_err());

        // Zero columns
        let z = Matrix::zeroes(3, 0);
        assert_eq!(z.rows().count(), 0);
        Ok(())
    }

    #[test]
    fn test_select_columns() -> Result<(), String> {
        let a = Matrix::from_data(2, 3, vec![1., 2., 3., 4., 5., 6.]);
        let b = a.select_columns(&[2, 0])?;
        assert_eq!(b.size(), (2, 2));
        assert_eq!(b.as_slice(), &[3., 1., 6., 4.]);

        assert!(a.select_columns(&[3]).is_err());
        Ok(())
    }
}
