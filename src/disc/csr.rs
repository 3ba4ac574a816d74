use faer::Mat;
use faer_ext::IntoFaer;
use hashbrown::HashMap;
use ndarray::{Array1, Array2, ArrayView1};

use crate::error::{AssemblyError, Result};

/// Accumulates `(row, col) += value` contributions before compression.
pub struct CsrBuilder {
    nrows: usize,
    entries: HashMap<(usize, usize), f64>,
}
impl CsrBuilder {
    pub fn new(nrows: usize) -> Self {
        Self {
            nrows,
            entries: HashMap::new(),
        }
    }
    pub fn with_capacity(nrows: usize, capacity: usize) -> Self {
        Self {
            nrows,
            entries: HashMap::with_capacity(capacity),
        }
    }
    pub fn add(&mut self, row: usize, col: usize, value: f64) {
        debug_assert!(
            row < self.nrows && col < self.nrows,
            "entry ({row}, {col}) outside {n}x{n} matrix",
            n = self.nrows
        );
        *self.entries.entry((row, col)).or_insert(0.0) += value;
    }
    pub fn build(self) -> CsrMatrix {
        let mut entries: Vec<((usize, usize), f64)> = self.entries.into_iter().collect();
        entries.sort_unstable_by_key(|&(key, _)| key);
        let mut row_ptr = vec![0; self.nrows + 1];
        let mut col_idx = Vec::with_capacity(entries.len());
        let mut values = Vec::with_capacity(entries.len());
        for ((row, col), value) in entries {
            row_ptr[row + 1] += 1;
            col_idx.push(col);
            values.push(value);
        }
        for irow in 0..self.nrows {
            row_ptr[irow + 1] += row_ptr[irow];
        }
        CsrMatrix {
            nrows: self.nrows,
            row_ptr,
            col_idx,
            values,
        }
    }
}

/// Square compressed-sparse-row matrix. Entries never written read as zero.
#[derive(Clone, Debug, PartialEq)]
pub struct CsrMatrix {
    nrows: usize,
    row_ptr: Vec<usize>,
    col_idx: Vec<usize>,
    values: Vec<f64>,
}
impl CsrMatrix {
    pub fn nrows(&self) -> usize {
        self.nrows
    }
    pub fn ncols(&self) -> usize {
        self.nrows
    }
    pub fn nnz(&self) -> usize {
        self.values.len()
    }
    fn row_range(&self, row: usize) -> std::ops::Range<usize> {
        debug_assert!(
            row < self.nrows,
            "row {row} outside {n}x{n} matrix",
            n = self.nrows
        );
        self.row_ptr[row]..self.row_ptr[row + 1]
    }
    /// Stored `(col, value)` pairs of a row, sorted by column.
    ///
    /// # Panics
    ///
    /// If `row >= nrows`, like indexing an `ndarray` out of bounds.
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let range = self.row_range(row);
        self.col_idx[range.clone()]
            .iter()
            .copied()
            .zip(self.values[range].iter().copied())
    }
    /// Entry at `(row, col)`, zero when not stored.
    ///
    /// # Panics
    ///
    /// If `row >= nrows`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        let range = self.row_range(row);
        match self.col_idx[range.clone()].binary_search(&col) {
            Ok(offset) => self.values[range.start + offset],
            Err(_) => 0.0,
        }
    }
    pub fn diagonal(&self) -> Array1<f64> {
        Array1::from_shape_fn(self.nrows, |i| self.get(i, i))
    }
    pub fn mul_vec(&self, x: ArrayView1<f64>) -> Result<Array1<f64>> {
        AssemblyError::check_len("vector", self.nrows, x.len())?;
        Ok(Array1::from_shape_fn(self.nrows, |irow| {
            self.row(irow).map(|(icol, value)| value * x[icol]).sum()
        }))
    }
    pub fn to_dense(&self) -> Array2<f64> {
        let mut dense = Array2::<f64>::zeros((self.nrows, self.nrows));
        for irow in 0..self.nrows {
            for (icol, value) in self.row(irow) {
                dense[[irow, icol]] = value;
            }
        }
        dense
    }
    /// Dense copy for handing the system to a `faer` solver.
    pub fn to_faer(&self) -> Mat<f64> {
        self.to_dense().view().into_faer().to_owned()
    }
}
