use crate::error::{Error, Result};
use crate::{Matrix, Vector};
use ndarray::ArrayView1;

/// A row-major numeric table with named columns. Read-only once built:
/// baselines and the sweep only ever look at it, never mutate it.
#[derive(Clone, Debug)]
pub struct FeatureTable {
    column_names: Vec<String>,
    values: Matrix,
}

impl FeatureTable {
    pub fn new(column_names: Vec<String>, values: Matrix) -> Result<Self> {
        if column_names.len() != values.ncols() {
            return Err(Error::DimensionMismatch {
                expected: values.ncols(),
                actual: column_names.len(),
            });
        }
        Ok(Self {
            column_names,
            values,
        })
    }

    /// Convenience constructor for string-literal column names.
    pub fn from_named(column_names: &[&str], values: Matrix) -> Result<Self> {
        Self::new(
            column_names.iter().map(|s| s.to_string()).collect(),
            values,
        )
    }

    pub fn n_rows(&self) -> usize {
        self.values.nrows()
    }

    pub fn n_cols(&self) -> usize {
        self.values.ncols()
    }

    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// View of a single column by name.
    pub fn column(&self, name: &str) -> Result<ArrayView1<'_, f64>> {
        let idx = self
            .column_names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| Error::MissingColumn(name.to_string()))?;
        Ok(self.values.column(idx))
    }

    pub fn values(&self) -> &Matrix {
        &self.values
    }

    /// Validates that a target vector lines up with this table's rows.
    pub fn check_targets(&self, y: &Vector) -> Result<()> {
        if self.n_rows() != y.len() {
            return Err(Error::DimensionMismatch {
                expected: self.n_rows(),
                actual: y.len(),
            });
        }
        Ok(())
    }
}
