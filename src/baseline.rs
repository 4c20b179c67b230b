//! Baseline classifiers that never learn anything.
//!
//! Both exist to demonstrate the accuracy paradox: on a skewed binary
//! outcome, a classifier that reads a single column (or predicts a
//! constant) can score deceptively well without modeling anything.

use crate::error::Result;
use crate::frame::FeatureTable;
use crate::{Array1, Vector};

/// Minimal fit/predict capability shared by the baseline variants.
///
/// `Output` differs per variant: `SexThreshold` emits numeric 0/1 labels,
/// `AlwaysNegative` emits booleans.
pub trait Estimator {
    type Output;

    fn fit(&mut self, x: &FeatureTable, y: &Vector) -> Result<()>;

    fn predict(&self, x: &FeatureTable) -> Result<Array1<Self::Output>>;
}

/// Predicts 0 where the "Sex" column equals 1, and 1 otherwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct SexThreshold;

impl Estimator for SexThreshold {
    type Output = f64;

    // No learning step.
    fn fit(&mut self, _x: &FeatureTable, _y: &Vector) -> Result<()> {
        Ok(())
    }

    fn predict(&self, x: &FeatureTable) -> Result<Vector> {
        let sex = x.column("Sex")?;
        Ok(sex.mapv(|v| if v == 1.0 { 0.0 } else { 1.0 }))
    }
}

/// Predicts the negative class for every row, never inspecting a column.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysNegative;

impl Estimator for AlwaysNegative {
    type Output = bool;

    // No learning step.
    fn fit(&mut self, _x: &FeatureTable, _y: &Vector) -> Result<()> {
        Ok(())
    }

    fn predict(&self, x: &FeatureTable) -> Result<Array1<bool>> {
        Ok(Array1::from_elem(x.n_rows(), false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use ndarray::array;

    fn table_with_sex(values: &[f64]) -> FeatureTable {
        let n = values.len();
        let data = crate::Matrix::from_shape_vec((n, 1), values.to_vec()).unwrap();
        FeatureTable::from_named(&["Sex"], data).unwrap()
    }

    #[test]
    fn test_sex_threshold_flips_labels() {
        let table = table_with_sex(&[1.0, 0.0, 1.0, 1.0, 0.0]);
        let pred = SexThreshold.predict(&table).unwrap();
        assert_eq!(pred.to_vec(), vec![0.0, 1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_sex_threshold_length_matches_rows() {
        let table = table_with_sex(&[0.0, 0.0, 1.0]);
        assert_eq!(SexThreshold.predict(&table).unwrap().len(), 3);
    }

    #[test]
    fn test_sex_threshold_missing_column() {
        let table =
            FeatureTable::from_named(&["Age"], array![[22.0], [35.0]]).unwrap();
        assert_eq!(
            SexThreshold.predict(&table).unwrap_err(),
            Error::MissingColumn("Sex".to_string())
        );
    }

    #[test]
    fn test_always_negative_is_all_false() {
        let table =
            FeatureTable::from_named(&["a", "b"], array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]])
                .unwrap();
        let pred = AlwaysNegative.predict(&table).unwrap();
        assert_eq!(pred.to_vec(), vec![false, false, false]);
    }

    #[test]
    fn test_baselines_are_idempotent() {
        let table = table_with_sex(&[1.0, 0.0, 1.0]);
        let y = array![0.0, 1.0, 0.0];

        let mut model = SexThreshold;
        model.fit(&table, &y).unwrap();
        let first = model.predict(&table).unwrap();
        model.fit(&table, &y).unwrap();
        let second = model.predict(&table).unwrap();
        assert_eq!(first, second);

        let mut constant = AlwaysNegative;
        constant.fit(&table, &y).unwrap();
        let first = constant.predict(&table).unwrap();
        constant.fit(&table, &y).unwrap();
        let second = constant.predict(&table).unwrap();
        assert_eq!(first, second);
    }
}
