use crate::error::{Error, Result};
use crate::linear_model::{center, check_fit_inputs, check_predict_inputs, soft_threshold};
use crate::{Matrix, Vector};

/// Combined L1/L2-penalized least squares, fit by cyclic coordinate descent.
///
/// `l1_ratio` blends the two penalties: 1.0 behaves like [`Lasso`],
/// 0.0 like [`Ridge`].
///
/// [`Lasso`]: crate::linear_model::Lasso
/// [`Ridge`]: crate::linear_model::Ridge
#[derive(Clone, Debug)]
pub struct ElasticNet {
    pub coefficients: Option<Vector>,
    pub intercept: Option<f64>,
    alpha: f64,
    l1_ratio: f64,
    fit_intercept: bool,
    max_iter: usize,
    tolerance: f64,
}

impl ElasticNet {
    pub fn new() -> Self {
        Self {
            coefficients: None,
            intercept: None,
            alpha: 1.0,
            l1_ratio: 0.5,
            fit_intercept: true,
            max_iter: 1000,
            tolerance: 1e-4,
        }
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        if alpha < 0.0 {
            panic!("alpha must be non-negative, got {}", alpha);
        }
        self.alpha = alpha;
        self
    }

    pub fn l1_ratio(mut self, l1_ratio: f64) -> Self {
        if !(0.0..=1.0).contains(&l1_ratio) {
            panic!("l1_ratio must be between 0 and 1, got {}", l1_ratio);
        }
        self.l1_ratio = l1_ratio;
        self
    }

    pub fn fit_intercept(mut self, fit_intercept: bool) -> Self {
        self.fit_intercept = fit_intercept;
        self
    }

    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn l1_penalty(&self) -> f64 {
        self.alpha * self.l1_ratio
    }

    pub fn l2_penalty(&self) -> f64 {
        self.alpha * (1.0 - self.l1_ratio)
    }

    pub fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<()> {
        check_fit_inputs(x, y)?;

        let (coeffs, intercept) = if self.fit_intercept {
            let (x_centered, y_centered, x_means, y_mean) = center(x, y);
            let coeffs = self.coordinate_descent(&x_centered, &y_centered);
            let intercept = y_mean - coeffs.dot(&x_means);
            (coeffs, intercept)
        } else {
            (self.coordinate_descent(x, y), 0.0)
        };

        self.coefficients = Some(coeffs);
        self.intercept = Some(intercept);
        Ok(())
    }

    pub fn predict(&self, x: &Matrix) -> Result<Vector> {
        let coeffs = self.coefficients.as_ref().ok_or(Error::NotFitted)?;
        check_predict_inputs(x, coeffs)?;

        let intercept = self.intercept.unwrap_or(0.0);
        Ok(x.dot(coeffs) + intercept)
    }

    pub fn score(&self, x: &Matrix, y: &Vector) -> Result<f64> {
        let y_pred = self.predict(x)?;
        crate::metrics::r2_score(y, &y_pred)
    }

    fn coordinate_descent(&self, x: &Matrix, y: &Vector) -> Vector {
        let n_samples = x.nrows() as f64;
        let n_features = x.ncols();
        let mut beta = Vector::zeros(n_features);

        // residual = y - X * beta, kept current across coordinate updates
        let mut residual = y.clone();

        let col_norms: Vec<f64> = (0..n_features)
            .map(|j| x.column(j).dot(&x.column(j)))
            .collect();

        let l1 = self.l1_penalty();
        let l2 = self.l2_penalty();

        for _ in 0..self.max_iter {
            let mut max_delta = 0.0_f64;

            for j in 0..n_features {
                if col_norms[j] < 1e-10 {
                    continue;
                }

                let xj = x.column(j);
                let z = xj.dot(&residual) / n_samples + beta[j] * col_norms[j] / n_samples;
                let new_beta = soft_threshold(z, l1) / (col_norms[j] / n_samples + l2);

                let delta = new_beta - beta[j];
                if delta != 0.0 {
                    residual.scaled_add(-delta, &xj);
                    beta[j] = new_beta;
                    max_delta = max_delta.max(delta.abs());
                }
            }

            if max_delta < self.tolerance {
                break;
            }
        }

        beta
    }
}

impl Default for ElasticNet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_elastic_net_simple() {
        let x = array![[1.0], [2.0], [3.0], [4.0]];
        let y = array![2.0, 4.0, 6.0, 8.0];

        let mut model = ElasticNet::new().alpha(0.01).l1_ratio(0.5);
        model.fit(&x, &y).unwrap();

        let score = model.score(&x, &y).unwrap();
        assert!(score > 0.8);
    }

    #[test]
    fn test_elastic_net_l1_ratio_extremes() {
        let x = array![[1.0], [2.0], [3.0], [4.0]];
        let y = array![2.0, 4.0, 6.0, 8.0];

        let mut lasso_like = ElasticNet::new().alpha(0.01).l1_ratio(1.0);
        lasso_like.fit(&x, &y).unwrap();

        let mut ridge_like = ElasticNet::new().alpha(0.01).l1_ratio(0.0);
        ridge_like.fit(&x, &y).unwrap();

        assert!(lasso_like.score(&x, &y).unwrap() > 0.5);
        assert!(ridge_like.score(&x, &y).unwrap() > 0.5);
    }

    #[test]
    fn test_elastic_net_sparsity() {
        let x = array![
            [1.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [3.0, 0.0, 0.0],
            [4.0, 0.0, 0.0]
        ];
        let y = array![2.0, 4.0, 6.0, 8.0];

        let mut model = ElasticNet::new().alpha(0.1).l1_ratio(0.8);
        model.fit(&x, &y).unwrap();

        let coeffs = model.coefficients.as_ref().unwrap();
        assert!(coeffs[0].abs() > 0.1);
        assert!(coeffs[1].abs() < 0.1);
        assert!(coeffs[2].abs() < 0.1);
    }

    #[test]
    fn test_elastic_net_penalty_split() {
        let model = ElasticNet::new().alpha(1.0).l1_ratio(0.7);

        assert!((model.l1_penalty() - 0.7).abs() < 1e-10);
        assert!((model.l2_penalty() - 0.3).abs() < 1e-10);
    }

    #[test]
    fn test_elastic_net_without_intercept() {
        let x = array![[1.0], [2.0], [3.0], [4.0]];
        let y = array![2.0, 4.0, 6.0, 8.0];

        let mut model = ElasticNet::new()
            .alpha(0.01)
            .l1_ratio(0.5)
            .fit_intercept(false);
        model.fit(&x, &y).unwrap();

        assert_eq!(model.intercept.unwrap(), 0.0);
        let coeffs = model.coefficients.as_ref().unwrap();
        assert!((coeffs[0] - 2.0).abs() < 0.2);
    }

    #[test]
    fn test_elastic_net_invalid_parameters() {
        std::panic::catch_unwind(|| {
            ElasticNet::new().alpha(-1.0);
        })
        .expect_err("Should panic on negative alpha");

        std::panic::catch_unwind(|| {
            ElasticNet::new().l1_ratio(1.1);
        })
        .expect_err("Should panic on l1_ratio > 1");
    }

    #[test]
    fn test_elastic_net_predict_without_fit() {
        let x = array![[1.0], [2.0]];
        let model = ElasticNet::new();

        assert_eq!(model.predict(&x).unwrap_err(), Error::NotFitted);
    }

    #[test]
    fn test_elastic_net_dimension_mismatch() {
        let x = array![[1.0], [2.0]];
        let y = array![1.0, 2.0, 3.0];

        let mut model = ElasticNet::new();
        assert!(matches!(
            model.fit(&x, &y),
            Err(Error::DimensionMismatch { .. })
        ));
    }
}
