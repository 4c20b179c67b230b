use crate::error::{Error, Result};
use crate::linear_model::{center, check_fit_inputs, check_predict_inputs, soft_threshold};
use crate::{Matrix, Vector};

/// L1-penalized least squares, fit by cyclic coordinate descent.
#[derive(Clone, Debug)]
pub struct Lasso {
    pub coefficients: Option<Vector>,
    pub intercept: Option<f64>,
    alpha: f64,
    fit_intercept: bool,
    max_iter: usize,
    tolerance: f64,
}

impl Lasso {
    pub fn new() -> Self {
        Self {
            coefficients: None,
            intercept: None,
            alpha: 1.0,
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

        for _ in 0..self.max_iter {
            let mut max_delta = 0.0_f64;

            for j in 0..n_features {
                if col_norms[j] < 1e-10 {
                    continue;
                }

                let xj = x.column(j);
                let z = xj.dot(&residual) / n_samples + beta[j] * col_norms[j] / n_samples;
                let new_beta = soft_threshold(z, self.alpha) / (col_norms[j] / n_samples);

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

impl Default for Lasso {
    fn default() -> Self {
        Self::new()
    }
}
