use crate::error::{Error, Result};
use crate::linear_model::{center, check_fit_inputs, check_predict_inputs};
use crate::{Matrix, Vector};

/// L2-penalized least squares, solved in closed form via the regularized
/// normal equations.
#[derive(Clone, Debug)]
pub struct Ridge {
    pub coefficients: Option<Vector>,
    pub intercept: Option<f64>,
    alpha: f64,
    fit_intercept: bool,
}

impl Ridge {
    pub fn new() -> Self {
        Self {
            coefficients: None,
            intercept: None,
            alpha: 1.0,
            fit_intercept: true,
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

    pub fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<()> {
        check_fit_inputs(x, y)?;

        let (coeffs, intercept) = if self.fit_intercept {
            let (x_centered, y_centered, x_means, y_mean) = center(x, y);
            let coeffs = self.solve_normal_equations(&x_centered, &y_centered)?;
            let intercept = y_mean - coeffs.dot(&x_means);
            (coeffs, intercept)
        } else {
            (self.solve_normal_equations(x, y)?, 0.0)
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

    fn solve_normal_equations(&self, x: &Matrix, y: &Vector) -> Result<Vector> {
        let xt = x.t();
        let mut xtx = xt.dot(x);
        for i in 0..xtx.nrows() {
            xtx[(i, i)] += self.alpha;
        }
        let xty = xt.dot(y);

        gaussian_elimination(xtx, xty)
    }
}

impl Default for Ridge {
    fn default() -> Self {
        Self::new()
    }
}

/// Solves `a * x = b` in place with partial pivoting.
fn gaussian_elimination(mut a: Matrix, mut b: Vector) -> Result<Vector> {
    let n = a.nrows();

    for col in 0..n {
        let pivot = (col..n)
            .max_by(|&i, &j| {
                a[(i, col)]
                    .abs()
                    .partial_cmp(&a[(j, col)].abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or(col);

        if a[(pivot, col)].abs() < 1e-10 {
            return Err(Error::Singular);
        }

        if pivot != col {
            for j in 0..n {
                a.swap((col, j), (pivot, j));
            }
            b.swap(col, pivot);
        }

        for row in (col + 1)..n {
            let factor = a[(row, col)] / a[(col, col)];
            for j in col..n {
                a[(row, j)] -= factor * a[(col, j)];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = Vector::zeros(n);
    for i in (0..n).rev() {
        let mut sum = b[i];
        for j in (i + 1)..n {
            sum -= a[(i, j)] * x[j];
        }
        x[i] = sum / a[(i, i)];
    }

    Ok(x)
}
