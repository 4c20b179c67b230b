//! Regularized linear regression models.
//!
//! Three penalized least-squares regressors sharing the same surface:
//! builder-style configuration, `fit`, `predict` and an R² `score`.
//!
//! ```rust
//! use tabeval::Ridge;
//! use ndarray::array;
//!
//! let x = array![[1.0], [2.0], [3.0], [4.0]];
//! let y = array![2.0, 4.0, 6.0, 8.0];
//!
//! let mut model = Ridge::new().alpha(0.1);
//! model.fit(&x, &y).unwrap();
//! let predictions = model.predict(&x).unwrap();
//! ```

mod elastic_net;
mod lasso;
mod ridge;

pub use elastic_net::ElasticNet;
pub use lasso::Lasso;
pub use ridge::Ridge;

use crate::error::{Error, Result};
use crate::{Matrix, Vector};

pub(crate) fn check_fit_inputs(x: &Matrix, y: &Vector) -> Result<()> {
    if x.nrows() != y.len() {
        return Err(Error::DimensionMismatch {
            expected: x.nrows(),
            actual: y.len(),
        });
    }
    if x.nrows() == 0 {
        return Err(Error::InvalidParameter(
            "X must have at least one sample".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn check_predict_inputs(x: &Matrix, coeffs: &Vector) -> Result<()> {
    if x.ncols() != coeffs.len() {
        return Err(Error::DimensionMismatch {
            expected: coeffs.len(),
            actual: x.ncols(),
        });
    }
    Ok(())
}

/// Centers x and y so the intercept can be recovered after solving on the
/// centered system.
pub(crate) fn center(x: &Matrix, y: &Vector) -> (Matrix, Vector, Vector, f64) {
    let y_mean = y.mean().unwrap_or(0.0);
    let x_means = x
        .mean_axis(ndarray::Axis(0))
        .unwrap_or_else(|| Vector::zeros(x.ncols()));

    let mut x_centered = x.clone();
    for mut row in x_centered.axis_iter_mut(ndarray::Axis(0)) {
        row -= &x_means;
    }
    let y_centered = y - y_mean;

    (x_centered, y_centered, x_means, y_mean)
}

pub(crate) fn soft_threshold(z: f64, gamma: f64) -> f64 {
    if z > gamma {
        z - gamma
    } else if z < -gamma {
        z + gamma
    } else {
        0.0
    }
}
