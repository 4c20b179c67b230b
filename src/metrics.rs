use crate::error::{Error, Result};
use crate::Vector;

fn check_lengths(y_true: &Vector, y_pred: &Vector) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(Error::DimensionMismatch {
            expected: y_true.len(),
            actual: y_pred.len(),
        });
    }
    Ok(())
}

pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;
    if y_true.is_empty() {
        return Err(Error::InvalidParameter(
            "cannot score an empty prediction".to_string(),
        ));
    }

    let diff = y_true - y_pred;
    Ok(diff.mapv(|x| x * x).mean().unwrap_or(0.0))
}

pub fn root_mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    Ok(mean_squared_error(y_true, y_pred)?.sqrt())
}

pub fn r2_score(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let y_mean = y_true.mean().ok_or_else(|| {
        Error::InvalidParameter("cannot score an empty prediction".to_string())
    })?;
    let ss_res = (y_true - y_pred).mapv(|x| x * x).sum();
    let ss_tot = y_true.mapv(|x| (x - y_mean) * (x - y_mean)).sum();

    if ss_tot == 0.0 {
        return Ok(1.0); // Perfect prediction when variance is zero
    }

    Ok(1.0 - ss_res / ss_tot)
}

/// Fraction of exactly matching labels. For the baselines this is what makes
/// the accuracy paradox visible on skewed data.
pub fn accuracy_score(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;
    if y_true.is_empty() {
        return Err(Error::InvalidParameter(
            "cannot score an empty prediction".to_string(),
        ));
    }

    let hits = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t == p)
        .count();
    Ok(hits as f64 / y_true.len() as f64)
}
