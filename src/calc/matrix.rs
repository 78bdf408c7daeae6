//! Sample covariance
//!
//! Rows are variables and columns are observations, normalized by
//! `observations - 1`. The N x 2 sample matrix is passed in as-is, so the
//! result is N x N: one variable per point, with its x and y values as the
//! two observations.

use nalgebra::DMatrix;

use super::error::CalcError;

#[allow(clippy::cast_precision_loss)]
pub fn covariance(m: &DMatrix<f64>) -> Result<DMatrix<f64>, CalcError> {
    if m.nrows() == 0 {
        return Err(CalcError::EmptySample);
    }
    let observations = m.ncols();
    if observations < 2 {
        return Err(CalcError::Degenerate { observations });
    }

    // Row sum divided by the observation count, so an overflowing sum stays inf
    let means = m.column_sum() / observations as f64;
    let mut centered = m.clone();
    for mut column in centered.column_iter_mut() {
        column -= &means;
    }

    let scale = 1.0 / (observations - 1) as f64;
    let cov = (&centered * centered.transpose()) * scale;

    if cov.iter().any(|v| !v.is_finite()) {
        return Err(CalcError::NonFinite);
    }
    Ok(cov)
}

/// Row-major nesting, ready for JSON.
pub fn to_rows(m: &DMatrix<f64>) -> Vec<Vec<f64>> {
    m.row_iter()
        .map(|row| row.iter().copied().collect())
        .collect()
}
