//! Covariance calculation module
//!
//! Turns a request body of `(x,y)` tokens into a covariance matrix.
//! Pure and request-scoped: nothing here touches I/O or shared state.

mod error;
pub mod matrix;
pub mod parse;
pub mod sample;

pub use error::CalcError;
pub use sample::SampleMatrix;

/// Outcome of one calculation
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    /// Row-major covariance matrix
    pub covariance: Vec<Vec<f64>>,
    /// Coordinates that made it into the sample
    pub samples: usize,
    /// Coordinates dropped by numeric coercion
    pub dropped: usize,
}

/// Run the full pipeline over a decoded body.
///
/// A token without a pair fails the request; a pair that is not numeric is
/// only left out of the sample.
pub fn calculate(body: &str) -> Result<Calculation, CalcError> {
    let coordinates = parse::parse_coordinates(body)?;
    let sample = SampleMatrix::from_coordinates(&coordinates);
    let cov = matrix::covariance(sample.as_matrix())?;

    Ok(Calculation {
        covariance: matrix::to_rows(&cov),
        samples: sample.rows(),
        dropped: sample.dropped(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_three_points() {
        let result = calculate("(1,2) (3,4) (5,6)").unwrap();
        assert_eq!(result.covariance, vec![vec![0.5; 3]; 3]);
        assert_eq!(result.samples, 3);
        assert_eq!(result.dropped, 0);
    }

    #[test]
    fn test_non_numeric_pair_is_filtered_not_fatal() {
        let result = calculate("(1,2) (a,b)").unwrap();
        assert_eq!(result.covariance, vec![vec![0.5]]);
        assert_eq!(result.samples, 1);
        assert_eq!(result.dropped, 1);
    }

    #[test]
    fn test_pattern_failure_is_fatal() {
        assert!(matches!(
            calculate("(1,2) abc"),
            Err(CalcError::Pattern { .. })
        ));
    }

    #[test]
    fn test_zero_valid_rows() {
        assert_eq!(calculate("(a,b) (c,d)"), Err(CalcError::EmptySample));
    }

    #[test]
    fn test_whitespace_only_body() {
        assert_eq!(calculate(" \n "), Err(CalcError::EmptySample));
    }

    #[test]
    fn test_unit_separator_splits_tokens() {
        let result = calculate("(1,2)\x1f(3,4)").unwrap();
        assert_eq!(result.covariance, vec![vec![0.5; 2]; 2]);
    }

    #[test]
    fn test_idempotent() {
        let body = "(1.5,-2) (3,4.25)\n(0,10) (x,1)";
        assert_eq!(calculate(body), calculate(body));
    }
}
