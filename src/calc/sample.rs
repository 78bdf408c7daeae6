//! Numeric filtering and sample matrix assembly
//!
//! Coordinates whose components do not both coerce to numbers are dropped
//! without error. Survivors become the rows of an N x 2 matrix.

use nalgebra::DMatrix;

use super::parse::Coordinate;

/// A coordinate with both components coerced to floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidCoordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    /// `None` when either component is not a number.
    pub fn coerce(&self) -> Option<ValidCoordinate> {
        Some(ValidCoordinate {
            x: coerce_component(&self.x)?,
            y: coerce_component(&self.y)?,
        })
    }
}

/// NaN is treated like any other unparseable value.
fn coerce_component(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| !value.is_nan())
}

/// Row-per-point matrix of the valid coordinates, in encounter order.
#[derive(Debug, Clone)]
pub struct SampleMatrix {
    data: DMatrix<f64>,
    dropped: usize,
}

impl SampleMatrix {
    pub fn from_coordinates(coordinates: &[Coordinate]) -> Self {
        let valid: Vec<ValidCoordinate> = coordinates.iter().filter_map(Coordinate::coerce).collect();
        let data = DMatrix::from_row_iterator(
            valid.len(),
            2,
            valid.iter().flat_map(|c| [c.x, c.y]),
        );

        Self {
            data,
            dropped: coordinates.len() - valid.len(),
        }
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of coordinates rejected by numeric coercion.
    pub const fn dropped(&self) -> usize {
        self.dropped
    }

    pub const fn as_matrix(&self) -> &DMatrix<f64> {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_numeric_forms() {
        let c = Coordinate::new("-1.5", "2e3").coerce().unwrap();
        assert_eq!(c, ValidCoordinate { x: -1.5, y: 2000.0 });

        let c = Coordinate::new("+4", "0").coerce().unwrap();
        assert_eq!(c, ValidCoordinate { x: 4.0, y: 0.0 });
    }

    #[test]
    fn test_coerce_rejects_either_component() {
        assert!(Coordinate::new("a", "1").coerce().is_none());
        assert!(Coordinate::new("1", "b").coerce().is_none());
        assert!(Coordinate::new("", "").coerce().is_none());
        assert!(Coordinate::new("1,2", "3").coerce().is_none());
    }

    #[test]
    fn test_coerce_nan_is_dropped_inf_is_kept() {
        assert!(Coordinate::new("nan", "1").coerce().is_none());
        assert!(Coordinate::new("NaN", "1").coerce().is_none());
        let c = Coordinate::new("inf", "1").coerce().unwrap();
        assert!(c.x.is_infinite());
    }

    #[test]
    fn test_matrix_keeps_encounter_order() {
        let coords = vec![
            Coordinate::new("1", "2"),
            Coordinate::new("a", "b"),
            Coordinate::new("3", "4"),
        ];
        let sample = SampleMatrix::from_coordinates(&coords);

        assert_eq!(sample.rows(), 2);
        assert_eq!(sample.dropped(), 1);
        let m = sample.as_matrix();
        assert_eq!(m.ncols(), 2);
        assert_eq!((m[(0, 0)], m[(0, 1)]), (1.0, 2.0));
        assert_eq!((m[(1, 0)], m[(1, 1)]), (3.0, 4.0));
    }

    #[test]
    fn test_matrix_empty_when_nothing_coerces() {
        let coords = vec![Coordinate::new("a", "b"), Coordinate::new("c", "d")];
        let sample = SampleMatrix::from_coordinates(&coords);
        assert_eq!(sample.rows(), 0);
        assert_eq!(sample.dropped(), 2);
    }
}
