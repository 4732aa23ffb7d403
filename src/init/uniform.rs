use rand::prelude::*;
use serde::{Serialize, Deserialize};

use crate::init::{Fill, InitError, WeightMatrix};

/// Fills a weight matrix with independent draws from a uniform distribution
/// on `[lower_bound, upper_bound]`.
///
/// The bounds are fixed at construction and validated there; a filler can be
/// reused across any number of matrices. Each call draws from a fresh
/// thread-local generator, so concurrent fills on different threads use
/// independent generator state.
///
/// Deserialization funnels through the checked constructor, so a persisted
/// config with an invalid interval fails to load instead of producing a
/// filler that cannot fill.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawBounds")]
pub struct UniformRandom {
    lower_bound: f64,
    upper_bound: f64,
}

/// Unvalidated mirror of `UniformRandom` that serde deserializes into.
#[derive(Deserialize)]
struct RawBounds {
    lower_bound: f64,
    upper_bound: f64,
}

impl TryFrom<RawBounds> for UniformRandom {
    type Error = InitError;

    fn try_from(raw: RawBounds) -> Result<UniformRandom, InitError> {
        UniformRandom::new(raw.lower_bound, raw.upper_bound)
    }
}

impl UniformRandom {
    /// Creates a filler over `[lower_bound, upper_bound]`.
    /// Fails with `InitError::InvalidBounds` unless both bounds are finite
    /// and `lower_bound <= upper_bound`.
    pub fn new(lower_bound: f64, upper_bound: f64) -> Result<UniformRandom, InitError> {
        if !lower_bound.is_finite() || !upper_bound.is_finite() || lower_bound > upper_bound {
            return Err(InitError::InvalidBounds {
                lower: lower_bound,
                upper: upper_bound,
            });
        }
        Ok(UniformRandom { lower_bound, upper_bound })
    }

    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }
}

impl Default for UniformRandom {
    /// The conventional interval for Nguyen-Widrow seeding: `[-0.5, 0.5]`.
    fn default() -> Self {
        UniformRandom { lower_bound: -0.5, upper_bound: 0.5 }
    }
}

impl Fill for UniformRandom {
    fn fill<M: WeightMatrix>(
        &self,
        matrix: &mut M,
        rows: usize,
        cols: usize,
    ) -> Result<(), InitError> {
        if rows == 0 || cols == 0 {
            return Err(InitError::InvalidShape { rows, cols });
        }

        let mut rng = rand::thread_rng();
        matrix.resize(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                matrix.set(i, j, rng.gen_range(self.lower_bound..=self.upper_bound));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::matrix::Matrix;

    #[test]
    fn rejects_empty_interval_at_construction() {
        let err = UniformRandom::new(0.5, -0.5).unwrap_err();
        assert_eq!(err, InitError::InvalidBounds { lower: 0.5, upper: -0.5 });
    }

    #[test]
    fn rejects_non_finite_bounds_at_construction() {
        assert!(UniformRandom::new(f64::NAN, 0.0).is_err());
        assert!(UniformRandom::new(0.0, f64::NAN).is_err());
        assert!(UniformRandom::new(f64::NEG_INFINITY, 0.0).is_err());
        assert!(UniformRandom::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn deserialization_validates_the_interval() {
        // An inverted interval must fail to load, not produce a filler that
        // panics on its first fill.
        let inverted = r#"{"lower_bound": 0.5, "upper_bound": -0.5}"#;
        assert!(serde_json::from_str::<UniformRandom>(inverted).is_err());

        let valid = r#"{"lower_bound": -0.25, "upper_bound": 0.1}"#;
        let filler: UniformRandom = serde_json::from_str(valid).unwrap();
        assert_eq!(filler.lower_bound(), -0.25);
        assert_eq!(filler.upper_bound(), 0.1);
    }

    #[test]
    fn rejects_zero_dimensions() {
        let filler = UniformRandom::default();
        let mut w = Matrix::default();
        assert_eq!(
            filler.fill(&mut w, 0, 3),
            Err(InitError::InvalidShape { rows: 0, cols: 3 })
        );
        assert_eq!(
            filler.fill(&mut w, 3, 0),
            Err(InitError::InvalidShape { rows: 3, cols: 0 })
        );
    }

    #[test]
    fn fill_produces_requested_shape() {
        let filler = UniformRandom::default();
        let mut w = Matrix::default();
        filler.fill(&mut w, 5, 7).unwrap();
        assert_eq!(w.rows, 5);
        assert_eq!(w.cols, 7);
    }

    #[test]
    fn every_element_lies_within_bounds() {
        let filler = UniformRandom::new(-0.25, 0.1).unwrap();
        let mut w = Matrix::default();
        filler.fill(&mut w, 20, 30).unwrap();
        assert!(w
            .data
            .iter()
            .flatten()
            .all(|&v| (-0.25..=0.1).contains(&v)));
    }

    #[test]
    fn collapsed_bounds_fill_with_the_single_value() {
        let filler = UniformRandom::new(0.3, 0.3).unwrap();
        let mut w = Matrix::default();
        filler.fill(&mut w, 2, 2).unwrap();
        assert!(w.data.iter().flatten().all(|&v| v == 0.3));
    }
}
