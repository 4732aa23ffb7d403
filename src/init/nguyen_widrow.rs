use crate::init::{Fill, InitError, UniformRandom, WeightMatrix};

/// Nguyen-Widrow weight initialization (Nguyen & Widrow, IJCNN 1990).
///
/// Spreads the active regions of a layer's neurons roughly evenly over the
/// input space: the matrix is first filled uniformly at random, then rescaled
/// so its Frobenius norm equals `beta = 0.7 * cols^(1/rows)`, where `rows` is
/// the fan-in and `cols` the fan-out. The rescale is a single scalar
/// multiply, so every element keeps its sign and its magnitude relative to
/// the others; only the overall scale changes.
///
/// The filler is injected at construction. Production code uses the default
/// `UniformRandom`; tests substitute a fixed-value `Fill` to make the
/// scaling step deterministic.
#[derive(Debug, Clone, Default)]
pub struct NguyenWidrow<F = UniformRandom> {
    filler: F,
}

impl NguyenWidrow<UniformRandom> {
    /// Uses the conventional random interval `[-0.5, 0.5]`.
    pub fn new() -> NguyenWidrow<UniformRandom> {
        NguyenWidrow { filler: UniformRandom::default() }
    }

    /// Uses a custom random interval.
    /// Fails with `InitError::InvalidBounds` if the interval is empty.
    pub fn with_bounds(
        lower_bound: f64,
        upper_bound: f64,
    ) -> Result<NguyenWidrow<UniformRandom>, InitError> {
        Ok(NguyenWidrow { filler: UniformRandom::new(lower_bound, upper_bound)? })
    }
}

impl<F: Fill> NguyenWidrow<F> {
    /// Composes over an arbitrary fill strategy.
    pub fn with_filler(filler: F) -> NguyenWidrow<F> {
        NguyenWidrow { filler }
    }

    /// Initializes `matrix` to `rows x cols` Nguyen-Widrow weights, in place.
    ///
    /// `rows` is the fan-in (neurons in the previous layer), `cols` the
    /// fan-out (neurons in the next layer). With `rows == 1` the exponent is
    /// 1 and `beta = 0.7 * cols`; that is the formula's own behavior, not a
    /// special case.
    ///
    /// Fails with `InvalidShape` if either dimension is zero, and with
    /// `DegenerateNorm` if the fill produced an all-zero matrix (collapsed
    /// bounds), since the rescale would otherwise divide by zero.
    pub fn initialize<M: WeightMatrix>(
        &self,
        matrix: &mut M,
        rows: usize,
        cols: usize,
    ) -> Result<(), InitError> {
        if rows == 0 || cols == 0 {
            return Err(InitError::InvalidShape { rows, cols });
        }

        self.filler.fill(matrix, rows, cols)?;

        let beta = scale_factor(rows, cols);
        let norm = matrix.frobenius_norm();
        if norm == 0.0 {
            return Err(InitError::DegenerateNorm);
        }
        matrix.scale(beta / norm);

        Ok(())
    }
}

/// The target Frobenius norm `beta = 0.7 * cols^(1/rows)`.
///
/// Grows (toward an asymptote) with fan-out and shrinks with fan-in: neurons
/// with many inputs get smaller individual weights so their pre-activation
/// sums stay in the activation function's active region. Recomputed on every
/// call, never stored.
pub fn scale_factor(rows: usize, cols: usize) -> f64 {
    0.7 * (cols as f64).powf(1.0 / rows as f64)
}
