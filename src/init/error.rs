use thiserror::Error;

/// Failures an initialization call can report. All variants are synchronous
/// and local to the call; on error the matrix contents are unspecified and
/// should not be used.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InitError {
    /// A dimension was zero. Zero fan-in would also make the Nguyen-Widrow
    /// exponent `1/rows` undefined, so shapes are rejected before any
    /// computation.
    #[error("invalid weight shape {rows}x{cols}: both dimensions must be at least 1")]
    InvalidShape { rows: usize, cols: usize },

    /// The configured interval is not usable: `lower > upper`, or a bound is
    /// NaN or infinite. Reported at construction, never deferred to the
    /// first fill.
    #[error("invalid bounds [{lower}, {upper}]: bounds must be finite with lower <= upper")]
    InvalidBounds { lower: f64, upper: f64 },

    /// The random fill produced an all-zero matrix (only possible when the
    /// bounds collapse to zero), so rescaling to the target norm would divide
    /// by zero. Reported instead of propagating NaN.
    #[error("matrix has zero norm after random fill; cannot rescale")]
    DegenerateNorm,
}
