pub mod error;
pub mod nguyen_widrow;
pub mod uniform;

pub use error::InitError;
pub use nguyen_widrow::NguyenWidrow;
pub use uniform::UniformRandom;

use crate::math::matrix::Matrix;

/// Capability set an initializer needs from caller-supplied weight storage.
///
/// `frobenius_norm` and `scale` have default implementations in terms of
/// element access, so an alternative backing (e.g. sparse) only has to
/// provide the storage primitives. Dense storage should override both with
/// direct traversals.
pub trait WeightMatrix {
    /// Reshapes the storage to `rows x cols`; prior contents need not survive.
    fn resize(&mut self, rows: usize, cols: usize);

    fn rows(&self) -> usize;

    fn cols(&self) -> usize;

    fn get(&self, row: usize, col: usize) -> f64;

    fn set(&mut self, row: usize, col: usize, value: f64);

    /// Euclidean norm of the matrix flattened into a vector.
    fn frobenius_norm(&self) -> f64 {
        let mut sum = 0.0;
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                let value = self.get(i, j);
                sum += value * value;
            }
        }
        sum.sqrt()
    }

    /// Multiplies every element in place by `factor`.
    fn scale(&mut self, factor: f64) {
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                self.set(i, j, self.get(i, j) * factor);
            }
        }
    }
}

/// A weight-fill strategy. `NguyenWidrow` composes over this seam, so tests
/// can substitute a deterministic filler for the random one.
pub trait Fill {
    /// Resizes `matrix` to `rows x cols` and writes every element.
    fn fill<M: WeightMatrix>(
        &self,
        matrix: &mut M,
        rows: usize,
        cols: usize,
    ) -> Result<(), InitError>;
}

impl WeightMatrix for Matrix {
    fn resize(&mut self, rows: usize, cols: usize) {
        Matrix::resize(self, rows, cols);
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }

    fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row][col] = value;
    }

    fn frobenius_norm(&self) -> f64 {
        Matrix::frobenius_norm(self)
    }

    fn scale(&mut self, factor: f64) {
        Matrix::scale(self, factor);
    }
}
