use serde::{Serialize, Deserialize};

/// Dense row-major weight storage. The initializers in `crate::init` write
/// into a caller-owned `Matrix` through the `WeightMatrix` trait; nothing in
/// this module draws random numbers or knows about initialization schemes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data[0].len(),
            data
        }
    }

    /// Reshapes to `rows x cols`, zeroing all elements. Existing contents are
    /// discarded; initializers overwrite every element anyway.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        if self.rows != rows || self.cols != cols {
            self.rows = rows;
            self.cols = cols;
            self.data = vec![vec![0.0; cols]; rows];
        } else {
            for row in &mut self.data {
                for value in row.iter_mut() {
                    *value = 0.0;
                }
            }
        }
    }

    /// Euclidean norm of the matrix flattened into a vector:
    /// sqrt of the sum of squares of all elements.
    pub fn frobenius_norm(&self) -> f64 {
        self.data
            .iter()
            .flatten()
            .map(|value| value * value)
            .sum::<f64>()
            .sqrt()
    }

    /// Multiplies every element in place by `factor`.
    pub fn scale(&mut self, factor: f64) {
        for row in &mut self.data {
            for value in row.iter_mut() {
                *value *= factor;
            }
        }
    }

    /// Serializes the matrix to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a matrix from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<Matrix> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_has_requested_shape() {
        let m = Matrix::zeros(3, 4);
        assert_eq!(m.rows, 3);
        assert_eq!(m.cols, 4);
        assert_eq!(m.data.len(), 3);
        assert!(m.data.iter().all(|row| row.len() == 4));
        assert!(m.data.iter().flatten().all(|&v| v == 0.0));
    }

    #[test]
    fn resize_reshapes_and_zeroes() {
        let mut m = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        m.resize(3, 1);
        assert_eq!(m.rows, 3);
        assert_eq!(m.cols, 1);
        assert!(m.data.iter().flatten().all(|&v| v == 0.0));

        // Same shape still clears contents.
        let mut m = Matrix::from_data(vec![vec![5.0], vec![6.0]]);
        m.resize(2, 1);
        assert!(m.data.iter().flatten().all(|&v| v == 0.0));
    }

    #[test]
    fn frobenius_norm_of_known_matrix() {
        // 3-4-5 triangle spread over a matrix: sqrt(9 + 16) = 5.
        let m = Matrix::from_data(vec![vec![3.0, 0.0], vec![0.0, -4.0]]);
        assert!((m.frobenius_norm() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn scale_multiplies_every_element() {
        let mut m = Matrix::from_data(vec![vec![1.0, -2.0], vec![0.5, 4.0]]);
        m.scale(2.0);
        assert_eq!(m.data, vec![vec![2.0, -4.0], vec![1.0, 8.0]]);
    }

    #[test]
    fn save_and_load_json() {
        let m = Matrix::from_data(vec![vec![0.25, -0.75], vec![1.5, 0.0]]);
        let path = std::env::temp_dir().join("seedling_nn_matrix_test.json");
        let path = path.to_str().unwrap();
        m.save_json(path).unwrap();
        let loaded = Matrix::load_json(path).unwrap();
        assert_eq!(loaded, m);
        std::fs::remove_file(path).unwrap();
    }
}
