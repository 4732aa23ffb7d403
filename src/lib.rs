pub mod math;
pub mod init;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use init::{Fill, InitError, WeightMatrix};
pub use init::nguyen_widrow::{scale_factor, NguyenWidrow};
pub use init::uniform::UniformRandom;
