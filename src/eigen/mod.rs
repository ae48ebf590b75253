//! Implements the eigen solver of symmetric second-order tensors
//!
//! 1D tensors are diagonal; 2D tensors use the closed-form quadratic solution; 3D tensors
//! use the characteristic cubic and a minor-based construction of the eigenvectors.

mod decomposition;
mod eigen_1d_2d;
mod eigen_3d;
mod isotropic;
mod verify;
pub use crate::eigen::decomposition::*;
pub(crate) use crate::eigen::eigen_1d_2d::*;
pub(crate) use crate::eigen::eigen_3d::*;
pub use crate::eigen::verify::*;
