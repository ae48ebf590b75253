//! Implements the fixed-size tensor containers and the linear maps between them

#[macro_use]
mod linear_ops;

mod index_maps;
mod interop;
mod matrix3;
mod operators;
mod stensor;
mod tensor;
pub use crate::algebra::index_maps::*;
pub use crate::algebra::matrix3::*;
pub use crate::algebra::operators::*;
pub use crate::algebra::stensor::*;
pub use crate::algebra::tensor::*;
