//! Makes available the structures needed to decompose tensors and convert tangent operators
//!
//! You may write `use mechtensor::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::algebra::{St2toSt2, Stensor, T2toSt2, T2toT2, Tensor};
pub use crate::base::{EigenOrdering, Settings};
pub use crate::cubic::CubicRoots;
pub use crate::eigen::{EigenDecomposition, SymmetricEigenSolver};
pub use crate::tangent::{ConversionState, NeoHookean, TangentOperator, TangentOperatorKind, TangentOperatorValue};
pub use crate::StrError;
