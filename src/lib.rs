//! Mechtensor: eigen decomposition of symmetric tensors and finite strain tangent operators
//!
//! This crate implements:
//!
//! * a closed-form solver of cubic equations with optional Newton polishing ([cubic])
//! * the eigen decomposition of symmetric second-order tensors in 1D, 2D and 3D ([eigen])
//! * the conversions between the conventions of the consistent tangent operator of finite
//!   strain behaviours ([tangent])
//!
//! The tensors are stored as fixed-size arrays with a compile-time space dimension ([algebra]).
//!
//! # Example
//!
//! ```
//! use mechtensor::prelude::*;
//!
//! let s = Stensor::<3>::new([1.0, 2.0, 3.0, 0.0, 0.0, 0.0]);
//! let mut settings = Settings::new();
//! settings.set_ordering(EigenOrdering::Ascending).unwrap();
//! let res = s.eigen_decompose(true, &settings);
//! assert!((res.values[0] - 1.0).abs() < 1e-14);
//! assert!((res.values[2] - 3.0).abs() < 1e-14);
//! ```

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod algebra;
pub mod base;
pub mod cubic;
pub mod eigen;
pub mod prelude;
pub mod tangent;
