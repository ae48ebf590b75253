//! Implements the closed-form solver of cubic polynomial equations

mod cubic_roots;
pub use crate::cubic::cubic_roots::*;
