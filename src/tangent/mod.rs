//! Implements the conversions between the conventions of the finite strain tangent operator
//!
//! Finite strain behaviours naturally produce one form of the consistent tangent operator
//! (e.g., the spatial moduli or ∂S/∂E) while a solver expects another one (e.g., ∂σ/∂F or
//! the Abaqus moduli). [TangentOperator::convert] relates all supported forms by closed-form
//! identities evaluated at a given deformation and stress state.

mod converter;
mod identities;
mod kind;
mod kinematics;
mod neo_hookean;
pub use crate::tangent::converter::*;
pub use crate::tangent::identities::*;
pub use crate::tangent::kind::*;
pub use crate::tangent::neo_hookean::*;
