//! Implements numeric constants, enumerations and the solver settings

mod constants;
mod enums;
mod settings;
pub use crate::base::constants::*;
pub use crate::base::enums::*;
pub use crate::base::settings::*;
