use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Defines how eigenvalues (and the associated eigenvectors) are ordered
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum EigenOrdering {
    /// Keeps the order produced by the solver (given by the branch of the cubic)
    Unsorted,

    /// Sorts from the smallest to the largest eigenvalue
    Ascending,

    /// Sorts from the largest to the smallest eigenvalue
    Descending,
}

impl fmt::Display for EigenOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EigenOrdering::Unsorted => write!(f, "unsorted"),
            EigenOrdering::Ascending => write!(f, "ascending"),
            EigenOrdering::Descending => write!(f, "descending"),
        }
    }
}

impl FromStr for EigenOrdering {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unsorted" => Ok(EigenOrdering::Unsorted),
            "ascending" => Ok(EigenOrdering::Ascending),
            "descending" => Ok(EigenOrdering::Descending),
            _ => Err("ordering must be unsorted, ascending or descending"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
