use super::{decompose_1d, decompose_2d, decompose_3d, verify_eigen_pairs};
use crate::algebra::Stensor;
use crate::base::{EigenOrdering, Settings, EIGEN_VERIFY_TOL};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::warn;

/// Holds the result of an eigen decomposition
///
/// The eigenvectors are the columns of `vectors`, i.e., `vectors[i][k]` is the i-th
/// component of the eigenvector associated with `values[k]`. In 1D and 2D, the tensor is
/// embedded in 3D space and the out-of-plane axis is an eigenvector.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct EigenDecomposition {
    /// The three eigenvalues
    pub values: [f64; 3],

    /// The orthonormal eigenvectors (columns); None if not requested or undefined
    pub vectors: Option<[[f64; 3]; 3]>,
}

/// Defines the eigen solver of a symmetric tensor in a given space dimension
pub trait SymmetricEigenSolver {
    /// Computes the eigenvalues and, if `want_vectors`, the eigenvectors
    ///
    /// Unless an ordering is requested in the settings, the eigenvalues keep the order
    /// given by the closed-form solution (they are not sorted).
    ///
    /// Eigenvalues are always valid; `vectors` is None if the eigenvector construction
    /// broke down (or if the verification requested by the settings failed).
    fn eigen_decompose(&self, want_vectors: bool, settings: &Settings) -> EigenDecomposition;
}

impl SymmetricEigenSolver for Stensor<1> {
    fn eigen_decompose(&self, want_vectors: bool, settings: &Settings) -> EigenDecomposition {
        finalize(self, decompose_1d(self, want_vectors), settings)
    }
}

impl SymmetricEigenSolver for Stensor<2> {
    fn eigen_decompose(&self, want_vectors: bool, settings: &Settings) -> EigenDecomposition {
        finalize(self, decompose_2d(self, want_vectors), settings)
    }
}

impl SymmetricEigenSolver for Stensor<3> {
    fn eigen_decompose(&self, want_vectors: bool, settings: &Settings) -> EigenDecomposition {
        finalize(self, decompose_3d(self, want_vectors, settings), settings)
    }
}

/// Applies the verification and the ordering requested by the settings
fn finalize<const N: usize>(s: &Stensor<N>, mut res: EigenDecomposition, settings: &Settings) -> EigenDecomposition {
    if settings.verify && res.vectors.is_some() && !verify_eigen_pairs(s, &res, EIGEN_VERIFY_TOL) {
        warn!(?s, values = ?res.values, "eigenpair verification failed");
        res.vectors = None;
    }
    res.sort(settings.ordering);
    res
}

impl EigenDecomposition {
    /// Returns the eigenvector (column) k
    pub fn eigen_vector(&self, k: usize) -> Option<[f64; 3]> {
        self.vectors.map(|v| [v[0][k], v[1][k], v[2][k]])
    }

    /// Sorts the eigenvalues (and the matching eigenvectors)
    pub fn sort(&mut self, ordering: EigenOrdering) {
        let mut perm = [0, 1, 2];
        let values = self.values;
        match ordering {
            EigenOrdering::Unsorted => return,
            EigenOrdering::Ascending => {
                perm.sort_by(|a, b| values[*a].partial_cmp(&values[*b]).unwrap_or(Ordering::Equal))
            }
            EigenOrdering::Descending => {
                perm.sort_by(|a, b| values[*b].partial_cmp(&values[*a]).unwrap_or(Ordering::Equal))
            }
        }
        self.values = [values[perm[0]], values[perm[1]], values[perm[2]]];
        if let Some(v) = self.vectors {
            let mut sorted = [[0.0; 3]; 3];
            for i in 0..3 {
                for k in 0..3 {
                    sorted[i][k] = v[i][perm[k]];
                }
            }
            self.vectors = Some(sorted);
        }
    }
}

impl<const N: usize> Stensor<N>
where
    Stensor<N>: SymmetricEigenSolver,
{
    /// Returns the eigenvalues computed with the default settings
    pub fn eigen_values(&self) -> [f64; 3] {
        self.eigen_decompose(false, &Settings::new()).values
    }

    /// Returns the eigenvalues and eigenvectors computed with the default settings
    ///
    /// Returns an error if the eigenvectors cannot be computed.
    pub fn eigen_vectors(&self) -> Result<EigenDecomposition, StrError> {
        let res = self.eigen_decompose(true, &Settings::new());
        if res.vectors.is_none() {
            return Err("the eigenvectors cannot be computed");
        }
        Ok(res)
    }

    /// Returns the eigenvector associated with the eigenvalue closest to lambda
    pub fn eigen_vector(&self, lambda: f64) -> Result<[f64; 3], StrError> {
        let res = self.eigen_vectors()?;
        let mut best = 0;
        for k in 1..3 {
            if f64::abs(res.values[k] - lambda) < f64::abs(res.values[best] - lambda) {
                best = k;
            }
        }
        res.eigen_vector(best).ok_or("the eigenvectors cannot be computed")
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
