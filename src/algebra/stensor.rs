use super::{mat3_det, stensor_size, Matrix3, STENSOR_INDICES};
use crate::base::{ONE_BY_3, ONE_BY_SQRT_2, SQRT_2};
use crate::StrError;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Holds the components of a symmetric second-order tensor
///
/// The components are stored in the order:
///
/// ```text
/// xx, yy, zz, √2·xy, √2·xz, √2·yz
/// ```
///
/// and only the first 3 (1D), 4 (2D) or 6 (3D) entries are used. With the √2 scaling,
/// the plain dot product of two component lists equals the double contraction `a : b`.
///
/// The space dimension `N` must be 1, 2 or 3; any other value fails to compile as soon
/// as the size is requested.
#[derive(Clone, Copy, PartialEq)]
pub struct Stensor<const N: usize> {
    data: [f64; 6],
}

impl Stensor<1> {
    /// Allocates a new instance from the xx, yy and zz components
    pub fn new(values: [f64; 3]) -> Self {
        let mut data = [0.0; 6];
        data[..3].copy_from_slice(&values);
        Stensor { data }
    }
}

impl Stensor<2> {
    /// Allocates a new instance from the xx, yy, zz and √2·xy components
    pub fn new(values: [f64; 4]) -> Self {
        let mut data = [0.0; 6];
        data[..4].copy_from_slice(&values);
        Stensor { data }
    }
}

impl Stensor<3> {
    /// Allocates a new instance from the xx, yy, zz, √2·xy, √2·xz and √2·yz components
    pub fn new(values: [f64; 6]) -> Self {
        Stensor { data: values }
    }
}

impl<const N: usize> Stensor<N> {
    /// Number of components used by the space dimension
    pub const SIZE: usize = stensor_size(N);

    /// Returns the zero tensor
    pub fn zero() -> Self {
        let _ = Self::SIZE;
        Stensor { data: [0.0; 6] }
    }

    /// Returns the identity tensor
    pub fn identity() -> Self {
        let mut res = Self::zero();
        res.data[0] = 1.0;
        res.data[1] = 1.0;
        res.data[2] = 1.0;
        res
    }

    /// Allocates a new instance from a slice with exactly `SIZE` components
    pub fn from_slice(values: &[f64]) -> Result<Self, StrError> {
        if values.len() != Self::SIZE {
            return Err("the number of components does not match the space dimension");
        }
        let mut res = Self::zero();
        res.data[..Self::SIZE].copy_from_slice(values);
        Ok(res)
    }

    /// Returns the components used by the space dimension
    pub fn as_slice(&self) -> &[f64] {
        &self.data[..Self::SIZE]
    }

    /// Returns a copy of the components used by the space dimension
    pub fn to_vec(&self) -> Vec<f64> {
        self.as_slice().to_vec()
    }

    /// Returns the components used by the space dimension (mutable)
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data[..Self::SIZE]
    }

    /// Allocates a new instance from the symmetric part of a 3×3 matrix
    ///
    /// Entries that the space dimension cannot represent (e.g., xz in 2D) are dropped.
    pub fn from_matrix(m: &Matrix3) -> Self {
        let mut res = Self::zero();
        for a in 0..Self::SIZE {
            let (i, j) = STENSOR_INDICES[a];
            res.data[a] = if i == j {
                m[i][i]
            } else {
                (m[i][j] + m[j][i]) * ONE_BY_SQRT_2
            };
        }
        res
    }

    /// Returns the 3×3 matrix representation
    pub fn to_matrix(&self) -> Matrix3 {
        let mut m = [[0.0; 3]; 3];
        for a in 0..Self::SIZE {
            let (i, j) = STENSOR_INDICES[a];
            if i == j {
                m[i][i] = self.data[a];
            } else {
                m[i][j] = self.data[a] * ONE_BY_SQRT_2;
                m[j][i] = m[i][j];
            }
        }
        m
    }

    /// Returns the (i,j) entry of the matrix representation
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.to_matrix()[i][j]
    }

    /// Returns the trace
    pub fn trace(&self) -> f64 {
        self.data[0] + self.data[1] + self.data[2]
    }

    /// Returns the determinant
    pub fn det(&self) -> f64 {
        mat3_det(&self.to_matrix())
    }

    /// Returns the deviatoric part `s - tr(s)/3 I`
    pub fn deviator(&self) -> Self {
        let mean = self.trace() * ONE_BY_3;
        let mut res = *self;
        for a in 0..3 {
            res.data[a] -= mean;
        }
        res
    }

    /// Returns the double contraction `self : other`
    pub fn dot(&self, other: &Self) -> f64 {
        self.as_slice().iter().zip(other.as_slice()).map(|(a, b)| a * b).sum()
    }

    /// Returns the Frobenius norm
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Returns the largest absolute value of the matrix entries
    pub fn max_abs_entry(&self) -> f64 {
        self.as_slice()
            .iter()
            .enumerate()
            .map(|(a, v)| if a < 3 { f64::abs(*v) } else { f64::abs(*v) / SQRT_2 })
            .fold(0.0, f64::max)
    }

    pub(crate) fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let mut res = Self::zero();
        for a in 0..Self::SIZE {
            res.data[a] = f(self.data[a]);
        }
        res
    }

    pub(crate) fn zip_with<F>(&self, other: &Self, f: F) -> Self
    where
        F: Fn(f64, f64) -> f64,
    {
        let mut res = Self::zero();
        for a in 0..Self::SIZE {
            res.data[a] = f(self.data[a], other.data[a]);
        }
        res
    }
}

impl_linear_ops!(Stensor);

impl<const N: usize> Default for Stensor<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> Index<usize> for Stensor<N> {
    type Output = f64;
    fn index(&self, a: usize) -> &f64 {
        &self.as_slice()[a]
    }
}

impl<const N: usize> IndexMut<usize> for Stensor<N> {
    fn index_mut(&mut self, a: usize) -> &mut f64 {
        &mut self.as_mut_slice()[a]
    }
}

impl<const N: usize> fmt::Debug for Stensor<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stensor<{}>{:?}", N, self.as_slice())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
