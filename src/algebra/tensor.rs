use super::{mat3_det, mat3_inverse, mat3_mul, mat3_transpose, tensor_size, Matrix3, TENSOR_INDICES};
use crate::StrError;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Holds the components of a general (non-symmetric) second-order tensor such as the deformation gradient
///
/// The components are stored without scaling in the order:
///
/// ```text
/// xx, yy, zz, xy, yx, xz, zx, yz, zy
/// ```
///
/// and only the first 3 (1D), 5 (2D) or 9 (3D) entries are used.
#[derive(Clone, Copy, PartialEq)]
pub struct Tensor<const N: usize> {
    data: [f64; 9],
}

impl Tensor<1> {
    /// Allocates a new instance from the xx, yy and zz components
    pub fn new(values: [f64; 3]) -> Self {
        let mut data = [0.0; 9];
        data[..3].copy_from_slice(&values);
        Tensor { data }
    }
}

impl Tensor<2> {
    /// Allocates a new instance from the xx, yy, zz, xy and yx components
    pub fn new(values: [f64; 5]) -> Self {
        let mut data = [0.0; 9];
        data[..5].copy_from_slice(&values);
        Tensor { data }
    }
}

impl Tensor<3> {
    /// Allocates a new instance from the xx, yy, zz, xy, yx, xz, zx, yz and zy components
    pub fn new(values: [f64; 9]) -> Self {
        Tensor { data: values }
    }
}

impl<const N: usize> Tensor<N> {
    /// Number of components used by the space dimension
    pub const SIZE: usize = tensor_size(N);

    /// Returns the zero tensor
    pub fn zero() -> Self {
        let _ = Self::SIZE;
        Tensor { data: [0.0; 9] }
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

    /// Allocates a new instance from a 3×3 matrix
    ///
    /// Entries that the space dimension cannot represent are dropped.
    pub fn from_matrix(m: &Matrix3) -> Self {
        let mut res = Self::zero();
        for a in 0..Self::SIZE {
            let (i, j) = TENSOR_INDICES[a];
            res.data[a] = m[i][j];
        }
        res
    }

    /// Returns the 3×3 matrix representation
    pub fn to_matrix(&self) -> Matrix3 {
        let mut m = [[0.0; 3]; 3];
        for a in 0..Self::SIZE {
            let (i, j) = TENSOR_INDICES[a];
            m[i][j] = self.data[a];
        }
        m
    }

    /// Returns the trace
    pub fn trace(&self) -> f64 {
        self.data[0] + self.data[1] + self.data[2]
    }

    /// Returns the determinant
    pub fn det(&self) -> f64 {
        mat3_det(&self.to_matrix())
    }

    /// Returns the inverse
    ///
    /// The tensor must be invertible; a singular tensor yields non-finite components.
    pub fn inverse(&self) -> Self {
        Self::from_matrix(&mat3_inverse(&self.to_matrix()))
    }

    /// Returns the transpose
    pub fn transpose(&self) -> Self {
        Self::from_matrix(&mat3_transpose(&self.to_matrix()))
    }

    /// Returns the single contraction `self · other`
    pub fn dot(&self, other: &Self) -> Self {
        Self::from_matrix(&mat3_mul(&self.to_matrix(), &other.to_matrix()))
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

impl_linear_ops!(Tensor);

impl<const N: usize> Default for Tensor<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> Index<usize> for Tensor<N> {
    type Output = f64;
    fn index(&self, a: usize) -> &f64 {
        &self.as_slice()[a]
    }
}

impl<const N: usize> IndexMut<usize> for Tensor<N> {
    fn index_mut(&mut self, a: usize) -> &mut f64 {
        &mut self.as_mut_slice()[a]
    }
}

impl<const N: usize> fmt::Debug for Tensor<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tensor<{}>{:?}", N, self.as_slice())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
