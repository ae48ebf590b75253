use super::{full4_zero, stensor_size, stensor_weight, tensor_size, Full4, Stensor, Tensor};
use super::{STENSOR_INDICES, TENSOR_INDICES};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Holds a linear map from symmetric tensors to symmetric tensors (e.g., the spatial moduli)
///
/// Rows and columns follow the component order of [Stensor]; entries are scaled so that
/// `dot` applied to a stensor gives the image stensor.
#[derive(Clone, Copy, PartialEq)]
pub struct St2toSt2<const N: usize> {
    data: [[f64; 6]; 6],
}

/// Holds a linear map from general tensors to symmetric tensors (e.g., ∂τ/∂F)
#[derive(Clone, Copy, PartialEq)]
pub struct T2toSt2<const N: usize> {
    data: [[f64; 9]; 6],
}

/// Holds a linear map from general tensors to general tensors (e.g., ∂P/∂F)
#[derive(Clone, Copy, PartialEq)]
pub struct T2toT2<const N: usize> {
    data: [[f64; 9]; 9],
}

impl<const N: usize> St2toSt2<N> {
    /// Number of rows used by the space dimension
    pub const NROW: usize = stensor_size(N);

    /// Number of columns used by the space dimension
    pub const NCOL: usize = stensor_size(N);

    /// Returns the zero map
    pub fn zero() -> Self {
        let _ = (Self::NROW, Self::NCOL);
        St2toSt2 { data: [[0.0; 6]; 6] }
    }

    /// Allocates a new instance by evaluating `f(row, col)` for each used entry
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(usize, usize) -> f64,
    {
        let mut res = Self::zero();
        for a in 0..Self::NROW {
            for b in 0..Self::NCOL {
                res.data[a][b] = f(a, b);
            }
        }
        res
    }

    /// Returns the identity map on symmetric tensors
    pub fn identity() -> Self {
        Self::from_fn(|a, b| if a == b { 1.0 } else { 0.0 })
    }

    /// Returns the dyadic product `I ⊗ I`
    pub fn ixi() -> Self {
        Self::from_fn(|a, b| if a < 3 && b < 3 { 1.0 } else { 0.0 })
    }

    /// Applies the map to a symmetric tensor
    pub fn dot(&self, s: &Stensor<N>) -> Stensor<N> {
        let mut res = Stensor::<N>::zero();
        for a in 0..Self::NROW {
            for b in 0..Self::NCOL {
                res[a] += self.data[a][b] * s[b];
            }
        }
        res
    }

    /// Returns the largest absolute value among the used entries
    pub fn max_abs(&self) -> f64 {
        let mut res: f64 = 0.0;
        for a in 0..Self::NROW {
            for b in 0..Self::NCOL {
                res = res.max(f64::abs(self.data[a][b]));
            }
        }
        res
    }

    /// Returns the full-index representation `C_ijkl`
    ///
    /// The minor symmetries are filled explicitly.
    pub(crate) fn to_full(&self) -> Full4 {
        let mut c = full4_zero();
        for a in 0..Self::NROW {
            let (i, j) = STENSOR_INDICES[a];
            for b in 0..Self::NCOL {
                let (k, l) = STENSOR_INDICES[b];
                let v = self.data[a][b] / (stensor_weight(a) * stensor_weight(b));
                c[i][j][k][l] = v;
                c[j][i][k][l] = v;
                c[i][j][l][k] = v;
                c[j][i][l][k] = v;
            }
        }
        c
    }

    /// Allocates a new instance from the full-index representation, averaging the minor symmetries
    pub(crate) fn from_full(c: &Full4) -> Self {
        Self::from_fn(|a, b| {
            let (i, j) = STENSOR_INDICES[a];
            let (k, l) = STENSOR_INDICES[b];
            let sym = 0.25 * (c[i][j][k][l] + c[j][i][k][l] + c[i][j][l][k] + c[j][i][l][k]);
            stensor_weight(a) * stensor_weight(b) * sym
        })
    }

    pub(crate) fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self::from_fn(|a, b| f(self.data[a][b]))
    }

    pub(crate) fn zip_with<F>(&self, other: &Self, f: F) -> Self
    where
        F: Fn(f64, f64) -> f64,
    {
        Self::from_fn(|a, b| f(self.data[a][b], other.data[a][b]))
    }
}

impl<const N: usize> T2toSt2<N> {
    /// Number of rows used by the space dimension
    pub const NROW: usize = stensor_size(N);

    /// Number of columns used by the space dimension
    pub const NCOL: usize = tensor_size(N);

    /// Returns the zero map
    pub fn zero() -> Self {
        let _ = (Self::NROW, Self::NCOL);
        T2toSt2 { data: [[0.0; 9]; 6] }
    }

    /// Allocates a new instance by evaluating `f(row, col)` for each used entry
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(usize, usize) -> f64,
    {
        let mut res = Self::zero();
        for a in 0..Self::NROW {
            for b in 0..Self::NCOL {
                res.data[a][b] = f(a, b);
            }
        }
        res
    }

    /// Applies the map to a general tensor
    pub fn dot(&self, t: &Tensor<N>) -> Stensor<N> {
        let mut res = Stensor::<N>::zero();
        for a in 0..Self::NROW {
            for b in 0..Self::NCOL {
                res[a] += self.data[a][b] * t[b];
            }
        }
        res
    }

    /// Returns the largest absolute value among the used entries
    pub fn max_abs(&self) -> f64 {
        let mut res: f64 = 0.0;
        for a in 0..Self::NROW {
            for b in 0..Self::NCOL {
                res = res.max(f64::abs(self.data[a][b]));
            }
        }
        res
    }

    /// Returns the full-index representation `K_ijkl`, symmetric in (i,j)
    pub(crate) fn to_full(&self) -> Full4 {
        let mut c = full4_zero();
        for a in 0..Self::NROW {
            let (i, j) = STENSOR_INDICES[a];
            for b in 0..Self::NCOL {
                let (k, l) = TENSOR_INDICES[b];
                let v = self.data[a][b] / stensor_weight(a);
                c[i][j][k][l] = v;
                c[j][i][k][l] = v;
            }
        }
        c
    }

    /// Allocates a new instance from the full-index representation, averaging over (i,j) ↔ (j,i)
    pub(crate) fn from_full(c: &Full4) -> Self {
        Self::from_fn(|a, b| {
            let (i, j) = STENSOR_INDICES[a];
            let (k, l) = TENSOR_INDICES[b];
            stensor_weight(a) * 0.5 * (c[i][j][k][l] + c[j][i][k][l])
        })
    }

    pub(crate) fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self::from_fn(|a, b| f(self.data[a][b]))
    }

    pub(crate) fn zip_with<F>(&self, other: &Self, f: F) -> Self
    where
        F: Fn(f64, f64) -> f64,
    {
        Self::from_fn(|a, b| f(self.data[a][b], other.data[a][b]))
    }
}

impl<const N: usize> T2toT2<N> {
    /// Number of rows used by the space dimension
    pub const NROW: usize = tensor_size(N);

    /// Number of columns used by the space dimension
    pub const NCOL: usize = tensor_size(N);

    /// Returns the zero map
    pub fn zero() -> Self {
        let _ = (Self::NROW, Self::NCOL);
        T2toT2 { data: [[0.0; 9]; 9] }
    }

    /// Allocates a new instance by evaluating `f(row, col)` for each used entry
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(usize, usize) -> f64,
    {
        let mut res = Self::zero();
        for a in 0..Self::NROW {
            for b in 0..Self::NCOL {
                res.data[a][b] = f(a, b);
            }
        }
        res
    }

    /// Returns the identity map on general tensors
    pub fn identity() -> Self {
        Self::from_fn(|a, b| if a == b { 1.0 } else { 0.0 })
    }

    /// Applies the map to a general tensor
    pub fn dot(&self, t: &Tensor<N>) -> Tensor<N> {
        let mut res = Tensor::<N>::zero();
        for a in 0..Self::NROW {
            for b in 0..Self::NCOL {
                res[a] += self.data[a][b] * t[b];
            }
        }
        res
    }

    /// Returns the largest absolute value among the used entries
    pub fn max_abs(&self) -> f64 {
        let mut res: f64 = 0.0;
        for a in 0..Self::NROW {
            for b in 0..Self::NCOL {
                res = res.max(f64::abs(self.data[a][b]));
            }
        }
        res
    }

    /// Returns the full-index representation `A_ijkl`
    pub(crate) fn to_full(&self) -> Full4 {
        let mut c = full4_zero();
        for a in 0..Self::NROW {
            let (i, j) = TENSOR_INDICES[a];
            for b in 0..Self::NCOL {
                let (k, l) = TENSOR_INDICES[b];
                c[i][j][k][l] = self.data[a][b];
            }
        }
        c
    }

    /// Allocates a new instance from the full-index representation
    pub(crate) fn from_full(c: &Full4) -> Self {
        Self::from_fn(|a, b| {
            let (i, j) = TENSOR_INDICES[a];
            let (k, l) = TENSOR_INDICES[b];
            c[i][j][k][l]
        })
    }

    pub(crate) fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self::from_fn(|a, b| f(self.data[a][b]))
    }

    pub(crate) fn zip_with<F>(&self, other: &Self, f: F) -> Self
    where
        F: Fn(f64, f64) -> f64,
    {
        Self::from_fn(|a, b| f(self.data[a][b], other.data[a][b]))
    }
}

impl_linear_ops!(St2toSt2);
impl_linear_ops!(T2toSt2);
impl_linear_ops!(T2toT2);

macro_rules! impl_matrix_access {
    ($name:ident) => {
        impl<const N: usize> Index<(usize, usize)> for $name<N> {
            type Output = f64;
            fn index(&self, (a, b): (usize, usize)) -> &f64 {
                assert!(a < Self::NROW && b < Self::NCOL, "index out of the space dimension");
                &self.data[a][b]
            }
        }

        impl<const N: usize> IndexMut<(usize, usize)> for $name<N> {
            fn index_mut(&mut self, (a, b): (usize, usize)) -> &mut f64 {
                assert!(a < Self::NROW && b < Self::NCOL, "index out of the space dimension");
                &mut self.data[a][b]
            }
        }

        impl<const N: usize> fmt::Debug for $name<N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}<{}>[", stringify!($name), N)?;
                for a in 0..Self::NROW {
                    if a > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", &self.data[a][..Self::NCOL])?;
                }
                write!(f, "]")
            }
        }
    };
}

impl_matrix_access!(St2toSt2);
impl_matrix_access!(T2toSt2);
impl_matrix_access!(T2toT2);

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{St2toSt2, T2toSt2, T2toT2};
    use crate::algebra::{Stensor, Tensor};
    use crate::base::SQRT_2;
    use russell_lab::{approx_eq, array_approx_eq};

    #[test]
    fn identity_and_ixi_work() {
        let s = Stensor::<2>::new([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(St2toSt2::<2>::identity().dot(&s), s);
        array_approx_eq(&St2toSt2::<2>::ixi().dot(&s).to_vec(), &[6.0, 6.0, 6.0, 0.0], 1e-15);
        let t = Tensor::<1>::new([1.0, 2.0, 3.0]);
        assert_eq!(T2toT2::<1>::identity().dot(&t), t);
    }

    #[test]
    fn full_index_round_trip_works() {
        let c = St2toSt2::<3>::from_fn(|a, b| (1 + a + 2 * b) as f64 + if a == b { 10.0 } else { 0.0 });
        let back = St2toSt2::<3>::from_full(&c.to_full());
        for a in 0..6 {
            for b in 0..6 {
                approx_eq(back[(a, b)], c[(a, b)], 1e-13);
            }
        }

        let k = T2toSt2::<2>::from_fn(|a, b| (a * 5 + b) as f64);
        let back = T2toSt2::<2>::from_full(&k.to_full());
        for a in 0..4 {
            for b in 0..5 {
                approx_eq(back[(a, b)], k[(a, b)], 1e-13);
            }
        }

        let d = T2toT2::<3>::from_fn(|a, b| (a * 9 + b) as f64);
        assert_eq!(T2toT2::<3>::from_full(&d.to_full()), d);
    }

    #[test]
    fn full_index_scaling_works() {
        // the shear modulus block of I_sym: C_0101 = 1/2
        let full = St2toSt2::<3>::identity().to_full();
        approx_eq(full[0][1][0][1], 0.5, 1e-15);
        approx_eq(full[1][0][0][1], 0.5, 1e-15);
        approx_eq(full[0][0][0][0], 1.0, 1e-15);

        // a single-column map acting on xy
        let mut k = T2toSt2::<2>::zero();
        k[(3, 3)] = SQRT_2;
        let full = k.to_full();
        approx_eq(full[0][1][0][1], 1.0, 1e-15);
        approx_eq(full[1][0][0][1], 1.0, 1e-15);
        assert_eq!(full[0][1][1][0], 0.0);
    }

    #[test]
    fn ops_and_debug_work() {
        let a = St2toSt2::<1>::identity();
        let b = a * 2.0 - a;
        assert_eq!(b, a);
        approx_eq((a + a).max_abs(), 2.0, 1e-15);
        assert_eq!(
            format!("{:?}", a),
            "St2toSt2<1>[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]"
        );
    }

    #[test]
    #[should_panic(expected = "index out of the space dimension")]
    fn index_out_of_dimension_panics() {
        let k = T2toSt2::<2>::zero();
        let _ = k[(4, 0)];
    }
}
