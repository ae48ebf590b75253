use super::{Matrix3, Stensor, Tensor, STENSOR_INDICES};
use crate::StrError;
use russell_tensor::{Mandel, Tensor2};

/// Returns the 3×3 matrix of a russell tensor
fn matrix_of(tt: &Tensor2) -> Matrix3 {
    let mut m = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            m[i][j] = tt.get(i, j);
        }
    }
    m
}

impl<const N: usize> Stensor<N> {
    /// Converts to a russell tensor in the Mandel basis
    ///
    /// 3D tensors use [Mandel::Symmetric]; 1D and 2D tensors use [Mandel::Symmetric2D].
    /// The Mandel basis stores `yz` before `xz`, so the components are re-mapped through
    /// the matrix representation.
    pub fn to_tensor2(&self) -> Result<Tensor2, StrError> {
        let mandel = if N == 3 { Mandel::Symmetric } else { Mandel::Symmetric2D };
        Tensor2::from_matrix(&self.to_matrix(), mandel)
    }

    /// Allocates a new instance from the symmetric part of a russell tensor
    ///
    /// Returns an error if the tensor has entries that this space dimension cannot hold.
    pub fn from_tensor2(tt: &Tensor2) -> Result<Self, StrError> {
        let m = matrix_of(tt);
        for i in 0..3 {
            for j in (i + 1)..3 {
                let stored = STENSOR_INDICES[..Self::SIZE].contains(&(i, j));
                if !stored && (m[i][j] != 0.0 || m[j][i] != 0.0) {
                    return Err("the tensor has components that cannot be represented in this space dimension");
                }
            }
        }
        Ok(Self::from_matrix(&m))
    }
}

impl<const N: usize> Tensor<N> {
    /// Converts to a russell tensor with the general (non-symmetric) Mandel basis
    pub fn to_tensor2(&self) -> Result<Tensor2, StrError> {
        Tensor2::from_matrix(&self.to_matrix(), Mandel::General)
    }

    /// Allocates a new instance from a russell tensor
    ///
    /// Returns an error if the tensor has entries that this space dimension cannot hold.
    pub fn from_tensor2(tt: &Tensor2) -> Result<Self, StrError> {
        let m = matrix_of(tt);
        let res = Self::from_matrix(&m);
        if res.to_matrix() != m {
            return Err("the tensor has components that cannot be represented in this space dimension");
        }
        Ok(res)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use crate::algebra::{Stensor, Tensor};
    use crate::base::SQRT_2;
    use russell_lab::{approx_eq, array_approx_eq};
    use russell_tensor::{Mandel, Tensor2};

    #[test]
    fn stensor_to_tensor2_works() {
        let s = Stensor::<3>::new([1.0, 2.0, 3.0, 4.0 * SQRT_2, 6.0 * SQRT_2, 5.0 * SQRT_2]);
        let tt = s.to_tensor2().unwrap();
        approx_eq(tt.get(0, 1), 4.0, 1e-14);
        approx_eq(tt.get(0, 2), 6.0, 1e-14);
        approx_eq(tt.get(1, 2), 5.0, 1e-14);
        let back = Stensor::<3>::from_tensor2(&tt).unwrap();
        array_approx_eq(&back.to_vec(), &s.to_vec(), 1e-14);

        let s2 = Stensor::<2>::new([1.0, 2.0, 3.0, 4.0 * SQRT_2]);
        let tt2 = s2.to_tensor2().unwrap();
        approx_eq(tt2.get(1, 0), 4.0, 1e-14);
        array_approx_eq(&Stensor::<2>::from_tensor2(&tt2).unwrap().to_vec(), &s2.to_vec(), 1e-14);
    }

    #[test]
    fn from_tensor2_captures_errors() {
        #[rustfmt::skip]
        let tt = Tensor2::from_matrix(&[
            [1.0, 4.0, 6.0],
            [4.0, 2.0, 5.0],
            [6.0, 5.0, 3.0],
        ], Mandel::Symmetric).unwrap();
        assert_eq!(
            Stensor::<2>::from_tensor2(&tt).err(),
            Some("the tensor has components that cannot be represented in this space dimension")
        );
        assert_eq!(
            Tensor::<1>::from_tensor2(&tt).err(),
            Some("the tensor has components that cannot be represented in this space dimension")
        );
    }

    #[test]
    fn tensor_to_tensor2_works() {
        let f = Tensor::<2>::new([1.1, 0.9, 1.0, 0.2, -0.1]);
        let tt = f.to_tensor2().unwrap();
        approx_eq(tt.get(0, 1), 0.2, 1e-15);
        approx_eq(tt.get(1, 0), -0.1, 1e-15);
        let back = Tensor::<2>::from_tensor2(&tt).unwrap();
        array_approx_eq(&back.to_vec(), &f.to_vec(), 1e-15);
    }
}
