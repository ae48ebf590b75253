use crate::algebra::{mat3_inverse, mat3_mul, mat3_transpose, Stensor, Tensor};

impl<const N: usize> Tensor<N> {
    /// Returns the right Cauchy-Green tensor `C = Fᵀ·F` (self is the deformation gradient)
    pub fn right_cauchy_green(&self) -> Stensor<N> {
        let f = self.to_matrix();
        Stensor::from_matrix(&mat3_mul(&mat3_transpose(&f), &f))
    }

    /// Returns the left Cauchy-Green tensor `B = F·Fᵀ` (self is the deformation gradient)
    pub fn left_cauchy_green(&self) -> Stensor<N> {
        let f = self.to_matrix();
        Stensor::from_matrix(&mat3_mul(&f, &mat3_transpose(&f)))
    }

    /// Returns the Green-Lagrange strain `E = (C - I)/2` (self is the deformation gradient)
    pub fn green_lagrange(&self) -> Stensor<N> {
        (self.right_cauchy_green() - Stensor::identity()) * 0.5
    }

    /// Converts the first Piola-Kirchhoff stress (self) into the Cauchy stress `σ = P·Fᵀ/J`
    pub fn pk1_to_cauchy(&self, f: &Tensor<N>) -> Stensor<N> {
        let m = mat3_mul(&self.to_matrix(), &mat3_transpose(&f.to_matrix()));
        Stensor::from_matrix(&m) / f.det()
    }
}

impl<const N: usize> Stensor<N> {
    /// Converts the Cauchy stress (self) into the Kirchhoff stress `τ = J·σ`
    pub fn cauchy_to_kirchhoff(&self, f: &Tensor<N>) -> Stensor<N> {
        *self * f.det()
    }

    /// Converts the Kirchhoff stress (self) into the Cauchy stress `σ = τ/J`
    pub fn kirchhoff_to_cauchy(&self, f: &Tensor<N>) -> Stensor<N> {
        *self / f.det()
    }

    /// Converts the Cauchy stress (self) into the second Piola-Kirchhoff stress `S = J·F⁻¹·σ·F⁻ᵀ`
    pub fn cauchy_to_pk2(&self, f: &Tensor<N>) -> Stensor<N> {
        let inv_f = mat3_inverse(&f.to_matrix());
        let m = mat3_mul(&mat3_mul(&inv_f, &self.to_matrix()), &mat3_transpose(&inv_f));
        Stensor::from_matrix(&m) * f.det()
    }

    /// Converts the second Piola-Kirchhoff stress (self) into the Cauchy stress `σ = F·S·Fᵀ/J`
    pub fn pk2_to_cauchy(&self, f: &Tensor<N>) -> Stensor<N> {
        let ff = f.to_matrix();
        let m = mat3_mul(&mat3_mul(&ff, &self.to_matrix()), &mat3_transpose(&ff));
        Stensor::from_matrix(&m) / f.det()
    }

    /// Converts the Cauchy stress (self) into the first Piola-Kirchhoff stress `P = J·σ·F⁻ᵀ`
    pub fn cauchy_to_pk1(&self, f: &Tensor<N>) -> Tensor<N> {
        let inv_f = mat3_inverse(&f.to_matrix());
        let m = mat3_mul(&self.to_matrix(), &mat3_transpose(&inv_f));
        Tensor::from_matrix(&m) * f.det()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use crate::algebra::{Stensor, Tensor};
    use russell_lab::{approx_eq, array_approx_eq};

    fn sample_f() -> Tensor<3> {
        Tensor::<3>::new([1.1, 0.95, 1.02, 0.1, -0.05, 0.03, 0.02, -0.04, 0.06])
    }

    #[test]
    fn cauchy_green_tensors_work() {
        // simple shear
        let f = Tensor::<2>::new([1.0, 1.0, 1.0, 0.5, 0.0]);
        let c = f.right_cauchy_green();
        approx_eq(c.get(0, 0), 1.0, 1e-15);
        approx_eq(c.get(0, 1), 0.5, 1e-15);
        approx_eq(c.get(1, 1), 1.25, 1e-15);
        let b = f.left_cauchy_green();
        approx_eq(b.get(0, 0), 1.25, 1e-15);
        approx_eq(b.get(1, 1), 1.0, 1e-15);
        let e = f.green_lagrange();
        approx_eq(e.get(1, 1), 0.125, 1e-15);
        approx_eq(e.get(2, 2), 0.0, 1e-15);
    }

    #[test]
    fn stress_conversions_work() {
        let f = sample_f();
        let sig = Stensor::<3>::new([1.0, -0.5, 0.3, 0.2, -0.1, 0.4]);
        let tau = sig.cauchy_to_kirchhoff(&f);
        approx_eq(tau[0], f.det(), 1e-15);
        array_approx_eq(&tau.kirchhoff_to_cauchy(&f).to_vec(), &sig.to_vec(), 1e-15);

        let s = sig.cauchy_to_pk2(&f);
        array_approx_eq(&s.pk2_to_cauchy(&f).to_vec(), &sig.to_vec(), 1e-13);

        let p = sig.cauchy_to_pk1(&f);
        array_approx_eq(&p.pk1_to_cauchy(&f).to_vec(), &sig.to_vec(), 1e-13);

        // P = F·S
        let fs = f.dot(&Tensor::<3>::from_matrix(&s.to_matrix()));
        array_approx_eq(&fs.to_vec(), &p.to_vec(), 1e-13);
    }
}
