use crate::algebra::{full4_zero, mat3_inverse, St2toSt2, Stensor, Tensor};
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Implements the compressible neo-Hookean hyperelastic model
///
/// The strain energy is:
///
/// ```text
/// W = μ/2·(tr(C) - 3) - μ·ln(J) + λ/2·ln(J)²
/// ```
///
/// The model provides closed-form stresses and tangent operators and serves as a reference
/// behaviour for the tangent operator conversions.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct NeoHookean {
    /// First Lamé parameter
    pub lambda: f64,

    /// Shear modulus
    pub mu: f64,
}

impl NeoHookean {
    /// Allocates a new instance
    pub fn new(lambda: f64, mu: f64) -> Result<Self, StrError> {
        if mu <= 0.0 {
            return Err("the shear modulus must be positive");
        }
        if lambda < -2.0 * mu / 3.0 {
            return Err("the bulk modulus must be positive");
        }
        Ok(NeoHookean { lambda, mu })
    }

    /// Allocates a new instance from the Young modulus and the Poisson coefficient
    pub fn from_young_poisson(young: f64, poisson: f64) -> Result<Self, StrError> {
        if young <= 0.0 {
            return Err("the Young modulus must be positive");
        }
        if poisson <= -1.0 || poisson >= 0.5 {
            return Err("the Poisson coefficient must be in (-1, 0.5)");
        }
        let lambda = young * poisson / ((1.0 + poisson) * (1.0 - 2.0 * poisson));
        let mu = young / (2.0 * (1.0 + poisson));
        NeoHookean::new(lambda, mu)
    }

    /// Returns the Kirchhoff stress `τ = μ·(B - I) + λ·ln(J)·I`
    pub fn kirchhoff_stress<const N: usize>(&self, f: &Tensor<N>) -> Stensor<N> {
        let ln_j = f64::ln(f.det());
        let id = Stensor::<N>::identity();
        (f.left_cauchy_green() - id) * self.mu + id * (self.lambda * ln_j)
    }

    /// Returns the Cauchy stress
    pub fn cauchy_stress<const N: usize>(&self, f: &Tensor<N>) -> Stensor<N> {
        self.kirchhoff_stress(f).kirchhoff_to_cauchy(f)
    }

    /// Returns the second Piola-Kirchhoff stress `S = μ·(I - C⁻¹) + λ·ln(J)·C⁻¹`
    pub fn pk2_stress<const N: usize>(&self, f: &Tensor<N>) -> Stensor<N> {
        let ln_j = f64::ln(f.det());
        let inv_c = Stensor::<N>::from_matrix(&mat3_inverse(&f.right_cauchy_green().to_matrix()));
        (Stensor::identity() - inv_c) * self.mu + inv_c * (self.lambda * ln_j)
    }

    /// Returns the derivative of the second Piola-Kirchhoff stress with respect to the Green-Lagrange strain
    ///
    /// ```text
    /// ∂S/∂E = λ·C⁻¹⊗C⁻¹ + (μ - λ·ln(J))·(C⁻¹⊙C⁻¹ + C⁻¹⊡C⁻¹)
    /// ```
    pub fn ds_degl<const N: usize>(&self, f: &Tensor<N>) -> St2toSt2<N> {
        let ln_j = f64::ln(f.det());
        let ic = mat3_inverse(&f.right_cauchy_green().to_matrix());
        let mut dd = full4_zero();
        for i in 0..3 {
            for j in 0..3 {
                for k in 0..3 {
                    for l in 0..3 {
                        dd[i][j][k][l] = self.lambda * ic[i][j] * ic[k][l]
                            + (self.mu - self.lambda * ln_j) * (ic[i][k] * ic[j][l] + ic[i][l] * ic[j][k]);
                    }
                }
            }
        }
        St2toSt2::from_full(&dd)
    }

    /// Returns the spatial moduli `c = λ·I⊗I + 2·(μ - λ·ln(J))·𝕀ˢʸᵐ`
    pub fn spatial_moduli<const N: usize>(&self, f: &Tensor<N>) -> St2toSt2<N> {
        let ln_j = f64::ln(f.det());
        St2toSt2::ixi() * self.lambda + St2toSt2::identity() * (2.0 * (self.mu - self.lambda * ln_j))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::NeoHookean;
    use crate::algebra::{Stensor, Tensor};
    use russell_lab::{approx_eq, array_approx_eq};

    #[test]
    fn new_captures_errors() {
        assert_eq!(NeoHookean::new(1.0, 0.0).err(), Some("the shear modulus must be positive"));
        assert_eq!(NeoHookean::new(-1.0, 1.0).err(), Some("the bulk modulus must be positive"));
        assert_eq!(
            NeoHookean::from_young_poisson(0.0, 0.3).err(),
            Some("the Young modulus must be positive")
        );
        assert_eq!(
            NeoHookean::from_young_poisson(1.0, 0.5).err(),
            Some("the Poisson coefficient must be in (-1, 0.5)")
        );
        let model = NeoHookean::from_young_poisson(2.6, 0.3).unwrap();
        approx_eq(model.mu, 1.0, 1e-15);
        approx_eq(model.lambda, 1.5, 1e-15);
    }

    #[test]
    fn stresses_are_consistent() {
        let model = NeoHookean::new(2.0, 1.0).unwrap();
        assert_eq!(model.kirchhoff_stress(&Tensor::<2>::identity()), Stensor::<2>::zero());

        let f = Tensor::<3>::new([1.1, 0.95, 1.02, 0.1, -0.05, 0.03, 0.02, -0.04, 0.06]);
        let sig = model.cauchy_stress(&f);
        let s = model.pk2_stress(&f);
        array_approx_eq(&sig.cauchy_to_pk2(&f).to_vec(), &s.to_vec(), 1e-13);

        // uniaxial stretch in 1D
        let f = Tensor::<1>::new([1.2, 1.0, 1.0]);
        let sig = model.cauchy_stress(&f);
        approx_eq(sig[0], (1.44 - 1.0 + 2.0 * f64::ln(1.2)) / 1.2, 1e-14);
        approx_eq(sig[1], 2.0 * f64::ln(1.2) / 1.2, 1e-14);
    }

    #[test]
    fn moduli_at_the_reference_configuration_coincide() {
        // at F = I, ∂S/∂E = c = λ·I⊗I + 2μ·𝕀ˢʸᵐ
        let model = NeoHookean::new(2.0, 1.0).unwrap();
        let f = Tensor::<3>::identity();
        let dd = model.ds_degl(&f);
        let cc = model.spatial_moduli(&f);
        for a in 0..6 {
            for b in 0..6 {
                approx_eq(dd[(a, b)], cc[(a, b)], 1e-14);
            }
        }
        approx_eq(cc[(0, 0)], 4.0, 1e-15);
        approx_eq(cc[(0, 1)], 2.0, 1e-15);
        approx_eq(cc[(3, 3)], 2.0, 1e-15);
    }
}
