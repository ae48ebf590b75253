use super::SymmetricEigenSolver;
use crate::algebra::{full4_zero, St2toSt2, Stensor};
use crate::base::Settings;
use crate::StrError;

impl<const N: usize> Stensor<N> {
    /// Builds `Σₖ λₖ vₖ ⊗ vₖ` from eigenvalues and eigenvectors (stored as columns)
    pub fn from_eigen(values: &[f64; 3], vectors: &[[f64; 3]; 3]) -> Self {
        let mut m = [[0.0; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                for k in 0..3 {
                    m[i][j] += values[k] * vectors[i][k] * vectors[j][k];
                }
            }
        }
        Self::from_matrix(&m)
    }
}

impl<const N: usize> Stensor<N>
where
    Stensor<N>: SymmetricEigenSolver,
{
    /// Returns the isotropic function `Σₖ f(λₖ) vₖ ⊗ vₖ`
    pub fn isotropic_function<F>(&self, f: F) -> Result<Self, StrError>
    where
        F: Fn(f64) -> f64,
    {
        let res = self.eigen_decompose(true, &Settings::new());
        let vectors = res.vectors.ok_or("the eigenvectors cannot be computed")?;
        let values = [f(res.values[0]), f(res.values[1]), f(res.values[2])];
        Ok(Self::from_eigen(&values, &vectors))
    }

    /// Returns the eigenvalues and the eigen tensors `Nₖ = vₖ ⊗ vₖ`
    ///
    /// The eigen tensors satisfy `Σₖ Nₖ = I` and `Σₖ λₖ Nₖ = s`.
    pub fn eigen_tensors(&self) -> Result<([f64; 3], [Self; 3]), StrError> {
        let res = self.eigen_decompose(true, &Settings::new());
        let vectors = res.vectors.ok_or("the eigenvectors cannot be computed")?;
        let mut tensors = [Self::zero(); 3];
        for k in 0..3 {
            let mut m = [[0.0; 3]; 3];
            for i in 0..3 {
                for j in 0..3 {
                    m[i][j] = vectors[i][k] * vectors[j][k];
                }
            }
            tensors[k] = Self::from_matrix(&m);
        }
        Ok((res.values, tensors))
    }

    /// Returns the derivative of the isotropic function `Σₖ f(λₖ) vₖ ⊗ vₖ` with respect to the tensor
    ///
    /// ```text
    /// D = Σₐ Σᵦ θₐᵦ (vₐ ⊗ vᵦ) ⊗ (vₐ ⊗ vᵦ)
    ///
    /// θₐᵦ = (f(λₐ) - f(λᵦ)) / (λₐ - λᵦ)   if |λₐ - λᵦ| > eps
    /// θₐᵦ = (df(λₐ) + df(λᵦ)) / 2          otherwise
    /// ```
    ///
    /// `eps` is the absolute criterion used to judge whether two eigenvalues are equal.
    pub fn isotropic_function_derivative<F, G>(&self, f: F, df: G, eps: f64) -> Result<St2toSt2<N>, StrError>
    where
        F: Fn(f64) -> f64,
        G: Fn(f64) -> f64,
    {
        let res = self.eigen_decompose(true, &Settings::new());
        let v = res.vectors.ok_or("the eigenvectors cannot be computed")?;
        let vp = res.values;
        let fv = [f(vp[0]), f(vp[1]), f(vp[2])];
        let dfv = [df(vp[0]), df(vp[1]), df(vp[2])];
        let mut theta = [[0.0; 3]; 3];
        for a in 0..3 {
            for b in 0..3 {
                theta[a][b] = if a != b && f64::abs(vp[a] - vp[b]) > eps {
                    (fv[a] - fv[b]) / (vp[a] - vp[b])
                } else {
                    0.5 * (dfv[a] + dfv[b])
                };
            }
        }
        let mut d = full4_zero();
        for i in 0..3 {
            for j in 0..3 {
                for k in 0..3 {
                    for l in 0..3 {
                        let mut sum = 0.0;
                        for a in 0..3 {
                            for b in 0..3 {
                                sum += theta[a][b] * v[i][a] * v[j][b] * v[k][a] * v[l][b];
                            }
                        }
                        d[i][j][k][l] = sum;
                    }
                }
            }
        }
        Ok(St2toSt2::from_full(&d))
    }

    /// Returns the positive part (negative eigenvalues replaced by zero)
    pub fn positive_part(&self) -> Result<Self, StrError> {
        self.isotropic_function(|x| if x > 0.0 { x } else { 0.0 })
    }

    /// Returns the negative part (positive eigenvalues replaced by zero)
    pub fn negative_part(&self) -> Result<Self, StrError> {
        self.isotropic_function(|x| if x < 0.0 { x } else { 0.0 })
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Result<Self, StrError> {
        self.isotropic_function(f64::abs)
    }

    /// Returns the logarithm
    ///
    /// All eigenvalues must be positive.
    pub fn log(&self) -> Result<Self, StrError> {
        let res = self.eigen_decompose(true, &Settings::new());
        if res.values.iter().any(|v| *v <= 0.0) {
            return Err("the eigenvalues must be positive to compute the logarithm");
        }
        let vectors = res.vectors.ok_or("the eigenvectors cannot be computed")?;
        let values = [f64::ln(res.values[0]), f64::ln(res.values[1]), f64::ln(res.values[2])];
        Ok(Self::from_eigen(&values, &vectors))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
