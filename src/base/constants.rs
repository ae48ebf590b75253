/// Defines √2, the scaling of the off-diagonal components of a symmetric tensor
pub const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// Defines 1/√2
pub const ONE_BY_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Defines √3
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Defines 1/3
pub const ONE_BY_3: f64 = 1.0 / 3.0;

/// Defines the machine epsilon
pub const EPSILON: f64 = f64::EPSILON;

/// Defines the smallest positive normal number
pub const MIN_POSITIVE: f64 = f64::MIN_POSITIVE;

/// Defines the tolerance used to classify the branches of the cubic solver
///
/// Applies to the coefficients `p`, `q` of the depressed cubic and to its discriminant.
pub const CUBIC_PREC: f64 = 100.0 * EPSILON;

/// Defines the maximum number of Newton iterations used to polish a root
pub const CUBIC_MAX_NEWTON_ITERATIONS: usize = 50;

/// Defines the relative precision used to compare normalized eigenvalues
pub const EIGEN_REL_PREC: f64 = 100.0 * EPSILON;

/// Defines the gap between two normalized eigenvalues below which they are treated as a cluster
///
/// A cluster is resolved in the plane normal to the eigenvector of the isolated eigenvalue.
pub const EIGEN_CLUSTER_TOL: f64 = 0.05;

/// Defines the tolerance of the eigenpair verification (scaled by the magnitude of the tensor)
pub const EIGEN_VERIFY_TOL: f64 = 1000.0 * EPSILON;

/// Defines the default number of retries of the 3D eigenvector fallback
pub const DEFAULT_MAX_FALLBACK_DEPTH: usize = 2;

/// Defines the widening factor applied to the multiplicity tolerance at each fallback retry
pub const FALLBACK_PREC_FACTOR: f64 = 1e4;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{ONE_BY_SQRT_2, SQRT_2, SQRT_3};

    #[test]
    fn constants_are_consistent() {
        assert!((SQRT_2 * ONE_BY_SQRT_2 - 1.0).abs() < 1e-15);
        assert!((SQRT_3 * SQRT_3 - 3.0).abs() < 1e-15);
    }
}
