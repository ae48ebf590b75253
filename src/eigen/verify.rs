use super::EigenDecomposition;
use crate::algebra::{mat3_mul_vec, Stensor};
use crate::base::MIN_POSITIVE;

/// Checks that `s·vₖ ≈ λₖ·vₖ` for each eigenpair
///
/// The residual `|s·vₖ - λₖ·vₖ|` is compared against `tolerance · scale`, where `scale`
/// is the largest absolute entry of `s` (or one eigenvalue if larger). Returns false if
/// the decomposition has no eigenvectors.
pub fn verify_eigen_pairs<const N: usize>(s: &Stensor<N>, decomposition: &EigenDecomposition, tolerance: f64) -> bool {
    let vectors = match decomposition.vectors.as_ref() {
        Some(v) => v,
        None => return false,
    };
    let m = s.to_matrix();
    let max_value = decomposition.values.iter().fold(0.0, |acc: f64, v| acc.max(f64::abs(*v)));
    let scale = f64::max(f64::max(s.max_abs_entry(), max_value), 100.0 * MIN_POSITIVE);
    for k in 0..3 {
        let v = [vectors[0][k], vectors[1][k], vectors[2][k]];
        let sv = mat3_mul_vec(&m, &v);
        let lambda = decomposition.values[k];
        let residual = f64::sqrt((0..3).map(|i| f64::powi(sv[i] - lambda * v[i], 2)).sum::<f64>());
        if residual > tolerance * scale {
            return false;
        }
    }
    true
}

/// Checks that `Vᵀ·V = I` for the matrix of eigenvectors (stored as columns)
pub fn is_orthonormal(vectors: &[[f64; 3]; 3], tolerance: f64) -> bool {
    for k in 0..3 {
        for l in 0..3 {
            let dot: f64 = (0..3).map(|i| vectors[i][k] * vectors[i][l]).sum();
            let expected = if k == l { 1.0 } else { 0.0 };
            if f64::abs(dot - expected) > tolerance {
                return false;
            }
        }
    }
    true
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
