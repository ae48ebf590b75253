use super::EigenDecomposition;
use crate::algebra::Stensor;
use crate::base::{EPSILON, MIN_POSITIVE, SQRT_2};

/// Returns the eigenvalues and eigenvectors of a 1D symmetric tensor (already diagonal)
pub(crate) fn decompose_1d(s: &Stensor<1>, want_vectors: bool) -> EigenDecomposition {
    EigenDecomposition {
        values: [s[0], s[1], s[2]],
        vectors: if want_vectors {
            Some([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
        } else {
            None
        },
    }
}

/// Computes the eigenvalues and eigenvectors of a 2D symmetric tensor
///
/// The out-of-plane component is the third eigenvalue with eigenvector `(0,0,1)`. The
/// in-plane eigenvalues are `tr/2 ± √((s0-s1)²/4 + s3²/2)`.
pub(crate) fn decompose_2d(s: &Stensor<2>, want_vectors: bool) -> EigenDecomposition {
    let (s0, s1, s2, s3) = (s[0], s[1], s[2], s[3]);
    let tr = s0 + s1;
    let tmp = s0 - s1;
    let delta = 0.25 * tmp * tmp + 0.5 * s3 * s3;
    let vp0 = 0.5 * tr + f64::sqrt(delta);
    let vp1 = 0.5 * tr - f64::sqrt(delta);
    let values = [vp0, vp1, s2];
    if !want_vectors {
        return EigenDecomposition { values, vectors: None };
    }

    let prec = f64::max(10.0 * f64::max(f64::abs(vp0), f64::abs(vp1)) * EPSILON, 100.0 * MIN_POSITIVE);
    if f64::abs(vp0 - vp1) <= prec {
        return EigenDecomposition {
            values,
            vectors: Some([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]),
        };
    }

    let vectors = eigen_vector_2d(s0, s1, s3, vp0).map(|(x, y)| [[x, -y, 0.0], [y, x, 0.0], [0.0, 0.0, 1.0]]);
    EigenDecomposition { values, vectors }
}

/// Solves the in-plane system `(s - vp I) v = 0` pivoting on the largest diagonal residual
fn eigen_vector_2d(s0: f64, s1: f64, s3: f64, vp: f64) -> Option<(f64, f64)> {
    let d0 = s0 - vp;
    let d1 = s1 - vp;
    let (x, y) = if f64::abs(d0) > f64::abs(d1) {
        if f64::abs(d0) < 100.0 * MIN_POSITIVE {
            return None;
        }
        (-s3 / (SQRT_2 * d0), 1.0)
    } else {
        if f64::abs(d1) < 100.0 * MIN_POSITIVE {
            return None;
        }
        (1.0, -s3 / (SQRT_2 * d1))
    };
    let norm = f64::sqrt(x * x + y * y);
    if norm < 100.0 * MIN_POSITIVE {
        return None;
    }
    Some((x / norm, y / norm))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
