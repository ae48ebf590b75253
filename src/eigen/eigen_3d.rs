use super::EigenDecomposition;
use crate::algebra::Stensor;
use crate::base::{
    Settings, EIGEN_CLUSTER_TOL, EIGEN_REL_PREC, EPSILON, FALLBACK_PREC_FACTOR, MIN_POSITIVE, ONE_BY_3, ONE_BY_SQRT_2,
};
use crate::cubic::CubicRoots;
use tracing::{debug, warn};

/// Holds three unit vectors (one per eigenvalue)
type Columns = [[f64; 3]; 3];

/// Computes the eigenvalues and eigenvectors of a 3D symmetric tensor
///
/// The tensor is shifted by its mean trace and scaled by the largest entry of the shifted
/// matrix so that multiplicities are detected with a relative tolerance. The eigenvalues
/// come from the characteristic cubic and keep the order of the cubic solution.
pub(crate) fn decompose_3d(s: &Stensor<3>, want_vectors: bool, settings: &Settings) -> EigenDecomposition {
    let c = s.as_slice();
    let tr = (c[0] + c[1] + c[2]) * ONE_BY_3;
    let shifted = [c[0] - tr, c[1] - tr, c[2] - tr, c[3], c[4], c[5]];
    let ms = shifted
        .iter()
        .enumerate()
        .map(|(a, v)| if a < 3 { f64::abs(*v) } else { f64::abs(*v) * ONE_BY_SQRT_2 })
        .fold(0.0, f64::max);

    // all eigenvalues are equal
    if ms <= f64::max(EPSILON * f64::abs(tr), 100.0 * MIN_POSITIVE) {
        return EigenDecomposition {
            values: [tr; 3],
            vectors: if want_vectors { Some(identity()) } else { None },
        };
    }

    let mut n = [0.0; 6];
    for a in 0..6 {
        n[a] = shifted[a] / ms;
    }
    let normalized = NormalizedTensor {
        n,
        max_fallback_depth: settings.max_fallback_depth,
    };
    let (x, columns) = normalized.solve(settings.refine, 0, want_vectors);
    EigenDecomposition {
        values: [x[0] * ms + tr, x[1] * ms + tr, x[2] * ms + tr],
        vectors: columns.map(|cols| to_matrix(&cols)),
    }
}

/// Holds the shifted and scaled tensor `(s - tr/3 I) / max|sᵢⱼ - tr/3 δᵢⱼ|`
///
/// The eigenvalues of the normalized tensor span an interval of length at least one, hence
/// the root farthest from the other two is separated from them by at least one half.
pub(crate) struct NormalizedTensor {
    pub(crate) n: [f64; 6],
    pub(crate) max_fallback_depth: usize,
}

impl NormalizedTensor {
    /// Returns the eigenvalues and (optionally) the eigenvectors
    ///
    /// The eigenvalues are updated by the eigenvector construction when it succeeds.
    fn solve(&self, refine: bool, depth: usize, want_vectors: bool) -> ([f64; 3], Option<Columns>) {
        let vp = self.eigen_values(refine);
        if !want_vectors {
            return (vp, None);
        }
        match self.eigen_vectors(&vp, depth) {
            Some((values, columns)) => (values, Some(columns)),
            None => (vp, None),
        }
    }

    /// Solves the characteristic cubic `x³ - I1·x² + I2·x - I3 = 0`
    ///
    /// Close roots are ill-conditioned and the cubic may even report a complex pair for
    /// them. The two roots next to the isolated one are then rebuilt from the deflated
    /// quadratic `x² - (I1 - λ)·x + I2 - λ·(I1 - λ)`, whose discriminant is clamped at zero.
    pub(crate) fn eigen_values(&self, refine: bool) -> [f64; 3] {
        let n = &self.n;
        let i1 = n[0] + n[1] + n[2];
        let i2 = n[0] * n[1] + n[0] * n[2] + n[1] * n[2] - 0.5 * (n[3] * n[3] + n[4] * n[4] + n[5] * n[5]);
        let i3 = n[0] * n[1] * n[2] - 0.5 * (n[0] * n[5] * n[5] + n[1] * n[4] * n[4] + n[2] * n[3] * n[3])
            + n[3] * n[4] * n[5] * ONE_BY_SQRT_2;
        let res = CubicRoots::exe(1.0, -i1, i2, -i3, refine);
        let x = res.roots;
        if res.count == 3 && min_gap(&x) > EIGEN_CLUSTER_TOL {
            return x;
        }
        let k = isolated_root(&x);
        let sum = i1 - x[k];
        let prod = i2 - x[k] * sum;
        let mut disc = sum * sum - 4.0 * prod;
        if disc < EIGEN_REL_PREC * sum * sum {
            disc = 0.0;
        }
        let r = 0.5 * f64::sqrt(disc);
        let (j1, j2) = other_slots(k);
        let mut vp = x;
        if x[j1] <= x[j2] {
            vp[j1] = 0.5 * sum - r;
            vp[j2] = 0.5 * sum + r;
        } else {
            vp[j1] = 0.5 * sum + r;
            vp[j2] = 0.5 * sum - r;
        }
        vp
    }

    /// Computes the eigenvectors associated with the (normalized) eigenvalues vp
    ///
    /// Returns the eigenvalues (Rayleigh quotients of the eigenvectors) and the eigenvectors,
    /// or None if the construction breaks down after all fallback retries.
    pub(crate) fn eigen_vectors(&self, vp: &[f64; 3], depth: usize) -> Option<([f64; 3], Columns)> {
        let mvp = vp.iter().fold(0.0, |acc: f64, v| acc.max(f64::abs(*v)));
        let prec = f64::max(mvp * EIGEN_REL_PREC, 100.0 * MIN_POSITIVE) * FALLBACK_PREC_FACTOR.powi(depth as i32);
        let eq01 = f64::abs(vp[0] - vp[1]) <= prec;
        let eq02 = f64::abs(vp[0] - vp[2]) <= prec;

        if eq01 && eq02 {
            return Some((*vp, identity()));
        }

        if min_gap(vp) > f64::max(EIGEN_CLUSTER_TOL, prec) {
            // all distinct
            let v0 = match self.minor_vector(vp[0]) {
                Some(v) => v,
                None => return self.fallback(vp, depth),
            };
            let v1 = match self.minor_vector(vp[1]) {
                Some(v) => v,
                None => return self.fallback(vp, depth),
            };
            let proj = dot(&v1, &v0);
            let v1 = [v1[0] - proj * v0[0], v1[1] - proj * v0[1], v1[2] - proj * v0[2]];
            let v1 = match normalize(&v1) {
                Some(v) => v,
                None => return self.fallback(vp, depth),
            };
            let columns = [v0, v1, cross(&v0, &v1)];
            let m = self.matrix();
            let values = [
                quadratic_form(&m, &columns[0], &columns[0]),
                quadratic_form(&m, &columns[1], &columns[1]),
                quadratic_form(&m, &columns[2], &columns[2]),
            ];
            return Some((values, columns));
        }

        // one isolated eigenvalue (k) and a pair of equal or close ones
        let k = isolated_root(vp);
        let single = match self.minor_vector(vp[k]) {
            Some(v) => v,
            None => return self.fallback(vp, depth),
        };
        Some(self.resolve_pair(vp, k, &single))
    }

    /// Computes the eigenpairs of the two eigenvalues other than vp[k]
    ///
    /// The tensor is projected onto the plane normal to `single` and the resulting 2×2
    /// problem is solved by a plane rotation. Equal eigenvalues yield an arbitrary
    /// orthonormal basis of the plane. The columns form a right-handed frame.
    fn resolve_pair(&self, vp: &[f64; 3], k: usize, single: &[f64; 3]) -> ([f64; 3], Columns) {
        let m = self.matrix();
        let p = find_perpendicular_vector(single);
        let q = cross(single, &p);
        let a = quadratic_form(&m, &p, &p);
        let b = quadratic_form(&m, &p, &q);
        let d = quadratic_form(&m, &q, &q);
        let (sn, cs) = f64::sin_cos(0.5 * f64::atan2(2.0 * b, a - d));
        let u = [cs * p[0] + sn * q[0], cs * p[1] + sn * q[1], cs * p[2] + sn * q[2]];
        let w = [cs * q[0] - sn * p[0], cs * q[1] - sn * p[1], cs * q[2] - sn * p[2]];
        let lu = a * cs * cs + 2.0 * b * cs * sn + d * sn * sn;
        let lw = a * sn * sn - 2.0 * b * cs * sn + d * cs * cs;

        // keep the order of the cubic solution within the pair
        let (j1, j2) = other_slots(k);
        let ((l1, v1), (l2, v2)) = if (vp[j1] <= vp[j2]) == (lu <= lw) {
            ((lu, u), (lw, w))
        } else {
            ((lw, w), (lu, u))
        };
        let mut values = *vp;
        let mut columns = [[0.0; 3]; 3];
        values[k] = quadratic_form(&m, single, single);
        columns[k] = *single;
        values[j1] = l1;
        columns[j1] = v1;
        values[j2] = l2;
        columns[j2] = v2;
        if dot(&columns[0], &cross(&columns[1], &columns[2])) < 0.0 {
            columns[j2] = [-v2[0], -v2[1], -v2[2]];
        }
        (values, columns)
    }

    /// Returns the normalized tensor as a 3×3 matrix
    fn matrix(&self) -> [[f64; 3]; 3] {
        let n = &self.n;
        let (xy, xz, yz) = (n[3] * ONE_BY_SQRT_2, n[4] * ONE_BY_SQRT_2, n[5] * ONE_BY_SQRT_2);
        [[n[0], xy, xz], [xy, n[1], yz], [xz, yz, n[2]]]
    }

    /// Solves `(n - vp I) v = 0` using the largest 2×2 minor as pivot
    ///
    /// Returns None if all three minors are degenerate.
    pub(crate) fn minor_vector(&self, vp: f64) -> Option<[f64; 3]> {
        let n = &self.n;
        let a = n[0] - vp;
        let b = n[3] * ONE_BY_SQRT_2;
        let c = n[4] * ONE_BY_SQRT_2;
        let d = n[1] - vp;
        let e = n[5] * ONE_BY_SQRT_2;
        let f = n[2] - vp;
        let det3 = a * d - b * b;
        let det2 = a * f - c * c;
        let det1 = d * f - e * e;
        let threshold = 10.0 * EPSILON * f64::max(f64::abs(vp), 1.0);
        let (m1, m2, m3) = (f64::abs(det1), f64::abs(det2), f64::abs(det3));
        if m1 < threshold && m2 < threshold && m3 < threshold {
            return None;
        }
        let v = if m3 >= m1 && m3 >= m2 {
            [(b * e - c * d) / det3, (b * c - a * e) / det3, 1.0]
        } else if m1 >= m2 {
            [1.0, (c * e - b * f) / det1, (b * e - c * d) / det1]
        } else {
            [(c * e - b * f) / det2, 1.0, (b * c - a * e) / det2]
        };
        normalize(&v)
    }

    /// Retries the decomposition with refinement and a widened multiplicity tolerance
    fn fallback(&self, vp: &[f64; 3], depth: usize) -> Option<([f64; 3], Columns)> {
        if depth >= self.max_fallback_depth {
            warn!(depth, "eigenvector construction failed: all minors are degenerate");
            return None;
        }
        debug!(depth, ?vp, "degenerate minors; retrying the eigen decomposition");
        let retry = self.eigen_values(true);
        let (retry, columns) = self.eigen_vectors(&retry, depth + 1)?;

        // match each requested eigenvalue with the closest retried one
        let mut used = [false; 3];
        let mut values = [0.0; 3];
        let mut res = [[0.0; 3]; 3];
        for k in 0..3 {
            let mut best = 3;
            for j in 0..3 {
                if !used[j] && (best == 3 || f64::abs(retry[j] - vp[k]) < f64::abs(retry[best] - vp[k])) {
                    best = j;
                }
            }
            used[best] = true;
            values[k] = retry[best];
            res[k] = columns[best];
        }
        Some((values, res))
    }
}

/// Returns the index of the root farthest from the other two
fn isolated_root(x: &[f64; 3]) -> usize {
    let dist = [
        f64::min(f64::abs(x[0] - x[1]), f64::abs(x[0] - x[2])),
        f64::min(f64::abs(x[1] - x[0]), f64::abs(x[1] - x[2])),
        f64::min(f64::abs(x[2] - x[0]), f64::abs(x[2] - x[1])),
    ];
    if dist[0] >= dist[1] && dist[0] >= dist[2] {
        0
    } else if dist[1] >= dist[2] {
        1
    } else {
        2
    }
}

/// Returns the smallest distance between two roots
fn min_gap(x: &[f64; 3]) -> f64 {
    f64::abs(x[0] - x[1]).min(f64::abs(x[0] - x[2])).min(f64::abs(x[1] - x[2]))
}

fn other_slots(k: usize) -> (usize, usize) {
    match k {
        0 => (1, 2),
        1 => (0, 2),
        _ => (0, 1),
    }
}

/// Returns `uᵀ·m·v`
fn quadratic_form(m: &[[f64; 3]; 3], u: &[f64; 3], v: &[f64; 3]) -> f64 {
    let mut res = 0.0;
    for i in 0..3 {
        for j in 0..3 {
            res += u[i] * m[i][j] * v[j];
        }
    }
    res
}

/// Returns a unit vector perpendicular to x
///
/// The coordinate axis along the smallest component of x is projected onto the plane
/// normal to x. A null x yields the first coordinate axis.
pub(crate) fn find_perpendicular_vector(x: &[f64; 3]) -> [f64; 3] {
    let norm2_x = dot(x, x);
    if norm2_x < 100.0 * MIN_POSITIVE {
        return [1.0, 0.0, 0.0];
    }
    let (ax0, ax1, ax2) = (f64::abs(x[0]), f64::abs(x[1]), f64::abs(x[2]));
    let m = if ax0 < ax1 {
        if ax0 < ax2 {
            0
        } else {
            2
        }
    } else if ax1 < ax2 {
        1
    } else {
        2
    };
    let mut y = [-x[m] * x[0] / norm2_x, -x[m] * x[1] / norm2_x, -x[m] * x[2] / norm2_x];
    y[m] += 1.0;
    normalize(&y).unwrap_or([1.0, 0.0, 0.0])
}

fn identity() -> [[f64; 3]; 3] {
    [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
}

/// Converts three column vectors into the matrix whose columns they are
fn to_matrix(cols: &Columns) -> [[f64; 3]; 3] {
    let mut m = [[0.0; 3]; 3];
    for i in 0..3 {
        for k in 0..3 {
            m[i][k] = cols[k][i];
        }
    }
    m
}

fn dot(u: &[f64; 3], v: &[f64; 3]) -> f64 {
    u[0] * v[0] + u[1] * v[1] + u[2] * v[2]
}

fn cross(u: &[f64; 3], v: &[f64; 3]) -> [f64; 3] {
    [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ]
}

fn normalize(v: &[f64; 3]) -> Option<[f64; 3]> {
    let norm = f64::sqrt(dot(v, v));
    if norm < 100.0 * MIN_POSITIVE {
        return None;
    }
    Some([v[0] / norm, v[1] / norm, v[2] / norm])
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{decompose_3d, find_perpendicular_vector, NormalizedTensor};
    use crate::algebra::{mat3_mul, mat3_transpose, Stensor};
    use crate::base::{Settings, SQRT_2};
    use crate::eigen::{is_orthonormal, verify_eigen_pairs};
    use russell_lab::{approx_eq, array_approx_eq};

    #[test]
    fn distinct_diagonal_works() {
        let s = Stensor::<3>::new([1.0, 2.0, 3.0, 0.0, 0.0, 0.0]);
        let res = decompose_3d(&s, true, &Settings::new());
        let v = res.vectors.unwrap();
        assert!(is_orthonormal(&v, 1e-14));
        // each eigenvector is a signed canonical axis matching its eigenvalue
        for k in 0..3 {
            let axis = (res.values[k] - 1.0).round() as usize;
            approx_eq(f64::abs(v[axis][k]), 1.0, 1e-14);
        }
        let mut values = res.values.to_vec();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap());
        array_approx_eq(&values, &[1.0, 2.0, 3.0], 1e-14);
    }

    #[test]
    fn double_eigenvalue_works() {
        let s = Stensor::<3>::new([1.0, 1.0, 3.0, 0.0, 0.0, 0.0]);
        let res = decompose_3d(&s, true, &Settings::new());
        let v = res.vectors.unwrap();
        assert!(is_orthonormal(&v, 1e-14));
        let single = (0..3).find(|k| f64::abs(res.values[*k] - 3.0) < 1e-13).unwrap();
        approx_eq(f64::abs(v[2][single]), 1.0, 1e-14);
        for k in 0..3 {
            if k != single {
                approx_eq(res.values[k], 1.0, 1e-14);
                approx_eq(v[2][k], 0.0, 1e-14);
            }
        }
    }

    #[test]
    fn triple_eigenvalue_works() {
        let s = Stensor::<3>::new([-4.5, -4.5, -4.5, 0.0, 0.0, 0.0]);
        let res = decompose_3d(&s, true, &Settings::new());
        array_approx_eq(&res.values, &[-4.5, -4.5, -4.5], 1e-15);
        assert!(is_orthonormal(&res.vectors.unwrap(), 1e-15));

        let res = decompose_3d(&Stensor::<3>::zero(), false, &Settings::new());
        assert_eq!(res.values, [0.0, 0.0, 0.0]);
        assert_eq!(res.vectors, None);
    }

    #[test]
    fn full_tensor_works() {
        // eigenvalues of [[2,1,0],[1,2,0],[0,0,5]] are 1, 3, 5
        let s = Stensor::<3>::new([2.0, 2.0, 5.0, SQRT_2, 0.0, 0.0]);
        let res = decompose_3d(&s, true, &Settings::new());
        let mut values = res.values.to_vec();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap());
        array_approx_eq(&values, &[1.0, 3.0, 5.0], 1e-14);
        assert!(is_orthonormal(&res.vectors.unwrap(), 1e-14));
    }

    #[test]
    fn fallback_recovers_degenerate_minors() {
        // normalized diag(1, 1, 3) with a wrong request for the third eigenvalue
        let normalized = NormalizedTensor {
            n: [-0.5, -0.5, 1.0, 0.0, 0.0, 0.0],
            max_fallback_depth: 2,
        };
        let vp = [1.0, -0.5, 0.3];
        assert_eq!(normalized.minor_vector(-0.5), None);
        let (values, cols) = normalized.eigen_vectors(&vp, 0).unwrap();
        array_approx_eq(&values, &[1.0, -0.5, -0.5], 1e-15);
        approx_eq(f64::abs(cols[0][2]), 1.0, 1e-15);
        approx_eq(cols[1][2], 0.0, 1e-15);
        approx_eq(cols[2][2], 0.0, 1e-15);

        // no retry allowed
        let normalized = NormalizedTensor {
            n: [-0.5, -0.5, 1.0, 0.0, 0.0, 0.0],
            max_fallback_depth: 0,
        };
        assert_eq!(normalized.eigen_vectors(&vp, 0), None);
    }

    // Returns R·diag(values)·Rᵀ with R a rotation of 30° about x followed by 45° about z
    fn rotated(values: [f64; 3]) -> Stensor<3> {
        let (sx, cx) = f64::sin_cos(std::f64::consts::PI / 6.0);
        let (sz, cz) = f64::sin_cos(std::f64::consts::PI / 4.0);
        let rx = [[1.0, 0.0, 0.0], [0.0, cx, -sx], [0.0, sx, cx]];
        let rz = [[cz, -sz, 0.0], [sz, cz, 0.0], [0.0, 0.0, 1.0]];
        let r = mat3_mul(&rz, &rx);
        let mut d = [[0.0; 3]; 3];
        for k in 0..3 {
            d[k][k] = values[k];
        }
        Stensor::<3>::from_matrix(&mat3_mul(&mat3_mul(&r, &d), &mat3_transpose(&r)))
    }

    #[test]
    fn rotated_double_eigenvalue_works() {
        for values in [[1.0, 1.0, 3.0], [0.0, 0.0, 1.0], [-2.0, 1.0, 1.0]] {
            let s = rotated(values);
            let res = decompose_3d(&s, true, &Settings::new());
            approx_eq(res.values[0] + res.values[1] + res.values[2], s.trace(), 1e-14);
            let mut sorted = res.values.to_vec();
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
            let mut expected = values.to_vec();
            expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
            array_approx_eq(&sorted, &expected, 1e-14);
            assert!(is_orthonormal(&res.vectors.unwrap(), 1e-14));
            assert!(verify_eigen_pairs(&s, &res, 1e-13));

            // without eigenvectors, the pair is rebuilt from the deflated quadratic
            let res = decompose_3d(&s, false, &Settings::new());
            approx_eq(res.values[0] + res.values[1] + res.values[2], s.trace(), 1e-14);
        }
    }

    #[test]
    fn rotated_close_eigenvalues_work() {
        for delta in [1e-8, 1e-12] {
            let s = rotated([1.0, 1.0 + delta, 3.0]);
            let res = decompose_3d(&s, true, &Settings::new());
            approx_eq(res.values[0] + res.values[1] + res.values[2], s.trace(), 1e-14);
            assert!(is_orthonormal(&res.vectors.unwrap(), 1e-14));
            assert!(verify_eigen_pairs(&s, &res, 1e-13));
        }
    }

    #[test]
    fn find_perpendicular_vector_works() {
        let cases = [[1.0, 0.0, 0.0], [0.0, 0.0, 2.0], [0.3, -0.4, 0.5], [1.0, 1.0, 1.0]];
        for x in &cases {
            let y = find_perpendicular_vector(x);
            approx_eq(y[0] * x[0] + y[1] * x[1] + y[2] * x[2], 0.0, 1e-15);
            approx_eq(y[0] * y[0] + y[1] * y[1] + y[2] * y[2], 1.0, 1e-15);
        }
        assert_eq!(find_perpendicular_vector(&[0.0, 0.0, 0.0]), [1.0, 0.0, 0.0]);
    }
}
