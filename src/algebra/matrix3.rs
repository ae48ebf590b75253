//! Full-index (3×3 and 3×3×3×3) arrays used as scratch by the tensor identities

/// Holds a second-order tensor as a plain 3×3 matrix
pub type Matrix3 = [[f64; 3]; 3];

/// Holds a fourth-order tensor with all of its 81 components
pub type Full4 = [[[[f64; 3]; 3]; 3]; 3];

/// Returns the 3×3 zero matrix
pub fn mat3_zero() -> Matrix3 {
    [[0.0; 3]; 3]
}

/// Returns the 3×3 identity matrix
pub fn mat3_identity() -> Matrix3 {
    [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
}

/// Returns the Kronecker delta
#[inline]
pub fn delta(i: usize, j: usize) -> f64 {
    if i == j {
        1.0
    } else {
        0.0
    }
}

/// Returns a·b
pub fn mat3_mul(a: &Matrix3, b: &Matrix3) -> Matrix3 {
    let mut c = mat3_zero();
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                c[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    c
}

/// Returns aᵀ
pub fn mat3_transpose(a: &Matrix3) -> Matrix3 {
    let mut c = mat3_zero();
    for i in 0..3 {
        for j in 0..3 {
            c[i][j] = a[j][i];
        }
    }
    c
}

/// Returns a·v
pub fn mat3_mul_vec(a: &Matrix3, v: &[f64; 3]) -> [f64; 3] {
    let mut u = [0.0; 3];
    for i in 0..3 {
        for j in 0..3 {
            u[i] += a[i][j] * v[j];
        }
    }
    u
}

/// Returns the determinant
pub fn mat3_det(a: &Matrix3) -> f64 {
    a[0][0] * (a[1][1] * a[2][2] - a[1][2] * a[2][1]) - a[0][1] * (a[1][0] * a[2][2] - a[1][2] * a[2][0])
        + a[0][2] * (a[1][0] * a[2][1] - a[1][1] * a[2][0])
}

/// Returns the inverse computed from the cofactors
///
/// The determinant is not checked; a singular matrix yields non-finite entries.
pub fn mat3_inverse(a: &Matrix3) -> Matrix3 {
    let det = mat3_det(a);
    [
        [
            (a[1][1] * a[2][2] - a[1][2] * a[2][1]) / det,
            (a[0][2] * a[2][1] - a[0][1] * a[2][2]) / det,
            (a[0][1] * a[1][2] - a[0][2] * a[1][1]) / det,
        ],
        [
            (a[1][2] * a[2][0] - a[1][0] * a[2][2]) / det,
            (a[0][0] * a[2][2] - a[0][2] * a[2][0]) / det,
            (a[0][2] * a[1][0] - a[0][0] * a[1][2]) / det,
        ],
        [
            (a[1][0] * a[2][1] - a[1][1] * a[2][0]) / det,
            (a[0][1] * a[2][0] - a[0][0] * a[2][1]) / det,
            (a[0][0] * a[1][1] - a[0][1] * a[1][0]) / det,
        ],
    ]
}

/// Returns the fourth-order zero tensor
pub fn full4_zero() -> Full4 {
    [[[[0.0; 3]; 3]; 3]; 3]
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
