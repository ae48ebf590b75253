//! Closed-form identities relating the conventions of the finite strain tangent operator
//!
//! Every function works on the full-index representation of the operators, so the same
//! formula serves the three space dimensions: components that a space dimension cannot
//! represent are zero in the inputs and are dropped from the outputs.
//!
//! Notation: `F` is the deformation gradient, `iF = F⁻¹`, `J = det(F)`, `σ` the Cauchy
//! stress, `τ = J·σ` the Kirchhoff stress, `S` the second Piola-Kirchhoff stress and
//! `P = τ·F⁻ᵀ` the first Piola-Kirchhoff stress.

use crate::algebra::{delta, mat3_inverse, mat3_mul, mat3_transpose, Full4, Matrix3};
use crate::algebra::{St2toSt2, Stensor, T2toSt2, T2toT2, Tensor};

/// Allocates a full-index array by evaluating `f(i, j, k, l)`
fn full4_from_fn<F>(f: F) -> Full4
where
    F: Fn(usize, usize, usize, usize) -> f64,
{
    let mut res = [[[[0.0; 3]; 3]; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                for l in 0..3 {
                    res[i][j][k][l] = f(i, j, k, l);
                }
            }
        }
    }
    res
}

/// Returns `r_ijkl = Σ m_iI m_jJ m_kK m_lL a_IJKL` (four successive single contractions)
fn full4_transform(a: &Full4, m: &Matrix3) -> Full4 {
    let t1 = full4_from_fn(|i, j, k, l| (0..3).map(|p| m[i][p] * a[p][j][k][l]).sum());
    let t2 = full4_from_fn(|i, j, k, l| (0..3).map(|p| m[j][p] * t1[i][p][k][l]).sum());
    let t3 = full4_from_fn(|i, j, k, l| (0..3).map(|p| m[k][p] * t2[i][j][p][l]).sum());
    full4_from_fn(|i, j, k, l| (0..3).map(|p| m[l][p] * t3[i][j][k][p]).sum())
}

/// Returns the geometric term relating the Jaumann rate of τ and the Truesdell rate of τ
///
/// ```text
/// ½·(δ_ik·τ_jl + δ_il·τ_jk + τ_ik·δ_jl + τ_il·δ_jk)
/// ```
fn jaumann_correction(tau: &Matrix3) -> Full4 {
    full4_from_fn(|i, j, k, l| {
        0.5 * (delta(i, k) * tau[j][l] + delta(i, l) * tau[j][k] + tau[i][k] * delta(j, l) + tau[i][l] * delta(j, k))
    })
}

/// Converts the spatial moduli into the moduli associated with the Jaumann rate of the Kirchhoff stress
pub fn spatial_moduli_to_jaumann<const N: usize>(c: &St2toSt2<N>, tau: &Stensor<N>) -> St2toSt2<N> {
    let cc = c.to_full();
    let g = jaumann_correction(&tau.to_matrix());
    St2toSt2::from_full(&full4_from_fn(|i, j, k, l| cc[i][j][k][l] + g[i][j][k][l]))
}

/// Converts the moduli associated with the Jaumann rate of the Kirchhoff stress into the spatial moduli
pub fn jaumann_to_spatial_moduli<const N: usize>(cj: &St2toSt2<N>, tau: &Stensor<N>) -> St2toSt2<N> {
    let cc = cj.to_full();
    let g = jaumann_correction(&tau.to_matrix());
    St2toSt2::from_full(&full4_from_fn(|i, j, k, l| cc[i][j][k][l] - g[i][j][k][l]))
}

/// Converts the Jaumann rate moduli of τ into the derivative of τ with respect to F
///
/// With the velocity gradient `L = Ḟ·iF`, the rate of τ reads `τ̇ = Cᴶ:L + W·τ - τ·W`,
/// where W is the skew part of L. Hence:
///
/// ```text
/// ∂τ_ij/∂F_kl = Σ_b (Cᴶ_ijkb + G_ijkb)·iF_lb
/// G_ijab = ½·(δ_ia·τ_bj - δ_ib·τ_aj - τ_ia·δ_jb + τ_ib·δ_ja)
/// ```
pub fn jaumann_to_dtau_df<const N: usize>(cj: &St2toSt2<N>, f: &Tensor<N>, tau: &Stensor<N>) -> T2toSt2<N> {
    let cc = cj.to_full();
    let t = tau.to_matrix();
    let inv_f = mat3_inverse(&f.to_matrix());
    let a = full4_from_fn(|i, j, k, b| {
        let g = delta(i, k) * t[b][j] - delta(i, b) * t[k][j] - t[i][k] * delta(j, b) + t[i][b] * delta(j, k);
        cc[i][j][k][b] + 0.5 * g
    });
    T2toSt2::from_full(&full4_from_fn(|i, j, k, l| {
        (0..3).map(|b| a[i][j][k][b] * inv_f[l][b]).sum()
    }))
}

/// Converts the derivative of τ with respect to F into the Jaumann rate moduli of τ
///
/// The spin term is skew-symmetric in (k,l) and vanishes in the symmetric part of
/// `Σ_m ∂τ_ij/∂F_km·F_lm`.
pub fn dtau_df_to_jaumann<const N: usize>(k: &T2toSt2<N>, f: &Tensor<N>) -> St2toSt2<N> {
    let dd = k.to_full();
    let ff = f.to_matrix();
    St2toSt2::from_full(&full4_from_fn(|i, j, k, l| {
        (0..3).map(|m| dd[i][j][k][m] * ff[l][m]).sum()
    }))
}

/// Converts the derivative of τ with respect to F into the derivative of σ with respect to F
///
/// ```text
/// ∂σ_ij/∂F_kl = ∂τ_ij/∂F_kl / J - σ_ij·iF_lk
/// ```
pub fn dtau_df_to_dsig_df<const N: usize>(k: &T2toSt2<N>, f: &Tensor<N>, sig: &Stensor<N>) -> T2toSt2<N> {
    let dd = k.to_full();
    let ff = f.to_matrix();
    let jj = f.det();
    let inv_f = mat3_inverse(&ff);
    let s = sig.to_matrix();
    T2toSt2::from_full(&full4_from_fn(|i, j, k, l| dd[i][j][k][l] / jj - s[i][j] * inv_f[l][k]))
}

/// Converts the derivative of σ with respect to F into the derivative of τ with respect to F
pub fn dsig_df_to_dtau_df<const N: usize>(k: &T2toSt2<N>, f: &Tensor<N>, sig: &Stensor<N>) -> T2toSt2<N> {
    let dd = k.to_full();
    let ff = f.to_matrix();
    let jj = f.det();
    let inv_f = mat3_inverse(&ff);
    let s = sig.to_matrix();
    T2toSt2::from_full(&full4_from_fn(|i, j, k, l| jj * (dd[i][j][k][l] + s[i][j] * inv_f[l][k])))
}

/// Converts the derivative of τ with respect to F into the derivative of P with respect to F
///
/// ```text
/// ∂P_iJ/∂F_mn = Σ_k ∂τ_ik/∂F_mn·iF_Jk - Σ_k τ_ik·iF_Jm·iF_nk
/// ```
pub fn dtau_df_to_dpk1_df<const N: usize>(k: &T2toSt2<N>, f: &Tensor<N>, tau: &Stensor<N>) -> T2toT2<N> {
    let dd = k.to_full();
    let inv_f = mat3_inverse(&f.to_matrix());
    let t = tau.to_matrix();
    T2toT2::from_full(&full4_from_fn(|i, jj, m, n| {
        (0..3)
            .map(|k| dd[i][k][m][n] * inv_f[jj][k] - t[i][k] * inv_f[jj][m] * inv_f[n][k])
            .sum()
    }))
}

/// Converts the derivative of P with respect to F into the derivative of τ with respect to F
///
/// ```text
/// ∂τ_ij/∂F_mn = Σ_K ∂P_iK/∂F_mn·F_jK + P_in·δ_jm
/// ```
pub fn dpk1_df_to_dtau_df<const N: usize>(d: &T2toT2<N>, f: &Tensor<N>, tau: &Stensor<N>) -> T2toSt2<N> {
    let dd = d.to_full();
    let ff = f.to_matrix();
    let p = mat3_mul(&tau.to_matrix(), &mat3_transpose(&mat3_inverse(&ff)));
    T2toSt2::from_full(&full4_from_fn(|i, j, m, n| {
        let sum: f64 = (0..3).map(|kk| dd[i][kk][m][n] * ff[j][kk]).sum();
        sum + p[i][n] * delta(j, m)
    }))
}

/// Pulls the spatial moduli back to the derivative of S with respect to E
///
/// ```text
/// ∂S_IJ/∂E_KL = iF_Ii·iF_Jj·iF_Kk·iF_Ll·c_ijkl
/// ```
pub fn pull_back_moduli<const N: usize>(c: &St2toSt2<N>, f: &Tensor<N>) -> St2toSt2<N> {
    let inv_f = mat3_inverse(&f.to_matrix());
    St2toSt2::from_full(&full4_transform(&c.to_full(), &inv_f))
}

/// Pushes the derivative of S with respect to E forward to the spatial moduli
///
/// ```text
/// c_ijkl = F_iI·F_jJ·F_kK·F_lL·∂S_IJ/∂E_KL
/// ```
pub fn push_forward_moduli<const N: usize>(dd: &St2toSt2<N>, f: &Tensor<N>) -> St2toSt2<N> {
    St2toSt2::from_full(&full4_transform(&dd.to_full(), &f.to_matrix()))
}

/// Converts the derivative of τ with respect to F into the derivative of S with respect to F
///
/// ```text
/// ∂S_IJ/∂F_kl = Σ_ij iF_Ii·iF_Jj·∂τ_ij/∂F_kl - iF_Ik·S_lJ - S_Il·iF_Jk
/// ```
pub fn dtau_df_to_ds_df<const N: usize>(k: &T2toSt2<N>, f: &Tensor<N>, tau: &Stensor<N>) -> T2toSt2<N> {
    let dd = k.to_full();
    let inv_f = mat3_inverse(&f.to_matrix());
    let s = mat3_mul(&mat3_mul(&inv_f, &tau.to_matrix()), &mat3_transpose(&inv_f));
    let t1 = full4_from_fn(|ii, j, k, l| (0..3).map(|i| inv_f[ii][i] * dd[i][j][k][l]).sum());
    T2toSt2::from_full(&full4_from_fn(|ii, jj, k, l| {
        let sum: f64 = (0..3).map(|j| inv_f[jj][j] * t1[ii][j][k][l]).sum();
        sum - inv_f[ii][k] * s[l][jj] - s[ii][l] * inv_f[jj][k]
    }))
}

/// Converts the derivative of S with respect to F into the derivative of τ with respect to F
///
/// ```text
/// ∂τ_ij/∂F_kl = Σ_IJ F_iI·F_jJ·∂S_IJ/∂F_kl + δ_ik·(S·Fᵀ)_lj + δ_jk·(F·S)_il
/// ```
pub fn ds_df_to_dtau_df<const N: usize>(k: &T2toSt2<N>, f: &Tensor<N>, tau: &Stensor<N>) -> T2toSt2<N> {
    let dd = k.to_full();
    let ff = f.to_matrix();
    let inv_f = mat3_inverse(&ff);
    let s = mat3_mul(&mat3_mul(&inv_f, &tau.to_matrix()), &mat3_transpose(&inv_f));
    let s_ft = mat3_mul(&s, &mat3_transpose(&ff));
    let f_s = mat3_mul(&ff, &s);
    let t1 = full4_from_fn(|i, jj, k, l| (0..3).map(|ii| ff[i][ii] * dd[ii][jj][k][l]).sum());
    T2toSt2::from_full(&full4_from_fn(|i, j, k, l| {
        let sum: f64 = (0..3).map(|jj| ff[j][jj] * t1[i][jj][k][l]).sum();
        sum + delta(i, k) * s_ft[l][j] + delta(j, k) * f_s[i][l]
    }))
}

/// Converts a derivative with respect to F₁ into a derivative with respect to ΔF (F₁ = ΔF·F₀)
///
/// ```text
/// ∂X/∂ΔF_kl = Σ_b ∂X/∂F₁_kb·F₀_lb
/// ```
pub fn df_to_ddf<const N: usize>(k: &T2toSt2<N>, f0: &Tensor<N>) -> T2toSt2<N> {
    let dd = k.to_full();
    let ff0 = f0.to_matrix();
    T2toSt2::from_full(&full4_from_fn(|i, j, k, l| {
        (0..3).map(|b| dd[i][j][k][b] * ff0[l][b]).sum()
    }))
}

/// Converts a derivative with respect to ΔF into a derivative with respect to F₁ (F₁ = ΔF·F₀)
///
/// ```text
/// ∂X/∂F₁_kb = Σ_l ∂X/∂ΔF_kl·iF₀_bl
/// ```
pub fn ddf_to_df<const N: usize>(k: &T2toSt2<N>, f0: &Tensor<N>) -> T2toSt2<N> {
    let dd = k.to_full();
    let inv_f0 = mat3_inverse(&f0.to_matrix());
    T2toSt2::from_full(&full4_from_fn(|i, j, k, b| {
        (0..3).map(|l| dd[i][j][k][l] * inv_f0[b][l]).sum()
    }))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
