use mechtensor::algebra::{mat3_det, mat3_inverse};
use mechtensor::prelude::*;
use mechtensor::StrError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use russell_lab::approx_eq;

// Compares the tangent operators obtained by conversion of the spatial moduli of a
// neo-Hookean material with central finite differences of the corresponding stresses.
//
// Young's modulus E = 2.5 and Poisson's coefficient ν = 0.25, thus μ = 1 and λ = 1
//
// The deformation gradients are F = I and two random perturbations of I.

const YOUNG: f64 = 2.5;
const POISSON: f64 = 0.25;
const STEP: f64 = 1e-5;
const TOL: f64 = 1e-9; // multiplied by μ

// the third derivatives of S are one order of magnitude larger than those of τ, σ and P
const TOL_MATERIAL: f64 = 1e-8; // multiplied by μ

fn random_deformation_gradient<const N: usize>(rng: &mut StdRng) -> Tensor<N> {
    let mut f = Tensor::<N>::identity();
    for b in 0..Tensor::<N>::SIZE {
        f[b] += rng.gen_range(-0.05..0.05);
    }
    f
}

fn deformation_gradients<const N: usize>(seed: u64) -> Vec<Tensor<N>> {
    let mut rng = StdRng::seed_from_u64(seed);
    vec![
        Tensor::<N>::identity(),
        random_deformation_gradient(&mut rng),
        random_deformation_gradient(&mut rng),
    ]
}

// Returns the central difference of a symmetric-tensor-valued function of a general tensor
fn numerical_t2tost2<const N: usize, G>(f: &Tensor<N>, g: G) -> T2toSt2<N>
where
    G: Fn(&Tensor<N>) -> Stensor<N>,
{
    let mut res = T2toSt2::<N>::zero();
    for b in 0..Tensor::<N>::SIZE {
        let mut fp = *f;
        let mut fm = *f;
        fp[b] += STEP;
        fm[b] -= STEP;
        let dg = (g(&fp) - g(&fm)) / (2.0 * STEP);
        for a in 0..Stensor::<N>::SIZE {
            res[(a, b)] = dg[a];
        }
    }
    res
}

// Returns the central difference of a general-tensor-valued function of a general tensor
fn numerical_t2tot2<const N: usize, G>(f: &Tensor<N>, g: G) -> T2toT2<N>
where
    G: Fn(&Tensor<N>) -> Tensor<N>,
{
    let mut res = T2toT2::<N>::zero();
    for b in 0..Tensor::<N>::SIZE {
        let mut fp = *f;
        let mut fm = *f;
        fp[b] += STEP;
        fm[b] -= STEP;
        let dg = (g(&fp) - g(&fm)) / (2.0 * STEP);
        for a in 0..Tensor::<N>::SIZE {
            res[(a, b)] = dg[a];
        }
    }
    res
}

// Returns the central difference of a symmetric-tensor-valued function of a symmetric tensor
fn numerical_st2tost2<const N: usize, G>(e: &Stensor<N>, g: G) -> St2toSt2<N>
where
    G: Fn(&Stensor<N>) -> Stensor<N>,
{
    let mut res = St2toSt2::<N>::zero();
    for b in 0..Stensor::<N>::SIZE {
        let mut ep = *e;
        let mut em = *e;
        ep[b] += STEP;
        em[b] -= STEP;
        let dg = (g(&ep) - g(&em)) / (2.0 * STEP);
        for a in 0..Stensor::<N>::SIZE {
            res[(a, b)] = dg[a];
        }
    }
    res
}

// Returns the second Piola-Kirchhoff stress as a function of the right Cauchy-Green tensor
fn pk2_from_right_cauchy_green<const N: usize>(model: &NeoHookean, c: &Stensor<N>) -> Stensor<N> {
    let cc = c.to_matrix();
    let ln_j = 0.5 * f64::ln(mat3_det(&cc));
    let inv_c = Stensor::<N>::from_matrix(&mat3_inverse(&cc));
    (Stensor::identity() - inv_c) * model.mu + inv_c * (model.lambda * ln_j)
}

fn check_t2tost2<const N: usize>(name: &str, ana: &T2toSt2<N>, num: &T2toSt2<N>, tol: f64) {
    for a in 0..T2toSt2::<N>::NROW {
        for b in 0..T2toSt2::<N>::NCOL {
            if f64::abs(ana[(a, b)] - num[(a, b)]) > tol {
                println!("{}: mismatch at ({}, {})", name, a, b);
            }
            approx_eq(ana[(a, b)], num[(a, b)], tol);
        }
    }
}

fn check_t2tot2<const N: usize>(name: &str, ana: &T2toT2<N>, num: &T2toT2<N>, tol: f64) {
    for a in 0..T2toT2::<N>::NROW {
        for b in 0..T2toT2::<N>::NCOL {
            if f64::abs(ana[(a, b)] - num[(a, b)]) > tol {
                println!("{}: mismatch at ({}, {})", name, a, b);
            }
            approx_eq(ana[(a, b)], num[(a, b)], tol);
        }
    }
}

fn check_st2tost2<const N: usize>(name: &str, ana: &St2toSt2<N>, num: &St2toSt2<N>, tol: f64) {
    for a in 0..St2toSt2::<N>::NROW {
        for b in 0..St2toSt2::<N>::NCOL {
            if f64::abs(ana[(a, b)] - num[(a, b)]) > tol {
                println!("{}: mismatch at ({}, {})", name, a, b);
            }
            approx_eq(ana[(a, b)], num[(a, b)], tol);
        }
    }
}

fn run_conversion_chain<const N: usize>(seed: u64) -> Result<(), StrError> {
    let model = NeoHookean::from_young_poisson(YOUNG, POISSON)?;
    let tol = TOL * model.mu;
    let f0 = Tensor::<N>::identity();
    for f in deformation_gradients::<N>(seed) {
        let sig = model.cauchy_stress(&f);
        let state = ConversionState::new(&f0, &f, &sig);

        // SPATIAL_MODULI → C_TAU_JAUMANN → DTAU_DF → DSIG_DF → DPK1_DF
        let spatial = TangentOperator::from_st2tost2(TangentOperatorKind::SpatialModuli, model.spatial_moduli(&f))?;
        let jaumann = spatial.convert(TangentOperatorKind::CTauJaumann, &state)?;
        let dtau_df = jaumann.convert(TangentOperatorKind::DtauDf, &state)?;
        let dsig_df = dtau_df.convert(TangentOperatorKind::DsigDf, &state)?;
        let dpk1_df = dsig_df.convert(TangentOperatorKind::DPk1Df, &state)?;

        let num = numerical_t2tost2(&f, |ff| model.kirchhoff_stress(ff));
        check_t2tost2("DTAU_DF", dtau_df.as_t2tost2().unwrap(), &num, tol);

        let num = numerical_t2tost2(&f, |ff| model.cauchy_stress(ff));
        check_t2tost2("DSIG_DF", dsig_df.as_t2tost2().unwrap(), &num, tol);

        let num = numerical_t2tot2(&f, |ff| model.cauchy_stress(ff).cauchy_to_pk1(ff));
        check_t2tot2("DPK1_DF", dpk1_df.as_t2tot2().unwrap(), &num, tol);
    }
    Ok(())
}

fn run_material_derivatives<const N: usize>(seed: u64) -> Result<(), StrError> {
    let model = NeoHookean::from_young_poisson(YOUNG, POISSON)?;
    let tol = TOL_MATERIAL * model.mu;
    let mut rng = StdRng::seed_from_u64(seed + 1);
    let f0 = random_deformation_gradient::<N>(&mut rng);
    for f in deformation_gradients::<N>(seed) {
        let sig = model.cauchy_stress(&f);
        let state = ConversionState::new(&f0, &f, &sig);
        let spatial = TangentOperator::from_st2tost2(TangentOperatorKind::SpatialModuli, model.spatial_moduli(&f))?;

        // ∂S/∂E and ∂S/∂C
        let e = f.green_lagrange();
        let num = numerical_st2tost2(&e, |ee| {
            let c = Stensor::<N>::identity() + *ee * 2.0;
            pk2_from_right_cauchy_green(&model, &c)
        });
        let ds_degl = spatial.convert(TangentOperatorKind::DsDegl, &state)?;
        check_st2tost2("DS_DEGL", ds_degl.as_st2tost2().unwrap(), &num, tol);

        let c = f.right_cauchy_green();
        let num = numerical_st2tost2(&c, |cc| pk2_from_right_cauchy_green(&model, cc));
        let ds_dc = spatial.convert(TangentOperatorKind::DsDc, &state)?;
        check_st2tost2("DS_DC", ds_dc.as_st2tost2().unwrap(), &num, tol);

        // ∂S/∂F
        let num = numerical_t2tost2(&f, |ff| model.pk2_stress(ff));
        let ds_df = spatial.convert(TangentOperatorKind::DsDf, &state)?;
        check_t2tost2("DS_DF", ds_df.as_t2tost2().unwrap(), &num, tol);

        // derivatives with respect to ΔF = F·F₀⁻¹
        let df = f.dot(&f0.inverse());
        let num = numerical_t2tost2(&df, |ddf| model.kirchhoff_stress(&ddf.dot(&f0)));
        let dtau_ddf = spatial.convert(TangentOperatorKind::DtauDdf, &state)?;
        check_t2tost2("DTAU_DDF", dtau_ddf.as_t2tost2().unwrap(), &num, tol);

        let num = numerical_t2tost2(&df, |ddf| model.cauchy_stress(&ddf.dot(&f0)));
        let dsig_ddf = spatial.convert(TangentOperatorKind::DsigDdf, &state)?;
        check_t2tost2("DSIG_DDF", dsig_ddf.as_t2tost2().unwrap(), &num, tol);

        let num = numerical_t2tost2(&df, |ddf| model.pk2_stress(&ddf.dot(&f0)));
        let ds_ddf = spatial.convert(TangentOperatorKind::DsDdf, &state)?;
        check_t2tost2("DS_DDF", ds_ddf.as_t2tost2().unwrap(), &num, tol);
    }
    Ok(())
}

#[test]
fn test_tangent_neo_hookean_chain_1d() -> Result<(), StrError> {
    run_conversion_chain::<1>(101)
}

#[test]
fn test_tangent_neo_hookean_chain_2d() -> Result<(), StrError> {
    run_conversion_chain::<2>(202)
}

#[test]
fn test_tangent_neo_hookean_chain_3d() -> Result<(), StrError> {
    run_conversion_chain::<3>(303)
}

#[test]
fn test_tangent_neo_hookean_material_derivatives_1d() -> Result<(), StrError> {
    run_material_derivatives::<1>(111)
}

#[test]
fn test_tangent_neo_hookean_material_derivatives_2d() -> Result<(), StrError> {
    run_material_derivatives::<2>(222)
}

#[test]
fn test_tangent_neo_hookean_material_derivatives_3d() -> Result<(), StrError> {
    run_material_derivatives::<3>(333)
}
