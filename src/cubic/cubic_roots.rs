use crate::base::{CUBIC_MAX_NEWTON_ITERATIONS, CUBIC_PREC, EPSILON, MIN_POSITIVE, ONE_BY_3, SQRT_3};

/// Holds the real roots of `a3·x³ + a2·x² + a1·x + a0 = 0`
///
/// The meaning of the slots depends on `count`:
///
/// * `count = 0` -- the leading coefficient is degenerate; no root was computed
/// * `count = 1` -- only `roots[0]` is a real root; `roots[1]` and `roots[2]` hold the real
///   part of the complex-conjugate pair (or copies of the single root)
/// * `count = 3` -- all three slots are real roots (possibly repeated)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicRoots {
    /// Number of meaningful real roots (0, 1 or 3)
    pub count: usize,

    /// The root values (see the struct documentation)
    pub roots: [f64; 3],
}

impl CubicRoots {
    /// Solves the cubic equation in closed form (Cardan and Viète formulas)
    ///
    /// The quadratic term is removed by the shift `x = y - a2/(3·a3)` leading to the
    /// depressed cubic `y³ + p·y + q = 0`. Branches are selected with the tolerance
    /// [CUBIC_PREC] applied to `p`, `q` and the discriminant `Δ = -4p³ - 27q²`.
    ///
    /// If `|p| ≈ 0` and `q ≠ 0`, the three slots hold `∛(-q)` and `count = 1`; the
    /// repeated values are not validated as a genuine multiple root. If `|q| ≈ 0` and
    /// `p > 0`, the real root `0` (shifted back) fills the three slots with `count = 1`.
    pub fn find_roots(a3: f64, a2: f64, a1: f64, a0: f64) -> Self {
        let mut res = CubicRoots {
            count: 0,
            roots: [0.0; 3],
        };
        if f64::abs(a3) <= 100.0 * MIN_POSITIVE {
            return res;
        }

        // depressed cubic
        let b2 = a2 / a3;
        let b1 = a1 / a3;
        let b0 = a0 / a3;
        let sb2 = b2 * ONE_BY_3;
        let p = b1 - b2 * sb2;
        let q = b0 - b1 * sb2 + 2.0 * sb2 * sb2 * sb2;
        let prec = CUBIC_PREC;

        if f64::abs(p) < prec {
            if f64::abs(q) < prec {
                res.roots = [-sb2; 3];
                res.count = 3;
            } else {
                res.roots = [f64::cbrt(-q) - sb2; 3];
                res.count = 1;
            }
            return res;
        }

        if f64::abs(q) < prec {
            if p > 0.0 {
                res.roots = [-sb2; 3];
                res.count = 1;
            } else {
                let r = f64::sqrt(-p);
                res.roots = [-sb2, r - sb2, -r - sb2];
                res.count = 3;
            }
            return res;
        }

        let delta = -4.0 * p * p * p - 27.0 * q * q;

        if delta < -prec {
            // one real root and a complex-conjugate pair
            let tmp = f64::sqrt(-delta / 108.0);
            let u = f64::cbrt(-0.5 * q + tmp);
            let v = f64::cbrt(-0.5 * q - tmp);
            let real_pair = -0.5 * (u + v) - sb2;
            res.roots = [u + v - sb2, real_pair, real_pair];
            res.count = 1;
            // the imaginary part of the pair is √3/2·(u-v)
            if f64::abs(u - v) <= f64::max(prec * f64::abs(u + v), 100.0 * MIN_POSITIVE) {
                res.count = 3;
            }
            return res;
        }

        if delta <= prec {
            // double root
            let y1 = 3.0 * q / p;
            let y2 = -1.5 * q / p;
            res.roots = [y1 - sb2, y2 - sb2, y2 - sb2];
            res.count = 3;
            return res;
        }

        // three distinct real roots
        let re = -0.5 * q;
        let im = f64::sqrt(delta / 108.0);
        let rho = f64::sqrt(re * re + im * im);
        let theta = f64::atan2(im, re);
        let r = f64::cbrt(rho);
        let phi = theta * ONE_BY_3;
        let rc = r * f64::cos(phi);
        let rs = SQRT_3 * r * f64::sin(phi);
        res.roots = [2.0 * rc - sb2, -rc - rs - sb2, -rc + rs - sb2];
        res.count = 3;
        res
    }

    /// Solves the cubic equation and optionally polishes the roots with Newton iterations
    ///
    /// `roots[0]` is refined whenever a root was found; the other slots are refined only
    /// when `count = 3`. A refined value is kept only if it reduces `|f(x)|`.
    pub fn exe(a3: f64, a2: f64, a1: f64, a0: f64, refine: bool) -> Self {
        let mut res = CubicRoots::find_roots(a3, a2, a1, a0);
        if !refine || res.count == 0 {
            return res;
        }
        let coefficients = [a3, a2, a1, a0];
        res.roots[0] = refine_root(&coefficients, res.roots[0]);
        if res.count == 3 {
            res.roots[1] = refine_root(&coefficients, res.roots[1]);
            res.roots[2] = refine_root(&coefficients, res.roots[2]);
        }
        res
    }

    /// Returns the slots holding real roots
    pub fn real_roots(&self) -> &[f64] {
        match self.count {
            0 => &self.roots[..0],
            1 => &self.roots[..1],
            _ => &self.roots[..],
        }
    }
}

/// Evaluates the polynomial and its derivative at x
#[inline]
fn polynomial(c: &[f64; 4], x: f64) -> (f64, f64) {
    let f = ((c[0] * x + c[1]) * x + c[2]) * x + c[3];
    let df = (3.0 * c[0] * x + 2.0 * c[1]) * x + c[2];
    (f, df)
}

/// Polishes a root with Newton iterations
fn refine_root(c: &[f64; 4], x0: f64) -> f64 {
    let (f0, _) = polynomial(c, x0);
    let mut x = x0;
    for _ in 0..CUBIC_MAX_NEWTON_ITERATIONS {
        let (f, df) = polynomial(c, x);
        if f64::abs(df) < 100.0 * MIN_POSITIVE {
            break;
        }
        let dx = f / df;
        x -= dx;
        if f64::abs(dx) < 10.0 * f64::max(MIN_POSITIVE, f64::abs(x) * EPSILON) {
            break;
        }
    }
    let (f, _) = polynomial(c, x);
    if x.is_finite() && f64::abs(f) < f64::abs(f0) {
        x
    } else {
        x0
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
