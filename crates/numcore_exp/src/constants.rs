//! Per-precision constants: tolerances, the Taylor order, and the Padé
//! coefficient tables.
//!
//! Stable Rust has no portable 80-bit extended float, so `Extended` is
//! represented as a newtype-flavoured marker that computes in `f64` but
//! carries the original long-double Padé tables — those tables still
//! improve approximation quality even when the surrounding arithmetic is
//! `f64`. See `DESIGN.md` for the full rationale.

/// A floating-point precision tag supplying the constants the exponential
/// core needs: log2(e), ln(2), machine epsilon, the two convergence
/// tolerances derived from it, sqrt(2), and the Padé numerator/denominator
/// coefficient tables.
pub trait Precision {
    /// log2(e), rounded to this precision.
    const LOG2E: f64;
    /// ln(2), rounded to this precision.
    const LN2: f64;
    /// Machine epsilon for this precision.
    const EPS: f64;
    /// Taylor-series convergence tolerance: `10 * EPS`.
    const DELTA: f64 = 10.0 * Self::EPS;
    /// Range-reduction safety bound: `535 * EPS`.
    const BOUND: f64 = 535.0 * Self::EPS;
    /// sqrt(2), rounded to this precision.
    const SQRT2: f64;
    /// Padé numerator coefficients, highest-degree term first.
    const P_TERMS: &'static [f64];
    /// Padé denominator coefficients, highest-degree term first.
    const Q_TERMS: &'static [f64];
    /// Human-readable name, used in error messages and test output.
    const NAME: &'static str;
}

/// Single precision (`f32`-width constants, computed in `f64`).
pub struct Single;

impl Precision for Single {
    const LOG2E: f64 = std::f32::consts::LOG2_E as f64;
    const LN2: f64 = std::f32::consts::LN_2 as f64;
    const EPS: f64 = f32::EPSILON as f64;
    const SQRT2: f64 = std::f32::consts::SQRT_2 as f64;
    const P_TERMS: &'static [f64] = &[1., 25., 300., 2100., 8400., 15120.];
    const Q_TERMS: &'static [f64] = &[5., -120., 1260., -6720., 15120.];
    const NAME: &'static str = "single";
}

/// Double precision (`f64`).
pub struct Double;

impl Precision for Double {
    const LOG2E: f64 = std::f64::consts::LOG2_E;
    const LN2: f64 = std::f64::consts::LN_2;
    const EPS: f64 = f64::EPSILON;
    const SQRT2: f64 = std::f64::consts::SQRT_2;
    const P_TERMS: &'static [f64] = &[
        -1.0, -64.0, -2016.0, -40320.0, -554400.0, -5322240.0, -34594560.0, -138378240.0,
        -259459200.0,
    ];
    const Q_TERMS: &'static [f64] = &[
        8.0, -504.0, 15120.0, -277200.0, 3326400.0, -25945920.0, 121080960.0, -259459200.0,
    ];
    const NAME: &'static str = "double";
}

/// Extended precision. No native 80-bit float exists on stable Rust, so
/// this precision computes in `f64` while carrying the long-double Padé
/// tables and the long-double-width epsilon-derived tolerances scaled to
/// what `f64` can actually resolve.
pub struct Extended;

impl Precision for Extended {
    const LOG2E: f64 = std::f64::consts::LOG2_E;
    const LN2: f64 = std::f64::consts::LN_2;
    const EPS: f64 = f64::EPSILON;
    const SQRT2: f64 = std::f64::consts::SQRT_2;
    const P_TERMS: &'static [f64] = &[
        1.0, 81.0, 3240.0, 83160.0, 1496880.0, 19459440.0, 181621440.0, 1167566400.0,
        4670265600.0, 8821612800.0,
    ];
    const Q_TERMS: &'static [f64] = &[
        9.0, -720.0, 27720.0, -665280.0, 10810800.0, -121080960.0, 908107200.0, -4151347200.0,
        8821612800.0,
    ];
    const NAME: &'static str = "extended";
}

/// Computes the minimal Taylor order `N` for which the ratio of
/// consecutive terms of `exp` at the range-reduction boundary (`sqrt(2)`
/// scaled down by the half-angle recurrence) drops below `P::DELTA`.
///
/// Mirrors the original `MakeTaylorOrder` search: starts from `sqrt(2)`,
/// repeatedly multiplies by `ln(2)/2/i`, and returns `i + 2` once the
/// running term is small enough. Returns `NotConverged` if 1000 terms are
/// not enough — unreachable for the three supported precisions, but kept
/// as an explicit contract per the error taxonomy.
pub fn taylor_order<P: Precision>() -> numcore_error::Result<usize> {
    let mut term = P::SQRT2;
    for i in 1..1000usize {
        term *= P::LN2 * 0.5 / (i as f64);
        if term < P::DELTA {
            return Ok(i + 2);
        }
    }
    Err(numcore_error::Error::NotConverged(format!(
        "Taylor order search for {} precision did not converge in 1000 terms",
        P::NAME
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taylor_order_is_small_and_converges() {
        let n_single = taylor_order::<Single>().unwrap();
        let n_double = taylor_order::<Double>().unwrap();
        assert!(n_single < n_double);
        assert!(n_double < 30);
    }
}
