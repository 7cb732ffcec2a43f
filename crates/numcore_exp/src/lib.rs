//! Multi-precision `e^x` with interchangeable evaluation kernels.
//!
//! [`exp`] is the single front end: it range-reduces `x` into `n*ln2 + r`
//! with `|r| <= 0.5*ln2`, evaluates `r` with the selected [`Method`], and
//! reconstructs the result by scaling with `2^n`.

pub mod constants;
pub mod kernels;

pub use constants::{Double, Extended, Precision, Single};
pub use kernels::Method;

/// Range-reduction overflow/underflow thresholds, in units of `n` after
/// `y = x * log2(e)` — matching the original `int_part > 11500` /
/// `int_part < INT_MIN` bounds.
const OVERFLOW_N: f64 = 11_500.0;

/// Computes `e^x` for the given precision and kernel.
///
/// Returns `NaN` on `NaN` input, `+inf` on overflow, and `0.0` on
/// underflow — overflow/underflow are communicated by value, never by
/// error, per the error taxonomy.
pub fn exp<P: Precision>(x: f64, method: Method) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }

    let y = P::LOG2E * x;
    let mut n = y.trunc();
    let mut frac = y - n;

    if n < -OVERFLOW_N {
        return 0.0;
    }
    if n > OVERFLOW_N {
        return f64::INFINITY;
    }

    if frac.abs() > 0.5 {
        if frac > 0.0 {
            n += 1.0;
            frac -= 1.0;
        } else {
            n -= 1.0;
            frac += 1.0;
        }
    }

    let r = P::LN2 * frac;
    let e2 = kernels::eval_kernel::<P>(r, method);
    e2 * 2f64.powi(n as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use numcore_utils::assert_approx_equal;

    const METHODS: [Method; 5] = [
        Method::Taylor,
        Method::Pade,
        Method::ChebyshevRecurrence,
        Method::ChebyshevLinearSystem,
        Method::Fourier,
    ];

    /// Per-method tolerance for the reduced-band kernel evaluation: the
    /// FFT-sampled Fourier kernel is quantized to its nearest node, and
    /// the linear-system Chebyshev kernel is the known-looser "not
    /// recommended for now" variant (see `kernels::chebyshev_linear_system`).
    fn tolerance(m: Method) -> f64 {
        match m {
            Method::Fourier => 1e-2,
            Method::ChebyshevLinearSystem => 0.1,
            _ => 1e-9,
        }
    }

    #[test]
    fn exp_of_nan_is_nan() {
        for m in METHODS {
            assert!(exp::<Double>(f64::NAN, m).is_nan());
        }
    }

    #[test]
    fn exp_of_zero_is_one() {
        for m in METHODS {
            assert_approx_equal!(exp::<Double>(0.0, m), 1.0, tolerance(m));
        }
    }

    #[test]
    fn exp_matches_std_library_across_kernels_and_range() {
        for m in METHODS {
            for &x in &[-20.0, -5.0, -1.0, -0.1, 0.5, 1.0, 2.0, 10.0, 50.0] {
                let got = exp::<Double>(x, m);
                let want = x.exp();
                let tol = tolerance(m) * want.abs().max(1.0);
                assert!(
                    (got - want).abs() < tol,
                    "method {m:?} x={x} got={got} want={want}"
                );
            }
        }
    }

    #[test]
    fn exp_overflow_and_underflow_are_values_not_errors() {
        assert_eq!(exp::<Double>(1.0e6, Method::Taylor), f64::INFINITY);
        assert_eq!(exp::<Double>(-1.0e6, Method::Taylor), 0.0);
    }
}
