//! Closed-form BSM price with volatility and rate integrated over
//! `[0, tau_max]`.

use crate::aux::{r_integral, sigma2_integral};
use crate::grid::K;
use statrs::function::erf::erf;

fn standard_normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

/// European call price at spot `s_tau_max` with `tau_max` time to expiry,
/// using volatility/rate integrated from inception to `tau_max`.
pub fn price(s_tau_max: f64, tau_max: f64) -> f64 {
    let v = sigma2_integral(tau_max);
    let r_bar = r_integral(tau_max);

    let d_main = (s_tau_max / K).ln() + r_bar;
    let d_plus = (d_main + v / 2.0) / v.sqrt();
    let d_minus = (d_main - v / 2.0) / v.sqrt();

    s_tau_max * standard_normal_cdf(d_plus) - K * (-r_bar).exp() * standard_normal_cdf(d_minus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_in_the_money_price_approaches_intrinsic_value() {
        let p = price(10_000.0, 1.0);
        assert!(p > 9_000.0);
    }

    #[test]
    fn price_is_nonnegative_and_bounded_by_spot() {
        let p = price(90.0, 1.0);
        assert!(p >= 0.0);
        assert!(p <= 90.0);
    }
}
