//! Piecewise-constant market data: volatility and risk-free rate as
//! step functions of time-to-expiry `tau`, plus their closed-form
//! integrals from 0 to `tau`.

/// Largest volatility value `sigma_function` ever returns; used to size
/// the spatial grid (`S_max = K * exp(5 * SIGMA_MAX)`).
pub const SIGMA_MAX: f64 = 0.29;

/// Piecewise-constant volatility `sigma(tau)`.
pub fn sigma_function(tau: f64) -> f64 {
    if tau < 0.25 {
        0.21
    } else if tau < 0.5 {
        0.229
    } else if tau < 0.75 {
        0.29
    } else {
        0.25
    }
}

/// Piecewise-constant risk-free rate `r(tau)`.
pub fn risk_free_rate(tau: f64) -> f64 {
    if tau <= 0.25 {
        0.16
    } else if tau <= 0.5 {
        0.15
    } else if tau <= 0.75 {
        0.14
    } else if tau <= 1.0 {
        0.13
    } else {
        0.12
    }
}

/// `integral_0^tau r(s) ds`.
pub fn r_integral(tau: f64) -> f64 {
    if tau <= 0.25 {
        0.16 * tau
    } else if tau <= 0.5 {
        0.04 + 0.15 * (tau - 0.25)
    } else if tau <= 0.75 {
        0.0775 + 0.14 * (tau - 0.5)
    } else {
        0.1125 + 0.13 * (tau - 0.75)
    }
}

/// `integral_0^tau sigma(s)^2 ds`.
pub fn sigma2_integral(tau: f64) -> f64 {
    if tau <= 0.25 {
        0.21 * 0.21 * tau
    } else if tau <= 0.5 {
        0.011_025 + 0.229 * 0.229 * (tau - 0.25)
    } else if tau <= 0.75 {
        0.024_135_25 + 0.29 * 0.29 * (tau - 0.5)
    } else {
        0.045_160_25 + 0.25 * 0.25 * (tau - 0.75)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numcore_utils::assert_approx_equal;

    #[test]
    fn r_integral_is_the_running_integral_of_the_step_function() {
        assert_approx_equal!(r_integral(0.25), 0.16 * 0.25, 1e-12);
        assert_approx_equal!(r_integral(0.5), 0.04 + 0.15 * 0.25, 1e-12);
    }

    #[test]
    fn sigma2_integral_matches_the_known_value_at_tau_equals_one() {
        assert_approx_equal!(sigma2_integral(1.0), 0.045_160_25 + 0.25 * 0.25 * 0.25, 1e-12);
    }
}
