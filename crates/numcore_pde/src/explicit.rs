//! Method-of-lines explicit path: the price grid is the ODE state,
//! advanced to `tau_max` by RKF45.

use crate::aux::{r_integral, risk_free_rate, sigma_function};
use crate::grid::{self, interpolate, K, N};
use numcore_ode::{drive, NullObserver, Rhs, Rkf45};

/// The BSM PDE's spatial discretization, treated as an ODE right-hand
/// side over the full grid (including the two pinned boundary nodes,
/// which this RHS leaves untouched).
pub struct AucRhs;

impl Rhs for AucRhs {
    const N: usize = N;

    fn eval(&self, tau: f64, state: &[f64], out: &mut [f64]) {
        let rate = risk_free_rate(tau);
        let sigma2 = sigma_function(tau).powi(2);
        let s_max = grid::s_max();

        for i in 1..N - 1 {
            let prev_c = if i == 1 { 0.0 } else { state[i - 1] };
            let next_c = if i == N - 2 {
                s_max - K * (-r_integral(tau)).exp()
            } else {
                state[i + 1]
            };
            let curr_c = state[i];
            let i_f = i as f64;

            out[i] = rate * i_f * (next_c - prev_c) / 2.0
                + 0.5 * sigma2 * i_f * i_f * (next_c - 2.0 * curr_c + prev_c)
                - rate * curr_c;
        }
        out[0] = 0.0;
        out[N - 1] = 0.0;
    }
}

/// Prices the call at spot `s_tau_max` by driving the grid to `tau_max`
/// via RKF45, using `tau_max / 1000` as the initial step suggestion.
///
/// The driver's own `t >= t_end` check enforces the `tau_max` horizon, so
/// no problem-specific observer is needed here.
pub fn price(s_tau_max: f64, tau_max: f64) -> numcore_error::Result<f64> {
    let mut state = grid::terminal_payoff();
    let mut final_state = vec![0.0; N];

    let mut stepper = Rkf45::new(AucRhs);
    let mut observer = NullObserver;
    drive(&mut stepper, &mut observer, &state, 0.0, tau_max, tau_max / 1000.0, &mut final_state)?;
    state = final_state;

    Ok(interpolate(&state, s_tau_max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical;

    #[test]
    fn explicit_path_roughly_agrees_with_the_analytical_price() {
        let s_tau_max = 90.0;
        let tau_max = 1.0;
        let explicit_price = price(s_tau_max, tau_max).unwrap();
        let analytical_price = analytical::price(s_tau_max, tau_max);
        let rel_err = (explicit_price - analytical_price).abs() / analytical_price;
        assert!(rel_err < 0.05, "explicit={explicit_price} analytical={analytical_price}");
    }
}
