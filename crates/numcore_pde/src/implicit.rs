//! Implicit path: one tridiagonal linear solve (Thomas algorithm) per
//! time slab, marching from `tau=0` to `tau_max`.

use crate::aux::{r_integral, risk_free_rate, sigma_function};
use crate::grid::{self, interpolate, K, N};

// `a` carries the half that the explicit path's drift term already has
// (`r*i*(next-prev)/2`): with `s_i(i) = i*delta_s`, `a = s_i(i)*r/(2*delta_s)`
// reduces to `i*r/2`, matching the backward-Euler discretization of the
// same PDE the explicit RHS solves rather than the source's bare `i*r`.
fn coefficients(i: usize, delta_s: f64, delta_t: f64, tau: f64) -> (f64, f64, f64) {
    let s = i as f64 * delta_s;
    let a = s * risk_free_rate(tau) / (2.0 * delta_s);
    let b = s * sigma_function(tau) / delta_s;
    let c = -risk_free_rate(tau);

    let lower = b * b / 2.0 - a;
    let diag = c - b * b - 1.0 / delta_t;
    let upper = b * b / 2.0 + a;
    (lower, diag, upper)
}

/// Prices the call at spot `s_tau_max` by marching `N` implicit time
/// steps of size `tau_max / N` from the terminal payoff to `tau_max`,
/// solving one tridiagonal system per step via forward/backward
/// elimination.
pub fn price(s_tau_max: f64, tau_max: f64) -> f64 {
    let delta_s = grid::delta_s();
    let delta_t = tau_max / N as f64;
    let s_max = grid::s_max();

    let mut c = grid::terminal_payoff();

    for step in 1..=N {
        let tau = step as f64 * delta_t;
        let boundary_0 = 0.0;
        let boundary_n = s_max - K * (-r_integral(tau)).exp();

        // Tridiagonal system for interior nodes 1..=N-2 (0-indexed up to
        // N-1 inclusive as in the source's 1..=N-1 range, N being the
        // last interior index before the pinned boundary at N-1 here
        // since our grid has N nodes, 0..N-1).
        let last_interior = N - 2;
        let mut lower = vec![0.0; N - 1];
        let mut diag = vec![0.0; N - 1];
        let mut upper = vec![0.0; N - 1];
        let mut rhs = vec![0.0; N - 1];

        for i in 1..=last_interior {
            let (l, d, u) = coefficients(i, delta_s, delta_t, tau);
            lower[i] = l;
            diag[i] = d;
            upper[i] = u;
            rhs[i] = -c[i] / delta_t;
        }
        rhs[1] -= lower[1] * boundary_0;
        rhs[last_interior] -= upper[last_interior] * boundary_n;

        // Forward elimination.
        for i in 1..last_interior {
            let factor = lower[i + 1] / diag[i];
            diag[i + 1] -= factor * upper[i];
            rhs[i + 1] -= factor * rhs[i];
        }

        // Back substitution.
        let mut solved = vec![0.0; N];
        solved[last_interior] = rhs[last_interior] / diag[last_interior];
        for i in (1..last_interior).rev() {
            solved[i] = (rhs[i] - upper[i] * solved[i + 1]) / diag[i];
        }
        solved[0] = boundary_0;
        solved[N - 1] = boundary_n;

        c = solved;
    }

    interpolate(&c, s_tau_max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical;

    #[test]
    fn implicit_path_roughly_agrees_with_the_analytical_price() {
        let s_tau_max = 90.0;
        let tau_max = 1.0;
        let implicit_price = price(s_tau_max, tau_max);
        let analytical_price = analytical::price(s_tau_max, tau_max);
        let rel_err = (implicit_price - analytical_price).abs() / analytical_price;
        assert!(rel_err < 0.01, "implicit={implicit_price} analytical={analytical_price}");
    }
}
