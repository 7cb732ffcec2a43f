//! The shared spatial grid: strike, node count, and the piecewise-linear
//! initial/terminal conditions every solution path builds from.

use crate::aux::SIGMA_MAX;

/// Strike price.
pub const K: f64 = 100.0;
/// Number of spatial nodes (500 interior + 2 boundary), matching the
/// original's `N=502`.
pub const N: usize = 502;
/// `S_max = K * exp(5 * sigma_max)`.
pub fn s_max() -> f64 {
    K * (5.0 * SIGMA_MAX).exp()
}

/// Grid spacing `Delta S = S_max / N`.
pub fn delta_s() -> f64 {
    s_max() / N as f64
}

/// Spot price at node `i`: `S_i = i * Delta S`.
pub fn s_i(i: usize) -> f64 {
    i as f64 * delta_s()
}

/// Payoff at expiry: `max(S_i - K, 0)` for every node.
pub fn terminal_payoff() -> Vec<f64> {
    (0..N).map(|i| (s_i(i) - K).max(0.0)).collect()
}

/// Piecewise-linear interpolation of the grid `state` at spot `s_query`.
pub fn interpolate(state: &[f64], s_query: f64) -> f64 {
    let ds = delta_s();
    let i = ((s_query / ds) as usize).min(N - 2);
    let frac = (s_query - i as f64 * ds) / ds;
    state[i] * (1.0 - frac) + state[i + 1] * frac
}

#[cfg(test)]
mod tests {
    use super::*;
    use numcore_utils::assert_approx_equal;

    #[test]
    fn terminal_payoff_is_the_call_payoff_at_every_node() {
        let payoff = terminal_payoff();
        assert_eq!(payoff[0], 0.0);
        assert!(payoff[N - 1] > 0.0);
    }

    #[test]
    fn interpolation_is_exact_at_grid_nodes() {
        let state: Vec<f64> = (0..N).map(|i| i as f64).collect();
        assert_approx_equal!(interpolate(&state, s_i(10)), 10.0, 1e-9);
    }
}
