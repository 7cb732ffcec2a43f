use crate::SecondOrderRhs;
use crate::Stepper;
use numcore_error::Result;

/// Fractional positions of the 5 substeps within `[0, h]` (Gauss-Radau-like
/// spacing used by the original 15th-order predictor-corrector).
const H_FRAC: [f64; 5] = [
    0.056_262_560_075_663_76,
    0.269_023_827_555_788_8,
    0.580_113_713_346_391_7,
    0.843_053_367_952_206_2,
    1.0,
];

const MAX_CORRECTOR_ITERATIONS: usize = 10;

/// Signed Stirling numbers of the first kind, `c[i][j]`, used to convert
/// the falling-factorial expansion of the divided-difference polynomial
/// into powers of `h`. Recurrence: `c[n][j] = c[n-1][j-1] - (n-1)*c[n-1][j]`,
/// `c[0][0] = 1`.
fn stirling_first_kind(max_n: usize) -> Vec<Vec<f64>> {
    let mut c = vec![vec![0.0; max_n + 1]; max_n + 1];
    c[0][0] = 1.0;
    for n in 1..=max_n {
        for j in 0..=n {
            let prev = if j > 0 { c[n - 1][j - 1] } else { 0.0 };
            let carry = if j < n { c[n - 1][j] } else { 0.0 };
            c[n][j] = prev - (n as f64 - 1.0) * carry;
        }
    }
    c
}

/// A 15th-order, k=5 substep Everhart predictor-corrector for second-order
/// systems `y'' = f(t, y, y')`. State is `(y, y')` stacked: the first `M`
/// entries are `y`, the next `M` are `y'`.
///
/// Unlike [`crate::euler::Euler`] and [`crate::rkf45::Rkf45`] this stepper
/// always accepts the suggested `dt` outright (it has no embedded error
/// estimate); accuracy comes from the iterated corrector instead.
pub struct Everhart<R> {
    rhs: R,
    stirling: Vec<Vec<f64>>,
}

impl<R: SecondOrderRhs> Everhart<R> {
    /// Builds an Everhart stepper that integrates `rhs`.
    pub fn new(rhs: R) -> Self {
        Everhart {
            rhs,
            stirling: stirling_first_kind(5),
        }
    }

    /// `B_j` for component `comp`, built from the divided-difference table
    /// `dd[i][comp]` (`i = 0..=4`, the i-th forward divided difference of
    /// the acceleration samples) via the Stirling-number conversion from
    /// falling factorial to a power series in `h`.
    ///
    /// `B_1` reduces to `sum_i dd[0][i] * prod_{j=1}^{i-1} (-h*j)`, matching
    /// the closed form this stepper is specified against; the other `B_j`
    /// are the analogous coefficients for the remaining power-series terms.
    fn b_coefficient(&self, j: usize, dd: &[Vec<f64>], comp: usize, h: f64) -> f64 {
        let mut sum = 0.0;
        for i in j..=5 {
            if i >= dd.len() {
                continue;
            }
            sum += dd[i][comp] * self.stirling[i][j] * h.powi(i as i32 - j as i32);
        }
        sum
    }
}

impl<R: SecondOrderRhs> Stepper for Everhart<R> {
    fn n(&self) -> usize {
        2 * R::M
    }

    fn step(
        &mut self,
        current_state: &[f64],
        next_state: &mut [f64],
        current_time: f64,
        suggested_dt: f64,
    ) -> Result<(f64, f64)> {
        let m = R::M;
        let h = suggested_dt;
        let (y0, yp0) = current_state.split_at(m);

        let mut f0 = vec![0.0; m];
        self.rhs.eval(current_time, y0, yp0, &mut f0);

        // Predictor: constant acceleration extrapolation to each substep.
        let mut y_sub = vec![vec![0.0; m]; 5];
        let mut yp_sub = vec![vec![0.0; m]; 5];
        for (s, frac) in H_FRAC.iter().enumerate() {
            let hs = frac * h;
            for c in 0..m {
                yp_sub[s][c] = yp0[c] + hs * f0[c];
                y_sub[s][c] = y0[c] + hs * yp0[c] + 0.5 * hs * hs * f0[c];
            }
        }

        let mut f_sub = vec![vec![0.0; m]; 5];
        for s in 0..5 {
            self.rhs
                .eval(current_time + H_FRAC[s] * h, &y_sub[s], &yp_sub[s], &mut f_sub[s]);
        }

        for _iteration in 0..MAX_CORRECTOR_ITERATIONS {
            // Forward divided-difference table of the 6 acceleration
            // samples (f0, f_sub[0..5]) against the substep times, built
            // per component.
            let times: Vec<f64> = std::iter::once(0.0)
                .chain(H_FRAC.iter().map(|frac| frac * h))
                .collect();
            let mut dd = vec![vec![0.0; m]; 6];
            for c in 0..m {
                let mut column: Vec<f64> = std::iter::once(f0[c])
                    .chain((0..5).map(|s| f_sub[s][c]))
                    .collect();
                for (order, dd_order) in dd.iter_mut().enumerate() {
                    dd_order[c] = column[0];
                    if order < 5 {
                        let mut next_column = vec![0.0; column.len() - 1];
                        for k in 0..next_column.len() {
                            next_column[k] =
                                (column[k + 1] - column[k]) / (times[k + order + 1] - times[k]);
                        }
                        column = next_column;
                    }
                }
            }

            let mut new_y_sub = vec![vec![0.0; m]; 5];
            let mut new_yp_sub = vec![vec![0.0; m]; 5];
            for (s, frac) in H_FRAC.iter().enumerate() {
                let hs = frac * h;
                for c in 0..m {
                    let mut y = y0[c] + hs * yp0[c] + 0.5 * hs * hs * f0[c];
                    let mut yp = yp0[c] + hs * f0[c];
                    for j in 1..=5 {
                        let bj = self.b_coefficient(j, &dd, c, h);
                        y += bj * hs.powi(j as i32 + 2) / ((j as f64 + 1.0) * (j as f64 + 2.0));
                        yp += bj * hs.powi(j as i32 + 1) / (j as f64 + 1.0);
                    }
                    new_y_sub[s][c] = y;
                    new_yp_sub[s][c] = yp;
                }
            }

            let mut delta_sq = 0.0;
            let mut scale_sq = 0.0;
            for c in 0..m {
                let diff = new_y_sub[4][c] - y_sub[4][c];
                delta_sq += diff * diff;
                scale_sq += new_y_sub[4][c] * new_y_sub[4][c];
            }

            y_sub = new_y_sub;
            yp_sub = new_yp_sub;
            for s in 0..5 {
                self.rhs
                    .eval(current_time + H_FRAC[s] * h, &y_sub[s], &yp_sub[s], &mut f_sub[s]);
            }

            if delta_sq <= f64::EPSILON * f64::EPSILON * scale_sq.max(1.0) {
                break;
            }
        }

        next_state[..m].copy_from_slice(&y_sub[4]);
        next_state[m..2 * m].copy_from_slice(&yp_sub[4]);
        Ok((current_time + h, h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numcore_utils::assert_approx_equal;

    /// `y'' = 6t`, which has the exact closed-form solution
    /// `y = t^3 + y0'*t + y0`; a 5th-degree polynomial corrector should
    /// reproduce it to machine precision in a single step.
    struct CubicAcceleration;

    impl SecondOrderRhs for CubicAcceleration {
        const M: usize = 1;

        fn eval(&self, t: f64, _y: &[f64], _yp: &[f64], out: &mut [f64]) {
            out[0] = 6.0 * t;
        }
    }

    #[test]
    fn reproduces_a_cubic_polynomial_solution_exactly() {
        let mut stepper = Everhart::new(CubicAcceleration);
        let mut next = [0.0, 0.0];
        let (t, dt) = stepper.step(&[0.0, 0.0], &mut next, 0.0, 2.0).unwrap();
        assert_eq!((t, dt), (2.0, 2.0));
        assert_approx_equal!(next[0], 8.0, 1e-8);
        assert_approx_equal!(next[1], 12.0, 1e-8);
    }

    #[test]
    fn harmonic_oscillator_conserves_energy_closely() {
        struct HarmonicOscillator {
            omega2: f64,
        }
        impl SecondOrderRhs for HarmonicOscillator {
            const M: usize = 1;
            fn eval(&self, _t: f64, y: &[f64], _yp: &[f64], out: &mut [f64]) {
                out[0] = -self.omega2 * y[0];
            }
        }

        let mut stepper = Everhart::new(HarmonicOscillator { omega2: 1.0 });
        let mut state = [1.0, 0.0];
        let mut next = [0.0, 0.0];
        for _ in 0..20 {
            let (_, _) = stepper.step(&state, &mut next, 0.0, 0.05).unwrap();
            state = next;
        }
        let energy = state[0] * state[0] + state[1] * state[1];
        assert_approx_equal!(energy, 1.0, 1e-3);
    }
}
