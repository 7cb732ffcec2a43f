use crate::{Rhs, Stepper};
use log::warn;
use numcore_error::{Error, Result};

/// Stage nodes `c_i` (Cash-Karp-style tableau, 0-indexed).
const A: [f64; 6] = [0.0, 0.5, 0.5, 1.0, 2.0 / 3.0, 0.2];

/// 5th-order solution weights.
const CH: [f64; 6] = [1.0 / 24.0, 0.0, 0.0, 5.0 / 48.0, 27.0 / 56.0, 125.0 / 336.0];

/// Embedded truncation-error weights.
const CT: [f64; 6] = [
    1.0 / 8.0,
    0.0,
    2.0 / 3.0,
    1.0 / 16.0,
    -27.0 / 56.0,
    -125.0 / 336.0,
];

/// Stage coefficients `a_ij`: row `i - 1` gives the weights of `k_0..k_{i-1}`
/// used to build stage `k_i`.
const B: [&[f64]; 5] = [
    &[0.5],
    &[0.25, 0.25],
    &[0.0, -1.0, 2.0],
    &[7.0 / 27.0, 10.0 / 27.0, 0.0, 1.0 / 27.0],
    &[
        28.0 / 625.0,
        -1.0 / 5.0,
        546.0 / 625.0,
        54.0 / 625.0,
        -378.0 / 625.0,
    ],
];

/// Runge-Kutta-Fehlberg 4(5) with an adaptive step. Rejects and retries a
/// step whose embedded error estimate exceeds `tolerance`, up to
/// `max_rejections` attempts; beyond that it reports
/// [`Error::StepperFailure`] rather than retrying unboundedly (an
/// unbounded recursive retry can stack-overflow on a pathological RHS).
pub struct Rkf45<R> {
    rhs: R,
    /// Target embedded-error magnitude a step must meet to be accepted.
    pub tolerance: f64,
    /// Retry budget for a single call to [`Stepper::step`].
    pub max_rejections: usize,
}

impl<R: Rhs> Rkf45<R> {
    /// Builds an RKF45 stepper with the default tolerance (`1e-9`) and
    /// retry budget (`50`).
    pub fn new(rhs: R) -> Self {
        Rkf45 {
            rhs,
            tolerance: 1e-9,
            max_rejections: 50,
        }
    }

    /// Builds an RKF45 stepper with an explicit tolerance and retry budget.
    pub fn with_tolerance(rhs: R, tolerance: f64, max_rejections: usize) -> Self {
        Rkf45 {
            rhs,
            tolerance,
            max_rejections,
        }
    }
}

impl<R: Rhs> Stepper for Rkf45<R> {
    fn n(&self) -> usize {
        R::N
    }

    fn step(
        &mut self,
        current_state: &[f64],
        next_state: &mut [f64],
        current_time: f64,
        suggested_dt: f64,
    ) -> Result<(f64, f64)> {
        let n = R::N;
        let mut dt = suggested_dt;
        let mut scratch = vec![0.0; n];
        let mut attempts = 0usize;

        loop {
            attempts += 1;

            let mut k: Vec<Vec<f64>> = Vec::with_capacity(6);
            let mut k0 = vec![0.0; n];
            self.rhs.eval(current_time, current_state, &mut k0);
            k.push(k0);

            for (i, row) in B.iter().enumerate() {
                for c in 0..n {
                    let mut acc = current_state[c];
                    for (j, coeff) in row.iter().enumerate() {
                        acc += dt * coeff * k[j][c];
                    }
                    scratch[c] = acc;
                }
                let mut ki = vec![0.0; n];
                self.rhs.eval(current_time + A[i + 1] * dt, &scratch, &mut ki);
                k.push(ki);
            }

            let mut te_sq = 0.0;
            for c in 0..n {
                let mut y5 = current_state[c];
                let mut error_term = 0.0;
                for i in 0..6 {
                    y5 += dt * CH[i] * k[i][c];
                    error_term += CT[i] * k[i][c];
                }
                next_state[c] = y5;
                let component_error = dt * error_term;
                te_sq += component_error * component_error;
            }
            let te = te_sq.sqrt();

            if te <= self.tolerance {
                let dt_new = if te > 0.0 {
                    0.9 * dt * (self.tolerance / te).powf(0.2)
                } else {
                    dt * 5.0
                };
                return Ok((current_time + dt, dt_new));
            }

            if attempts >= self.max_rejections {
                warn!(
                    "RKF45 exhausted its retry budget ({attempts} attempt(s)), last TE={te}"
                );
                return Err(Error::StepperFailure {
                    attempts,
                    reason: format!(
                        "embedded error {te} exceeded tolerance {} after {attempts} attempt(s)",
                        self.tolerance
                    ),
                });
            }
            dt = 0.9 * dt * (self.tolerance / te).powf(0.2);
        }
    }
}
