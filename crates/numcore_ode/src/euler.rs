use crate::{Rhs, Stepper};
use numcore_error::Result;

/// Explicit Euler: `state' = state + dt * RHS(t, state)`. Always accepts
/// the suggested step; useful as a control and wherever `dt` is externally
/// bounded (the explicit PDE path).
pub struct Euler<R> {
    rhs: R,
    scratch: Vec<f64>,
}

impl<R: Rhs> Euler<R> {
    /// Builds an Euler stepper that integrates `rhs`.
    pub fn new(rhs: R) -> Self {
        Euler {
            rhs,
            scratch: vec![0.0; R::N],
        }
    }
}

impl<R: Rhs> Stepper for Euler<R> {
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
        self.rhs.eval(current_time, current_state, &mut self.scratch);
        for i in 0..R::N {
            next_state[i] = current_state[i] + suggested_dt * self.scratch[i];
        }
        Ok((current_time + suggested_dt, suggested_dt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Exponential;

    impl Rhs for Exponential {
        const N: usize = 1;

        fn eval(&self, _t: f64, state: &[f64], out: &mut [f64]) {
            out[0] = state[0];
        }
    }

    #[test]
    fn euler_always_accepts_the_suggested_step() {
        let mut stepper = Euler::new(Exponential);
        let mut next = [0.0];
        let (t, dt) = stepper.step(&[1.0], &mut next, 0.0, 0.1).unwrap();
        assert_eq!((t, dt), (0.1, 0.1));
        assert_eq!(next, [1.1]);
    }
}
