use crate::{Observer, Signal, Stepper};
use numcore_error::Result;

/// Drives `stepper` from `t0` to `t_end`, starting from `initial_state`.
///
/// Each iteration: the observer inspects the current `(t, state)`; if it
/// signals [`Signal::Stop`], the driver stops immediately without taking
/// a further step. Otherwise the stepper advances by the full suggested
/// step, the *reported time* is clamped to `t_end` (the state itself is
/// not re-computed for a shorter step), and the result is committed as
/// the new current state before the loop repeats.
///
/// Writes the final committed state into `final_state` and returns the
/// time it was reached at.
pub fn drive(
    stepper: &mut impl Stepper,
    observer: &mut impl Observer,
    initial_state: &[f64],
    t0: f64,
    t_end: f64,
    suggested_dt: f64,
    final_state: &mut [f64],
) -> Result<f64> {
    let n = stepper.n();
    let mut current = initial_state.to_vec();
    let mut next = vec![0.0; n];
    let mut t = t0;
    let mut dt = suggested_dt;

    loop {
        if observer.observe(t, &current) == Signal::Stop {
            break;
        }
        if t >= t_end {
            break;
        }

        let (t_next, dt_next) = stepper.step(&current, &mut next, t, dt)?;

        current.copy_from_slice(&next);
        t = t_next.min(t_end);
        dt = dt_next;
    }

    final_state.copy_from_slice(&current);
    Ok(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Euler, NullObserver, Rhs};
    use numcore_utils::assert_approx_equal;

    struct Exponential;

    impl Rhs for Exponential {
        const N: usize = 1;

        fn eval(&self, _t: f64, state: &[f64], out: &mut [f64]) {
            out[0] = state[0];
        }
    }

    #[test]
    fn drives_to_t_end_with_a_clamped_final_step() {
        let mut stepper = Euler::new(Exponential);
        let mut observer = NullObserver;
        let mut final_state = [0.0];
        let t = drive(&mut stepper, &mut observer, &[1.0], 0.0, 1.0, 0.3, &mut final_state).unwrap();
        assert_approx_equal!(t, 1.0, 1e-12);
    }

    #[test]
    fn the_final_step_commits_the_full_unclamped_state_not_a_shrunk_one() {
        // Four Euler steps of dt=0.3 overshoot t_end=1.0 on the last step
        // (t would reach 1.2); the driver clamps the *reported time* to
        // 1.0 but still commits the state from the full 0.3 step, not a
        // recomputed step of size 0.1.
        let mut stepper = Euler::new(Exponential);
        let mut observer = NullObserver;
        let mut final_state = [0.0];
        let t = drive(&mut stepper, &mut observer, &[1.0], 0.0, 1.0, 0.3, &mut final_state).unwrap();
        assert_approx_equal!(t, 1.0, 1e-12);

        let full_step_value = 1.3_f64.powi(3) * 1.3;
        let shrunk_step_value = 1.3_f64.powi(3) * 1.1;
        assert_approx_equal!(final_state[0], full_step_value, 1e-9);
        assert!((final_state[0] - shrunk_step_value).abs() > 0.1);
    }

    #[test]
    fn an_observer_that_stops_early_halts_the_drive() {
        struct StopAfter {
            calls: usize,
        }
        impl Observer for StopAfter {
            fn observe(&mut self, _t: f64, _state: &[f64]) -> Signal {
                self.calls += 1;
                if self.calls >= 3 {
                    Signal::Stop
                } else {
                    Signal::Continue
                }
            }
        }

        let mut stepper = Euler::new(Exponential);
        let mut observer = StopAfter { calls: 0 };
        let mut final_state = [0.0];
        let t = drive(&mut stepper, &mut observer, &[1.0], 0.0, 100.0, 1.0, &mut final_state).unwrap();
        assert_approx_equal!(t, 2.0, 1e-12);
    }
}
