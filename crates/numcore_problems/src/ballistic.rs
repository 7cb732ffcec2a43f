//! 2-D ballistic projectile: position + velocity state, aerodynamic drag
//! plus gravity.

use crate::atmosphere::{aerodynamic_force, G_FORCE};
use numcore_error::Result;
use numcore_ode::{drive, Euler, Observer, Rhs, Signal};
use rayon::prelude::*;
use serde::Serialize;
use std::io::Write;

const MASS_KG: f64 = 106.0;
const MUZZLE_VELOCITY: f64 = 1640.0;

/// `(x, y, v_x, v_y)` right-hand side of the cannonball's equations of
/// motion: gravity plus drag opposing the velocity vector.
pub struct BallRhs;

impl Rhs for BallRhs {
    const N: usize = 4;

    fn eval(&self, _t: f64, state: &[f64], out: &mut [f64]) {
        let (v_x, v_y) = (state[2], state[3]);
        let v2 = v_x * v_x + v_y * v_y;
        let v = v2.sqrt();
        let y = state[1];

        let drag = if v > 0.0 {
            aerodynamic_force(y, v2).unwrap_or(0.0)
        } else {
            0.0
        };

        out[0] = v_x;
        out[1] = v_y;
        out[2] = if v > 0.0 { -drag * v_x / v / MASS_KG } else { 0.0 };
        out[3] = if v > 0.0 { -drag * v_y / v / MASS_KG - G_FORCE } else { -G_FORCE };
    }
}

/// Stops the first time the ball's altitude drops back to (or below) the
/// ground after launch.
pub struct BallObserver;

impl Observer for BallObserver {
    fn observe(&mut self, t: f64, state: &[f64]) -> Signal {
        if t == 0.0 || state[1] > 0.0 {
            Signal::Continue
        } else {
            Signal::Stop
        }
    }
}

#[derive(Serialize)]
struct BallState {
    x: f64,
    y: f64,
    v_x: f64,
    v_y: f64,
}

#[derive(Serialize)]
struct BallRhsSample {
    v_x: f64,
    v_y: f64,
    a_x: f64,
    a_y: f64,
}

#[derive(Serialize)]
struct BallSample {
    current_time: f64,
    current_state: BallState,
    rhs: BallRhsSample,
}

/// A [`BallObserver`] that additionally serializes every 10th sample as a
/// JSON object to `sink`.
pub struct BallDumperObserver<W> {
    sink: W,
    index: usize,
    wrote_any: bool,
}

impl<W: Write> BallDumperObserver<W> {
    /// Builds a dumper writing a JSON array of trajectory samples to
    /// `sink`; the caller is responsible for opening/closing `sink` and
    /// for writing the enclosing `[`/`]` (see [`Self::finish`]).
    pub fn new(mut sink: W) -> std::io::Result<Self> {
        writeln!(sink, "[")?;
        Ok(BallDumperObserver { sink, index: 0, wrote_any: false })
    }

    /// Closes the JSON array. Must be called once after the driving loop
    /// finishes.
    pub fn finish(mut self) -> std::io::Result<()> {
        write!(self.sink, "\n]\n")
    }
}

impl<W: Write> Observer for BallDumperObserver<W> {
    fn observe(&mut self, t: f64, state: &[f64]) -> Signal {
        if self.index.is_multiple_of(10) {
            let mut rhs = [0.0; 4];
            BallRhs.eval(t, state, &mut rhs);
            let sample = BallSample {
                current_time: t,
                current_state: BallState { x: state[0], y: state[1], v_x: state[2], v_y: state[3] },
                rhs: BallRhsSample { v_x: rhs[0], v_y: rhs[1], a_x: rhs[2], a_y: rhs[3] },
            };
            if let Ok(json) = serde_json::to_string_pretty(&sample) {
                let prefix = if self.wrote_any { ",\n" } else { "" };
                let _ = write!(self.sink, "{prefix}{json}");
                self.wrote_any = true;
            }
        }
        self.index += 1;

        if t == 0.0 || state[1] > 0.0 {
            Signal::Continue
        } else {
            Signal::Stop
        }
    }
}

/// Distance traveled and time of flight for one launch angle (degrees).
#[derive(Debug, Clone, Copy)]
pub struct ShotResult {
    /// Launch angle, degrees.
    pub angle_deg: f64,
    /// Horizontal distance at landing.
    pub distance: f64,
    /// Flight time at landing.
    pub time: f64,
}

/// Fires one shot at `angle_deg` degrees above the horizontal, integrating
/// until the ball returns to `y = 0`, and reports the landing distance and
/// flight time.
pub fn shoot_with_angle(angle_deg: f64) -> Result<ShotResult> {
    let mut observer = BallObserver;
    shoot_with_angle_and_observer(angle_deg, &mut observer)
}

/// Like [`shoot_with_angle`], but drives with the caller-supplied
/// observer instead of a plain [`BallObserver`] — used to additionally
/// dump the trajectory while sweeping.
pub fn shoot_with_angle_and_observer(angle_deg: f64, observer: &mut impl Observer) -> Result<ShotResult> {
    let rad = angle_deg.to_radians();
    let initial = [
        0.0,
        0.0,
        MUZZLE_VELOCITY * rad.cos(),
        MUZZLE_VELOCITY * rad.sin(),
    ];
    let mut stepper = Euler::new(BallRhs);
    let mut final_state = [0.0; 4];
    let t = drive(&mut stepper, observer, &initial, 0.0, 600.0, 0.01, &mut final_state)?;
    Ok(ShotResult {
        angle_deg,
        distance: final_state[0],
        time: t,
    })
}

/// Sweeps launch angles in `[min_angle_deg, max_angle_deg)` at `step_deg`
/// increments in parallel (one [`rayon`] task per angle) and returns the
/// shot with the greatest landing distance, along with every shot fired
/// (sorted by angle).
pub fn find_best_angle(min_angle_deg: f64, max_angle_deg: f64, step_deg: f64) -> Result<(ShotResult, Vec<ShotResult>)> {
    let steps = ((max_angle_deg - min_angle_deg) / step_deg).floor() as usize;
    let mut results: Vec<ShotResult> = (0..steps)
        .into_par_iter()
        .map(|i| shoot_with_angle(min_angle_deg + step_deg * i as f64))
        .collect::<Result<Vec<_>>>()?;
    results.sort_by(|a, b| a.angle_deg.partial_cmp(&b.angle_deg).unwrap());

    let best = results
        .iter()
        .copied()
        .max_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap())
        .expect("sweep always fires at least one angle");

    Ok((best, results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use numcore_ode::drive;

    #[test]
    fn the_ball_lands_with_nonnegative_travel_distance() {
        let angle = 45f64.to_radians();
        let v = 1640.0;
        let initial = [0.0, 0.0, v * angle.cos(), v * angle.sin()];

        let mut rhs_stepper = numcore_ode::Euler::new(BallRhs);
        let mut observer = BallObserver;
        let mut final_state = [0.0; 4];
        let t = drive(&mut rhs_stepper, &mut observer, &initial, 0.0, 600.0, 0.01, &mut final_state).unwrap();

        assert!(final_state[0] > 0.0);
        assert!(t > 0.0);
    }

    #[test]
    fn the_observer_never_stops_on_the_very_first_sample() {
        let mut observer = BallObserver;
        assert_eq!(observer.observe(0.0, &[0.0, -1.0, 0.0, 0.0]), Signal::Continue);
        assert_eq!(observer.observe(1.0, &[0.0, -1.0, 0.0, 0.0]), Signal::Stop);
    }
}
