//! 3-D orbital satellite: position + velocity state, two-body gravity
//! plus the J2 zonal-harmonic perturbation.
//!
//! The original `Satellite.hpp` delegates to an `Environment::ComputeUGradient`
//! helper whose source was not retrievable; this gravity model is the
//! standard two-body + J2 correction built from first principles.

use numcore_ode::{Observer, Rhs, Signal};
use serde::Serialize;
use std::io::Write;

/// Earth's standard gravitational parameter, km^3/s^2.
pub const MU: f64 = 398_600.441_8;
/// Earth's equatorial radius, km.
pub const EARTH_RADIUS: f64 = 6378.137;
/// Earth's J2 zonal-harmonic coefficient (dimensionless).
pub const J2: f64 = 1.082_63e-3;

/// One year in seconds, the satellite Observer's stopping horizon.
pub const ONE_YEAR_SECONDS: f64 = 3.1e7;

/// Writes the acceleration `(a_x, a_y, a_z)` due to two-body gravity plus
/// the J2 oblateness correction into `out`, given position `(x, y, z)`.
pub fn gravity_gradient(x: f64, y: f64, z: f64, out: &mut [f64]) {
    let r2 = x * x + y * y + z * z;
    let r = r2.sqrt();
    let r3 = r2 * r;

    let two_body = -MU / r3;

    let z2_over_r2 = (z * z) / r2;
    let factor = 1.5 * J2 * MU * EARTH_RADIUS * EARTH_RADIUS / (r3 * r2);

    out[0] = two_body * x + factor * x * (5.0 * z2_over_r2 - 1.0);
    out[1] = two_body * y + factor * y * (5.0 * z2_over_r2 - 1.0);
    out[2] = two_body * z + factor * z * (5.0 * z2_over_r2 - 3.0);
}

/// `(x, y, z, v_x, v_y, v_z)` right-hand side of the satellite's equations
/// of motion.
pub struct SatelliteRhs;

impl Rhs for SatelliteRhs {
    const N: usize = 6;

    fn eval(&self, _t: f64, state: &[f64], out: &mut [f64]) {
        out[0] = state[3];
        out[1] = state[4];
        out[2] = state[5];
        gravity_gradient(state[0], state[1], state[2], &mut out[3..6]);
    }
}

/// Stops once the integration has run for [`ONE_YEAR_SECONDS`].
pub struct SatelliteObserver;

impl Observer for SatelliteObserver {
    fn observe(&mut self, t: f64, _state: &[f64]) -> Signal {
        if t <= ONE_YEAR_SECONDS {
            Signal::Continue
        } else {
            Signal::Stop
        }
    }
}

#[derive(Serialize)]
struct SatelliteState {
    x: f64,
    y: f64,
    z: f64,
    v_x: f64,
    v_y: f64,
    v_z: f64,
    a_x: f64,
    a_y: f64,
    a_z: f64,
}

#[derive(Serialize)]
struct SatelliteSample {
    current_time: f64,
    current_state: SatelliteState,
}

/// A [`SatelliteObserver`] that additionally serializes every 10th sample
/// to `sink` as a JSON object carrying position, velocity, and the
/// instantaneous acceleration.
pub struct SatelliteDumperObserver<W> {
    sink: W,
    index: usize,
    wrote_any: bool,
}

impl<W: Write> SatelliteDumperObserver<W> {
    /// Builds a dumper writing a JSON array of trajectory samples to
    /// `sink`.
    pub fn new(mut sink: W) -> std::io::Result<Self> {
        writeln!(sink, "[")?;
        Ok(SatelliteDumperObserver { sink, index: 0, wrote_any: false })
    }

    /// Closes the JSON array. Must be called once after the driving loop
    /// finishes.
    pub fn finish(mut self) -> std::io::Result<()> {
        write!(self.sink, "\n]\n")
    }
}

impl<W: Write> Observer for SatelliteDumperObserver<W> {
    fn observe(&mut self, t: f64, state: &[f64]) -> Signal {
        if self.index.is_multiple_of(10) {
            let mut accel = [0.0; 3];
            gravity_gradient(state[0], state[1], state[2], &mut accel);
            let sample = SatelliteSample {
                current_time: t,
                current_state: SatelliteState {
                    x: state[0],
                    y: state[1],
                    z: state[2],
                    v_x: state[3],
                    v_y: state[4],
                    v_z: state[5],
                    a_x: accel[0],
                    a_y: accel[1],
                    a_z: accel[2],
                },
            };
            if let Ok(json) = serde_json::to_string_pretty(&sample) {
                let prefix = if self.wrote_any { ",\n" } else { "" };
                let _ = write!(self.sink, "{prefix}{json}");
                self.wrote_any = true;
            }
        }
        self.index += 1;

        if t <= ONE_YEAR_SECONDS {
            Signal::Continue
        } else {
            Signal::Stop
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numcore_ode::{drive, Rkf45};
    use numcore_utils::assert_approx_equal;

    #[test]
    fn two_body_term_alone_matches_newtonian_inverse_square_law() {
        let mut out = [0.0; 3];
        gravity_gradient(7000.0, 0.0, 0.0, &mut out);
        let two_body_only = -MU / (7000.0 * 7000.0);
        // J2 correction on the equatorial plane (z=0) only scales the
        // radial term; check the total is close to, not equal to, Newton.
        assert!((out[0] - two_body_only).abs() / two_body_only.abs() < 0.01);
    }

    #[test]
    fn a_circular_equatorial_orbit_stays_at_roughly_constant_radius() {
        let altitude = 7500.0;
        let v0 = (MU / altitude).sqrt();
        let initial = [altitude, 0.0, 0.0, 0.0, v0, 0.0];

        let mut stepper = Rkf45::with_tolerance(SatelliteRhs, 1e-6, 200);
        let mut observer = numcore_ode::NullObserver;
        let mut final_state = [0.0; 6];
        drive(&mut stepper, &mut observer, &initial, 0.0, 3000.0, 1.0, &mut final_state).unwrap();

        let r_final = (final_state[0] * final_state[0]
            + final_state[1] * final_state[1]
            + final_state[2] * final_state[2])
            .sqrt();
        assert_approx_equal!(r_final, altitude, altitude * 0.02);
    }

    #[test]
    fn the_observer_stops_after_one_year() {
        let mut observer = SatelliteObserver;
        assert_eq!(observer.observe(0.0, &[0.0; 6]), Signal::Continue);
        assert_eq!(observer.observe(ONE_YEAR_SECONDS + 1.0, &[0.0; 6]), Signal::Stop);
    }
}
