//! Integrates a circular low-Earth orbit for one year under two-body plus
//! J2 gravity and reports the final state.
//!
//! Usage: `launch-satellite [altitude-km] [--trajectory PATH]`

use numcore_ode::{drive, NullObserver, Rkf45};
use numcore_problems::satellite::{SatelliteDumperObserver, SatelliteRhs, MU, ONE_YEAR_SECONDS};

fn main() {
    env_logger::init();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let mut positional = Vec::new();
    let mut trajectory_path = None;

    let mut i = 0;
    while i < raw.len() {
        match raw[i].as_str() {
            "--trajectory" => {
                i += 1;
                trajectory_path = raw.get(i).cloned();
            }
            other => positional.push(other.to_string()),
        }
        i += 1;
    }

    let altitude: f64 = positional.first().and_then(|s| s.parse().ok()).unwrap_or(7500.0);
    let v0 = (MU / altitude).sqrt();
    let initial = [altitude, 0.0, 0.0, 0.0, v0, 0.0];

    log::info!("launching a {altitude} km circular orbit for one year");

    let result = match &trajectory_path {
        Some(path) => launch_with_dump(&initial, path),
        None => {
            let mut stepper = Rkf45::new(SatelliteRhs);
            let mut observer = NullObserver;
            let mut final_state = [0.0; 6];
            drive(&mut stepper, &mut observer, &initial, 0.0, ONE_YEAR_SECONDS, 1.0, &mut final_state)
                .map(|t| (t, final_state))
        }
    };

    match result {
        Ok((t, state)) => {
            let r = (state[0] * state[0] + state[1] * state[1] + state[2] * state[2]).sqrt();
            println!("reached t={t:.1}s, position=({:.3}, {:.3}, {:.3}) km, radius={r:.3} km", state[0], state[1], state[2]);
        }
        Err(err) => eprintln!("launch-satellite: propagation failed: {err}"),
    }
}

fn launch_with_dump(initial: &[f64; 6], path: &str) -> numcore_error::Result<(f64, [f64; 6])> {
    let file = std::fs::File::create(path).map_err(|err| numcore_error::Error::InvalidArgument(err.to_string()))?;
    let mut dumper = SatelliteDumperObserver::new(file).map_err(|err| numcore_error::Error::InvalidArgument(err.to_string()))?;

    let mut stepper = Rkf45::new(SatelliteRhs);
    let mut final_state = [0.0; 6];
    let t = drive(&mut stepper, &mut dumper, initial, 0.0, ONE_YEAR_SECONDS, 1.0, &mut final_state)?;
    dumper.finish().map_err(|err| numcore_error::Error::InvalidArgument(err.to_string()))?;
    Ok((t, final_state))
}
