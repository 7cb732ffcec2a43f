//! Sweeps ballistic launch angles in parallel and reports the winner.
//!
//! Usage: `find-best-angle [min-angle] [max-angle] [step] [--log PATH] [--trajectory PATH]`
//! Angles are degrees above the horizontal; defaults are `0 90 1`.

use numcore_problems::ballistic::{find_best_angle, shoot_with_angle_and_observer, BallDumperObserver};
use std::io::Write;

fn main() {
    env_logger::init();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let mut positional = Vec::new();
    let mut log_path = None;
    let mut trajectory_path = None;

    let mut i = 0;
    while i < raw.len() {
        match raw[i].as_str() {
            "--log" => {
                i += 1;
                log_path = raw.get(i).cloned();
            }
            "--trajectory" => {
                i += 1;
                trajectory_path = raw.get(i).cloned();
            }
            other => positional.push(other.to_string()),
        }
        i += 1;
    }

    let min_angle: f64 = positional.first().and_then(|s| s.parse().ok()).unwrap_or(0.0);
    let max_angle: f64 = positional.get(1).and_then(|s| s.parse().ok()).unwrap_or(90.0);
    let step: f64 = positional.get(2).and_then(|s| s.parse().ok()).unwrap_or(1.0);

    log::info!("sweeping angles in [{min_angle}, {max_angle}) at {step} degree steps");

    let (best, shots) = match find_best_angle(min_angle, max_angle, step) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("find-best-angle: sweep failed: {err}");
            return;
        }
    };

    println!("best angle: {:.2} deg, distance: {:.3} m, time: {:.3} s", best.angle_deg, best.distance, best.time);

    if let Some(path) = &log_path {
        match std::fs::File::create(path) {
            Ok(mut file) => {
                for shot in &shots {
                    let _ = writeln!(file, "{:.2} {:.6} {:.6}", shot.angle_deg, shot.distance, shot.time);
                }
                let _ = writeln!(file, "# Best angle: {:.2}, Best distance: {:.6}", best.angle_deg, best.distance);
            }
            Err(err) => eprintln!("find-best-angle: could not write log to {path}: {err}"),
        }
    }

    if let Some(path) = &trajectory_path {
        if let Err(err) = dump_best_trajectory(&best, path) {
            eprintln!("find-best-angle: could not write trajectory to {path}: {err}");
        }
    }
}

fn dump_best_trajectory(best: &numcore_problems::ballistic::ShotResult, path: &str) -> std::io::Result<()> {
    let mut buffer: Vec<u8> = Vec::new();
    {
        let mut dumper = BallDumperObserver::new(&mut buffer)?;
        let _ = shoot_with_angle_and_observer(best.angle_deg, &mut dumper);
        dumper.finish()?;
    }

    let mut file = std::fs::File::create(path)?;
    write!(file, "{{\"angle\":{},\"distance\":{},\"data\":", best.angle_deg, best.distance)?;
    file.write_all(&buffer)?;
    writeln!(file, "}}")
}
