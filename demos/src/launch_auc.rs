//! Prices a European call under the Black-Scholes-Merton PDE using one of
//! the three solution paths.
//!
//! Usage: `launch-auc [analytical|explicit|implicit] [spot] [tau-max]`

use numcore_pde::{price, SolutionApproach};

fn main() {
    env_logger::init();

    let raw: Vec<String> = std::env::args().skip(1).collect();

    let approach = match raw.first().map(String::as_str) {
        Some("explicit") => SolutionApproach::Explicit,
        Some("implicit") => SolutionApproach::Implicit,
        Some("analytical") | None => SolutionApproach::Analytical,
        Some(other) => {
            eprintln!("launch-auc: unknown approach '{other}', expected analytical|explicit|implicit");
            return;
        }
    };

    let spot: f64 = raw.get(1).and_then(|s| s.parse().ok()).unwrap_or(90.0);
    let tau_max: f64 = raw.get(2).and_then(|s| s.parse().ok()).unwrap_or(1.0);

    log::info!("pricing with {approach:?} at spot={spot}, tau_max={tau_max}");

    match price(approach, spot, tau_max) {
        Ok(value) => println!("{value:.6}"),
        Err(err) => eprintln!("launch-auc: pricing failed: {err}"),
    }
}
