//! Aggregator crate re-exporting the numcore toolkit's components under a
//! single dependency: multi-precision exponentials, forward-mode AAD and
//! finite-difference differentiation, ODE steppers and driver, the
//! ballistic/satellite problem instances, the BSM PDE pricer, and the
//! test-record harnesses.

pub use numcore_error::{Error, Result};

/// Multi-precision `e^x` with interchangeable evaluation kernels.
pub mod exp {
    pub use numcore_exp::*;
}

/// Forward-mode automatic differentiation.
pub mod aad {
    pub use numcore_aad::*;
}

/// Finite-difference and AAD-backed partial derivative estimators.
pub mod diff {
    pub use numcore_diff::*;
}

/// Right-hand-side contracts, steppers, and the integration driver.
pub mod ode {
    pub use numcore_ode::*;
}

/// Ballistic projectile and J2-perturbed satellite problem instances.
pub mod problems {
    pub use numcore_problems::*;
}

/// Black-Scholes-Merton PDE pricer.
pub mod pde {
    pub use numcore_pde::*;
}

/// Adaptive comparator and range/array test harnesses.
pub mod testing {
    pub use numcore_testing::*;
}
