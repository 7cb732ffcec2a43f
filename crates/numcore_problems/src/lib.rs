//! Concrete RHS/Observer problem instances exercising the ODE core:
//! a ballistic projectile under layered-atmosphere drag, and a J2-perturbed
//! orbital satellite.

pub mod atmosphere;
pub mod ballistic;
pub mod satellite;
