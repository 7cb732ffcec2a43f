//! Right-hand-side contracts, time steppers, and the compositional
//! integration loop that drives them.
//!
//! Every stepper owns its right-hand side (injected at construction); the
//! driver only ever talks to the [`Stepper`] and [`Observer`] traits, so
//! swapping Euler for an adaptive or higher-order stepper needs no change
//! at the call site.

mod driver;
mod euler;
mod everhart;
mod observer;
mod rhs;
mod rkf45;
mod stepper;

pub use driver::drive;
pub use euler::Euler;
pub use everhart::Everhart;
pub use observer::{NullObserver, Observer, Signal};
pub use rhs::{Rhs, SecondOrderRhs};
pub use rkf45::Rkf45;
pub use stepper::Stepper;
