/// What the driver does after the observer inspects a committed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Keep integrating.
    Continue,
    /// Stop the integration now.
    Stop,
}

/// Inspects each state the driver is about to step from, before the step
/// is taken. May have side effects (journaling, plotting data collection).
pub trait Observer {
    /// Called with the current `(t, state)`, before the driver asks the
    /// stepper for the next state.
    fn observe(&mut self, t: f64, state: &[f64]) -> Signal;
}

/// An observer that never stops early and does not record anything;
/// useful when only the final state matters.
pub struct NullObserver;

impl Observer for NullObserver {
    fn observe(&mut self, _t: f64, _state: &[f64]) -> Signal {
        Signal::Continue
    }
}
