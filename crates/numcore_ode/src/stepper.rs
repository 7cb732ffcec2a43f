use numcore_error::Result;

/// A time stepper: advances a fixed-width state by one step, given a
/// suggested step size. The right-hand side the stepper integrates is
/// owned by the stepper itself (injected at construction), not passed per
/// call.
pub trait Stepper {
    /// State dimension this stepper advances.
    fn n(&self) -> usize;

    /// Advances `current_state` to `next_state`, starting at
    /// `current_time` with the suggested step `suggested_dt`.
    ///
    /// Returns `(next_time, next_suggested_dt)`. `next_time` is usually
    /// `current_time + suggested_dt`, but a stepper is free to take a
    /// smaller step than suggested (e.g. after an adaptive rejection).
    fn step(
        &mut self,
        current_state: &[f64],
        next_state: &mut [f64],
        current_time: f64,
        suggested_dt: f64,
    ) -> Result<(f64, f64)>;
}
