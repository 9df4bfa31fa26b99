//! Step observer trait for monitoring simulation progress.

/// Trait for observing simulation steps.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// visualization, or profiling). All methods have default no-op
/// implementations.
pub trait StepObserver {
    /// Called after pending forces have been folded into positions.
    fn on_forces_accumulated(&mut self) {}

    /// Called after all movable particles have been integrated (Verlet step).
    fn on_integrate(&mut self) {}

    /// Called when a link is skipped because its endpoints coincide.
    fn on_degenerate_link(&mut self, _constraint: usize) {}

    /// Called after each relaxation pass, ground clamp included.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called when a time step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
