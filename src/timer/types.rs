/// Where the countdown is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// Full duration, waiting for start.
    Idle,
    Running,
    Paused,
    /// Reached zero. Start arms a new session, reset returns to idle.
    Completed,
}

/// Notification produced by a timer operation or tick.
///
/// Listeners see exactly one `Started` per session; leaving pause is
/// reported as `Resumed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Started,
    Paused,
    Resumed,
    Reset,
    Completed,
}
