use super::types::{TimerEvent, TimerPhase};
use crate::core::error::{FocusError, Result};

/// Countdown over a fixed focus duration, advanced by the host loop.
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    duration: f64,
    remaining: f64,
    phase: TimerPhase,
}

impl CountdownTimer {
    /// Creates an idle timer. The duration must be a positive number of seconds.
    pub fn new(duration_seconds: f64) -> Result<Self> {
        if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
            return Err(FocusError::invalid_config(
                "focus_duration_seconds",
                format!("must be a positive number of seconds, got {}", duration_seconds),
            ));
        }
        Ok(Self {
            duration: duration_seconds,
            remaining: duration_seconds,
            phase: TimerPhase::Idle,
        })
    }

    pub fn start(&mut self) -> Option<TimerEvent> {
        match self.phase {
            TimerPhase::Idle => {
                self.phase = TimerPhase::Running;
                Some(TimerEvent::Started)
            }
            TimerPhase::Paused => {
                self.phase = TimerPhase::Running;
                Some(TimerEvent::Resumed)
            }
            TimerPhase::Running => None,
            TimerPhase::Completed => {
                self.remaining = self.duration;
                self.phase = TimerPhase::Running;
                Some(TimerEvent::Started)
            }
        }
    }

    pub fn pause(&mut self) -> Option<TimerEvent> {
        if self.phase == TimerPhase::Running {
            self.phase = TimerPhase::Paused;
            Some(TimerEvent::Paused)
        } else {
            None
        }
    }

    /// Returns to idle at full duration from any phase.
    pub fn reset(&mut self) -> TimerEvent {
        self.remaining = self.duration;
        self.phase = TimerPhase::Idle;
        TimerEvent::Reset
    }

    /// Advances the countdown by `delta_seconds` if running.
    ///
    /// Returns `Completed` on the tick that reaches zero and never again for
    /// the same session.
    pub fn tick(&mut self, delta_seconds: f64) -> Option<TimerEvent> {
        if self.phase != TimerPhase::Running || delta_seconds.is_nan() || delta_seconds <= 0.0 {
            return None;
        }

        self.remaining -= delta_seconds;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.phase = TimerPhase::Completed;
            return Some(TimerEvent::Completed);
        }
        None
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    /// True while a session is in progress, paused or not.
    pub fn is_running(&self) -> bool {
        matches!(self.phase, TimerPhase::Running | TimerPhase::Paused)
    }

    pub fn is_paused(&self) -> bool {
        self.phase == TimerPhase::Paused
    }

    pub fn is_completed(&self) -> bool {
        self.phase == TimerPhase::Completed
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    /// Elapsed fraction of the session, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        ((self.duration - self.remaining) / self.duration).clamp(0.0, 1.0)
    }

    pub fn formatted(&self) -> String {
        format_mm_ss(self.remaining)
    }
}

/// Formats seconds as `MM:SS`, flooring both parts. Minutes are not capped,
/// so two hours reads `120:00`.
pub fn format_mm_ss(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let minutes = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{:02}:{:02}", minutes, secs)
}
