//! Transient feedback banner.
//!
//! Only one banner is visible at a time. Showing a new one bumps the
//! generation, which invalidates any dismiss scheduled for the old one,
//! and restarts the expiry from the new show time.

use serde::Serialize;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// How long a banner of this severity stays up.
    pub fn dismiss_after(self) -> Duration {
        match self {
            Self::Success => Duration::from_secs(2),
            Self::Error => Duration::from_secs(4),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub message: String,
    pub severity: Severity,
    pub generation: u64,
    pub dismiss_after_ms: u64,
}

#[derive(Debug, Default)]
pub struct FeedbackBanner {
    current: Option<(Feedback, Instant)>,
    generation: u64,
}

impl FeedbackBanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is showing and restart the timer.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity, now: Instant) -> Feedback {
        self.generation += 1;
        let feedback = Feedback {
            message: message.into(),
            severity,
            generation: self.generation,
            dismiss_after_ms: severity.dismiss_after().as_millis() as u64,
        };
        let expires = now + severity.dismiss_after();
        self.current = Some((feedback.clone(), expires));
        feedback
    }

    /// The banner visible at `now`, if it has not expired.
    pub fn current(&self, now: Instant) -> Option<&Feedback> {
        match &self.current {
            Some((feedback, expires)) if now < *expires => Some(feedback),
            _ => None,
        }
    }

    /// Dismiss the banner if `generation` is still the one showing.
    /// Returns `false` for stale dismissals.
    pub fn dismiss(&mut self, generation: u64) -> bool {
        match &self.current {
            Some((feedback, _)) if feedback.generation == generation => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
