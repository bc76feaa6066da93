//! Transient status banner with a single replaceable expiry deadline.

use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
}

/// Message shown after an operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusBanner {
    pub text: String,
    pub tone: Tone,
    /// Clear the folder selection once the banner expires.
    pub clears_selection: bool,
}

impl StatusBanner {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Success,
            clears_selection: true,
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Failure,
            clears_selection: false,
        }
    }
}

/// Holds at most one banner and its deadline. Showing a banner replaces the
/// previous one and restarts the countdown.
#[derive(Debug)]
pub struct ExpiringStatus {
    ttl: Duration,
    pending: Option<(StatusBanner, Instant)>,
}

impl ExpiringStatus {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, pending: None }
    }

    pub fn show(&mut self, banner: StatusBanner, now: Instant) {
        self.pending = Some((banner, now + self.ttl));
    }

    pub fn current(&self) -> Option<&StatusBanner> {
        self.pending.as_ref().map(|(b, _)| b)
    }

    /// Time left before the pending banner expires.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(_, deadline)| deadline.saturating_duration_since(now))
    }

    /// Drop the banner if its deadline passed and hand it back to the caller.
    pub fn poll(&mut self, now: Instant) -> Option<StatusBanner> {
        let expired = self
            .pending
            .as_ref()
            .is_some_and(|(_, deadline)| now >= *deadline);
        if expired {
            self.pending.take().map(|(banner, _)| banner)
        } else {
            None
        }
    }
}
