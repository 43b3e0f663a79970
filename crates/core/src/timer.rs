use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerSignal {
    Warning { seconds_left: u32 },
    Expired,
}

/// Informational answer countdown, restarted on every draw. Driven by
/// the session's logical clock; gates nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerTimer {
    started_at_ms: u64,
    duration_ms: u64,
    warning_ms: u64,
    warned: bool,
    expired: bool,
}

impl AnswerTimer {
    pub fn start(now_ms: u64, duration_secs: u32, warning_secs: u32) -> Self {
        Self {
            started_at_ms: now_ms,
            duration_ms: u64::from(duration_secs) * 1000,
            warning_ms: u64::from(warning_secs) * 1000,
            warned: false,
            expired: false,
        }
    }

    pub fn seconds_left(&self, now_ms: u64) -> u32 {
        let end = self.started_at_ms + self.duration_ms;
        let left_ms = end.saturating_sub(now_ms);
        ((left_ms + 999) / 1000) as u32
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// At most one signal per call; each fires once. Call until `None`.
    pub fn poll(&mut self, now_ms: u64) -> Option<TimerSignal> {
        if self.expired {
            return None;
        }
        let end = self.started_at_ms + self.duration_ms;
        if now_ms >= end {
            self.expired = true;
            return Some(TimerSignal::Expired);
        }
        if !self.warned && end - now_ms <= self.warning_ms {
            self.warned = true;
            return Some(TimerSignal::Warning {
                seconds_left: self.seconds_left(now_ms),
            });
        }
        None
    }
}
