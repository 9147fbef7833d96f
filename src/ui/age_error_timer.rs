use std::time::{Duration, Instant};

use crate::config::AgeErrorTimerPolicy;

/// Pending clears of the age error flag, polled from the UI tick.
#[derive(Debug, Clone)]
pub struct AgeErrorTimer {
    policy: AgeErrorTimerPolicy,
    duration: Duration,
    deadlines: Vec<Instant>,
}

impl AgeErrorTimer {
    pub fn new(policy: AgeErrorTimerPolicy, duration: Duration) -> Self {
        Self {
            policy,
            duration,
            deadlines: Vec::new(),
        }
    }

    /// Schedule a clear `duration` after `now`.
    pub fn arm(&mut self, now: Instant) {
        if self.policy == AgeErrorTimerPolicy::Restart {
            self.deadlines.clear();
        }
        self.deadlines.push(now + self.duration);
    }

    /// Drop every deadline at or before `now`; true if any fired.
    pub fn poll(&mut self, now: Instant) -> bool {
        let before = self.deadlines.len();
        self.deadlines.retain(|deadline| *deadline > now);
        self.deadlines.len() != before
    }

    pub fn is_pending(&self) -> bool {
        !self.deadlines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLASH: Duration = Duration::from_secs(3);

    #[test]
    fn fires_once_after_duration() {
        let start = Instant::now();
        let mut timer = AgeErrorTimer::new(AgeErrorTimerPolicy::Fixed, FLASH);
        timer.arm(start);
        assert!(!timer.poll(start + Duration::from_millis(2999)));
        assert!(timer.poll(start + FLASH));
        assert!(!timer.poll(start + Duration::from_secs(10)));
        assert!(!timer.is_pending());
    }

    #[test]
    fn fixed_policy_keeps_first_deadline() {
        let start = Instant::now();
        let mut timer = AgeErrorTimer::new(AgeErrorTimerPolicy::Fixed, FLASH);
        timer.arm(start);
        timer.arm(start + Duration::from_secs(2));
        assert!(timer.poll(start + FLASH));
        assert!(timer.is_pending());
        assert!(timer.poll(start + Duration::from_secs(5)));
    }

    #[test]
    fn restart_policy_cancels_pending_clear() {
        let start = Instant::now();
        let mut timer = AgeErrorTimer::new(AgeErrorTimerPolicy::Restart, FLASH);
        timer.arm(start);
        timer.arm(start + Duration::from_secs(2));
        assert!(!timer.poll(start + FLASH));
        assert!(timer.poll(start + Duration::from_secs(5)));
    }
}
