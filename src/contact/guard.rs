use log::warn;

use crate::config;
use crate::contact::submission::{SubmissionPhase, SubmitError};
use crate::storage::KeyValueStore;

/// Per-browser rate limit on contact submissions.
///
/// The only state is the time of the last successful submission, kept in
/// `store` so it survives reloads. Everything else is derived from it on
/// demand.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionGuard<S> {
    store: S,
    key: &'static str,
    cooldown_ms: i64,
}

impl<S: KeyValueStore> SubmissionGuard<S> {
    pub fn new(store: S) -> Self {
        Self::with_cooldown(store, config::LAST_SUBMISSION_KEY, config::SUBMISSION_COOLDOWN_MS)
    }

    pub fn with_cooldown(store: S, key: &'static str, cooldown_ms: i64) -> Self {
        Self {
            store,
            key,
            cooldown_ms,
        }
    }

    pub fn last_submission_ms(&self) -> Option<i64> {
        let raw = self.store.get(self.key)?;
        match raw.trim().parse::<i64>() {
            Ok(ms) => Some(ms),
            Err(_) => {
                warn!("Ignoring unreadable {} value {:?}", self.key, raw);
                None
            }
        }
    }

    /// Milliseconds left in the cooldown window, never more than the full
    /// window even if the stored timestamp is in the future.
    pub fn remaining_ms(&self, now_ms: i64) -> i64 {
        match self.last_submission_ms() {
            Some(last) => last
                .saturating_add(self.cooldown_ms)
                .saturating_sub(now_ms)
                .clamp(0, self.cooldown_ms),
            None => 0,
        }
    }

    pub fn remaining_secs(&self, now_ms: i64) -> u64 {
        let remaining = self.remaining_ms(now_ms) as u64;
        remaining.div_ceil(1000)
    }

    pub fn phase(&self, now_ms: i64) -> SubmissionPhase {
        SubmissionPhase::from_remaining(self.remaining_secs(now_ms))
    }

    pub fn check(&self, now_ms: i64) -> Result<(), SubmitError> {
        match self.remaining_secs(now_ms) {
            0 => Ok(()),
            remaining_secs => Err(SubmitError::CoolingDown { remaining_secs }),
        }
    }

    pub fn record_success(&self, now_ms: i64) {
        self.store.set(self.key, &now_ms.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    const T0: i64 = 1_700_000_000_000;

    #[test]
    fn fresh_browser_is_idle() {
        let guard = SubmissionGuard::new(MemoryStore::new());
        assert_eq!(guard.last_submission_ms(), None);
        assert_eq!(guard.phase(T0), SubmissionPhase::Idle);
        assert!(guard.check(T0).is_ok());
    }

    #[test]
    fn ten_seconds_after_success_reports_fifty_left() {
        let guard = SubmissionGuard::new(MemoryStore::new());
        guard.record_success(T0);

        match guard.check(T0 + 10_000) {
            Err(SubmitError::CoolingDown { remaining_secs }) => assert_eq!(remaining_secs, 50),
            other => panic!("expected cooldown, got {:?}", other),
        }
    }

    #[test]
    fn remaining_seconds_round_up_and_never_increase() {
        let guard = SubmissionGuard::new(MemoryStore::new());
        guard.record_success(T0);

        let mut previous = u64::MAX;
        for elapsed in (0..60_000).step_by(250) {
            let secs = guard.remaining_secs(T0 + elapsed);
            assert!(secs > 0, "cooldown ended early at {elapsed}ms");
            assert!(secs <= previous);
            previous = secs;
        }
        assert_eq!(guard.remaining_secs(T0 + 59_001), 1);
        assert_eq!(guard.remaining_secs(T0 + 60_000), 0);
        assert!(guard.check(T0 + 60_000).is_ok());
    }

    #[test]
    fn reload_mid_cooldown_is_still_blocked() {
        let store = MemoryStore::new();
        SubmissionGuard::new(store.clone()).record_success(T0);

        let after_reload = SubmissionGuard::new(store);
        assert_eq!(
            after_reload.phase(T0 + 20_000),
            SubmissionPhase::Cooldown { remaining_secs: 40 }
        );
        assert_eq!(after_reload.phase(T0 + 60_000), SubmissionPhase::Idle);
    }

    #[test]
    fn future_timestamp_is_capped_at_full_window() {
        let guard = SubmissionGuard::new(MemoryStore::new());
        guard.record_success(T0 + 3_600_000);
        assert_eq!(guard.remaining_secs(T0), 60);
    }

    #[test]
    fn garbage_in_storage_counts_as_no_submission() {
        let store = MemoryStore::new();
        store.set(config::LAST_SUBMISSION_KEY, "yesterday");
        let guard = SubmissionGuard::new(store);
        assert_eq!(guard.last_submission_ms(), None);
        assert_eq!(guard.phase(T0), SubmissionPhase::Idle);
    }
}
