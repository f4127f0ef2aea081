use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

/// "Changes saved" confirmation that hides itself after `delay`.
///
/// Nothing runs in the background: visibility is computed from the time of
/// the last `mark` whenever it is asked for.
#[derive(Debug)]
pub struct SavedNotice {
    delay: Duration,
    shown_at: Mutex<Option<Instant>>,
}

impl SavedNotice {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            shown_at: Mutex::new(None),
        }
    }

    pub fn mark(&self) {
        *self.shown_at.lock().unwrap_or_else(PoisonError::into_inner) = Some(Instant::now());
    }

    pub fn dismiss(&self) {
        *self.shown_at.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn is_visible(&self) -> bool {
        self.shown_at
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .map(|at| at.elapsed() < self.delay)
            .unwrap_or(false)
    }
}

impl Default for SavedNotice {
    fn default() -> Self {
        Self::new(Duration::from_millis(3000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_notice_self_clears_after_delay() {
        let notice = SavedNotice::new(Duration::from_secs(3));
        assert!(!notice.is_visible());

        notice.mark();
        assert!(notice.is_visible());

        tokio::time::advance(Duration::from_millis(2999)).await;
        assert!(notice.is_visible());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(!notice.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_mark_restarts_the_window() {
        let notice = SavedNotice::new(Duration::from_secs(3));
        notice.mark();
        tokio::time::advance(Duration::from_secs(2)).await;

        notice.mark();
        tokio::time::advance(Duration::from_secs(2)).await;

        assert!(notice.is_visible());
    }

    #[test]
    fn test_dismiss_hides_immediately() {
        let notice = SavedNotice::default();
        notice.mark();

        notice.dismiss();

        assert!(!notice.is_visible());
    }
}
