use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts one in-flight operation for as long as it lives.
///
/// Released on drop, so a future that is cancelled mid-request still
/// brings the counter back down.
pub(crate) struct LoadingGuard<'a>(&'a AtomicUsize);

impl<'a> LoadingGuard<'a> {
    pub(crate) fn new(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
