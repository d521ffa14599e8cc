use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex, Weak,
};

/// Collects everything an [`OutputListener`] emits while the tracker is alive
pub struct OutputTracker<T: Clone + Send + 'static> {
    output: Mutex<Vec<T>>,
}

impl<T: Clone + Send + 'static> OutputTracker<T> {
    fn new() -> Self {
        Self {
            output: Mutex::new(Vec::new()),
        }
    }

    fn add(&self, t: T) {
        lock(&self.output).push(t);
    }

    pub fn output(&self) -> Vec<T> {
        lock(&self.output).clone()
    }

    pub fn last(&self) -> Option<T> {
        lock(&self.output).last().cloned()
    }

    pub fn clear(&self) {
        lock(&self.output).clear();
    }
}

/// Fans emitted values out to all live trackers. Emitting is a no-op while
/// nothing is tracked.
pub struct OutputListener<T: Clone + Send + 'static> {
    trackers: Mutex<Vec<Weak<OutputTracker<T>>>>,
    tracked: AtomicBool,
}

impl<T: Clone + Send + 'static> OutputListener<T> {
    pub fn new() -> Self {
        Self {
            trackers: Mutex::new(Vec::new()),
            tracked: AtomicBool::new(false),
        }
    }

    pub fn is_tracked(&self) -> bool {
        self.tracked.load(Ordering::SeqCst)
    }

    pub fn track(&self) -> Arc<OutputTracker<T>> {
        let tracker = Arc::new(OutputTracker::new());
        lock(&self.trackers).push(Arc::downgrade(&tracker));
        self.tracked.store(true, Ordering::SeqCst);
        tracker
    }

    pub fn emit(&self, t: T) {
        if !self.is_tracked() {
            return;
        }

        let mut trackers = lock(&self.trackers);
        trackers.retain(|tracker| match tracker.upgrade() {
            Some(tracker) => {
                tracker.add(t.clone());
                true
            }
            None => false,
        });
        self.tracked.store(!trackers.is_empty(), Ordering::SeqCst);
    }

    pub fn tracker_count(&self) -> usize {
        lock(&self.trackers).len()
    }
}

impl<T: Clone + Send + 'static> Default for OutputListener<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Poisoning is ignored, a push or clear never leaves the vec half updated
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
