use std::time::{Duration, Instant};

/// Logs how long a pass took, and how many items it went through, when it
/// goes out of scope.
pub struct ScopedTimer {
    label: &'static str,
    start: Instant,
    items: Option<usize>,
}

impl ScopedTimer {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
            items: None,
        }
    }

    pub fn record(&mut self, items: usize) {
        self.items = Some(items);
    }

    pub fn items(&self) -> Option<usize> {
        self.items
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        match self.items {
            Some(n) => log::debug!("{}: {} lines in {:?}", self.label, n, self.elapsed()),
            None => log::debug!("{} finished in {:?}", self.label, self.elapsed()),
        }
    }
}
