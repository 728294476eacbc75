use std::sync::Mutex;

/// Run counters shared across the pipeline stages.
pub struct MetricsRecorder {
    inner: Mutex<Counters>,
}

#[derive(Default)]
struct Counters {
    rows_processed: usize,
    stages_completed: usize,
    errors: usize,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSnapshot {
    pub rows_processed: usize,
    pub stages_completed: usize,
    pub errors: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Counters::default()),
        }
    }

    pub fn record_rows(&self, rows: usize) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.rows_processed += rows;
        }
    }

    pub fn record_stage(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.stages_completed += 1;
        }
    }

    pub fn record_error(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.errors += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        match self.inner.lock() {
            Ok(counters) => MetricsSnapshot {
                rows_processed: counters.rows_processed,
                stages_completed: counters.stages_completed,
                errors: counters.errors,
            },
            Err(_) => MetricsSnapshot::default(),
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
