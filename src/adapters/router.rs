use crate::domain::ports::PageRouter;
use std::sync::{Arc, Mutex};

/// Keeps every pushed path in order. Clones share the same history.
#[derive(Debug, Clone, Default)]
pub struct RecordingRouter {
    history: Arc<Mutex<Vec<String>>>,
}

impl RecordingRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paths(&self) -> Vec<String> {
        self.history
            .lock()
            .map(|history| history.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<String> {
        self.history.lock().ok()?.last().cloned()
    }

    pub fn len(&self) -> usize {
        self.history.lock().map(|history| history.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PageRouter for RecordingRouter {
    fn push(&self, path: &str) {
        match self.history.lock() {
            Ok(mut history) => history.push(path.to_string()),
            Err(_) => tracing::error!("Navigation history lock poisoned, dropping {}", path),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingRouter;

impl PageRouter for LoggingRouter {
    fn push(&self, path: &str) {
        tracing::info!(path, "Navigating");
    }
}
