// src/loader.rs
//
// One load per lifecycle: fetch the sheet text, report success or failure.
// The window runs it on a worker thread and polls a `LoadHandle`;
// the CLI calls `load` directly.

use std::fs;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crate::config::options::SheetSource;
use crate::core::net;
use crate::error::LoadError;

/// Progress of the single load attempt.
#[derive(Debug)]
pub enum LoadState {
    Pending,
    Succeeded(String),
    Failed(LoadError),
}

impl LoadState {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }

    /// Static text for the user when the load failed.
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            LoadState::Failed(e) => Some(e.user_message()),
            _ => None,
        }
    }
}

impl From<Result<String, LoadError>> for LoadState {
    fn from(res: Result<String, LoadError>) -> Self {
        match res {
            Ok(text) => LoadState::Succeeded(text),
            Err(e) => LoadState::Failed(e),
        }
    }
}

/// Fetch the raw sheet text. Unconfigured sources fail without any I/O.
pub fn load(source: &SheetSource) -> Result<String, LoadError> {
    match source {
        SheetSource::Unconfigured => Err(LoadError::Unconfigured),
        SheetSource::Remote(url) => net::http_get(url),
        SheetSource::Local(path) => Ok(fs::read_to_string(path)?),
    }
}

/// Receiving end of a background load.
pub struct LoadHandle {
    rx: Receiver<Result<String, LoadError>>,
    delivered: bool,
}

impl LoadHandle {
    /// `None` while still running; the outcome exactly once, then `None` again.
    pub fn poll(&mut self) -> Option<LoadState> {
        if self.delivered {
            return None;
        }
        let state = match self.rx.try_recv() {
            Ok(res) => res.into(),
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                LoadState::Failed(LoadError::Network(s!("loader thread exited")))
            }
        };
        self.delivered = true;
        Some(state)
    }
}

/// Start a load on a worker thread. `on_done` runs on that thread once the
/// outcome is available (the window uses it to request a repaint).
pub fn spawn<F>(source: SheetSource, on_done: F) -> LoadHandle
where
    F: FnOnce() + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        logf!("Load: Begin {}", source.describe());
        let res = load(&source);
        match &res {
            Ok(text) => logf!("Load: OK bytes={}", text.len()),
            Err(e) => loge!("Load: Error {}: {}", source.describe(), e),
        }
        let _ = tx.send(res);
        on_done();
    });
    LoadHandle { rx, delivered: false }
}
