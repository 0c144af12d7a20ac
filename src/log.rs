// src/log.rs
//
// Append-only session log at `.pearl/debug.log`. Lines look like
// `[00:00:01.234][INFO] Load: OK bytes=812`, timed from the first log call.
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use crate::config::consts::{LOG_FILE, STORE_DIR};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Debug,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Error => "ERROR",
        })
    }
}

struct Session {
    started: Instant,
    path: PathBuf,
}

static SESSION: OnceLock<Session> = OnceLock::new();
static LOG_LOCK: Mutex<()> = Mutex::new(());

// First call creates the store dir and marks the session start in the file.
fn session() -> &'static Session {
    SESSION.get_or_init(|| {
        let path = PathBuf::from(STORE_DIR).join(LOG_FILE);
        let _ = fs::create_dir_all(STORE_DIR);
        let banner = format!("--- {} {} ---\n", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        append(&path, &banner);
        Session { started: Instant::now(), path }
    })
}

fn append(path: &Path, text: &str) {
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = file.write_all(text.as_bytes());
    }
}

/// `hh:mm:ss.mmm`
pub fn fmt_elapsed(ms: u128) -> String {
    let ms = ms as u64;
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        ms / 3_600_000,
        ms / 60_000 % 60,
        ms / 1_000 % 60,
        ms % 1_000
    )
}

/// Never fails the caller: I/O errors drop the line.
pub fn write_log(level: Level, msg: &str) {
    let session = session();
    let line = format!("[{}][{level}] {msg}\n", fmt_elapsed(session.started.elapsed().as_millis()));
    if let Ok(_guard) = LOG_LOCK.lock() {
        append(&session.path, &line);
    }
}

#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Debug, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Error, &format!($($arg)*))
    };
}
