// src/config/options.rs
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use super::consts::*;

/// Where the tier sheet lives.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SheetSource {
    /// Nothing usable was configured; never fetched.
    #[default]
    Unconfigured,
    Remote(String),
    Local(PathBuf),
}

impl SheetSource {
    /// Classify a configured location. Empty and placeholder values are unconfigured.
    pub fn from_location(value: &str) -> Self {
        let v = value.trim();
        if v.is_empty() || v == SHEET_PLACEHOLDER {
            return SheetSource::Unconfigured;
        }
        if let Some(path) = v.strip_prefix("file://") {
            return SheetSource::Local(PathBuf::from(path));
        }
        SheetSource::Remote(s!(v))
    }

    pub fn is_configured(&self) -> bool {
        !matches!(self, SheetSource::Unconfigured)
    }

    /// URL to open in a browser ("View CSV"). Only remote sheets have one.
    pub fn remote_url(&self) -> Option<&str> {
        match self {
            SheetSource::Remote(url) => Some(url),
            _ => None,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            SheetSource::Unconfigured => s!("<unconfigured>"),
            SheetSource::Remote(url) => url.clone(),
            SheetSource::Local(path) => join!("file://", &path.to_string_lossy()),
        }
    }
}

/// Which configuration layer supplied the sheet location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceOrigin {
    Flag,
    Env,
    ConfigFile,
    BuildTime,
    Placeholder,
}

/// Raw values from every configuration layer, highest precedence first.
#[derive(Clone, Debug, Default)]
pub struct SourceInputs {
    pub flag: Option<SheetSource>,
    pub env: Option<String>,
    pub file: Option<String>,
    pub build: Option<String>,
}

impl SourceInputs {
    /// Gather env var, config file and build-time value. `flag` comes from the CLI.
    pub fn gather(flag: Option<SheetSource>) -> Self {
        Self {
            flag,
            env: env::var(SHEET_ENV_VAR).ok(),
            file: load_config_file(Path::new(CONFIG_FILE)).sheet_url,
            build: option_env!("PEARL_SHEET_CSV").map(|v| s!(v)),
        }
    }

    /// First configured layer wins; unusable values fall through.
    pub fn resolve(&self) -> (SheetSource, SourceOrigin) {
        if let Some(src) = self.flag.as_ref().filter(|s| s.is_configured()) {
            return (src.clone(), SourceOrigin::Flag);
        }
        let layers = [
            (&self.env, SourceOrigin::Env),
            (&self.file, SourceOrigin::ConfigFile),
            (&self.build, SourceOrigin::BuildTime),
        ];
        for (value, origin) in layers {
            if let Some(v) = value {
                let src = SheetSource::from_location(v);
                if src.is_configured() {
                    return (src, origin);
                }
            }
        }
        (SheetSource::from_location(SHEET_PLACEHOLDER), SourceOrigin::Placeholder)
    }
}

/// Resolve the sheet location from the process environment.
pub fn resolve_source(flag: Option<SheetSource>) -> SheetSource {
    let (src, origin) = SourceInputs::gather(flag).resolve();
    logf!("Config: sheet={} (from {:?})", src.describe(), origin);
    src
}

/// Settings read from `pearl.cfg`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileConfig {
    pub sheet_url: Option<String>,
}

/// `key=value` lines; `#` comments and blank lines ignored, unknown keys skipped.
pub fn parse_config(text: &str) -> FileConfig {
    let mut cfg = FileConfig::default();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        if let Some((key, val)) = line.split_once('=') {
            match key.trim() {
                "sheet_url" => cfg.sheet_url = Some(s!(val.trim())),
                other => logd!("Config: ignoring unknown key {other:?}"),
            }
        }
    }
    cfg
}

pub fn load_config_file(path: &Path) -> FileConfig {
    match fs::read_to_string(path) {
        Ok(text) => parse_config(&text),
        Err(_) => FileConfig::default(),
    }
}
