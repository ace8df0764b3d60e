//! Interpreter settings, layered: flags, then `BF_STRATEGY` / `BF_EOF`, then the
//! `[interpreter]` section of `bf.toml`, then defaults.
//!
//! The config file is `$BF_CONFIG` when set, otherwise `bf.toml` in the XDG
//! config home. Invalid values from the environment or the file are logged and
//! skipped rather than treated as fatal.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use cross_xdg::BaseDirs;

use crate::interpreter::Strategy;
use crate::io::EofPolicy;

/// Fully resolved settings for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub strategy: Strategy,
    pub eof: EofPolicy,
}

/// Settings from a single source; `None` defers to the next layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub strategy: Option<Strategy>,
    pub eof: Option<EofPolicy>,
}

impl Overrides {
    /// Fill the gaps in `self` from `lower`.
    pub fn or(self, lower: Overrides) -> Overrides {
        Overrides {
            strategy: self.strategy.or(lower.strategy),
            eof: self.eof.or(lower.eof),
        }
    }

    pub fn finish(self) -> Settings {
        Settings {
            strategy: self.strategy.unwrap_or_default(),
            eof: self.eof.unwrap_or_default(),
        }
    }
}

/// Resolve settings, with `flags` taking precedence over everything else.
pub fn resolve(flags: Overrides) -> Settings {
    let file = config_path()
        .map(|path| from_file(&path))
        .unwrap_or_default();
    let settings = flags.or(from_env()).or(file).finish();
    log::debug!("resolved settings: {settings:?}");
    settings
}

/// `BF_STRATEGY` and `BF_EOF`.
pub fn from_env() -> Overrides {
    Overrides {
        strategy: env::var("BF_STRATEGY").ok().and_then(|v| parse_logged("BF_STRATEGY", &v)),
        eof: env::var("BF_EOF").ok().and_then(|v| parse_logged("BF_EOF", &v)),
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os("BF_CONFIG") {
        return Some(PathBuf::from(path));
    }

    // On Linux: resolves to /home/<user>/.config
    // On Windows: resolves to C:\Users\<user>\.config
    // On macOS: resolves to /Users/<user>/.config
    let base_dirs = BaseDirs::new().ok()?;
    let mut path = PathBuf::from(base_dirs.config_home());
    path.push("bf.toml");
    Some(path)
}

/// Read overrides from a config file. A missing file yields no overrides.
pub fn from_file(path: &Path) -> Overrides {
    match fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("loading settings from {}", path.display());
            parse(&content)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("no config file at {}", path.display());
            Overrides::default()
        }
        Err(e) => {
            log::warn!("ignoring config file {}: {e}", path.display());
            Overrides::default()
        }
    }
}

/// Parse the `[interpreter]` section of a `bf.toml` document.
pub fn parse(content: &str) -> Overrides {
    // Very small hand-rolled parser: look for [interpreter] section and key = value pairs
    let mut in_section = false;
    let mut map: HashMap<String, String> = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        if line.starts_with('[') && line.ends_with(']') {
            in_section = line[1..line.len() - 1].trim() == "interpreter";
            continue;
        }
        if !in_section { continue; }
        if let Some(eq) = line.find('=') {
            let key = line[..eq].trim().to_string();
            let val_raw = line[eq + 1..].trim();
            // Accept quoted or unquoted
            let val = if val_raw.starts_with('"') && val_raw.ends_with('"') && val_raw.len() >= 2 {
                val_raw[1..val_raw.len() - 1].to_string()
            } else { val_raw.to_string() };
            map.insert(key, val);
        }
    }

    let mut overrides = Overrides::default();
    for (key, value) in &map {
        match key.as_str() {
            "strategy" => overrides.strategy = parse_logged("interpreter.strategy", value),
            "eof" => overrides.eof = parse_logged("interpreter.eof", value),
            _ => log::warn!("ignoring unknown config key interpreter.{key}"),
        }
    }
    overrides
}

fn parse_logged<T>(source: &str, value: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value.parse() {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("ignoring {source}: {e}");
            None
        }
    }
}
