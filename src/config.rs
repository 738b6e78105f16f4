//! Centralized configuration for EnvSnap.
//!
//! Goals:
//! - Single place to collect tunables instead of scattering env lookups.
//! - The store directory is an explicit value handed to SnapshotStore at
//!   construction; nothing is created at process start.
//! - EnvSnapConfig::from_env() reads the same env vars the CLI documents.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::consts::{DEFAULT_PYTHON, DEFAULT_STORE_DIRNAME};

/// Top-level configuration for EnvSnap.
#[derive(Clone, Debug)]
pub struct EnvSnapConfig {
    /// Optional store directory override.
    /// If None: <home>/.envsnap (decided at runtime).
    /// Env: ENVSNAP_DIR = "/absolute/or/relative/path"
    pub store_dir: Option<String>,

    /// Interpreter command used for the version banner and `-m pip freeze`.
    /// Env: ENVSNAP_PYTHON (default "python3")
    pub python: String,
}

impl Default for EnvSnapConfig {
    fn default() -> Self {
        Self {
            store_dir: None,
            python: DEFAULT_PYTHON.to_string(),
        }
    }
}

impl EnvSnapConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("ENVSNAP_DIR") {
            let s = v.trim();
            if !s.is_empty() {
                cfg.store_dir = Some(s.to_string());
            }
        }

        if let Ok(v) = std::env::var("ENVSNAP_PYTHON") {
            let s = v.trim();
            if !s.is_empty() {
                cfg.python = s.to_string();
            }
        }

        cfg
    }

    /// Fluent setters (builder-style) to override specific fields.

    pub fn with_store_dir<S: Into<String>>(mut self, dir: Option<S>) -> Self {
        self.store_dir = dir.map(Into::into);
        self
    }

    pub fn with_python<S: Into<String>>(mut self, python: S) -> Self {
        self.python = python.into();
        self
    }

    /// Разрешение каталога хранилища.
    ///
    /// Правила:
    /// - не задан/пустой → <home>/.envsnap
    /// - абсолютный      → используем как есть
    /// - относительный   → <home>/<значение>
    pub fn resolve_store_dir(&self) -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        match self.store_dir.as_deref().map(str::trim) {
            None | Some("") => home.join(DEFAULT_STORE_DIRNAME),
            Some(s) => {
                let p = Path::new(s);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    home.join(p)
                }
            }
        }
    }
}

impl fmt::Display for EnvSnapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EnvSnapConfig {{ store_dir: {}, python: {} }}",
            self.store_dir
                .as_deref()
                .unwrap_or("default(<home>/.envsnap)"),
            self.python,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_store_dir_is_under_home() {
        let cfg = EnvSnapConfig::default();
        let dir = cfg.resolve_store_dir();
        assert!(
            dir.ends_with(DEFAULT_STORE_DIRNAME),
            "default dir must end with {}: {}",
            DEFAULT_STORE_DIRNAME,
            dir.display()
        );
    }

    #[test]
    fn absolute_override_used_as_is() {
        let abs = std::env::temp_dir().join("envsnap-cfg-abs");
        let cfg = EnvSnapConfig::default().with_store_dir(Some(abs.display().to_string()));
        assert_eq!(cfg.resolve_store_dir(), abs);
    }

    #[test]
    fn blank_override_falls_back_to_default() {
        let cfg = EnvSnapConfig::default().with_store_dir(Some("   "));
        assert!(cfg.resolve_store_dir().ends_with(DEFAULT_STORE_DIRNAME));
    }
}
