//! `.env` file layering.
//!
//! For a project directory and a mode, these files are read when present,
//! lowest priority first:
//!
//! ```text
//! .env
//! .env.local
//! .env.<mode>
//! .env.<mode>.local
//! ```
//!
//! Later files override earlier ones and the process environment overrides
//! all of them. Only `VITE_`-prefixed keys are kept. Files are parsed with
//! `dotenvy` without touching the process environment.
//!
//! `${VAR}` expansion sees only earlier lines of the same file and the process
//! environment. A reference to a key defined in another layer expands to the
//! empty string.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::AppError;

use super::keys;
use super::source::{Layered, ProcessEnv};

/// Process environment over file-provided values.
pub type EnvLayers = Layered<ProcessEnv, HashMap<String, String>>;

/// Candidate files for `mode` under `dir`, lowest priority first.
pub fn candidates(dir: &Path, mode: &str) -> Vec<PathBuf> {
    [
        ".env".to_string(),
        ".env.local".to_string(),
        format!(".env.{mode}"),
        format!(".env.{mode}.local"),
    ]
    .into_iter()
    .map(|name| dir.join(name))
    .collect()
}

/// Merge all existing env files for `mode` under `dir`.
pub fn load(dir: &Path, mode: &str) -> Result<HashMap<String, String>, AppError> {
    check_mode(mode)?;

    let mut merged = HashMap::new();
    for path in candidates(dir, mode) {
        let iter = match dotenvy::from_path_iter(&path) {
            Ok(iter) => iter,
            Err(e) if e.not_found() => continue,
            Err(e) => {
                return Err(AppError::EnvFile(format!(
                    "cannot read {}: {e}",
                    path.display()
                )));
            }
        };

        let mut count = 0usize;
        for item in iter {
            let (key, value) = item.map_err(|e| {
                AppError::EnvFile(format!("parse error in {}: {e}", path.display()))
            })?;
            if key.starts_with(keys::PREFIX) {
                merged.insert(key, value);
                count += 1;
            }
        }
        debug!(path = %path.display(), keys = count, "env file loaded");
    }

    Ok(merged)
}

/// [`load`] wrapped under the process environment.
pub fn source(dir: &Path, mode: &str) -> Result<EnvLayers, AppError> {
    Ok(Layered::new(ProcessEnv, load(dir, mode)?))
}

fn check_mode(mode: &str) -> Result<(), AppError> {
    if mode.is_empty() {
        return Err(AppError::EnvFile("mode must not be empty".into()));
    }
    if mode == "local" {
        return Err(AppError::EnvFile(
            "\"local\" cannot be used as a mode; it clashes with the .local file suffix".into(),
        ));
    }
    Ok(())
}
