//! Catalog discovery and file watching.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};

use crate::error::ContentError;
use crate::models::Catalog;

const CATALOG_DIR: &str = "secureguard";
const CATALOG_FILE: &str = "modules.json";

/// Candidate catalog files, in order of priority:
/// 1. `--content <PATH>`
/// 2. ./secureguard/modules.json (local customization)
/// 3. <config dir>/secureguard/modules.json (global user config)
pub fn catalog_candidates(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(path) = explicit {
        candidates.push(path.to_path_buf());
    }
    candidates.push(PathBuf::from(CATALOG_DIR).join(CATALOG_FILE));
    if let Some(config) = dirs::config_dir() {
        candidates.push(config.join(CATALOG_DIR).join(CATALOG_FILE));
    }
    candidates
}

/// Load the first usable catalog, falling back to the embedded one.
///
/// Returns the catalog and the file it came from (`None` for embedded).
/// A candidate that exists but fails to load is logged and skipped.
pub fn find_catalog(explicit: Option<&Path>) -> Result<(Catalog, Option<PathBuf>), ContentError> {
    for path in catalog_candidates(explicit) {
        if !path.exists() {
            if explicit.is_some_and(|p| p == path) {
                tracing::warn!(path = %path.display(), "content file not found");
            }
            continue;
        }
        match Catalog::load(&path) {
            Ok(catalog) => {
                tracing::info!(path = %path.display(), "using catalog");
                return Ok((catalog, Some(path)));
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping unusable catalog");
            }
        }
    }

    tracing::info!("using embedded catalog");
    Ok((Catalog::embedded()?, None))
}

/// Set up a file watcher that raises `needs_reload` when the catalog changes
pub fn setup_catalog_watcher(
    catalog_path: PathBuf,
    needs_reload: Arc<Mutex<bool>>,
) -> Option<RecommendedWatcher> {
    let config = Config::default().with_poll_interval(Duration::from_millis(500));

    let canonical = catalog_path
        .canonicalize()
        .unwrap_or_else(|_| catalog_path.clone());
    let file_name = catalog_path.file_name().map(|s| s.to_os_string());

    let watcher_result = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            let Ok(event) = res else {
                return;
            };
            // Editors often replace the file, so compare by name as a fallback
            let matches = event.paths.iter().any(|p| {
                if p.canonicalize().is_ok_and(|c| c == canonical) {
                    return true;
                }
                match (&file_name, p.file_name()) {
                    (Some(expected), Some(actual)) => actual == expected,
                    _ => false,
                }
            });

            if matches {
                if let Ok(mut flag) = needs_reload.lock() {
                    *flag = true;
                }
            }
        },
        config,
    );

    match watcher_result {
        Ok(mut watcher) => {
            let parent = catalog_path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            if let Err(err) = watcher.watch(parent, RecursiveMode::NonRecursive) {
                tracing::warn!(error = %err, "could not watch catalog directory");
            }
            Some(watcher)
        }
        Err(err) => {
            tracing::warn!(error = %err, "file watcher unavailable");
            None
        }
    }
}
