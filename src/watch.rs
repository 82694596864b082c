// ABOUTME: Watch module for monitoring the content file
// ABOUTME: Reloads the shared viewer whenever content.json changes on disk

use log::{debug, error, info};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc};
use std::time::Duration;

use notify::{RecursiveMode, Watcher};
use notify_debouncer_full::new_debouncer;

use crate::content::{self, ContentSource};
use crate::errors::{Result, ShowcaseError};
use crate::utils;
use crate::viewer::Viewer;

/// Absolute path of the content file to watch. The file itself may not
/// exist yet, but its directory must.
pub fn resolve_watch_target(content_path: &Path) -> Result<PathBuf> {
    if content_path.exists() {
        utils::validate_file_exists(content_path)?;
        return utils::get_absolute_path(content_path);
    }

    let file_name = content_path.file_name().ok_or_else(|| {
        ShowcaseError::ValidationError(format!("Not a file path: {:?}", content_path))
    })?;
    let parent = match content_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(ShowcaseError::PathNotFoundError(parent.to_path_buf()));
    }
    Ok(utils::get_absolute_path(parent)?.join(file_name))
}

/// Watch `content_path` and reload `viewer` after every debounced change,
/// including the file being created after the watch started.
/// Blocks for as long as the watcher delivers events.
pub fn watch_content(
    content_path: &Path,
    debounce_ms: u64,
    fetch_timeout: Duration,
    viewer: Arc<Mutex<Viewer>>,
) -> Result<()> {
    let content_abs = resolve_watch_target(content_path)?;

    let (tx, rx) = mpsc::channel();
    let mut debouncer = new_debouncer(Duration::from_millis(debounce_ms), None, tx)
        .map_err(|e| ShowcaseError::WatchError(format!("Failed to create file watcher: {}", e)))?;

    // Watch the directory; editors may replace the file on save.
    let watch_dir = content_abs
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    debouncer
        .watcher()
        .watch(&watch_dir, RecursiveMode::NonRecursive)
        .map_err(|e| {
            ShowcaseError::WatchError(format!(
                "Failed to start watching directory {:?}: {}",
                watch_dir, e
            ))
        })?;

    info!("Watching for changes to {:?}", content_abs);
    println!("Watching {:?} for changes (Press Ctrl+C to stop)", content_abs);

    let source = ContentSource::Local(content_abs.clone());

    for result in rx {
        match result {
            Ok(events) => {
                let relevant = events.iter().any(|event| {
                    event
                        .paths
                        .iter()
                        .any(|path| is_content_path(path, &content_abs))
                });
                if relevant {
                    debug!("Content file changed, reloading");
                    let loaded = content::load_content(&source, fetch_timeout);
                    viewer.lock().reload(loaded);
                }
            }
            Err(errors) => {
                for e in errors {
                    error!("Watch error: {:?}", e);
                }
            }
        }
    }

    Ok(())
}

/// Whether an event path refers to the watched content file.
fn is_content_path(path: &Path, content_abs: &Path) -> bool {
    if path == content_abs {
        return true;
    }
    match utils::get_absolute_path(path) {
        Ok(abs) => abs == content_abs,
        Err(_) => false,
    }
}
