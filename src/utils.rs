// ABOUTME: Utility functions for the artifact-showcase application
// ABOUTME: Provides path validation and directory helpers shared by export, serve and watch

use crate::errors::{Result, ShowcaseError};
use std::path::{Component, Path, PathBuf};

/// Validate that a file exists
pub fn validate_file_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ShowcaseError::PathNotFoundError(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(ShowcaseError::ValidationError(format!(
            "Path is not a file: {:?}",
            path
        )));
    }
    Ok(())
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    } else if !path.is_dir() {
        return Err(ShowcaseError::ValidationError(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Ensure a file's parent directory exists
pub fn ensure_parent_directory_exists(file_path: &Path) -> Result<()> {
    match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory_exists(parent),
        _ => Ok(()),
    }
}

/// Get the absolute path
pub fn get_absolute_path(path: &Path) -> Result<PathBuf> {
    std::fs::canonicalize(path).map_err(|e| {
        ShowcaseError::ValidationError(format!("Failed to get absolute path for {:?}: {}", path, e))
    })
}

/// True for non-empty relative paths made only of normal components, i.e.
/// paths that cannot leave the directory they are joined onto.
pub fn is_contained_relative_path(path: &Path) -> bool {
    let mut components = path.components().peekable();
    if components.peek().is_none() {
        return false;
    }
    components.all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
