//! Filesystem access for configuration and story files.

use std::fs;
use std::path::{Path, PathBuf};

use codetabs_foundation::{Error, ErrorKind, Result};
use serde::Serialize;

/// Suffixes of story definition files.
pub const STORY_SUFFIXES: &[&str] = &[".stories.tsx", ".stories.ts"];

/// Reads a UTF-8 file.
///
/// # Errors
///
/// Returns `IoError` if the file cannot be read.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to read '{}': {e}",
            path.display()
        )))
    })
}

/// Returns every story file under `dir`, recursively, sorted by path.
///
/// # Errors
///
/// Returns `IoError` if a directory cannot be listed.
pub fn story_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to list '{}': {e}",
            dir.display()
        )))
    })?;

    for entry in entries {
        let path = entry
            .map_err(|e| Error::new(ErrorKind::IoError(e.to_string())))?
            .path();
        if path.is_dir() {
            collect(&path, files)?;
        } else if is_story_file(&path) {
            files.push(path);
        }
    }
    Ok(())
}

fn is_story_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| STORY_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)))
}

/// Renders `value` as pretty-printed JSON.
///
/// # Errors
///
/// Returns `SerializationError` if `value` cannot be represented as JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}
