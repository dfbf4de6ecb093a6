//! File system scanner for web optimizer sources.
//!
//! Recursively scans the configured image root for PNG files, skipping
//! excluded paths and files that are already optimized variants.

use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{IconsetError, Result};

use super::manifest::WebConfig;

/// Scan the web image root for PNG files to optimize, sorted by path.
///
/// A missing root yields no sources; any other walk failure is an error.
pub fn scan_web_sources(project_root: &Path, web: &WebConfig) -> Result<Vec<PathBuf>> {
    let root = project_root.join(&web.root);
    if !root.exists() {
        return Ok(Vec::new());
    }

    let mut sources = Vec::new();
    for entry in WalkDir::new(&root).follow_links(true) {
        let entry = entry.map_err(|e| IconsetError::Io {
            path: e.path().map(Path::to_path_buf).unwrap_or_else(|| root.clone()),
            message: format!("Failed to scan directory: {}", e),
        })?;
        if entry.file_type().is_file() && should_process(entry.path(), project_root, web) {
            sources.push(entry.into_path());
        }
    }

    sources.sort();
    Ok(sources)
}

/// Check whether a file qualifies as an optimizer source.
pub fn should_process(path: &Path, project_root: &Path, web: &WebConfig) -> bool {
    if path.extension().and_then(|e| e.to_str()) != Some("png") {
        return false;
    }

    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    if web.is_variant(name) {
        return false;
    }

    !web.is_skipped(&relative_posix(path, project_root))
}

/// Path relative to `base`, with `/` separators.
pub fn relative_posix(path: &Path, base: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
