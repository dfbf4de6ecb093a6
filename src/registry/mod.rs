//! Icon catalog.
//!
//! The catalog is plain data: an ordered list binding each output path to the
//! builder that renders it. Adding or removing an icon is a change to the
//! list in [`standard`], never to dispatch logic.
//!
//! # Example
//!
//! ```ignore
//! use iconset::registry::CatalogBuilder;
//!
//! let mut builder = CatalogBuilder::new();
//! builder.add("record_icon.png", icons::record);
//! builder.add("two_beats.png", || icons::beats(2));
//!
//! let catalog = builder.build()?;
//! ```

mod standard;

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{IconsetError, Result};
use crate::render::Canvas;

pub use standard::{standard, ICON_SET_DIR};

/// A zero-argument thunk rendering one icon.
pub type BuildFn = Box<dyn Fn() -> Result<Canvas> + Send + Sync>;

/// One output file and the builder that produces it.
pub struct CatalogEntry {
    path: PathBuf,
    build: BuildFn,
}

impl CatalogEntry {
    /// Destination path, relative to the output root.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run the builder.
    pub fn render(&self) -> Result<Canvas> {
        (self.build)()
    }
}

impl fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of catalog entries.
///
/// The catalog is immutable after construction - use `CatalogBuilder`
/// to create a new catalog.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Entries in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    /// Destination paths in registration order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(|e| e.path())
    }

    /// Find the entry for a destination path.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&CatalogEntry> {
        let path = path.as_ref();
        self.entries.iter().find(|e| e.path == path)
    }

    /// Entry at a registration index.
    pub fn entry(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builder for constructing a Catalog.
#[derive(Default)]
pub struct CatalogBuilder {
    entries: Vec<CatalogEntry>,
}

impl CatalogBuilder {
    /// Create a new catalog builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn add<F>(&mut self, path: impl Into<PathBuf>, build: F) -> &mut Self
    where
        F: Fn() -> Result<Canvas> + Send + Sync + 'static,
    {
        self.entries.push(CatalogEntry {
            path: path.into(),
            build: Box::new(build),
        });
        self
    }

    /// Build the catalog, rejecting duplicate or absolute destinations.
    pub fn build(self) -> Result<Catalog> {
        let mut seen: HashSet<&Path> = HashSet::new();
        for entry in &self.entries {
            if entry.path.is_absolute() || entry.path.as_os_str().is_empty() {
                return Err(IconsetError::Catalog {
                    message: format!("Invalid destination: {:?}", entry.path),
                    help: Some("Catalog paths are relative to the output root".to_string()),
                });
            }
            if !seen.insert(entry.path.as_path()) {
                return Err(IconsetError::Catalog {
                    message: format!("Duplicate destination: {}", entry.path.display()),
                    help: Some("Each catalog entry must write a distinct file".to_string()),
                });
            }
        }
        drop(seen);

        Ok(Catalog {
            entries: self.entries,
        })
    }
}
