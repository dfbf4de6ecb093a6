//! Project discovery for iconset.
//!
//! Locates the optional `iconset.yaml` manifest in a project root and
//! resolves the directories the build and optimize commands work in.
//!
//! # Example
//!
//! ```ignore
//! use iconset::discovery::discover;
//!
//! let project = discover(".")?;
//! for source in project.web_sources()? {
//!     println!("{}", source.display());
//! }
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use manifest::{Manifest, WebConfig};
pub use scanner::{relative_posix, scan_web_sources, should_process};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "iconset.yaml";

/// A project root with its (possibly default) manifest.
#[derive(Debug)]
pub struct Project {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no iconset.yaml was found).
    pub manifest: Manifest,

    /// Whether an iconset.yaml manifest was found.
    pub has_manifest: bool,
}

impl Project {
    /// Directory the icon catalog is rendered into.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.manifest.output)
    }

    /// Directory the web optimizer scans.
    pub fn web_root(&self) -> PathBuf {
        self.root.join(&self.manifest.web.root)
    }

    /// Optimizer sources under the web root, sorted.
    pub fn web_sources(&self) -> Result<Vec<PathBuf>> {
        scan_web_sources(&self.root, &self.manifest.web)
    }
}

/// Discover a project rooted at `root`.
///
/// Reads `iconset.yaml` when present; otherwise every setting takes its
/// default.
pub fn discover(root: impl AsRef<Path>) -> Result<Project> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    Ok(Project {
        root,
        manifest,
        has_manifest,
    })
}
