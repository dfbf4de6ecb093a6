//! Project manifest (iconset.yaml) parsing.
//!
//! The manifest configures where rendered icons are written and which PNG
//! files the web optimizer picks up. Every field is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IconsetError, Result};

/// Project manifest loaded from iconset.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Output root for rendered icons, relative to the project root.
    #[serde(default = "default_images_root")]
    pub output: PathBuf,

    /// Web variant settings.
    #[serde(default)]
    pub web: WebConfig,
}

/// Settings for `iconset optimize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// Directory scanned for PNG files, relative to the project root.
    #[serde(default = "default_images_root")]
    pub root: PathBuf,

    /// Project-relative path prefixes to leave alone.
    pub skip_prefixes: Vec<String>,

    /// Project-relative paths to leave alone.
    pub skip_exact: Vec<String>,

    /// Variant marker inserted before `.png`.
    pub suffix: String,
}

fn default_images_root() -> PathBuf {
    PathBuf::from("assets/images")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output: default_images_root(),
            web: WebConfig::default(),
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            root: default_images_root(),
            skip_prefixes: vec!["assets/images/web/".to_string()],
            skip_exact: vec![
                "assets/images/android-icon-background.png".to_string(),
                "assets/images/android-icon-foreground.png".to_string(),
                "assets/images/android-icon-monochrome.png".to_string(),
            ],
            suffix: "web".to_string(),
        }
    }
}

impl Manifest {
    /// Load manifest from an iconset.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IconsetError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Self = serde_yaml::from_str(content).map_err(|e| IconsetError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check iconset.yaml syntax".to_string()),
        })?;
        manifest.web.validate()?;
        Ok(manifest)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| IconsetError::Build {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }
}

impl WebConfig {
    /// File name ending that marks an optimized variant, e.g. `.web.png`.
    pub fn variant_ending(&self) -> String {
        format!(".{}.png", self.suffix)
    }

    /// Check if a file name is already an optimized variant.
    pub fn is_variant(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.variant_ending())
    }

    /// Check if a project-relative POSIX path is excluded.
    pub fn is_skipped(&self, relative: &str) -> bool {
        self.skip_prefixes.iter().any(|p| relative.starts_with(p.as_str()))
            || self.skip_exact.iter().any(|p| p == relative)
    }

    fn validate(&self) -> Result<()> {
        let bad = self.suffix.is_empty() || self.suffix.contains(|c: char| c == '/' || c == '\\');
        if bad {
            return Err(IconsetError::Parse {
                message: format!("Invalid web suffix: {:?}", self.suffix),
                help: Some("Use a plain marker such as \"web\"".to_string()),
            });
        }
        Ok(())
    }
}
