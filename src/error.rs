use miette::Diagnostic;
use thiserror::Error;

/// Main error type for iconset operations
#[derive(Error, Diagnostic, Debug)]
pub enum IconsetError {
    #[error("IO error: {0}")]
    #[diagnostic(code(iconset::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(iconset::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(iconset::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Geometry error: {message}")]
    #[diagnostic(code(iconset::geometry))]
    Geometry {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Catalog error: {message}")]
    #[diagnostic(code(iconset::catalog))]
    Catalog {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(iconset::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, IconsetError>;
