//! Error types for `DarkAssets`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `DarkAssets` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Color Set Errors ====================
    /// A color is missing a required appearance value.
    #[error("color '{color}' is missing a {appearance} value")]
    MissingColorValue {
        /// The color name from colors.json.
        color: String,
        /// The appearance that was missing (`light` or `dark`).
        appearance: &'static str,
    },

    /// A color value is not a 3 or 6 digit hex string.
    #[error("color '{color}' has an invalid {appearance} value: {value:?}")]
    MalformedColorValue {
        /// The color name from colors.json.
        color: String,
        /// The appearance the value belongs to.
        appearance: &'static str,
        /// The rejected value.
        value: String,
    },

    /// The color set directory already exists in the asset catalog.
    #[error("color set already exists: {path}")]
    DirectoryAlreadyExists {
        /// The existing `.colorset` directory.
        path: PathBuf,
    },

    // ==================== Image Set Errors ====================
    /// An image set has no `Contents.json` (only raised in strict mode).
    #[error("no compiled image set for {logical_path} at {path}")]
    MissingOutputContainer {
        /// The logical image path the identifier was derived from.
        logical_path: String,
        /// The expected `.imageset` directory.
        path: PathBuf,
    },

    /// Copying a dark image into its image set failed.
    #[error("failed to copy {} to {}: {source}", .from.display(), .to.display())]
    CopyFailure {
        /// The source image.
        from: PathBuf,
        /// The destination inside the image set.
        to: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Writing a generated descriptor failed.
    #[error("failed to write {}: {source}", .path.display())]
    WriteFailure {
        /// The file or directory being written.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    // ==================== Parsing Errors ====================
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Config file could not be parsed.
    #[error("config error in {}: {source}", .path.display())]
    Config {
        /// The config file.
        path: PathBuf,
        /// The TOML error.
        source: toml::de::Error,
    },

    /// Unknown identifier hash algorithm.
    #[error("unknown hash algorithm '{0}' (expected sha1 or sha256)")]
    UnknownHashAlgorithm(String),
}

/// A specialized Result type for `DarkAssets` operations.
pub type Result<T> = std::result::Result<T, Error>;
