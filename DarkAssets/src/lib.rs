//! # DarkAssets
//!
//! A pre-build step that makes an Xcode asset catalog appearance-aware.
//!
//! ## What it generates
//!
//! - **Color sets** - `colors.json` entries become `<name>.colorset`
//!   directories with default, light and dark variants
//! - **Dark images** - `-dark` image files are copied into the image sets the
//!   catalog compiler generated and registered as dark-appearance entries
//!
//! ## Quick Start
//!
//! ```no_run
//! use darkassets::PreBuildHook;
//!
//! let hook = PreBuildHook::for_project(std::path::Path::new("."))?;
//! hook.run(|report| {
//!     println!("changed anything: {}", report.changed_anything());
//! })?;
//! # Ok::<(), darkassets::Error>(())
//! ```
//!
//! ### Individual stages
//!
//! ```
//! use darkassets::colors::{Rgb, hex_to_rgb};
//! use darkassets::images::ImageFileRecord;
//!
//! assert_eq!(hex_to_rgb("#03F"), Some(Rgb::new(0, 51, 255)));
//!
//! let record = ImageFileRecord::parse("icon-dark@2x.png").unwrap();
//! assert_eq!(record.logical_path(), "images/icon.png");
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `darkassets` command-line binary

pub mod colors;
pub mod config;
pub mod error;
pub mod hook;
pub mod images;
pub mod types;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use hook::{BuildReport, PreBuildHook, SkipReason, StageOutcome, Stages};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::colors::{ColorEntry, ColorSetContents, Rgb, hex_to_rgb, materialize_colors};
    pub use crate::config::{Config, ProjectLayout};
    pub use crate::error::{Error, Result};
    pub use crate::hook::{BuildReport, PreBuildHook, SkipReason, StageOutcome, Stages};
    pub use crate::images::{ImageFileRecord, ImageSetContents, LinkOptions, Scale, link_dark_images};
    pub use crate::types::{BuildPhase, BuildProgress, BuildProgressCallback};
    pub use crate::utils::{HashAlgorithm, identifier};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
