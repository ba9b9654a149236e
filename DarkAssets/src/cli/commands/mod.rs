use clap::{Args, Subcommand};
use std::path::PathBuf;

pub mod build;
pub mod execute;
pub mod identifier;

/// Options shared by the stage commands
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project directory (paths in darkassets.toml are relative to it)
    #[arg(default_value = ".")]
    pub project: PathBuf,

    /// Settings file (defaults to `<PROJECT>/darkassets.toml`)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full pre-build step (color sets, then dark images)
    Build {
        #[command(flatten)]
        project: ProjectArgs,
    },

    /// Generate color sets from colors.json only
    Colors {
        #[command(flatten)]
        project: ProjectArgs,
    },

    /// Link dark image variants into compiled image sets only
    Images {
        #[command(flatten)]
        project: ProjectArgs,
    },

    /// Print the image set name the catalog compiler uses for an image
    Identifier {
        /// Image filename or logical path (e.g. "icon@2x.png" or "images/icon.png")
        name: String,

        /// Hash algorithm (sha1, sha256)
        #[arg(long, default_value = "sha1")]
        hash: String,
    },
}
