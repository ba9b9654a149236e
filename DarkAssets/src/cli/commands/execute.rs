//! Command execution implementations

use super::Commands;
use super::{build, identifier};
use crate::hook::Stages;

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Build { project } => build::execute(project, Stages::ALL),
            Commands::Colors { project } => build::execute(project, Stages::COLORS),
            Commands::Images { project } => build::execute(project, Stages::IMAGES),
            Commands::Identifier { name, hash } => identifier::execute(name, hash),
        }
    }
}
