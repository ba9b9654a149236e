//! Project settings (darkassets.toml)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::images::LinkOptions;
use crate::utils::HashAlgorithm;

/// Settings file looked up in the project directory
pub const CONFIG_FILE: &str = "darkassets.toml";

fn default_colors_file() -> PathBuf {
    PathBuf::from("app/assets/json/colors.json")
}

fn default_asset_catalog() -> PathBuf {
    PathBuf::from("build/iphone/Assets.xcassets")
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("app/assets/images")
}

fn default_author() -> String {
    "xcode".to_string()
}

/// The full settings file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathSettings,
    #[serde(default)]
    pub colors: ColorSettings,
    #[serde(default)]
    pub images: ImageSettings,
}

/// Input and output locations, relative to the project directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSettings {
    #[serde(default = "default_colors_file")]
    pub colors_file: PathBuf,
    #[serde(default = "default_asset_catalog")]
    pub asset_catalog: PathBuf,
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            colors_file: default_colors_file(),
            asset_catalog: default_asset_catalog(),
            images_dir: default_images_dir(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSettings {
    /// `info.author` written into every color set
    #[serde(default = "default_author")]
    pub author: String,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            author: default_author(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSettings {
    #[serde(default)]
    pub hash: HashAlgorithm,
    #[serde(default)]
    pub strict_containers: bool,
}

impl From<&ImageSettings> for LinkOptions {
    fn from(settings: &ImageSettings) -> Self {
        Self {
            hash: settings.hash,
            strict_containers: settings.strict_containers,
        }
    }
}

/// Absolute locations for one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub colors_file: PathBuf,
    pub asset_catalog: PathBuf,
    pub images_dir: PathBuf,
}

impl Config {
    /// Parse settings from TOML text
    pub fn from_toml(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| Error::Config {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Read a specific settings file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content, path)
    }

    /// Load `darkassets.toml` from `project_dir`, or defaults if there is none
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(CONFIG_FILE);
        if path.is_file() {
            tracing::debug!("Loading settings from {}", path.display());
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve the configured paths against `project_dir`
    #[must_use]
    pub fn layout(&self, project_dir: &Path) -> ProjectLayout {
        ProjectLayout {
            colors_file: project_dir.join(&self.paths.colors_file),
            asset_catalog: project_dir.join(&self.paths.asset_catalog),
            images_dir: project_dir.join(&self.paths.images_dir),
        }
    }

    #[must_use]
    pub fn link_options(&self) -> LinkOptions {
        (&self.images).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_missing() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(temp.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.colors.author, "xcode");
        assert_eq!(config.images.hash, HashAlgorithm::Sha1);
        assert!(!config.images.strict_containers);
    }

    #[test]
    fn test_partial_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(CONFIG_FILE),
            "[paths]\nimages_dir = \"assets/dark\"\n\n[images]\nhash = \"sha256\"\n",
        )
        .unwrap();

        let config = Config::load(temp.path()).unwrap();
        assert_eq!(config.paths.images_dir, PathBuf::from("assets/dark"));
        assert_eq!(config.paths.colors_file, default_colors_file());
        assert_eq!(config.images.hash, HashAlgorithm::Sha256);

        let layout = config.layout(temp.path());
        assert_eq!(layout.images_dir, temp.path().join("assets/dark"));
        assert_eq!(layout.asset_catalog, temp.path().join("build/iphone/Assets.xcassets"));
    }

    #[test]
    fn test_invalid_file() {
        let err = Config::from_toml("[images]\nhash = \"md5\"\n", Path::new("darkassets.toml")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_roundtrip() {
        let mut config = Config::default();
        config.images.strict_containers = true;
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::from_toml(&text, Path::new("x")).unwrap(), config);
    }
}
