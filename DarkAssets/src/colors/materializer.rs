//! `.colorset` generation from colors.json

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use super::colorset::{AdaptiveColor, ColorSetContents};
use super::hex::{Rgb, hex_to_rgb};
use crate::error::{Error, Result};
use crate::types::{BuildPhase, BuildProgress, BuildProgressCallback};
use crate::utils::json;

/// Filename of every catalog descriptor
pub const CONTENTS_JSON: &str = "Contents.json";

/// One value of colors.json
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ColorEntry {
    /// Key in colors.json
    #[serde(skip)]
    pub name: String,
    /// Falls back to `light` when absent or empty
    pub default: Option<String>,
    pub light: Option<String>,
    pub dark: Option<String>,
}

impl ColorEntry {
    /// Resolve all three appearances, failing on a missing or malformed value
    pub fn resolve(&self) -> Result<AdaptiveColor> {
        let light = self.require("light", self.light.as_deref())?;
        let dark = self.require("dark", self.dark.as_deref())?;
        let default = match self.default.as_deref().filter(|value| !value.is_empty()) {
            Some(value) => self.parse("default", value)?,
            None => light,
        };
        Ok(AdaptiveColor {
            default,
            light,
            dark,
        })
    }

    fn require(&self, appearance: &'static str, value: Option<&str>) -> Result<Rgb> {
        let value = value.ok_or_else(|| Error::MissingColorValue {
            color: self.name.clone(),
            appearance,
        })?;
        self.parse(appearance, value)
    }

    fn parse(&self, appearance: &'static str, value: &str) -> Result<Rgb> {
        hex_to_rgb(value).ok_or_else(|| Error::MalformedColorValue {
            color: self.name.clone(),
            appearance,
            value: value.to_string(),
        })
    }
}

/// Result of materializing color sets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorReport {
    /// Created `.colorset` directories, in colors.json order
    pub written: Vec<PathBuf>,
}

/// Parse colors.json, keeping key order
pub fn parse_colors(content: &str) -> Result<Vec<ColorEntry>> {
    let map: IndexMap<String, ColorEntry> = serde_json::from_str(content)?;
    Ok(map
        .into_iter()
        .map(|(name, entry)| ColorEntry { name, ..entry })
        .collect())
}

/// Read and parse a colors.json file
pub fn load_colors(path: &Path) -> Result<Vec<ColorEntry>> {
    let content = std::fs::read_to_string(path)?;
    parse_colors(&content)
}

/// Create `<name>.colorset/Contents.json` under `asset_catalog`
///
/// The directory must not exist yet; color sets are never merged.
pub fn write_color_set(asset_catalog: &Path, name: &str, contents: &ColorSetContents) -> Result<PathBuf> {
    let dir = asset_catalog.join(format!("{name}.colorset"));
    std::fs::create_dir(&dir).map_err(|source| {
        if source.kind() == ErrorKind::AlreadyExists {
            Error::DirectoryAlreadyExists { path: dir.clone() }
        } else {
            Error::WriteFailure {
                path: dir.clone(),
                source,
            }
        }
    })?;
    json::write_tabbed(&dir.join(CONTENTS_JSON), contents)?;
    Ok(dir)
}

/// Write one color set per entry
///
/// Every entry is resolved before anything is written, so a malformed value
/// leaves the catalog untouched.
pub fn materialize_colors(
    entries: &[ColorEntry],
    asset_catalog: &Path,
    author: &str,
    progress: BuildProgressCallback,
) -> Result<ColorReport> {
    let resolved = entries
        .iter()
        .map(|entry| entry.resolve().map(|color| (entry.name.as_str(), color)))
        .collect::<Result<Vec<_>>>()?;

    let total = resolved.len();
    let mut report = ColorReport::default();

    for (index, (name, color)) in resolved.into_iter().enumerate() {
        progress(&BuildProgress::with_item(BuildPhase::Colors, index + 1, total, name));

        let contents = ColorSetContents::new(color, author);
        let dir = write_color_set(asset_catalog, name, &contents)?;
        tracing::debug!("Wrote color set {}", dir.display());
        report.written.push(dir);
    }

    tracing::info!("Generated {} color sets", report.written.len());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::colorset::Luminosity;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn entry(name: &str, default: Option<&str>, light: Option<&str>, dark: Option<&str>) -> ColorEntry {
        ColorEntry {
            name: name.to_string(),
            default: default.map(str::to_string),
            light: light.map(str::to_string),
            dark: dark.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_colors_keeps_order() {
        let entries = parse_colors(
            r##"{"zeta": {"light": "#fff", "dark": "#000"}, "alpha": {"default": "#123", "light": "#fff", "dark": "#000"}}"##,
        )
        .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "zeta");
        assert_eq!(entries[0].default, None);
        assert_eq!(entries[1].name, "alpha");
        assert_eq!(entries[1].default.as_deref(), Some("#123"));
    }

    #[test]
    fn test_default_falls_back_to_light() {
        let color = entry("c", None, Some("#abc"), Some("#000")).resolve().unwrap();
        assert_eq!(color.default, Rgb::new(0xaa, 0xbb, 0xcc));
        assert_eq!(color.default, color.light);
    }

    #[test]
    fn test_empty_default_falls_back_to_light() {
        let entries = parse_colors(r##"{"c": {"default": "", "light": "#fff", "dark": "#000"}}"##).unwrap();
        let color = entries[0].resolve().unwrap();
        assert_eq!(color.default, Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_explicit_default() {
        let color = entry("c", Some("#111111"), Some("#fff"), Some("#000")).resolve().unwrap();
        assert_eq!(color.default, Rgb::new(17, 17, 17));
    }

    #[test]
    fn test_missing_dark_is_an_error() {
        let err = entry("c", None, Some("#fff"), None).resolve().unwrap_err();
        assert!(matches!(err, Error::MissingColorValue { appearance: "dark", .. }));
    }

    #[test]
    fn test_malformed_value_is_an_error() {
        let err = entry("c", Some("nope"), Some("#fff"), Some("#000")).resolve().unwrap_err();
        match err {
            Error::MalformedColorValue { color, appearance, value } => {
                assert_eq!(color, "c");
                assert_eq!(appearance, "default");
                assert_eq!(value, "nope");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_materialize_writes_descriptor() {
        let temp = TempDir::new().unwrap();
        let entries = vec![entry("myColor", None, Some("#ffffff"), Some("#000000"))];

        let report = materialize_colors(&entries, temp.path(), "xcode", &|_| {}).unwrap();
        assert_eq!(report.written, vec![temp.path().join("myColor.colorset")]);

        let contents: ColorSetContents =
            json::read(&temp.path().join("myColor.colorset").join(CONTENTS_JSON)).unwrap();
        assert_eq!(contents.colors.len(), 3);
        assert_eq!(contents.colors[0].appearances, None);
        assert!(contents.colors[1].appearances.as_ref().unwrap()[0].is_luminosity(Luminosity::Light));
        assert!(contents.colors[2].appearances.as_ref().unwrap()[0].is_luminosity(Luminosity::Dark));

        let components: Vec<_> = contents
            .colors
            .iter()
            .map(|c| {
                let c = &c.color.components;
                format!("{},{},{},{}", c.red, c.green, c.blue, c.alpha)
            })
            .collect();
        assert_eq!(components, ["255,255,255,1.000", "255,255,255,1.000", "0,0,0,1.000"]);
    }

    #[test]
    fn test_second_run_fails() {
        let temp = TempDir::new().unwrap();
        let entries = vec![entry("myColor", None, Some("#fff"), Some("#000"))];

        materialize_colors(&entries, temp.path(), "xcode", &|_| {}).unwrap();
        let err = materialize_colors(&entries, temp.path(), "xcode", &|_| {}).unwrap_err();
        assert!(matches!(err, Error::DirectoryAlreadyExists { .. }));
    }

    #[test]
    fn test_bad_entry_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let entries = vec![
            entry("good", None, Some("#fff"), Some("#000")),
            entry("bad", None, Some("#fff"), Some("#12")),
        ];

        assert!(materialize_colors(&entries, temp.path(), "xcode", &|_| {}).is_err());
        assert!(!temp.path().join("good.colorset").exists());
    }

    #[test]
    fn test_progress_reported_per_color() {
        use std::sync::Mutex;

        let temp = TempDir::new().unwrap();
        let entries = vec![
            entry("a", None, Some("#fff"), Some("#000")),
            entry("b", None, Some("#fff"), Some("#000")),
        ];
        let seen = Mutex::new(Vec::new());
        materialize_colors(&entries, temp.path(), "xcode", &|p| {
            seen.lock().unwrap().push((p.current, p.item.clone()));
        })
        .unwrap();

        assert_eq!(
            seen.into_inner().unwrap(),
            vec![(1, Some("a".to_string())), (2, Some("b".to_string()))]
        );
    }
}
