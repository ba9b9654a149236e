//! `.imageset` descriptor model
//!
//! Image sets are produced by the catalog compiler. The document is kept as
//! an ordered JSON map so a rewrite leaves every existing key where it was;
//! only the entries the linker appends are typed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::record::Scale;
use crate::colors::colorset::{Appearance, Luminosity};
use crate::error::Result;

const IMAGES_KEY: &str = "images";

/// `Contents.json` of a `.imageset` directory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct ImageSetContents {
    document: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for ImageSetContents {
    type Error = String;

    fn try_from(document: Map<String, Value>) -> std::result::Result<Self, Self::Error> {
        match document.get(IMAGES_KEY) {
            None | Some(Value::Array(_)) => Ok(Self { document }),
            Some(other) => Err(format!("\"images\" must be an array, found {other}")),
        }
    }
}

impl From<ImageSetContents> for Map<String, Value> {
    fn from(contents: ImageSetContents) -> Self {
        contents.document
    }
}

/// An entry appended to the `images` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub idiom: String,
    pub filename: String,
    pub scale: String,
    pub appearances: Vec<Appearance>,
}

impl ImageEntry {
    /// Universal dark-appearance entry for `filename` at `scale`
    #[must_use]
    pub fn dark(filename: impl Into<String>, scale: Scale) -> Self {
        Self {
            idiom: "universal".to_string(),
            filename: filename.into(),
            scale: scale.as_str().to_string(),
            appearances: vec![Appearance::luminosity(Luminosity::Dark)],
        }
    }
}

impl ImageSetContents {
    /// Entries of the `images` array, as written
    #[must_use]
    pub fn images(&self) -> &[Value] {
        self.document
            .get(IMAGES_KEY)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether an entry already references `filename`
    #[must_use]
    pub fn references(&self, filename: &str) -> bool {
        self.images()
            .iter()
            .any(|e| e.get("filename").and_then(Value::as_str) == Some(filename))
    }

    /// Append `entry` unless its filename is already referenced
    ///
    /// Returns whether the entry was added.
    pub fn append(&mut self, entry: &ImageEntry) -> Result<bool> {
        if self.references(&entry.filename) {
            return Ok(false);
        }
        let value = serde_json::to_value(entry)?;
        let images = self
            .document
            .entry(IMAGES_KEY)
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(images) = images {
            images.push(value);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::json::to_tabbed_string;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const COMPILED: &str = r#"{
        "images": [
            { "idiom": "universal", "filename": "icon.png", "scale": "1x" },
            { "idiom": "universal", "scale": "2x" },
            { "idiom": "universal", "filename": "icon@3x.png", "scale": "3x", "compression-type": "lossless" }
        ],
        "info": { "version": 1, "author": "xcode" }
    }"#;

    #[test]
    fn test_roundtrip_preserves_unknown_keys() {
        let contents: ImageSetContents = serde_json::from_str(COMPILED).unwrap();
        assert_eq!(contents.images().len(), 3);
        assert_eq!(contents.images()[2]["compression-type"], "lossless");

        let back: Value = serde_json::from_str(&to_tabbed_string(&contents).unwrap()).unwrap();
        let original: Value = serde_json::from_str(COMPILED).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_rewrite_keeps_key_order() {
        let compact = r#"{"info":{"author":"xcode","version":1},"images":[{"filename":"icon.png","scale":"1x","idiom":"universal"}]}"#;
        let contents: ImageSetContents = serde_json::from_str(compact).unwrap();

        assert_eq!(serde_json::to_string(&contents).unwrap(), compact);
    }

    #[test]
    fn test_append_dark_entry() {
        let mut contents: ImageSetContents = serde_json::from_str(COMPILED).unwrap();
        assert!(contents.append(&ImageEntry::dark("icon-dark@2x.png", Scale::X2)).unwrap());
        assert!(!contents.append(&ImageEntry::dark("icon-dark@2x.png", Scale::X2)).unwrap());

        assert_eq!(contents.images().len(), 4);
        assert_eq!(
            contents.images()[3],
            json!({
                "idiom": "universal",
                "filename": "icon-dark@2x.png",
                "scale": "2x",
                "appearances": [{ "appearance": "luminosity", "value": "dark" }]
            })
        );
    }

    #[test]
    fn test_append_creates_images_array() {
        let mut contents: ImageSetContents = serde_json::from_str(r#"{"info":{"version":1}}"#).unwrap();
        assert!(contents.append(&ImageEntry::dark("icon-dark.png", Scale::X1)).unwrap());

        let s = serde_json::to_string(&contents).unwrap();
        assert!(s.starts_with(r#"{"info":{"version":1},"images":[{"idiom":"universal","filename":"icon-dark.png""#));
    }

    #[test]
    fn test_non_array_images_rejected() {
        assert!(serde_json::from_str::<ImageSetContents>(r#"{"images":{}}"#).is_err());
    }
}
