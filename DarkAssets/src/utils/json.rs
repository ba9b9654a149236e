//! Descriptor (de)serialization helpers

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{Error, Result};

/// Serialize as pretty JSON indented with tabs, the layout Xcode writes
pub fn to_tabbed_string<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    value.serialize(&mut ser)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write `value` to `path` as tab-indented JSON
pub fn write_tabbed<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = to_tabbed_string(value)?;
    std::fs::write(path, json).map_err(|source| Error::WriteFailure {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a JSON file
pub fn read<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
