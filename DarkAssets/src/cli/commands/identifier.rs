//! CLI command for looking up image set names

use crate::images::ImageFileRecord;
use crate::utils::{HashAlgorithm, identifier};

/// Print `<logical path> -> <identifier>.imageset`
///
/// Accepts a logical path (`images/icon.png`) as-is, or a source filename
/// which is reduced to its logical path first.
pub fn execute(name: &str, hash: &str) -> anyhow::Result<()> {
    let algorithm: HashAlgorithm = hash.parse()?;

    let logical_path = if name.starts_with("images/") {
        name.to_string()
    } else {
        ImageFileRecord::parse(name)
            .map(|record| record.logical_path())
            .ok_or_else(|| anyhow::anyhow!("'{name}' is not a supported image filename"))?
    };

    println!("{logical_path} -> {}.imageset", identifier(&logical_path, algorithm));
    Ok(())
}
