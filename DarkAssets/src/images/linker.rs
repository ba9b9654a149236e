//! Dark image variant linking
//!
//! For every base image in the source directory the linker finds the image
//! set the catalog compiler generated for it (`<identifier>.imageset`),
//! copies the `-dark` files next to the compiled ones and appends
//! dark-appearance entries to its `Contents.json`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::imageset::{ImageEntry, ImageSetContents};
use super::record::{ImageFileRecord, Scale};
use crate::colors::CONTENTS_JSON;
use crate::error::{Error, Result};
use crate::types::{BuildPhase, BuildProgress, BuildProgressCallback};
use crate::utils::{HashAlgorithm, identifier, json};

/// Linker settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkOptions {
    /// Digest used to name image sets
    pub hash: HashAlgorithm,
    /// Fail instead of skipping when an image set has no `Contents.json`
    pub strict_containers: bool,
}

/// Result of linking dark images
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageReport {
    /// Dark images copied into image sets (destination paths)
    pub copied: Vec<PathBuf>,
    /// Image sets whose `Contents.json` was rewritten
    pub updated: Vec<PathBuf>,
    /// Image sets with dark variants but no `Contents.json`
    pub missing: Vec<PathBuf>,
    /// Filenames that are not supported images
    pub skipped: Vec<String>,
}

/// Outcome of updating one image set descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    /// Entries were appended and the descriptor rewritten
    Updated(usize),
    /// No dark variant, or every dark variant already referenced
    Unchanged,
    /// The image set has no `Contents.json`
    MissingDescriptor,
}

/// Image set directory for a logical image path
#[must_use]
pub fn image_set_path(asset_catalog: &Path, logical_path: &str, hash: HashAlgorithm) -> PathBuf {
    asset_catalog.join(format!("{}.imageset", identifier(logical_path, hash)))
}

/// Names of the regular files in `dir`, in listing order
pub fn list_source_images(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => tracing::debug!("Skipping non UTF-8 filename {:?}", name),
        }
    }
    Ok(names)
}

/// Copy `source` into `image_set` under its own filename
pub fn copy_into_image_set(source: &Path, image_set: &Path, filename: &str) -> Result<PathBuf> {
    let dest = image_set.join(filename);
    std::fs::copy(source, &dest).map_err(|e| Error::CopyFailure {
        from: source.to_path_buf(),
        to: dest.clone(),
        source: e,
    })?;
    Ok(dest)
}

/// Append entries for every dark sibling of `record` found in `listing`
///
/// Scales are appended in ascending order. Filenames already referenced by
/// the descriptor are left alone, so re-running is a no-op.
pub fn append_dark_entries(
    image_set: &Path,
    record: &ImageFileRecord,
    listing: &HashSet<&str>,
) -> Result<LinkOutcome> {
    let dark_files: Vec<(String, Scale)> = Scale::ALL
        .iter()
        .map(|&scale| (record.dark_filename(scale), scale))
        .filter(|(name, _)| listing.contains(name.as_str()))
        .collect();
    if dark_files.is_empty() {
        return Ok(LinkOutcome::Unchanged);
    }

    let contents_path = image_set.join(CONTENTS_JSON);
    if !contents_path.is_file() {
        return Ok(LinkOutcome::MissingDescriptor);
    }

    let mut contents: ImageSetContents = json::read(&contents_path)?;
    let mut appended = 0;
    for (filename, scale) in dark_files {
        if contents.append(&ImageEntry::dark(filename, scale))? {
            appended += 1;
        }
    }

    if appended == 0 {
        return Ok(LinkOutcome::Unchanged);
    }
    json::write_tabbed(&contents_path, &contents)?;
    Ok(LinkOutcome::Updated(appended))
}

/// Link every dark image in `images_dir` into `asset_catalog`
///
/// The directory is listed once up front; sibling lookups use that snapshot.
pub fn link_dark_images(
    images_dir: &Path,
    asset_catalog: &Path,
    options: LinkOptions,
    progress: BuildProgressCallback,
) -> Result<ImageReport> {
    let listing = list_source_images(images_dir)?;
    let names: HashSet<&str> = listing.iter().map(String::as_str).collect();
    let mut visited: HashSet<String> = HashSet::new();
    let mut report = ImageReport::default();
    let total = listing.len();

    for (index, filename) in listing.iter().enumerate() {
        progress(&BuildProgress::with_item(BuildPhase::Images, index + 1, total, filename.as_str()));

        let Some(record) = ImageFileRecord::parse(filename) else {
            tracing::debug!("Skipping unsupported image {}", filename);
            report.skipped.push(filename.clone());
            continue;
        };

        let logical_path = record.logical_path();
        let image_set = image_set_path(asset_catalog, &logical_path, options.hash);

        if record.dark {
            let dest = copy_into_image_set(&images_dir.join(filename), &image_set, filename)?;
            tracing::debug!("Copied {} -> {}", filename, dest.display());
            report.copied.push(dest);
        }

        // Only the 1x file drives the descriptor, once per image set
        if record.has_density_suffix() || !visited.insert(logical_path.clone()) {
            continue;
        }

        match append_dark_entries(&image_set, &record, &names)? {
            LinkOutcome::Updated(count) => {
                tracing::debug!("Added {} dark entries for {}", count, logical_path);
                report.updated.push(image_set);
            }
            LinkOutcome::Unchanged => {}
            LinkOutcome::MissingDescriptor if options.strict_containers => {
                return Err(Error::MissingOutputContainer {
                    logical_path,
                    path: image_set,
                });
            }
            LinkOutcome::MissingDescriptor => {
                tracing::warn!(
                    "No compiled image set for {} ({}), dark variants not linked",
                    logical_path,
                    image_set.display()
                );
                report.missing.push(image_set);
            }
        }
    }

    tracing::info!(
        "Linked dark images: {} copied, {} image sets updated",
        report.copied.len(),
        report.updated.len()
    );
    Ok(report)
}
