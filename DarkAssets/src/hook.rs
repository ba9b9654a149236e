//! The pre-build step
//!
//! Runs the color materializer, then the image linker, against one project.
//! A missing asset catalog or colors.json skips the whole step; a missing
//! image directory skips only the linker. Everything else that goes wrong
//! aborts the step with an error so the host build fails.

use std::path::{Path, PathBuf};

use crate::colors::{ColorReport, load_colors, materialize_colors};
use crate::config::{Config, ProjectLayout};
use crate::error::Result;
use crate::images::{ImageReport, link_dark_images};
use crate::types::{BuildPhase, BuildProgress, BuildProgressCallback};

/// Why a stage did not run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The asset catalog has not been generated
    AssetCatalogMissing(PathBuf),
    /// There is no colors.json
    ColorsFileMissing(PathBuf),
    /// There is no source image directory
    ImagesDirMissing(PathBuf),
    /// The stage was not requested
    NotRequested,
}

/// What happened to one stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome<T> {
    Ran(T),
    Skipped(SkipReason),
}

impl<T> StageOutcome<T> {
    #[must_use]
    pub fn report(&self) -> Option<&T> {
        match self {
            Self::Ran(report) => Some(report),
            Self::Skipped(_) => None,
        }
    }
}

/// Result of one pre-build step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// The hook fired
    pub triggered: bool,
    pub colors: StageOutcome<ColorReport>,
    pub images: StageOutcome<ImageReport>,
}

impl BuildReport {
    fn skipped(reason: &SkipReason) -> Self {
        Self {
            triggered: true,
            colors: StageOutcome::Skipped(reason.clone()),
            images: StageOutcome::Skipped(reason.clone()),
        }
    }

    /// Whether any file in the catalog was created or changed
    #[must_use]
    pub fn changed_anything(&self) -> bool {
        self.colors.report().is_some_and(|r| !r.written.is_empty())
            || self
                .images
                .report()
                .is_some_and(|r| !r.copied.is_empty() || !r.updated.is_empty())
    }
}

/// Which stages to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stages {
    pub colors: bool,
    pub images: bool,
}

impl Stages {
    pub const ALL: Self = Self {
        colors: true,
        images: true,
    };
    pub const COLORS: Self = Self {
        colors: true,
        images: false,
    };
    pub const IMAGES: Self = Self {
        colors: false,
        images: true,
    };
}

impl Default for Stages {
    fn default() -> Self {
        Self::ALL
    }
}

/// The pre-build hook for one project directory
#[derive(Debug, Clone)]
pub struct PreBuildHook {
    config: Config,
    layout: ProjectLayout,
    stages: Stages,
}

impl PreBuildHook {
    /// Hook for `project_dir`, reading its darkassets.toml if present
    pub fn for_project(project_dir: &Path) -> Result<Self> {
        let config = Config::load(project_dir)?;
        Ok(Self::new(config, project_dir))
    }

    #[must_use]
    pub fn new(config: Config, project_dir: &Path) -> Self {
        let layout = config.layout(project_dir);
        Self {
            config,
            layout,
            stages: Stages::ALL,
        }
    }

    #[must_use]
    pub fn with_stages(mut self, stages: Stages) -> Self {
        self.stages = stages;
        self
    }

    #[must_use]
    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Run the step and signal `finished` once it has completed
    ///
    /// `finished` is called exactly once on success (including skips) and
    /// never on error.
    pub fn run<F>(&self, finished: F) -> Result<BuildReport>
    where
        F: FnOnce(&BuildReport),
    {
        self.run_with_progress(&|_| {}, finished)
    }

    /// [`PreBuildHook::run`] with a progress callback
    pub fn run_with_progress<F>(&self, progress: BuildProgressCallback, finished: F) -> Result<BuildReport>
    where
        F: FnOnce(&BuildReport),
    {
        let report = self.execute(progress)?;
        finished(&report);
        Ok(report)
    }

    /// Run the step, reporting progress
    pub fn execute(&self, progress: BuildProgressCallback) -> Result<BuildReport> {
        let layout = &self.layout;

        if !layout.asset_catalog.is_dir() {
            tracing::info!(
                "Asset catalog {} not found, skipping",
                layout.asset_catalog.display()
            );
            return Ok(BuildReport::skipped(&SkipReason::AssetCatalogMissing(
                layout.asset_catalog.clone(),
            )));
        }

        // No colors.json skips the whole step unless only images were requested
        if self.stages.colors && !layout.colors_file.is_file() {
            tracing::info!("{} not found, skipping", layout.colors_file.display());
            return Ok(BuildReport::skipped(&SkipReason::ColorsFileMissing(
                layout.colors_file.clone(),
            )));
        }

        let colors = self.run_colors(progress)?;
        let images = self.run_images(progress)?;

        progress(&BuildProgress::new(BuildPhase::Complete, 1, 1));

        Ok(BuildReport {
            triggered: true,
            colors,
            images,
        })
    }

    fn run_colors(&self, progress: BuildProgressCallback) -> Result<StageOutcome<ColorReport>> {
        if !self.stages.colors {
            return Ok(StageOutcome::Skipped(SkipReason::NotRequested));
        }

        let entries = load_colors(&self.layout.colors_file)?;
        let report = materialize_colors(
            &entries,
            &self.layout.asset_catalog,
            &self.config.colors.author,
            progress,
        )?;
        Ok(StageOutcome::Ran(report))
    }

    fn run_images(&self, progress: BuildProgressCallback) -> Result<StageOutcome<ImageReport>> {
        let images_dir = &self.layout.images_dir;
        if !self.stages.images {
            return Ok(StageOutcome::Skipped(SkipReason::NotRequested));
        }
        if !images_dir.is_dir() {
            tracing::info!("{} not found, skipping dark images", images_dir.display());
            return Ok(StageOutcome::Skipped(SkipReason::ImagesDirMissing(images_dir.clone())));
        }

        let report = link_dark_images(
            images_dir,
            &self.layout.asset_catalog,
            self.config.link_options(),
            progress,
        )?;
        Ok(StageOutcome::Ran(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{HashAlgorithm, identifier};
    use std::cell::Cell;
    use std::fs;
    use tempfile::TempDir;

    fn project() -> (TempDir, PreBuildHook) {
        let temp = TempDir::new().unwrap();
        let hook = PreBuildHook::for_project(temp.path()).unwrap();
        (temp, hook)
    }

    #[test]
    fn test_missing_catalog_skips_and_finishes() {
        let (_temp, hook) = project();
        let calls = Cell::new(0);

        let report = hook.run(|_| calls.set(calls.get() + 1)).unwrap();

        assert_eq!(calls.get(), 1);
        assert!(report.triggered);
        assert!(matches!(
            report.colors,
            StageOutcome::Skipped(SkipReason::AssetCatalogMissing(_))
        ));
        assert!(!report.changed_anything());
    }

    fn write_colors(layout: &ProjectLayout, json: &str) {
        fs::create_dir_all(&layout.asset_catalog).unwrap();
        fs::create_dir_all(layout.colors_file.parent().unwrap()).unwrap();
        fs::write(&layout.colors_file, json).unwrap();
    }

    #[test]
    fn test_missing_images_dir_skips_linker_only() {
        let (_temp, hook) = project();
        write_colors(hook.layout(), r##"{"accent": {"light": "#fff", "dark": "#000"}}"##);

        let report = hook.run(|_| {}).unwrap();

        assert!(matches!(report.colors, StageOutcome::Ran(_)));
        assert!(matches!(report.images, StageOutcome::Skipped(SkipReason::ImagesDirMissing(_))));
    }

    #[test]
    fn test_missing_colors_file_skips_whole_step() {
        let (_temp, hook) = project();
        let layout = hook.layout().clone();
        fs::create_dir_all(&layout.asset_catalog).unwrap();
        fs::create_dir_all(&layout.images_dir).unwrap();
        fs::write(layout.images_dir.join("icon.png"), b"light").unwrap();
        fs::write(layout.images_dir.join("icon-dark.png"), b"dark").unwrap();
        let image_set = layout
            .asset_catalog
            .join(format!("{}.imageset", identifier("images/icon.png", HashAlgorithm::Sha1)));
        fs::create_dir_all(&image_set).unwrap();
        let compiled = r#"{"images":[{"idiom":"universal","filename":"icon.png","scale":"1x"}]}"#;
        fs::write(image_set.join("Contents.json"), compiled).unwrap();

        let calls = Cell::new(0);
        let report = hook.run(|_| calls.set(calls.get() + 1)).unwrap();

        assert_eq!(calls.get(), 1);
        assert!(matches!(report.colors, StageOutcome::Skipped(SkipReason::ColorsFileMissing(_))));
        assert!(matches!(report.images, StageOutcome::Skipped(SkipReason::ColorsFileMissing(_))));
        assert!(!report.changed_anything());
        assert!(!image_set.join("icon-dark.png").exists());
        assert_eq!(fs::read_to_string(image_set.join("Contents.json")).unwrap(), compiled);
    }

    #[test]
    fn test_images_only_ignores_colors_file() {
        let (_temp, hook) = project();
        let layout = hook.layout().clone();
        fs::create_dir_all(&layout.asset_catalog).unwrap();
        fs::create_dir_all(&layout.images_dir).unwrap();

        let report = hook.with_stages(Stages::IMAGES).run(|_| {}).unwrap();

        assert_eq!(report.colors, StageOutcome::Skipped(SkipReason::NotRequested));
        assert!(matches!(report.images, StageOutcome::Ran(_)));
    }

    #[test]
    fn test_error_does_not_finish() {
        let (_temp, hook) = project();
        write_colors(hook.layout(), r##"{"bad": {"light": "#fff", "dark": "zzz"}}"##);

        let called = Cell::new(false);
        assert!(hook.run(|_| called.set(true)).is_err());
        assert!(!called.get());
    }

    #[test]
    fn test_stage_selection() {
        let (_temp, hook) = project();
        let layout = hook.layout().clone();
        write_colors(&layout, r##"{"accent": {"light": "#fff", "dark": "#000"}}"##);

        let report = hook.with_stages(Stages::IMAGES).run(|_| {}).unwrap();

        assert_eq!(report.colors, StageOutcome::Skipped(SkipReason::NotRequested));
        assert!(!layout.asset_catalog.join("accent.colorset").exists());
    }
}
