//! CLI commands for the pre-build stages

use std::time::Instant;

use super::ProjectArgs;
use crate::cli::progress::{
    LOOKING_GLASS, PALETTE, PICTURE, print_done, print_step, progress_message, simple_spinner,
};
use crate::config::Config;
use crate::hook::{BuildReport, PreBuildHook, SkipReason, StageOutcome, Stages};

/// Run the selected stages against a project
pub fn execute(args: &ProjectArgs, stages: Stages) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load(&args.project)?,
    };
    let hook = PreBuildHook::new(config, &args.project).with_stages(stages);

    if args.quiet {
        hook.run(|_| {})?;
        return Ok(());
    }

    print_step(
        1,
        2,
        LOOKING_GLASS,
        &format!("Using asset catalog {}", hook.layout().asset_catalog.display()),
    );

    let pb = simple_spinner("Starting...");
    let result = hook.run_with_progress(&|p| pb.set_message(progress_message(p)), |_| {
        pb.finish_and_clear();
    });
    if result.is_err() {
        pb.abandon();
    }
    let report = result?;

    print_step(2, 2, PALETTE, &colors_summary(&report));
    println!("      {}{}", PICTURE, images_summary(&report));
    print_done(start.elapsed());

    Ok(())
}

fn skip_message(reason: &SkipReason) -> String {
    match reason {
        SkipReason::AssetCatalogMissing(path) => format!("skipped, no asset catalog at {}", path.display()),
        SkipReason::ColorsFileMissing(path) => format!("skipped, {} not found", path.display()),
        SkipReason::ImagesDirMissing(path) => format!("skipped, {} not found", path.display()),
        SkipReason::NotRequested => "not requested".to_string(),
    }
}

fn colors_summary(report: &BuildReport) -> String {
    match &report.colors {
        StageOutcome::Ran(colors) => format!("Color sets: {} written", colors.written.len()),
        StageOutcome::Skipped(reason) => format!("Color sets: {}", skip_message(reason)),
    }
}

fn images_summary(report: &BuildReport) -> String {
    match &report.images {
        StageOutcome::Ran(images) => {
            let mut line = format!(
                "Dark images: {} copied, {} image sets updated",
                images.copied.len(),
                images.updated.len()
            );
            if !images.missing.is_empty() {
                line.push_str(&format!(", {} without compiled image set", images.missing.len()));
            }
            line
        }
        StageOutcome::Skipped(reason) => format!("Dark images: {}", skip_message(reason)),
    }
}
