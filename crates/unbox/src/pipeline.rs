//! The full run: discover archives, extract each one, then report on the
//! input folder and the output tree.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use unbox_archive::ArchiveReport;

use crate::cli::Config;
use crate::ui::{print_banner, print_failure, print_heading, print_lines, print_section, print_success};

pub const ARCHIVE_EXTENSION: &str = "zip";

/// Result of extracting one archive; failures stay local to their archive.
#[derive(Debug)]
pub struct ArchiveOutcome {
    pub archive: PathBuf,
    pub target: PathBuf,
    pub result: unbox_archive::Result<ArchiveReport>,
}

impl ArchiveOutcome {
    pub fn archive_name(&self) -> String {
        display_name(&self.archive)
    }

    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }

    /// Status line shown once the archive is done.
    pub fn message(&self) -> String {
        let name = self.archive_name();
        match &self.result {
            Ok(report) if report.skipped.is_empty() => format!("Successfully extracted {name}"),
            Ok(report) => format!(
                "Successfully extracted {name} ({} unsafe entries skipped)",
                report.skipped.len()
            ),
            Err(err) => format!("Error extracting {name}: {err}"),
        }
    }
}

/// Reported by [`extract_all`] around each archive.
#[derive(Debug)]
pub enum Progress<'a> {
    Started { archive: &'a Path, target: &'a Path },
    Finished(&'a ArchiveOutcome),
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// `*.zip` files directly inside `input`, sorted by name.
///
/// Hidden files are ignored. A missing or unreadable folder yields no
/// archives.
pub fn discover_archives(input: &Path) -> Vec<PathBuf> {
    let children = match unbox_fs::read_dir_sorted(input) {
        Ok(children) => children,
        Err(err) => {
            tracing::warn!(error = %err, "cannot scan input folder");
            return Vec::new();
        }
    };

    children
        .into_iter()
        .filter(|path| path.is_file())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| !n.starts_with('.'))
        })
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext == ARCHIVE_EXTENSION)
        })
        .collect()
}

/// Directory an archive is extracted into: its file stem under `output_root`.
pub fn target_dir_for(output_root: &Path, archive: &Path) -> PathBuf {
    let stem = archive.file_stem().unwrap_or(archive.as_os_str());
    output_root.join(stem)
}

/// Extract every archive in order. A failing archive never stops the next.
///
/// `on_progress` sees each archive start and finish before the next one
/// begins.
pub fn extract_all(
    archives: &[PathBuf],
    output_root: &Path,
    mut on_progress: impl FnMut(Progress<'_>),
) -> Vec<ArchiveOutcome> {
    let mut outcomes = Vec::with_capacity(archives.len());

    for archive in archives {
        let target = target_dir_for(output_root, archive);
        on_progress(Progress::Started {
            archive,
            target: &target,
        });

        let result = unbox_archive::extract_archive(archive, &target);
        if let Err(err) = &result {
            tracing::warn!(archive = %archive.display(), error = %err, "extraction failed");
        }

        let outcome = ArchiveOutcome {
            archive: archive.clone(),
            target,
            result,
        };
        on_progress(Progress::Finished(&outcome));
        outcomes.push(outcome);
    }

    outcomes
}

fn print_progress(progress: Progress<'_>) {
    match progress {
        Progress::Started { archive, target } => println!(
            "  🔄 Extracting {} → {}/",
            display_name(archive),
            target.display()
        ),
        Progress::Finished(outcome) if outcome.succeeded() => print_success(&outcome.message()),
        Progress::Finished(outcome) => print_failure(&outcome.message()),
    }
}

pub fn run(config: &Config) -> Result<()> {
    print_banner("COMPLETE DATA EXTRACTION AND LISTING");

    unbox_fs::ensure_dir(&config.output).with_context(|| {
        format!("Failed to create output directory {}", config.output.display())
    })?;

    let archives = discover_archives(&config.input);
    println!();
    println!("Found {} ZIP files:", archives.len());
    for archive in &archives {
        println!("  📦 {}", display_name(archive));
    }

    print_heading(&format!(
        "📂 Extracting all files to '{}/' directory...",
        config.output.display()
    ));
    extract_all(&archives, &config.output, print_progress);

    print_section("📋 COMPLETE FILE LISTING:");

    print_heading(&format!(
        "📁 Original Data Folder ({}):",
        config.input.display()
    ));
    print_lines(unbox_report::list_tree(&config.input));

    print_heading(&format!(
        "📁 Extracted Data Folder ({}):",
        config.output.display()
    ));
    if config.output.exists() {
        print_lines(unbox_report::list_tree(&config.output));
    } else {
        print_failure("Extracted folder not found");
    }

    print_section("📊 SUMMARY:");
    print_lines(unbox_report::summarize(&config.output).lines());

    print_heading("📁 Directory Structure:");
    print_lines(unbox_report::list_structure(&config.output));

    Ok(())
}
