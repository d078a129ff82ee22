use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::BuildConfig;
use crate::copy_pass::{CopyPass, CopyReport};
use crate::manifest::{BuildManifest, ManifestWriter};
use crate::summary;

/// Outcome of one generator run.
#[derive(Debug)]
pub struct BuildResult {
    pub copied: usize,
    pub requested: usize,
    pub manifest: BuildManifest,
    pub report: CopyReport,
}

pub struct DistGenerator {
    config: BuildConfig,
    output_dir: PathBuf,
}

impl DistGenerator {
    pub fn new(config: BuildConfig, output_dir: impl AsRef<Path>) -> Self {
        Self {
            config,
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// One linear pass: create the output directory, copy what exists, then
    /// write `build-info.json` and the summary. The manifest and the summary
    /// share a single captured timestamp.
    pub fn generate(&self) -> Result<BuildResult> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                self.output_dir.display()
            )
        })?;

        let copy_pass = CopyPass::new(self.config.source_dir_path(), &self.output_dir);
        let report = copy_pass.run(self.config.requested_files())?;

        let manifest = BuildManifest::freeze(&self.config, Utc::now());

        let manifest_writer = ManifestWriter::new(&self.output_dir);
        manifest_writer
            .write_manifest(&manifest)
            .context("Failed to write build manifest")?;

        summary::write_summary(&self.output_dir, &manifest)
            .context("Failed to write build summary")?;

        Ok(BuildResult {
            copied: report.copied_count(),
            requested: report.requested_count(),
            manifest,
            report,
        })
    }
}
