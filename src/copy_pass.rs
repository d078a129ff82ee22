use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// What happened to one requested file during the copy pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Copied,
    Skipped(String),
}

impl FileOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, FileOutcome::Copied)
    }
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub name: String,
    pub outcome: FileOutcome,
}

/// Per-file outcomes for one copy pass, in request order.
#[derive(Debug, Clone, Default)]
pub struct CopyReport {
    entries: Vec<FileReport>,
}

impl CopyReport {
    pub fn record(&mut self, name: &str, outcome: FileOutcome) {
        self.entries.push(FileReport {
            name: name.to_string(),
            outcome,
        });
    }

    pub fn entries(&self) -> &[FileReport] {
        &self.entries
    }

    pub fn copied_count(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.is_copied()).count()
    }

    pub fn requested_count(&self) -> usize {
        self.entries.len()
    }
}

pub struct CopyPass {
    source_dir: PathBuf,
    output_dir: PathBuf,
}

impl CopyPass {
    pub fn new(source_dir: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Self {
        Self {
            source_dir: source_dir.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Copy each requested file that exists, preserving its name. Missing
    /// inputs are recorded as skipped, never raised as errors; only a failed
    /// write into the output directory aborts the pass.
    pub fn run(&self, files: &[String]) -> Result<CopyReport> {
        let mut report = CopyReport::default();

        for name in files {
            let source_path = self.source_dir.join(name);

            if source_path.is_file() {
                let dest_path = self.output_dir.join(name);
                fs::copy(&source_path, &dest_path).with_context(|| {
                    format!(
                        "Failed to copy {} to {}",
                        source_path.display(),
                        dest_path.display()
                    )
                })?;

                println!("Copied {}", name);
                report.record(name, FileOutcome::Copied);
            } else {
                println!("{} not found, skipping", name);
                report.record(name, FileOutcome::Skipped("not found".to_string()));
            }
        }

        Ok(report)
    }
}
