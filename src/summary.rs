use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::manifest::BuildManifest;

pub const SUMMARY_FILE_NAME: &str = "README.md";

/// One-line role shown next to each file in the summary. The default staging
/// set keeps its well-known roles; anything else gets a neutral label.
fn file_role(name: &str) -> &'static str {
    match name {
        "index.js" => "Main application",
        "package.json" => "Dependencies and scripts",
        "test.js" => "Test cases",
        _ => "Staged file",
    }
}

/// Render the human-readable companion to `build-info.json`. Every requested
/// file is listed with its role, including ones the copy pass skipped.
pub fn render_summary(manifest: &BuildManifest) -> String {
    let mut doc = String::new();

    doc.push_str(&format!("# {} Build\n\n", manifest.project));
    doc.push_str(&format!(
        "This is the staged distribution of {} {}.\n\n",
        manifest.project, manifest.version
    ));

    doc.push_str("## Included Files:\n");
    for name in &manifest.files_included {
        doc.push_str(&format!("- {} - {}\n", name, file_role(name)));
    }
    doc.push_str("- build-info.json - Build metadata\n\n");

    doc.push_str("## Usage:\n");
    if manifest.files_included.iter().any(|n| n == "index.js") {
        doc.push_str("node index.js\n\n");
    } else {
        doc.push_str("Run the staged entry point from this directory.\n\n");
    }

    doc.push_str(&format!("Build Number: {}\n", manifest.build_number));
    doc.push_str(&format!(
        "Build Date: {}\n",
        manifest.build_date.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    doc
}

pub fn write_summary(output_dir: &Path, manifest: &BuildManifest) -> Result<PathBuf> {
    let summary_path = output_dir.join(SUMMARY_FILE_NAME);

    fs::write(&summary_path, render_summary(manifest))
        .with_context(|| format!("Failed to write summary to {}", summary_path.display()))?;

    println!("Created {}", SUMMARY_FILE_NAME);

    Ok(summary_path)
}
