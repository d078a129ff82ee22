use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::BuildConfig;

pub const MANIFEST_FILE_NAME: &str = "build-info.json";

/// The structured record describing what a build run included and when it
/// ran. Field names match the persisted `build-info.json` layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildManifest {
    pub project: String,
    pub version: String,
    pub build_date: DateTime<Utc>,
    pub build_number: String,
    pub runtime_version: String,
    pub files_included: Vec<String>,
}

impl BuildManifest {
    /// Freeze the manifest for one run. `files_included` lists every
    /// requested name in order, whether or not the copy pass found it.
    pub fn freeze(config: &BuildConfig, build_date: DateTime<Utc>) -> Self {
        Self {
            project: config.project_name().to_string(),
            version: config.project_version().to_string(),
            build_date,
            build_number: config.build_number_str().to_string(),
            runtime_version: config.runtime_version_str().to_string(),
            files_included: config.requested_files().to_vec(),
        }
    }
}

pub struct ManifestWriter {
    output_dir: PathBuf,
}

impl ManifestWriter {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.output_dir.join(MANIFEST_FILE_NAME)
    }

    pub fn write_manifest(&self, manifest: &BuildManifest) -> Result<PathBuf> {
        let manifest_path = self.manifest_path();

        let manifest_json = serde_json::to_string_pretty(manifest)
            .context("Failed to serialize manifest to JSON")?;

        // Overwrite semantics, no backup of prior output
        fs::write(&manifest_path, manifest_json)
            .with_context(|| format!("Failed to write manifest to {}", manifest_path.display()))?;

        println!("Created {}", MANIFEST_FILE_NAME);

        Ok(manifest_path)
    }
}

pub fn read_manifest(manifest_path: &Path) -> Result<BuildManifest> {
    let manifest_content = fs::read_to_string(manifest_path)
        .with_context(|| format!("Failed to read manifest from {}", manifest_path.display()))?;

    let manifest: BuildManifest = serde_json::from_str(&manifest_content)
        .with_context(|| format!("Failed to parse manifest JSON from {}", manifest_path.display()))?;

    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_config() -> BuildConfig {
        BuildConfig::new("Temperature Converter", "1.0.0")
            .build_number("ci-42")
            .runtime_version("rustc 1.80.0")
            .source_files(vec![
                "index.js".to_string(),
                "package.json".to_string(),
                "test.js".to_string(),
            ])
    }

    #[test]
    fn test_freeze_lists_all_requested_files() {
        let manifest = BuildManifest::freeze(&sample_config(), Utc::now());

        assert_eq!(manifest.project, "Temperature Converter");
        assert_eq!(manifest.version, "1.0.0");
        assert_eq!(manifest.build_number, "ci-42");
        assert_eq!(
            manifest.files_included,
            vec!["index.js", "package.json", "test.js"]
        );
    }

    #[test]
    fn test_serialized_field_names() {
        let manifest = BuildManifest::freeze(&sample_config(), Utc::now());
        let json = serde_json::to_string_pretty(&manifest).unwrap();

        assert!(json.contains("\"project\""));
        assert!(json.contains("\"buildDate\""));
        assert!(json.contains("\"buildNumber\""));
        assert!(json.contains("\"runtimeVersion\""));
        assert!(json.contains("\"filesIncluded\""));
    }

    #[test]
    fn test_write_and_read_round_trip() {
        let output = tempdir().unwrap();
        let writer = ManifestWriter::new(output.path());
        let manifest = BuildManifest::freeze(&sample_config(), Utc::now());

        let path = writer.write_manifest(&manifest).unwrap();
        assert!(path.ends_with(MANIFEST_FILE_NAME));

        let loaded = read_manifest(&path).unwrap();
        assert_eq!(loaded.project, manifest.project);
        assert_eq!(loaded.build_date, manifest.build_date);
        assert_eq!(loaded.files_included, manifest.files_included);
    }

    #[test]
    fn test_rewrite_overwrites_prior_manifest() {
        let output = tempdir().unwrap();
        let writer = ManifestWriter::new(output.path());

        let first = BuildManifest::freeze(&sample_config(), Utc::now());
        writer.write_manifest(&first).unwrap();

        let second = BuildManifest::freeze(&sample_config().build_number("ci-43"), Utc::now());
        let path = writer.write_manifest(&second).unwrap();

        let loaded = read_manifest(&path).unwrap();
        assert_eq!(loaded.build_number, "ci-43");
    }
}
