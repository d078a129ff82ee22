use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{self, BuildConfig};
use crate::generator::DistGenerator;
use crate::manifest;

#[derive(Parser)]
#[command(name = "distpack")]
#[command(about = "A tiny, predictable distribution packager that stages release files and records build metadata")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Stage release files and write build metadata
    Build {
        /// Files to include, in order (missing files are skipped, not errors)
        #[arg(default_values_t = default_source_files())]
        files: Vec<String>,

        /// Output directory (created recursively if absent)
        #[arg(long, default_value = "dist")]
        output: PathBuf,

        /// Directory the source files are resolved against
        #[arg(long, default_value = ".")]
        source_dir: PathBuf,

        /// Project name recorded in the manifest
        #[arg(long, default_value = "Temperature Converter")]
        project: String,

        /// Project version recorded in the manifest
        #[arg(long, default_value = "1.0.0")]
        project_version: String,

        /// CI build number; unset or empty falls back to "local"
        #[arg(long, env = "BUILD_NUMBER")]
        build_number: Option<String>,
    },

    /// Read a build-info.json back and print its fields
    Inspect {
        /// Path to build-info.json (or the directory containing it)
        #[arg(default_value = "dist")]
        path: PathBuf,
    },
}

fn default_source_files() -> Vec<String> {
    vec![
        "index.js".to_string(),
        "package.json".to_string(),
        "test.js".to_string(),
    ]
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            files,
            output,
            source_dir,
            project,
            project_version,
            build_number,
        } => build_command(
            files,
            output,
            source_dir,
            project,
            project_version,
            build_number,
        ),
        Commands::Inspect { path } => inspect_command(path),
    }
}

fn build_command(
    files: Vec<String>,
    output: PathBuf,
    source_dir: PathBuf,
    project: String,
    project_version: String,
    build_number: Option<String>,
) -> Result<()> {
    println!("Building {} distribution...", project);

    let config = BuildConfig::new(project, project_version)
        .build_number(config::build_number_or_default(build_number.as_deref()))
        .runtime_version(detect_runtime_version())
        .source_dir(source_dir)
        .source_files(files);

    let generator = DistGenerator::new(config, &output);
    let result = generator.generate().context("Build failed")?;

    println!("\nBuild completed");
    println!("Output: {}", generator.output_dir().display());
    println!("Files copied: {}/{}", result.copied, result.requested);

    Ok(())
}

fn inspect_command(path: PathBuf) -> Result<()> {
    let manifest_path = if path.is_dir() {
        path.join(manifest::MANIFEST_FILE_NAME)
    } else {
        path
    };

    let manifest = manifest::read_manifest(&manifest_path)?;

    println!("Project:  {} {}", manifest.project, manifest.version);
    println!("Built:    {}", manifest.build_date.to_rfc3339());
    println!("Build #:  {}", manifest.build_number);
    println!("Runtime:  {}", manifest.runtime_version);
    println!("Files ({}):", manifest.files_included.len());
    for name in &manifest.files_included {
        println!("  {}", name);
    }

    Ok(())
}

/// The toolchain version recorded in the manifest. Asking rustc keeps this
/// honest across toolchain updates; a missing rustc is not fatal.
fn detect_runtime_version() -> String {
    let output = std::process::Command::new("rustc")
        .arg("--version")
        .output();

    match output {
        Ok(output) if output.status.success() => {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        }
        _ => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_source_files_order() {
        assert_eq!(
            default_source_files(),
            vec!["index.js", "package.json", "test.js"]
        );
    }

    #[test]
    fn test_cli_parses_build_defaults() {
        let cli = Cli::try_parse_from(["distpack", "build"]).unwrap();

        match cli.command {
            Commands::Build { files, output, .. } => {
                assert_eq!(files, default_source_files());
                assert_eq!(output, PathBuf::from("dist"));
            }
            _ => panic!("expected build command"),
        }
    }

    #[test]
    fn test_cli_parses_explicit_files() {
        let cli = Cli::try_parse_from([
            "distpack",
            "build",
            "a.txt",
            "b.txt",
            "--output",
            "out",
            "--build-number",
            "99",
        ])
        .unwrap();

        match cli.command {
            Commands::Build {
                files,
                output,
                build_number,
                ..
            } => {
                assert_eq!(files, vec!["a.txt", "b.txt"]);
                assert_eq!(output, PathBuf::from("out"));
                assert_eq!(build_number.as_deref(), Some("99"));
            }
            _ => panic!("expected build command"),
        }
    }
}
