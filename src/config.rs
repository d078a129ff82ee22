use std::path::{Path, PathBuf};

/// Fallback build number used when no CI-provided value is available.
pub const DEFAULT_BUILD_NUMBER: &str = "local";

/// Everything the generator needs to know about one build, resolved up front.
///
/// Environment lookups happen at the CLI boundary; by the time a
/// `BuildConfig` exists there is no ambient state left to consult.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    project: String,
    version: String,
    build_number: String,
    runtime_version: String,
    source_dir: PathBuf,
    source_files: Vec<String>,
}

impl BuildConfig {
    pub fn new(project: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            version: version.into(),
            build_number: DEFAULT_BUILD_NUMBER.to_string(),
            runtime_version: "unknown".to_string(),
            source_dir: PathBuf::from("."),
            source_files: Vec::new(),
        }
    }

    pub fn build_number(mut self, build_number: impl Into<String>) -> Self {
        let build_number = build_number.into();
        if !build_number.is_empty() {
            self.build_number = build_number;
        }
        self
    }

    pub fn runtime_version(mut self, runtime_version: impl Into<String>) -> Self {
        self.runtime_version = runtime_version.into();
        self
    }

    pub fn source_dir(mut self, source_dir: impl AsRef<Path>) -> Self {
        self.source_dir = source_dir.as_ref().to_path_buf();
        self
    }

    pub fn source_files(mut self, source_files: Vec<String>) -> Self {
        self.source_files = source_files;
        self
    }

    pub fn project_name(&self) -> &str {
        &self.project
    }

    pub fn project_version(&self) -> &str {
        &self.version
    }

    pub fn build_number_str(&self) -> &str {
        &self.build_number
    }

    pub fn runtime_version_str(&self) -> &str {
        &self.runtime_version
    }

    pub fn source_dir_path(&self) -> &Path {
        &self.source_dir
    }

    pub fn requested_files(&self) -> &[String] {
        &self.source_files
    }
}

/// Collapse an optional CI build number to the documented default. Both an
/// unset variable and an empty string mean "local".
pub fn build_number_or_default(raw: Option<&str>) -> String {
    match raw {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => DEFAULT_BUILD_NUMBER.to_string(),
    }
}
