pub mod config;
pub mod copy_pass;
pub mod manifest;
pub mod summary;
pub mod generator;
pub mod cli;

pub use generator::{BuildResult, DistGenerator};
pub use manifest::BuildManifest;
