//! Configuration schema definitions
//!
//! All fields are defaulted so an empty file (or no file at all) yields a
//! fully usable configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// Android project identity and toolchain pins
    #[serde(default)]
    pub project: ProjectConfig,

    /// Build-descriptor layout selection
    #[serde(default)]
    pub layout: LayoutConfig,

    /// CI workflow settings
    #[serde(default)]
    pub workflow: WorkflowConfig,

    /// Git publish settings
    #[serde(default)]
    pub publish: PublishConfig,
}

/// Android project identity and toolchain pins
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Gradle root project name
    #[serde(default = "default_project_name")]
    pub name: String,

    /// Android namespace of the app module
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Application id of the app module
    #[serde(default = "default_namespace")]
    pub application_id: String,

    /// compileSdk level
    #[serde(default = "default_compile_sdk")]
    pub compile_sdk: u32,

    /// minSdk level
    #[serde(default = "default_min_sdk")]
    pub min_sdk: u32,

    /// targetSdk level
    #[serde(default = "default_compile_sdk")]
    pub target_sdk: u32,

    /// versionCode
    #[serde(default = "default_version_code")]
    pub version_code: u32,

    /// versionName
    #[serde(default = "default_version_name")]
    pub version_name: String,

    /// Pinned NDK version
    #[serde(default = "default_ndk_version")]
    pub ndk_version: String,

    /// C++ compiler flags for the native build
    #[serde(default = "default_cpp_flags")]
    pub cpp_flags: String,

    /// Android Gradle Plugin version
    #[serde(default = "default_agp_version")]
    pub agp_version: String,

    /// Gradle dependency coordinates for the app module
    #[serde(default = "default_dependencies")]
    pub dependencies: Vec<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_project_name(),
            namespace: default_namespace(),
            application_id: default_namespace(),
            compile_sdk: default_compile_sdk(),
            min_sdk: default_min_sdk(),
            target_sdk: default_compile_sdk(),
            version_code: default_version_code(),
            version_name: default_version_name(),
            ndk_version: default_ndk_version(),
            cpp_flags: default_cpp_flags(),
            agp_version: default_agp_version(),
            dependencies: default_dependencies(),
        }
    }
}

fn default_project_name() -> String {
    "Autonomous_Football_Game_V5".to_string()
}

fn default_namespace() -> String {
    "com.ai.autonomous.game".to_string()
}

fn default_compile_sdk() -> u32 {
    34
}

fn default_min_sdk() -> u32 {
    24
}

fn default_version_code() -> u32 {
    1
}

fn default_version_name() -> String {
    "1.0".to_string()
}

fn default_ndk_version() -> String {
    "25.1.8937393".to_string()
}

fn default_cpp_flags() -> String {
    "-std=c++20".to_string()
}

fn default_agp_version() -> String {
    "8.1.0".to_string()
}

fn default_dependencies() -> Vec<String> {
    vec![
        "androidx.appcompat:appcompat:1.6.1",
        "com.google.android.material:material:1.9.0",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Build-descriptor layout selection
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LayoutConfig {
    /// Which Gradle DSL generation to emit
    #[serde(default)]
    pub style: LayoutStyle,
}

/// Gradle build-descriptor generation to emit
///
/// `Classic` is the single-file `buildscript` DSL; `Modern` is the
/// `pluginManagement` + `plugins {}` DSL. Both are known-good shapes of the
/// same project; neither is inferred, the choice is always explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LayoutStyle {
    /// Legacy `buildscript { classpath ... }` layout
    Classic,
    /// `pluginManagement` + `plugins {}` declaration layout
    #[default]
    Modern,
}

impl fmt::Display for LayoutStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classic => write!(f, "classic"),
            Self::Modern => write!(f, "modern"),
        }
    }
}

impl FromStr for LayoutStyle {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "modern" => Ok(Self::Modern),
            other => Err(crate::error::Error::invalid_config_value(format!(
                "Unknown layout style: {} (expected classic or modern)",
                other
            ))),
        }
    }
}

/// CI workflow settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// Workflow display name
    #[serde(default = "default_workflow_name")]
    pub name: String,

    /// Name of the uploaded APK artifact
    #[serde(default = "default_artifact_name")]
    pub artifact_name: String,

    /// Gradle version provisioned on the runner
    #[serde(default = "default_gradle_version")]
    pub gradle_version: String,

    /// Java version provisioned on the runner
    #[serde(default = "default_java_version")]
    pub java_version: String,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            name: default_workflow_name(),
            artifact_name: default_artifact_name(),
            gradle_version: default_gradle_version(),
            java_version: default_java_version(),
        }
    }
}

fn default_workflow_name() -> String {
    "Android Build".to_string()
}

fn default_artifact_name() -> String {
    "game-apk".to_string()
}

fn default_gradle_version() -> String {
    "8.2".to_string()
}

fn default_java_version() -> String {
    "17".to_string()
}

/// Git publish settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishConfig {
    /// Remote to push to
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Branch to push to
    #[serde(default = "default_branch")]
    pub branch: String,

    /// Default commit message
    #[serde(default = "default_message")]
    pub message: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            remote: default_remote(),
            branch: default_branch(),
            message: default_message(),
        }
    }
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_message() -> String {
    "Regenerate build configuration".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_defaults() {
        let schema = ConfigSchema::default();
        assert_eq!(schema.project.compile_sdk, 34);
        assert_eq!(schema.project.min_sdk, 24);
        assert_eq!(schema.layout.style, LayoutStyle::Modern);
        assert_eq!(schema.publish.remote, "origin");
        assert_eq!(schema.publish.branch, "main");
    }

    #[test]
    fn test_layout_style_from_str() {
        assert_eq!("classic".parse::<LayoutStyle>().unwrap(), LayoutStyle::Classic);
        assert_eq!("Modern".parse::<LayoutStyle>().unwrap(), LayoutStyle::Modern);
        assert!("gradle9".parse::<LayoutStyle>().is_err());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let toml = r#"
            [layout]
            style = "classic"

            [project]
            name = "Sideproject"
        "#;
        let schema: ConfigSchema = toml::from_str(toml).unwrap();
        assert_eq!(schema.layout.style, LayoutStyle::Classic);
        assert_eq!(schema.project.name, "Sideproject");
        // untouched sections keep their defaults
        assert_eq!(schema.workflow.gradle_version, "8.2");
    }
}
