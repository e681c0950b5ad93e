//! Template rendering for the generated build configuration
//!
//! Each function renders the full content of one artifact from the project
//! configuration, a [`LayoutStyle`], and an optional [`Stamp`]. Rendering is
//! pure string formatting; nothing here touches the file system.

use crate::artifact::{Artifact, Stamp};
use rescue_core::config::{ConfigSchema, LayoutStyle, ProjectConfig, WorkflowConfig};

/// Relative path of the Gradle settings file
pub const SETTINGS_GRADLE: &str = "settings.gradle";
/// Relative path of the root build descriptor
pub const ROOT_BUILD_GRADLE: &str = "build.gradle";
/// Relative path of the app-module build descriptor
pub const APP_BUILD_GRADLE: &str = "app/build.gradle";
/// Relative path of the CI workflow descriptor
pub const WORKFLOW_YML: &str = ".github/workflows/android.yml";

/// The full artifact set for one run
///
/// Holds the resolved configuration, the layout style, and the run stamp so
/// every artifact of a run renders from the same inputs.
pub struct Blueprint<'a> {
    schema: &'a ConfigSchema,
    style: LayoutStyle,
    stamp: Option<Stamp>,
}

impl<'a> Blueprint<'a> {
    /// Create a blueprint for one run
    pub fn new(schema: &'a ConfigSchema, style: LayoutStyle, stamp: Option<Stamp>) -> Self {
        Self {
            schema,
            style,
            stamp,
        }
    }

    /// The layout style this blueprint renders
    pub fn style(&self) -> LayoutStyle {
        self.style
    }

    /// Render every artifact at its fixed relative path
    pub fn artifacts(&self) -> Vec<Artifact> {
        vec![
            Artifact::new(
                SETTINGS_GRADLE,
                settings_gradle(&self.schema.project, self.style, self.stamp),
            ),
            Artifact::new(
                ROOT_BUILD_GRADLE,
                root_build_gradle(&self.schema.project, self.style, self.stamp),
            ),
            Artifact::new(
                APP_BUILD_GRADLE,
                app_build_gradle(&self.schema.project, self.style, self.stamp),
            ),
            self.workflow(),
        ]
    }

    /// Render only the CI workflow artifact
    pub fn workflow(&self) -> Artifact {
        Artifact::new(WORKFLOW_YML, workflow_yml(&self.schema.workflow, self.stamp))
    }
}

fn stamp_header(stamp: Option<Stamp>) -> String {
    match stamp {
        Some(s) => format!("// Updated: {}\n", s),
        None => String::new(),
    }
}

/// Render `settings.gradle`
///
/// The modern style adds centralized plugin and dependency-repository
/// management; the classic style is just the project name and module list.
pub fn settings_gradle(project: &ProjectConfig, style: LayoutStyle, stamp: Option<Stamp>) -> String {
    let mut out = stamp_header(stamp);

    if style == LayoutStyle::Modern {
        out.push_str(
            r#"pluginManagement {
    repositories {
        google()
        mavenCentral()
        gradlePluginPortal()
    }
}
dependencyResolutionManagement {
    repositoriesMode.set(RepositoriesMode.FAIL_ON_PROJECT_REPOS)
    repositories {
        google()
        mavenCentral()
    }
}
"#,
        );
    }

    out.push_str(&format!(
        "rootProject.name = \"{}\"\ninclude ':app'\n",
        project.name
    ));
    out
}

/// Render the root `build.gradle`
pub fn root_build_gradle(
    project: &ProjectConfig,
    style: LayoutStyle,
    stamp: Option<Stamp>,
) -> String {
    let mut out = stamp_header(stamp);

    match style {
        LayoutStyle::Classic => out.push_str(&format!(
            r#"buildscript {{
    repositories {{
        google()
        mavenCentral()
    }}
    dependencies {{
        classpath 'com.android.tools.build:gradle:{agp}'
    }}
}}

allprojects {{
    repositories {{
        google()
        mavenCentral()
    }}
}}

task clean(type: Delete) {{
    delete rootProject.buildDir
}}
"#,
            agp = project.agp_version
        )),
        LayoutStyle::Modern => out.push_str(&format!(
            "plugins {{\n    id 'com.android.application' version '{}' apply false\n}}\n",
            project.agp_version
        )),
    }

    out
}

/// Render `app/build.gradle`
///
/// The style only changes the plugin header; the `android` block and the
/// dependency list are shared. An empty dependency list drops the
/// `dependencies` block entirely.
pub fn app_build_gradle(
    project: &ProjectConfig,
    style: LayoutStyle,
    stamp: Option<Stamp>,
) -> String {
    let mut out = stamp_header(stamp);

    match style {
        LayoutStyle::Classic => out.push_str("apply plugin: 'com.android.application'\n\n"),
        LayoutStyle::Modern => {
            out.push_str("plugins {\n    id 'com.android.application'\n}\n\n");
        }
    }

    out.push_str(&format!(
        r#"android {{
    namespace '{namespace}'
    compileSdk {compile_sdk}

    defaultConfig {{
        applicationId "{application_id}"
        minSdk {min_sdk}
        targetSdk {target_sdk}
        versionCode {version_code}
        versionName "{version_name}"

        externalNativeBuild {{
            cmake {{
                cppFlags "{cpp_flags}"
            }}
        }}
    }}

    externalNativeBuild {{
        cmake {{
            path "src/main/cpp/CMakeLists.txt"
        }}
    }}

    ndkVersion "{ndk_version}"
}}
"#,
        namespace = project.namespace,
        compile_sdk = project.compile_sdk,
        application_id = project.application_id,
        min_sdk = project.min_sdk,
        target_sdk = project.target_sdk,
        version_code = project.version_code,
        version_name = project.version_name,
        cpp_flags = project.cpp_flags,
        ndk_version = project.ndk_version,
    ));

    if !project.dependencies.is_empty() {
        out.push_str("\ndependencies {\n");
        for dep in &project.dependencies {
            out.push_str(&format!("    implementation '{}'\n", dep));
        }
        out.push_str("}\n");
    }

    out
}

/// Render the CI workflow descriptor
///
/// When stamped, the stamp lands in the uploaded artifact name so every run
/// produces a distinctly named artifact.
pub fn workflow_yml(workflow: &WorkflowConfig, stamp: Option<Stamp>) -> String {
    let artifact_name = match stamp {
        Some(s) => format!("{}-{}", workflow.artifact_name, s),
        None => workflow.artifact_name.clone(),
    };

    format!(
        r#"name: {name}
on: [push, workflow_dispatch]
jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4

      - name: Setup JDK {java}
        uses: actions/setup-java@v4
        with:
          java-version: '{java}'
          distribution: 'temurin'

      - name: Setup Gradle {gradle}
        uses: gradle/actions/setup-gradle@v3
        with:
          gradle-version: '{gradle}'

      - name: Setup Android SDK
        uses: android-actions/setup-android@v3

      - name: Build APK
        run: gradle assembleDebug --no-daemon --stacktrace

      - name: Upload APK
        if: success()
        uses: actions/upload-artifact@v4
        with:
          name: {artifact}
          path: app/build/outputs/apk/debug/app-debug.apk
"#,
        name = workflow.name,
        java = workflow.java_version,
        gradle = workflow.gradle_version,
        artifact = artifact_name,
    )
}
