//! Build-configuration blueprints for the gradle-rescue tool
//!
//! This crate turns a project configuration into a fixed set of text
//! artifacts and writes them to disk:
//!
//! - **Templates**: render Gradle descriptors and the CI workflow in either
//!   the classic or the modern layout style
//! - **Materializer**: full-content writes against an explicit root
//!   directory, creating parent directories as needed
//! - **Publisher**: optional best-effort forwarding to git
//!
//! # Example
//!
//! ```rust,no_run
//! use rescue_blueprint::{Blueprint, Materializer};
//! use rescue_core::config::{ConfigSchema, LayoutStyle};
//!
//! let schema = ConfigSchema::default();
//! let blueprint = Blueprint::new(&schema, LayoutStyle::Modern, None);
//! let materializer = Materializer::new(".");
//! materializer.materialize(&blueprint.artifacts()).expect("write failed");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod artifact;
pub mod materialize;
pub mod publish;
pub mod templates;

pub use artifact::{Artifact, Stamp};
pub use materialize::Materializer;
pub use publish::{GitPublisher, PublishReport, Publisher, RecordingPublisher};
pub use templates::Blueprint;
