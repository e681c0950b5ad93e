//! Core utilities for the gradle-rescue tool
//!
//! This crate provides the substrate shared by the blueprint library and the
//! CLI binary:
//!
//! - **Error handling**: structured errors with codes, context, and recovery
//!   suggestions
//! - **Git operations**: staging, commits, force-pushes using command-line git
//! - **Process execution**: command execution with captured output
//! - **Configuration**: TOML-based configuration with defaults
//!
//! # Example
//!
//! ```rust,no_run
//! use rescue_core::{config::Config, git::GitRepo};
//! use std::path::Path;
//!
//! let root = Path::new(".");
//! let config = Config::load(root, None).expect("config");
//! println!("layout style: {}", config.schema.layout.style);
//!
//! let repo = GitRepo::open(root).expect("Not a git repo");
//! println!("on branch {}", repo.current_branch().expect("branch"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod git;
pub mod process;

pub use error::{Error, ErrorCode, Result, ResultExt};
