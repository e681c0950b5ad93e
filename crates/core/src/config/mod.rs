//! Configuration loading and schema definitions
//!
//! TOML configuration describing the project whose build files get
//! regenerated, plus the layout style, workflow, and publish settings.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
