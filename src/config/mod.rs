// src/config/mod.rs

//! Configuration loading and validation for rmmkit.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate and resolve it into a [`ConfigFile`] (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, resolve_config, DEFAULT_CONFIG_FILE};
pub use model::{ConfigFile, InterpretersSection, PathsSection, RawConfigFile, RunSection};
