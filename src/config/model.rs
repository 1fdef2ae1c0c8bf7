// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::validate::OutputVar;

/// Top-level configuration as read from a TOML file (`Rmm.toml`).
///
/// ```toml
/// [paths]
/// repo_root = "."
/// templates_dir = "templates"
///
/// [run]
/// output_var = "Status"
///
/// [interpreters]
/// shell = "bash"
/// powershell = "pwsh"
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub paths: PathsSection,

    #[serde(default)]
    pub run: RunSection,

    #[serde(default)]
    pub interpreters: InterpretersSection,
}

/// `[paths]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsSection {
    /// Base for relative `--script` paths and for scaffold output.
    ///
    /// A relative value is resolved against the directory of the config file.
    #[serde(default = "default_repo_root")]
    pub repo_root: PathBuf,

    /// Where the `*.tmpl` files live. Relative to `repo_root` unless absolute.
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,
}

fn default_repo_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from("templates")
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            repo_root: default_repo_root(),
            templates_dir: default_templates_dir(),
        }
    }
}

/// `[run]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunSection {
    /// Output variable used when `--output-var` is not given.
    #[serde(default = "default_output_var")]
    pub output_var: String,
}

fn default_output_var() -> String {
    OutputVar::DEFAULT.to_string()
}

impl Default for RunSection {
    fn default() -> Self {
        Self {
            output_var: default_output_var(),
        }
    }
}

/// `[interpreters]` section: binaries used to run `.sh` and `.ps1` scripts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InterpretersSection {
    #[serde(default = "default_shell")]
    pub shell: String,

    #[serde(default = "default_powershell")]
    pub powershell: String,
}

fn default_shell() -> String {
    "bash".to_string()
}

fn default_powershell() -> String {
    "pwsh".to_string()
}

impl Default for InterpretersSection {
    fn default() -> Self {
        Self {
            shell: default_shell(),
            powershell: default_powershell(),
        }
    }
}

/// Validated configuration.
///
/// Only obtainable through `ConfigFile::try_from(RawConfigFile)` (see
/// `validate.rs`) or [`ConfigFile::default`], so the output variable is always
/// a valid name and paths are resolved.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub repo_root: PathBuf,
    pub templates_dir: PathBuf,
    pub output_var: OutputVar,
    pub interpreters: InterpretersSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        repo_root: PathBuf,
        templates_dir: PathBuf,
        output_var: OutputVar,
        interpreters: InterpretersSection,
    ) -> Self {
        Self {
            repo_root,
            templates_dir,
            output_var,
            interpreters,
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        let repo_root = default_repo_root();
        Self {
            templates_dir: repo_root.join(default_templates_dir()),
            repo_root,
            output_var: OutputVar::default(),
            interpreters: InterpretersSection::default(),
        }
    }
}
