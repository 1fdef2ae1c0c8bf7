// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, RmmError};
use crate::validate::OutputVar;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::RmmError;

    /// Paths are taken as they are; the loader resolves them against the
    /// config file location before calling this.
    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_interpreters(&raw)?;
        let output_var = OutputVar::parse(&raw.run.output_var).map_err(|_| {
            RmmError::config(format!(
                "[run].output_var '{}' must contain only letters, digits, and underscore",
                raw.run.output_var
            ))
        })?;

        let templates_dir = if raw.paths.templates_dir.is_absolute() {
            raw.paths.templates_dir
        } else {
            raw.paths.repo_root.join(&raw.paths.templates_dir)
        };

        Ok(ConfigFile::new_unchecked(
            raw.paths.repo_root,
            templates_dir,
            output_var,
            raw.interpreters,
        ))
    }
}

fn validate_interpreters(cfg: &RawConfigFile) -> Result<()> {
    for (key, value) in [
        ("shell", &cfg.interpreters.shell),
        ("powershell", &cfg.interpreters.powershell),
    ] {
        if value.trim().is_empty() {
            return Err(RmmError::config(format!(
                "[interpreters].{key} must not be empty"
            )));
        }
    }
    Ok(())
}
