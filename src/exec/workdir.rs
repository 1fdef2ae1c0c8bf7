// src/exec/workdir.rs

use std::fs::{self, File, FileTimes};
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::errors::{Result, RmmError};

/// Prefix of working directories allocated when the caller gives none.
pub const TEMP_WORKDIR_PREFIX: &str = "rmm-run-";

/// Use `requested` (created if missing) or allocate a fresh temp directory.
///
/// Temp directories are kept after the run so the captured output can be
/// inspected.
pub fn prepare_workdir(requested: Option<&Path>) -> Result<PathBuf> {
    match requested {
        Some(dir) => {
            let dir = std::path::absolute(dir)?;
            fs::create_dir_all(&dir)
                .with_context(|| format!("creating workdir {}", dir.display()))?;
            Ok(dir)
        }
        None => {
            let dir = tempfile::Builder::new()
                .prefix(TEMP_WORKDIR_PREFIX)
                .tempdir()
                .context("creating temporary workdir")?;
            Ok(dir.keep())
        }
    }
}

pub fn ensure_attachments_dir(source: &Path) -> Result<()> {
    if !source.is_dir() {
        return Err(RmmError::config(format!(
            "--attachments must be a directory: {}",
            source.display()
        )));
    }
    Ok(())
}

/// Copy every regular file directly inside `source` into `workdir`.
///
/// Not recursive. Sub-directories and symlinks are skipped. Permissions and
/// timestamps are carried over where the platform allows. Returns the copied
/// destination paths.
pub fn copy_attachments(source: &Path, workdir: &Path) -> Result<Vec<PathBuf>> {
    ensure_attachments_dir(source)?;

    let mut copied = Vec::new();
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            debug!(path = %entry.path().display(), "skipping non-regular attachment entry");
            continue;
        }

        let src = entry.path();
        let dest = workdir.join(entry.file_name());
        fs::copy(&src, &dest)
            .with_context(|| format!("copying attachment {} to {}", src.display(), dest.display()))?;
        if let Err(e) = copy_times(&src, &dest) {
            debug!(path = %dest.display(), error = %e, "could not preserve attachment timestamps");
        }
        copied.push(dest);
    }

    Ok(copied)
}

fn copy_times(src: &Path, dest: &Path) -> std::io::Result<()> {
    let meta = fs::metadata(src)?;
    let mut times = FileTimes::new().set_modified(meta.modified()?);
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    let file = File::options()
        .write(true)
        .open(dest)
        .or_else(|_| File::open(dest))?;
    file.set_times(times)
}
