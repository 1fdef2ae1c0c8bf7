// src/commands/validate.rs

use std::path::Path;

use anyhow::Context;
use tokio::io::AsyncReadExt;

use crate::cli::ValidateArgs;
use crate::commands::{print_errors, resolve_output_var};
use crate::config::ConfigFile;
use crate::errors::Result;
use crate::exec::EXIT_VALIDATION_FAILED;
use crate::validate::validate_monitor_output;

pub async fn run(args: &ValidateArgs, config: &ConfigFile) -> Result<i32> {
    let output_var = resolve_output_var(args.output_var.as_deref(), config)?;

    let (bytes, source) = if args.input == "-" {
        let mut buf = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut buf)
            .await
            .context("reading stdin")?;
        (buf, "<stdin>".to_string())
    } else {
        let path = Path::new(&args.input);
        let buf = tokio::fs::read(path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;
        (buf, path.display().to_string())
    };

    let result = validate_monitor_output(&String::from_utf8_lossy(&bytes), &output_var);
    if result.ok() {
        println!("OK: Monitor output is valid ({source})");
        return Ok(0);
    }

    eprintln!("INVALID: Monitor output failed validation ({source})");
    print_errors(result.errors());
    Ok(EXIT_VALIDATION_FAILED)
}
