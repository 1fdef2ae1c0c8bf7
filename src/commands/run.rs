// src/commands/run.rs

use tracing::debug;

use crate::cli::RunArgs;
use crate::commands::{print_errors, resolve_against, resolve_output_var};
use crate::config::ConfigFile;
use crate::errors::Result;
use crate::exec::{
    parse_env_file, EnvSnapshot, ExecutionRequest, Orchestrator, ProcessBackend,
};
use crate::scaffold::Category;

/// Build the request from CLI arguments and config.
///
/// Everything that can be rejected without touching the filesystem (output
/// variable, env file) is checked here.
pub fn build_request(args: &RunArgs, config: &ConfigFile) -> Result<ExecutionRequest> {
    let output_var = resolve_output_var(args.output_var.as_deref(), config)?;
    let script = std::path::absolute(resolve_against(&config.repo_root, &args.script))?;
    let env_overrides = match &args.vars {
        Some(path) => parse_env_file(path)?,
        None => Default::default(),
    };

    Ok(ExecutionRequest {
        script,
        workdir: args.workdir.clone(),
        env_overrides,
        attachments: args.attachments.clone(),
        output_var,
        validate: args.validate_monitor,
        monitor: args.monitor || args.category == Some(Category::Monitors),
    })
}

pub async fn run<B: ProcessBackend>(
    args: &RunArgs,
    config: &ConfigFile,
    orchestrator: &Orchestrator<B>,
) -> Result<i32> {
    let request = build_request(args, config)?;
    let prepared = orchestrator.prepare(&request, &EnvSnapshot::capture())?;

    println!("Workdir: {}", prepared.workdir.display());
    println!("Script:  {}", prepared.script.display());
    println!("Cmd:     {}", prepared.command.display());

    let outcome = prepared.run(orchestrator).await?;

    println!("Exit code: {}", outcome.process_exit_code);
    println!("Stdout:    {}", outcome.stdout_path.display());
    println!("Stderr:    {}", outcome.stderr_path.display());

    if let Some(validation) = &outcome.validation {
        if validation.ok() {
            println!("Monitor output: OK ({}=...)", request.output_var);
        } else {
            eprintln!("Monitor output: INVALID (expected '{}=...')", request.output_var);
            print_errors(validation.errors());
        }
    }

    debug!(exit_code = outcome.exit_code, "run command finished");
    Ok(outcome.exit_code)
}
