// src/commands/scaffold.rs

use std::path::Path;

use crate::cli::ScaffoldArgs;
use crate::config::ConfigFile;
use crate::errors::Result;
use crate::scaffold::{self, Category, ScaffoldRequest};

pub fn run(args: &ScaffoldArgs, config: &ConfigFile) -> Result<i32> {
    let request = ScaffoldRequest {
        os: args.os,
        category: args.category,
        name: args.name.clone(),
        output_var: args
            .output_var
            .clone()
            .unwrap_or_else(|| config.output_var.to_string()),
        version: args.component_version.clone(),
        force: args.force,
    };
    let plan = scaffold::plan(&request, config)?;
    let root = &config.repo_root;

    println!("Repo root: {}", root.display());
    println!("Template:  {}", relative(&plan.template, root));
    println!("Target:    {}", relative(&plan.destination, root));

    if args.dry_run {
        println!("Dry run: not writing files.");
        return Ok(0);
    }

    scaffold::write(&plan)?;

    let target = relative(&plan.destination, root);
    println!();
    println!("Next steps:");
    println!("- Edit: {target}");
    println!("- Run locally: rmmkit run --script {target}");
    if let (Category::Monitors, Some(var)) = (args.category, &plan.output_var) {
        println!("- Validate output: rmmkit run --script {target} --validate-monitor --output-var {var}");
        println!("- Ensure the monitor Output Variable is set to: {var}");
    }

    Ok(0)
}

fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
