// src/scaffold/mod.rs

//! Creating a new component file from a template.

pub mod layout;
pub mod names;
pub mod template;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

pub use layout::{destination_path, template_path, Category, TargetOs};
pub use names::normalize_kebab;
pub use template::render_template;

use crate::config::ConfigFile;
use crate::errors::{Result, RmmError};
use crate::validate::OutputVar;

#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub os: TargetOs,
    pub category: Category,
    pub name: String,
    pub output_var: String,
    pub version: String,
    pub force: bool,
}

/// What a scaffold will (or did) write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    pub filename: String,
    pub template: PathBuf,
    pub destination: PathBuf,
    pub rendered: String,
    /// Set for monitors only.
    pub output_var: Option<OutputVar>,
}

/// Resolve names and paths and render the template, without writing.
pub fn plan(request: &ScaffoldRequest, config: &ConfigFile) -> Result<ScaffoldPlan> {
    let filename = normalize_kebab(&request.name)?;
    let output_var = match request.category {
        Category::Monitors => Some(OutputVar::parse(&request.output_var)?),
        _ => None,
    };

    let destination = destination_path(&config.repo_root, request.os, request.category, &filename);
    let template = template_path(&config.templates_dir, request.os, request.category);

    if !template.is_file() {
        return Err(RmmError::config(format!(
            "Template not found: {}",
            template.display()
        )));
    }
    if destination.exists() && !request.force {
        return Err(RmmError::config(format!(
            "Refusing to overwrite existing file: {} (use --force to overwrite)",
            destination.display()
        )));
    }

    let display_name = match request.name.trim() {
        "" => filename.as_str(),
        trimmed => trimmed,
    };
    let output_var_text = output_var
        .as_ref()
        .map_or_else(|| request.output_var.trim().to_string(), ToString::to_string);
    let template_text = fs::read_to_string(&template)
        .with_context(|| format!("reading template {}", template.display()))?;
    let rendered = render_template(
        &template_text,
        &[
            ("NAME", display_name),
            ("FILENAME", filename.as_str()),
            ("CATEGORY", request.category.dir_name()),
            ("OS", request.os.dir_name()),
            ("OUTPUT_VAR", output_var_text.as_str()),
            ("VERSION", request.version.as_str()),
        ],
    );

    Ok(ScaffoldPlan {
        filename,
        template,
        destination,
        rendered,
        output_var,
    })
}

/// Write a planned component to disk. `.sh` files are made executable.
pub fn write(plan: &ScaffoldPlan) -> Result<()> {
    if let Some(parent) = plan.destination.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating dir {}", parent.display()))?;
    }
    fs::write(&plan.destination, &plan.rendered)
        .with_context(|| format!("writing {}", plan.destination.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if plan.destination.extension().is_some_and(|ext| ext == "sh") {
            fs::set_permissions(&plan.destination, fs::Permissions::from_mode(0o755))?;
        }
    }

    info!(path = %plan.destination.display(), "component written");
    Ok(())
}
