// src/scaffold/layout.rs

//! Where components and their templates live in the repository.

use std::path::{Path, PathBuf};

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    Applications,
    Scripts,
    Monitors,
}

impl Category {
    /// Directory under `components/`.
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Applications => "Applications",
            Category::Scripts => "Scripts",
            Category::Monitors => "Monitors",
        }
    }

    fn template_stem(self) -> &'static str {
        match self {
            Category::Applications => "application",
            Category::Scripts => "script",
            Category::Monitors => "monitor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetOs {
    Windows,
    Macos,
    Linux,
}

impl TargetOs {
    pub fn dir_name(self) -> &'static str {
        match self {
            TargetOs::Windows => "Windows",
            TargetOs::Macos => "macOS",
            TargetOs::Linux => "Linux",
        }
    }

    fn script_extension(self) -> &'static str {
        match self {
            TargetOs::Windows => "ps1",
            TargetOs::Macos | TargetOs::Linux => "sh",
        }
    }
}

pub fn template_path(templates_dir: &Path, os: TargetOs, category: Category) -> PathBuf {
    let flavour = match os {
        TargetOs::Windows => "powershell",
        TargetOs::Macos | TargetOs::Linux => "bash",
    };
    templates_dir.join(format!(
        "{flavour}-{}.{}.tmpl",
        category.template_stem(),
        os.script_extension()
    ))
}

/// `components/<Category>/[macOS|Linux/]<filename>.<ext>` under `repo_root`.
///
/// Windows components sit directly in the category directory.
pub fn destination_path(repo_root: &Path, os: TargetOs, category: Category, filename: &str) -> PathBuf {
    let mut dir = repo_root.join("components").join(category.dir_name());
    if os != TargetOs::Windows {
        dir.push(os.dir_name());
    }
    dir.join(format!("{filename}.{}", os.script_extension()))
}
