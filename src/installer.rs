use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::{config, fs_ops, logging, paths};

pub struct Targets {
    pub package_dir: PathBuf,
    pub skills_dir: PathBuf,
    pub marketplace_dir: PathBuf,
}

impl Targets {
    pub fn resolve() -> Result<Self> {
        let package_dir = paths::package_dir()?;
        let claude_dir = paths::claude_config_dir()?;
        Ok(Self {
            package_dir,
            skills_dir: paths::skills_dir(&claude_dir),
            marketplace_dir: paths::marketplace_dir(&claude_dir),
        })
    }
}

pub fn run() -> Result<()> {
    let log_path = logging::init(&std::env::temp_dir()).ok();
    let log = log_path.as_deref();

    println!();
    println!("Installing DayZ Dev Plugin for Claude Code...");
    println!();

    let result = Targets::resolve().and_then(|targets| run_with_targets(&targets, log));

    match result {
        Ok(()) => {
            let _ = logging::log_line(log, "Install completed successfully");
            print_summary();
            Ok(())
        }
        Err(err) => {
            let _ = logging::log_line(log, &format!("Install failed: {err:#}"));
            eprintln!("Installation failed: {err:#}");
            eprintln!();
            eprintln!("Manual installation:");
            eprintln!("   Copy contents to: {}", manual_install_hint());
            Err(err)
        }
    }
}

pub fn run_with_targets(targets: &Targets, log: Option<&Path>) -> Result<()> {
    let _ = logging::log_line(
        log,
        &format!("Starting install for {} v{}", config::PLUGIN_NAME, config::VERSION),
    );

    println!("   Source: {}", targets.package_dir.display());
    println!("   Skills: {}", targets.skills_dir.display());
    println!("   Plugins: {}", targets.marketplace_dir.display());
    println!();

    install_into(&targets.package_dir, &targets.skills_dir, log)?;
    println!("Installed to skills directory");

    install_into(&targets.package_dir, &targets.marketplace_dir, log)?;
    println!("Installed to plugins directory");

    Ok(())
}

fn install_into(package_dir: &Path, dest: &Path, log: Option<&Path>) -> Result<()> {
    let copied = fs_ops::copy_dir(package_dir, dest)
        .with_context(|| format!("install into {}", dest.display()))?;
    let _ = logging::log_line(
        log,
        &format!("Copied {copied} files into {}", dest.display()),
    );
    Ok(())
}

fn manual_install_hint() -> String {
    match paths::claude_config_dir() {
        Ok(claude_dir) => paths::skills_dir(&claude_dir).display().to_string(),
        Err(_) => format!("~/.claude/skills/{}", config::PLUGIN_NAME),
    }
}

fn print_summary() {
    println!();
    println!("DayZ Dev Plugin installed successfully!");
    println!();
    println!("Usage:");
    println!("   - Ask DayZ modding questions naturally (skill auto-activates)");
    println!("   - Use /dayz-dev <query> for direct questions");
    println!("   - Restart Claude Code after installation");
    println!();
    println!("Docs: {}", config::DOCS_URL);
    println!();
}
