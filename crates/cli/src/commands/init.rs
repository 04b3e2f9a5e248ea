use anyhow::{Context, Result};
use file_runner_core::{Config, config::CONFIG_FILE_NAMES};
use std::{env, path::PathBuf};
use tracing::info;

use crate::config::create_default_config;

pub fn init_command(cwd: Option<&str>, force: bool) -> Result<()> {
    let project_root = if let Some(cwd) = cwd {
        PathBuf::from(cwd)
    } else {
        env::current_dir().context("Failed to get current directory")?
    };

    let project_root = project_root
        .canonicalize()
        .context("Failed to canonicalize project root")?;

    let existing = Config::config_file_in(&project_root);
    if let Some(path) = existing.as_ref().filter(|_| !force) {
        println!("❌ Config already exists at: {}", path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    let config: Config = serde_json::from_str(&create_default_config())
        .context("Starter config template is not valid")?;
    let config_path = existing.unwrap_or_else(|| project_root.join(CONFIG_FILE_NAMES[0]));
    config
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    info!("Created config: {}", config_path.display());

    println!("✅ Created config: {}", config_path.display());
    println!("\n📌 Edit runCommands, compileCommands and projectCommands to suit your tools.");
    println!("   Templates may use <file>, <outDir>, <out> and <workspace>.");

    Ok(())
}
