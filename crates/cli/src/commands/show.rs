use anyhow::Result;
use file_runner_core::{
    CommandResolver, Config, ConfigLoader, FileStateProvider, LanguageId, Resolution, Runner,
    services::PathFileState, template::placeholders_in,
};
use std::path::Path;

use super::{file_state, load_config};
use crate::display::print_run_plan;
use crate::utils::{PreviewFileSystem, resolve_path};

pub fn show_command(filepath_arg: &str, language: Option<&str>, json: bool) -> Result<()> {
    let file = resolve_path(filepath_arg)?;
    let config = load_config(&file)?;
    let state = file_state(&file, language)?;

    if !json {
        print_resolution(&file, &state, &config);
    }

    let runner = Runner::with_file_system(config, Box::new(PreviewFileSystem));
    match runner.plan_current_file(&state)? {
        Some(plan) if json => println!("{}", serde_json::to_string_pretty(&plan)?),
        Some(plan) => {
            println!("\n▶️  Command:");
            print_run_plan(&plan);
        }
        None => println!("ℹ️  No active file"),
    }

    Ok(())
}

fn print_resolution(file: &Path, state: &PathFileState, config: &Config) {
    println!("📄 File: {}", file.display());

    let raw = state
        .active_file()
        .map(|active| active.language_id)
        .unwrap_or_default();
    let language_id = LanguageId::normalize(&raw);
    if raw == language_id.as_str() {
        println!("🏷️  Language: {}", language_id);
    } else {
        println!("🏷️  Language: {} (alias of {})", raw, language_id);
    }

    let sources = ConfigLoader::from_env(file).sources();
    if sources.is_empty() {
        println!("⚙️  Config: defaults");
    } else {
        for source in &sources {
            println!("⚙️  Config: {}", source.display());
        }
    }

    let resolver = CommandResolver::new(config);
    match resolver.resolve(&language_id) {
        Some(Resolution::Compile(pair)) => {
            println!("🔨 compileCommands.{}", language_id);
            println!("      • compile: {}", pair.compile);
            println!("      • run: {}", pair.run);
            println!("      • outDir: {}", config.compile_out_dir_name());
            print_placeholders(&format!("{} {}", pair.compile, pair.run));
        }
        Some(Resolution::Run(template)) => {
            println!("🚀 runCommands.{}: {}", language_id, template);
            print_placeholders(template);
        }
        None => {}
    }
}

fn print_placeholders(template: &str) {
    for placeholder in placeholders_in(template) {
        println!("      • {}: {}", placeholder, placeholder.description());
    }
}
