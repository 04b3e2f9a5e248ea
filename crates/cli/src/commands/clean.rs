use anyhow::Result;
use file_runner_core::{ClearOutcome, Runner};

use super::{file_state, load_config};
use crate::utils::resolve_path;

pub fn clean_command(filepath_arg: &str) -> Result<()> {
    let file = resolve_path(filepath_arg)?;
    let runner = Runner::new(load_config(&file)?);

    match runner.clear_out_dir(&file_state(&file, None)?)? {
        ClearOutcome::Removed(dir) => println!("✅ Cleared output directory: {}", dir.display()),
        ClearOutcome::Missing(dir) => {
            println!("⚠️  Output directory does not exist: {}", dir.display())
        }
        ClearOutcome::NoActiveFile => println!("❌ Could not determine the file path"),
    }

    Ok(())
}
