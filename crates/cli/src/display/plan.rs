use file_runner_core::{ProjectCommandEntry, ProjectPlan, RunPlan};

pub fn print_run_plan(plan: &RunPlan) {
    match plan {
        RunPlan::CompileAndRun { pair, cwd } => {
            println!("{}", pair.to_shell_command());
            println!("   🔧 Command breakdown:");
            println!("      • compile: {}", pair.compile);
            println!("      • run: {}", pair.run);
            println!("      • outDir: {}", pair.out_dir.display());
            println!("Working directory: {}", cwd.display());
        }
        RunPlan::Direct { command, cwd } => {
            println!("{}", command);
            println!("Working directory: {}", cwd.display());
        }
    }
}

pub fn print_project_plan(plan: &ProjectPlan) {
    println!("{}", plan.command);
    println!("Task: {}", plan.name);
    println!("Working directory: {}", plan.cwd.display());
}

pub fn print_project_entries(entries: &[ProjectCommandEntry]) {
    if entries.is_empty() {
        println!("ℹ️  No project commands configured");
        return;
    }

    println!("📋 Project commands:");
    for entry in entries {
        let marker = if entry.is_default { " (default)" } else { "" };
        println!("   • {}{}: {}", entry.command_type, marker, entry.command);
    }
}
