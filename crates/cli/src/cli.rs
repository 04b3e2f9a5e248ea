use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{clean_command, init_command, project_command, run_command, show_command};

const AFTER_HELP: &str = "\
PLACEHOLDERS:
    <file>         absolute path to the source file
    <outDir>       absolute path to the compile output directory
    <out>          source file name without its extension
    <workspace>    absolute path to the workspace root

ENVIRONMENT:
    RUNNER_CONFIG=path    Use this config file instead of looking up .file-runner.json
    RUST_LOG=debug        Enable debug logging";

/// Run the current file or project through configurable command templates
#[derive(Parser, Debug)]
#[command(name = "file-runner")]
#[command(version, about, long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct FileRunner {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile (when configured) and run a file
    #[command(visible_alias = "r")]
    Run {
        /// Path to the source file
        filepath: String,

        /// Language id to use instead of detecting it from the extension
        #[arg(short, long)]
        language: Option<String>,

        /// Print the commands without executing them
        #[arg(short, long)]
        dry_run: bool,
    },
    /// Run a whole-project command from the workspace root
    #[command(visible_alias = "p")]
    Project {
        /// Project command type (defaults to projectDefaultCommand)
        command_type: Option<String>,

        /// Workspace root (defaults to the current directory)
        #[arg(short, long)]
        workspace: Option<String>,

        /// Current file, for templates that use <file>
        #[arg(short, long)]
        file: Option<String>,

        /// List the configured project commands
        #[arg(long)]
        list: bool,

        /// Print the command without executing it
        #[arg(short, long)]
        dry_run: bool,
    },
    /// Remove the compile output directory next to a file
    Clean {
        /// Path to the source file
        filepath: String,
    },
    /// Show how a file would be run
    #[command(visible_alias = "s")]
    Show {
        /// Path to the source file
        filepath: String,

        /// Language id to use instead of detecting it from the extension
        #[arg(short, long)]
        language: Option<String>,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a starter .file-runner.json
    Init {
        /// Directory to initialize (defaults to the current directory)
        #[arg(long)]
        cwd: Option<String>,

        /// Overwrite an existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        tracing::debug!("Executing {:?}", self);

        match self {
            Commands::Run {
                filepath,
                language,
                dry_run,
            } => run_command(&filepath, language.as_deref(), dry_run),
            Commands::Project {
                command_type,
                workspace,
                file,
                list,
                dry_run,
            } => project_command(
                command_type.as_deref(),
                workspace.as_deref(),
                file.as_deref(),
                list,
                dry_run,
            ),
            Commands::Clean { filepath } => clean_command(&filepath),
            Commands::Show {
                filepath,
                language,
                json,
            } => show_command(&filepath, language.as_deref(), json),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        FileRunner::command().debug_assert();
    }

    #[test]
    fn test_parse_run() {
        let cli = FileRunner::parse_from(["file-runner", "run", "src/main.c", "--dry-run", "-l", "c"]);
        match cli.command {
            Commands::Run {
                filepath,
                language,
                dry_run,
            } => {
                assert_eq!(filepath, "src/main.c");
                assert_eq!(language.as_deref(), Some("c"));
                assert!(dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_project_without_type() {
        let cli = FileRunner::parse_from(["file-runner", "p", "--list"]);
        assert!(matches!(
            cli.command,
            Commands::Project {
                command_type: None,
                list: true,
                ..
            }
        ));
    }
}
