//! Command template lookup
//!
//! A missing key and an empty template both mean "no configured command".

use crate::{
    config::{CompileCommands, Config, ProjectCommands, RunCommands},
    types::{CompileCommand, LanguageId},
};
use tracing::trace;

/// Direct run template for `language_id`
pub fn resolve_run_command<'a>(language_id: &str, run_commands: &'a RunCommands) -> Option<&'a str> {
    run_commands
        .get(language_id)
        .map(String::as_str)
        .filter(|command| !command.is_empty())
}

/// Compile/run pair for `language_id`
pub fn resolve_compile_command<'a>(
    language_id: &str,
    compile_commands: &'a CompileCommands,
) -> Option<&'a CompileCommand> {
    compile_commands
        .get(language_id)
        .filter(|command| !command.is_empty())
}

/// Whole-project template for `command_type`
pub fn resolve_project_command<'a>(
    command_type: &str,
    project_commands: &'a ProjectCommands,
) -> Option<&'a str> {
    project_commands
        .get(command_type)
        .map(String::as_str)
        .filter(|command| !command.is_empty())
}

/// Which table answered a lookup for a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    Compile(&'a CompileCommand),
    Run(&'a str),
}

/// Lookups against one configuration snapshot
#[derive(Debug, Clone, Copy)]
pub struct CommandResolver<'a> {
    config: &'a Config,
}

impl<'a> CommandResolver<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Template for running a file: the compile table first, then the run table
    pub fn resolve(&self, language_id: &LanguageId) -> Option<Resolution<'a>> {
        if let Some(pair) = self.compile_command(language_id) {
            trace!("'{}' resolved from compileCommands", language_id);
            return Some(Resolution::Compile(pair));
        }

        let resolved = self.run_command(language_id).map(Resolution::Run);
        if resolved.is_some() {
            trace!("'{}' resolved from runCommands", language_id);
        }
        resolved
    }

    pub fn run_command(&self, language_id: &LanguageId) -> Option<&'a str> {
        resolve_run_command(language_id.as_str(), &self.config.run_commands)
    }

    pub fn compile_command(&self, language_id: &LanguageId) -> Option<&'a CompileCommand> {
        resolve_compile_command(language_id.as_str(), &self.config.compile_commands)
    }

    pub fn project_command(&self, command_type: &str) -> Option<&'a str> {
        resolve_project_command(command_type, &self.config.project_commands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        let mut config = Config::default();
        config.run_commands.insert("python".into(), "python <file>".into());
        config.run_commands.insert("c".into(), "tcc -run <file>".into());
        config.run_commands.insert("lua".into(), String::new());
        config.compile_commands.insert(
            "c".into(),
            CompileCommand::new("gcc <file> -o <outDir>/<out>", "<outDir>/<out>"),
        );
        config.compile_commands.insert("zig".into(), CompileCommand::default());
        config.project_commands.insert("npm".into(), "npm start".into());
        config
    }

    #[test]
    fn test_missing_run_command_is_absent() {
        assert_eq!(resolve_run_command("ruby", &RunCommands::new()), None);
    }

    #[test]
    fn test_empty_templates_are_absent() {
        let config = config();
        assert_eq!(resolve_run_command("lua", &config.run_commands), None);
        assert_eq!(resolve_compile_command("zig", &config.compile_commands), None);
    }

    #[test]
    fn test_lookups_return_stored_templates() {
        let config = config();
        assert_eq!(resolve_run_command("python", &config.run_commands), Some("python <file>"));
        assert_eq!(
            resolve_compile_command("c", &config.compile_commands).map(|c| c.run.as_str()),
            Some("<outDir>/<out>")
        );
        assert_eq!(resolve_project_command("npm", &config.project_commands), Some("npm start"));
        assert_eq!(resolve_project_command("yarn", &config.project_commands), None);
    }

    #[test]
    fn test_compile_table_takes_precedence() {
        let config = config();
        let resolver = CommandResolver::new(&config);

        match resolver.resolve(&LanguageId::from("c")) {
            Some(Resolution::Compile(pair)) => assert_eq!(pair.compile, "gcc <file> -o <outDir>/<out>"),
            other => panic!("expected compile resolution, got {other:?}"),
        }
        assert_eq!(
            resolver.resolve(&LanguageId::from("python")),
            Some(Resolution::Run("python <file>"))
        );
        assert_eq!(resolver.resolve(&LanguageId::from("ruby")), None);
    }

    #[test]
    fn test_empty_compile_entry_falls_back_to_run_table() {
        let mut config = config();
        config.run_commands.insert("zig".into(), "zig run <file>".into());
        let resolver = CommandResolver::new(&config);
        assert_eq!(
            resolver.resolve(&LanguageId::from("zig")),
            Some(Resolution::Run("zig run <file>"))
        );
    }

    #[test]
    fn test_alias_resolves_through_canonical_key() {
        let config = config();
        let resolver = CommandResolver::new(&config);
        assert!(matches!(
            resolver.resolve(&LanguageId::from("objective-c")),
            Some(Resolution::Compile(_))
        ));
    }
}
