//! Shared fixtures for the workspace integration tests

pub mod fixtures {
    use file_runner_core::{CompileCommand, Config};
    use std::fs;
    use std::path::{Path, PathBuf};

    /// Config with one entry of each kind, `c` registered in both file tables
    pub fn sample_config() -> Config {
        let mut config = Config::default();
        config
            .run_commands
            .insert("python".into(), "python -u <file>".into());
        config.run_commands.insert("c".into(), "tcc -run <file>".into());
        config.compile_commands.insert(
            "c".into(),
            CompileCommand::new("gcc <file> -o <outDir>/<out>", "<outDir>/<out>"),
        );
        config
            .project_commands
            .insert("npm".into(), "npm --prefix <workspace> start".into());
        config
    }

    /// Write `json` as `.file-runner.json` inside `dir`, creating `dir` first
    pub fn write_config(dir: &Path, json: &serde_json::Value) -> PathBuf {
        fs::create_dir_all(dir).unwrap();
        let path = dir.join(".file-runner.json");
        fs::write(&path, serde_json::to_string_pretty(json).unwrap()).unwrap();
        path
    }

    /// Create an empty source file, parents included
    pub fn touch(path: &Path) -> PathBuf {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
        path.to_path_buf()
    }
}
