//! Compile/run composition for languages with a build step

use crate::{
    config::{CompileCommands, DEFAULT_COMPILE_OUT_DIR},
    error::Result,
    interfaces::FileSystem,
    resolver::resolve_compile_command,
    template::{Bindings, substitute},
    types::{CompileCommand, ResolvedCommandPair},
};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Output directory for sources in `dir`.
///
/// `out_dir_name` is always taken relative to `dir`: root and prefix
/// components are dropped, so an absolute name cannot point elsewhere. A
/// name with no normal component (`/`, `.`) would be `dir` itself and falls
/// back to `out`.
pub fn compile_out_dir(dir: &Path, out_dir_name: &str) -> PathBuf {
    let relative: Vec<Component<'_>> = Path::new(out_dir_name)
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect();

    if !relative.iter().any(|c| matches!(c, Component::Normal(_))) {
        return dir.join(DEFAULT_COMPILE_OUT_DIR);
    }

    let mut out_dir = dir.to_path_buf();
    out_dir.extend(relative);
    out_dir
}

/// File name with only its final extension stripped.
///
/// Names without a dot, or whose only dot is the leading one (`.env`), are
/// returned whole.
pub fn output_name(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(0) | None => filename,
        Some(index) => &filename[..index],
    }
}

/// Resolve the compile/run pair for `language_id` and fill in its placeholders.
///
/// Returns `Ok(None)` when no pair is configured. Otherwise the output
/// directory is created through `fs` before the commands are returned;
/// filesystem errors are passed on to the caller.
pub fn compose_compile_and_run(
    language_id: &str,
    dir: &Path,
    file_path: &Path,
    filename: &str,
    compile_commands: &CompileCommands,
    out_dir_name: &str,
    fs: &dyn FileSystem,
) -> Result<Option<ResolvedCommandPair>> {
    let Some(pair) = resolve_compile_command(language_id, compile_commands) else {
        return Ok(None);
    };

    let out_dir = compile_out_dir(dir, out_dir_name);
    fs.ensure_dir(&out_dir)?;

    Ok(Some(fill_pair(pair, file_path, out_dir, output_name(filename))))
}

fn fill_pair(
    pair: &CompileCommand,
    file_path: &Path,
    out_dir: PathBuf,
    out_name: &str,
) -> ResolvedCommandPair {
    let bindings = Bindings::new()
        .file(file_path.to_string_lossy())
        .out_dir(out_dir.to_string_lossy())
        .out(out_name);

    let compile = substitute(&pair.compile, &bindings);
    let run = substitute(&pair.run, &bindings);
    debug!("Composed compile: {} / run: {}", compile, run);

    ResolvedCommandPair {
        compile,
        run,
        out_dir,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Mutex;

    /// Records directories instead of creating them
    #[derive(Default)]
    struct RecordingFs {
        ensured: Mutex<Vec<PathBuf>>,
        fail: bool,
    }

    impl FileSystem for RecordingFs {
        fn ensure_dir(&self, path: &Path) -> io::Result<()> {
            if self.fail {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
            }
            self.ensured.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }

        fn remove_dir_recursive(&self, _path: &Path) -> io::Result<bool> {
            Ok(false)
        }
    }

    fn c_config() -> CompileCommands {
        let mut commands = CompileCommands::new();
        commands.insert(
            "c".to_string(),
            CompileCommand::new("gcc <file> -o <outDir>/<out>", "<outDir>/<out>"),
        );
        commands
    }

    #[test]
    fn test_output_name() {
        assert_eq!(output_name("main.test.c"), "main.test");
        assert_eq!(output_name("README"), "README");
        assert_eq!(output_name("a.c"), "a");
        assert_eq!(output_name(".env"), ".env");
        assert_eq!(output_name("trailing."), "trailing");
    }

    #[test]
    fn test_compile_out_dir() {
        assert_eq!(compile_out_dir(Path::new("/p"), "out"), PathBuf::from("/p/out"));
        assert_eq!(
            compile_out_dir(Path::new("/p"), "build/bin"),
            PathBuf::from("/p/build/bin")
        );
    }

    #[test]
    fn test_absolute_out_dir_name_stays_under_dir() {
        assert_eq!(compile_out_dir(Path::new("/p"), "/"), PathBuf::from("/p/out"));
        assert_eq!(compile_out_dir(Path::new("/p"), "."), PathBuf::from("/p/out"));
        assert_eq!(
            compile_out_dir(Path::new("/p"), "/tmp/elsewhere"),
            PathBuf::from("/p/tmp/elsewhere")
        );
        assert_eq!(compile_out_dir(Path::new("/p"), "./out"), PathBuf::from("/p/./out"));
    }

    #[test]
    fn test_compose_with_absolute_out_dir_name() {
        let fs = RecordingFs::default();
        let pair = compose_compile_and_run(
            "c",
            Path::new("/p"),
            Path::new("/p/a.c"),
            "a.c",
            &c_config(),
            "/var/build",
            &fs,
        )
        .unwrap()
        .unwrap();

        assert_eq!(pair.out_dir, PathBuf::from("/p/var/build"));
        assert_eq!(pair.run, "/p/var/build/a");
        assert_eq!(*fs.ensured.lock().unwrap(), vec![PathBuf::from("/p/var/build")]);
    }

    #[test]
    fn test_compose_c_file() {
        let fs = RecordingFs::default();
        let pair = compose_compile_and_run(
            "c",
            Path::new("/p"),
            Path::new("/p/a.c"),
            "a.c",
            &c_config(),
            "out",
            &fs,
        )
        .unwrap()
        .unwrap();

        assert_eq!(pair.compile, "gcc /p/a.c -o /p/out/a");
        assert_eq!(pair.run, "/p/out/a");
        assert_eq!(pair.out_dir, PathBuf::from("/p/out"));
        assert_eq!(*fs.ensured.lock().unwrap(), vec![PathBuf::from("/p/out")]);
    }

    #[test]
    fn test_compose_missing_language_creates_nothing() {
        let fs = RecordingFs::default();
        let result = compose_compile_and_run(
            "python",
            Path::new("/p"),
            Path::new("/p/a.py"),
            "a.py",
            &c_config(),
            "out",
            &fs,
        )
        .unwrap();

        assert!(result.is_none());
        assert!(fs.ensured.lock().unwrap().is_empty());
    }

    #[test]
    fn test_compose_keeps_inner_dots_in_output_name() {
        let fs = RecordingFs::default();
        let pair = compose_compile_and_run(
            "c",
            Path::new("/src"),
            Path::new("/src/main.test.c"),
            "main.test.c",
            &c_config(),
            "bin",
            &fs,
        )
        .unwrap()
        .unwrap();

        insta::assert_snapshot!(pair.to_shell_command(), @"gcc /src/main.test.c -o /src/bin/main.test && /src/bin/main.test");
    }

    #[test]
    fn test_compose_does_not_touch_stored_templates() {
        let fs = RecordingFs::default();
        let commands = c_config();
        let before = commands.clone();
        compose_compile_and_run("c", Path::new("/p"), Path::new("/p/a.c"), "a.c", &commands, "out", &fs)
            .unwrap();
        assert_eq!(commands, before);
    }

    #[test]
    fn test_filesystem_errors_propagate() {
        let fs = RecordingFs {
            fail: true,
            ..Default::default()
        };
        let err = compose_compile_and_run(
            "c",
            Path::new("/p"),
            Path::new("/p/a.c"),
            "a.c",
            &c_config(),
            "out",
            &fs,
        )
        .unwrap_err();
        assert!(matches!(err, crate::Error::IoError(_)));
    }
}
