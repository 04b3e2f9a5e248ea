//! Integration tests for the run-current-file flow through the public API

use file_runner_core::{
    Bindings, CompileCommand, LanguageId, RunPlan, Runner, compose_compile_and_run,
    config::{CompileCommands, RunCommands},
    output_name,
    resolver::resolve_run_command,
    services::{PathFileState, StdFileSystem},
    substitute,
};
use file_runner_suite::fixtures::{sample_config, touch};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
fn test_substitution_example() {
    let bindings = Bindings::new().file("/a/b.c").out_dir("/a/out").out("b");
    assert_eq!(
        substitute("<file> -> <out> in <outDir>", &bindings),
        "/a/b.c -> b in /a/out"
    );
}

#[test]
fn test_language_alias_normalization() {
    assert_eq!(LanguageId::from_document(Some("objective-c")).as_str(), "c");
    assert_eq!(LanguageId::from_document(Some("python")).as_str(), "python");
    assert_eq!(LanguageId::from_document(None).as_str(), "");
}

#[test]
fn test_output_name_strips_final_extension_only() {
    assert_eq!(output_name("main.test.c"), "main.test");
    assert_eq!(output_name("README"), "README");
}

#[test]
fn test_compose_with_real_filesystem() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    let file = touch(&dir.join("a.c"));

    let mut compile = CompileCommands::new();
    compile.insert(
        "c".into(),
        CompileCommand::new("gcc <file> -o <outDir>/<out>", "<outDir>/<out>"),
    );

    // Second pass runs against an existing output directory
    let fs = StdFileSystem::new();
    for _ in 0..2 {
        let pair = compose_compile_and_run("c", dir, &file, "a.c", &compile, "out", &fs)
            .unwrap()
            .unwrap();
        let out_dir = dir.join("out");
        assert_eq!(pair.out_dir, out_dir);
        assert_eq!(
            pair.compile,
            format!("gcc {} -o {}/a", file.display(), out_dir.display())
        );
        assert_eq!(pair.run, format!("{}/a", out_dir.display()));
    }
    assert!(dir.join("out").is_dir());
}

#[test]
fn test_compile_path_wins_for_c_files() {
    let temp_dir = TempDir::new().unwrap();
    let file = touch(&temp_dir.path().join("src").join("prog.c"));

    let runner = Runner::new(sample_config());
    let plan = runner
        .plan_current_file(&PathFileState::new(&file, "c"))
        .unwrap()
        .unwrap();

    assert!(matches!(plan, RunPlan::CompileAndRun { .. }));
    assert!(!plan.to_shell_command().contains("tcc -run"));
}

#[test]
fn test_missing_run_command_is_absent() {
    assert_eq!(resolve_run_command("ruby", &RunCommands::new()), None);
}

#[test]
fn test_plan_request_for_executor() {
    let runner = Runner::new(sample_config());
    let state = PathFileState::new(Path::new("/srv/app/main.py"), "python");
    let request = runner.plan_current_file(&state).unwrap().unwrap().to_request();

    assert_eq!(request.name, "Run");
    assert_eq!(request.cwd, PathBuf::from("/srv/app"));
    assert_eq!(request.steps, vec!["python -u /srv/app/main.py".to_string()]);
}

#[test]
fn test_project_plan_from_fixture() {
    let runner = Runner::new(sample_config());
    let plan = runner.plan_project(None, Some(Path::new("/srv/app")), None).unwrap();
    assert_eq!(plan.command, "npm --prefix /srv/app start");
}
