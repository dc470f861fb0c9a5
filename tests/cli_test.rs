use clap::Parser;
use mcp_forge::cli::{plan_lines, run, summary_lines, Cli, Commands, NewArgs};
use mcp_forge::config::Feature;
use mcp_forge::error::Error;
use mcp_forge::manifest::ManifestBuilder;
use mcp_forge::processor::Report;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("mcp-forge")];
    res.extend(args.iter().map(OsString::from));
    res
}

fn parse_new(args: &[&str]) -> NewArgs {
    let mut full = vec!["new"];
    full.extend_from_slice(args);
    match Cli::try_parse_from(make_args(&full)).unwrap().command {
        Commands::New(args) => args,
    }
}

#[test]
fn test_basic_args() {
    let parsed = parse_new(&["my-server"]);

    assert_eq!(parsed.project_name, "my-server");
    assert_eq!(parsed.output_dir, PathBuf::from("."));
    assert_eq!(parsed.description, None);
    assert_eq!(parsed.python_version, None);
    assert!(!parsed.dry_run);
    assert_eq!(parsed.verbose, 0);
    assert!(parsed.toggles().is_empty());
}

#[test]
fn test_short_flags() {
    let parsed = parse_new(&[
        "-d",
        "A demo",
        "-p",
        ">=3.12",
        "-o",
        "/tmp/out",
        "-vv",
        "my-server",
    ]);

    assert_eq!(parsed.description.as_deref(), Some("A demo"));
    assert_eq!(parsed.python_version.as_deref(), Some(">=3.12"));
    assert_eq!(parsed.output_dir, PathBuf::from("/tmp/out"));
    assert_eq!(parsed.verbose, 2);
}

#[test]
fn test_feature_flags() {
    let parsed = parse_new(&["--no-prompts", "--with-auth", "--no-sampling", "my-server"]);
    let toggles = parsed.toggles();

    assert_eq!(toggles.get(&Feature::Prompts), Some(&false));
    assert_eq!(toggles.get(&Feature::Sampling), Some(&false));
    assert_eq!(toggles.get(&Feature::Auth), Some(&true));
    assert_eq!(toggles.get(&Feature::Roots), None);
}

#[test]
fn test_last_feature_flag_wins() {
    let parsed = parse_new(&["--with-auth", "--no-auth", "my-server"]);
    assert_eq!(parsed.toggles().get(&Feature::Auth), Some(&false));

    let parsed = parse_new(&["--no-roots", "--with-roots", "my-server"]);
    assert_eq!(parsed.toggles().get(&Feature::Roots), Some(&true));
}

#[test]
fn test_missing_args() {
    assert!(Cli::try_parse_from(make_args(&["new"])).is_err());
    assert!(Cli::try_parse_from(make_args(&[])).is_err());
}

#[test]
fn test_too_many_args() {
    assert!(Cli::try_parse_from(make_args(&["new", "my-server", "extra"])).is_err());
}

#[test]
fn test_summary_lists_enabled_features_and_transports() {
    let report = Report {
        project_name: "my-server".to_string(),
        package_name: "my_server".to_string(),
        features: vec![Feature::Prompts, Feature::Auth],
        root: PathBuf::from("out/my-server"),
        files: Vec::new(),
    };
    let lines = summary_lines(&report);

    assert!(lines.contains(&"Project: my-server".to_string()));
    assert!(lines.contains(&"Transports: stdio, http, sse (all included)".to_string()));
    assert!(lines.contains(&"Prompts: Enabled".to_string()));
    assert!(lines.contains(&"Auth: Enabled".to_string()));
    assert!(!lines.iter().any(|line| line.starts_with("Sampling")));
    assert!(lines.contains(&"     - python -m my_server --transport sse".to_string()));
}

#[test]
fn test_plan_lines_mention_every_file() {
    let manifest = ManifestBuilder::base("pkg").build();
    let plan = manifest.resolve("out/demo");
    let lines = plan_lines(&plan);

    assert_eq!(lines.len(), 1 + plan.directories.len() + plan.files.len());
    assert!(lines.iter().any(|line| line.ends_with("<- core/server_http.py.j2")));
}

#[test]
fn test_run_generates_project() {
    let temp_dir = TempDir::new().unwrap();
    let mut args = parse_new(&["--with-auth", "my-server"]);
    args.output_dir = temp_dir.path().to_path_buf();

    run(args).unwrap();

    let root = temp_dir.path().join("my-server");
    assert!(root.join("AUTH.md").is_file());
    assert!(root.join("my_server/server_stdio.py").is_file());
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let mut args = parse_new(&["--dry-run", "my-server"]);
    args.output_dir = temp_dir.path().to_path_buf();

    run(args).unwrap();

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_settings_file_is_overridden_by_flags() {
    let temp_dir = TempDir::new().unwrap();
    let settings = temp_dir.path().join("forge.yaml");
    fs::write(
        &settings,
        "description: From the file\nfeatures:\n  auth: true\n  prompts: false\n",
    )
    .unwrap();

    let out = temp_dir.path().join("out");
    let mut args = parse_new(&["--with-prompts", "my-server"]);
    args.output_dir = out.clone();
    args.config = Some(settings);

    run(args).unwrap();

    let root = out.join("my-server");
    assert!(root.join("auth_config.py").is_file());
    assert!(root.join("my_server/prompts").is_dir());
    let init = fs::read_to_string(root.join("my_server/__init__.py")).unwrap();
    assert!(init.contains("From the file"));
}

#[test]
fn test_missing_settings_file_is_a_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let mut args = parse_new(&["my-server"]);
    args.output_dir = temp_dir.path().to_path_buf();
    args.config = Some(temp_dir.path().join("absent.json"));

    assert!(matches!(run(args), Err(Error::ConfigError(_))));
    assert!(!temp_dir.path().join("my-server").exists());
}
