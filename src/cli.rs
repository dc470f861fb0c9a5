//! Command-line interface implementation for mcp-forge.
//! Provides argument parsing, settings layering and the plain-text summary printed
//! after a project has been generated.

use crate::config::{load_settings, Feature, ProjectSettings, ServerConfig};
use crate::constants::{exit_codes, TRANSPORTS};
use crate::error::Result;
use crate::manifest::{build_manifest, Plan};
use crate::processor::{generate_project, Processor, Report};
use crate::renderer::MiniJinjaRenderer;
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use indexmap::IndexMap;
use log::info;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Command-line arguments structure for mcp-forge.
#[derive(Parser, Debug)]
#[command(author, version, about = "mcp-forge: create MCP servers with ease", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new MCP server project
    New(NewArgs),
}

/// Arguments of `mcp-forge new`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct NewArgs {
    /// Name of the project directory to create
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// Project description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Python version requirement of the generated project (default ">=3.10")
    #[arg(short, long)]
    pub python_version: Option<String>,

    /// Directory the project directory is created in
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// JSON or YAML file with description, python_version and features
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Include prompt examples
    #[arg(long, overrides_with = "no_prompts")]
    pub with_prompts: bool,
    #[arg(long, overrides_with = "with_prompts")]
    pub no_prompts: bool,

    /// Enable sampling support for AI-to-AI collaboration
    #[arg(long, overrides_with = "no_sampling")]
    pub with_sampling: bool,
    #[arg(long, overrides_with = "with_sampling")]
    pub no_sampling: bool,

    /// Include elicitation tools that ask the user for structured input
    #[arg(long, overrides_with = "no_elicitation")]
    pub with_elicitation: bool,
    #[arg(long, overrides_with = "with_elicitation")]
    pub no_elicitation: bool,

    /// Include filesystem roots support
    #[arg(long, overrides_with = "no_roots")]
    pub with_roots: bool,
    #[arg(long, overrides_with = "with_roots")]
    pub no_roots: bool,

    /// Include argument completion support
    #[arg(long, overrides_with = "no_completion")]
    pub with_completion: bool,
    #[arg(long, overrides_with = "with_completion")]
    pub no_completion: bool,

    /// Protect the HTTP and SSE transports with bearer token authentication
    #[arg(long, overrides_with = "no_auth")]
    pub with_auth: bool,
    #[arg(long, overrides_with = "with_auth")]
    pub no_auth: bool,

    /// Print the directories and files that would be generated, then stop
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl NewArgs {
    /// Feature states requested explicitly on the command line.
    pub fn toggles(&self) -> IndexMap<Feature, bool> {
        [
            (Feature::Prompts, toggle(self.with_prompts, self.no_prompts)),
            (Feature::Sampling, toggle(self.with_sampling, self.no_sampling)),
            (Feature::Elicitation, toggle(self.with_elicitation, self.no_elicitation)),
            (Feature::Roots, toggle(self.with_roots, self.no_roots)),
            (Feature::Completion, toggle(self.with_completion, self.no_completion)),
            (Feature::Auth, toggle(self.with_auth, self.no_auth)),
        ]
        .into_iter()
        .filter_map(|(feature, state)| state.map(|enabled| (feature, enabled)))
        .collect()
    }

    /// The command line as a settings layer.
    pub fn settings(&self) -> ProjectSettings {
        ProjectSettings {
            description: self.description.clone(),
            python_version: self.python_version.clone(),
            features: self.toggles(),
        }
    }
}

/// Parses command line arguments, printing the help text when required
/// arguments are missing.
pub fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument
            || e.kind() == ErrorKind::MissingSubcommand
        {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

fn title(feature: Feature) -> &'static str {
    match feature {
        Feature::Prompts => "Prompts",
        Feature::Sampling => "Sampling",
        Feature::Elicitation => "Elicitation",
        Feature::Roots => "Roots",
        Feature::Completion => "Completion",
        Feature::Auth => "Auth",
    }
}

/// Lines describing a generated project and how to run it.
pub fn summary_lines(report: &Report) -> Vec<String> {
    let mut lines = vec![
        "Successfully created new MCP server!".to_string(),
        String::new(),
        format!("Project: {}", report.project_name),
        format!("Transports: {} (all included)", TRANSPORTS.join(", ")),
    ];
    lines.extend(report.features.iter().map(|f| format!("{}: Enabled", title(*f))));

    lines.push(String::new());
    lines.push("Next steps:".to_string());
    lines.push(format!("  1. cd {}", report.root.display()));
    lines.push("  2. uv venv && uv pip install -e .".to_string());
    lines.push("  3. Choose a transport to run:".to_string());
    for transport in TRANSPORTS {
        lines.push(format!(
            "     - python -m {} --transport {transport}",
            report.package_name
        ));
    }
    lines
}

/// Lines listing what a dry run would create.
pub fn plan_lines(plan: &Plan) -> Vec<String> {
    let mut lines = vec![format!("Would create {}:", plan.root.display())];
    lines.extend(plan.directories.iter().map(|dir| format!("  dir   {}", dir.display())));
    lines.extend(
        plan.files
            .iter()
            .map(|(template, path)| format!("  file  {} <- {template}", path.display())),
    );
    lines
}

/// Runs `mcp-forge new`.
///
/// # Flow
/// 1. Loads the optional settings file and layers the command line on top
/// 2. Builds the immutable configuration
/// 3. Prints the plan on `--dry-run`, otherwise generates the project and prints
///    a summary
pub fn run(args: NewArgs) -> Result<()> {
    let file_settings = match &args.config {
        Some(path) => load_settings(path)?,
        None => ProjectSettings::default(),
    };
    let settings = file_settings.overlay(args.settings());
    let config = ServerConfig::from_settings(&args.project_name, &settings)?;

    if args.dry_run {
        let renderer = MiniJinjaRenderer::new();
        let root = args.output_dir.join(config.project_name());
        let plan = Processor::new(&renderer).plan(&build_manifest(&config), root)?;
        plan_lines(&plan).iter().for_each(|line| println!("{line}"));
        return Ok(());
    }

    let report = generate_project(&config, &args.output_dir)?;
    info!("Enabled features: {:?}", report.features);
    summary_lines(&report).iter().for_each(|line| println!("{line}"));
    Ok(())
}
