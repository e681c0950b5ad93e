//! gradle-rescue CLI
//!
//! Regenerates Android build configuration from declarative templates and
//! optionally forwards the result to git.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rescue_blueprint::{Artifact, Blueprint, GitPublisher, Materializer, Publisher, Stamp};
use rescue_core::config::{Config, LayoutStyle};
use rescue_core::error::exit_codes;
use serde::Serialize;
use std::path::{Path, PathBuf};

mod output;

use output::Status;

#[derive(Parser)]
#[command(name = "gradle-rescue")]
#[command(about = "Regenerate Android build configuration from templates")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Project root directory to write into
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate all build descriptors and the CI workflow
    Apply {
        /// Layout style: classic, modern (overrides config)
        #[arg(long)]
        style: Option<String>,
        /// Embed a wall-clock stamp to force new bytes
        #[arg(long)]
        stamp: bool,
        /// Delete each target file before writing it
        #[arg(long)]
        fresh: bool,
        /// Stage, commit, and force-push after writing
        #[arg(long)]
        push: bool,
        /// Commit message used with --push
        #[arg(long)]
        message: Option<String>,
        /// Show what would be written without touching the file system
        #[arg(long)]
        dry_run: bool,
    },

    /// Regenerate only the CI workflow file
    Workflow {
        /// Delete the old workflow file before writing
        #[arg(long)]
        fresh: bool,
        /// Embed a wall-clock stamp to force new bytes
        #[arg(long)]
        stamp: bool,
        /// Stage, commit, and force-push after writing
        #[arg(long)]
        push: bool,
        /// Commit message used with --push
        #[arg(long)]
        message: Option<String>,
    },

    /// Diagnose environment
    Doctor {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        owo_colors::set_override(false);
    }

    let config = Config::load(&cli.root, cli.config.as_deref())?;

    let exit_code = match cli.command {
        Commands::Apply {
            style,
            stamp,
            fresh,
            push,
            message,
            dry_run,
        } => run_apply(
            &cli.root,
            &config,
            style.as_deref(),
            stamp,
            fresh,
            push,
            message.as_deref(),
            dry_run,
        ),
        Commands::Workflow {
            fresh,
            stamp,
            push,
            message,
        } => run_workflow(&cli.root, &config, fresh, stamp, push, message.as_deref()),
        Commands::Doctor { json } => run_doctor(&cli.root, &config, json),
    };

    std::process::exit(exit_code);
}

fn resolve_style(arg: Option<&str>, config: &Config) -> Option<LayoutStyle> {
    match arg {
        Some(s) => match s.parse() {
            Ok(style) => Some(style),
            Err(e) => {
                Status::error(&format!("{}", e));
                None
            }
        },
        None => Some(config.schema.layout.style),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_apply(
    root: &Path,
    config: &Config,
    style: Option<&str>,
    stamp: bool,
    fresh: bool,
    push: bool,
    message: Option<&str>,
    dry_run: bool,
) -> i32 {
    let Some(style) = resolve_style(style, config) else {
        return exit_codes::FAILURE;
    };

    let stamp = stamp.then(Stamp::now);
    let blueprint = Blueprint::new(&config.schema, style, stamp);
    let artifacts = blueprint.artifacts();

    Status::info(&format!("Rendering {} layout", style));

    if dry_run {
        preview(&artifacts);
        return exit_codes::SUCCESS;
    }

    if materialize(root, &artifacts, fresh) != exit_codes::SUCCESS {
        return exit_codes::FAILURE;
    }

    Status::success("Build configuration regenerated");

    if push {
        publish(root, config, message);
    }

    exit_codes::SUCCESS
}

fn run_workflow(
    root: &Path,
    config: &Config,
    fresh: bool,
    stamp: bool,
    push: bool,
    message: Option<&str>,
) -> i32 {
    let stamp = stamp.then(Stamp::now);
    let blueprint = Blueprint::new(&config.schema, config.schema.layout.style, stamp);
    let artifacts = vec![blueprint.workflow()];

    if materialize(root, &artifacts, fresh) != exit_codes::SUCCESS {
        return exit_codes::FAILURE;
    }

    Status::success("Workflow regenerated");

    if push {
        publish(root, config, message);
    }

    exit_codes::SUCCESS
}

/// Write artifacts below `root`, optionally deleting each target first
fn materialize(root: &Path, artifacts: &[Artifact], fresh: bool) -> i32 {
    let materializer = Materializer::new(root);
    let total = artifacts.len();

    for (idx, artifact) in artifacts.iter().enumerate() {
        if fresh {
            match materializer.delete_if_exists(&artifact.path) {
                Ok(true) => Status::step(
                    idx + 1,
                    total,
                    &format!("removed stale {}", artifact.path.display()),
                ),
                Ok(false) => {}
                Err(e) => {
                    Status::error(&format!("Delete failed: {}", e));
                    return exit_codes::FAILURE;
                }
            }
        }

        match materializer.write(artifact) {
            Ok(_) => Status::step(idx + 1, total, &format!("wrote {}", artifact.path.display())),
            Err(e) => {
                Status::error(&format!("Write failed: {}", e));
                return exit_codes::FAILURE;
            }
        }
    }

    exit_codes::SUCCESS
}

/// Forward written artifacts to git, best effort
///
/// Publish step failures never change the run's exit code; the files are
/// already on disk, which is the part this tool is accountable for.
fn publish(root: &Path, config: &Config, message: Option<&str>) {
    let publish_config = &config.schema.publish;
    let publisher = GitPublisher::new(root, &publish_config.remote, &publish_config.branch);
    let message = message.unwrap_or(&publish_config.message);

    Status::info(&format!(
        "Publishing to {}/{}",
        publish_config.remote, publish_config.branch
    ));

    announce_publish(&publisher, message);
}

fn announce_publish(publisher: &dyn Publisher, message: &str) {
    match publisher.publish(message) {
        Ok(report) => {
            for step in &report.steps {
                if step.success {
                    Status::success(step.name);
                } else {
                    Status::warning(&format!("{} exited non-zero", step.name));
                    if let Some(detail) = &step.detail {
                        Status::detail(detail);
                    }
                }
            }
            if report.completed() {
                Status::success("Pushed");
            } else {
                Status::warning("Publish incomplete; files remain written locally");
            }
        }
        Err(e) => {
            Status::warning(&format!("Publish skipped: {}", e));
        }
    }
}

fn preview(artifacts: &[Artifact]) {
    for artifact in artifacts {
        Status::info(&format!(
            "{} ({} bytes)",
            artifact.path.display(),
            artifact.content.len()
        ));
        if let Some(first) = artifact.content.lines().next() {
            Status::detail(first);
        }
    }
    Status::info("Dry run, nothing written");
}

#[derive(Serialize)]
struct DoctorReport {
    git_installed: bool,
    git_repository: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    repo_root: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    clean_tree: Option<bool>,
    config_path: Option<String>,
    layout_style: String,
}

fn run_doctor(root: &Path, config: &Config, json: bool) -> i32 {
    let git_installed = rescue_core::process::command_exists("git");
    let git_repository = git_installed && rescue_core::git::is_git_repo(root);

    let mut report = DoctorReport {
        git_installed,
        git_repository,
        repo_root: None,
        branch: None,
        clean_tree: None,
        config_path: config.path.as_ref().map(|p| p.display().to_string()),
        layout_style: config.schema.layout.style.to_string(),
    };

    if git_repository {
        report.repo_root =
            rescue_core::git::git_root(root).map(|p| p.display().to_string());
        if let Ok(repo) = rescue_core::git::GitRepo::open(root) {
            report.branch = repo.current_branch().ok();
            report.clean_tree = repo.has_uncommitted_changes().ok().map(|dirty| !dirty);
        }
    }

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                Status::error(&format!("Report error: {}", e));
                return exit_codes::FAILURE;
            }
        }
    } else {
        println!("Environment Check");
        println!();

        if report.git_installed {
            Status::success("git: installed");
        } else {
            Status::error("git: not found");
        }

        if report.git_repository {
            Status::success("git repository: detected");
            if let Some(repo_root) = &report.repo_root {
                Status::detail(repo_root);
            }
            if let Some(branch) = &report.branch {
                Status::info(&format!("branch: {}", branch));
            }
            match report.clean_tree {
                Some(true) => Status::info("working tree: clean"),
                Some(false) => Status::warning("working tree: has uncommitted changes"),
                None => {}
            }
        } else {
            Status::warning("git repository: not detected (publish will have nowhere to land)");
        }

        match &report.config_path {
            Some(path) => Status::success(&format!("config: {}", path)),
            None => Status::info("config: defaults (no file found)"),
        }

        Status::info(&format!("layout style: {}", report.layout_style));
    }

    if git_installed {
        exit_codes::SUCCESS
    } else {
        exit_codes::COMMAND_NOT_FOUND
    }
}
