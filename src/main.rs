//! tagscout - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tagscout::git::check_git_installed;
use tagscout::{InspectorConfig, RepoInspector, SystemGit};

/// Print release facts (tags, commit messages, remote) of a git checkout.
#[derive(Parser, Debug)]
#[command(name = "tagscout")]
#[command(about = "Print release facts (tags, commit messages, remote) of a git checkout")]
#[command(version)]
struct Cli {
    /// Repository directory (defaults to the current directory)
    #[arg(short = 'C', long, global = true)]
    dir: Option<PathBuf>,

    /// git executable to run (overrides TAGSCOUT_GIT)
    #[arg(long, global = true)]
    git: Option<PathBuf>,

    /// Cancel git after this many seconds (overrides TAGSCOUT_TIMEOUT)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Most recent tag reachable from HEAD
    LatestTag,

    /// Tag preceding the given tag or reference (e.g. `@`)
    PreviousTag {
        /// Tag or reference to start from
        reference: String,
    },

    /// Commit messages in FROM..TO, oldest first
    Commits { from: String, to: String },

    /// Owner and repository name of the origin remote
    RepoInfo,

    /// Tag, previous tag, commits and remote in one go
    Facts {
        /// Release tag (defaults to the latest tag)
        #[arg(long)]
        tag: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = InspectorConfig::from_env().with_overrides(cli.git.clone(), cli.timeout);
    debug!(?config, "Loaded configuration");

    let cancel = CancellationToken::new();
    if let Some(timeout) = config.timeout {
        let deadline = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            deadline.cancel();
        });
    }

    let git = config.executor();
    check_git_installed(&git, &cancel)
        .await
        .context("git is required")?;

    let inspector = RepoInspector::with_executor(cli.dir.clone().unwrap_or_default(), git);
    run(&cli, &inspector, &cancel).await
}

async fn run(
    cli: &Cli,
    inspector: &RepoInspector<SystemGit>,
    cancel: &CancellationToken,
) -> Result<()> {
    match &cli.command {
        Command::LatestTag => {
            let tag = inspector
                .latest_tag(cancel)
                .await
                .context("Failed to find the latest tag")?;
            emit(cli.json, &tag, || tag.clone())
        }
        Command::PreviousTag { reference } => {
            let tag = inspector
                .previous_tag(cancel, reference)
                .await
                .with_context(|| format!("Failed to find the tag before {}", reference))?;
            emit(cli.json, &tag, || tag.clone())
        }
        Command::Commits { from, to } => {
            let commits = inspector
                .commits(cancel, from, to)
                .await
                .with_context(|| format!("Failed to list commits in {}..{}", from, to))?;
            emit(cli.json, &commits, || commits.join("\n---\n"))
        }
        Command::RepoInfo => {
            let info = inspector
                .repo_info(cancel)
                .await
                .context("Failed to read the origin remote")?;
            emit(cli.json, &info, || format!("{}/{}", info.owner, info.name))
        }
        Command::Facts { tag } => {
            let facts = inspector
                .release_facts(cancel, tag.as_deref())
                .await
                .context("Failed to gather release facts")?;
            emit(cli.json, &facts, || {
                let mut out = format!(
                    "{}/{} {} -> {} ({} commits)",
                    facts.owner,
                    facts.name,
                    facts.previous_tag,
                    facts.tag,
                    facts.commits.len()
                );
                for message in &facts.commits {
                    let subject = message.lines().next().unwrap_or_default();
                    out.push_str("\n- ");
                    out.push_str(subject);
                }
                out
            })
        }
    }
}

/// Print `value` as JSON, or the plain rendering otherwise.
fn emit<T: Serialize>(json: bool, value: &T, plain: impl FnOnce() -> String) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
        println!("{}", text);
    } else {
        println!("{}", plain());
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .init();
}
