use clap::{Parser, Subcommand};
use gitnum::commands::{execute_passthrough, execute_status};
use gitnum::core::{
    cache::CacheStore,
    error::{GitnumError, Result},
    git::{self, GitRepo},
    output::print_error,
};
use std::env;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gitnum")]
#[command(about = "Number your git status output and reuse the numbers as file aliases")]
#[command(version)]
struct Cli {
    /// Run as if git was started in this directory
    #[arg(short = 'C', value_name = "PATH")]
    directory: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<GitCommand>,
}

#[derive(Subcommand)]
enum GitCommand {
    /// Show git status with numbered file entries
    Status {
        /// Arguments forwarded verbatim to git status
        #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
        args: Vec<String>,
    },
    /// Any other git subcommand; numeric aliases and N-M ranges resolve to files
    #[command(external_subcommand)]
    Other(Vec<String>),
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            print_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let directory = cli.directory.as_deref();
    match cli.command {
        None => run_status(directory, &[]),
        Some(GitCommand::Status { args }) => run_status(directory, &args),
        Some(GitCommand::Other(tokens)) => run_other(directory, tokens),
    }
}

/// The write path. Requires a repository: without one there is nowhere to
/// keep the alias table.
fn run_status(directory: Option<&Path>, args: &[String]) -> Result<i32> {
    let repo = open_repo(directory).map_err(|_| GitnumError::NotInGitRepo)?;
    let store = CacheStore::new(repo.metadata_dir());
    execute_status(directory, args, &store)
}

/// The read path, or the write-path fallback when the leading token is not
/// a git subcommand (built-in or configured alias); git status then gets
/// the tokens and reports the problem itself.
fn run_other(directory: Option<&Path>, tokens: Vec<String>) -> Result<i32> {
    let mut tokens = tokens.into_iter();
    let subcommand = tokens.next().unwrap_or_default();
    let trailing: Vec<String> = tokens.collect();

    let recognized = git::is_subcommand(&subcommand)
        || git::alias_subcommands(directory).contains(&subcommand);
    if !recognized {
        log::debug!("'{subcommand}' is not a git subcommand; running the status path");
        let mut args = vec![subcommand];
        args.extend(trailing);
        return run_status(directory, &args);
    }

    // Outside a repository the store is absent and every token stays
    // literal; git prints its own diagnosis.
    let store = open_repo(directory)
        .ok()
        .map(|repo| CacheStore::new(repo.metadata_dir()));
    execute_passthrough(directory, &subcommand, trailing, store.as_ref())
}

fn open_repo(directory: Option<&Path>) -> Result<GitRepo> {
    match directory {
        Some(dir) => GitRepo::open(dir),
        None => GitRepo::open(env::current_dir()?),
    }
}
