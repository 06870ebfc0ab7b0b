//! Command-line interface for gitfs.

pub mod args;
mod commands;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::backend::{BackendError, GitBackend, RepoBackend};
use crate::logging;
use crate::namespace::FsError;
use crate::viewfs::{Status, ViewFs};

pub use args::{GlobalArgs, OutputSink};

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur during CLI execution.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument or output processing error.
    #[error("{0}")]
    Args(#[from] args::ArgsError),

    /// Failed to open the repository.
    #[error("open repository failed: {0}")]
    Backend(#[from] BackendError),

    /// Failed to build the namespace.
    #[error("build namespace failed: {0}")]
    Namespace(#[from] FsError),

    /// A view operation failed.
    #[error("{0}")]
    View(#[from] Status),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

// =============================================================================
// CLI Definition
// =============================================================================

/// gitfs - browse a git repository's history as a read-only filesystem.
#[derive(Parser, Debug)]
#[command(name = "gitfs", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show attributes of a path in the namespace.
    Stat(commands::stat::StatArgs),

    /// List a directory in the namespace.
    Ls(commands::ls::LsArgs),

    /// Print a file's contents.
    Cat(commands::cat::CatArgs),

    /// Print the whole namespace as a tree.
    Tree(commands::tree::TreeArgs),
}

// =============================================================================
// CLI Execution
// =============================================================================

impl Cli {
    /// Parse command-line arguments and return the CLI instance.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Run the CLI command.
    pub async fn run(self) -> Result<()> {
        logging::init(self.global.debug);

        let backend: Arc<dyn RepoBackend> = Arc::new(GitBackend::open(&self.global.repo)?);
        let view = ViewFs::new(backend).await?;

        match self.command {
            Command::Stat(args) => args.run(&view, &self.global).await,
            Command::Ls(args) => args.run(&view, &self.global).await,
            Command::Cat(args) => args.run(&view, &self.global).await,
            Command::Tree(args) => args.run(&view, &self.global).await,
        }
    }
}

/// Main entry point for the CLI.
pub async fn main() -> Result<()> {
    let cli = Cli::parse_args();
    cli.run().await
}
