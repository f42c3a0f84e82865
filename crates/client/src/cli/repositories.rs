//! Repository CLI commands.

use clap::{Parser, Subcommand};
use serde_json::Value;

use super::parse_json;

/// Repository management commands.
#[derive(Debug, Parser)]
pub struct RepositoriesCommand {
    #[command(subcommand)]
    pub action: RepositoriesAction,
}

/// Available repository actions.
#[derive(Debug, Subcommand)]
pub enum RepositoriesAction {
    /// List all repositories.
    List,
    /// Get repository by ID.
    Get {
        /// Repository ID.
        id: String,
    },
    /// Register a repository from a JSON payload.
    Create {
        /// Repository payload.
        #[arg(long, value_parser = parse_json)]
        data: Value,
    },
    /// Update a repository from a JSON payload.
    Update {
        /// Repository payload.
        #[arg(long, value_parser = parse_json)]
        data: Value,
    },
    /// Delete repository by ID.
    Delete {
        /// Repository ID.
        id: String,
    },
}
