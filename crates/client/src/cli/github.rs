//! GitHub CLI commands.

use clap::{Parser, Subcommand};
use serde_json::Value;

use super::parse_json;

/// GitHub organization commands.
#[derive(Debug, Parser)]
pub struct GithubCommand {
    #[command(subcommand)]
    pub action: GithubAction,
}

/// Available GitHub actions.
#[derive(Debug, Subcommand)]
pub enum GithubAction {
    /// List registered organizations.
    Organizations,
    /// Get a registered organization.
    Organization {
        /// Organization name.
        name: String,
    },
    /// List repositories of a registered organization.
    Repositories {
        /// Organization name.
        name: String,
    },
    /// Check whether a namespace exists on GitHub.
    CheckNamespace {
        /// GitHub namespace.
        namespace: String,
    },
    /// Look up a namespace on GitHub.
    GetNamespace {
        /// GitHub namespace.
        namespace: String,
    },
    /// Register an organization from a JSON payload.
    Add {
        /// Organization payload, e.g.
        /// '{"organization_project_id":"P1","organization_name":"acme"}'.
        #[arg(long, value_parser = parse_json)]
        data: Value,
    },
    /// Remove a registered organization.
    Remove {
        /// Organization name.
        name: String,
    },
}
