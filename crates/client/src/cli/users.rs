//! User CLI commands.

use clap::{Parser, Subcommand};
use serde_json::Value;

use super::parse_json;

/// User management commands.
#[derive(Debug, Parser)]
pub struct UsersCommand {
    #[command(subcommand)]
    pub action: UsersAction,
}

/// Available user actions.
#[derive(Debug, Subcommand)]
pub enum UsersAction {
    /// List all users.
    List,
    /// Get user by ID.
    Get {
        /// User ID.
        id: String,
    },
    /// Get user by email address.
    ByEmail {
        /// User email.
        email: String,
    },
    /// Get user by GitHub ID.
    ByGithubId {
        /// GitHub user ID.
        github_id: String,
    },
    /// Get user by username (session credentials required).
    ByUsername {
        /// Username.
        username: String,
    },
    /// List users of a company.
    ByCompany {
        /// Company ID.
        company_id: String,
    },
    /// List the signatures of a user.
    Signatures {
        /// User ID.
        id: String,
    },
    /// Create a user from a JSON payload.
    Create {
        /// User payload, e.g. '{"user_email":"jane@example.org"}'.
        #[arg(long, value_parser = parse_json)]
        data: Value,
    },
    /// Update a user from a JSON payload (must include user_id).
    Update {
        /// User payload.
        #[arg(long, value_parser = parse_json)]
        data: Value,
    },
    /// Delete user by ID.
    Delete {
        /// User ID.
        id: String,
    },
}
