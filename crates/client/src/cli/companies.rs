//! Company CLI commands.

use clap::{Parser, Subcommand};
use serde_json::Value;

use super::parse_json;

/// Company management commands.
#[derive(Debug, Parser)]
pub struct CompaniesCommand {
    #[command(subcommand)]
    pub action: CompaniesAction,
}

/// Available company actions.
#[derive(Debug, Subcommand)]
pub enum CompaniesAction {
    /// List companies of the current user.
    List,
    /// List every company.
    All,
    /// Get company by ID.
    Get {
        /// Company ID.
        id: String,
    },
    /// Create a company from a JSON payload.
    Create {
        /// Company payload, e.g. '{"company_name":"Acme"}'.
        #[arg(long, value_parser = parse_json)]
        data: Value,
    },
    /// Update a company from a JSON payload (must include company_id).
    Update {
        /// Company payload.
        #[arg(long, value_parser = parse_json)]
        data: Value,
    },
    /// Delete company by ID.
    Delete {
        /// Company ID.
        id: String,
    },
}
