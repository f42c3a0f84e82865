//! Signature CLI commands.

use clap::{Parser, Subcommand};
use cla_core::DEFAULT_PAGE_SIZE;

/// Signature query commands.
#[derive(Debug, Parser)]
pub struct SignaturesCommand {
    #[command(subcommand)]
    pub action: SignaturesAction,
}

/// Available signature actions.
#[derive(Debug, Subcommand)]
pub enum SignaturesAction {
    /// List all signatures.
    List,
    /// Get signature by ID.
    Get {
        /// Signature ID.
        id: String,
    },
    /// List signatures referencing a user.
    ByUser {
        /// User ID.
        user_id: String,
    },
    /// List signatures of a company.
    ByCompany {
        /// Company ID.
        company_id: String,
    },
    /// List signatures of a project.
    ByProject {
        /// Project ID.
        project_id: String,
    },
    /// One page of a company's signatures for a project.
    CompanyProject {
        /// Company ID.
        #[arg(long)]
        company_id: String,
        /// Project ID.
        #[arg(long)]
        project_id: String,
        /// Page size.
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: u32,
        /// Cursor returned by the previous page.
        #[arg(long)]
        next_key: Option<String>,
    },
    /// List the CLA managers of a signature.
    Managers {
        /// Signature ID.
        id: String,
    },
    /// Delete signature by ID.
    Delete {
        /// Signature ID.
        id: String,
    },
}
