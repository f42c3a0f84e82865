//! Project CLI commands.

use clap::{Parser, Subcommand};
use serde_json::Value;

use super::parse_json;

/// Project management commands.
#[derive(Debug, Parser)]
pub struct ProjectsCommand {
    #[command(subcommand)]
    pub action: ProjectsAction,
}

/// Available project actions.
#[derive(Debug, Subcommand)]
pub enum ProjectsAction {
    /// List all projects.
    List,
    /// List projects with corporate CLAs enabled.
    Ccla,
    /// Get project by ID.
    Get {
        /// Project ID.
        id: String,
    },
    /// List projects by external ID.
    ByExternalId {
        /// External project ID.
        external_id: String,
    },
    /// List repositories of a project.
    Repositories {
        /// Project ID.
        id: String,
    },
    /// List companies of a project.
    Companies {
        /// Project ID.
        id: String,
    },
    /// List Gerrit instances of a project (bearer token required).
    Gerrits {
        /// Project ID.
        id: String,
    },
    /// Get the current document of a project.
    Document {
        /// Project ID.
        id: String,
        /// Document type (individual or corporate).
        #[arg(long, default_value = "individual")]
        document_type: String,
    },
    /// Print the PDF URL of a document revision.
    PdfUrl {
        /// Project ID.
        id: String,
        /// Document type (individual or corporate).
        #[arg(long, default_value = "individual")]
        document_type: String,
        /// Major version.
        #[arg(long)]
        major: String,
        /// Minor version.
        #[arg(long)]
        minor: String,
    },
    /// Create a project from a JSON payload.
    Create {
        /// Project payload.
        #[arg(long, value_parser = parse_json)]
        data: Value,
    },
    /// Update a project from a JSON payload (must include project_id).
    Update {
        /// Project payload.
        #[arg(long, value_parser = parse_json)]
        data: Value,
    },
    /// Delete project by ID.
    Delete {
        /// Project ID.
        id: String,
    },
}
