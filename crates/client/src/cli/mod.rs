//! CLI command definitions.

pub mod call;
pub mod companies;
pub mod github;
pub mod projects;
pub mod repositories;
pub mod signatures;
pub mod users;

use clap::{Parser, Subcommand, ValueEnum};
use cla_core::ClientConfig;
use serde_json::Value;

use crate::transport::Credentials;

/// CLI client for the CLA API.
#[derive(Debug, Parser)]
#[command(name = "cla-client")]
#[command(about = "CLI client for the CLA API", long_about = None)]
pub struct Cli {
    /// Deployed API base URL.
    #[arg(long, env = "CLA_API_URL")]
    pub api_url: Option<String>,

    /// Target the local development services instead of the deployed API.
    ///
    /// The environment value accepts 1/0, yes/no, on/off and true/false.
    #[arg(
        long,
        env = "CLA_LOCAL_MODE",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub local: bool,

    /// Bearer token for secured endpoints.
    #[arg(long, env = "CLA_BEARER_TOKEN", hide_env_values = true)]
    pub bearer_token: Option<String>,

    /// Cookie header for session-authenticated endpoints.
    #[arg(long, env = "CLA_SESSION_COOKIE", hide_env_values = true)]
    pub session_cookie: Option<String>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Client configuration: environment first, then flags.
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::from_env();
        if let Some(api_url) = &self.api_url {
            config.set_api_url(api_url.clone());
        }
        config.with_local_mode(self.local)
    }

    /// Credentials given on the command line, if any.
    pub fn credentials(&self) -> Option<Credentials> {
        let credentials = Credentials {
            bearer_token: self.bearer_token.clone(),
            session_cookie: self.session_cookie.clone(),
        };
        (!credentials.is_empty()).then_some(credentials)
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Indented, human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// User management.
    Users(users::UsersCommand),
    /// Signature queries.
    Signatures(signatures::SignaturesCommand),
    /// Company management.
    Companies(companies::CompaniesCommand),
    /// Project management.
    Projects(projects::ProjectsCommand),
    /// Repository management.
    Repositories(repositories::RepositoriesCommand),
    /// GitHub organizations.
    Github(github::GithubCommand),
    /// Get a Gerrit instance by ID.
    Gerrit {
        /// Gerrit instance ID.
        id: String,
    },
    /// Show the backend release version.
    Version,
    /// List every operation with its route.
    Endpoints,
    /// Call any operation by name.
    Call(call::CallCommand),
}

/// Parse a JSON payload given on the command line.
pub fn parse_json(input: &str) -> Result<Value, String> {
    serde_json::from_str(input).map_err(|e| format!("invalid JSON: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json() {
        assert_eq!(
            parse_json(r#"{"company_name":"Acme"}"#).unwrap(),
            serde_json::json!({ "company_name": "Acme" })
        );
        assert!(parse_json("{not json").unwrap_err().starts_with("invalid JSON"));
    }

    #[test]
    fn test_cli_parses_global_flags() {
        let cli = Cli::try_parse_from([
            "cla-client",
            "--api-url",
            "https://api.example.org",
            "--local",
            "--format",
            "json",
            "version",
        ])
        .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("https://api.example.org"));
        assert!(cli.local);
        assert!(matches!(cli.format, OutputFormat::Json));
        assert!(matches!(cli.command, Commands::Version));
        assert!(cli.client_config().is_local_mode());
    }

    #[test]
    fn test_local_mode_from_env_values() {
        std::env::set_var("CLA_LOCAL_MODE", "1");
        let enabled = Cli::try_parse_from(["cla-client", "endpoints"]).unwrap();
        std::env::set_var("CLA_LOCAL_MODE", "no");
        let disabled = Cli::try_parse_from(["cla-client", "endpoints"]).unwrap();
        std::env::remove_var("CLA_LOCAL_MODE");

        assert!(enabled.local);
        assert!(enabled.client_config().is_local_mode());
        assert!(!disabled.local);
    }

    #[test]
    fn test_credentials_only_when_given() {
        let cli = Cli::try_parse_from(["cla-client", "endpoints"]).unwrap();
        if cli.bearer_token.is_none() && cli.session_cookie.is_none() {
            assert!(cli.credentials().is_none());
        }

        let cli =
            Cli::try_parse_from(["cla-client", "--bearer-token", "t0k", "endpoints"]).unwrap();
        let credentials = cli.credentials().unwrap();
        assert_eq!(credentials.bearer_token.as_deref(), Some("t0k"));
    }

    #[test]
    fn test_signature_page_flags() {
        let cli = Cli::try_parse_from([
            "cla-client",
            "signatures",
            "company-project",
            "--company-id",
            "C1",
            "--project-id",
            "P1",
            "--page-size",
            "20",
            "--next-key",
            "abc",
        ])
        .unwrap();
        let Commands::Signatures(cmd) = cli.command else {
            panic!("expected signatures command");
        };
        let signatures::SignaturesAction::CompanyProject {
            company_id,
            project_id,
            page_size,
            next_key,
        } = cmd.action
        else {
            panic!("expected company-project action");
        };
        assert_eq!(company_id, "C1");
        assert_eq!(project_id, "P1");
        assert_eq!(page_size, 20);
        assert_eq!(next_key.as_deref(), Some("abc"));
    }
}
