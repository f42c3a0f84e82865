//! cla-client CLI entry point.

use std::sync::Arc;

use cla_client::cli::call::CallCommand;
use cla_client::cli::companies::CompaniesAction;
use cla_client::cli::github::GithubAction;
use cla_client::cli::projects::ProjectsAction;
use cla_client::cli::repositories::RepositoriesAction;
use cla_client::cli::signatures::SignaturesAction;
use cla_client::cli::users::UsersAction;
use cla_client::cli::{Cli, Commands, OutputFormat};
use cla_client::output::{format_output, json, pretty};
use cla_client::{ClaClient, ClientError, HttpTransport, Operation, SignaturePage};
use clap::Parser;
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cla_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = build_client(&cli);

    let value = match run(&client, &cli).await {
        Ok(Some(value)) => value,
        Ok(None) => return Ok(()),
        Err(err) => {
            if let Some(message) = err.server_message() {
                eprintln!("Error: {}", message);
            }
            return Err(err.into());
        }
    };

    println!("{}", format_output(&value, cli.format));
    Ok(())
}

/// Build the client from flags and environment.
fn build_client(cli: &Cli) -> ClaClient {
    let config = cli.client_config();
    let local_mode = config.is_local_mode();
    let mut client = ClaClient::new(config.with_local_mode(false));
    client.set_local_mode(local_mode);
    if let Some(credentials) = cli.credentials() {
        client.set_transport(Arc::new(HttpTransport::with_credentials(credentials)));
    }
    client
}

/// Execute the selected command.
///
/// Returns `None` when the command printed its own output.
async fn run(client: &ClaClient, cli: &Cli) -> Result<Option<Value>, ClientError> {
    let value = match &cli.command {
        Commands::Users(cmd) => match &cmd.action {
            UsersAction::List => client.get_users().await?,
            UsersAction::Get { id } => client.get_user(id).await?,
            UsersAction::ByEmail { email } => client.get_user_by_email(email).await?,
            UsersAction::ByGithubId { github_id } => client.get_user_by_github_id(github_id).await?,
            UsersAction::ByUsername { username } => client.get_user_by_user_name(username).await?,
            UsersAction::ByCompany { company_id } => {
                client.get_users_by_company_id(company_id).await?
            }
            UsersAction::Signatures { id } => client.get_user_signatures(id).await?,
            UsersAction::Create { data } => client.post_user(data).await?,
            UsersAction::Update { data } => client.put_user(data).await?,
            UsersAction::Delete { id } => {
                let value = client.delete_user(id).await?;
                if !cli.quiet {
                    eprintln!("Deleted user {}", id);
                }
                value
            }
        },
        Commands::Signatures(cmd) => match &cmd.action {
            SignaturesAction::List => client.get_signatures().await?,
            SignaturesAction::Get { id } => client.get_signature(id).await?,
            SignaturesAction::ByUser { user_id } => client.get_signatures_user(user_id).await?,
            SignaturesAction::ByCompany { company_id } => {
                client.get_company_signatures(company_id).await?
            }
            SignaturesAction::ByProject { project_id } => {
                client.get_project_signatures(project_id).await?
            }
            SignaturesAction::CompanyProject {
                company_id,
                project_id,
                page_size,
                next_key,
            } => {
                let page = SignaturePage {
                    page_size: *page_size,
                    next_key: next_key.clone(),
                };
                client
                    .get_company_project_signatures(company_id, project_id, &page)
                    .await?
            }
            SignaturesAction::Managers { id } => client.get_cla_managers(id).await?,
            SignaturesAction::Delete { id } => client.delete_signature(id).await?,
        },
        Commands::Companies(cmd) => match &cmd.action {
            CompaniesAction::List => client.get_companies().await?,
            CompaniesAction::All => client.get_all_companies().await?,
            CompaniesAction::Get { id } => client.get_company(id).await?,
            CompaniesAction::Create { data } => client.post_company(data).await?,
            CompaniesAction::Update { data } => client.put_company(data).await?,
            CompaniesAction::Delete { id } => client.delete_company(id).await?,
        },
        Commands::Projects(cmd) => match &cmd.action {
            ProjectsAction::List => client.get_projects().await?,
            ProjectsAction::Ccla => client.get_projects_ccla().await?,
            ProjectsAction::Get { id } => client.get_project(id).await?,
            ProjectsAction::ByExternalId { external_id } => {
                client.get_projects_by_external_id(external_id).await?
            }
            ProjectsAction::Repositories { id } => client.get_project_repositories(id).await?,
            ProjectsAction::Companies { id } => client.get_project_companies(id).await?,
            ProjectsAction::Gerrits { id } => client.get_project_gerrits(id).await?,
            ProjectsAction::Document { id, document_type } => {
                client.get_project_document(id, document_type).await?
            }
            ProjectsAction::PdfUrl {
                id,
                document_type,
                major,
                minor,
            } => Value::String(client.project_document_revision_pdf_url(
                id,
                document_type,
                major,
                minor,
            )?),
            ProjectsAction::Create { data } => client.post_project(data).await?,
            ProjectsAction::Update { data } => client.put_project(data).await?,
            ProjectsAction::Delete { id } => client.delete_project(id).await?,
        },
        Commands::Repositories(cmd) => match &cmd.action {
            RepositoriesAction::List => client.get_repositories().await?,
            RepositoriesAction::Get { id } => client.get_repository(id).await?,
            RepositoriesAction::Create { data } => client.post_repository(data).await?,
            RepositoriesAction::Update { data } => client.put_repository(data).await?,
            RepositoriesAction::Delete { id } => client.delete_repository(id).await?,
        },
        Commands::Github(cmd) => match &cmd.action {
            GithubAction::Organizations => client.get_github_organizations().await?,
            GithubAction::Organization { name } => client.get_github_organization(name).await?,
            GithubAction::Repositories { name } => {
                client.get_github_organization_repositories(name).await?
            }
            GithubAction::CheckNamespace { namespace } => {
                client.get_github_check_namespace(namespace).await?
            }
            GithubAction::GetNamespace { namespace } => {
                client.get_github_get_namespace(namespace).await?
            }
            GithubAction::Add { data } => client.post_github_organization(data).await?,
            GithubAction::Remove { name } => client.delete_github_organization(name).await?,
        },
        Commands::Gerrit { id } => client.get_gerrit(id).await?,
        Commands::Version => {
            let version = client.release_version().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", json::format_json(&version)),
                OutputFormat::Pretty => println!("{}", pretty::format_release_version(&version)),
            }
            return Ok(None);
        }
        Commands::Endpoints => {
            match cli.format {
                OutputFormat::Json => {
                    let table: Vec<_> = Operation::ALL
                        .iter()
                        .map(|op| serde_json::json!({ "operation": op, "endpoint": op.endpoint() }))
                        .collect();
                    println!("{}", json::format_json(&table));
                }
                OutputFormat::Pretty => println!("{}", pretty::format_endpoints(Operation::ALL)),
            }
            return Ok(None);
        }
        Commands::Call(CallCommand {
            operation,
            params,
            data,
        }) => {
            let params: Vec<&str> = params.iter().map(String::as_str).collect();
            client.call(*operation, &params, data.as_ref()).await?
        }
    };

    Ok(Some(value))
}
