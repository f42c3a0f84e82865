//! Print the client's routing table.
//!
//! Useful when auditing the client against the backend's route
//! registrations: every operation is listed with its method, API version,
//! auth requirement and path template.

use std::collections::HashSet;

use anyhow::{bail, Result};
use cla_core::{ApiVersion, Auth, Operation, ResponseKind};

use crate::prelude::*;

/// Print or verify the routing table
#[derive(Debug, clap::Parser)]
pub struct EndpointsCommand {
    /// Only list operations for this API version (v1, v2 or v3)
    #[arg(long, value_parser = parse_version)]
    pub version: Option<ApiVersion>,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Verify table invariants and exit non-zero on violations
    #[arg(long)]
    pub check: bool,
}

fn parse_version(s: &str) -> std::result::Result<ApiVersion, String> {
    ApiVersion::ALL
        .iter()
        .copied()
        .find(|v| v.to_string() == s.to_ascii_lowercase())
        .ok_or_else(|| format!("unknown API version '{}', expected v1, v2 or v3", s))
}

pub fn run(command: EndpointsCommand, global: crate::Global) -> Result<()> {
    if command.check {
        return check(&global);
    }

    let operations: Vec<Operation> = Operation::ALL
        .iter()
        .copied()
        .filter(|op| command.version.is_none_or(|v| op.endpoint().version == v))
        .collect();

    if command.json {
        let table: Vec<_> = operations
            .iter()
            .map(|op| serde_json::json!({ "operation": op, "endpoint": op.endpoint() }))
            .collect();
        aprintln!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    for op in &operations {
        let endpoint = op.endpoint();
        let version = match endpoint.version {
            ApiVersion::V1 => p_c("v1"),
            ApiVersion::V2 => p_y("v2"),
            ApiVersion::V3 => p_m("v3"),
        };
        let auth = match endpoint.auth {
            Auth::None => String::new(),
            other => p_r(&format!(" [{}]", other)),
        };
        let raw = match endpoint.response {
            ResponseKind::Json => String::new(),
            ResponseKind::Raw => p_y(" (raw)"),
        };
        aprintln!(
            "{:<7} {} {:<48} {}{}{}",
            endpoint.method.to_string(),
            version,
            op.name(),
            endpoint.path,
            auth,
            raw
        );
    }

    if !global.is_silent() {
        aprintln!();
        aprintln!("{}", p_b(&format!("{} operations", operations.len())));
    }
    Ok(())
}

/// Every operation needs a unique name, a path under its version prefix,
/// balanced placeholders and a transport surface.
fn check(global: &crate::Global) -> Result<()> {
    let mut problems = Vec::new();
    let mut names = HashSet::new();

    for op in Operation::ALL {
        let endpoint = op.endpoint();
        if !names.insert(op.name()) {
            problems.push(format!("{}: duplicate operation name", op.name()));
        }
        if !endpoint.path.starts_with(endpoint.version.prefix()) {
            problems.push(format!(
                "{}: path {} is not under {}",
                op.name(),
                endpoint.path,
                endpoint.version.prefix()
            ));
        }
        if endpoint.path.matches('{').count() != endpoint.path.matches('}').count() {
            problems.push(format!("{}: unbalanced placeholders", op.name()));
        }
        if endpoint.surface().is_none() {
            problems.push(format!(
                "{}: no transport for {} with {} auth",
                op.name(),
                endpoint.method,
                endpoint.auth
            ));
        }
    }

    if problems.is_empty() {
        if !global.is_silent() {
            aprintln!(
                "{} {}",
                p_g("✅"),
                p_g(&format!("{} operations OK", Operation::ALL.len()))
            );
        }
        return Ok(());
    }

    for problem in &problems {
        aprintln!("{} {}", p_r("❌"), problem);
    }
    bail!("{} routing table problem(s)", problems.len())
}
