//! Generic operation call.

use clap::Parser;
use cla_core::Operation;
use serde_json::Value;

use super::parse_json;

/// Call any operation from the routing table.
#[derive(Debug, Parser)]
pub struct CallCommand {
    /// Operation name as listed by `endpoints` (e.g. get_user_signature_intent).
    #[arg(value_parser = parse_operation)]
    pub operation: Operation,

    /// Path parameters, in route order.
    pub params: Vec<String>,

    /// JSON body for POST/PUT operations.
    #[arg(long, value_parser = parse_json)]
    pub data: Option<Value>,
}

/// Look up an operation by its snake_case name.
pub fn parse_operation(name: &str) -> Result<Operation, String> {
    Operation::ALL
        .iter()
        .copied()
        .find(|op| op.name() == name)
        .ok_or_else(|| format!("unknown operation '{name}', see `cla-client endpoints`"))
}
