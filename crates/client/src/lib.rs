//! cla_client - Client and CLI for the CLA backend API.

pub mod cancel;
pub mod cli;
pub mod client;
pub mod error;
pub mod output;
pub mod transport;

pub use cancel::cancellable;
pub use cla_core::{ClientConfig, LocalUrls, Operation, SignaturePage};
pub use client::ClaClient;
pub use error::{ClientError, Result};
pub use transport::{Credentials, HttpTransport, RawResponse, Transport};
