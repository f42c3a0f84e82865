//! cla_core - Functional core of the CLA API client.
//!
//! Holds the static operation routing table, base-URL resolution for local
//! and deployed backends, path rendering and pagination queries. Everything
//! here is pure: no I/O, no async, no global state.

mod config;
mod endpoint;
mod pagination;

pub use config::{
    ClientConfig, LocalUrls, DEFAULT_V1_LOCAL_URL, DEFAULT_V2_LOCAL_URL, DEFAULT_V3_LOCAL_URL,
};
pub use endpoint::{
    render_path, ApiVersion, Auth, Endpoint, EndpointError, HttpMethod, Operation, ResponseKind,
    Result, Surface,
};
pub use pagination::{SignaturePage, DEFAULT_PAGE_SIZE};
