//! Endpoint descriptors and the operation routing table.

mod error;
mod operations;
mod render;
mod types;

pub use error::{EndpointError, Result};
pub use operations::Operation;
pub use render::render_path;
pub use types::{ApiVersion, Auth, Endpoint, HttpMethod, ResponseKind, Surface};
