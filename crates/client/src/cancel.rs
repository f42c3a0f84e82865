//! Cancellation support for in-flight operations.

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::error::{ClientError, Result};

/// Drive `future` until it completes or `token` is cancelled.
///
/// Cancellation drops the future, which abandons interest in the response.
/// The underlying connection is left to reqwest.
///
/// ```no_run
/// # async fn demo() -> cla_client::Result<()> {
/// use cla_client::{cancellable, ClaClient, ClientConfig};
/// use tokio_util::sync::CancellationToken;
///
/// let client = ClaClient::new(ClientConfig::new("https://api.example.org"));
/// let token = CancellationToken::new();
/// let version = cancellable(&token, client.get_release_version()).await?;
/// # Ok(())
/// # }
/// ```
pub async fn cancellable<F, T>(token: &CancellationToken, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(ClientError::Cancelled),
        result = future => result,
    }
}
