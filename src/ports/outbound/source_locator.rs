use crate::shared::error::LookupError;
use async_trait::async_trait;

/// SourceLocator port for discovering a source's metadata endpoint
///
/// A registry source is only a base URL; the endpoint that serves package
/// metadata is advertised in the source's service index.
#[async_trait]
pub trait SourceLocator: Send + Sync {
    /// Resolves the registration base URL for `source`, without trailing `/`
    ///
    /// # Errors
    /// Returns `LookupError::SourceUnreachable` on transport errors,
    /// non-success status codes, unparsable documents, or when the index
    /// advertises no registration resource.
    async fn locate(&self, source: &str) -> Result<String, LookupError>;
}
