use crate::ports::outbound::SourceLocator;
use crate::shared::error::LookupError;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingSourceLocator wraps a SourceLocator and remembers each outcome.
///
/// Failures are cached too: a source that could not be located is not
/// asked again during the run, and is reported once.
pub struct CachingSourceLocator<L: SourceLocator> {
    inner: L,
    cache: Arc<DashMap<String, Result<String, LookupError>>>,
}

impl<L: SourceLocator> CachingSourceLocator<L> {
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<L: SourceLocator> SourceLocator for CachingSourceLocator<L> {
    async fn locate(&self, source: &str) -> Result<String, LookupError> {
        if let Some(cached) = self.cache.get(source) {
            return cached.clone();
        }

        let outcome = self.inner.locate(source).await;
        self.cache.insert(source.to_string(), outcome.clone());
        outcome
    }
}
