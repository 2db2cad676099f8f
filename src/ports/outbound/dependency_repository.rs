use crate::dependency_resolution::domain::{DependencySpec, PackageId, SourceList, VersionToken};
use crate::shared::error::LookupError;
use async_trait::async_trait;

/// Successful dependency lookup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceLookup {
    /// Flattened `(id, range)` pairs from the first source that answered
    pub dependencies: Vec<DependencySpec>,
    /// Sources skipped on the way because they could not be located
    pub skipped: Vec<LookupError>,
    /// Declared dependencies dropped because their id is unusable
    pub rejected: Vec<LookupError>,
}

impl SourceLookup {
    pub fn new(dependencies: Vec<DependencySpec>) -> Self {
        Self {
            dependencies,
            skipped: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

/// DependencyRepository port used by the resolution engine
///
/// Implementations must be `Send + Sync` so sibling lookups can run
/// concurrently.
#[async_trait]
pub trait DependencyRepository: Send + Sync {
    /// Looks up the declared dependencies of one package version, trying
    /// `sources` in order and returning the first success
    ///
    /// # Errors
    /// Returns `LookupError::PackageLookupFailed` when no source succeeds.
    /// This is a soft failure: the caller records the package without
    /// dependencies and carries on.
    async fn fetch_dependencies(
        &self,
        id: &PackageId,
        version: &VersionToken,
        sources: &SourceList,
    ) -> Result<SourceLookup, LookupError>;
}
