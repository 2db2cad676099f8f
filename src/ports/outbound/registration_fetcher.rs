use crate::dependency_resolution::domain::{DependencySpec, PackageId, VersionToken};
use crate::shared::error::LookupError;
use crate::shared::Result;
use async_trait::async_trait;

/// Declared dependencies of one package version
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registration {
    pub dependencies: Vec<DependencySpec>,
    /// Entries left out because their id is unusable
    pub rejected: Vec<LookupError>,
}

impl Registration {
    pub fn new(dependencies: Vec<DependencySpec>) -> Self {
        Self {
            dependencies,
            rejected: Vec::new(),
        }
    }
}

/// RegistrationFetcher port for reading one package version's metadata
#[async_trait]
pub trait RegistrationFetcher: Send + Sync {
    /// Fetches the declared dependencies of `id` at `version` from the
    /// registration endpoint rooted at `registration_base`
    ///
    /// Dependency groups are flattened in document order. An entry with an
    /// unusable id is left out and reported in `rejected`; it does not fail
    /// the lookup.
    ///
    /// # Errors
    /// Returns an error if the request fails, the status is not a success,
    /// or the payload cannot be parsed.
    async fn fetch_registration(
        &self,
        registration_base: &str,
        id: &PackageId,
        version: &VersionToken,
    ) -> Result<Registration>;
}
