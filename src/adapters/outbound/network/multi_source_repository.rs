use crate::dependency_resolution::domain::{PackageId, SourceList, VersionToken};
use crate::ports::outbound::{DependencyRepository, RegistrationFetcher, SourceLocator, SourceLookup};
use crate::shared::error::LookupError;
use async_trait::async_trait;

/// MultiSourceRepository tries each configured source in order and returns
/// the first successful answer.
///
/// Sources that cannot be located are skipped and reported back in the
/// lookup; a package is only a failure when no source answered.
pub struct MultiSourceRepository<L, F> {
    locator: L,
    fetcher: F,
}

impl<L: SourceLocator, F: RegistrationFetcher> MultiSourceRepository<L, F> {
    pub fn new(locator: L, fetcher: F) -> Self {
        Self { locator, fetcher }
    }
}

#[async_trait]
impl<L: SourceLocator, F: RegistrationFetcher> DependencyRepository for MultiSourceRepository<L, F> {
    async fn fetch_dependencies(
        &self,
        id: &PackageId,
        version: &VersionToken,
        sources: &SourceList,
    ) -> Result<SourceLookup, LookupError> {
        let mut skipped = Vec::new();
        let mut causes = Vec::new();

        for source in sources.iter() {
            let registration_base = match self.locator.locate(source).await {
                Ok(base) => base,
                Err(error) => {
                    causes.push(error.to_string());
                    skipped.push(error);
                    continue;
                }
            };

            match self
                .fetcher
                .fetch_registration(&registration_base, id, version)
                .await
            {
                Ok(registration) => {
                    return Ok(SourceLookup {
                        dependencies: registration.dependencies,
                        skipped,
                        rejected: registration.rejected,
                    })
                }
                Err(e) => causes.push(format!("{}: {:#}", source, e)),
            }
        }

        Err(LookupError::PackageLookupFailed {
            id: id.to_string(),
            version: version.to_string(),
            causes,
        })
    }
}
