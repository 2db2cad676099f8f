use super::http_client::validate_url_component;
use super::RegistryHttpClient;
use crate::dependency_resolution::domain::{DependencySpec, PackageId, VersionToken};
use crate::ports::outbound::{Registration, RegistrationFetcher};
use crate::shared::error::LookupError;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;

/// Registration leaf for one package version
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegistrationLeaf {
    #[serde(default)]
    dependency_groups: Option<Vec<DependencyGroup>>,
    #[serde(default)]
    catalog_entry: Option<CatalogEntryRef>,
}

/// `catalogEntry` is either embedded or a link to the catalog document
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogEntryRef {
    Url(String),
    Inline(CatalogEntry),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogEntry {
    #[serde(default)]
    dependency_groups: Option<Vec<DependencyGroup>>,
}

/// Dependencies declared for one target framework; registries send
/// `null` as well as omitting the list
#[derive(Debug, Deserialize)]
struct DependencyGroup {
    #[serde(default)]
    dependencies: Option<Vec<RegistryDependency>>,
}

#[derive(Debug, Deserialize)]
struct RegistryDependency {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    range: Option<String>,
}

/// NuGetRegistrationClient adapter for fetching registration leaves
///
/// This adapter implements the RegistrationFetcher port against the NuGet
/// V3 registration resource. Framework groups are flattened; which framework
/// a dependency belongs to is not kept.
pub struct NuGetRegistrationClient {
    http: RegistryHttpClient,
}

impl NuGetRegistrationClient {
    pub fn new(http: RegistryHttpClient) -> Self {
        Self { http }
    }

    fn leaf_url(registration_base: &str, id: &PackageId, version: &VersionToken) -> Result<String> {
        let lowered = id.key();
        // Security: Validate URL components before using them
        validate_url_component(&lowered, "Package id")?;
        validate_url_component(version.as_str(), "Version")?;

        Ok(format!(
            "{}/{}/{}.json",
            registration_base.trim_end_matches('/'),
            urlencoding::encode(&lowered),
            urlencoding::encode(version.as_str())
        ))
    }

    /// Locates the dependency groups of a leaf, following a catalog link if needed
    async fn dependency_groups(&self, leaf: RegistrationLeaf) -> Result<Vec<DependencyGroup>> {
        if let Some(groups) = leaf.dependency_groups {
            return Ok(groups);
        }

        match leaf.catalog_entry {
            Some(CatalogEntryRef::Inline(entry)) => Ok(entry.dependency_groups.unwrap_or_default()),
            Some(CatalogEntryRef::Url(url)) => {
                let entry: CatalogEntry = self
                    .http
                    .get_json(&url)
                    .await
                    .context("Failed to read catalog entry")?;
                Ok(entry.dependency_groups.unwrap_or_default())
            }
            None => Ok(Vec::new()),
        }
    }

    /// Flattens every group in order. Entries without an id are dropped
    /// silently; entries whose id is unusable are dropped and reported.
    fn flatten(id: &PackageId, version: &VersionToken, groups: Vec<DependencyGroup>) -> Registration {
        let mut registration = Registration::default();

        for dep in groups
            .into_iter()
            .flat_map(|group| group.dependencies.unwrap_or_default())
        {
            let Some(dep_id) = dep.id.filter(|dep_id| !dep_id.trim().is_empty()) else {
                continue;
            };
            match DependencySpec::new(dep_id.as_str(), dep.range) {
                Ok(spec) => registration.dependencies.push(spec),
                Err(e) => registration.rejected.push(LookupError::InvalidDependency {
                    package: format!("{} {}", id, version),
                    dependency: dep_id,
                    reason: e.to_string(),
                }),
            }
        }

        registration
    }
}

#[async_trait]
impl RegistrationFetcher for NuGetRegistrationClient {
    async fn fetch_registration(
        &self,
        registration_base: &str,
        id: &PackageId,
        version: &VersionToken,
    ) -> Result<Registration> {
        let url = Self::leaf_url(registration_base, id, version)?;
        let leaf: RegistrationLeaf = self.http.get_json(&url).await?;
        let groups = self.dependency_groups(leaf).await?;
        Ok(Self::flatten(id, version, groups))
    }
}
