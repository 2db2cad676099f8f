use super::RegistryHttpClient;
use crate::ports::outbound::SourceLocator;
use crate::shared::error::LookupError;
use async_trait::async_trait;
use serde::Deserialize;

/// Resource type prefix advertising the registration endpoint. Versioned
/// variants (`RegistrationsBaseUrl/3.6.0`, ...) share it.
const REGISTRATIONS_RESOURCE_TYPE: &str = "RegistrationsBaseUrl";

/// Path of the service index relative to a source base URL
const SERVICE_INDEX_PATH: &str = "/v3/index.json";

#[derive(Debug, Deserialize)]
struct ServiceIndex {
    #[serde(default)]
    resources: Vec<ServiceResource>,
}

#[derive(Debug, Deserialize)]
struct ServiceResource {
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "@type", default)]
    resource_type: String,
}

/// ServiceIndexLocator adapter for discovering registration endpoints
///
/// Reads the source's service index and picks the first resource whose type
/// starts with `RegistrationsBaseUrl`.
pub struct ServiceIndexLocator {
    http: RegistryHttpClient,
}

impl ServiceIndexLocator {
    pub fn new(http: RegistryHttpClient) -> Self {
        Self { http }
    }

    /// Returns the service index URL for a source.
    ///
    /// NuGet.config usually lists the index itself; bare base URLs get the
    /// well-known index path appended.
    fn index_url(source: &str) -> String {
        let source = source.trim_end_matches('/');
        if source.ends_with("index.json") {
            source.to_string()
        } else {
            format!("{}{}", source, SERVICE_INDEX_PATH)
        }
    }

    fn registration_base(index: &ServiceIndex) -> Option<String> {
        index
            .resources
            .iter()
            .find(|resource| resource.resource_type.starts_with(REGISTRATIONS_RESOURCE_TYPE))
            .map(|resource| resource.id.trim_end_matches('/').to_string())
            .filter(|base| !base.is_empty())
    }
}

#[async_trait]
impl SourceLocator for ServiceIndexLocator {
    async fn locate(&self, source: &str) -> Result<String, LookupError> {
        let unreachable = |reason: String| LookupError::SourceUnreachable {
            source_url: source.to_string(),
            reason,
        };

        let index: ServiceIndex = self
            .http
            .get_json(&Self::index_url(source))
            .await
            .map_err(|e| unreachable(e.to_string()))?;

        Self::registration_base(&index)
            .ok_or_else(|| unreachable("service index has no RegistrationsBaseUrl resource".to_string()))
    }
}
