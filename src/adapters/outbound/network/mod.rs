/// Network adapters for the NuGet V3 protocol
mod caching_source_locator;
mod http_client;
mod multi_source_repository;
mod registration_client;
mod service_index_locator;

pub use caching_source_locator::CachingSourceLocator;
pub use http_client::{RegistryHttpClient, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};
pub use multi_source_repository::MultiSourceRepository;
pub use registration_client::NuGetRegistrationClient;
pub use service_index_locator::ServiceIndexLocator;
