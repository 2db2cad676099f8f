use crate::shared::Result;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default number of attempts for a retryable request
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Outcome of one attempt that did not produce a document
struct AttemptFailure {
    error: anyhow::Error,
    retryable: bool,
}

/// RegistryHttpClient is the JSON-over-HTTP transport shared by the
/// registry adapters.
///
/// Transport errors (including timeouts) and 5xx responses are retried with
/// a linear back-off; 4xx responses and undecodable bodies fail at once.
#[derive(Clone)]
pub struct RegistryHttpClient {
    client: reqwest::Client,
    max_retries: u32,
}

impl RegistryHttpClient {
    /// Creates a client with the default timeout and retry count
    pub fn new() -> Result<Self> {
        Self::with_settings(Duration::from_secs(DEFAULT_TIMEOUT_SECS), DEFAULT_MAX_RETRIES)
    }

    pub fn with_settings(timeout: Duration, max_retries: u32) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("nuget-deptree/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            max_retries: max_retries.max(1),
        })
    }

    /// GETs `url` and decodes the JSON body, retrying transient failures
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let mut attempt = 1;
        loop {
            match self.try_get_json(url).await {
                Ok(document) => return Ok(document),
                Err(failure) if failure.retryable && attempt < self.max_retries => {
                    // Retry after a short wait (async)
                    tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    attempt += 1;
                }
                Err(failure) => return Err(failure.error),
            }
        }
    }

    async fn try_get_json<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> std::result::Result<T, AttemptFailure> {
        let response = self.client.get(url).send().await.map_err(|e| AttemptFailure {
            error: anyhow::anyhow!("request to {} failed: {}", url, e),
            retryable: true,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AttemptFailure {
                error: anyhow::anyhow!("{} returned status code {}", url, status),
                retryable: status.is_server_error(),
            });
        }

        response.json::<T>().await.map_err(|e| AttemptFailure {
            error: anyhow::anyhow!("{} returned an unreadable document: {}", url, e),
            retryable: false,
        })
    }
}

/// Validates a package id or version before it is placed in a URL path
pub(super) fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
    // Security: Prevent URL injection attacks
    if component.contains('/') || component.contains('\\') {
        anyhow::bail!(
            "Security: {} contains path separators which are not allowed",
            component_type
        );
    }

    if component.contains("..") {
        anyhow::bail!(
            "Security: {} contains '..' which is not allowed",
            component_type
        );
    }

    if component.contains('#') || component.contains('?') || component.contains('@') {
        anyhow::bail!(
            "Security: {} contains URL-unsafe characters",
            component_type
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = RegistryHttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_zero_retries_still_makes_one_attempt() {
        let client = RegistryHttpClient::with_settings(Duration::from_secs(1), 0).unwrap();
        assert_eq!(client.max_retries, 1);
    }

    #[test]
    fn test_validate_url_component_accepts_package_tokens() {
        assert!(validate_url_component("newtonsoft.json", "Package id").is_ok());
        assert!(validate_url_component("1.0.0-beta.1+build", "Version").is_ok());
    }

    #[test]
    fn test_validate_url_component_rejects_unsafe_input() {
        for bad in ["a/b", "a\\b", "..", "a#b", "a?b", "a@b"] {
            assert!(
                validate_url_component(bad, "Package id").is_err(),
                "{} should be rejected",
                bad
            );
        }
    }

    #[tokio::test]
    async fn test_unreachable_host_fails_after_retries() {
        let client = RegistryHttpClient::with_settings(Duration::from_millis(500), 2).unwrap();
        let result: Result<serde_json::Value> = client.get_json("http://127.0.0.1:1/index.json").await;
        let message = result.unwrap_err().to_string();
        assert!(message.contains("127.0.0.1:1"));
    }
}
