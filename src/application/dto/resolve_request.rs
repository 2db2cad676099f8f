use std::path::PathBuf;

/// Default number of registry lookups in flight at once
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// ResolveRequest - Internal request DTO for the dependency resolution use case
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    /// Path to the packages.config manifest
    pub manifest_path: PathBuf,
    /// NuGet.config to read sources from, if any
    pub source_config_path: Option<PathBuf>,
    /// Sources given explicitly; when non-empty they replace the config file
    pub source_overrides: Vec<String>,
    /// Upper bound on concurrent registry lookups (1 = sequential)
    pub max_concurrency: usize,
    /// Project name shown in the report; derived from the manifest location when absent
    pub project_name: Option<String>,
}

impl ResolveRequest {
    pub fn new(manifest_path: PathBuf) -> Self {
        Self {
            manifest_path,
            source_config_path: None,
            source_overrides: Vec::new(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            project_name: None,
        }
    }

    pub fn with_source_config(mut self, path: Option<PathBuf>) -> Self {
        self.source_config_path = path;
        self
    }

    pub fn with_source_overrides(mut self, sources: Vec<String>) -> Self {
        self.source_overrides = sources;
        self
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    pub fn with_project_name(mut self, project_name: Option<String>) -> Self {
        self.project_name = project_name;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_request_defaults() {
        let request = ResolveRequest::new(PathBuf::from("packages.config"));

        assert_eq!(request.manifest_path, PathBuf::from("packages.config"));
        assert!(request.source_config_path.is_none());
        assert!(request.source_overrides.is_empty());
        assert_eq!(request.max_concurrency, DEFAULT_MAX_CONCURRENCY);
        assert!(request.project_name.is_none());
    }

    #[test]
    fn test_resolve_request_builders() {
        let request = ResolveRequest::new(PathBuf::from("packages.config"))
            .with_source_config(Some(PathBuf::from("NuGet.config")))
            .with_source_overrides(vec!["https://feed.example".to_string()])
            .with_max_concurrency(0)
            .with_project_name(Some("Shop".to_string()));

        assert_eq!(request.source_config_path, Some(PathBuf::from("NuGet.config")));
        assert_eq!(request.source_overrides.len(), 1);
        assert_eq!(request.max_concurrency, 1);
        assert_eq!(request.project_name.as_deref(), Some("Shop"));
    }
}
