use async_trait::async_trait;
use nuget_deptree::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type Key = (String, String);

/// Mock DependencyRepository backed by an in-memory graph.
///
/// Packages are keyed by `(lowercased id, version)`; anything not registered
/// fails like a package no source knows. Every call is counted per key;
/// clones share the counters.
#[derive(Default, Clone)]
pub struct MockDependencyRepository {
    pub packages: HashMap<Key, Vec<(String, Option<String>)>>,
    pub unreachable_sources: Vec<String>,
    calls: Arc<Mutex<HashMap<Key, usize>>>,
}

impl MockDependencyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a package version and its declared `(id, range)` dependencies
    pub fn with_package(mut self, id: &str, version: &str, dependencies: &[(&str, &str)]) -> Self {
        self.packages.insert(
            (id.to_lowercase(), version.to_string()),
            dependencies
                .iter()
                .map(|(dep, range)| (dep.to_string(), Some(range.to_string())))
                .collect(),
        );
        self
    }

    /// Registers a dependency without a declared range
    pub fn with_unranged_dependency(mut self, id: &str, version: &str, dependency: &str) -> Self {
        self.packages
            .entry((id.to_lowercase(), version.to_string()))
            .or_default()
            .push((dependency.to_string(), None));
        self
    }

    /// Reports `source` as skipped on every lookup
    pub fn with_unreachable_source(mut self, source: &str) -> Self {
        self.unreachable_sources.push(source.to_string());
        self
    }

    pub fn call_count(&self, id: &str, version: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .get(&(id.to_lowercase(), version.to_string()))
            .copied()
            .unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    /// Largest number of lookups made for any single key
    pub fn max_calls_per_key(&self) -> usize {
        self.calls.lock().unwrap().values().copied().max().unwrap_or(0)
    }
}

#[async_trait]
impl DependencyRepository for MockDependencyRepository {
    async fn fetch_dependencies(
        &self,
        id: &PackageId,
        version: &VersionToken,
        _sources: &SourceList,
    ) -> std::result::Result<SourceLookup, LookupError> {
        let key = (id.key(), version.as_str().to_string());
        *self.calls.lock().unwrap().entry(key.clone()).or_insert(0) += 1;

        let skipped: Vec<LookupError> = self
            .unreachable_sources
            .iter()
            .map(|source| LookupError::SourceUnreachable {
                source_url: source.clone(),
                reason: "connection refused".to_string(),
            })
            .collect();

        match self.packages.get(&key) {
            Some(dependencies) => Ok(SourceLookup {
                dependencies: dependencies
                    .iter()
                    .map(|(dep, range)| DependencySpec::new(dep.as_str(), range.clone()))
                    .collect::<Result<Vec<_>>>()
                    .map_err(|e| LookupError::PackageLookupFailed {
                        id: id.to_string(),
                        version: version.to_string(),
                        causes: vec![e.to_string()],
                    })?,
                skipped,
                rejected: Vec::new(),
            }),
            None => Err(LookupError::PackageLookupFailed {
                id: id.to_string(),
                version: version.to_string(),
                causes: skipped
                    .iter()
                    .map(|e| e.to_string())
                    .chain(std::iter::once("status code 404 Not Found".to_string()))
                    .collect(),
            }),
        }
    }
}
