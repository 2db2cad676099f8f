use super::{DependencySpec, PackageId, PackageRef, VersionToken};
use indexmap::IndexMap;

/// A package as recorded by the resolution engine
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPackage {
    id: PackageId,
    version: VersionToken,
    dependencies: Vec<DependencySpec>,
    lookup_failed: bool,
}

impl ResolvedPackage {
    pub fn new(package: PackageRef, dependencies: Vec<DependencySpec>) -> Self {
        let (id, version) = package.into_parts();
        Self {
            id,
            version,
            dependencies,
            lookup_failed: false,
        }
    }

    /// A package no source could answer for; recorded with no dependencies
    pub fn unresolved(package: PackageRef) -> Self {
        Self {
            lookup_failed: true,
            ..Self::new(package, Vec::new())
        }
    }

    pub fn id(&self) -> &PackageId {
        &self.id
    }

    pub fn version(&self) -> &VersionToken {
        &self.version
    }

    pub fn dependencies(&self) -> &[DependencySpec] {
        &self.dependencies
    }

    pub fn lookup_failed(&self) -> bool {
        self.lookup_failed
    }
}

/// Flat result of one resolution run, one entry per distinct package id.
///
/// Keyed by the case-folded id and iterated in insertion order, so reports
/// are reproducible.
#[derive(Debug, Clone, Default)]
pub struct ResolutionTable {
    entries: IndexMap<String, ResolvedPackage>,
}

impl ResolutionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `package` unless its id is already present.
    ///
    /// Returns `true` when the entry was inserted. The first version recorded
    /// for an id is kept; later ones are dropped without reconciliation.
    pub fn record(&mut self, package: ResolvedPackage) -> bool {
        let key = package.id().key();
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, package);
        true
    }

    pub fn contains(&self, id: &PackageId) -> bool {
        self.entries.contains_key(&id.key())
    }

    pub fn get(&self, id: &PackageId) -> Option<&ResolvedPackage> {
        self.entries.get(&id.key())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedPackage> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn failed_count(&self) -> usize {
        self.iter().filter(|p| p.lookup_failed()).count()
    }
}
