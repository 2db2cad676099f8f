use super::PackageRef;
use std::collections::HashSet;

/// `(lowercased id, version)` pair that guarantees traversal termination
pub type VisitKey = (String, String);

/// Set of traversal keys already claimed during one resolution run.
///
/// Grows monotonically; a key is claimed before its package is expanded.
#[derive(Debug, Default)]
pub struct VisitedSet {
    keys: HashSet<VisitKey>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_of(package: &PackageRef) -> VisitKey {
        (package.id().key(), package.version().as_str().to_string())
    }

    /// Claims the key for `package`. Returns `false` if it was already claimed.
    pub fn insert(&mut self, package: &PackageRef) -> bool {
        self.keys.insert(Self::key_of(package))
    }

    pub fn contains(&self, package: &PackageRef) -> bool {
        self.keys.contains(&Self::key_of(package))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
