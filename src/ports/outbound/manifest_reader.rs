use crate::dependency_resolution::domain::PackageRef;
use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for loading the root package references
///
/// This port abstracts reading and parsing the project manifest
/// (`packages.config`).
pub trait ManifestReader {
    /// Reads the manifest and returns its package references in declaration order
    ///
    /// # Errors
    /// Returns an error if:
    /// - The manifest does not exist or cannot be read
    /// - The document is not well-formed
    /// - A package entry lacks an `id` or `version`
    ///
    /// Any error here is fatal for the run.
    fn read_manifest(&self, manifest_path: &Path) -> Result<Vec<PackageRef>>;
}
