use crate::shared::Result;
use std::path::Path;

/// SourceConfigReader port for loading registry sources
///
/// This port abstracts reading the `packageSources` section of a
/// NuGet.config file.
pub trait SourceConfigReader {
    /// Returns the configured source URLs in file order
    ///
    /// # Errors
    /// Returns an error if the file is absent, unreadable or malformed.
    /// Callers recover from this by falling back to the default source.
    fn read_sources(&self, config_path: &Path) -> Result<Vec<String>>;
}
