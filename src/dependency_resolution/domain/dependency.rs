use super::PackageId;
use crate::shared::Result;

/// Range recorded when the registry omits one for a dependency
pub const UNKNOWN_RANGE: &str = "unknown";

/// One declared dependency of a package: the target id plus the raw range
/// string exactly as the registry returned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
    id: PackageId,
    range: String,
}

impl DependencySpec {
    /// Creates a dependency, substituting [`UNKNOWN_RANGE`] for a missing range
    pub fn new(id: impl Into<String>, range: Option<String>) -> Result<Self> {
        Ok(Self {
            id: PackageId::new(id)?,
            range: range.unwrap_or_else(|| UNKNOWN_RANGE.to_string()),
        })
    }

    pub fn id(&self) -> &PackageId {
        &self.id
    }

    pub fn range(&self) -> &str {
        &self.range
    }
}
