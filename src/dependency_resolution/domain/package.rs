use crate::shared::Result;

/// Maximum length for package ids (NuGet caps ids at 100 characters; leave headroom)
const MAX_PACKAGE_ID_LENGTH: usize = 255;

/// NewType wrapper for a package id.
///
/// The original spelling is kept for display, but two ids that differ only in
/// case are the same package: registry lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageId(String);

impl PackageId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into().trim().to_string();

        if id.is_empty() {
            anyhow::bail!("Package id cannot be empty");
        }

        // Security: Length limit to prevent DoS
        if id.len() > MAX_PACKAGE_ID_LENGTH {
            anyhow::bail!(
                "Package id is too long ({} bytes). Maximum allowed: {} bytes",
                id.len(),
                MAX_PACKAGE_ID_LENGTH
            );
        }

        if id.chars().any(|c| c.is_whitespace() || c.is_control()) {
            anyhow::bail!("Package id '{}' contains whitespace or control characters", id);
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-folded form used as graph key
    pub fn key(&self) -> String {
        self.0.to_lowercase()
    }

    pub fn same_package(&self, other: &PackageId) -> bool {
        self.key() == other.key()
    }
}

impl std::fmt::Display for PackageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque version token.
///
/// Never parsed or compared as semver. Two tokens are equal only when their
/// strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionToken(String);

impl VersionToken {
    /// Token used when a dependency declares no usable version
    pub const LATEST: &'static str = "latest";

    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into().trim().to_string();

        if token.is_empty() {
            anyhow::bail!("Package version cannot be empty");
        }

        if token.chars().any(char::is_control) {
            anyhow::bail!("Package version '{}' contains control characters", token);
        }

        Ok(Self(token))
    }

    pub fn latest() -> Self {
        Self(Self::LATEST.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VersionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A `(package id, version token)` pair: a root reference from the manifest
/// or a dependency waiting to be visited.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageRef {
    id: PackageId,
    version: VersionToken,
}

impl PackageRef {
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Result<Self> {
        Ok(Self {
            id: PackageId::new(id)?,
            version: VersionToken::new(version)?,
        })
    }

    pub fn from_parts(id: PackageId, version: VersionToken) -> Self {
        Self { id, version }
    }

    pub fn id(&self) -> &PackageId {
        &self.id
    }

    pub fn version(&self) -> &VersionToken {
        &self.version
    }

    pub fn into_parts(self) -> (PackageId, VersionToken) {
        (self.id, self.version)
    }
}

impl std::fmt::Display for PackageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.id, self.version)
    }
}
