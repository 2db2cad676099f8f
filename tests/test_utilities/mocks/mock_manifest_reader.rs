use nuget_deptree::prelude::*;
use std::path::Path;

/// Mock ManifestReader returning fixed root references
pub struct MockManifestReader {
    pub packages: Vec<(String, String)>,
    pub should_fail: bool,
}

impl MockManifestReader {
    pub fn new(packages: &[(&str, &str)]) -> Self {
        Self {
            packages: packages
                .iter()
                .map(|(id, version)| (id.to_string(), version.to_string()))
                .collect(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            packages: Vec::new(),
            should_fail: true,
        }
    }
}

impl ManifestReader for MockManifestReader {
    fn read_manifest(&self, manifest_path: &Path) -> Result<Vec<PackageRef>> {
        if self.should_fail {
            return Err(DeptreeError::ManifestMalformed {
                path: manifest_path.to_path_buf(),
                details: "Mock manifest failure".to_string(),
            }
            .into());
        }

        self.packages
            .iter()
            .map(|(id, version)| PackageRef::new(id.as_str(), version.as_str()))
            .collect()
    }
}
