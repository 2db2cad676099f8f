use nuget_deptree::prelude::*;
use std::path::Path;

/// Mock SourceConfigReader returning fixed sources, or failing like a malformed file
pub struct MockSourceConfigReader {
    pub sources: Vec<String>,
    pub should_fail: bool,
}

impl MockSourceConfigReader {
    pub fn new(sources: &[&str]) -> Self {
        Self {
            sources: sources.iter().map(|s| s.to_string()).collect(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            sources: Vec::new(),
            should_fail: true,
        }
    }
}

impl SourceConfigReader for MockSourceConfigReader {
    fn read_sources(&self, config_path: &Path) -> Result<Vec<String>> {
        if self.should_fail {
            anyhow::bail!("Failed to parse {}: unexpected end of document", config_path.display());
        }
        Ok(self.sources.clone())
    }
}
