/// Registry used when no source is configured
pub const DEFAULT_SOURCE: &str = "https://api.nuget.org/v3/index.json";

/// Ordered registry endpoints, tried first to last for every lookup.
///
/// Never empty: an empty input falls back to [`DEFAULT_SOURCE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceList {
    sources: Vec<String>,
    is_default: bool,
}

impl SourceList {
    pub fn new<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sources: Vec<String> = sources
            .into_iter()
            .map(|s| s.as_ref().trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if sources.is_empty() {
            return Self::default();
        }

        Self {
            sources,
            is_default: false,
        }
    }

    /// Whether the list is the built-in fallback
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Default for SourceList {
    fn default() -> Self {
        Self {
            sources: vec![DEFAULT_SOURCE.to_string()],
            is_default: true,
        }
    }
}
