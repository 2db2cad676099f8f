use crate::dependency_resolution::domain::PackageRef;
use crate::ports::outbound::{ManifestReader, SourceConfigReader};
use crate::shared::error::DeptreeError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use serde::Deserialize;
use std::path::Path;

/// `<packages>` root of a packages.config manifest
#[derive(Debug, Deserialize)]
struct PackagesDocument {
    #[serde(rename = "package", default)]
    packages: Vec<PackageElement>,
}

/// One `<package id=".." version=".." .../>` element; other attributes
/// (`targetFramework`, `developmentDependency`, ...) are ignored
#[derive(Debug, Deserialize)]
struct PackageElement {
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "@version")]
    version: String,
}

/// `<configuration>` root of a NuGet.config file
#[derive(Debug, Deserialize)]
struct NuGetConfiguration {
    #[serde(rename = "packageSources", default)]
    package_sources: Option<PackageSources>,
}

/// Children of `<packageSources>`, kept in document order so `<clear/>` and
/// `<remove/>` apply only to the entries above them
#[derive(Debug, Deserialize)]
struct PackageSources {
    #[serde(rename = "$value", default)]
    items: Vec<SourceItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum SourceItem {
    Add {
        #[serde(rename = "@key", default)]
        key: String,
        #[serde(rename = "@value", default)]
        value: String,
    },
    Remove {
        #[serde(rename = "@key", default)]
        key: String,
    },
    Clear,
}

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements both ManifestReader and SourceConfigReader ports,
/// providing file system access for packages.config and NuGet.config.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    fn parse_manifest(content: &str) -> Result<Vec<PackageRef>> {
        let document: PackagesDocument = quick_xml::de::from_str(content)?;

        document
            .packages
            .into_iter()
            .enumerate()
            .map(|(index, package)| {
                PackageRef::new(package.id, package.version).map_err(|e| {
                    anyhow::anyhow!("package entry #{} is invalid: {}", index + 1, e)
                })
            })
            .collect()
    }

    fn parse_sources(content: &str) -> Result<Vec<String>> {
        let configuration: NuGetConfiguration = quick_xml::de::from_str(content)?;
        let items = configuration
            .package_sources
            .map(|sources| sources.items)
            .unwrap_or_default();

        // (key, url) in declaration order; keys compare case-insensitively
        let mut sources: Vec<(String, String)> = Vec::new();
        for item in items {
            match item {
                SourceItem::Add { key, value } => {
                    let value = value.trim().to_string();
                    if value.is_empty() {
                        continue;
                    }
                    match sources
                        .iter_mut()
                        .find(|(existing, _)| !key.is_empty() && existing.eq_ignore_ascii_case(&key))
                    {
                        Some(entry) => entry.1 = value,
                        None => sources.push((key, value)),
                    }
                }
                SourceItem::Remove { key } => {
                    sources.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&key));
                }
                SourceItem::Clear => sources.clear(),
            }
        }

        Ok(sources.into_iter().map(|(_, value)| value).collect())
    }
}

impl ManifestReader for FileSystemReader {
    fn read_manifest(&self, manifest_path: &Path) -> Result<Vec<PackageRef>> {
        if !manifest_path.exists() {
            return Err(DeptreeError::ManifestNotFound {
                path: manifest_path.to_path_buf(),
                suggestion: format!(
                    "\"{}\" does not exist.\n   \
                     Run in a directory containing packages.config, or specify the manifest with the --manifest option.",
                    manifest_path.display()
                ),
            }
            .into());
        }

        // Security and read failures keep their own error kind
        let content = read_regular_file(manifest_path, "packages.config").map_err(|e| {
            if e.is::<DeptreeError>() {
                e
            } else {
                DeptreeError::InvalidManifestPath {
                    path: manifest_path.to_path_buf(),
                    reason: e.to_string(),
                }
                .into()
            }
        })?;

        Self::parse_manifest(&content).map_err(|e| {
            DeptreeError::ManifestMalformed {
                path: manifest_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl SourceConfigReader for FileSystemReader {
    fn read_sources(&self, config_path: &Path) -> Result<Vec<String>> {
        if !config_path.exists() {
            anyhow::bail!("{} not found", config_path.display());
        }

        let content = read_regular_file(config_path, "NuGet.config")?;

        Self::parse_sources(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse {}: {}", config_path.display(), e)
        })
    }
}
