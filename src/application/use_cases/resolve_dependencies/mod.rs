use crate::application::dto::{ResolveRequest, ResolveResponse};
use crate::dependency_resolution::domain::{
    PackageRef, ReportMetadata, ResolutionTable, SourceList, TopLevelSet, DEFAULT_SOURCE,
};
use crate::dependency_resolution::services::{ReportGenerator, ResolutionEngine, ResolutionEvent};
use crate::ports::outbound::{
    DependencyRepository, ManifestReader, ProgressReporter, SourceConfigReader,
};
use crate::shared::error::LookupError;
use crate::shared::Result;
use chrono::Utc;
use std::collections::HashSet;

/// Project name used when none can be derived from the manifest location
const FALLBACK_PROJECT_NAME: &str = "MyProject";

/// ResolveDependenciesUseCase - Core use case for dependency resolution
///
/// Reads the manifest, settles the source list, walks the dependency graph
/// and partitions the result into a report.
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `SCR` - SourceConfigReader implementation
/// * `REPO` - DependencyRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct ResolveDependenciesUseCase<MR, SCR, REPO, PR> {
    manifest_reader: MR,
    source_config_reader: SCR,
    repository: REPO,
    progress_reporter: PR,
}

impl<MR, SCR, REPO, PR> ResolveDependenciesUseCase<MR, SCR, REPO, PR>
where
    MR: ManifestReader,
    SCR: SourceConfigReader,
    REPO: DependencyRepository,
    PR: ProgressReporter,
{
    /// Creates a new ResolveDependenciesUseCase with injected dependencies
    pub fn new(
        manifest_reader: MR,
        source_config_reader: SCR,
        repository: REPO,
        progress_reporter: PR,
    ) -> Self {
        Self {
            manifest_reader,
            source_config_reader,
            repository,
            progress_reporter,
        }
    }

    /// Executes the resolution use case
    ///
    /// # Errors
    /// Only manifest problems are fatal. Source configuration problems and
    /// registry failures are reported as warnings and degrade the result.
    pub async fn execute(&self, request: ResolveRequest) -> Result<ResolveResponse> {
        // Step 1: Read the manifest (fatal on failure, before any network activity)
        let roots = self.read_and_report_manifest(&request)?;

        // Step 2: Settle the ordered source list
        let sources = self.resolve_sources(&request);

        // Step 3: Walk the dependency graph
        let table = self.resolve_graph(&roots, &sources, request.max_concurrency).await;

        // Step 4: Partition into the report
        let report = ReportGenerator::generate(&table, &TopLevelSet::from_roots(&roots));
        let metadata = Self::build_metadata(&request);

        Ok(ResolveResponse::new(report, metadata, table, sources))
    }

    fn read_and_report_manifest(&self, request: &ResolveRequest) -> Result<Vec<PackageRef>> {
        self.progress_reporter.report(&format!(
            "📖 Loading manifest from: {}",
            request.manifest_path.display()
        ));

        let roots = self.manifest_reader.read_manifest(&request.manifest_path)?;

        self.progress_reporter
            .report(&format!("✅ Detected {} package reference(s)", roots.len()));

        Ok(roots)
    }

    /// Picks the sources for this run: explicit overrides, then the
    /// configuration file, then the default source
    fn resolve_sources(&self, request: &ResolveRequest) -> SourceList {
        if !request.source_overrides.is_empty() {
            let sources = SourceList::new(&request.source_overrides);
            self.progress_reporter.report(&format!(
                "🌐 Using {} source(s) from the command line",
                sources.len()
            ));
            return sources;
        }

        let Some(config_path) = &request.source_config_path else {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: No NuGet.config found; using the default source {}",
                DEFAULT_SOURCE
            ));
            return SourceList::default();
        };

        match self.source_config_reader.read_sources(config_path) {
            Ok(configured) => {
                let sources = SourceList::new(&configured);
                if sources.is_default() {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: {} lists no package sources; using the default source {}",
                        config_path.display(),
                        DEFAULT_SOURCE
                    ));
                } else {
                    self.progress_reporter.report(&format!(
                        "🌐 Using {} source(s) from {}",
                        sources.len(),
                        config_path.display()
                    ));
                }
                sources
            }
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Could not read source configuration: {:#}. Using the default source {}",
                    e, DEFAULT_SOURCE
                ));
                SourceList::default()
            }
        }
    }

    async fn resolve_graph(
        &self,
        roots: &[PackageRef],
        sources: &SourceList,
        max_concurrency: usize,
    ) -> ResolutionTable {
        self.progress_reporter
            .report("🔍 Resolving transitive dependencies...");

        let mut warnings = Vec::new();
        let mut reported_sources = HashSet::new();

        let table = ResolutionEngine::new(&self.repository)
            .with_max_concurrency(max_concurrency)
            .resolve(roots, sources, |event| match event {
                ResolutionEvent::Visiting { package, visited } => {
                    self.progress_reporter
                        .report_progress(visited, 0, Some(&package.to_string()));
                }
                ResolutionEvent::SourceSkipped(error) => {
                    // Each unreachable source is reported once, whatever the reason
                    let source = match error {
                        LookupError::SourceUnreachable { source_url, .. } => source_url.clone(),
                        other => other.to_string(),
                    };
                    if reported_sources.insert(source) {
                        warnings.push(format!("⚠️  Warning: {}", error));
                    }
                }
                ResolutionEvent::DependencyRejected(error) => {
                    warnings.push(format!("⚠️  Warning: {}", error));
                }
                ResolutionEvent::LookupFailed(error) => {
                    warnings.push(format!("⚠️  Warning: {}", error));
                }
            })
            .await;

        self.progress_reporter.report_completion(&format!(
            "✅ Resolved {} package(s) from {} source(s)",
            table.len(),
            sources.len()
        ));

        for warning in &warnings {
            self.progress_reporter.report_error(warning);
        }

        let failed = table.failed_count();
        if failed > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  {} package(s) could not be looked up and are listed without dependencies",
                failed
            ));
        }

        table
    }

    fn build_metadata(request: &ResolveRequest) -> ReportMetadata {
        let project_name = request
            .project_name
            .clone()
            .or_else(|| {
                let manifest = request.manifest_path.canonicalize().ok()?;
                let directory = manifest.parent()?.file_name()?;
                Some(directory.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| FALLBACK_PROJECT_NAME.to_string());

        ReportMetadata::new(
            project_name,
            Utc::now().to_rfc3339(),
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        )
    }
}
