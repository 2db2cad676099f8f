//! nuget-deptree - transitive dependency resolver for NuGet projects
//!
//! This library reads a `packages.config` manifest, walks the dependency
//! graph of every listed package through the NuGet V3 registration API,
//! and reports which packages were requested directly and which were pulled
//! in transitively. It follows hexagonal architecture and Domain-Driven
//! Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_resolution`): graph traversal and report partitioning
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use nuget_deptree::prelude::*;
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let http = RegistryHttpClient::new()?;
//! let repository = MultiSourceRepository::new(
//!     CachingSourceLocator::new(ServiceIndexLocator::new(http.clone())),
//!     NuGetRegistrationClient::new(http),
//! );
//!
//! // Create use case
//! let use_case = ResolveDependenciesUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     repository,
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = ResolveRequest::new(PathBuf::from("packages.config"))
//!     .with_source_config(Some(PathBuf::from("NuGet.config")));
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let output = ConsoleFormatter::new().format(&response.report, &response.metadata)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_resolution;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{ConsoleFormatter, JsonFormatter};
    pub use crate::adapters::outbound::network::{
        CachingSourceLocator, MultiSourceRepository, NuGetRegistrationClient, RegistryHttpClient,
        ServiceIndexLocator,
    };
    pub use crate::application::dto::{OutputFormat, ResolveRequest, ResolveResponse};
    pub use crate::application::use_cases::ResolveDependenciesUseCase;
    pub use crate::dependency_resolution::domain::{
        DependencyReport, DependencySpec, PackageId, PackageRef, ReportMetadata, ResolutionTable,
        ResolvedPackage, SourceList, VersionToken,
    };
    pub use crate::dependency_resolution::services::{
        RangeNormalizer, ReportGenerator, ResolutionEngine, ResolutionEvent,
    };
    pub use crate::ports::outbound::{
        DependencyRepository, ManifestReader, OutputPresenter, ProgressReporter, Registration,
        RegistrationFetcher, ReportFormatter, SourceConfigReader, SourceLocator, SourceLookup,
    };
    pub use crate::shared::error::{DeptreeError, ExitCode, LookupError};
    pub use crate::shared::Result;
}
