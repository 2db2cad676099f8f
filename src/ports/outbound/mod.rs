/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod dependency_repository;
pub mod manifest_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod registration_fetcher;
pub mod report_formatter;
pub mod source_config_reader;
pub mod source_locator;

pub use dependency_repository::{DependencyRepository, SourceLookup};
pub use manifest_reader::ManifestReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use registration_fetcher::{Registration, RegistrationFetcher};
pub use report_formatter::ReportFormatter;
pub use source_config_reader::SourceConfigReader;
pub use source_locator::SourceLocator;
