/// Mock implementations for testing
mod mock_dependency_repository;
mod mock_manifest_reader;
mod mock_progress_reporter;
mod mock_source_config_reader;

pub use mock_dependency_repository::MockDependencyRepository;
pub use mock_manifest_reader::MockManifestReader;
pub use mock_progress_reporter::{MockProgressReporter, Reported};
pub use mock_source_config_reader::MockSourceConfigReader;
