/// Domain layer for dependency resolution
///
/// Value objects and pure services. Nothing in here performs I/O directly;
/// registry access goes through the `DependencyRepository` port.
pub mod domain;
pub mod services;
