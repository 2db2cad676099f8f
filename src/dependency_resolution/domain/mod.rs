pub mod dependency;
pub mod package;
pub mod report;
pub mod resolution_table;
pub mod source_list;
pub mod visited_set;

pub use dependency::{DependencySpec, UNKNOWN_RANGE};
pub use package::{PackageId, PackageRef, VersionToken};
pub use report::{DependencyReport, ReportMetadata, TopLevelEntry, TopLevelSet, TransitiveEntry};
pub use resolution_table::{ResolutionTable, ResolvedPackage};
pub use source_list::{SourceList, DEFAULT_SOURCE};
pub use visited_set::{VisitKey, VisitedSet};
