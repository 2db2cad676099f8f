mod range_normalizer;
mod report_generator;
mod resolution_engine;

pub use range_normalizer::RangeNormalizer;
pub use report_generator::ReportGenerator;
pub use resolution_engine::{ResolutionEngine, ResolutionEvent};
