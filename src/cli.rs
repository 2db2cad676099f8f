use clap::builder::RangedU64ValueParser;
use clap::Parser;
use nuget_deptree::application::dto::OutputFormat;
use nuget_deptree::shared::error::ExitCode;
use std::path::PathBuf;

/// Resolve the transitive NuGet dependencies of a packages.config project
#[derive(Parser, Debug)]
#[command(name = "nuget-deptree")]
#[command(version)]
#[command(
    about = "Resolve the transitive NuGet dependencies of a packages.config project",
    long_about = None
)]
pub struct Args {
    /// Path to the packages.config manifest
    #[arg(short, long, default_value = "packages.config")]
    pub manifest: PathBuf,

    /// Path to a NuGet.config file (defaults to NuGet.config next to the manifest)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Package source URL; can be given multiple times and replaces configured sources
    #[arg(short, long = "source", value_name = "URL")]
    pub sources: Vec<String>,

    /// Output format: console or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Maximum number of registry lookups in flight (1 = sequential)
    #[arg(long, value_name = "N", value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub concurrency: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECONDS", value_parser = RangedU64ValueParser::<u64>::new().range(1..))]
    pub timeout: Option<u64>,

    /// Exit with code 1 when any package could not be looked up
    #[arg(long)]
    pub strict: bool,

    /// Suppress progress output (warnings are still shown)
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to a nuget-deptree.config.yml file (defaults to the one next to the manifest)
    #[arg(long, value_name = "FILE")]
    pub tool_config: Option<PathBuf>,
}

impl Args {
    /// Parses the process arguments, leaving the exit decision to the caller
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

/// Exit code for a failed parse: `--help` and `--version` also surface as
/// clap errors but are successful runs
pub fn exit_code_for(error: &clap::Error) -> ExitCode {
    if error.use_stderr() {
        ExitCode::InvalidArguments
    } else {
        ExitCode::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["nuget-deptree"]).unwrap();
        assert_eq!(args.manifest, PathBuf::from("packages.config"));
        assert!(args.config.is_none());
        assert!(args.sources.is_empty());
        assert!(args.format.is_none());
        assert!(args.concurrency.is_none());
        assert!(!args.strict);
        assert!(!args.quiet);
    }

    #[test]
    fn test_repeated_sources_keep_order() {
        let args = Args::try_parse_from([
            "nuget-deptree",
            "-s",
            "https://b.example",
            "--source",
            "https://a.example",
        ])
        .unwrap();
        assert_eq!(args.sources, vec!["https://b.example", "https://a.example"]);
    }

    #[test]
    fn test_format_parsing() {
        let args = Args::try_parse_from(["nuget-deptree", "--format", "JSON"]).unwrap();
        assert_eq!(args.format, Some(OutputFormat::Json));

        assert!(Args::try_parse_from(["nuget-deptree", "--format", "markdown"]).is_err());
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        assert!(Args::try_parse_from(["nuget-deptree", "--concurrency", "0"]).is_err());
        let args = Args::try_parse_from(["nuget-deptree", "--concurrency", "1"]).unwrap();
        assert_eq!(args.concurrency, Some(1));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(Args::try_parse_from(["nuget-deptree", "--timeout", "0"]).is_err());
    }

    #[test]
    fn test_exit_code_for_invalid_arguments() {
        let err = Args::try_parse_from(["nuget-deptree", "--no-such-flag"]).unwrap_err();
        assert_eq!(exit_code_for(&err), ExitCode::InvalidArguments);
    }

    #[test]
    fn test_exit_code_for_help_and_version() {
        let help = Args::try_parse_from(["nuget-deptree", "--help"]).unwrap_err();
        let version = Args::try_parse_from(["nuget-deptree", "--version"]).unwrap_err();
        assert_eq!(exit_code_for(&help), ExitCode::Success);
        assert_eq!(exit_code_for(&version), ExitCode::Success);
    }
}
