mod cli;

use cli::Args;
use nuget_deptree::adapters::outbound::console::StderrProgressReporter;
use nuget_deptree::adapters::outbound::filesystem::FileSystemReader;
use nuget_deptree::adapters::outbound::network::{
    CachingSourceLocator, MultiSourceRepository, NuGetRegistrationClient, RegistryHttpClient,
    ServiceIndexLocator,
};
use nuget_deptree::application::dto::ResolveRequest;
use nuget_deptree::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use nuget_deptree::application::use_cases::ResolveDependenciesUseCase;
use nuget_deptree::config::{self, ConfigFile, Settings};
use nuget_deptree::shared::error::ExitCode;
use nuget_deptree::shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

/// File names probed next to the manifest, in order
const SOURCE_CONFIG_FILENAMES: [&str; 2] = ["NuGet.config", "nuget.config"];

#[tokio::main]
async fn main() {
    let args = match Args::parse_args() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            process::exit(cli::exit_code_for(&e).as_i32());
        }
    };

    match run(args).await {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let manifest_dir = manifest_directory(&args.manifest);

    // Tool configuration: explicit path, or auto-discovered next to the manifest
    let tool_config = match &args.tool_config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(&manifest_dir)?,
    };
    let settings = merge_settings(&args, tool_config.as_ref())?;

    let source_config_path = args
        .config
        .clone()
        .or_else(|| discover_source_config(&manifest_dir));

    // Create adapters (Dependency Injection)
    let http = RegistryHttpClient::with_settings(
        Duration::from_secs(settings.timeout_secs),
        settings.max_retries,
    )?;
    let repository = MultiSourceRepository::new(
        CachingSourceLocator::new(ServiceIndexLocator::new(http.clone())),
        NuGetRegistrationClient::new(http),
    );
    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let use_case = ResolveDependenciesUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        repository,
        progress_reporter,
    );

    let request = ResolveRequest::new(args.manifest.clone())
        .with_source_config(source_config_path)
        .with_source_overrides(settings.sources.clone())
        .with_max_concurrency(settings.max_concurrency);

    let response = use_case.execute(request).await?;

    if !args.quiet {
        eprintln!("{}", FormatterFactory::progress_message(settings.format));
    }

    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&response.report, &response.metadata)?;

    let presenter_type = PresenterType::from_output(args.output.clone());
    let output_file = match &presenter_type {
        PresenterType::File(path) => Some(path.clone()),
        PresenterType::Stdout => None,
    };
    PresenterFactory::create(presenter_type).present(&formatted_output)?;

    if let (Some(path), false) = (output_file, args.quiet) {
        eprintln!("✅ Output complete: {}", path.display());
    }

    if settings.strict && response.has_unresolved_packages() {
        return Ok(ExitCode::UnresolvedPackages);
    }

    Ok(ExitCode::Success)
}

/// Directory holding the manifest, used for config discovery
fn manifest_directory(manifest: &Path) -> PathBuf {
    match manifest.parent() {
        Some(parent) if parent != Path::new("") => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Finds a NuGet.config next to the manifest
fn discover_source_config(dir: &Path) -> Option<PathBuf> {
    SOURCE_CONFIG_FILENAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Layers CLI flags over the config file over defaults
fn merge_settings(args: &Args, config: Option<&ConfigFile>) -> Result<Settings> {
    let mut settings = Settings::from_config(config)?;

    if let Some(format) = args.format {
        settings.format = format;
    }
    if !args.sources.is_empty() {
        settings.sources = args.sources.clone();
    }
    if let Some(concurrency) = args.concurrency {
        settings.max_concurrency = concurrency;
    }
    if let Some(timeout) = args.timeout {
        settings.timeout_secs = timeout;
    }
    if args.strict {
        settings.strict = true;
    }

    Ok(settings)
}
