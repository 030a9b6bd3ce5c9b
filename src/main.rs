use maven_flow::adapters::outbound::build_tool::MavenDependencyResolver;
use maven_flow::adapters::outbound::console::StderrProgressReporter;
use maven_flow::adapters::outbound::filesystem::{CsvReportWriter, FileSystemMaterializer};
use maven_flow::adapters::outbound::network::{GitLabOptions, GitLabRepository};
use maven_flow::application::dto::{ScanRequest, ScanSummary};
use maven_flow::application::use_cases::ScanRepositoriesUseCase;
use maven_flow::cli::Args;
use maven_flow::config::{discover_config, load_config_from_path, ScanConfig};
use maven_flow::ports::outbound::ProgressReporter;
use maven_flow::shared::error::ExitCode;
use maven_flow::shared::Result;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
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

async fn run(args: Args) -> Result<ScanSummary> {
    // Defaults < config file < command line
    let file_config = match &args.config {
        Some(path) => load_config_from_path(path)?,
        None => discover_config(Path::new("."))?.unwrap_or_default(),
    };
    let config = ScanConfig::resolve(file_config.merged_with(args.overrides()))?;

    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };
    progress_reporter.report(&format!(
        "🚀 Scanning {} (poms under {}, report at {})",
        config.base_url,
        config.local_base_dir.display(),
        config.report_path.display()
    ));

    // Create adapters (Dependency Injection)
    let source_control = GitLabRepository::new(
        &config.base_url,
        &config.auth_token,
        GitLabOptions {
            per_page: config.per_page,
            timeout: config.request_timeout,
            ..GitLabOptions::default()
        },
    )?;
    let report_sink = CsvReportWriter::create(&config.report_path)?;
    let resolver = MavenDependencyResolver::new(&config.tool_binary_path);

    let mut use_case = ScanRepositoriesUseCase::new(
        source_control,
        FileSystemMaterializer::new(),
        resolver,
        report_sink,
        progress_reporter,
    );

    let request = ScanRequest::new(&config.local_base_dir)
        .with_selector(config.project_selector()?)
        .with_abort_on_fetch_error(config.abort_on_fetch_error);

    use_case.execute(request).await
}
