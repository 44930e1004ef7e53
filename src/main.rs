mod cli;

use clap::Parser;
use cli::Args;
use std::path::Path;
use std::process;
use std::sync::Arc;
use sysdeps::adapters::inbound::ManifestConsumer;
use sysdeps::adapters::outbound::console::StderrProgressReporter;
use sysdeps::adapters::outbound::filesystem::{
    DirectoryPomFinder, JarArtifactVerifier, PomFileReader, PomIndex,
};
use sysdeps::application::dto::{OutputFormat, ResolveResponse};
use sysdeps::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use sysdeps::application::read_models::ResolutionReportBuilder;
use sysdeps::application::services::{BulkClassifier, PomParser, ResolutionCache};
use sysdeps::application::use_cases::ResolveDependenciesUseCase;
use sysdeps::config::{discover_config, load_config_from_path, ResolverSettings};
use sysdeps::ports::outbound::{PomFinder, ProgressReporter};
use sysdeps::shared::error::ExitCode;
use sysdeps::shared::Result;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SYSDEPS_LOG";

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(args: &Args) -> Result<ExitCode> {
    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    };
    let settings = ResolverSettings::merge(args.overrides(), config)?;
    settings.validate_directories()?;
    tracing::debug!("Effective settings: {:?}", settings);

    let parser = Arc::new(PomParser::new(
        PomFileReader::new(),
        Arc::new(ResolutionCache::new()),
        settings.property_precedence,
    ));
    let reporter = StderrProgressReporter::new();

    let response = if args.list_boms {
        list_boms(&parser, &settings, &reporter)?
    } else if settings.use_index {
        reporter.report("📋 Indexing installed POM files...");
        let classifier = BulkClassifier::new(Arc::clone(&parser));
        let index = PomIndex::build(
            &classifier,
            &settings.poms_dirs,
            settings.scan_depth,
            Some(&reporter),
        )?;
        reporter.report(&format!("   - Indexed {} identities", index.len()));
        resolve(parser, index, &settings, reporter)?
    } else {
        let finder = DirectoryPomFinder::new(
            settings.poms_dirs.clone(),
            settings.scan_depth,
            Arc::clone(&parser),
        );
        resolve(parser, finder, &settings, reporter)?
    };

    write_report(&response, settings.format, args)?;

    if args.fail_on_missing && response.has_missing() {
        return Ok(ExitCode::UnresolvedDependencies);
    }
    Ok(ExitCode::Success)
}

fn resolve<F: PomFinder>(
    parser: Arc<PomParser<PomFileReader>>,
    finder: F,
    settings: &ResolverSettings,
    reporter: StderrProgressReporter,
) -> Result<ResolveResponse> {
    let verifier = JarArtifactVerifier::new(settings.jars_dir.clone(), settings.scan_depth);
    let use_case = ResolveDependenciesUseCase::new(parser, finder, verifier, reporter);

    let mut consumer =
        ManifestConsumer::new(settings.dependencies.clone(), settings.plugins.clone());
    let response = use_case.apply(&mut consumer)?;

    for instruction in consumer.instructions() {
        tracing::info!("{}", instruction);
    }
    Ok(response)
}

/// Classifies every installed POM and reports the BOMs with their entries.
fn list_boms(
    parser: &Arc<PomParser<PomFileReader>>,
    settings: &ResolverSettings,
    reporter: &StderrProgressReporter,
) -> Result<ResolveResponse> {
    reporter.report("📋 Classifying installed POM files...");
    let classification = BulkClassifier::new(Arc::clone(parser)).classify_roots(
        &settings.poms_dirs,
        settings.scan_depth,
        Some(reporter),
    )?;

    let mut response = ResolveResponse::default();
    for bom in &classification.boms {
        let entries = bom
            .pom_path
            .as_deref()
            .map(|path| {
                parser
                    .dependency_management(path)
                    .values()
                    .map(|entry| entry.describe())
                    .collect()
            })
            .unwrap_or_default();
        response.processed_boms.insert(bom.key());
        response.bom_entries.insert(bom.gav(), entries);
    }

    reporter.report_completion(&format!(
        "Found {} BOM(s) among {} POM files ({} unreadable)",
        classification.boms.len(),
        classification.total(),
        classification.failed.len()
    ));
    Ok(response)
}

fn write_report(response: &ResolveResponse, format: OutputFormat, args: &Args) -> Result<()> {
    eprintln!("{}", FormatterFactory::progress_message(format));

    let report = ResolutionReportBuilder::build(response);
    let formatted_output = FormatterFactory::create(format).format(&report)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));
    presenter.present(&formatted_output)?;

    if let Some(path) = &args.output {
        eprintln!("✅ Report written to {}", path.display());
    }
    Ok(())
}
