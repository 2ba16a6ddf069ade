use alumni_directory::utils::{logger, validation::Validate};
use alumni_directory::{render, roster_source, AlumniDirectory, CliConfig, DirectoryError, Settings};
use clap::Parser;
use std::io::Write;

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<(), DirectoryError> {
    config.validate()?;
    let settings = config.resolve()?;
    tracing::debug!("Effective settings: {:?}", settings);

    let source = roster_source(settings.roster_path.as_deref())?;
    let roster = source.load()?;
    tracing::info!("Roster '{}' ready with {} alumni", source.name(), roster.len());

    let directory = AlumniDirectory::with_criteria(roster, settings.criteria.clone());
    print_view(&directory, &settings)
}

fn print_view(directory: &AlumniDirectory, settings: &Settings) -> Result<(), DirectoryError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if settings.list_options {
        render::render_options(&mut out, directory.options(), settings.format)?;
    } else {
        let results = directory.filtered();
        render::render_records(&mut out, &results, settings.format)?;
        if directory.is_empty_result() {
            tracing::info!("No alumni matched {:?}", directory.criteria());
            render::render_empty_notice(&mut std::io::stderr().lock(), settings.format)?;
        }
    }

    out.flush()?;
    Ok(())
}
