use clap::Parser;
use csvtidy::utils::error::EXIT_CODE_ERROR;
use csvtidy::utils::{logger, validation::Validate};
use csvtidy::{open_input, CliConfig, Engine, Settings, TidyError};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!("❌ csvtidy failed: {} (Severity: {:?})", e, e.severity());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(EXIT_CODE_ERROR);
    }
}

fn run(config: &CliConfig) -> Result<(), TidyError> {
    let settings: Settings = config.resolve()?;
    settings.validate()?;

    let engine = Engine::new(&settings)?;
    let input = open_input(settings.input_path.as_deref())?;

    let stdout = std::io::stdout();
    let summary = engine.run(input, stdout.lock())?;

    if summary.records_skipped > 0 || summary.write_failures > 0 {
        tracing::warn!(
            "{} row(s) skipped, {} row(s) failed to write",
            summary.records_skipped,
            summary.write_failures
        );
    }

    Ok(())
}
