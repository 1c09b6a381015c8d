use clap::Parser;
use encik::cli::Cli;
use encik::config::Config;
use encik::error::{EncikError, Result};
use encik::logging::LoggingConfig;
use encik::session::Session;
use encik::storage::FileStore;
use std::io;

fn main() {
    let cli = Cli::parse();

    let log_config = LoggingConfig::from_args(cli.quiet, cli.verbose, cli.json)
        .with_file_output(cli.log_file.clone());
    if let Err(e) = encik::logging::init_logging(log_config) {
        exit_with_error(&EncikError::from(e));
    }

    if let Err(e) = run(&cli) {
        tracing::error!(error = %e, "Session aborted");
        exit_with_error(&e);
    }
}

/// Print a JSON error response to stderr and exit with status 1
fn exit_with_error(e: &EncikError) -> ! {
    let error_response = e.to_error_response();
    match serde_json::to_string_pretty(&error_response) {
        Ok(json) => eprintln!("{}", json),
        Err(_) => eprintln!("{}", e),
    }
    std::process::exit(1);
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::from(cli);
    tracing::debug!(
        data_file = %config.data_file.display(),
        max_tasks = config.max_tasks,
        "Starting session"
    );

    let store = FileStore::new(&config.data_file);
    let stdout = io::stdout().lock();
    let mut session = Session::start(store, stdout, &config)?;
    session.run(io::stdin().lock())
}
