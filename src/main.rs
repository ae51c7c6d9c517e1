use tracing_subscriber::EnvFilter;

use shoehorn_cli::cli::execute_command;
use shoehorn_cli::commands::{create_cli_commands, PARAMETER_NO_INTERACTIVE, PARAMETER_VERBOSE};
use shoehorn_cli::ui;

/// Main entry point for the program
#[tokio::main]
async fn main() {
    let matches = create_cli_commands();

    // Initialize the logging subsystem. --verbose lowers the default level;
    // RUST_LOG still wins when set.
    let default_level = if matches.get_flag(PARAMETER_VERBOSE) {
        "shoehorn_cli=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with_writer(std::io::stderr)
        .init();

    let no_interactive = matches.get_flag(PARAMETER_NO_INTERACTIVE);
    if let Err(e) = execute_command(matches).await {
        let mode = ui::detect_mode(no_interactive);
        eprintln!("{}", ui::error_line(mode, &e.to_string()));
        std::process::exit(e.exit_code().into());
    }
}
