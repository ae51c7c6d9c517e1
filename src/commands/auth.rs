//! Authentication command definitions.
//!
//! This module defines CLI commands related to authentication and session management.

use crate::commands::params::{
    COMMAND_AUTH, COMMAND_LOGIN, COMMAND_LOGOUT, COMMAND_STATUS, PARAMETER_TOKEN,
};
use clap::{Arg, Command};

/// Create the authentication command with all its subcommands.
pub fn auth_command() -> Command {
    Command::new(COMMAND_AUTH)
        .about("Authentication operations")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_LOGIN)
                .about("Login via device authorization, or with a personal access token")
                .arg(
                    Arg::new(PARAMETER_TOKEN)
                        .long(PARAMETER_TOKEN)
                        .num_args(1)
                        .required(false)
                        .env("SHOEHORN_TOKEN")
                        .help("Personal access token; skips the device flow"),
                ),
        )
        .subcommand(Command::new(COMMAND_STATUS).about("Show the current session and profile"))
        .subcommand(Command::new(COMMAND_LOGOUT).about("Clear stored credentials"))
}
