//! CLI command definitions and argument parsing.
//!
//! This module defines all the CLI commands and their arguments using the clap crate.
//! Each command group lives in its own file; `build_cli` assembles them into
//! the full command tree.

use clap::{Arg, ArgAction, ArgMatches, Command};

pub mod auth;
pub mod forge;
pub mod get;
pub mod manifest;
pub mod params;
pub mod search;

pub use params::{
    COMMAND_AUTH, COMMAND_CONVERT, COMMAND_CREATE, COMMAND_ENTITIES, COMMAND_ENTITY,
    COMMAND_FORGE, COMMAND_GET, COMMAND_GROUPS, COMMAND_GROUP_ROLES, COMMAND_K8S_AGENTS,
    COMMAND_LIST, COMMAND_LOGIN, COMMAND_LOGOUT, COMMAND_MANIFEST, COMMAND_MOLD, COMMAND_OWNED,
    COMMAND_RUN,
    COMMAND_SCORECARD, COMMAND_SEARCH, COMMAND_STATUS, COMMAND_TEAM, COMMAND_TEAMS, COMMAND_USER,
    COMMAND_USERS, COMMAND_VALIDATE, COMMAND_VERSION, COMMAND_WHOAMI, PARAMETER_FILE, PARAMETER_ID,
    PARAMETER_INPUTS, PARAMETER_MOLD, PARAMETER_NO_INTERACTIVE, PARAMETER_OUT, PARAMETER_OUTPUT,
    PARAMETER_OWNER, PARAMETER_PROFILE, PARAMETER_QUERY, PARAMETER_SEARCH, PARAMETER_SERVER,
    PARAMETER_TO, PARAMETER_TOKEN, PARAMETER_TYPE, PARAMETER_VALIDATE, PARAMETER_VERBOSE,
    PARAMETER_WITH_SCORECARD,
};

/// Assemble the full command tree without parsing.
pub fn build_cli() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .bin_name("shoehorn")
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .propagate_version(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(PARAMETER_VERBOSE)
                .short('v')
                .long(PARAMETER_VERBOSE)
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Enable verbose output for debugging"),
        )
        .arg(params::profile_parameter())
        .arg(params::server_parameter())
        .arg(params::output_parameter())
        .arg(params::no_interactive_parameter())
        .subcommand(auth::auth_command())
        .subcommand(get::get_command())
        .subcommand(search::search_command())
        .subcommand(forge::forge_command())
        .subcommand(manifest::manifest_command())
        .subcommand(manifest::validate_command())
        .subcommand(manifest::convert_command())
        .subcommand(Command::new(COMMAND_VERSION).about("Print version information"))
}

/// Parse the process arguments against the full command tree.
pub fn create_cli_commands() -> ArgMatches {
    build_cli().get_matches()
}
