//! Shared command parameters for all CLI commands.
//!
//! This module defines common parameters that are used across multiple command modules.
//! It provides a centralized place to define parameter names and common argument configurations.

use crate::format::OutputFormat;
use clap::{Arg, ArgAction};

// Top-level commands
pub const COMMAND_AUTH: &str = "auth";
pub const COMMAND_GET: &str = "get";
pub const COMMAND_SEARCH: &str = "search";
pub const COMMAND_FORGE: &str = "forge";
pub const COMMAND_MANIFEST: &str = "manifest";
pub const COMMAND_VERSION: &str = "version";

// Auth commands
pub const COMMAND_LOGIN: &str = "login";
pub const COMMAND_LOGOUT: &str = "logout";
pub const COMMAND_STATUS: &str = "status";

// Catalog resources under `get`
pub const COMMAND_ENTITIES: &str = "entities";
pub const COMMAND_ENTITY: &str = "entity";
pub const COMMAND_TEAMS: &str = "teams";
pub const COMMAND_TEAM: &str = "team";
pub const COMMAND_USERS: &str = "users";
pub const COMMAND_USER: &str = "user";
pub const COMMAND_GROUPS: &str = "groups";
pub const COMMAND_GROUP_ROLES: &str = "group-roles";
pub const COMMAND_K8S_AGENTS: &str = "k8s-agents";
pub const COMMAND_OWNED: &str = "owned";
pub const COMMAND_SCORECARD: &str = "scorecard";
pub const COMMAND_WHOAMI: &str = "whoami";

// Forge commands
pub const COMMAND_MOLD: &str = "mold";
pub const COMMAND_RUN: &str = "run";
pub const COMMAND_LIST: &str = "list";
pub const COMMAND_CREATE: &str = "create";

// Manifest commands
pub const COMMAND_VALIDATE: &str = "validate";
pub const COMMAND_CONVERT: &str = "convert";

// Parameter names
pub const PARAMETER_PROFILE: &str = "profile";
pub const PARAMETER_SERVER: &str = "server";
pub const PARAMETER_OUTPUT: &str = "output";
pub const PARAMETER_NO_INTERACTIVE: &str = "no-interactive";
pub const PARAMETER_VERBOSE: &str = "verbose";
pub const PARAMETER_TOKEN: &str = "token";
pub const PARAMETER_ID: &str = "id";
pub const PARAMETER_TYPE: &str = "type";
pub const PARAMETER_SEARCH: &str = "search";
pub const PARAMETER_OWNER: &str = "owner";
pub const PARAMETER_WITH_SCORECARD: &str = "scorecard";
pub const PARAMETER_QUERY: &str = "query";
pub const PARAMETER_MOLD: &str = "mold";
pub const PARAMETER_INPUTS: &str = "inputs";
pub const PARAMETER_FILE: &str = "file";
pub const PARAMETER_TO: &str = "to";
pub const PARAMETER_OUT: &str = "out";
pub const PARAMETER_VALIDATE: &str = "validate";

// Manifest target formats
pub const FORMAT_SHOEHORN: &str = "shoehorn";
pub const FORMAT_BACKSTAGE: &str = "backstage";
pub const FORMAT_MOLD: &str = "mold";

/// Create the global output format parameter.
pub fn output_parameter() -> Arg {
    Arg::new(PARAMETER_OUTPUT)
        .short('o')
        .long(PARAMETER_OUTPUT)
        .num_args(1)
        .required(false)
        .global(true)
        .help("Output format")
        .value_parser(OutputFormat::names())
}

/// Create the global profile selection parameter.
pub fn profile_parameter() -> Arg {
    Arg::new(PARAMETER_PROFILE)
        .long(PARAMETER_PROFILE)
        .num_args(1)
        .required(false)
        .env("SHOEHORN_PROFILE")
        .global(true)
        .help("Configuration profile to use")
}

/// Create the global server override parameter.
pub fn server_parameter() -> Arg {
    Arg::new(PARAMETER_SERVER)
        .long(PARAMETER_SERVER)
        .num_args(1)
        .required(false)
        .env("SHOEHORN_SERVER")
        .global(true)
        .help("Server base URL, overriding the active profile")
}

/// Create the global flag that disables spinners and colors.
pub fn no_interactive_parameter() -> Arg {
    Arg::new(PARAMETER_NO_INTERACTIVE)
        .long(PARAMETER_NO_INTERACTIVE)
        .action(ArgAction::SetTrue)
        .global(true)
        .help("Disable spinners and colored output")
}

/// Positional identifier shared by all `get <resource> <id>` commands.
pub fn id_parameter(help: &'static str) -> Arg {
    Arg::new(PARAMETER_ID).num_args(1).required(true).help(help)
}
