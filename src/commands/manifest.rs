//! Manifest command definitions.
//!
//! Validation and conversion are server-side operations; these commands
//! read a manifest from a file (or stdin when the argument is `-`) and
//! forward it.

use crate::commands::params::{
    COMMAND_CONVERT, COMMAND_MANIFEST, COMMAND_VALIDATE, FORMAT_BACKSTAGE, FORMAT_MOLD,
    FORMAT_SHOEHORN, PARAMETER_FILE, PARAMETER_OUT, PARAMETER_TO, PARAMETER_VALIDATE,
};
use clap::{Arg, ArgAction, Command};

fn file_parameter() -> Arg {
    Arg::new(PARAMETER_FILE)
        .num_args(1)
        .required(true)
        .help("Manifest file, or - for stdin")
}

/// Create the `validate` command. Mounted both at the top level and under
/// `manifest`.
pub fn validate_command() -> Command {
    Command::new(COMMAND_VALIDATE)
        .about("Validate a manifest against the server schema")
        .arg(file_parameter())
}

/// Create the `convert` command. Mounted both at the top level and under
/// `manifest`.
pub fn convert_command() -> Command {
    Command::new(COMMAND_CONVERT)
        .about("Convert a manifest to another format")
        .arg(file_parameter())
        .arg(
            Arg::new(PARAMETER_TO)
                .long(PARAMETER_TO)
                .num_args(1)
                .required(true)
                .value_parser([FORMAT_SHOEHORN, FORMAT_BACKSTAGE, FORMAT_MOLD])
                .help("Target manifest format"),
        )
        .arg(
            Arg::new(PARAMETER_OUT)
                .long(PARAMETER_OUT)
                .num_args(1)
                .required(false)
                .help("Write the converted manifest to this file instead of stdout"),
        )
        .arg(
            Arg::new(PARAMETER_VALIDATE)
                .long(PARAMETER_VALIDATE)
                .action(ArgAction::SetTrue)
                .help("Also validate the manifest before converting"),
        )
}

/// Create the `manifest` command with validate and convert subcommands.
pub fn manifest_command() -> Command {
    Command::new(COMMAND_MANIFEST)
        .about("Validate and convert entity manifests")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(validate_command())
        .subcommand(convert_command())
}
