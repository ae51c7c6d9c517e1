//! Forge command definitions: molds and runs.

use crate::commands::params::{
    id_parameter, COMMAND_CREATE, COMMAND_FORGE, COMMAND_GET, COMMAND_LIST, COMMAND_MOLD,
    COMMAND_RUN, PARAMETER_INPUTS, PARAMETER_MOLD,
};
use clap::{Arg, Command};

/// Create the `forge` command with mold and run subcommands.
pub fn forge_command() -> Command {
    Command::new(COMMAND_FORGE)
        .about("Scaffolding molds and runs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_MOLD)
                .about("Scaffolding templates")
                .subcommand_required(true)
                .subcommand(Command::new(COMMAND_LIST).about("List available molds"))
                .subcommand(
                    Command::new(COMMAND_GET)
                        .about("Show one mold with its inputs and steps")
                        .arg(id_parameter("Mold identifier or slug")),
                ),
        )
        .subcommand(
            Command::new(COMMAND_RUN)
                .about("Mold executions")
                .subcommand_required(true)
                .subcommand(
                    Command::new(COMMAND_LIST).about("List runs").arg(
                        Arg::new(PARAMETER_MOLD)
                            .long(PARAMETER_MOLD)
                            .num_args(1)
                            .required(false)
                            .help("Filter runs by mold slug"),
                    ),
                )
                .subcommand(
                    Command::new(COMMAND_GET)
                        .about("Show one run")
                        .arg(id_parameter("Run identifier")),
                )
                .subcommand(
                    Command::new(COMMAND_CREATE)
                        .about("Start a new run")
                        .arg(
                            Arg::new(PARAMETER_MOLD)
                                .long(PARAMETER_MOLD)
                                .num_args(1)
                                .required(true)
                                .help("Slug of the mold to execute"),
                        )
                        .arg(
                            Arg::new(PARAMETER_INPUTS)
                                .long(PARAMETER_INPUTS)
                                .num_args(1)
                                .required(false)
                                .help("Mold inputs as a JSON object"),
                        ),
                ),
        )
}
