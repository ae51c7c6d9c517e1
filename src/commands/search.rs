//! Search command definition.

use crate::commands::params::{COMMAND_SEARCH, PARAMETER_QUERY};
use clap::{Arg, Command};

pub fn search_command() -> Command {
    Command::new(COMMAND_SEARCH)
        .about("Full-text search across the catalog")
        .arg(
            Arg::new(PARAMETER_QUERY)
                .num_args(1)
                .required(true)
                .help("Search query"),
        )
}
