//! Catalog read command definitions.
//!
//! The `get` command groups all read-only catalog resources, kubectl style:
//! plural subcommands list, singular subcommands fetch one by identifier.

use crate::commands::params::{
    id_parameter, COMMAND_ENTITIES, COMMAND_ENTITY, COMMAND_GET, COMMAND_GROUPS,
    COMMAND_GROUP_ROLES, COMMAND_K8S_AGENTS, COMMAND_OWNED, COMMAND_SCORECARD, COMMAND_TEAM,
    COMMAND_TEAMS, COMMAND_USER, COMMAND_USERS, COMMAND_WHOAMI, PARAMETER_OWNER, PARAMETER_SEARCH,
    PARAMETER_TYPE, PARAMETER_WITH_SCORECARD,
};
use clap::{Arg, ArgAction, Command};

/// Create the `get` command with all resource subcommands.
pub fn get_command() -> Command {
    Command::new(COMMAND_GET)
        .about("Read catalog resources")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_ENTITIES)
                .about("List catalog entities")
                .arg(
                    Arg::new(PARAMETER_TYPE)
                        .long(PARAMETER_TYPE)
                        .num_args(1)
                        .required(false)
                        .help("Filter by entity type, e.g. service or library"),
                )
                .arg(
                    Arg::new(PARAMETER_SEARCH)
                        .long(PARAMETER_SEARCH)
                        .num_args(1)
                        .required(false)
                        .help("Filter by free-text search"),
                )
                .arg(
                    Arg::new(PARAMETER_OWNER)
                        .long(PARAMETER_OWNER)
                        .num_args(1)
                        .required(false)
                        .help("Filter by owning team"),
                ),
        )
        .subcommand(
            Command::new(COMMAND_ENTITY)
                .about("Show one entity with resources and live status")
                .arg(id_parameter("Entity identifier or slug"))
                .arg(
                    Arg::new(PARAMETER_WITH_SCORECARD)
                        .long(PARAMETER_WITH_SCORECARD)
                        .action(ArgAction::SetTrue)
                        .help("Include the entity scorecard"),
                ),
        )
        .subcommand(Command::new(COMMAND_OWNED).about("List entities owned by your teams"))
        .subcommand(Command::new(COMMAND_TEAMS).about("List teams"))
        .subcommand(
            Command::new(COMMAND_TEAM)
                .about("Show one team with its members")
                .arg(id_parameter("Team identifier")),
        )
        .subcommand(Command::new(COMMAND_USERS).about("List users"))
        .subcommand(
            Command::new(COMMAND_USER)
                .about("Show one user")
                .arg(id_parameter("User identifier")),
        )
        .subcommand(Command::new(COMMAND_GROUPS).about("List permission groups"))
        .subcommand(
            Command::new(COMMAND_GROUP_ROLES)
                .about("List the roles granted by a group")
                .arg(id_parameter("Group name")),
        )
        .subcommand(Command::new(COMMAND_K8S_AGENTS).about("List Kubernetes agents"))
        .subcommand(
            Command::new(COMMAND_SCORECARD)
                .about("Show an entity scorecard")
                .arg(id_parameter("Entity identifier or slug")),
        )
        .subcommand(Command::new(COMMAND_WHOAMI).about("Show the authenticated user"))
}
