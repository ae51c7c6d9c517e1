//! Command dispatch: route parsed arguments to their handlers.

use clap::ArgMatches;

use crate::actions::{self, ActionContext};
use crate::commands::{
    COMMAND_AUTH, COMMAND_CONVERT, COMMAND_CREATE, COMMAND_ENTITIES, COMMAND_ENTITY,
    COMMAND_FORGE, COMMAND_GET, COMMAND_GROUPS, COMMAND_GROUP_ROLES, COMMAND_K8S_AGENTS,
    COMMAND_LIST, COMMAND_LOGIN, COMMAND_LOGOUT, COMMAND_MANIFEST, COMMAND_MOLD, COMMAND_OWNED,
    COMMAND_RUN, COMMAND_SCORECARD, COMMAND_SEARCH, COMMAND_STATUS, COMMAND_TEAM, COMMAND_TEAMS,
    COMMAND_USER, COMMAND_USERS, COMMAND_VALIDATE, COMMAND_VERSION, COMMAND_WHOAMI,
};
use crate::error::CliError;

fn extract_subcommand_name(sub_matches: &ArgMatches) -> String {
    match sub_matches.subcommand() {
        Some((name, _)) => name.to_string(),
        None => "unknown".to_string(),
    }
}

/// Execute the parsed command line. Errors bubble up to `main`, which maps
/// them to process exit codes.
pub async fn execute_command(matches: ArgMatches) -> Result<(), CliError> {
    // Version needs no configuration, so it is answered before the context
    // is built.
    if let Some((COMMAND_VERSION, _)) = matches.subcommand() {
        println!("shoehorn {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let ctx = ActionContext::from_matches(&matches)?;

    match matches.subcommand() {
        Some((COMMAND_AUTH, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_LOGIN, sub_matches)) => {
                Ok(actions::auth::login(&ctx, sub_matches).await?)
            }
            Some((COMMAND_STATUS, _)) => Ok(actions::auth::status(&ctx).await?),
            Some((COMMAND_LOGOUT, _)) => Ok(actions::auth::logout(&ctx).await?),
            _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
        },
        Some((COMMAND_GET, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_ENTITIES, sub_matches)) => {
                Ok(actions::catalog::list_entities(&ctx, sub_matches).await?)
            }
            Some((COMMAND_ENTITY, sub_matches)) => {
                Ok(actions::catalog::get_entity(&ctx, sub_matches).await?)
            }
            Some((COMMAND_TEAMS, _)) => Ok(actions::catalog::list_teams(&ctx).await?),
            Some((COMMAND_TEAM, sub_matches)) => {
                Ok(actions::catalog::get_team(&ctx, sub_matches).await?)
            }
            Some((COMMAND_USERS, _)) => Ok(actions::catalog::list_users(&ctx).await?),
            Some((COMMAND_USER, sub_matches)) => {
                Ok(actions::catalog::get_user(&ctx, sub_matches).await?)
            }
            Some((COMMAND_GROUPS, _)) => Ok(actions::catalog::list_groups(&ctx).await?),
            Some((COMMAND_GROUP_ROLES, sub_matches)) => {
                Ok(actions::catalog::get_group_roles(&ctx, sub_matches).await?)
            }
            Some((COMMAND_K8S_AGENTS, _)) => Ok(actions::catalog::list_k8s_agents(&ctx).await?),
            Some((COMMAND_OWNED, _)) => Ok(actions::catalog::list_owned(&ctx).await?),
            Some((COMMAND_SCORECARD, sub_matches)) => {
                Ok(actions::catalog::get_scorecard(&ctx, sub_matches).await?)
            }
            Some((COMMAND_WHOAMI, _)) => Ok(actions::catalog::whoami(&ctx).await?),
            _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
        },
        Some((COMMAND_SEARCH, sub_matches)) => {
            Ok(actions::search::search(&ctx, sub_matches).await?)
        }
        Some((COMMAND_FORGE, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_MOLD, sub_matches)) => match sub_matches.subcommand() {
                Some((COMMAND_LIST, _)) => Ok(actions::forge::list_molds(&ctx).await?),
                Some((COMMAND_GET, sub_matches)) => {
                    Ok(actions::forge::get_mold(&ctx, sub_matches).await?)
                }
                _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                    sub_matches,
                ))),
            },
            Some((COMMAND_RUN, sub_matches)) => match sub_matches.subcommand() {
                Some((COMMAND_LIST, sub_matches)) => {
                    Ok(actions::forge::list_runs(&ctx, sub_matches).await?)
                }
                Some((COMMAND_GET, sub_matches)) => {
                    Ok(actions::forge::get_run(&ctx, sub_matches).await?)
                }
                Some((COMMAND_CREATE, sub_matches)) => {
                    Ok(actions::forge::create_run(&ctx, sub_matches).await?)
                }
                _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                    sub_matches,
                ))),
            },
            _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
        },
        Some((COMMAND_VALIDATE, sub_matches)) => {
            Ok(actions::manifest::validate(&ctx, sub_matches).await?)
        }
        Some((COMMAND_CONVERT, sub_matches)) => {
            Ok(actions::manifest::convert(&ctx, sub_matches).await?)
        }
        Some((COMMAND_MANIFEST, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_VALIDATE, sub_matches)) => {
                Ok(actions::manifest::validate(&ctx, sub_matches).await?)
            }
            Some((COMMAND_CONVERT, sub_matches)) => {
                Ok(actions::manifest::convert(&ctx, sub_matches).await?)
            }
            _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
        },
        _ => Err(CliError::UnsupportedSubcommand("unknown".to_string())),
    }
}
