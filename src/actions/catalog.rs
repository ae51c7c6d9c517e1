//! Catalog read handlers backing `get`, `search`, and `whoami`.

use clap::ArgMatches;

use crate::{
    actions::{required, ActionContext, CliActionError},
    catalog::{ListEntitiesOpts, Scorecard},
    commands::params::{
        PARAMETER_ID, PARAMETER_OWNER, PARAMETER_SEARCH, PARAMETER_TYPE, PARAMETER_WITH_SCORECARD,
    },
    overview::{self, ScorecardSection},
    ui,
};

pub async fn list_entities(
    ctx: &ActionContext,
    sub_matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let opts = ListEntitiesOpts {
        entity_type: sub_matches
            .get_one::<String>(PARAMETER_TYPE)
            .cloned()
            .unwrap_or_default(),
        search: sub_matches
            .get_one::<String>(PARAMETER_SEARCH)
            .cloned()
            .unwrap_or_default(),
        owner: sub_matches
            .get_one::<String>(PARAMETER_OWNER)
            .cloned()
            .unwrap_or_default(),
    };

    let client = ctx.client()?;
    let spinner = ui::spinner(ctx.mode, "Fetching entities...");
    let result = client.list_entities(&opts).await;
    ui::finish_spinner(spinner);
    let entities = result?;

    if ctx.structured() {
        print!("{}", ctx.render_structured(&entities)?);
        return Ok(());
    }
    if entities.is_empty() {
        println!("No entities found.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = entities
        .iter()
        .map(|e| {
            vec![
                e.name.clone(),
                e.entity_type.clone(),
                e.owner.clone(),
                e.description.clone(),
            ]
        })
        .collect();
    print!(
        "{}",
        ui::render_table(&["Name", "Type", "Owner", "Description"], &rows)
    );
    Ok(())
}

pub async fn get_entity(
    ctx: &ActionContext,
    sub_matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let id = required(sub_matches, PARAMETER_ID)?;
    let with_scorecard = sub_matches.get_flag(PARAMETER_WITH_SCORECARD);

    let client = ctx.client()?;
    let spinner = ui::spinner(ctx.mode, "Fetching entity...");
    let result = overview::fetch_entity_overview(&client, id, with_scorecard).await;
    ui::finish_spinner(spinner);
    let view = result?;

    if ctx.structured() {
        print!("{}", ctx.render_structured(&view)?);
        return Ok(());
    }

    let entity = &view.detail.entity;
    let mut fields: Vec<(&str, String)> = vec![
        ("Name", entity.name.clone()),
        ("Type", entity.entity_type.clone()),
        ("Owner", entity.owner.clone()),
        ("Lifecycle", view.detail.lifecycle.clone()),
    ];
    if !entity.description.is_empty() {
        fields.push(("Description", entity.description.clone()));
    }
    if !entity.tags.is_empty() {
        fields.push(("Tags", entity.tags.join(", ")));
    }
    print!("{}", ui::render_detail(&fields));

    if let Some(status) = &view.status {
        println!();
        print!(
            "{}",
            ui::render_detail(&[
                ("Health", status.health.clone()),
                ("Uptime", format!("{:.2}%", status.uptime)),
                ("Incidents", status.incident_count.to_string()),
            ])
        );
    }

    if !view.resources.is_empty() {
        println!();
        let rows: Vec<Vec<String>> = view
            .resources
            .iter()
            .map(|r| {
                vec![
                    r.name.clone(),
                    r.resource_type.clone(),
                    r.environment.clone(),
                ]
            })
            .collect();
        print!(
            "{}",
            ui::render_table(&["Resource", "Type", "Environment"], &rows)
        );
    }

    if !view.detail.links.is_empty() {
        println!();
        let rows: Vec<Vec<String>> = view
            .detail
            .links
            .iter()
            .map(|l| vec![l.title.clone(), l.url.clone()])
            .collect();
        print!("{}", ui::render_table(&["Link", "Url"], &rows));
    }

    match &view.scorecard {
        ScorecardSection::Ready(scorecard) => {
            println!();
            print_scorecard(scorecard);
        }
        ScorecardSection::Unavailable => {
            println!();
            println!("Scorecard: unavailable");
        }
        ScorecardSection::NotRequested => {}
    }
    Ok(())
}

fn print_scorecard(scorecard: &Scorecard) {
    print!(
        "{}",
        ui::render_detail(&[
            (
                "Score",
                format!("{}/{}", scorecard.score, scorecard.max_score),
            ),
            ("Grade", scorecard.grade.clone()),
        ])
    );
    if !scorecard.checks.is_empty() {
        let rows: Vec<Vec<String>> = scorecard
            .checks
            .iter()
            .map(|c| {
                vec![
                    if c.passed { "✓" } else { "✗" }.to_string(),
                    c.name.clone(),
                    c.message.clone(),
                ]
            })
            .collect();
        print!("{}", ui::render_table(&["", "Check", "Message"], &rows));
    }
}

pub async fn get_scorecard(
    ctx: &ActionContext,
    sub_matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let id = required(sub_matches, PARAMETER_ID)?;
    let client = ctx.client()?;
    let spinner = ui::spinner(ctx.mode, "Fetching scorecard...");
    let result = client.get_entity_scorecard(id).await;
    ui::finish_spinner(spinner);
    let scorecard = result?;

    if ctx.structured() {
        print!("{}", ctx.render_structured(&scorecard)?);
        return Ok(());
    }
    print_scorecard(&scorecard);
    Ok(())
}

pub async fn list_teams(ctx: &ActionContext) -> Result<(), CliActionError> {
    let client = ctx.client()?;
    let spinner = ui::spinner(ctx.mode, "Fetching teams...");
    let result = client.list_teams().await;
    ui::finish_spinner(spinner);
    let teams = result?;

    if ctx.structured() {
        print!("{}", ctx.render_structured(&teams)?);
        return Ok(());
    }
    if teams.is_empty() {
        println!("No teams found.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = teams
        .iter()
        .map(|t| {
            vec![
                t.name.clone(),
                t.slug.clone(),
                t.member_count.to_string(),
                t.description.clone(),
            ]
        })
        .collect();
    print!(
        "{}",
        ui::render_table(&["Name", "Slug", "Members", "Description"], &rows)
    );
    Ok(())
}

pub async fn get_team(
    ctx: &ActionContext,
    sub_matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let id = required(sub_matches, PARAMETER_ID)?;
    let client = ctx.client()?;
    let spinner = ui::spinner(ctx.mode, "Fetching team...");
    let result = client.get_team(id).await;
    ui::finish_spinner(spinner);
    let detail = result?;

    if ctx.structured() {
        print!("{}", ctx.render_structured(&detail)?);
        return Ok(());
    }
    let mut fields: Vec<(&str, String)> = vec![
        ("Name", detail.team.name.clone()),
        ("Slug", detail.team.slug.clone()),
    ];
    if !detail.team.description.is_empty() {
        fields.push(("Description", detail.team.description.clone()));
    }
    print!("{}", ui::render_detail(&fields));

    if !detail.members.is_empty() {
        println!();
        let rows: Vec<Vec<String>> = detail
            .members
            .iter()
            .map(|m| vec![m.name.clone(), m.email.clone(), m.role.clone()])
            .collect();
        print!("{}", ui::render_table(&["Member", "Email", "Role"], &rows));
    }
    Ok(())
}

pub async fn list_users(ctx: &ActionContext) -> Result<(), CliActionError> {
    let client = ctx.client()?;
    let spinner = ui::spinner(ctx.mode, "Fetching users...");
    let result = client.list_users().await;
    ui::finish_spinner(spinner);
    let users = result?;

    if ctx.structured() {
        print!("{}", ctx.render_structured(&users)?);
        return Ok(());
    }
    if users.is_empty() {
        println!("No users found.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = users
        .iter()
        .map(|u| vec![u.name.clone(), u.email.clone(), u.id.clone()])
        .collect();
    print!("{}", ui::render_table(&["Name", "Email", "Id"], &rows));
    Ok(())
}

pub async fn get_user(
    ctx: &ActionContext,
    sub_matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let id = required(sub_matches, PARAMETER_ID)?;
    let client = ctx.client()?;
    let spinner = ui::spinner(ctx.mode, "Fetching user...");
    let result = client.get_user(id).await;
    ui::finish_spinner(spinner);
    let detail = result?;

    if ctx.structured() {
        print!("{}", ctx.render_structured(&detail)?);
        return Ok(());
    }
    let mut fields: Vec<(&str, String)> = vec![
        ("Name", detail.user.name.clone()),
        ("Email", detail.user.email.clone()),
        ("Id", detail.user.id.clone()),
    ];
    if !detail.teams.is_empty() {
        fields.push(("Teams", detail.teams.join(", ")));
    }
    if !detail.groups.is_empty() {
        fields.push(("Groups", detail.groups.join(", ")));
    }
    if !detail.roles.is_empty() {
        fields.push(("Roles", detail.roles.join(", ")));
    }
    print!("{}", ui::render_detail(&fields));
    Ok(())
}

pub async fn list_groups(ctx: &ActionContext) -> Result<(), CliActionError> {
    let client = ctx.client()?;
    let spinner = ui::spinner(ctx.mode, "Fetching groups...");
    let result = client.list_groups().await;
    ui::finish_spinner(spinner);
    let groups = result?;

    if ctx.structured() {
        print!("{}", ctx.render_structured(&groups)?);
        return Ok(());
    }
    if groups.is_empty() {
        println!("No groups found.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = groups
        .iter()
        .map(|g| vec![g.name.clone(), g.role_count.to_string()])
        .collect();
    print!("{}", ui::render_table(&["Name", "Roles"], &rows));
    Ok(())
}

pub async fn get_group_roles(
    ctx: &ActionContext,
    sub_matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let group = required(sub_matches, PARAMETER_ID)?;
    let client = ctx.client()?;
    let spinner = ui::spinner(ctx.mode, "Fetching roles...");
    let result = client.get_group_roles(group).await;
    ui::finish_spinner(spinner);
    let roles = result?;

    if ctx.structured() {
        print!("{}", ctx.render_structured(&roles)?);
        return Ok(());
    }
    if roles.is_empty() {
        println!("No roles granted by group '{}'.", group);
        return Ok(());
    }
    let rows: Vec<Vec<String>> = roles
        .iter()
        .map(|r| vec![r.name.clone(), r.description.clone()])
        .collect();
    print!("{}", ui::render_table(&["Role", "Description"], &rows));
    Ok(())
}

pub async fn list_k8s_agents(ctx: &ActionContext) -> Result<(), CliActionError> {
    let client = ctx.client()?;
    let spinner = ui::spinner(ctx.mode, "Fetching agents...");
    let result = client.list_k8s_agents().await;
    ui::finish_spinner(spinner);
    let agents = result?;

    if ctx.structured() {
        print!("{}", ctx.render_structured(&agents)?);
        return Ok(());
    }
    if agents.is_empty() {
        println!("No agents registered.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = agents
        .iter()
        .map(|a| {
            vec![
                a.id.clone(),
                a.cluster_name.clone(),
                a.status.clone(),
                a.version.clone(),
                a.last_seen.clone(),
            ]
        })
        .collect();
    print!(
        "{}",
        ui::render_table(&["Id", "Cluster", "Status", "Version", "Last Seen"], &rows)
    );
    Ok(())
}

/// Entities owned by any of the caller's teams, deduplicated across teams.
/// A team whose listing fails is skipped rather than failing the whole view.
pub async fn list_owned(ctx: &ActionContext) -> Result<(), CliActionError> {
    let client = ctx.client()?;
    let spinner = ui::spinner(ctx.mode, "Fetching owned entities...");
    let result = client.list_owned_entities().await;
    ui::finish_spinner(spinner);
    let entities = match result? {
        Some(entities) => entities,
        None => {
            println!("You are not a member of any teams.");
            return Ok(());
        }
    };

    if ctx.structured() {
        print!("{}", ctx.render_structured(&entities)?);
        return Ok(());
    }
    if entities.is_empty() {
        println!("No entities found.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = entities
        .iter()
        .map(|e| {
            vec![
                e.name.clone(),
                e.entity_type.clone(),
                e.owner.clone(),
                e.description.clone(),
            ]
        })
        .collect();
    print!(
        "{}",
        ui::render_table(&["Name", "Type", "Owner", "Description"], &rows)
    );
    Ok(())
}

pub async fn whoami(ctx: &ActionContext) -> Result<(), CliActionError> {
    let client = ctx.client()?;
    let spinner = ui::spinner(ctx.mode, "Fetching identity...");
    let result = client.get_me().await;
    ui::finish_spinner(spinner);
    let me = result?;

    if ctx.structured() {
        print!("{}", ctx.render_structured(&me)?);
        return Ok(());
    }
    let mut fields: Vec<(&str, String)> = vec![
        ("Name", me.name.clone()),
        ("Email", me.email.clone()),
        ("Tenant", me.tenant_id.clone()),
    ];
    if !me.teams.is_empty() {
        fields.push(("Teams", me.teams.join(", ")));
    }
    if !me.roles.is_empty() {
        fields.push(("Roles", me.roles.join(", ")));
    }
    print!("{}", ui::render_detail(&fields));
    Ok(())
}
