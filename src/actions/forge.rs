//! Forge handlers: molds and runs.

use clap::ArgMatches;
use std::collections::HashMap;

use crate::{
    actions::{required, ActionContext, CliActionError},
    commands::params::{PARAMETER_ID, PARAMETER_INPUTS, PARAMETER_MOLD},
    ui,
};

pub async fn list_molds(ctx: &ActionContext) -> Result<(), CliActionError> {
    let client = ctx.client()?;
    let spinner = ui::spinner(ctx.mode, "Fetching molds...");
    let result = client.list_molds().await;
    ui::finish_spinner(spinner);
    let molds = result?;

    if ctx.structured() {
        print!("{}", ctx.render_structured(&molds)?);
        return Ok(());
    }
    if molds.is_empty() {
        println!("No molds available.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = molds
        .iter()
        .map(|m| {
            vec![
                m.slug.clone(),
                m.name.clone(),
                m.version.clone(),
                m.description.clone(),
            ]
        })
        .collect();
    print!(
        "{}",
        ui::render_table(&["Slug", "Name", "Version", "Description"], &rows)
    );
    Ok(())
}

pub async fn get_mold(
    ctx: &ActionContext,
    sub_matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let slug = required(sub_matches, PARAMETER_ID)?;
    let client = ctx.client()?;
    let spinner = ui::spinner(ctx.mode, "Fetching mold...");
    let result = client.get_mold(slug).await;
    ui::finish_spinner(spinner);
    let detail = result?;

    if ctx.structured() {
        print!("{}", ctx.render_structured(&detail)?);
        return Ok(());
    }
    let mut fields: Vec<(&str, String)> = vec![
        ("Name", detail.mold.name.clone()),
        ("Slug", detail.mold.slug.clone()),
        ("Version", detail.mold.version.clone()),
    ];
    if !detail.mold.description.is_empty() {
        fields.push(("Description", detail.mold.description.clone()));
    }
    print!("{}", ui::render_detail(&fields));

    if !detail.inputs.is_empty() {
        println!();
        let rows: Vec<Vec<String>> = detail
            .inputs
            .iter()
            .map(|i| {
                vec![
                    i.name.clone(),
                    i.input_type.clone(),
                    if i.required { "yes" } else { "no" }.to_string(),
                    i.description.clone(),
                ]
            })
            .collect();
        print!(
            "{}",
            ui::render_table(&["Input", "Type", "Required", "Description"], &rows)
        );
    }
    if !detail.steps.is_empty() {
        println!();
        let rows: Vec<Vec<String>> = detail
            .steps
            .iter()
            .map(|s| vec![s.name.clone(), s.action.clone()])
            .collect();
        print!("{}", ui::render_table(&["Step", "Action"], &rows));
    }
    Ok(())
}

pub async fn list_runs(
    ctx: &ActionContext,
    sub_matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let mold = sub_matches
        .get_one::<String>(PARAMETER_MOLD)
        .cloned()
        .unwrap_or_default();
    let client = ctx.client()?;
    let spinner = ui::spinner(ctx.mode, "Fetching runs...");
    let result = client.list_runs(&mold).await;
    ui::finish_spinner(spinner);
    let list = result?;

    if ctx.structured() {
        print!("{}", ctx.render_structured(&list)?);
        return Ok(());
    }
    if list.runs.is_empty() {
        println!("No runs found.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = list
        .runs
        .iter()
        .map(|r| {
            vec![
                format!("{} {}", ui::status_symbol(&r.status), r.status),
                r.id.clone(),
                r.mold_slug.clone(),
                r.created_by.clone(),
                r.created_at.clone(),
            ]
        })
        .collect();
    print!(
        "{}",
        ui::render_table(&["Status", "Id", "Mold", "Created By", "Created At"], &rows)
    );
    println!("\n{} run(s) total.", list.total_count);
    Ok(())
}

pub async fn get_run(ctx: &ActionContext, sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    let id = required(sub_matches, PARAMETER_ID)?;
    let client = ctx.client()?;
    let spinner = ui::spinner(ctx.mode, "Fetching run...");
    let result = client.get_run(id).await;
    ui::finish_spinner(spinner);
    let run = result?;

    if ctx.structured() {
        print!("{}", ctx.render_structured(&run)?);
        return Ok(());
    }
    let mut fields: Vec<(&str, String)> = vec![
        ("Id", run.id.clone()),
        ("Mold", run.mold_slug.clone()),
        (
            "Status",
            format!("{} {}", ui::status_symbol(&run.status), run.status),
        ),
        ("Created By", run.created_by.clone()),
        ("Created At", run.created_at.clone()),
    ];
    if let Some(completed_at) = &run.completed_at {
        fields.push(("Completed At", completed_at.clone()));
    }
    if let Some(error) = &run.error {
        fields.push(("Error", error.clone()));
    }
    print!("{}", ui::render_detail(&fields));
    Ok(())
}

/// `forge run create --mold <slug> [--inputs <json>]`. Inputs must be a JSON
/// object; the server validates them against the mold's input schema.
pub async fn create_run(
    ctx: &ActionContext,
    sub_matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let mold = required(sub_matches, PARAMETER_MOLD)?;
    let inputs: Option<HashMap<String, serde_json::Value>> =
        match sub_matches.get_one::<String>(PARAMETER_INPUTS) {
            Some(raw) => Some(serde_json::from_str(raw).map_err(|e| {
                CliActionError::InvalidArgument {
                    argument: PARAMETER_INPUTS.to_string(),
                    reason: format!("expected a JSON object: {}", e),
                }
            })?),
            None => None,
        };

    let client = ctx.client()?;
    let spinner = ui::spinner(ctx.mode, "Starting run...");
    let result = client.create_run(mold, inputs.as_ref()).await;
    ui::finish_spinner(spinner);
    let run = result?;

    if ctx.structured() {
        print!("{}", ctx.render_structured(&run)?);
        return Ok(());
    }
    println!(
        "{}",
        ui::success_line(
            ctx.mode,
            &format!("Run {} started from mold '{}'", run.id, mold),
        )
    );
    println!("Track it with 'shoehorn forge run get {}'.", run.id);
    Ok(())
}
