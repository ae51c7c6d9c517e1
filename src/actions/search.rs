//! Full-text search handler.

use clap::ArgMatches;

use crate::{
    actions::{required, ActionContext, CliActionError},
    commands::params::PARAMETER_QUERY,
    ui,
};

pub async fn search(ctx: &ActionContext, sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    let query = required(sub_matches, PARAMETER_QUERY)?;
    let client = ctx.client()?;
    let spinner = ui::spinner(ctx.mode, "Searching...");
    let result = client.search(query).await;
    ui::finish_spinner(spinner);
    let result = result?;

    if ctx.structured() {
        print!("{}", ctx.render_structured(&result)?);
        return Ok(());
    }
    if result.hits.is_empty() {
        println!("No results for '{}'.", query);
        return Ok(());
    }
    let rows: Vec<Vec<String>> = result
        .hits
        .iter()
        .map(|h| {
            vec![
                h.hit_type.clone(),
                h.name.clone(),
                h.description.clone(),
                format!("{:.2}", h.score),
            ]
        })
        .collect();
    print!(
        "{}",
        ui::render_table(&["Type", "Name", "Description", "Score"], &rows)
    );
    println!("\n{} result(s) total.", result.total_count);
    Ok(())
}
