//! Manifest handlers: server-side validation and conversion.

use clap::ArgMatches;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::{
    actions::{required, ActionContext, CliActionError},
    commands::params::{
        FORMAT_MOLD, PARAMETER_FILE, PARAMETER_OUT, PARAMETER_TO, PARAMETER_VALIDATE,
    },
    manifests::ValidationResult,
    ui,
};

/// Read the manifest argument: a file path, or stdin when it is `-`.
fn read_manifest(arg: &str) -> Result<String, CliActionError> {
    if arg == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        Ok(content)
    } else {
        Ok(std::fs::read_to_string(Path::new(arg))?)
    }
}

fn print_validation(ctx: &ActionContext, result: &ValidationResult) {
    if result.valid {
        println!("{}", ui::success_line(ctx.mode, "Manifest is valid"));
        return;
    }
    println!(
        "{}",
        ui::error_line(
            ctx.mode,
            &format!("Manifest is invalid ({} error(s))", result.errors.len()),
        )
    );
    for issue in &result.errors {
        if issue.field.is_empty() {
            println!("  - {}", issue.message);
        } else {
            println!("  - {}: {}", issue.field, issue.message);
        }
    }
}

/// `manifest validate <file>`. Invalid manifests print each issue and make
/// the process exit with the validation code.
pub async fn validate(
    ctx: &ActionContext,
    sub_matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let file = required(sub_matches, PARAMETER_FILE)?;
    let content = read_manifest(file)?;

    let client = ctx.client()?;
    let spinner = ui::spinner(ctx.mode, "Validating manifest...");
    let result = client.validate_manifest(&content).await;
    ui::finish_spinner(spinner);
    let result = result?;

    if ctx.structured() {
        print!("{}", ctx.render_structured(&result)?);
    } else {
        print_validation(ctx, &result);
    }
    if !result.valid {
        return Err(CliActionError::ValidationFailed {
            count: result.errors.len(),
        });
    }
    Ok(())
}

/// `manifest convert <file> --to <format>`. The converted document goes to
/// stdout, or to `--out` when given. The mold target returns a JSON object
/// instead of YAML text.
pub async fn convert(ctx: &ActionContext, sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    let file = required(sub_matches, PARAMETER_FILE)?;
    let target = required(sub_matches, PARAMETER_TO)?;
    let validate = sub_matches.get_flag(PARAMETER_VALIDATE);
    let content = read_manifest(file)?;

    let client = ctx.client()?;
    let spinner = ui::spinner(ctx.mode, "Converting manifest...");
    let result = client.convert_manifest(&content, target, validate).await;
    ui::finish_spinner(spinner);
    let result = result?;

    if let Some(validation) = &result.validation {
        print_validation(ctx, validation);
        if !validation.valid {
            return Err(CliActionError::ValidationFailed {
                count: validation.errors.len(),
            });
        }
    }

    let output = if target == FORMAT_MOLD {
        match &result.mold {
            Some(mold) => serde_json::to_string_pretty(mold)? + "\n",
            None => result.content.clone().unwrap_or_default(),
        }
    } else {
        result.content.clone().unwrap_or_default()
    };

    match sub_matches.get_one::<String>(PARAMETER_OUT) {
        Some(path) => {
            std::fs::write(path, &output)?;
            debug!("wrote converted manifest to {}", path);
            println!(
                "{}",
                ui::success_line(ctx.mode, &format!("Converted manifest written to {}", path))
            );
        }
        None => print!("{}", output),
    }
    Ok(())
}
