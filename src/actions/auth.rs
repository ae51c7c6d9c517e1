//! Authentication handlers: login, status, logout.

use clap::ArgMatches;
use color_print::cprintln;
use tracing::debug;

use crate::{
    actions::{ActionContext, CliActionError},
    auth::{self, DeviceFlow},
    client::ApiClient,
    commands::params::PARAMETER_TOKEN,
    ui,
};

/// `auth login`. With `--token` the value is verified once against the
/// identity endpoint and stored as a PAT. Without it the device flow runs:
/// print the user code and verification URL, then poll until the browser
/// side completes, the authorization expires, or Ctrl-C.
pub async fn login(ctx: &ActionContext, sub_matches: &ArgMatches) -> Result<(), CliActionError> {
    if let Some(token) = sub_matches.get_one::<String>(PARAMETER_TOKEN) {
        let me = auth::login_with_pat(
            &ctx.store,
            &ctx.server,
            &ctx.config.current_profile,
            token,
        )
        .await?;
        println!(
            "{}",
            ui::success_line(
                ctx.mode,
                &format!("Logged in as {} <{}> (personal access token)", me.name, me.email),
            )
        );
        return Ok(());
    }

    let client = ApiClient::new(&ctx.server)?;
    let flow = DeviceFlow::new(
        client,
        ctx.store.clone(),
        &ctx.server,
        &ctx.config.current_profile,
    );
    let session = flow.initiate().await?;

    if ctx.mode.is_interactive() {
        cprintln!("To sign in, open <blue>{}</blue>", session.verification_uri);
        cprintln!("and enter the code <bold>{}</bold>", session.user_code);
    } else {
        println!("To sign in, open {}", session.verification_uri);
        println!("and enter the code {}", session.user_code);
    }
    if let Some(url) = &session.verification_uri_complete {
        println!("Or open {} directly.", url);
    }
    println!("Waiting for authorization (Ctrl-C to cancel)...");

    let cancel = async {
        // Ctrl-C handler installation can only fail once per process.
        let _ = tokio::signal::ctrl_c().await;
    };
    let config = flow.poll_until_authenticated(&session, cancel).await?;

    let who = config
        .current_profile()
        .ok()
        .and_then(|p| p.auth.as_ref())
        .and_then(|a| a.user.as_ref())
        .map(|u| format!(" as {} <{}>", u.name, u.email))
        .unwrap_or_default();
    println!("{}", ui::success_line(ctx.mode, &format!("Logged in{}", who)));
    Ok(())
}

/// `auth status`. Prints the profile, server, and credential state; when a
/// token is present, also asks the server whether it still accepts it. The
/// server check is best effort and never fails the command.
pub async fn status(ctx: &ActionContext) -> Result<(), CliActionError> {
    let profile = ctx.config.current_profile()?;

    let mut fields: Vec<(&str, String)> = vec![
        ("Profile", ctx.config.current_profile.clone()),
        ("Server", profile.server.clone()),
    ];

    if !ctx.config.is_authenticated() {
        fields.push(("Status", "Not authenticated".to_string()));
        print!("{}", ui::render_detail(&fields));
        println!("\nRun 'shoehorn auth login' to authenticate.");
        return Ok(());
    }

    let auth = profile.auth.as_ref();
    if ctx.config.is_pat_auth() {
        fields.push(("Status", "Authenticated (PAT)".to_string()));
        fields.push(("Token", "Valid (PAT, no expiry)".to_string()));
    } else {
        fields.push(("Status", "Authenticated".to_string()));
        let expiry = match auth.and_then(|a| a.expires_at) {
            Some(at) if ctx.config.is_token_expired() => {
                format!("Expired at {}", at.format("%Y-%m-%d %H:%M:%S UTC"))
            }
            Some(at) => format!("Valid until {}", at.format("%Y-%m-%d %H:%M:%S UTC")),
            None => "Expired (no expiry recorded)".to_string(),
        };
        fields.push(("Token", expiry));
    }
    if let Some(user) = auth.and_then(|a| a.user.as_ref()) {
        fields.push(("User", format!("{} <{}>", user.name, user.email)));
    }

    match auth::verify_with_server(&ctx.config).await {
        Some(true) => fields.push(("Server check", "Token accepted".to_string())),
        Some(false) => fields.push(("Server check", "Token rejected".to_string())),
        None => debug!("server verification skipped or unreachable"),
    }

    print!("{}", ui::render_detail(&fields));
    Ok(())
}

/// `auth logout`. Clears stored credentials for the current profile. The
/// operation is local only.
pub async fn logout(ctx: &ActionContext) -> Result<(), CliActionError> {
    let mut config = ctx.store.load()?;
    config.current_profile = ctx.config.current_profile.clone();
    config.clear_auth()?;
    ctx.store.save(&config)?;
    println!("{}", ui::success_line(ctx.mode, "Logged out"));
    println!("Note: Tokens are not revoked on the server; they lapse on their own expiry.");
    Ok(())
}
