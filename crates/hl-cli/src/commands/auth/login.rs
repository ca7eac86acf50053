use hl_sync::route_for;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CredentialArgs;
use crate::commands::shared::password;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginOutput {
    user_id: String,
    name: String,
    email: String,
    verified: bool,
    profile_completion: u8,
    next_step: &'static str,
    next_route: &'static str,
}

pub async fn run(args: &CredentialArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let password = password::resolve(args.password.as_deref())?;
    let user = ctx.sync.sign_in(&args.email, &password).await?;
    let route = route_for(&user);
    output(
        &LoginOutput {
            user_id: user.id,
            name: user.name,
            email: user.email,
            verified: user.is_verified,
            profile_completion: user.profile_completion,
            next_step: route.label(),
            next_route: route.path(),
        },
        flags.format,
    )
}
