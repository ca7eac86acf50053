use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CredentialArgs;
use crate::commands::shared::password;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AdminLogoutOutput {
    cleared: bool,
}

pub async fn run(args: &CredentialArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let password = password::resolve(args.password.as_deref())?;
    let admin = ctx.sync.admin_sign_in(&args.email, &password).await?;
    output(&admin, flags.format)
}

pub fn logout(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.sync.admin_sign_out()?;
    output(&AdminLogoutOutput { cleared: true }, flags.format)
}
