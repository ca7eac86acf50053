use serde::Serialize;
use hl_sync::account::Registration;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthRegisterArgs;
use crate::commands::shared::password;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterOutput {
    user_id: i64,
    email: String,
    message: Option<String>,
    next: &'static str,
}

pub async fn run(
    args: &AuthRegisterArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let password = password::resolve(args.credentials.password.as_deref())?;
    let form = Registration {
        name: args.name.clone(),
        email: args.credentials.email.clone(),
        confirm_password: password.clone(),
        password,
        agree_to_terms: args.agree_to_terms,
    };
    let response = ctx.sync.register(&form).await?;
    output(
        &RegisterOutput {
            user_id: response.user_id,
            email: response.email,
            message: response.message,
            next: "hl auth login --email <email>",
        },
        flags.format,
    )
}
