use hl_sync::{VerificationRoute, route_for_user};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NextStepOutput {
    route: VerificationRoute,
    path: &'static str,
    label: &'static str,
    profile_completion: Option<u8>,
    current_step: Option<String>,
}

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = ctx.sync.restore().await?;
    let route = route_for_user(user.as_ref());
    output(
        &NextStepOutput {
            route,
            path: route.path(),
            label: route.label(),
            profile_completion: user.as_ref().map(|u| u.profile_completion),
            current_step: user.and_then(|u| u.current_step),
        },
        flags.format,
    )
}
