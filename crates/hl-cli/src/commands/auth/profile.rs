use hl_client::{ProfileUpdate, Upload};
use hl_core::responses::ProgressResponse;
use hl_sync::route_for_progress;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthProfileArgs;
use crate::commands::shared::notices::Notices;
use crate::context::AppContext;
use crate::output::output;

/// Wizard progress plus where to go next.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ProgressOutput {
    pub message: Option<String>,
    pub profile_completion: u8,
    pub current_step: Option<String>,
    pub pending_steps: Vec<String>,
    pub next_step: &'static str,
}

impl From<ProgressResponse> for ProgressOutput {
    fn from(progress: ProgressResponse) -> Self {
        let route = route_for_progress(
            progress.current_step.as_deref(),
            progress.profile_completion_percentage,
        );
        Self {
            message: progress.message,
            profile_completion: progress.profile_completion_percentage,
            current_step: progress.current_step,
            pending_steps: progress.pending_steps,
            next_step: route.label(),
        }
    }
}

pub async fn run(
    args: &AuthProfileArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_user().await?;
    let profile_photo = match &args.photo {
        Some(path) => Some(Upload::from_path(path).await?),
        None => None,
    };

    let notices = Notices::subscribe(&ctx.sync, flags);
    let result = ctx
        .sync
        .submit_profile(ProfileUpdate {
            phone: args.phone.clone(),
            address: args.address.clone(),
            bio: args.bio.clone(),
            profile_photo,
        })
        .await;
    notices.flush();

    output(&ProgressOutput::from(result?), flags.format)
}
