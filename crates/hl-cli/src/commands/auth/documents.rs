use hl_client::Upload;

use super::profile::ProgressOutput;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthDocumentsArgs;
use crate::commands::shared::notices::Notices;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    args: &AuthDocumentsArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_user().await?;
    let government_id = Upload::from_path(&args.government_id).await?;
    let address_proof = Upload::from_path(&args.address_proof).await?;

    let notices = Notices::subscribe(&ctx.sync, flags);
    let result = ctx.sync.submit_documents(government_id, address_proof).await;
    notices.flush();

    output(&ProgressOutput::from(result?), flags.format)
}
