use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct LogoutOutput {
    cleared: bool,
}

pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.sync.sign_out()?;
    output(&LogoutOutput { cleared: true }, flags.format)
}
