use hl_core::entities::VerificationDecision;
use hl_core::validation::validate_decision;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminVerifyArgs;
use crate::context::AppContext;
use crate::output::output;

fn decision(args: &AdminVerifyArgs) -> anyhow::Result<VerificationDecision> {
    let decision = match &args.reject {
        Some(reason) => VerificationDecision::reject(reason.trim()),
        None => VerificationDecision::approve(),
    };
    validate_decision(decision.approved, decision.rejection_reason.as_deref())?;
    Ok(decision)
}

pub async fn run(args: &AdminVerifyArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let decision = decision(args)?;
    let result = ctx
        .sync
        .client()
        .verify_user(args.user_id, &decision)
        .await?;
    tracing::info!(user_id = args.user_id, approved = decision.approved, "verification decided");
    output(&result, flags.format)
}

#[cfg(test)]
mod tests {
    use super::decision;
    use crate::cli::subcommands::AdminVerifyArgs;

    #[test]
    fn approve_carries_no_reason() {
        let args = AdminVerifyArgs {
            user_id: 7,
            approve: true,
            reject: None,
        };
        let decision = decision(&args).expect("approval is valid");
        assert!(decision.approved);
        assert!(decision.rejection_reason.is_none());
    }

    #[test]
    fn blank_rejection_reason_is_refused() {
        let args = AdminVerifyArgs {
            user_id: 7,
            approve: false,
            reject: Some("   ".into()),
        };
        assert!(decision(&args).is_err());
    }

    #[test]
    fn rejection_reason_is_trimmed() {
        let args = AdminVerifyArgs {
            user_id: 7,
            approve: false,
            reject: Some(" Blurry ID photo ".into()),
        };
        let decision = decision(&args).expect("rejection with reason is valid");
        assert_eq!(decision.rejection_reason.as_deref(), Some("Blurry ID photo"));
    }
}
