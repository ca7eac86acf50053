use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Account and verification-wizard commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Create an account.
    Register(AuthRegisterArgs),
    /// Sign in and store the session token.
    Login(CredentialArgs),
    /// Clear the stored session token.
    Logout,
    /// Show who is signed in and where the token lives.
    Status,
    /// Submit the profile step (phone, address, bio, optional photo).
    Profile(AuthProfileArgs),
    /// Upload the government ID and proof of address.
    Documents(AuthDocumentsArgs),
    /// Show the server-reported verification status.
    Verification,
    /// Show which verification step comes next.
    NextStep,
}

/// Email and password. The password may also come from `HYPERLOCAL_PASSWORD`
/// or, failing that, a line on stdin.
#[derive(Clone, Debug, Args)]
pub struct CredentialArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "HYPERLOCAL_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AuthRegisterArgs {
    /// Full name.
    #[arg(long)]
    pub name: String,
    #[command(flatten)]
    pub credentials: CredentialArgs,
    /// Accept the terms of service and privacy policy.
    #[arg(long)]
    pub agree_to_terms: bool,
}

#[derive(Clone, Debug, Args)]
pub struct AuthProfileArgs {
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub address: String,
    #[arg(long)]
    pub bio: String,
    /// Profile photo (jpg, png or pdf, at most 5 MB).
    #[arg(long)]
    pub photo: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct AuthDocumentsArgs {
    #[arg(long)]
    pub government_id: PathBuf,
    #[arg(long)]
    pub address_proof: PathBuf,
}
