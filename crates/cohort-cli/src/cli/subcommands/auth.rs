use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in with email and password.
    Login(AuthLoginArgs),
    /// Create an account and register the student.
    Signup(AuthSignupArgs),
    /// Email password-reset instructions.
    Recover(AuthRecoverArgs),
    /// Clear stored credentials.
    Logout,
    /// Show current auth status.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub email: String,
    /// Password (falls back to `COHORT_PASSWORD`).
    #[arg(long, env = "COHORT_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthSignupArgs {
    #[arg(long)]
    pub name: String,
    /// School registration number.
    #[arg(long)]
    pub registration: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub confirm_password: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthRecoverArgs {
    #[arg(long)]
    pub email: String,
}
