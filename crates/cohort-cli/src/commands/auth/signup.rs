use anyhow::Context;
use cohort_auth::SignUpOutcome;
use cohort_config::CohortConfig;
use cohort_core::SignUpForm;
use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthSignupArgs;
use crate::output::output;

#[derive(Serialize)]
struct AuthSignupResponse {
    user_id: String,
    email: Option<String>,
    student_registered: bool,
    confirmation_required: bool,
}

pub async fn handle(
    args: &AuthSignupArgs,
    flags: &GlobalFlags,
    config: &CohortConfig,
) -> anyhow::Result<()> {
    let form = form_from_args(args);
    form.validate()?;
    let student = form.student();

    let client = bootstrap::auth_client(config)?;
    let outcome = client
        .sign_up(&student.email, &form.password)
        .await
        .context("auth signup")?;

    // With auto-confirm the new session authorizes the student insert.
    let token = match &outcome {
        SignUpOutcome::SessionIssued(session) => {
            cohort_auth::token_store::store(&session.credentials())?;
            Some(session.access_token.clone())
        }
        SignUpOutcome::ConfirmationRequired(_) => None,
    };

    let backend = config.require_backend()?;
    let data = cohort_data::DataClient::new(backend, config.tables.clone())?.with_access_token(token);
    data.register_student(&student)
        .await
        .context("account created but the student row could not be registered")?;

    let user = outcome.user();
    output(
        &AuthSignupResponse {
            user_id: user.id.clone(),
            email: user.email.clone(),
            student_registered: true,
            confirmation_required: matches!(outcome, SignUpOutcome::ConfirmationRequired(_)),
        },
        flags.format,
    )
}

fn form_from_args(args: &AuthSignupArgs) -> SignUpForm {
    SignUpForm {
        name: args.name.clone(),
        registration: args.registration.clone(),
        email: args.email.clone(),
        password: args.password.clone(),
        confirm_password: args.confirm_password.clone(),
    }
}
