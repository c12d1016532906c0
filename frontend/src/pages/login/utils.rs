use crate::{
    auth::{AuthError, User},
    components::guard::GuardDecision,
    router::DASHBOARD,
};

pub const LOGIN_SUCCESS_NOTICE: &str = "Login successful!";

pub fn validate_credentials(identifier: &str, secret: &str) -> Result<(), String> {
    if identifier.trim().is_empty() {
        return Err("Please enter your email or mobile".into());
    }
    if secret.is_empty() {
        return Err("Please enter your password".into());
    }
    Ok(())
}

pub fn submit_label(pending: bool) -> &'static str {
    if pending {
        "Logging in..."
    } else {
        "Login"
    }
}

/// Signed-in visitors never stay on the login view.
pub fn landing_decision(session: Option<&User>) -> GuardDecision {
    match session {
        Some(_) => GuardDecision::Redirect {
            to: DASHBOARD.path,
            replace: true,
        },
        None => GuardDecision::Render,
    }
}

/// A local validation message wins over the outcome of the last attempt.
pub fn failure_notice(
    validation: Option<String>,
    outcome: Option<&Result<(), AuthError>>,
    pending: bool,
) -> Option<String> {
    if pending {
        return None;
    }
    validation.or_else(|| match outcome {
        Some(Err(err)) => Some(err.to_string()),
        _ => None,
    })
}

pub fn success_notice(outcome: Option<&Result<(), AuthError>>) -> Option<String> {
    matches!(outcome, Some(Ok(()))).then(|| LOGIN_SUCCESS_NOTICE.to_string())
}
