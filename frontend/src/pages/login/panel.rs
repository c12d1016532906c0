use crate::{
    auth::LoginRequest,
    components::guard::{redirect_for, GuardDecision},
    pages::login::{components::form::LoginForm, utils},
    state::auth::{self, use_auth, LoginAction},
};
use leptos::{ev::SubmitEvent, Callback, *};
use leptos_router::use_navigate;

#[component]
pub fn LoginPanel(#[prop(optional)] action: Option<LoginAction>) -> impl IntoView {
    let (identifier, set_identifier) = create_signal(String::new());
    let (secret, set_secret) = create_signal(String::new());
    let (validation_error, set_validation_error) = create_signal(None::<String>);

    let (auth, _) = use_auth();
    let login_action = action.unwrap_or_else(auth::use_login_action);
    let pending = login_action.pending();
    let outcome = login_action.value();

    // Covers both a restored session on arrival and a successful submit.
    create_effect(move |_| {
        let decision = utils::landing_decision(auth.get().user.as_ref());
        if decision != GuardDecision::Render {
            redirect_for(decision, use_navigate());
        }
    });

    let error = Signal::derive(move || {
        let validation = validation_error.get();
        let pending = pending.get();
        outcome.with(|outcome| utils::failure_notice(validation, outcome.as_ref(), pending))
    });
    let success =
        Signal::derive(move || outcome.with(|outcome| utils::success_notice(outcome.as_ref())));

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let entered_identifier = identifier.get_untracked();
        let entered_secret = secret.get_untracked();

        if let Err(msg) = utils::validate_credentials(&entered_identifier, &entered_secret) {
            set_validation_error.set(Some(msg));
            return;
        }

        set_validation_error.set(None);
        login_action.dispatch(LoginRequest {
            identifier: entered_identifier,
            secret: entered_secret,
        });
    });

    let identifier_input = Callback::new(move |value: String| set_identifier.set(value));
    let secret_input = Callback::new(move |value: String| set_secret.set(value));

    view! {
        <LoginForm
            identifier=identifier
            secret=secret
            error=error
            success=success
            pending=pending
            on_identifier_input=identifier_input
            on_secret_input=secret_input
            on_submit=handle_submit
        />
    }
}
