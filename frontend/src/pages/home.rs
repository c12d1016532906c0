use crate::router::LOGIN;
use leptos::*;
use leptos_router::{NavigateOptions, Redirect};

/// `/` has no content of its own; the login view decides where to go next.
#[component]
pub fn HomePage() -> impl IntoView {
    let options = NavigateOptions {
        replace: true,
        ..Default::default()
    };
    view! { <Redirect path=LOGIN.path options=options/> }
}
