use crate::{
    auth::{session::LOGIN_PATH, User},
    router::{ViewDescriptor, DASHBOARD},
    state::auth::use_auth,
};
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect { to: &'static str, replace: bool },
}

/// Maps the current session and a requested view to render-or-redirect.
/// A role requirement implies an authentication requirement.
pub fn decide(session: Option<&User>, descriptor: &ViewDescriptor) -> GuardDecision {
    let Some(user) = session else {
        return if descriptor.requires_auth || descriptor.required_role.is_some() {
            GuardDecision::Redirect {
                to: LOGIN_PATH,
                replace: true,
            }
        } else {
            GuardDecision::Render
        };
    };
    match descriptor.required_role {
        Some(required) if !user.role.satisfies(required) => GuardDecision::Redirect {
            to: DASHBOARD.path,
            replace: true,
        },
        _ => GuardDecision::Render,
    }
}

pub fn can_open(session: Option<&User>, descriptor: &ViewDescriptor) -> bool {
    decide(session, descriptor) == GuardDecision::Render
}

/// Hands a redirect decision to the router. Returns whether it navigated.
pub fn redirect_for<F>(decision: GuardDecision, navigate: F) -> bool
where
    F: Fn(&str, NavigateOptions),
{
    match decision {
        GuardDecision::Render => false,
        GuardDecision::Redirect { to, replace } => {
            navigate(
                to,
                NavigateOptions {
                    replace,
                    ..Default::default()
                },
            );
            true
        }
    }
}

/// Renders `children` only when the session may open `descriptor`; otherwise
/// renders nothing and navigates in-app to the redirect target.
#[component]
pub fn AccessGuard(descriptor: ViewDescriptor, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let decision = create_memo(move |_| decide(auth.get().user.as_ref(), &descriptor));
    create_effect(move |_| {
        let decision = decision.get();
        if decision != GuardDecision::Render {
            log::debug!("guard redirected {} ({:?})", descriptor.path, decision);
            redirect_for(decision, use_navigate());
        }
    });
    view! {
        <Show when=move || decision.get() == GuardDecision::Render fallback=|| ()>
            {children()}
        </Show>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::AccessGuard;
    use crate::router::{DASHBOARD, SETTINGS};
    use crate::test_support::helpers::{staff_user, super_admin_user};
    use crate::test_support::ssr::render_as;
    use leptos::*;

    #[test]
    fn renders_children_for_permitted_session() {
        let html = render_as(Some(staff_user()), || {
            view! {
                <AccessGuard descriptor=DASHBOARD>
                    {|| view! { <div>"protected-content"</div> }}
                </AccessGuard>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn hides_children_without_session() {
        let html = render_as(None, || {
            view! {
                <AccessGuard descriptor=DASHBOARD>
                    {|| view! { <div>"protected-content"</div> }}
                </AccessGuard>
            }
        });
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn hides_super_admin_view_from_staff() {
        let html = render_as(Some(staff_user()), || {
            view! {
                <AccessGuard descriptor=SETTINGS>
                    {|| view! { <div>"admin-protected"</div> }}
                </AccessGuard>
            }
        });
        assert!(!html.contains("admin-protected"));
    }

    #[test]
    fn shows_super_admin_view_to_super_admin() {
        let html = render_as(Some(super_admin_user()), || {
            view! {
                <AccessGuard descriptor=SETTINGS>
                    {|| view! { <div>"admin-protected"</div> }}
                </AccessGuard>
            }
        });
        assert!(html.contains("admin-protected"));
    }
}
