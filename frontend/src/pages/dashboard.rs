use crate::{
    auth::{User, UserRole},
    state::auth::use_auth,
};
use leptos::*;

fn overview_heading(role: UserRole) -> &'static str {
    match role {
        UserRole::SuperAdmin => "Super Admin Overview",
        UserRole::Staff => "Staff Overview",
    }
}

#[component]
fn Overview(user: User) -> impl IntoView {
    let capabilities = user
        .role
        .capabilities()
        .iter()
        .map(|cap| view! { <li>{cap.label()}</li> })
        .collect_view();

    view! {
        <section class="space-y-6">
            <div>
                <h3 class="text-xl font-semibold text-fg">{overview_heading(user.role)}</h3>
                <p class="text-sm text-fg-muted mt-1">{format!("Welcome back, {}", user.name)}</p>
            </div>
            <div class="bg-surface-elevated rounded-lg border border-border p-6">
                <h4 class="text-sm font-semibold text-fg mb-3">"You can manage"</h4>
                <ul class="list-disc list-inside text-sm text-fg-muted space-y-1">{capabilities}</ul>
            </div>
        </section>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (auth, _) = use_auth();
    move || {
        auth.get()
            .user
            .map(|user| view! { <Overview user=user/> }.into_view())
            .unwrap_or_else(|| ().into_view())
    }
}
