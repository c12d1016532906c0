use crate::{components::empty_state::EmptyState, state::auth::use_auth};
use leptos::*;

#[component]
pub fn StaffsPage() -> impl IntoView {
    view! {
        <EmptyState
            title="No staff members"
            description="Staff accounts and their module permissions will be listed here."
        />
    }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    view! {
        <EmptyState
            title="No reports available"
            description="Tour and engagement summaries will appear here once groups are active."
        />
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let profile_rows = move || {
        auth.get()
            .user
            .map(|user| {
                [
                    ("Name", user.name),
                    ("Email", user.email),
                    ("Mobile", user.mobile),
                    ("Role", user.role.label().to_string()),
                ]
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="flex justify-between py-2 border-b border-border">
                            <dt class="text-sm text-fg-muted">{label}</dt>
                            <dd class="text-sm text-fg">{value}</dd>
                        </div>
                    }
                })
                .collect_view()
            })
            .unwrap_or_else(|| ().into_view())
    };

    view! {
        <section class="bg-surface-elevated rounded-lg border border-border p-6 max-w-xl">
            <h3 class="text-lg font-semibold text-fg mb-4">"Profile"</h3>
            <dl>{profile_rows}</dl>
        </section>
    }
}
