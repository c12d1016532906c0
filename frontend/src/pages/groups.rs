use crate::{components::empty_state::EmptyState, router::GROUPS};
use leptos::*;

#[component]
pub fn GroupsPage() -> impl IntoView {
    view! {
        <EmptyState
            title="No tour groups yet"
            description="Tour groups you create or are assigned to will appear here."
        />
    }
}

#[component]
pub fn GroupDetailsPage(#[prop(into)] group_id: Signal<String>) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <h3 class="text-xl font-semibold text-fg">{move || format!("Group {}", group_id.get())}</h3>
            <EmptyState
                title="No travellers in this group"
                description="Invited travellers and their status will be listed here."
                link=(GROUPS.path, "Back to groups")
            />
        </div>
    }
}
