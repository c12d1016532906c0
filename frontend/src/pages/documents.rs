use crate::components::empty_state::EmptyState;
use leptos::*;

#[component]
pub fn DocumentsPage() -> impl IntoView {
    view! {
        <EmptyState
            title="No documents"
            description="Itineraries, tickets and other shared files will be listed here."
        />
    }
}
