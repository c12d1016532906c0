use crate::components::empty_state::EmptyState;
use leptos::*;

#[component]
pub fn ChatsPage() -> impl IntoView {
    view! {
        <EmptyState
            title="No conversations"
            description="One-to-one chats with travellers will appear here."
        />
    }
}

#[component]
pub fn GroupChatsPage() -> impl IntoView {
    view! {
        <EmptyState
            title="No group chats"
            description="Chats for groups with messaging enabled will appear here."
        />
    }
}

#[component]
pub fn BroadcastsPage() -> impl IntoView {
    view! {
        <EmptyState
            title="No broadcasts sent"
            description="Announcements sent to whole tour groups will be listed here."
        />
    }
}
