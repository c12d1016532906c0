use crate::{components::empty_state::EmptyState, router::DASHBOARD};
use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface flex items-center justify-center p-4">
            <div class="text-center space-y-4">
                <h1 class="text-6xl text-fg">"404"</h1>
                <EmptyState
                    title="Page Not Found"
                    description="The page you're looking for doesn't exist or has been moved."
                    link=(DASHBOARD.path, "Go to Dashboard")
                />
            </div>
        </div>
    }
}
