use leptos::*;

/// Placeholder panel for a view with nothing to list yet.
#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] link: Option<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div class="text-center py-12 px-4 rounded-lg border-2 border-dashed border-border-strong bg-surface-muted">
            <h3 class="mt-2 text-sm font-semibold text-fg">{title}</h3>
            {description.map(|desc| view! {
                <p class="mt-1 text-sm text-fg-muted">{desc}</p>
            })}
            {link.map(|(href, label)| view! {
                <a href=href class="mt-4 inline-block text-sm text-action-primary-bg hover:underline">
                    {label}
                </a>
            })}
        </div>
    }
}
