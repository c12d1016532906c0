use leptos::*;

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div role="alert" class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded">
                {move || error.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

#[component]
pub fn InlineSuccessMessage(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some() fallback=|| ()>
            <div role="status" class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
