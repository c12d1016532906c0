use crate::{
    auth::credentials,
    pages::login::{
        components::messages::{InlineErrorMessage, InlineSuccessMessage},
        utils,
    },
};
use leptos::{ev::SubmitEvent, *};
use web_sys::HtmlInputElement;

#[component]
pub fn LoginForm(
    identifier: ReadSignal<String>,
    secret: ReadSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] success: Signal<Option<String>>,
    #[prop(into)] pending: Signal<bool>,
    on_identifier_input: Callback<String>,
    on_secret_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let (show_password, set_show_password) = create_signal(false);

    let demo_hints = credentials::demo_credentials()
        .map(|(role, email, password)| {
            view! {
                <p class="text-xs text-fg">
                    <strong>{role.label()}":"</strong>" "{email}" / "{password}
                </p>
            }
        })
        .collect_view();

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8 bg-surface-elevated p-8 rounded-2xl shadow-2xl">
                <div class="text-center">
                    <h1 class="text-3xl text-fg mb-2">"ILTC Travels"</h1>
                    <p class="text-fg-muted">"Admin/Staff Login"</p>
                </div>
                <form class="space-y-5" on:submit=move |ev| on_submit.call(ev)>
                    <div>
                        <label for="identifier" class="block text-sm text-fg mb-1">"Email or Mobile"</label>
                        <input
                            id="identifier"
                            name="identifier"
                            type="text"
                            required
                            class="block w-full px-3 py-2 border border-border rounded-md text-fg"
                            placeholder="Enter your email or mobile"
                            prop:value=identifier
                            on:input=move |ev| {
                                let target = event_target::<HtmlInputElement>(&ev);
                                on_identifier_input.call(target.value());
                            }
                        />
                    </div>
                    <div class="relative">
                        <label for="secret" class="block text-sm text-fg mb-1">"Password"</label>
                        <input
                            id="secret"
                            name="secret"
                            type=move || if show_password.get() { "text" } else { "password" }
                            required
                            class="block w-full px-3 py-2 pr-10 border border-border rounded-md text-fg"
                            placeholder="Enter your password"
                            prop:value=secret
                            on:input=move |ev| {
                                let target = event_target::<HtmlInputElement>(&ev);
                                on_secret_input.call(target.value());
                            }
                        />
                        <button
                            type="button"
                            class="absolute right-3 top-[34px] text-xs text-fg-muted hover:text-fg"
                            aria-label="Toggle password visibility"
                            on:click=move |_| set_show_password.update(|shown| *shown = !*shown)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>

                    <InlineErrorMessage error=error />
                    <InlineSuccessMessage message=success />

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 rounded-md text-action-primary-text bg-action-primary-bg disabled:opacity-50"
                    >
                        {move || utils::submit_label(pending.get())}
                    </button>
                </form>
                <div class="p-4 bg-surface-muted rounded-lg">
                    <p class="text-xs text-fg-muted mb-2">"Demo Credentials:"</p>
                    {demo_hints}
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn render(pending: bool, error: Option<&str>) -> String {
        let error = error.map(str::to_string);
        render_to_string(move || {
            let (identifier, _) = create_signal(String::new());
            let (secret, _) = create_signal(String::new());
            let error = create_rw_signal(error);
            let success = create_rw_signal(None::<String>);
            let pending = create_rw_signal(pending);
            view! {
                <LoginForm
                    identifier=identifier
                    secret=secret
                    error=error
                    success=success
                    pending=pending
                    on_identifier_input=Callback::new(|_| {})
                    on_secret_input=Callback::new(|_| {})
                    on_submit=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn renders_fields_and_demo_credentials() {
        let html = render(false, None);
        assert!(html.contains("Email or Mobile"));
        assert!(html.contains("admin@tourmanager.com"));
        assert!(html.contains("staff@tourmanager.com"));
        assert!(!html.contains("Logging in..."));
    }

    #[test]
    fn pending_state_changes_button_label() {
        let html = render(true, None);
        assert!(html.contains("Logging in..."));
    }

    #[test]
    fn shows_failure_notice() {
        let html = render(false, Some("Invalid credentials. Please try again."));
        assert!(html.contains("Invalid credentials. Please try again."));
    }
}
