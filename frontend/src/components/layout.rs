use crate::{
    components::guard::can_open,
    router::{
        ViewDescriptor, BROADCASTS, CHATS, DASHBOARD, DOCUMENTS, GROUPS, GROUP_CHATS, REPORTS,
        SETTINGS, STAFFS,
    },
    state::auth::{self, use_auth},
};
use leptos::*;
use leptos_meta::Title;

pub struct NavItem {
    pub label: &'static str,
    pub descriptor: ViewDescriptor,
}

const fn item(label: &'static str, descriptor: ViewDescriptor) -> NavItem {
    NavItem { label, descriptor }
}

pub const NAV_ITEMS: &[NavItem] = &[
    item("Dashboard", DASHBOARD),
    item("Groups", GROUPS),
    item("Staffs", STAFFS),
    item("Individual Chats", CHATS),
    item("Group Chats", GROUP_CHATS),
    item("Broadcasts", BROADCASTS),
    item("Documents", DOCUMENTS),
    item("Reports", REPORTS),
    item("Settings", SETTINGS),
];

/// Nested views (e.g. `/groups/:id`) highlight their parent entry.
fn is_active(item: &ViewDescriptor, current: &ViewDescriptor) -> bool {
    current.path == item.path
        || current
            .path
            .strip_prefix(item.path)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Left margin of the content column, tracking the sidebar width.
fn content_offset(collapsed: bool) -> &'static str {
    if collapsed {
        "ml-20 transition-all duration-300"
    } else {
        "ml-64 transition-all duration-300"
    }
}

#[component]
pub fn Sidebar(
    current: ViewDescriptor,
    collapsed: ReadSignal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    let (auth, _) = use_auth();
    let on_logout = auth::use_logout();

    let panel_label = move || match auth.get().role() {
        Some(crate::auth::UserRole::SuperAdmin) => "Super Admin",
        _ => "Staff Panel",
    };
    let visible_items = move || {
        let state = auth.get();
        NAV_ITEMS
            .iter()
            .filter(|item| can_open(state.user.as_ref(), &item.descriptor))
            .map(|item| {
                let class = if is_active(&item.descriptor, &current) {
                    "flex items-center gap-3 px-4 py-3 rounded-lg bg-action-primary-bg text-action-primary-text"
                } else {
                    "flex items-center gap-3 px-4 py-3 rounded-lg text-fg-muted hover:bg-action-ghost-bg-hover"
                };
                view! {
                    <a href=item.descriptor.path class=class title=item.label>
                        <Show when=move || !collapsed.get()>
                            <span>{item.label}</span>
                        </Show>
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <aside class=move || {
            if collapsed.get() {
                "fixed left-0 top-0 h-screen w-20 bg-surface-elevated border-r border-border"
            } else {
                "fixed left-0 top-0 h-screen w-64 bg-surface-elevated border-r border-border"
            }
        }>
            <div class="flex flex-col h-full">
                <div class="p-6 border-b border-border flex items-center justify-between">
                    <Show when=move || !collapsed.get()>
                        <div>
                            <h1 class="text-xl text-fg">"ILTC Travels"</h1>
                            <p class="text-xs text-fg-muted mt-1">{panel_label}</p>
                        </div>
                    </Show>
                    <button
                        class="p-2 rounded-lg ml-auto hover:bg-action-ghost-bg-hover"
                        aria-label="Toggle sidebar"
                        on:click=move |_| on_toggle.call(())
                    >
                        {move || if collapsed.get() { "»" } else { "«" }}
                    </button>
                </div>
                <nav class="flex-1 p-4 space-y-2 overflow-y-auto">{visible_items}</nav>
                <div class="p-4 border-t border-border">
                    <button
                        class="w-full text-left px-4 py-3 rounded-lg text-fg-muted hover:bg-action-ghost-bg-hover"
                        on:click=move |_| on_logout.call(())
                    >
                        "Logout"
                    </button>
                </div>
            </div>
        </aside>
    }
}

#[component]
pub fn Header(#[prop(into)] title: String) -> impl IntoView {
    let (auth, _) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let on_logout = auth::use_logout();

    let user_name = move || auth.get().user.map(|user| user.name).unwrap_or_default();
    let role_label = move || auth.get().role().map(|role| role.label()).unwrap_or_default();

    view! {
        <header class="bg-surface-elevated border-b border-border px-8 py-4 flex items-center justify-between">
            <h2 class="text-2xl text-fg">{title}</h2>
            <div class="relative">
                <button
                    type="button"
                    class="flex items-center gap-3 px-4 py-2 rounded-lg hover:bg-action-ghost-bg-hover"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    aria-expanded=move || menu_open.get()
                >
                    <div class="text-left">
                        <p class="text-sm text-fg">{user_name}</p>
                        <p class="text-xs text-fg-muted">{role_label}</p>
                    </div>
                </button>
                <Show when=move || menu_open.get()>
                    <div class="absolute right-0 mt-2 w-48 bg-surface-elevated rounded-lg shadow-lg border border-border py-2 z-20">
                        <button
                            class="w-full px-4 py-2 text-left text-sm text-status-error-text hover:bg-action-ghost-bg-hover"
                            on:click=move |_| {
                                set_menu_open.set(false);
                                on_logout.call(());
                            }
                        >
                            "Logout"
                        </button>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn DashboardLayout(descriptor: ViewDescriptor, children: Children) -> impl IntoView {
    let (collapsed, set_collapsed) = create_signal(false);
    let toggle = Callback::new(move |_| set_collapsed.update(|value| *value = !*value));
    view! {
        <Title text=format!("{} | ILTC Travels", descriptor.title)/>
        <div class="min-h-screen bg-surface">
            <Sidebar current=descriptor collapsed=collapsed on_toggle=toggle/>
            <div class=move || content_offset(collapsed.get())>
                <Header title=descriptor.title/>
                <main class="p-8">{children()}</main>
            </div>
        </div>
    }
}
