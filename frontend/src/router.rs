use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    auth::UserRole,
    components::{guard::AccessGuard, layout::DashboardLayout},
    pages::{
        admin::{ReportsPage, SettingsPage, StaffsPage},
        dashboard::DashboardPage,
        documents::DocumentsPage,
        groups::{GroupDetailsPage, GroupsPage},
        home::HomePage,
        login::LoginPage,
        messaging::{BroadcastsPage, ChatsPage, GroupChatsPage},
        not_found::NotFoundPage,
    },
    state::auth::AuthProvider,
};

/// Static access requirements of one navigable view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewDescriptor {
    pub path: &'static str,
    pub title: &'static str,
    pub requires_auth: bool,
    pub required_role: Option<UserRole>,
}

const fn public(path: &'static str, title: &'static str) -> ViewDescriptor {
    ViewDescriptor {
        path,
        title,
        requires_auth: false,
        required_role: None,
    }
}

const fn authenticated(path: &'static str, title: &'static str) -> ViewDescriptor {
    ViewDescriptor {
        path,
        title,
        requires_auth: true,
        required_role: None,
    }
}

const fn super_admin(path: &'static str, title: &'static str) -> ViewDescriptor {
    ViewDescriptor {
        path,
        title,
        requires_auth: true,
        required_role: Some(UserRole::SuperAdmin),
    }
}

pub const LOGIN: ViewDescriptor = public("/login", "Login");
pub const DASHBOARD: ViewDescriptor = authenticated("/dashboard", "Dashboard");
pub const GROUPS: ViewDescriptor = authenticated("/groups", "Tour Groups");
pub const GROUP_DETAILS: ViewDescriptor = authenticated("/groups/:id", "Group Details");
pub const STAFFS: ViewDescriptor = super_admin("/staffs", "Staff Management");
pub const CHATS: ViewDescriptor = authenticated("/chats", "Private Chats");
pub const GROUP_CHATS: ViewDescriptor = authenticated("/groupchats", "Group Chats");
pub const BROADCASTS: ViewDescriptor = authenticated("/broadcasts", "Broadcasts");
pub const DOCUMENTS: ViewDescriptor = authenticated("/documents", "Documents");
pub const REPORTS: ViewDescriptor = super_admin("/reports", "Reports");
pub const SETTINGS: ViewDescriptor = super_admin("/settings", "Settings");
pub const NOT_FOUND: ViewDescriptor = public("/*any", "Not Found");

pub const VIEWS: &[ViewDescriptor] = &[
    LOGIN,
    DASHBOARD,
    GROUPS,
    GROUP_DETAILS,
    STAFFS,
    CHATS,
    GROUP_CHATS,
    BROADCASTS,
    DOCUMENTS,
    REPORTS,
    SETTINGS,
];

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/dashboard",
    "/groups",
    "/groups/:id",
    "/staffs",
    "/chats",
    "/groupchats",
    "/broadcasts",
    "/documents",
    "/reports",
    "/settings",
    "/*any",
];

fn segment_matches(pattern: &str, segment: &str) -> bool {
    if pattern.starts_with(':') {
        !segment.is_empty()
    } else {
        pattern == segment
    }
}

/// Resolves a concrete location path (e.g. `/groups/42`) to its descriptor.
pub fn find_view(path: &str) -> Option<&'static ViewDescriptor> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    let requested: Vec<&str> = trimmed.split('/').collect();
    VIEWS.iter().find(|view| {
        let pattern: Vec<&str> = view.path.split('/').collect();
        pattern.len() == requested.len()
            && pattern
                .iter()
                .zip(&requested)
                .all(|(pattern, segment)| segment_matches(pattern, segment))
    })
}

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/groups" view=ProtectedGroups/>
                    <Route path="/groups/:id" view=ProtectedGroupDetails/>
                    <Route path="/staffs" view=ProtectedStaffs/>
                    <Route path="/chats" view=ProtectedChats/>
                    <Route path="/groupchats" view=ProtectedGroupChats/>
                    <Route path="/broadcasts" view=ProtectedBroadcasts/>
                    <Route path="/documents" view=ProtectedDocuments/>
                    <Route path="/reports" view=ProtectedReports/>
                    <Route path="/settings" view=ProtectedSettings/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn Protected(descriptor: ViewDescriptor, children: ChildrenFn) -> impl IntoView {
    view! {
        <AccessGuard descriptor=descriptor>
            {
                let children = children.clone();
                view! { <DashboardLayout descriptor=descriptor>{children()}</DashboardLayout> }
            }
        </AccessGuard>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <Protected descriptor=DASHBOARD><DashboardPage/></Protected> }
}

#[component]
fn ProtectedGroups() -> impl IntoView {
    view! { <Protected descriptor=GROUPS><GroupsPage/></Protected> }
}

#[component]
fn ProtectedGroupDetails() -> impl IntoView {
    let params = use_params_map();
    let group_id =
        Signal::derive(move || params.with(|p| p.get("id").cloned().unwrap_or_default()));
    view! { <Protected descriptor=GROUP_DETAILS><GroupDetailsPage group_id=group_id/></Protected> }
}

#[component]
fn ProtectedStaffs() -> impl IntoView {
    view! { <Protected descriptor=STAFFS><StaffsPage/></Protected> }
}

#[component]
fn ProtectedChats() -> impl IntoView {
    view! { <Protected descriptor=CHATS><ChatsPage/></Protected> }
}

#[component]
fn ProtectedGroupChats() -> impl IntoView {
    view! { <Protected descriptor=GROUP_CHATS><GroupChatsPage/></Protected> }
}

#[component]
fn ProtectedBroadcasts() -> impl IntoView {
    view! { <Protected descriptor=BROADCASTS><BroadcastsPage/></Protected> }
}

#[component]
fn ProtectedDocuments() -> impl IntoView {
    view! { <Protected descriptor=DOCUMENTS><DocumentsPage/></Protected> }
}

#[component]
fn ProtectedReports() -> impl IntoView {
    view! { <Protected descriptor=REPORTS><ReportsPage/></Protected> }
}

#[component]
fn ProtectedSettings() -> impl IntoView {
    view! { <Protected descriptor=SETTINGS><SettingsPage/></Protected> }
}
