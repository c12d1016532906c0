use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    SuperAdmin,
    Staff,
}

/// Views and actions a role may reach from the dashboard shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    ViewDashboard,
    ManageGroups,
    ManageStaff,
    PrivateChats,
    GroupChats,
    SendBroadcasts,
    ManageDocuments,
    ViewReports,
    ManageSettings,
}

const SUPER_ADMIN_CAPABILITIES: &[Capability] = &[
    Capability::ViewDashboard,
    Capability::ManageGroups,
    Capability::ManageStaff,
    Capability::PrivateChats,
    Capability::GroupChats,
    Capability::SendBroadcasts,
    Capability::ManageDocuments,
    Capability::ViewReports,
    Capability::ManageSettings,
];

const STAFF_CAPABILITIES: &[Capability] = &[
    Capability::ViewDashboard,
    Capability::ManageGroups,
    Capability::PrivateChats,
    Capability::GroupChats,
    Capability::SendBroadcasts,
    Capability::ManageDocuments,
];

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "super_admin",
            UserRole::Staff => "staff",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "super_admin" => Some(UserRole::SuperAdmin),
            "staff" => Some(UserRole::Staff),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "Super Admin",
            UserRole::Staff => "Staff",
        }
    }

    pub fn capabilities(&self) -> &'static [Capability] {
        match self {
            UserRole::SuperAdmin => SUPER_ADMIN_CAPABILITIES,
            UserRole::Staff => STAFF_CAPABILITIES,
        }
    }

    pub fn can(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    /// Whether this role meets a view's minimum role.
    pub fn satisfies(&self, required: UserRole) -> bool {
        match required {
            UserRole::SuperAdmin => *self == UserRole::SuperAdmin,
            UserRole::Staff => true,
        }
    }
}

impl Capability {
    pub fn label(&self) -> &'static str {
        match self {
            Capability::ViewDashboard => "Dashboard overview",
            Capability::ManageGroups => "Tour groups and travellers",
            Capability::ManageStaff => "Staff accounts",
            Capability::PrivateChats => "Private chats",
            Capability::GroupChats => "Group chats",
            Capability::SendBroadcasts => "Broadcasts",
            Capability::ManageDocuments => "Documents",
            Capability::ViewReports => "Reports",
            Capability::ManageSettings => "System settings",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub identifier: String,
    pub secret: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid credentials. Please try again.")]
    InvalidCredentials,
}
