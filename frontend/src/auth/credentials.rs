use super::types::{AuthError, User, UserRole};

struct KnownAccount {
    email: &'static str,
    password: &'static str,
    id: &'static str,
    name: &'static str,
    mobile: &'static str,
    role: UserRole,
}

const KNOWN_ACCOUNTS: &[KnownAccount] = &[
    KnownAccount {
        email: "admin@tourmanager.com",
        password: "admin123",
        id: "1",
        name: "John Admin",
        mobile: "+1234567890",
        role: UserRole::SuperAdmin,
    },
    KnownAccount {
        email: "staff@tourmanager.com",
        password: "staff123",
        id: "2",
        name: "Sarah Staff",
        mobile: "+1234567891",
        role: UserRole::Staff,
    },
];

impl KnownAccount {
    fn to_user(&self) -> User {
        User {
            id: self.id.to_string(),
            name: self.name.to_string(),
            email: self.email.to_string(),
            mobile: self.mobile.to_string(),
            role: self.role,
        }
    }
}

/// Matches the pair against the built-in account table. Both parts compare exactly.
pub fn authenticate(identifier: &str, secret: &str) -> Result<User, AuthError> {
    KNOWN_ACCOUNTS
        .iter()
        .find(|account| account.email == identifier && account.password == secret)
        .map(KnownAccount::to_user)
        .ok_or(AuthError::InvalidCredentials)
}

/// Demo hints shown under the login form.
pub fn demo_credentials() -> impl Iterator<Item = (UserRole, &'static str, &'static str)> {
    KNOWN_ACCOUNTS
        .iter()
        .map(|account| (account.role, account.email, account.password))
}
