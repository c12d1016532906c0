pub mod admin;
pub mod dashboard;
pub mod documents;
pub mod groups;
pub mod home;
pub mod login;
pub mod messaging;
pub mod not_found;
