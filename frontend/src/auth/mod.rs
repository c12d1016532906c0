pub mod credentials;
pub mod delay;
pub mod session;
pub mod store;
pub mod types;

pub use delay::LoginDelay;
pub use session::SessionService;
pub use types::{AuthError, Capability, LoginRequest, User, UserRole};
