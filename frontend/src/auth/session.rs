use super::{
    credentials,
    delay::LoginDelay,
    store::{self, MemoryStore, SessionStore},
    types::{AuthError, LoginRequest, User},
};
use crate::utils::navigation::{HostNavigator, Navigator};
use std::rc::Rc;

pub const LOGIN_PATH: &str = "/login";

/// Owns everything login and logout touch outside the reactive state:
/// persisted identity, the post-logout navigation and the simulated latency.
#[derive(Clone)]
pub struct SessionService {
    store: Rc<dyn SessionStore>,
    navigator: Rc<dyn Navigator>,
    delay: LoginDelay,
}

impl SessionService {
    pub fn new(
        store: Rc<dyn SessionStore>,
        navigator: Rc<dyn Navigator>,
        delay: LoginDelay,
    ) -> Self {
        Self {
            store,
            navigator,
            delay,
        }
    }

    /// Browser storage and navigation on wasm, in-memory stand-ins on the host.
    pub fn from_environment(delay: LoginDelay) -> Self {
        #[cfg(target_arch = "wasm32")]
        let service = Self::new(
            Rc::new(crate::utils::storage::BrowserStore),
            Rc::new(crate::utils::navigation::BrowserNavigator),
            delay,
        );
        #[cfg(not(target_arch = "wasm32"))]
        let service = Self {
            delay,
            ..Self::in_memory()
        };
        service
    }

    /// Nothing persists past the process and logout only logs its navigation.
    pub fn in_memory() -> Self {
        Self::new(
            Rc::new(MemoryStore::new()),
            Rc::new(HostNavigator),
            LoginDelay::none(),
        )
    }

    pub fn delay(&self) -> LoginDelay {
        self.delay
    }

    pub fn restore(&self) -> Option<User> {
        let user = store::restore_session(self.store.as_ref());
        if let Some(user) = &user {
            log::info!("restored session for user {}", user.id);
        }
        user
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<User, AuthError> {
        self.delay.wait().await;
        match credentials::authenticate(&request.identifier, &request.secret) {
            Ok(user) => {
                if let Err(err) = store::persist_session(self.store.as_ref(), &user) {
                    log::warn!("session for user {} not persisted: {}", user.id, err);
                }
                log::info!("user {} logged in as {}", user.id, user.role.as_str());
                Ok(user)
            }
            Err(err) => {
                log::info!("login rejected for {}", request.identifier);
                Err(err)
            }
        }
    }

    pub fn logout(&self) {
        if let Err(err) = store::clear_session(self.store.as_ref()) {
            log::warn!("failed to clear persisted session: {}", err);
        }
        log::info!("logged out");
        self.navigator.replace(LOGIN_PATH);
    }
}
