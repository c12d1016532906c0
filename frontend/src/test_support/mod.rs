#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::auth::{LoginDelay, SessionService, User, UserRole};
    use crate::auth::store::{MemoryStore, SessionStore};
    use crate::state::auth::AuthState;
    use crate::utils::navigation::Navigator;
    use leptos::*;
    use std::{cell::RefCell, rc::Rc};

    pub fn super_admin_user() -> User {
        User {
            id: "1".into(),
            name: "John Admin".into(),
            email: "admin@tourmanager.com".into(),
            mobile: "+1234567890".into(),
            role: UserRole::SuperAdmin,
        }
    }

    pub fn staff_user() -> User {
        User {
            id: "2".into(),
            name: "Sarah Staff".into(),
            email: "staff@tourmanager.com".into(),
            mobile: "+1234567891".into(),
            role: UserRole::Staff,
        }
    }

    /// Collects every replace-navigation instead of touching a browser.
    #[derive(Debug, Default)]
    pub struct RecordingNavigator {
        visits: RefCell<Vec<String>>,
    }

    impl RecordingNavigator {
        pub fn visits(&self) -> Vec<String> {
            self.visits.borrow().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn replace(&self, path: &str) {
            self.visits.borrow_mut().push(path.to_string());
        }
    }

    /// Storage that refuses every operation, like a disabled `localStorage`.
    pub struct BlockedStore;

    impl SessionStore for BlockedStore {
        fn get(&self, _key: &str) -> Result<Option<String>, String> {
            Err("blocked".into())
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), String> {
            Err("blocked".into())
        }

        fn remove(&self, _key: &str) -> Result<(), String> {
            Err("blocked".into())
        }
    }

    pub fn provide_auth(user: Option<User>) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            user,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    pub fn provide_recording_service() -> Rc<RecordingNavigator> {
        let navigator = Rc::new(RecordingNavigator::default());
        provide_context(SessionService::new(
            Rc::new(MemoryStore::new()),
            navigator.clone(),
            LoginDelay::none(),
        ));
        navigator
    }
}
