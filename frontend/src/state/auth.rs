use crate::{
    auth::{AuthError, LoginRequest, SessionService, User, UserRole},
    config,
};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);
pub type LoginAction = Action<LoginRequest, Result<(), AuthError>>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|user| user.role)
    }
}

fn default_service() -> SessionService {
    SessionService::from_environment(config::runtime_config().login_delay())
}

fn create_auth_context(service: &SessionService) -> AuthContext {
    create_signal(AuthState {
        user: service.restore(),
        loading: false,
    })
}

/// Restores the persisted session once and shares it, with the service that
/// mutates it, through context.
#[component]
pub fn AuthProvider(
    #[prop(optional)] service: Option<SessionService>,
    children: Children,
) -> impl IntoView {
    let service = service.unwrap_or_else(default_service);
    let ctx = create_auth_context(&service);
    provide_context(service);
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub fn use_session_service() -> SessionService {
    use_context::<SessionService>().unwrap_or_else(default_service)
}

pub async fn login_request(
    request: LoginRequest,
    service: &SessionService,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), AuthError> {
    set_auth_state.update(|state| state.loading = true);

    match service.login(&request).await {
        Ok(user) => {
            set_auth_state.update(|state| {
                state.user = Some(user);
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub fn logout(service: &SessionService, set_auth_state: WriteSignal<AuthState>) {
    set_auth_state.update(|state| {
        state.user = None;
        state.loading = false;
    });
    service.logout();
}

pub fn use_login_action() -> LoginAction {
    let (_auth, set_auth) = use_auth();
    let service = use_session_service();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let service = service.clone();
        async move { login_request(payload, &service, set_auth).await }
    })
}

pub fn use_logout() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    let service = use_session_service();
    Callback::new(move |_| logout(&service, set_auth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated());
            assert!(snapshot.user.is_none());
            assert_eq!(snapshot.role(), None);
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::auth::store::{self, MemoryStore, SessionStore, ROLE_KEY, USER_KEY};
    use crate::auth::LoginDelay;
    use crate::test_support::helpers::{staff_user, BlockedStore, RecordingNavigator};
    use crate::test_support::ssr::render_to_string;
    use std::rc::Rc;

    fn recording_service() -> (SessionService, MemoryStore, Rc<RecordingNavigator>) {
        let store = MemoryStore::new();
        let navigator = Rc::new(RecordingNavigator::default());
        let service = SessionService::new(
            Rc::new(store.clone()),
            navigator.clone(),
            LoginDelay::none(),
        );
        (service, store, navigator)
    }

    fn request(identifier: &str, secret: &str) -> LoginRequest {
        LoginRequest {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }

    #[tokio::test]
    async fn login_and_logout_update_auth_state() {
        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let (service, store, navigator) = recording_service();

        login_request(
            request("admin@tourmanager.com", "admin123"),
            &service,
            set_state,
        )
        .await
        .unwrap();

        let snapshot = state.get();
        assert!(snapshot.is_authenticated());
        assert!(!snapshot.loading);
        assert_eq!(snapshot.role(), Some(UserRole::SuperAdmin));

        logout(&service, set_state);
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated());
        assert_eq!(store.get(USER_KEY).unwrap(), None);
        assert_eq!(store.get(ROLE_KEY).unwrap(), None);
        assert_eq!(navigator.visits(), vec!["/login".to_string()]);
        runtime.dispose();
    }

    #[tokio::test]
    async fn staff_login_yields_staff_session() {
        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let (service, _store, _navigator) = recording_service();

        login_request(
            request("staff@tourmanager.com", "staff123"),
            &service,
            set_state,
        )
        .await
        .unwrap();

        assert_eq!(state.get().role(), Some(UserRole::Staff));
        runtime.dispose();
    }

    #[tokio::test]
    async fn invalid_credentials_leave_session_unset() {
        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let (service, store, _navigator) = recording_service();

        let result = login_request(
            request("admin@tourmanager.com", "staff123"),
            &service,
            set_state,
        )
        .await;

        assert_eq!(result, Err(AuthError::InvalidCredentials));
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated());
        assert!(!snapshot.loading);
        assert!(store.is_empty());
        runtime.dispose();
    }

    #[tokio::test]
    async fn blocked_storage_still_updates_in_memory_session() {
        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let navigator = Rc::new(RecordingNavigator::default());
        let service =
            SessionService::new(Rc::new(BlockedStore), navigator.clone(), LoginDelay::none());

        login_request(
            request("staff@tourmanager.com", "staff123"),
            &service,
            set_state,
        )
        .await
        .unwrap();

        assert_eq!(state.get().role(), Some(UserRole::Staff));
        assert!(navigator.visits().is_empty());
        runtime.dispose();
    }

    #[test]
    fn logout_twice_matches_logout_once() {
        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let (service, store, navigator) = recording_service();
        store::persist_session(&store, &staff_user()).unwrap();
        set_state.set(AuthState {
            user: Some(staff_user()),
            loading: false,
        });

        logout(&service, set_state);
        let once = (state.get(), store.len());
        logout(&service, set_state);
        let twice = (state.get(), store.len());

        assert_eq!(once, twice);
        assert_eq!(twice.1, 0);
        assert!(navigator.visits().iter().all(|path| path == "/login"));
        runtime.dispose();
    }

    #[test]
    fn provider_restores_persisted_session() {
        let (service, store, _navigator) = recording_service();
        store::persist_session(&store, &staff_user()).unwrap();

        let html = render_to_string(move || {
            view! {
                <AuthProvider service=service>
                    {move || {
                        let (auth, _) = use_auth();
                        auth.get_untracked()
                            .user
                            .map(|user| format!("signed-in:{}", user.name))
                            .unwrap_or_else(|| "signed-out".to_string())
                    }}
                </AuthProvider>
            }
        });
        assert!(html.contains("signed-in:Sarah Staff"));
    }

    #[test]
    fn provider_without_record_starts_signed_out() {
        let (service, _store, _navigator) = recording_service();
        let html = render_to_string(move || {
            view! {
                <AuthProvider service=service>
                    {move || {
                        let (auth, _) = use_auth();
                        if auth.get_untracked().is_authenticated() { "signed-in" } else { "signed-out" }
                    }}
                </AuthProvider>
            }
        });
        assert!(html.contains("signed-out"));
    }
}
