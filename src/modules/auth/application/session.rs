use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{info, warn};

use crate::auth::application::domain::demo::{demo_token, is_demo_token, DemoCredentials};
use crate::auth::application::domain::entities::{AuthPhase, LoginRequest, User};
use crate::auth::application::ports::outgoing::credential_store::{CredentialBlob, CredentialStore};
use crate::content::application::ports::outgoing::token_source::TokenSource;
use crate::modules::api::application::PortfolioApi;
use crate::shared::loading::LoadingGuard;

#[derive(Debug, Clone)]
struct SessionState {
    user: Option<User>,
    token: Option<String>,
    phase: AuthPhase,
}

/// In-memory admin session, mirrored into a `CredentialStore`.
///
/// A session is authenticated iff it holds a user. The credential blob is
/// written on every successful login and wiped on logout or when the stored
/// token no longer verifies.
///
/// Concurrent `login` calls are not serialized; whichever resolves last wins.
pub struct AuthSession {
    api: PortfolioApi,
    store: Arc<dyn CredentialStore>,
    demo: Option<DemoCredentials>,
    state: RwLock<SessionState>,
    in_flight: AtomicUsize,
}

impl AuthSession {
    /// `demo` enables the demo login fallback; pass `None` for real deployments.
    pub fn new(
        api: PortfolioApi,
        store: Arc<dyn CredentialStore>,
        demo: Option<DemoCredentials>,
    ) -> Self {
        Self {
            api,
            store,
            demo,
            state: RwLock::new(SessionState {
                user: None,
                token: None,
                phase: AuthPhase::Uninitialized,
            }),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Replay the credential blob and re-validate its token with the backend.
    pub async fn initialize(&self) -> AuthPhase {
        let _loading = LoadingGuard::new(&self.in_flight);
        self.write_state().phase = AuthPhase::Verifying;

        let blob = CredentialBlob::new(self.store.as_ref());
        let saved = blob.user().zip(blob.token());

        let phase = match saved {
            Some((_, saved_token)) => {
                let response = self.api.verify_token(&saved_token).await;
                match response.data {
                    Some(payload) if response.success => {
                        info!("Restored session for {}", payload.user.email);
                        let mut state = self.write_state();
                        state.user = Some(payload.user);
                        state.token = Some(saved_token);
                        AuthPhase::Authenticated
                    }
                    _ => {
                        warn!(
                            "Stored token rejected, clearing credentials: {}",
                            response.error.as_deref().unwrap_or("no user returned")
                        );
                        blob.clear();
                        AuthPhase::Anonymous
                    }
                }
            }
            None => {
                // Drop half-written leftovers.
                blob.clear();
                AuthPhase::Anonymous
            }
        };

        self.write_state().phase = phase;
        phase
    }

    pub async fn login(&self, email: &str, password: &str) -> bool {
        let _loading = LoadingGuard::new(&self.in_flight);
        self.attempt_login(email, password).await
    }

    async fn attempt_login(&self, email: &str, password: &str) -> bool {
        let request = match LoginRequest::new(email, password) {
            Ok(request) => request,
            Err(e) => {
                warn!("Login rejected before sending: {}", e);
                return false;
            }
        };

        let response = self.api.login(&request).await;
        if let (true, Some(payload)) = (response.success, response.data) {
            info!("Logged in as {}", payload.user.email);
            self.commit(payload.user, payload.token);
            return true;
        }

        if let Some(demo) = self.demo.as_ref().filter(|d| d.matches(email, password)) {
            warn!(
                "Login failed ({}), falling back to demo credentials",
                response.error.as_deref().unwrap_or("no payload")
            );
            self.commit(demo.user(), demo_token());
            return true;
        }

        warn!(
            "Login failed for {}: {}",
            request.email(),
            response.error.as_deref().unwrap_or("no payload")
        );
        false
    }

    /// Best-effort server-side invalidation, then an unconditional local clear.
    pub async fn logout(&self) {
        let token = self.read_state().token.clone();

        if let Some(token) = token.filter(|t| !is_demo_token(t)) {
            let response = self.api.logout(&token).await;
            if !response.success {
                warn!(
                    "Logout error: {}",
                    response.error.as_deref().unwrap_or("unknown")
                );
            }
        }

        CredentialBlob::new(self.store.as_ref()).clear();

        let mut state = self.write_state();
        state.user = None;
        state.token = None;
        state.phase = AuthPhase::Anonymous;
        info!("Logged out");
    }

    pub fn current_user(&self) -> Option<User> {
        self.read_state().user.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.read_state().token.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read_state().user.is_some()
    }

    /// True before `initialize` has run and while any call is in flight.
    pub fn is_loading(&self) -> bool {
        self.read_state().phase == AuthPhase::Uninitialized
            || self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub fn phase(&self) -> AuthPhase {
        self.read_state().phase
    }

    fn commit(&self, user: User, token: String) {
        CredentialBlob::new(self.store.as_ref()).save(&user, &token);

        let mut state = self.write_state();
        state.user = Some(user);
        state.token = Some(token);
        state.phase = AuthPhase::Authenticated;
    }

    fn read_state(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TokenSource for AuthSession {
    fn current_token(&self) -> Option<String> {
        self.token()
    }
}
