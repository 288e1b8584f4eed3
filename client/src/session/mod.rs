//! Session and authentication store
//!
//! Holds the current user and token, restores them from the credential store
//! at startup, and owns the inactivity timer that signs idle inventory
//! sessions out. Admin sessions are explicitly exempt from the idle timer.
//!
//! Session invalidation has a second, redundant path: the API client clears
//! the credential store and broadcasts [`SessionEvent::SignedOut`] whenever a
//! request comes back with an authentication rejection. Both paths leave the
//! process in the same signed-out state, and both are idempotent.

mod guard;
mod storage;

pub use guard::{check_route, Route, RouteAccess};
pub use storage::CredentialStore;

use std::sync::{Arc, Mutex, RwLock, Weak};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use shared::models::{AuthUser, Session, UserRole};

use crate::api::{auth, ApiClient};

/// Session lifecycle transitions, broadcast to anything that needs to react
/// (navigation, layout chrome, polling teardown)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// No transition has happened yet
    Initial,
    SignedIn(UserRole),
    /// The session ended; the UI must navigate to the login screen
    SignedOut,
}

struct IdleTimer {
    deadline: Arc<Mutex<Instant>>,
    task: JoinHandle<()>,
}

/// Process-wide session state with an injected lifecycle
///
/// Must be constructed inside a Tokio runtime; the store spawns its idle
/// timer and sign-out watcher as background tasks.
pub struct SessionStore {
    api: Arc<ApiClient>,
    credentials: Arc<CredentialStore>,
    events: Arc<watch::Sender<SessionEvent>>,
    state: RwLock<Option<Session>>,
    idle_timeout: Duration,
    idle: Mutex<Option<IdleTimer>>,
    self_weak: Weak<SessionStore>,
}

impl SessionStore {
    /// Build the store, restoring any persisted session
    pub fn new(
        api: Arc<ApiClient>,
        credentials: Arc<CredentialStore>,
        events: Arc<watch::Sender<SessionEvent>>,
        idle_timeout: Duration,
    ) -> Arc<Self> {
        let restored = credentials.load();

        let store = Arc::new_cyclic(|weak| Self {
            api: api.clone(),
            credentials,
            events,
            state: RwLock::new(restored.clone()),
            idle_timeout,
            idle: Mutex::new(None),
            self_weak: weak.clone(),
        });

        if let Some(session) = restored {
            tracing::info!(username = %session.user.username, "restored persisted session");
            api.set_token(Some(session.token));
            if session.user.role == UserRole::Inventory {
                store.arm_idle_timer();
            }
        }

        store.spawn_signout_watcher();
        store
    }

    /// Snapshot of the live session, if any
    pub fn session(&self) -> Option<Session> {
        self.state.read().ok().and_then(|state| state.clone())
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.session().map(|session| session.user)
    }

    pub fn token(&self) -> Option<String> {
        self.session().map(|session| session.token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    /// Subscribe to session lifecycle transitions
    pub fn subscribe(&self) -> watch::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Exchange credentials for a session. Returns whether it succeeded;
    /// failures are logged and surfaced to the login form, never thrown.
    pub async fn login(&self, username: &str, password: &str) -> bool {
        match auth::login(&self.api, username, password).await {
            Ok(response) => {
                let session = Session {
                    token: response.token,
                    user: response.user,
                };
                if let Err(err) = self.credentials.save(&session) {
                    tracing::error!(error = %err, "failed to persist session");
                }
                self.api.set_token(Some(session.token.clone()));
                let role = session.user.role;
                if let Ok(mut state) = self.state.write() {
                    *state = Some(session);
                }
                if role == UserRole::Inventory {
                    self.arm_idle_timer();
                } else {
                    self.cancel_idle_timer();
                }
                let _ = self.events.send(SessionEvent::SignedIn(role));
                tracing::info!(%username, role = role.as_str(), "signed in");
                true
            }
            Err(err) => {
                tracing::warn!(%username, error = %err, "login failed");
                false
            }
        }
    }

    /// End the session: clear memory and durable storage, cancel the idle
    /// timer, and broadcast the forced navigation to the login screen.
    /// Calling this on an already signed-out store is a no-op with the same
    /// resulting state.
    pub fn logout(&self) {
        if let Ok(mut state) = self.state.write() {
            if state.take().is_some() {
                tracing::info!("signed out");
            }
        }
        if let Err(err) = self.credentials.clear() {
            tracing::error!(error = %err, "failed to clear credential store");
        }
        self.api.set_token(None);
        self.cancel_idle_timer();
        let _ = self.events.send(SessionEvent::SignedOut);
    }

    /// A qualifying user-interaction event occurred (the host UI maps mouse
    /// movement, key presses, clicks and scrolling here). Resets the idle
    /// countdown for inventory sessions; admin sessions ignore it.
    pub fn record_activity(&self) {
        if !matches!(self.current_role(), Some(UserRole::Inventory)) {
            return;
        }

        let mut reset = false;
        if let Ok(slot) = self.idle.lock() {
            if let Some(timer) = slot.as_ref() {
                if let Ok(mut deadline) = timer.deadline.lock() {
                    *deadline = Instant::now() + self.idle_timeout;
                    reset = true;
                }
            }
        }
        if !reset {
            self.arm_idle_timer();
        }
    }

    fn current_role(&self) -> Option<UserRole> {
        self.session().map(|session| session.user.role)
    }

    fn arm_idle_timer(&self) {
        let deadline = Arc::new(Mutex::new(Instant::now() + self.idle_timeout));
        let task_deadline = deadline.clone();
        let weak = self.self_weak.clone();

        let task = tokio::spawn(async move {
            loop {
                let next = match task_deadline.lock() {
                    Ok(guard) => *guard,
                    Err(_) => break,
                };
                tokio::time::sleep_until(next).await;

                let expired = match task_deadline.lock() {
                    Ok(guard) => Instant::now() >= *guard,
                    Err(_) => break,
                };
                if expired {
                    if let Some(store) = weak.upgrade() {
                        tracing::info!("inactivity window elapsed, signing out");
                        store.logout();
                    }
                    break;
                }
            }
        });

        if let Ok(mut slot) = self.idle.lock() {
            if let Some(previous) = slot.replace(IdleTimer { deadline, task }) {
                previous.task.abort();
            }
        }
    }

    fn cancel_idle_timer(&self) {
        if let Ok(mut slot) = self.idle.lock() {
            if let Some(timer) = slot.take() {
                timer.task.abort();
            }
        }
    }

    /// Drop local state after the API client already invalidated the
    /// session. Storage is clear by then; re-broadcasting would loop.
    fn clear_local_state(&self) {
        if let Ok(mut state) = self.state.write() {
            state.take();
        }
        self.cancel_idle_timer();
    }

    fn spawn_signout_watcher(&self) {
        let mut receiver = self.events.subscribe();
        let weak = self.self_weak.clone();
        tokio::spawn(async move {
            while receiver.changed().await.is_ok() {
                let signed_out = *receiver.borrow() == SessionEvent::SignedOut;
                if signed_out {
                    match weak.upgrade() {
                        Some(store) => store.clear_local_state(),
                        None => break,
                    }
                }
            }
        });
    }
}

impl Drop for SessionStore {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.idle.lock() {
            if let Some(timer) = slot.take() {
                timer.task.abort();
            }
        }
    }
}
