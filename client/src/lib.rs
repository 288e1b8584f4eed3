//! Inventory Console - client application logic
//!
//! The browser front end for the inventory tracking API: session and auth
//! lifecycle, route guarding, page-level data controllers, client-side list
//! shaping and CSV export. All business logic lives in the remote API; this
//! crate only calls it.

pub mod api;
pub mod config;
pub mod error;
pub mod pages;
pub mod services;
pub mod session;
pub mod telemetry;

pub use config::Config;
pub use error::{ClientError, ClientResult};

use std::sync::Arc;

use tokio::sync::watch;

use api::ApiClient;
use session::{CredentialStore, SessionEvent, SessionStore};

/// Application context: the wired-together client
///
/// Construction restores any persisted session; teardown happens through
/// [`SessionStore::logout`] or an authentication rejection from the API.
/// Must be built inside a Tokio runtime.
pub struct App {
    pub config: Config,
    pub api: Arc<ApiClient>,
    pub session: Arc<SessionStore>,
}

impl App {
    /// Load configuration from files/environment and wire the client up
    pub fn from_env() -> ClientResult<Self> {
        let config = Config::load()?;
        Ok(Self::init(config))
    }

    pub fn init(config: Config) -> Self {
        let (events, _) = watch::channel(SessionEvent::Initial);
        let events = Arc::new(events);

        let credentials = Arc::new(CredentialStore::new(&config.session.storage_dir));
        let api = Arc::new(ApiClient::new(&config, credentials.clone(), events.clone()));
        let session = SessionStore::new(
            api.clone(),
            credentials,
            events,
            config.session.idle_timeout(),
        );

        App {
            config,
            api,
            session,
        }
    }

    /// Observe session lifecycle transitions (navigation, chrome, polling
    /// teardown all key off this)
    pub fn subscribe(&self) -> watch::Receiver<SessionEvent> {
        self.session.subscribe()
    }
}
