//! HTTP API client
//!
//! Every network call in the console goes through [`ApiClient`]: it joins
//! paths to the configured base URL, attaches the bearer token once one is
//! present, and treats any authentication rejection as a global
//! session-invalidation signal. The credential store is cleared and a
//! sign-out is broadcast before the error reaches the caller.

pub mod auth;
pub mod dashboard;
pub mod discrepancies;
pub mod inwards;
pub mod items;
pub mod notifications;
pub mod outwards;
pub mod vendors;

use std::sync::{Arc, RwLock};

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::session::{CredentialStore, SessionEvent};

/// Error payload shape the API uses for non-success responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Envelope used by the discrepancy list endpoints
#[derive(Debug, Deserialize)]
pub struct ListEnvelope<T> {
    pub data: Vec<T>,
}

/// The single HTTP client wrapping every call to the remote API
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
    credentials: Arc<CredentialStore>,
    events: Arc<watch::Sender<SessionEvent>>,
}

impl ApiClient {
    pub fn new(
        config: &Config,
        credentials: Arc<CredentialStore>,
        events: Arc<watch::Sender<SessionEvent>>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
            credentials,
            events,
        }
    }

    /// Replace the bearer token attached to subsequent requests
    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = token;
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.send(self.http.get(self.url(path))).await?;
        Ok(response.json().await?)
    }

    pub async fn get_with<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        let response = self
            .send(self.http.get(self.url(path)).query(query))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .send(self.http.post(self.url(path)).json(body))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<()> {
        self.send(self.http.post(self.url(path)).json(body))
            .await
            .map(drop)
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<()> {
        self.send(self.http.put(self.url(path)).json(body))
            .await
            .map(drop)
    }

    /// PUT without a body (soft-delete, restore, mark-read style endpoints)
    pub async fn put_empty(&self, path: &str) -> ClientResult<()> {
        self.send(self.http.put(self.url(path))).await.map(drop)
    }

    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<()> {
        self.send(self.http.patch(self.url(path)).json(body))
            .await
            .map(drop)
    }

    async fn send(&self, builder: RequestBuilder) -> ClientResult<Response> {
        let builder = match self.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            self.invalidate_session();
            return Err(ClientError::SessionRejected);
        }

        if !status.is_success() {
            let message = Self::error_message(response).await.unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    async fn error_message(response: Response) -> Option<String> {
        let body = response.text().await.ok()?;
        let parsed: ErrorBody = serde_json::from_str(&body).ok()?;
        parsed.message.or(parsed.error)
    }

    /// The second enforcement path: an authentication rejection anywhere
    /// clears durable state and forces navigation to the login screen,
    /// identically to an explicit logout.
    fn invalidate_session(&self) {
        tracing::warn!("authentication rejected, clearing session");
        if let Err(err) = self.credentials.clear() {
            tracing::error!(error = %err, "failed to clear credential store");
        }
        self.set_token(None);
        let _ = self.events.send(SessionEvent::SignedOut);
    }
}
