//! REST client for the marketplace admin endpoints

use moderation::{EntityId, EntityKind, ModerationError, ReviewableEntity};
use serde::{de::DeserializeOwned, Serialize};

use crate::config::Config;
use crate::types::{ApproveRequest, ListResponse, RejectRequest};

/// Error type for REST operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<ClientError> for ModerationError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Network(e) if e.is_decode() => ModerationError::Decode {
                message: e.to_string(),
            },
            ClientError::Network(e) => ModerationError::network(e.to_string()),
            ClientError::Api { status, message } => ModerationError::from_status(status, message),
            ClientError::Serialization(e) => ModerationError::Decode {
                message: e.to_string(),
            },
        }
    }
}

/// Admin endpoint actions under `/admin/{vendors|companies}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    List,
    Approve,
    Reject,
}

impl Endpoint {
    pub fn path(&self, kind: EntityKind) -> String {
        let collection = kind.resource_path();
        match self {
            Endpoint::List => format!("/admin/{collection}"),
            Endpoint::Approve => format!("/admin/{collection}/approve"),
            Endpoint::Reject => format!("/admin/{collection}/reject"),
        }
    }
}

/// REST client for making requests
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl ApiClient {
    /// Create a new REST client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            auth_token: None,
        }
    }

    /// Create a client with authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Build a client from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
            auth_token: config.api_token.clone(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// List every vendor or company registration
    pub async fn list_entities(&self, kind: EntityKind) -> Result<Vec<ReviewableEntity>, ClientError> {
        let response: ListResponse<ReviewableEntity> = self.get(&Endpoint::List.path(kind)).await?;
        Ok(response.data)
    }

    /// Approve a batch of registrations in one call
    pub async fn approve(&self, kind: EntityKind, ids: &[EntityId]) -> Result<(), ClientError> {
        let body = ApproveRequest { ids: ids.to_vec() };
        self.post(&Endpoint::Approve.path(kind), &body).await
    }

    /// Reject a batch of registrations in one call
    pub async fn reject(
        &self,
        kind: EntityKind,
        ids: &[EntityId],
        reason: &str,
    ) -> Result<(), ClientError> {
        let body = RejectRequest {
            ids: ids.to_vec(),
            reason: reason.to_string(),
        };
        self.post(&Endpoint::Reject.path(kind), &body).await
    }

    async fn get<R>(&self, path: &str) -> Result<R, ClientError>
    where
        R: DeserializeOwned,
    {
        let mut req = self.client.get(self.url(path));

        if let Some(token) = &self.auth_token {
            req = req.bearer_auth(token);
        }

        let response = req.send().await?;
        let body = Self::check(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn post<B>(&self, path: &str, body: &B) -> Result<(), ClientError>
    where
        B: Serialize,
    {
        let mut req = self.client.post(self.url(path)).json(body);

        if let Some(token) = &self.auth_token {
            req = req.bearer_auth(token);
        }

        let response = req.send().await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn check(response: reqwest::Response) -> Result<String, ClientError> {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "API request failed");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(body)
    }
}
