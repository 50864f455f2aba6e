//! Backend traits and the reqwest-based client implementing them.
//!
//! The populators only talk to the backend through [`RecordSink`],
//! [`CatalogStore`] and [`AccountService`], so they can be driven by an
//! in-memory implementation in tests.

use crate::error::{PopulateError, SinkError};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response, Url};
use seed_core::MemberProfile;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// Create-record endpoint: one call inserts every row in `rows`.
#[async_trait]
pub trait RecordSink: Send + Sync {
    async fn create(&self, table: &str, rows: &[Value]) -> Result<(), SinkError>;
}

/// Lookup and upsert of named rows in a small reference table.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Identifier of the row whose `name` column equals `name`.
    async fn find_id(&self, table: &str, name: &str) -> Result<Option<String>, SinkError>;

    async fn insert(&self, table: &str, row: &Value) -> Result<(), SinkError>;

    async fn update(&self, table: &str, id: &str, row: &Value) -> Result<(), SinkError>;
}

/// Signup endpoint of the authentication service.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Create an account, returning the response body.
    async fn signup(&self, member: &MemberProfile) -> Result<Value, SinkError>;
}

#[derive(Deserialize)]
struct IdRow {
    id: Value,
}

/// Client for the backend's REST data API and authentication service.
#[derive(Clone)]
pub struct RestClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl RestClient {
    /// Build a client for `base_url` (e.g. `https://project.example.co`).
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, PopulateError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let parsed =
            Url::parse(&base_url).map_err(|_| PopulateError::InvalidUrl(base_url.clone()))?;
        // Endpoint paths are appended to the base, so it must be a plain http(s) origin or path
        if !matches!(parsed.scheme(), "http" | "https")
            || parsed.host_str().map_or(true, str::is_empty)
            || parsed.query().is_some()
            || parsed.fragment().is_some()
        {
            return Err(PopulateError::InvalidUrl(base_url));
        }

        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url,
            api_key: api_key.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/rest/v1/{table}`
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    /// `{base}/auth/v1/signup`
    pub fn signup_url(&self) -> String {
        format!("{}/auth/v1/signup", self.base_url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
    }

    /// Turn a non-success response into [`SinkError::Status`], keeping the body.
    async fn check(response: Response) -> Result<Response, SinkError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(SinkError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl RecordSink for RestClient {
    async fn create(&self, table: &str, rows: &[Value]) -> Result<(), SinkError> {
        let url = self.table_url(table);
        tracing::debug!("POST {} ({} rows)", url, rows.len());

        let response = self
            .authorized(self.http.post(&url))
            .header(CONTENT_TYPE, "application/json")
            .header("Prefer", "return=minimal")
            .json(rows)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for RestClient {
    async fn find_id(&self, table: &str, name: &str) -> Result<Option<String>, SinkError> {
        let response = self
            .authorized(self.http.get(self.table_url(table)))
            .query(&[("name", format!("eq.{name}")), ("select", "id".to_string())])
            .send()
            .await?;

        let rows: Vec<IdRow> = Self::check(response).await?.json().await?;
        Ok(rows.into_iter().next().map(|row| match row.id {
            Value::String(s) => s,
            other => other.to_string(),
        }))
    }

    async fn insert(&self, table: &str, row: &Value) -> Result<(), SinkError> {
        let response = self
            .authorized(self.http.post(self.table_url(table)))
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    async fn update(&self, table: &str, id: &str, row: &Value) -> Result<(), SinkError> {
        let response = self
            .authorized(self.http.patch(self.table_url(table)))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }
}

#[async_trait]
impl AccountService for RestClient {
    async fn signup(&self, member: &MemberProfile) -> Result<Value, SinkError> {
        let response = self
            .http
            .post(self.signup_url())
            .header("apikey", &self.api_key)
            .json(member)
            .send()
            .await?;

        let response = Self::check(response).await?;
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}
