//! Greeting endpoint.
//!
//! Returns a fixed message, the handling instant, and the caller identity
//! forwarded by the ALB when it survives sanitization.

use axum::Json;
use chrono::{DateTime, SecondsFormat, Utc};
use http::HeaderMap;
use serde::Serialize;
use tracing::instrument;

use crate::config::GREETING_MESSAGE;
use crate::identity;

/// JSON body of `GET /`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GreetingResponse {
    pub message: &'static str,
    /// RFC 3339 instant in UTC
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authenticated_user: Option<String>,
}

impl GreetingResponse {
    pub fn new(now: DateTime<Utc>, authenticated_user: Option<String>) -> Self {
        Self {
            message: GREETING_MESSAGE,
            timestamp: now.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            authenticated_user,
        }
    }
}

/// Greeting handler. Never fails.
#[instrument(name = "greeting::index", skip_all)]
pub async fn index(headers: HeaderMap) -> Json<GreetingResponse> {
    let authenticated_user = identity::authenticated_user(&headers);
    tracing::debug!(
        identified = authenticated_user.is_some(),
        "Greeting produced"
    );

    Json(GreetingResponse::new(Utc::now(), authenticated_user))
}
