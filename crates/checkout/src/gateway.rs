//! Order submission gateway.
//!
//! [`OrderGateway`] is the single remote collaborator of the checkout flow:
//! one call per accepted submit, carrying the full [`OrderRequest`]. The
//! production implementation posts JSON to the order API over `reqwest`;
//! tests swap in scripted stubs.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use tracing::instrument;

use mango_chili_core::{OrderReceipt, OrderRequest};

/// Errors from the order API boundary.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The request never got a usable response.
    #[error("order API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("order API rejected the order (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },

    /// The success response body did not parse as a receipt.
    #[error("order API response malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Remote order submission.
pub trait OrderGateway {
    /// Submit an order, resolving to a receipt on success.
    fn place_order(
        &self,
        order: &OrderRequest,
    ) -> impl Future<Output = Result<OrderReceipt, GatewayError>> + Send;
}

/// Connection settings for the order API.
///
/// Implements `Debug` manually to redact the access token.
#[derive(Clone)]
pub struct OrderApiConfig {
    /// Full URL of the order submission endpoint.
    pub endpoint: String,
    /// Bearer token for the order API.
    pub access_token: SecretString,
}

impl std::fmt::Debug for OrderApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderApiConfig")
            .field("endpoint", &self.endpoint)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

/// HTTP client for the order API.
///
/// Cheaply cloneable; the `reqwest::Client` and settings live behind an `Arc`.
#[derive(Clone)]
pub struct HttpOrderGateway {
    inner: Arc<HttpOrderGatewayInner>,
}

struct HttpOrderGatewayInner {
    client: reqwest::Client,
    endpoint: String,
    access_token: String,
}

impl HttpOrderGateway {
    /// Create a new gateway from connection settings.
    #[must_use]
    pub fn new(config: &OrderApiConfig) -> Self {
        Self {
            inner: Arc::new(HttpOrderGatewayInner {
                client: reqwest::Client::new(),
                endpoint: config.endpoint.clone(),
                access_token: config.access_token.expose_secret().to_string(),
            }),
        }
    }
}

impl OrderGateway for HttpOrderGateway {
    #[instrument(skip(self, order), fields(endpoint = %self.inner.endpoint))]
    async fn place_order(&self, order: &OrderRequest) -> Result<OrderReceipt, GatewayError> {
        let response = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .bearer_auth(&self.inner.access_token)
            .json(order)
            .send()
            .await?;

        let status = response.status();
        // Body as text first for better diagnostics on parse failure.
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "order API returned non-success status"
            );
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let receipt: OrderReceipt = serde_json::from_str(&body).inspect_err(|error| {
            tracing::error!(
                %error,
                body = %body.chars().take(500).collect::<String>(),
                "failed to parse order API response"
            );
        })?;

        tracing::info!(order_id = %receipt.order_id, "order placed");
        Ok(receipt)
    }
}
