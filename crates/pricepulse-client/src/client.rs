//! Tracking service API client

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::io::{HttpClient, HttpResponse};
use crate::types::{PricePoint, Product, TrackingRequest};
use crate::{Result, TrackingError};

/// Error body shape used by the tracking service
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Client for the remote tracking service
#[derive(Clone)]
pub struct TrackingService {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for TrackingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackingService")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl TrackingService {
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        log::debug!("Created TrackingService at {}", base_url);
        Self { base_url, http }
    }

    /// Register a product for tracking, returning the created product
    pub async fn track(&self, request: &TrackingRequest) -> Result<Product> {
        let url = format!("{}/products/", self.base_url);
        log::debug!("POST {}", url);
        let body = serde_json::to_string(request)?;
        let response = self.http.post_json(&url, &body).await?;
        parse_response(response)
    }

    /// Fetch the product summary by id
    pub async fn product(&self, id: i64) -> Result<Product> {
        let url = format!("{}/products/{}", self.base_url, id);
        log::debug!("GET {}", url);
        let response = self.http.get(&url).await?;
        parse_response(response)
    }

    /// Fetch the ordered price-history series by id
    pub async fn history(&self, id: i64) -> Result<Vec<PricePoint>> {
        let url = format!("{}/products/{}/history", self.base_url, id);
        log::debug!("GET {}", url);
        let response = self.http.get(&url).await?;
        parse_response(response)
    }

    /// Fetch product summary and price history concurrently.
    ///
    /// All-or-nothing join: if either read fails, the whole call fails and
    /// neither partial result is surfaced.
    pub async fn product_with_history(&self, id: i64) -> Result<(Product, Vec<PricePoint>)> {
        futures::future::try_join(self.product(id), self.history(id)).await
    }
}

/// Decode a 2xx body, or surface the service's optional `detail` field
fn parse_response<T: DeserializeOwned>(response: HttpResponse) -> Result<T> {
    if !(200..300).contains(&response.status) {
        let detail = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .and_then(|body| body.detail);
        return Err(TrackingError::Api {
            status: response.status,
            detail,
        });
    }
    Ok(serde_json::from_str(&response.body)?)
}
