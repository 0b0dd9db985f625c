//! Browser fetch implementation of the HTTP seam

use async_trait::async_trait;
use gloo_net::http::Request;

use pricepulse_client::io::{HttpClient, HttpResponse};
use pricepulse_client::{Result, TrackingError};

/// Production HTTP client backed by the browser fetch API
#[derive(Debug, Default)]
pub struct GlooHttpClient;

#[async_trait(?Send)]
impl HttpClient for GlooHttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        log::debug!("GET {}", url);
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| TrackingError::Http(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TrackingError::Http(format!("Reading response body: {}", e)))?;

        log::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(HttpResponse { status, body })
    }

    async fn post_json(&self, url: &str, body: &str) -> Result<HttpResponse> {
        log::debug!("POST {}", url);
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| TrackingError::Http(format!("POST {} failed: {}", url, e)))?
            .send()
            .await
            .map_err(|e| TrackingError::Http(format!("POST {} failed: {}", url, e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TrackingError::Http(format!("Reading response body: {}", e)))?;

        log::debug!("POST {} -> {} ({} bytes)", url, status, text.len());
        Ok(HttpResponse { status, body: text })
    }
}
