//! Wire types shared with the tracking service
//!
//! Field names are snake_case exactly as the service emits them.

use serde::{Deserialize, Serialize};

/// Payload for registering a product with the tracking service.
///
/// Absent optional fields serialize as `null`, which is what the service
/// expects for "no target price" / "no alert email".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingRequest {
    pub url: String,
    pub target_price: Option<f64>,
    pub email: Option<String>,
}

/// A tracked product as returned by the tracking service.
///
/// Only `id` is guaranteed on a creation response; every other field
/// defaults when the service omits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub current_price: f64,
    #[serde(default)]
    pub target_price: Option<f64>,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// One sample in a product's price history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub price: f64,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_absent_fields_as_null() {
        let request = TrackingRequest {
            url: "https://www.amazon.in/dp/B0CV7KZLL4/".to_string(),
            target_price: None,
            email: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "url": "https://www.amazon.in/dp/B0CV7KZLL4/",
                "target_price": null,
                "email": null,
            })
        );
    }

    #[test]
    fn request_serializes_parsed_target_price() {
        let request = TrackingRequest {
            url: "https://example.com/item".to_string(),
            target_price: Some(11999.0),
            email: Some("you@example.com".to_string()),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["target_price"], serde_json::json!(11999.0));
        assert_eq!(json["email"], serde_json::json!("you@example.com"));
    }

    #[test]
    fn product_deserializes_from_id_alone() {
        let product: Product = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(product.id, 42);
        assert_eq!(product.name, "");
        assert_eq!(product.current_price, 0.0);
        assert_eq!(product.target_price, None);
        assert_eq!(product.last_updated, "");
        assert_eq!(product.image_url, None);
    }

    #[test]
    fn product_without_target_price_has_none() {
        let body = r#"{
            "id": 1,
            "name": "Samsung Galaxy M14",
            "url": "https://www.amazon.in/dp/B0CV7KZLL4/",
            "current_price": 11999,
            "last_updated": "2024-01-05T00:00:00",
            "image_url": null
        }"#;
        let product: Product = serde_json::from_str(body).unwrap();
        assert_eq!(product.target_price, None);
        assert_eq!(product.image_url, None);
        assert_eq!(product.current_price, 11999.0);
    }

    #[test]
    fn product_ignores_fields_it_does_not_model() {
        let body = r#"{"id": 7, "email": "you@example.com", "created_at": "2024-01-01T00:00:00"}"#;
        let product: Product = serde_json::from_str(body).unwrap();
        assert_eq!(product.id, 7);
    }

    #[test]
    fn price_point_round_trips() {
        let point = PricePoint {
            price: 12499.0,
            timestamp: "2024-01-04T00:00:00".to_string(),
        };
        let json = serde_json::to_string(&point).unwrap();
        let back: PricePoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, point);
    }
}
