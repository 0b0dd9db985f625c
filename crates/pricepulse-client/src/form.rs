//! Form-input parsing for the tracking form

use crate::types::TrackingRequest;

/// Raw text held by the tracking form fields.
///
/// Field contents survive a failed submission so the user can correct and
/// resubmit; only navigation away discards them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitForm {
    pub url: String,
    pub target_price: String,
    pub email: String,
}

/// Validation failures caught before any remote call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("A product URL is required")]
    EmptyUrl,

    #[error("Target price must be a number")]
    InvalidTargetPrice,
}

impl SubmitForm {
    /// Build the request payload, rejecting input the service should never
    /// see.
    ///
    /// Empty optional fields become `None`. A non-empty target price must
    /// parse as a finite number; NaN and infinities are rejected rather
    /// than transmitted.
    pub fn to_request(&self) -> std::result::Result<TrackingRequest, FormError> {
        if self.url.is_empty() {
            return Err(FormError::EmptyUrl);
        }

        let target_price = match self.target_price.trim() {
            "" => None,
            raw => match raw.parse::<f64>() {
                Ok(value) if value.is_finite() => Some(value),
                _ => return Err(FormError::InvalidTargetPrice),
            },
        };

        let email = match self.email.trim() {
            "" => None,
            raw => Some(raw.to_string()),
        };

        Ok(TrackingRequest {
            url: self.url.clone(),
            target_price,
            email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(url: &str, target_price: &str, email: &str) -> SubmitForm {
        SubmitForm {
            url: url.to_string(),
            target_price: target_price.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn empty_optional_fields_become_none() {
        let request = form("https://example.com/item", "", "").to_request().unwrap();
        assert_eq!(request.url, "https://example.com/item");
        assert_eq!(request.target_price, None);
        assert_eq!(request.email, None);
    }

    #[test]
    fn target_price_parses_to_number() {
        let request = form("https://example.com/item", "11999.5", "")
            .to_request()
            .unwrap();
        assert_eq!(request.target_price, Some(11999.5));
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let request = form("https://example.com/item", " 120 ", " you@example.com ")
            .to_request()
            .unwrap();
        assert_eq!(request.target_price, Some(120.0));
        assert_eq!(request.email, Some("you@example.com".to_string()));
    }

    #[test]
    fn non_numeric_target_price_is_rejected() {
        let error = form("https://example.com/item", "abc", "")
            .to_request()
            .unwrap_err();
        assert_eq!(error, FormError::InvalidTargetPrice);
    }

    #[test]
    fn nan_and_infinity_are_rejected() {
        assert_eq!(
            form("https://example.com/item", "NaN", "")
                .to_request()
                .unwrap_err(),
            FormError::InvalidTargetPrice
        );
        assert_eq!(
            form("https://example.com/item", "inf", "")
                .to_request()
                .unwrap_err(),
            FormError::InvalidTargetPrice
        );
    }

    #[test]
    fn negative_target_price_passes_through() {
        // No range check client-side; the service owns that policy
        let request = form("https://example.com/item", "-5", "")
            .to_request()
            .unwrap();
        assert_eq!(request.target_price, Some(-5.0));
    }

    #[test]
    fn empty_url_is_rejected() {
        assert_eq!(form("", "100", "").to_request().unwrap_err(), FormError::EmptyUrl);
    }

    #[test]
    fn email_receives_no_format_validation() {
        let request = form("https://example.com/item", "", "not-an-email")
            .to_request()
            .unwrap();
        assert_eq!(request.email, Some("not-an-email".to_string()));
    }
}
