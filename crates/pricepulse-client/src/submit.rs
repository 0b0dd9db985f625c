//! Submission flow state machine
//!
//! Pure transitions over a small state enum; the form component owns one
//! `SubmitState` and feeds it events.

use crate::types::Product;

/// Fallback error text when the service supplies no detail
pub const SUBMIT_ERROR_FALLBACK: &str = "An error occurred while tracking the product";

/// Lifecycle of one tracking submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Navigated { product_id: i64 },
    Failed { message: String },
}

impl SubmitState {
    /// Whether the submit control should be disabled
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }

    /// Inline error to display, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            SubmitState::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// Events driving the submission machine
#[derive(Debug)]
pub enum SubmitEvent {
    /// The user triggered the submit action
    Begin,
    /// The creation call settled
    Settled(crate::Result<Product>),
}

/// Pure transition function: `(state, event) -> state`.
///
/// `Begin` clears any previous error or success indicator. A `Begin` while
/// already `Submitting` is ignored, as is a settle outside `Submitting`
/// (a late result after the view moved on).
pub fn submit_step(state: &SubmitState, event: SubmitEvent) -> SubmitState {
    match (state, event) {
        (SubmitState::Submitting, SubmitEvent::Settled(Ok(product))) => SubmitState::Navigated {
            product_id: product.id,
        },
        (SubmitState::Submitting, SubmitEvent::Settled(Err(error))) => SubmitState::Failed {
            message: error.user_message(SUBMIT_ERROR_FALLBACK),
        },
        (_, SubmitEvent::Begin) => SubmitState::Submitting,
        (state, SubmitEvent::Settled(_)) => state.clone(),
    }
}

/// Route for a product's history view
pub fn history_route(product_id: i64) -> String {
    format!("/history/{}", product_id)
}
