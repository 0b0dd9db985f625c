//! History flow state machine with a stale-result guard

use crate::types::{PricePoint, Product};

/// Fallback error text when the service supplies no detail
pub const HISTORY_ERROR_FALLBACK: &str = "Error fetching product data";

/// What the history view should render
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryState {
    Loading,
    Loaded {
        product: Product,
        history: Vec<PricePoint>,
    },
    Failed {
        message: String,
    },
}

/// State machine for the history view.
///
/// `begin` hands out a generation token; a settle carrying a stale token is
/// discarded, so a late-arriving response never overwrites the state of a
/// newer fetch (identifier change or teardown).
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryFlow {
    generation: u64,
    state: HistoryState,
}

impl Default for HistoryFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryFlow {
    pub fn new() -> Self {
        Self {
            generation: 0,
            state: HistoryState::Loading,
        }
    }

    pub fn state(&self) -> &HistoryState {
        &self.state
    }

    /// Re-enter `Loading` for a (possibly new) identifier
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = HistoryState::Loading;
        self.generation
    }

    /// Apply a fetch outcome; returns false when the token is stale
    pub fn settle(
        &mut self,
        token: u64,
        outcome: crate::Result<(Product, Vec<PricePoint>)>,
    ) -> bool {
        if token != self.generation {
            log::debug!(
                "Discarding stale history result (token {}, generation {})",
                token,
                self.generation
            );
            return false;
        }
        self.state = match outcome {
            Ok((product, history)) => HistoryState::Loaded { product, history },
            Err(error) => HistoryState::Failed {
                message: error.user_message(HISTORY_ERROR_FALLBACK),
            },
        };
        true
    }
}
