//! Price-history view for a tracked product

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use pricepulse_client::chart::derive_series;
use pricepulse_client::history::{HistoryFlow, HistoryState};
use pricepulse_client::{TrackingError, TrackingService};

use crate::components::price_card::PriceCard;
use crate::components::price_chart::PriceChart;

const ALERT_ERROR_STYLE: &str = "padding: 0.75rem 1rem; border-radius: 0.25rem; color: #721c24; background-color: #f8d7da;";

/// History view: loads product summary and price history for the routed id.
///
/// The two fetches run concurrently and settle as one unit; an identifier
/// change re-enters loading, and the generation token inside `HistoryFlow`
/// keeps a late response from overwriting the newer fetch.
#[component]
pub fn PriceHistory() -> impl IntoView {
    let service = expect_context::<TrackingService>();
    let params = use_params_map();
    let product_id = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    });

    let flow = RwSignal::new(HistoryFlow::new());

    Effect::new(move |_| {
        let id = product_id.get();
        let token = flow.try_update(|f| f.begin()).unwrap_or_default();
        let Some(id) = id else {
            // Route parameter is not a product id; no remote call to make
            flow.update(|f| {
                f.settle(
                    token,
                    Err(TrackingError::Http("missing product id".to_string())),
                );
            });
            return;
        };
        let service = service.clone();
        leptos::task::spawn_local(async move {
            let outcome = service.product_with_history(id).await;
            // The view may already be gone when the response lands; a stale
            // token is additionally discarded by the flow itself
            flow.try_update(|f| {
                f.settle(token, outcome);
            });
        });
    });

    view! {
        <section style="margin-top: 2rem;">
            {move || match flow.with(|f| f.state().clone()) {
                HistoryState::Loading => {
                    view! { <p style="text-align: center;">"Loading price history..."</p> }
                        .into_any()
                }
                HistoryState::Failed { message } => {
                    view! { <p style=ALERT_ERROR_STYLE>{message}</p> }.into_any()
                }
                HistoryState::Loaded { product, history } => {
                    let series = derive_series(&history);
                    view! {
                        <h1>{product.name.clone()}</h1>
                        <div style="display: grid; grid-template-columns: 2fr 1fr; gap: 1.5rem; align-items: start;">
                            <PriceChart series=series/>
                            <PriceCard product=product/>
                        </div>
                        <ComparisonPlaceholder/>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

/// Placeholder for the unimplemented multi-platform comparison
#[component]
fn ComparisonPlaceholder() -> impl IntoView {
    view! {
        <div style="border: 1px solid #dee2e6; border-radius: 0.5rem; padding: 1.5rem; margin-top: 1.5rem;">
            <h2 style="margin-top: 0;">
                "Multi-Platform Price Comparison " <span style="color: #888;">"(Coming Soon)"</span>
            </h2>
            <p style="color: #555; margin: 0;">
                "Soon you'll be able to compare prices for this product across Flipkart, Meesho, BigBasket, and more using AI-powered search!"
            </p>
        </div>
    }
}
