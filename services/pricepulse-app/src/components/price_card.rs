//! Current/target price card

use leptos::prelude::*;

use pricepulse_client::chart::format_date_time;
use pricepulse_client::types::Product;

/// Price summary beside the chart.
///
/// The target-price block and the product image render only when present
/// on the product; an absent target price shows nothing, not zero.
#[component]
pub fn PriceCard(product: Product) -> impl IntoView {
    view! {
        <div style="border: 1px solid #dee2e6; border-radius: 0.5rem; padding: 1.5rem;">
            {product
                .image_url
                .clone()
                .map(|src| {
                    view! {
                        <img
                            src=src
                            alt=product.name.clone()
                            style="width: 100%; max-height: 200px; object-fit: contain; margin-bottom: 1rem;"
                        />
                    }
                })}
            <h3 style="margin: 0 0 0.25rem 0;">"Current Price"</h3>
            <p style="font-size: 1.75rem; color: #1976d2; margin: 0 0 1rem 0;">
                {format!("₹{}", product.current_price)}
            </p>
            {product
                .target_price
                .map(|target| {
                    view! {
                        <h3 style="margin: 0 0 0.25rem 0;">"Target Price"</h3>
                        <p style="font-size: 1.75rem; color: #9c27b0; margin: 0 0 1rem 0;">
                            {format!("₹{}", target)}
                        </p>
                    }
                })}
            <p style="color: #777; font-size: 0.85rem; margin: 0;">
                {format!("Last updated: {}", format_date_time(&product.last_updated))}
            </p>
        </div>
    }
}
