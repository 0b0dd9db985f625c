//! Landing page

use leptos::prelude::*;
use leptos_router::components::A;

const FEATURES: [(&str, &str); 3] = [
    (
        "Price Tracking",
        "Automatically track product prices from Amazon every 30 minutes",
    ),
    (
        "Price Alerts",
        "Get notified when prices drop below your target",
    ),
    (
        "Price Comparison",
        "Compare prices across multiple e-commerce platforms",
    ),
];

/// Landing page with the feature overview and a call to action
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <section style="text-align: center; margin-top: 2rem;">
            <h1 style="font-size: 2.5rem; margin-bottom: 0.5rem;">"Welcome to PricePulse"</h1>
            <p style="font-size: 1.25rem; color: #555; margin-bottom: 3rem;">
                "Track prices, save money, shop smarter"
            </p>
            <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 1.5rem; margin-bottom: 3rem;">
                {FEATURES
                    .iter()
                    .map(|(title, description)| {
                        view! {
                            <div style="border: 1px solid #dee2e6; border-radius: 0.5rem; padding: 1.5rem;">
                                <h3 style="margin-bottom: 0.5rem;">{*title}</h3>
                                <p style="color: #555; margin: 0;">{*description}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <A
                href="/track"
                attr:style="display: inline-block; background-color: #1976d2; color: white; padding: 0.75rem 2rem; border-radius: 0.25rem; text-decoration: none; font-size: 1.1rem;"
            >
                "Start Tracking Prices"
            </A>
        </section>
    }
}
