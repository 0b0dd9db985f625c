//! Top navigation bar

use leptos::prelude::*;
use leptos_router::components::A;

/// App-wide navigation: brand link home, link to the tracking form
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header style="background-color: #1976d2; color: white;">
            <nav style="max-width: 960px; margin: 0 auto; padding: 0.75rem 1rem; display: flex; align-items: center; gap: 1rem; font-family: system-ui, sans-serif;">
                <A
                    href="/"
                    attr:style="color: inherit; text-decoration: none; font-size: 1.25rem; font-weight: 600; flex-grow: 1;"
                >
                    "PricePulse"
                </A>
                <A href="/track" attr:style="color: inherit; text-decoration: none;">
                    "Track Product"
                </A>
            </nav>
        </header>
    }
}
