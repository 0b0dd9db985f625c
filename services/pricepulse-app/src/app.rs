//! Root application component and routes

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::home::Home;
use crate::components::navbar::Navbar;
use crate::components::price_history::PriceHistory;
use crate::components::track_product::TrackProduct;

/// Root component: provides the API client and mounts the router
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    #[cfg(target_arch = "wasm32")]
    {
        use pricepulse_client::TrackingService;
        use std::sync::Arc;

        let config = crate::config::Config::default();
        provide_context(TrackingService::new(
            config.api_base,
            Arc::new(crate::http::GlooHttpClient),
        ));
    }

    view! {
        <Title text="PricePulse"/>
        <Router>
            <Navbar/>
            <main style="max-width: 960px; margin: 0 auto; padding: 1rem; font-family: system-ui, sans-serif;">
                <Routes fallback=|| view! { <p>"Page not found."</p> }>
                    <Route path=path!("/") view=Home/>
                    <Route path=path!("/track") view=TrackProduct/>
                    <Route path=path!("/history/:id") view=PriceHistory/>
                </Routes>
            </main>
        </Router>
    }
}
