//! Product tracking form

use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use pricepulse_client::form::SubmitForm;
use pricepulse_client::submit::{history_route, submit_step, SubmitEvent, SubmitState};
use pricepulse_client::TrackingService;

const FIELD_STYLE: &str = "display: block; width: 100%; box-sizing: border-box; padding: 0.5rem; margin-top: 0.25rem; border: 1px solid #ced4da; border-radius: 0.25rem; font-size: 1rem;";
const LABEL_STYLE: &str = "display: block; margin-bottom: 1rem; text-align: left; color: #333;";
const ALERT_ERROR_STYLE: &str = "margin-top: 1rem; padding: 0.75rem 1rem; border-radius: 0.25rem; color: #721c24; background-color: #f8d7da;";
const ALERT_SUCCESS_STYLE: &str = "margin-top: 1rem; padding: 0.75rem 1rem; border-radius: 0.25rem; color: #155724; background-color: #d4edda;";

/// Tracking form: collects url/target price/email and registers the product.
///
/// One remote call per submit; field contents survive a failure so the user
/// can correct and resubmit.
#[component]
pub fn TrackProduct() -> impl IntoView {
    let service = expect_context::<TrackingService>();
    let navigate = use_navigate();

    let url = RwSignal::new(String::new());
    let target_price = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let state = RwSignal::new(SubmitState::Idle);

    let on_submit = move |event: ev::SubmitEvent| {
        event.prevent_default();
        if state.with_untracked(|s| s.is_submitting()) {
            return;
        }

        let form = SubmitForm {
            url: url.get_untracked(),
            target_price: target_price.get_untracked(),
            email: email.get_untracked(),
        };
        let request = match form.to_request() {
            Ok(request) => request,
            Err(error) => {
                state.set(SubmitState::Failed {
                    message: error.to_string(),
                });
                return;
            }
        };

        state.update(|s| *s = submit_step(s, SubmitEvent::Begin));

        let service = service.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = service.track(&request).await;
            // The view may already be gone when the response lands
            let next = state.try_update(|s| {
                *s = submit_step(s, SubmitEvent::Settled(outcome));
                s.clone()
            });
            if let Some(SubmitState::Navigated { product_id }) = next {
                navigate(&history_route(product_id), Default::default());
            }
        });
    };

    view! {
        <section style="margin-top: 2rem;">
            <h1>"Track a Product"</h1>
            <div style="border: 1px solid #dee2e6; border-radius: 0.5rem; padding: 1.5rem; margin-top: 1.5rem;">
                <form on:submit=on_submit>
                    <label style=LABEL_STYLE>
                        "Amazon Product URL"
                        <input
                            type="text"
                            required
                            placeholder="https://www.amazon.in/dp/..."
                            prop:value=url
                            on:input=move |ev| url.set(event_target_value(&ev))
                            style=FIELD_STYLE
                        />
                    </label>
                    <label style=LABEL_STYLE>
                        "Target Price (optional)"
                        <input
                            type="number"
                            step="any"
                            placeholder="Enter target price"
                            prop:value=target_price
                            on:input=move |ev| target_price.set(event_target_value(&ev))
                            style=FIELD_STYLE
                        />
                    </label>
                    <label style=LABEL_STYLE>
                        "Email for Alerts (optional)"
                        <input
                            type="email"
                            placeholder="your@email.com"
                            prop:value=email
                            on:input=move |ev| email.set(event_target_value(&ev))
                            style=FIELD_STYLE
                        />
                    </label>
                    <button
                        type="submit"
                        prop:disabled=move || state.with(|s| s.is_submitting())
                        style="width: 100%; padding: 0.75rem; border: none; border-radius: 0.25rem; background-color: #1976d2; color: white; font-size: 1.1rem; cursor: pointer;"
                    >
                        {move || {
                            if state.with(|s| s.is_submitting()) {
                                "Tracking..."
                            } else {
                                "Start Tracking"
                            }
                        }}
                    </button>
                </form>
                {move || {
                    state
                        .with(|s| s.error().map(str::to_string))
                        .map(|message| view! { <p style=ALERT_ERROR_STYLE>{message}</p> })
                }}
                {move || {
                    state
                        .with(|s| matches!(s, SubmitState::Navigated { .. }))
                        .then(|| {
                            view! {
                                <p style=ALERT_SUCCESS_STYLE>
                                    "Product tracking started successfully!"
                                </p>
                            }
                        })
                }}
            </div>
        </section>
    }
}
