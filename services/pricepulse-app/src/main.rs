//! Browser entry point

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::default());
        log::info!("Starting PricePulse frontend");
        leptos::mount::mount_to_body(pricepulse_app::App);
    }
}
