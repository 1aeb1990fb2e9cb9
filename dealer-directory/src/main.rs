use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::{error, Level};

use dealer_directory::{DealerDirectory, DirectoryConfig};

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(DirectoryConfig::from_window);

    match config {
        Ok(config) => rsx! {
            DealerDirectory { config }
        },
        Err(e) => {
            error!("Dealer directory unavailable: {}", e);
            rsx! {
                div { class: "directory-status failed", "Dealer directory unavailable: {e}" }
            }
        }
    }
}
