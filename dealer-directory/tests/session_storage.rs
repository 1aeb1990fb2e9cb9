//! Browser-only: run with `wasm-pack test --headless --firefox dealer-directory`.
#![cfg(target_arch = "wasm32")]

use dealer_directory::{is_logged_in, session_username, DEFAULT_SESSION_KEY};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn session_storage() -> web_sys::Storage {
    web_sys::window()
        .and_then(|w| w.session_storage().ok().flatten())
        .expect("sessionStorage available")
}

#[wasm_bindgen_test]
fn missing_username_means_guest() {
    session_storage().remove_item(DEFAULT_SESSION_KEY).unwrap();
    assert!(!is_logged_in(DEFAULT_SESSION_KEY));
    assert_eq!(session_username(DEFAULT_SESSION_KEY), None);
}

#[wasm_bindgen_test]
fn stored_username_means_logged_in() {
    let storage = session_storage();
    storage.set_item(DEFAULT_SESSION_KEY, "alice").unwrap();
    assert!(is_logged_in(DEFAULT_SESSION_KEY));
    assert_eq!(session_username(DEFAULT_SESSION_KEY).as_deref(), Some("alice"));

    storage.set_item(DEFAULT_SESSION_KEY, "").unwrap();
    assert!(is_logged_in(DEFAULT_SESSION_KEY));

    storage.remove_item(DEFAULT_SESSION_KEY).unwrap();
}
