//! Read-only view of the login session kept in `sessionStorage`.
//!
//! The login page owns the key; this crate never writes it.

pub fn session_username(key: &str) -> Option<String> {
    web_sys::window()
        .and_then(|window| window.session_storage().ok().flatten())
        .and_then(|storage| storage.get_item(key).ok().flatten())
}

/// Any stored value counts, including an empty string.
pub fn is_logged_in(key: &str) -> bool {
    session_username(key).is_some()
}
