use web_sys::window;

const AUTH_TOKEN_KEY: &str = "admin_auth_token";
const AUTH_EMAIL_KEY: &str = "admin_auth_email";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the admin token and the email it was issued for.
pub fn save_session(token: &str, email: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(AUTH_TOKEN_KEY, token);
        let _ = storage.set_item(AUTH_EMAIL_KEY, email);
    }
}

/// Get the admin token from localStorage
pub fn get_token() -> Option<String> {
    get_local_storage()?
        .get_item(AUTH_TOKEN_KEY)
        .ok()?
        .filter(|t| !t.trim().is_empty())
}

pub fn get_email() -> Option<String> {
    get_local_storage()?.get_item(AUTH_EMAIL_KEY).ok()?
}

/// Clear everything the session stored
pub fn clear() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(AUTH_TOKEN_KEY);
        let _ = storage.remove_item(AUTH_EMAIL_KEY);
    }
}
