use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";
const CURRENT_STORE_KEY: &str = "auth_current_store_id";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read a raw value from localStorage
pub fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

/// Write a raw value to localStorage, ignoring quota errors
pub fn set_item(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("localStorage write failed for {}: {:?}", key, e);
        }
    }
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_item(ACCESS_TOKEN_KEY).filter(|t| !t.trim().is_empty())
}

/// Магазин, в рамках которого работает оператор
pub fn get_current_store_id() -> Option<String> {
    get_item(CURRENT_STORE_KEY).filter(|id| !id.trim().is_empty())
}
