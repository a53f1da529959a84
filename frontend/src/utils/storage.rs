use web_sys::{Storage, Window};

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// Reads a key, treating storage errors and blank values as absent.
pub fn read_item(storage: &Storage, key: &str) -> Option<String> {
    storage
        .get_item(key)
        .ok()
        .flatten()
        .filter(|value| !value.trim().is_empty())
}
