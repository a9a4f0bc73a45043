use web_sys::window;

const ROLE_KEY: &str = "auth_user_role";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the role string so a reload restores the session.
pub fn save_role(role: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(ROLE_KEY, role);
    }
}

pub fn get_role() -> Option<String> {
    local_storage()?.get_item(ROLE_KEY).ok()?
}

pub fn clear_role() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(ROLE_KEY);
    }
}
