use web_sys::{window, Storage};

use crate::utils::constants::{STORAGE_KEY_ACCESS_TOKEN, STORAGE_KEY_REFRESH_TOKEN};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn get_item(key: &str) -> Option<String> {
    let storage = get_local_storage()?;
    storage.get_item(key).ok()?
}

pub fn set_item(key: &str, value: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .set_item(key, value)
        .map_err(|_| "Error guardando en localStorage".to_string())?;
    Ok(())
}

pub fn remove_item(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .remove_item(key)
        .map_err(|_| "Error eliminando de localStorage".to_string())?;
    Ok(())
}

/// Token de acceso persistido (si hay sesión guardada)
pub fn load_access_token() -> Option<String> {
    get_item(STORAGE_KEY_ACCESS_TOKEN)
}

/// Persistir el par de tokens emitido por el login
pub fn save_tokens(access: &str, refresh: &str) -> Result<(), String> {
    set_item(STORAGE_KEY_ACCESS_TOKEN, access)?;
    set_item(STORAGE_KEY_REFRESH_TOKEN, refresh)?;
    Ok(())
}

/// Limpiar el par de tokens (logout o 401 del backend)
pub fn clear_tokens() {
    let _ = remove_item(STORAGE_KEY_ACCESS_TOKEN);
    let _ = remove_item(STORAGE_KEY_REFRESH_TOKEN);
}
