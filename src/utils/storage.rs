// ============================================================================
// STORAGE - helpers JSON sobre localStorage
// ============================================================================

use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

const LANGUAGE_PREF_KEY: &str = "seat_app_language";

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializando {}: {}", key, e))?;
    storage
        .set_item(key, &json)
        .map_err(|_| format!("Error guardando {} en localStorage", key))
}

/// JSON corrupto cuenta como "no hay nada guardado"
pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = get_local_storage()?;
    let json = storage.get_item(key).ok()??;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("⚠️ [STORAGE] Valor ilegible en {}: {}", key, e);
            None
        }
    }
}

pub fn remove_from_storage(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .remove_item(key)
        .map_err(|_| format!("Error eliminando {} de localStorage", key))
}

/// Idioma guardado, o el de la configuración
pub fn load_language_pref(default: &str) -> String {
    get_local_storage()
        .and_then(|s| s.get_item(LANGUAGE_PREF_KEY).ok().flatten())
        .filter(|lang| crate::utils::i18n::is_supported(lang))
        .unwrap_or_else(|| default.to_string())
}

pub fn save_language_pref(lang: &str) {
    if let Some(storage) = get_local_storage() {
        if storage.set_item(LANGUAGE_PREF_KEY, lang).is_err() {
            log::warn!("⚠️ [STORAGE] No se pudo guardar el idioma");
        }
    }
}
