// ============================================================================
// TOAST - Notificaciones transitorias (éxito / error)
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, document, get_element_by_id, ElementBuilder};
use crate::services::ApiError;

const TOAST_CONTAINER_ID: &str = "toast-container";
const TOAST_DURATION_MS: u32 = 3_000;
const TOAST_FOLLOWUP_DURATION_MS: u32 = 4_000;

fn ensure_container() -> Result<Element, JsValue> {
    if let Some(container) = get_element_by_id(TOAST_CONTAINER_ID) {
        return Ok(container);
    }

    let container = ElementBuilder::new("div")?
        .id(TOAST_CONTAINER_ID)?
        .class("toast-container")
        .build();

    let body = document()
        .and_then(|doc| doc.body())
        .ok_or_else(|| JsValue::from_str("No body"))?;
    body.append_child(&container)?;
    Ok(container)
}

fn show(message: &str, kind: &str, duration_ms: u32) {
    let result: Result<(), JsValue> = (|| {
        let container = ensure_container()?;
        let toast = ElementBuilder::new("div")?
            .class(&format!("toast toast-{}", kind))
            .text(message)
            .build();
        append_child(&container, &toast)?;

        // El toast se retira solo; el contenedor queda para los siguientes
        Timeout::new(duration_ms, move || toast.remove()).forget();
        Ok(())
    })();

    if let Err(e) = result {
        log::error!("❌ [TOAST] Error mostrando notificación: {:?}", e);
    }
}

pub fn show_success(message: &str) {
    show(message, "success", TOAST_DURATION_MS);
}

pub fn show_error(message: &str) {
    show(message, "error", TOAST_DURATION_MS);
}

/// Presentación estándar de un ApiError clasificado:
/// - error de servidor: mensaje + código y sugerencia de reintento
/// - error de red: mensaje + sugerencia de revisar la conexión
/// - resto: solo el mensaje resuelto
pub fn show_api_error(error: &ApiError) {
    if error.is_server_error {
        show_error(&format!("{} (오류 코드: {})", error.message, error.status));
        show(
            "잠시 후 다시 시도해주세요.",
            "error",
            TOAST_FOLLOWUP_DURATION_MS,
        );
    } else if error.is_network_error {
        show_error(&error.message);
        show(
            "인터넷 연결을 확인하고 다시 시도해주세요.",
            "error",
            TOAST_FOLLOWUP_DURATION_MS,
        );
    } else {
        show_error(&error.message);
    }
}
