// ============================================================================
// VIEWS - Funciones de renderizado (sin lógica de negocio)
// ============================================================================

pub mod confirm;
pub mod header;
pub mod home;
pub mod login;
pub mod profile;
pub mod result_modal;
pub mod seats;
pub mod signup;
pub mod toast;

pub use confirm::render_confirm;
pub use header::render_header;
pub use home::render_home;
pub use login::render_login;
pub use profile::render_profile;
pub use seats::render_seats;
pub use signup::render_signup;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::state::{AppState, Route};

/// Renderizar la aplicación completa: header + pantalla actual.
/// Las pantallas protegidas sin sesión muestran el login (sin redirección
/// forzada: la ruta no cambia).
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("app").build();
    append_child(&container, &render_header(state)?)?;

    let main = ElementBuilder::new("main")?.build();
    let route = state.get_route();

    let view = if route.requires_auth() && !state.auth.get_authenticated() {
        if state.auth.get_loading() {
            ElementBuilder::new("div")?
                .class("auth-loading")
                .text("인증 상태를 확인하는 중...")
                .build()
        } else {
            log::info!("🔒 [APP] Ruta protegida sin sesión, mostrando login");
            render_login(state)?
        }
    } else {
        match route {
            Route::Home => render_home(state)?,
            Route::Login => render_login(state)?,
            Route::Signup => render_signup(state)?,
            Route::Seats => render_seats(state)?,
            Route::ReservationConfirm => render_confirm(state)?,
            Route::Profile => render_profile(state)?,
        }
    };

    append_child(&main, &view)?;
    append_child(&container, &main)?;
    Ok(container)
}
