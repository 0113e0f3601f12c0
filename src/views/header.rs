// ============================================================================
// HEADER - Barra superior con navegación y estado de sesión
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::{AppState, Route};
use crate::viewmodels::AuthViewModel;

pub fn render_header(state: &AppState) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?.class("app-header").build();

    // Marca: vuelve al inicio
    let brand = ElementBuilder::new("button")?
        .class("brand")
        .text("공연 좌석 예매")
        .build();
    {
        let state = state.clone();
        on_click(&brand, move |_| state.navigate(Route::Home))?;
    }
    append_child(&header, &brand)?;

    let nav = ElementBuilder::new("nav")?.class("header-nav").build();

    let seats_link = ElementBuilder::new("button")?
        .class("nav-link")
        .text("좌석 예매")
        .build();
    {
        let state = state.clone();
        on_click(&seats_link, move |_| state.navigate(Route::Seats))?;
    }
    append_child(&nav, &seats_link)?;

    if state.auth.get_authenticated() {
        let greeting = ElementBuilder::new("span")?
            .class("greeting")
            .text("안녕하세요, 사용자님!")
            .build();
        append_child(&nav, &greeting)?;

        let profile_btn = ElementBuilder::new("button")?
            .class("nav-link")
            .text("내 프로필")
            .build();
        {
            let state = state.clone();
            on_click(&profile_btn, move |_| state.navigate(Route::Profile))?;
        }
        append_child(&nav, &profile_btn)?;

        let logout_btn = ElementBuilder::new("button")?
            .class("btn-logout")
            .text("로그아웃")
            .build();
        {
            let state = state.clone();
            on_click(&logout_btn, move |_| {
                AuthViewModel::new().logout(&state.auth);
                state.navigate(Route::Home);
            })?;
        }
        append_child(&nav, &logout_btn)?;
    } else {
        let login_btn = ElementBuilder::new("button")?
            .class("btn-login")
            .text("로그인")
            .build();
        {
            let state = state.clone();
            on_click(&login_btn, move |_| state.navigate(Route::Login))?;
        }
        append_child(&nav, &login_btn)?;

        let signup_btn = ElementBuilder::new("button")?
            .class("btn-signup")
            .text("회원가입")
            .build();
        {
            let state = state.clone();
            on_click(&signup_btn, move |_| state.navigate(Route::Signup))?;
        }
        append_child(&nav, &signup_btn)?;
    }

    append_child(&header, &nav)?;
    Ok(header)
}
