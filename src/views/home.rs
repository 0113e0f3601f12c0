// ============================================================================
// HOME - Pantalla de entrada
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::{AppState, Route};

pub fn render_home(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("home-page").build();

    let title = ElementBuilder::new("h1")?
        .text("공연 좌석 예매 시스템")
        .build();
    let subtitle = ElementBuilder::new("p")?
        .class("home-subtitle")
        .text("간편하고 빠른 공연 좌석 예매를 경험해보세요. 실시간 좌석 현황 확인부터 예약까지 한 번에!")
        .build();
    append_child(&page, &title)?;
    append_child(&page, &subtitle)?;

    let cta = ElementBuilder::new("button")?
        .class("btn-cta")
        .text("좌석 예매 시작하기")
        .build();
    {
        let state = state.clone();
        on_click(&cta, move |_| state.navigate(Route::Seats))?;
    }
    append_child(&page, &cta)?;

    if !state.auth.get_authenticated() {
        let signup_row = ElementBuilder::new("p")?
            .class("home-signup")
            .text("아직 계정이 없으신가요?")
            .build();
        let signup_link = ElementBuilder::new("button")?
            .class("link")
            .text("회원가입")
            .build();
        {
            let state = state.clone();
            on_click(&signup_link, move |_| state.navigate(Route::Signup))?;
        }
        append_child(&signup_row, &signup_link)?;
        append_child(&page, &signup_row)?;
    }

    // Tarjetas de características
    let features = ElementBuilder::new("div")?.class("feature-grid").build();
    for (icon, heading, text) in [
        (
            "🎭",
            "실시간 좌석 현황",
            "현재 예약 가능한 좌석을 실시간으로 확인하세요",
        ),
        (
            "⚡",
            "빠른 예약",
            "간단한 클릭으로 원하는 좌석을 빠르게 예약하세요",
        ),
        (
            "🔒",
            "안전한 결제",
            "보안이 강화된 시스템으로 안전하게 예약하세요",
        ),
    ] {
        let card = ElementBuilder::new("div")?.class("feature-card").build();
        append_child(
            &card,
            &ElementBuilder::new("div")?.class("feature-icon").text(icon).build(),
        )?;
        append_child(&card, &ElementBuilder::new("h3")?.text(heading).build())?;
        append_child(&card, &ElementBuilder::new("p")?.text(text).build())?;
        append_child(&features, &card)?;
    }
    append_child(&page, &features)?;

    Ok(page)
}
