// ============================================================================
// PROFILE VIEW - Reservas del usuario + cancelación
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    append_child, on_click, remove_attribute, set_attribute, set_inner_html, set_text_content,
    window, ElementBuilder,
};
use crate::models::seat::seat_location_label;
use crate::models::Seat;
use crate::state::{AppState, Route};
use crate::viewmodels::ReservationViewModel;
use crate::views::toast;

pub fn render_profile(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [PROFILE] render_profile() llamado");

    let page = ElementBuilder::new("div")?.class("profile-page").build();

    let title = ElementBuilder::new("h1")?.text("👤 사용자 프로필").build();
    let subtitle = ElementBuilder::new("p")?
        .class("profile-subtitle")
        .text("예매한 공연 정보를 확인하고 관리하세요")
        .build();
    append_child(&page, &title)?;
    append_child(&page, &subtitle)?;

    // Datos básicos
    let info_card = ElementBuilder::new("div")?.class("profile-card").build();
    append_child(&info_card, &ElementBuilder::new("h2")?.text("기본 정보").build())?;
    append_child(&info_card, &info_row("사용자 ID:", "사용자")?)?;
    append_child(&info_card, &info_row("가입일:", "2024년 8월")?)?;
    append_child(&page, &info_card)?;

    // Reservas
    let reservations_card = ElementBuilder::new("div")?.class("profile-card").build();

    let card_header = ElementBuilder::new("div")?.class("card-header").build();
    append_child(
        &card_header,
        &ElementBuilder::new("h2")?.text("🎭 예매 현황").build(),
    )?;
    let refresh_btn = ElementBuilder::new("button")?
        .class("btn-refresh")
        .text("새로고침")
        .build();
    {
        // Re-render completo: la lista se vuelve a pedir al backend
        let state = state.clone();
        on_click(&refresh_btn, move |_| state.notify_subscribers())?;
    }
    append_child(&card_header, &refresh_btn)?;
    append_child(&reservations_card, &card_header)?;

    let list = ElementBuilder::new("div")?
        .id("reservation-list")?
        .class("reservation-list")
        .text("예매 정보를 불러오는 중...")
        .build();
    append_child(&reservations_card, &list)?;
    append_child(&page, &reservations_card)?;

    let stats = ElementBuilder::new("div")?
        .id("reservation-stats")?
        .class("reservation-stats")
        .build();
    append_child(&page, &stats)?;

    // Cargar reservas del backend
    {
        let list = list.clone();
        let stats = stats.clone();
        let state = state.clone();

        spawn_local(async move {
            let vm = ReservationViewModel::new();
            match vm.my_reservations().await {
                Ok(reservations) => {
                    log::info!("📋 [PROFILE] {} reservas recibidas", reservations.len());
                    if let Err(e) = render_reservation_list(&list, &stats, &state, reservations) {
                        log::error!("❌ [PROFILE] Error renderizando reservas: {:?}", e);
                    }
                }
                Err(error) => {
                    toast::show_api_error(&error);
                    set_text_content(&list, "예약 정보를 불러오는데 실패했습니다. 다시 시도해주세요.");
                }
            }
        });
    }

    Ok(page)
}

fn render_reservation_list(
    list: &Element,
    stats: &Element,
    state: &AppState,
    reservations: Vec<Seat>,
) -> Result<(), JsValue> {
    set_inner_html(list, "");
    set_inner_html(stats, "");

    if reservations.is_empty() {
        let empty = ElementBuilder::new("div")?.class("empty-state").build();
        append_child(
            &empty,
            &ElementBuilder::new("div")?.class("empty-icon").text("🎫").build(),
        )?;
        append_child(
            &empty,
            &ElementBuilder::new("h3")?
                .text("아직 예매한 공연이 없습니다")
                .build(),
        )?;
        append_child(
            &empty,
            &ElementBuilder::new("p")?.text("첫 번째 공연을 예매해보세요!").build(),
        )?;

        let go_btn = ElementBuilder::new("button")?
            .class("btn-cta")
            .text("좌석 예매하기")
            .build();
        {
            let state = state.clone();
            on_click(&go_btn, move |_| state.navigate(Route::Seats))?;
        }
        append_child(&empty, &go_btn)?;
        append_child(list, &empty)?;
        return Ok(());
    }

    for seat in &reservations {
        append_child(list, &reservation_item(state, seat)?)?;
    }

    // Estadísticas de la cuenta
    append_child(
        stats,
        &ElementBuilder::new("h2")?.text("📊 예매 통계").build(),
    )?;
    let stats_grid = ElementBuilder::new("div")?.class("stats-grid").build();
    for (value, label) in [
        (reservations.len().to_string(), "총 예매 건수"),
        ((reservations.len() * 50_000).to_string(), "총 결제 금액 (원)"),
        ("진행중".to_string(), "현재 상태"),
    ] {
        let tile = ElementBuilder::new("div")?.class("stat-tile").build();
        append_child(
            &tile,
            &ElementBuilder::new("div")?.class("stat-value").text(&value).build(),
        )?;
        append_child(
            &tile,
            &ElementBuilder::new("div")?.class("stat-label").text(label).build(),
        )?;
        append_child(&stats_grid, &tile)?;
    }
    append_child(stats, &stats_grid)?;

    Ok(())
}

fn reservation_item(state: &AppState, seat: &Seat) -> Result<Element, JsValue> {
    let seat_number = seat.seat_number;

    let item = ElementBuilder::new("div")?.class("reservation-item").build();

    let fields = ElementBuilder::new("div")?.class("reservation-fields").build();
    append_child(&fields, &field("공연명", "오페라 갈라 콘서트")?)?;
    append_child(&fields, &field("공연일", "2024년 12월 25일")?)?;
    append_child(&fields, &field("좌석 번호", &format!("{}번", seat_number))?)?;
    append_child(&fields, &field("좌석 위치", &seat_location_label(seat_number))?)?;
    append_child(&item, &fields)?;

    let cancel_btn = ElementBuilder::new("button")?
        .class("btn-cancel")
        .text("예매 취소")
        .build();
    {
        let state = state.clone();
        let cancel_btn_ref = cancel_btn.clone();

        on_click(&cancel_btn, move |_| {
            // Cancelación siempre confirmada por el usuario
            let confirmed = window()
                .and_then(|w| {
                    w.confirm_with_message(&format!(
                        "좌석 {}번의 예매를 취소하시겠습니까?",
                        seat_number
                    ))
                    .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let _ = set_attribute(&cancel_btn_ref, "disabled", "true");
            set_text_content(&cancel_btn_ref, "취소 중...");

            let state = state.clone();
            let cancel_btn = cancel_btn_ref.clone();

            spawn_local(async move {
                let vm = ReservationViewModel::new();
                match vm.cancel(seat_number).await {
                    Ok(message) => {
                        toast::show_success(&message);
                        // Re-render completo: la lista se vuelve a pedir al
                        // backend, nunca se recorta localmente
                        state.notify_subscribers();
                    }
                    Err(error) => {
                        toast::show_api_error(&error);
                        let _ = remove_attribute(&cancel_btn, "disabled");
                        set_text_content(&cancel_btn, "예매 취소");
                    }
                }
            });
        })?;
    }
    append_child(&item, &cancel_btn)?;

    // Datos del recinto (fijos para la función única)
    let venue = ElementBuilder::new("div")?
        .class("venue-line")
        .text("📍 예술의전당  🕐 오후 7:30  💰 50,000원")
        .build();
    append_child(&item, &venue)?;

    Ok(item)
}

fn field(label: &str, value: &str) -> Result<Element, JsValue> {
    let field = ElementBuilder::new("div")?.class("reservation-field").build();
    append_child(
        &field,
        &ElementBuilder::new("span")?.class("field-label").text(label).build(),
    )?;
    append_child(
        &field,
        &ElementBuilder::new("p")?.class("field-value").text(value).build(),
    )?;
    Ok(field)
}

fn info_row(label: &str, value: &str) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("div")?.class("info-row").build();
    append_child(
        &row,
        &ElementBuilder::new("span")?.class("row-label").text(label).build(),
    )?;
    append_child(
        &row,
        &ElementBuilder::new("span")?.class("row-value").text(value).build(),
    )?;
    Ok(row)
}
