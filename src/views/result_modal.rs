// ============================================================================
// RESULT MODAL - Resumen de la reserva completada
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::seat::seat_location_label;
use crate::models::ReservationOutcome;
use crate::state::{AppState, Route};
use crate::utils::constants::GRID_COLS;

pub fn render_result_modal(state: &AppState, seat_number: u8) -> Result<Element, JsValue> {
    let attendee = state.reservation.get_attendee();

    let overlay = ElementBuilder::new("div")?.class("modal-overlay").build();
    let modal = ElementBuilder::new("div")?.class("modal").build();

    // Header
    let header = ElementBuilder::new("div")?.class("modal-header").build();
    append_child(
        &header,
        &ElementBuilder::new("h2")?.text("🎭 예매 완료").build(),
    )?;
    let close_btn = ElementBuilder::new("button")?
        .class("modal-close")
        .text("×")
        .build();
    {
        let state = state.clone();
        on_click(&close_btn, move |_| close_modal(&state))?;
    }
    append_child(&header, &close_btn)?;
    append_child(&modal, &header)?;

    // Mensaje de confirmación del backend
    if let Some(ReservationOutcome::Success(message)) = state.reservation.get_last_outcome() {
        append_child(
            &modal,
            &ElementBuilder::new("p")?
                .class("modal-message")
                .text(&message)
                .build(),
        )?;
    }

    // Información del espectáculo (función única, datos fijos)
    let show_section = section("공연 정보")?;
    append_child(&show_section, &info_row("공연명:", "오페라 갈라 콘서트")?)?;
    append_child(&show_section, &info_row("공연일:", "2024년 12월 25일")?)?;
    append_child(&show_section, &info_row("공연시간:", "오후 7:30")?)?;
    append_child(&show_section, &info_row("공연장:", "예술의전당")?)?;
    append_child(&modal, &show_section)?;

    // Información del asiento + plano
    let seat_section = section("좌석 정보")?;
    append_child(
        &seat_section,
        &info_row("선택된 좌석:", &format!("{}번", seat_number))?,
    )?;
    append_child(
        &seat_section,
        &info_row("좌석 위치:", &seat_location_label(seat_number))?,
    )?;
    append_child(
        &seat_section,
        &ElementBuilder::new("p")?
            .class("grid-caption")
            .text("좌석 배치도 (🔴 = 예매된 좌석)")
            .build(),
    )?;
    append_child(&seat_section, &mini_grid(seat_number)?)?;
    append_child(&modal, &seat_section)?;

    // Información del asistente
    let attendee_section = section("예매자 정보")?;
    append_child(&attendee_section, &info_row("이름:", &attendee.name)?)?;
    append_child(&attendee_section, &info_row("전화번호:", &attendee.phone)?)?;
    if !attendee.email.is_empty() {
        append_child(&attendee_section, &info_row("이메일:", &attendee.email)?)?;
    }
    append_child(&modal, &attendee_section)?;

    // Número de reserva derivado del reloj
    let number_section = ElementBuilder::new("div")?
        .class("modal-section reservation-number")
        .build();
    append_child(
        &number_section,
        &ElementBuilder::new("p")?.class("number-caption").text("예매 번호").build(),
    )?;
    let number = (js_sys::Date::now() as u64) % 100_000_000;
    append_child(
        &number_section,
        &ElementBuilder::new("p")?
            .class("number-value")
            .text(&format!("{:08}", number))
            .build(),
    )?;
    append_child(
        &number_section,
        &ElementBuilder::new("p")?
            .class("number-hint")
            .text("예매 확인 시 위 번호를 사용하세요")
            .build(),
    )?;
    append_child(&modal, &number_section)?;

    // Footer
    let footer = ElementBuilder::new("div")?.class("modal-footer").build();
    let confirm_btn = ElementBuilder::new("button")?
        .class("btn-modal-confirm")
        .text("확인")
        .build();
    {
        let state = state.clone();
        on_click(&confirm_btn, move |_| close_modal(&state))?;
    }
    append_child(&footer, &confirm_btn)?;
    append_child(&modal, &footer)?;

    append_child(&overlay, &modal)?;
    Ok(overlay)
}

/// Cerrar el resumen: limpia la selección y vuelve a la grilla
fn close_modal(state: &AppState) {
    state.reservation.acknowledge_success();
    state.navigate(Route::Seats);
}

fn section(title: &str) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("div")?.class("modal-section").build();
    append_child(&section, &ElementBuilder::new("h3")?.text(title).build())?;
    Ok(section)
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

/// Plano 3x3 con el asiento reservado resaltado
fn mini_grid(reserved_seat: u8) -> Result<Element, JsValue> {
    let grid = ElementBuilder::new("div")?.class("mini-grid").build();

    for row in 1..=3u8 {
        for col in 1..=3u8 {
            let seat_number = (row - 1) * GRID_COLS + col;
            let class = if seat_number == reserved_seat {
                "mini-seat mini-seat-reserved"
            } else {
                "mini-seat"
            };
            let cell = ElementBuilder::new("div")?
                .class(class)
                .attr(
                    "title",
                    &format!("{}행 {}열 - 좌석 {}번", row, col, seat_number),
                )?
                .text(&format!("{}-{}", row, col))
                .build();
            append_child(&grid, &cell)?;
        }
    }

    Ok(grid)
}
