// ============================================================================
// SEATS VIEW - Grilla 3x3 de selección de asiento
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    append_child, get_element_by_id, on_click, set_class_name, set_inner_html, set_text_content,
    ElementBuilder,
};
use crate::models::seat::{seat_col, seat_row};
use crate::models::Seat;
use crate::state::{AppState, Route};
use crate::utils::constants::{GRID_COLS, TOTAL_SEATS};
use crate::viewmodels::ReservationViewModel;
use crate::views::toast;

pub fn render_seats(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [SEATS] render_seats() llamado");

    let page = ElementBuilder::new("div")?.class("seat-page").build();

    let title = ElementBuilder::new("h1")?.text("좌석 선택").build();
    let subtitle = ElementBuilder::new("p")?
        .class("seat-subtitle")
        .text("원하는 좌석을 선택하고 예매를 진행하세요")
        .build();
    append_child(&page, &title)?;
    append_child(&page, &subtitle)?;

    // Leyenda de estados
    let legend = ElementBuilder::new("div")?.class("seat-legend").build();
    for (class, label) in [
        ("legend-available", "예약 가능"),
        ("legend-selected", "선택됨"),
        ("legend-reserved", "예약됨"),
    ] {
        let item = ElementBuilder::new("div")?.class("legend-item").build();
        append_child(
            &item,
            &ElementBuilder::new("span")?
                .class(&format!("legend-swatch {}", class))
                .build(),
        )?;
        append_child(&item, &ElementBuilder::new("span")?.text(label).build())?;
        append_child(&legend, &item)?;
    }
    append_child(&page, &legend)?;

    let grid = ElementBuilder::new("div")?
        .id("seat-grid")?
        .class("seat-grid")
        .text("좌석 정보를 불러오는 중...")
        .build();
    append_child(&page, &grid)?;

    let summary = ElementBuilder::new("div")?
        .id("seat-summary")?
        .class("seat-summary")
        .build();
    append_child(&page, &summary)?;

    // Cargar asientos del backend y armar la grilla
    {
        let grid = grid.clone();
        let summary = summary.clone();
        let state = state.clone();

        spawn_local(async move {
            let vm = ReservationViewModel::new();
            match vm.load_seats().await {
                Ok(seats) => {
                    if let Err(e) = build_grid(&grid, &summary, &state, seats) {
                        log::error!("❌ [SEATS] Error armando la grilla: {:?}", e);
                    }
                }
                Err(error) => {
                    toast::show_api_error(&error);
                    set_text_content(&grid, "좌석 정보를 불러오는데 실패했습니다.");
                }
            }
        });
    }

    Ok(page)
}

fn build_grid(
    grid: &Element,
    summary: &Element,
    state: &AppState,
    seats: Vec<Seat>,
) -> Result<(), JsValue> {
    set_inner_html(grid, "");

    if seats.len() != TOTAL_SEATS as usize {
        log::warn!(
            "⚠️ [SEATS] Se esperaban {} asientos, llegaron {}",
            TOTAL_SEATS,
            seats.len()
        );
    }

    let seats = Rc::new(seats);

    for row in 1..=3u8 {
        for col in 1..=3u8 {
            let seat_number = (row - 1) * GRID_COLS + col;
            let seat = match seats.iter().find(|s| s.seat_number == seat_number) {
                Some(seat) => seat.clone(),
                None => continue,
            };

            let cell = ElementBuilder::new("div")?
                .id(&format!("seat-{}", seat_number))?
                .attr(
                    "title",
                    &format!("{}행 {}열 - 좌석 {}번", row, col, seat_number),
                )?
                .class(&seat_class(&seat, state.reservation.get_selected_seat()))
                .build();

            append_child(
                &cell,
                &ElementBuilder::new("div")?
                    .class("seat-number")
                    .text(&seat_number.to_string())
                    .build(),
            )?;
            append_child(
                &cell,
                &ElementBuilder::new("div")?
                    .class("seat-location")
                    .text(&format!("{}-{}", seat.row, seat.column))
                    .build(),
            )?;

            // Los asientos reservados no reciben handler: click inhabilitado.
            // La verificación autoritativa sigue siendo la respuesta del
            // backend al reservar (el listado puede estar obsoleto).
            if !seat.is_reserved {
                let grid = grid.clone();
                let summary = summary.clone();
                let state = state.clone();
                let seats = seats.clone();
                on_click(&cell, move |_| {
                    state.reservation.toggle_seat(seat_number, false);
                    if let Err(e) = update_selection_ui(&grid, &summary, &state, seats.as_slice())
                    {
                        log::error!("❌ [SEATS] Error actualizando selección: {:?}", e);
                    }
                })?;
            }

            append_child(grid, &cell)?;
        }
    }

    update_selection_ui(grid, summary, state, seats.as_slice())
}

/// Clase visual de un asiento según su estado
fn seat_class(seat: &Seat, selected: Option<u8>) -> String {
    if seat.is_reserved {
        "seat seat-reserved".to_string()
    } else if selected == Some(seat.seat_number) {
        "seat seat-selected".to_string()
    } else {
        "seat seat-available".to_string()
    }
}

/// Actualización incremental: clases de la grilla + resumen de selección,
/// sin re-render completo (no se vuelve a pedir el listado)
fn update_selection_ui(
    _grid: &Element,
    summary: &Element,
    state: &AppState,
    seats: &[Seat],
) -> Result<(), JsValue> {
    let selected = state.reservation.get_selected_seat();

    for seat in seats {
        if let Some(cell) = get_element_by_id(&format!("seat-{}", seat.seat_number)) {
            set_class_name(&cell, &seat_class(seat, selected));
        }
    }

    set_inner_html(summary, "");
    match selected {
        Some(seat_number) => {
            let line = ElementBuilder::new("p")?
                .class("selection-line")
                .text(&format!(
                    "선택된 좌석: {}번 ({}행 {}열)",
                    seat_number,
                    seat_row(seat_number),
                    seat_col(seat_number)
                ))
                .build();
            append_child(summary, &line)?;

            let confirm_btn = ElementBuilder::new("button")?
                .class("btn-confirm")
                .text("선택 확정")
                .build();
            {
                let state = state.clone();
                on_click(&confirm_btn, move |_| {
                    if state.reservation.begin_attendee_entry() {
                        state.navigate(Route::ReservationConfirm);
                    }
                })?;
            }
            append_child(summary, &confirm_btn)?;
        }
        None => {
            let hint = ElementBuilder::new("p")?
                .class("selection-hint")
                .text("예매할 좌석을 선택해주세요")
                .build();
            append_child(summary, &hint)?;
        }
    }

    Ok(())
}
