// ============================================================================
// CONFIRM VIEW - Confirmación de reserva + captura de datos del asistente
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{
    append_child, create_element, on_click, on_input, on_submit, set_attribute, set_class_name,
    ElementBuilder,
};
use crate::models::seat::seat_location_label;
use crate::models::{AttendeeInfo, ReservationOutcome};
use crate::state::{AppState, Route, WorkflowPhase};
use crate::viewmodels::ReservationViewModel;
use crate::views::{result_modal, toast};

pub fn render_confirm(state: &AppState) -> Result<Element, JsValue> {
    let seat_number = match state.reservation.get_selected_seat() {
        Some(seat_number) => seat_number,
        None => {
            // Sin selección no hay nada que confirmar: volver a la grilla
            log::warn!("⚠️ [CONFIRM] Sin selección, redirigiendo a la grilla");
            let state = state.clone();
            Timeout::new(0, move || state.navigate(Route::Seats)).forget();
            return Ok(ElementBuilder::new("div")?.class("redirecting").build());
        }
    };

    let phase = state.reservation.get_phase();

    let page = ElementBuilder::new("div")?.class("confirm-page").build();

    let title = ElementBuilder::new("h1")?.text("예매 정보 확인").build();
    let subtitle = ElementBuilder::new("p")?
        .class("confirm-subtitle")
        .text("선택하신 좌석 정보를 확인하고 예매를 확정하세요")
        .build();
    append_child(&page, &title)?;
    append_child(&page, &subtitle)?;

    let card = ElementBuilder::new("div")?.class("reservation-card").build();

    let emblem = ElementBuilder::new("div")?
        .class("card-emblem")
        .text("🎭")
        .build();
    append_child(&card, &emblem)?;
    append_child(
        &card,
        &ElementBuilder::new("h2")?.text("공연 좌석 예매").build(),
    )?;

    append_child(
        &card,
        &summary_row("선택된 좌석", &format!("{}번", seat_number))?,
    )?;
    append_child(
        &card,
        &summary_row("좌석 위치", &seat_location_label(seat_number))?,
    )?;
    append_child(&card, &summary_row("예매 상태", "예매 대기")?)?;

    // Formulario o tarjeta de solo lectura según la fase del flujo
    match phase {
        WorkflowPhase::AttendeeInfoConfirmed | WorkflowPhase::Submitting | WorkflowPhase::Succeeded => {
            append_child(&card, &render_attendee_card(state)?)?;
        }
        _ => {
            append_child(&card, &render_attendee_form(state)?)?;
        }
    }

    // Botonera
    let buttons = ElementBuilder::new("div")?.class("button-row").build();

    let back_btn = ElementBuilder::new("button")?
        .class("btn-back")
        .text("좌석 다시 선택")
        .build();
    {
        let state = state.clone();
        on_click(&back_btn, move |_| state.navigate(Route::Seats))?;
    }
    append_child(&buttons, &back_btn)?;

    let submit_btn = ElementBuilder::new("button")?
        .class("btn-reserve")
        .text(if phase == WorkflowPhase::Submitting {
            "예약 중..."
        } else {
            "최종 예약 확정"
        })
        .build();
    // El submit solo se habilita con los datos del asistente confirmados
    if phase != WorkflowPhase::AttendeeInfoConfirmed {
        set_attribute(&submit_btn, "disabled", "true")?;
    }
    {
        let state = state.clone();
        on_click(&submit_btn, move |_| {
            if !state.reservation.begin_submit() {
                return;
            }
            state.notify_subscribers();

            let state = state.clone();
            spawn_local(async move {
                let vm = ReservationViewModel::new();
                let outcome = vm.reserve(seat_number).await;

                if let ReservationOutcome::Failure(error) = &outcome {
                    toast::show_api_error(error);
                }

                state.reservation.finish_submit(outcome);
                state.notify_subscribers();
            });
        })?;
    }
    append_child(&buttons, &submit_btn)?;
    append_child(&card, &buttons)?;

    append_child(&page, &card)?;

    // Resumen de éxito: modal superpuesto hasta que el usuario lo confirme
    if phase == WorkflowPhase::Succeeded {
        append_child(&page, &result_modal::render_result_modal(state, seat_number)?)?;
    }

    Ok(page)
}

fn summary_row(label: &str, value: &str) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("div")?.class("summary-row").build();
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

/// Formulario de datos del asistente (pre-cargado al volver a editar)
fn render_attendee_form(state: &AppState) -> Result<Element, JsValue> {
    let current = state.reservation.get_attendee();
    let name = Rc::new(RefCell::new(current.name.clone()));
    let phone = Rc::new(RefCell::new(current.phone.clone()));
    let email = Rc::new(RefCell::new(current.email.clone()));

    let section = ElementBuilder::new("div")?.class("attendee-form").build();
    append_child(
        &section,
        &ElementBuilder::new("h3")?.text("예매자 정보 입력").build(),
    )?;

    let form = create_element("form")?;
    set_class_name(&form, "attendee-fields");

    append_child(
        &form,
        &attendee_input("name", "이름 *", "text", "예매자 이름을 입력하세요", name.clone())?,
    )?;
    append_child(
        &form,
        &attendee_input("phone", "전화번호 *", "tel", "010-1234-5678", phone.clone())?,
    )?;
    append_child(
        &form,
        &attendee_input("email", "이메일 (선택)", "email", "example@email.com", email.clone())?,
    )?;

    let submit = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-attendee-submit")
        .text("정보 입력 완료")
        .build();
    append_child(&form, &submit)?;

    {
        let state = state.clone();
        let name = name.clone();
        let phone = phone.clone();
        let email = email.clone();

        on_submit(&form, move |e| {
            e.prevent_default();

            let info = AttendeeInfo {
                name: name.borrow().clone(),
                phone: phone.borrow().clone(),
                email: email.borrow().trim().to_string(),
            };

            match state.reservation.confirm_attendee_info(info) {
                Ok(()) => state.notify_subscribers(),
                Err(message) => toast::show_error(&message),
            }
        })?;
    }

    append_child(&section, &form)?;
    Ok(section)
}

/// Tarjeta de solo lectura con los datos ya confirmados
fn render_attendee_card(state: &AppState) -> Result<Element, JsValue> {
    let attendee = state.reservation.get_attendee();

    let section = ElementBuilder::new("div")?.class("attendee-card").build();
    append_child(
        &section,
        &ElementBuilder::new("h3")?.text("입력된 예매자 정보").build(),
    )?;

    append_child(&section, &summary_row("이름:", &attendee.name)?)?;
    append_child(&section, &summary_row("전화번호:", &attendee.phone)?)?;
    if !attendee.email.is_empty() {
        append_child(&section, &summary_row("이메일:", &attendee.email)?)?;
    }

    let edit_btn = ElementBuilder::new("button")?
        .class("link")
        .text("정보 수정하기")
        .build();
    {
        let state = state.clone();
        on_click(&edit_btn, move |_| {
            state.reservation.edit_attendee_info();
            state.notify_subscribers();
        })?;
    }
    append_child(&section, &edit_btn)?;

    Ok(section)
}

fn attendee_input(
    id: &str,
    label_text: &str,
    input_type: &str,
    placeholder: &str,
    value: Rc<RefCell<String>>,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();

    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();

    let input = create_element("input")?;
    set_attribute(&input, "type", input_type)?;
    set_attribute(&input, "id", id)?;
    set_attribute(&input, "name", id)?;
    set_attribute(&input, "placeholder", placeholder)?;
    set_attribute(&input, "value", &value.borrow())?;
    set_class_name(&input, "form-input");

    {
        let value = value.clone();
        on_input(&input, move |e| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                *value.borrow_mut() = target.value();
            }
        })?;
    }

    append_child(&group, &label)?;
    append_child(&group, &input)?;
    Ok(group)
}
