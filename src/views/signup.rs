// ============================================================================
// SIGNUP VIEW - Formulario de registro
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{
    append_child, create_element, on_input, on_submit, remove_attribute, set_attribute,
    set_class_name, set_text_content, ElementBuilder,
};
use crate::state::{AppState, Route};
use crate::viewmodels::AuthViewModel;

pub fn render_signup(state: &AppState) -> Result<Element, JsValue> {
    let username = Rc::new(RefCell::new(String::new()));
    let email = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));
    let confirm_password = Rc::new(RefCell::new(String::new()));

    let page = ElementBuilder::new("div")?.class("auth-page").build();

    let title = ElementBuilder::new("h2")?.text("회원가입").build();
    let subtitle = ElementBuilder::new("p")?
        .class("auth-subtitle")
        .text("공연 좌석 예매 시스템에 가입하세요")
        .build();
    append_child(&page, &title)?;
    append_child(&page, &subtitle)?;

    let form = create_element("form")?;
    set_class_name(&form, "auth-form");

    append_child(
        &form,
        &create_input_group(
            "username",
            "아이디 *",
            "text",
            "아이디를 입력하세요",
            username.clone(),
        )?,
    )?;
    append_child(
        &form,
        &create_input_group(
            "email",
            "이메일 (선택)",
            "email",
            "이메일을 입력하세요 (선택사항)",
            email.clone(),
        )?,
    )?;
    append_child(
        &form,
        &create_input_group(
            "password",
            "비밀번호 *",
            "password",
            "비밀번호를 입력하세요 (최소 6자)",
            password.clone(),
        )?,
    )?;
    append_child(
        &form,
        &create_input_group(
            "confirmPassword",
            "비밀번호 확인 *",
            "password",
            "비밀번호를 다시 입력하세요",
            confirm_password.clone(),
        )?,
    )?;

    let error_line = ElementBuilder::new("div")?.class("form-error").build();
    append_child(&form, &error_line)?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-submit")
        .text("회원가입")
        .build();
    append_child(&form, &submit_btn)?;

    {
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let error_line = error_line.clone();
        let submit_btn = submit_btn.clone();
        let state = state.clone();

        on_submit(&form, move |e| {
            e.prevent_default();

            let username_val = username.borrow().trim().to_string();
            let email_val = email.borrow().trim().to_string();
            let password_val = password.borrow().clone();
            let confirm_val = confirm_password.borrow().clone();

            // Validación previa: nada de esto llega al backend
            if username_val.is_empty()
                || password_val.trim().is_empty()
                || confirm_val.trim().is_empty()
            {
                set_text_content(&error_line, "모든 필수 항목을 입력해주세요.");
                return;
            }
            if password_val != confirm_val {
                set_text_content(&error_line, "비밀번호가 일치하지 않습니다.");
                return;
            }
            if password_val.chars().count() < 6 {
                set_text_content(&error_line, "비밀번호는 최소 6자 이상이어야 합니다.");
                return;
            }

            set_text_content(&error_line, "");
            let _ = set_attribute(&submit_btn, "disabled", "true");
            set_text_content(&submit_btn, "가입 중...");

            let state = state.clone();
            let error_line = error_line.clone();
            let submit_btn = submit_btn.clone();

            spawn_local(async move {
                let vm = AuthViewModel::new();
                let email_opt = if email_val.is_empty() {
                    None
                } else {
                    Some(email_val.as_str())
                };

                match vm
                    .signup(&state.auth, &username_val, &password_val, email_opt)
                    .await
                {
                    Ok(()) => {
                        log::info!("✅ [SIGNUP] Registro + login automático completado");
                        state.navigate(Route::Home);
                    }
                    Err(error) => {
                        log::error!("❌ [SIGNUP] Registro fallido: {}", error);
                        set_text_content(&error_line, "회원가입에 실패했습니다. 다시 시도해주세요.");
                        let _ = remove_attribute(&submit_btn, "disabled");
                        set_text_content(&submit_btn, "회원가입");
                    }
                }
            });
        })?;
    }

    append_child(&page, &form)?;
    Ok(page)
}

/// Helper para crear form group con label + input controlado
fn create_input_group(
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
