// ============================================================================
// LOGIN VIEW - Formulario de inicio de sesión
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

pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [LOGIN] render_login() llamado");

    // Estado local del formulario (en closures)
    let username = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));

    let page = ElementBuilder::new("div")?.class("auth-page").build();

    let title = ElementBuilder::new("h2")?.text("로그인").build();
    let subtitle = ElementBuilder::new("p")?
        .class("auth-subtitle")
        .text("공연 좌석 예매 시스템에 로그인하세요")
        .build();
    append_child(&page, &title)?;
    append_child(&page, &subtitle)?;

    let form = create_element("form")?;
    set_class_name(&form, "auth-form");

    let username_group = create_input_group(
        "username",
        "아이디",
        "text",
        "아이디를 입력하세요",
        username.clone(),
    )?;
    let password_group = create_input_group(
        "password",
        "비밀번호",
        "password",
        "비밀번호를 입력하세요",
        password.clone(),
    )?;
    append_child(&form, &username_group)?;
    append_child(&form, &password_group)?;

    // Línea de error inline (vacía hasta que haga falta)
    let error_line = ElementBuilder::new("div")?.class("form-error").build();
    append_child(&form, &error_line)?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-submit")
        .text("로그인")
        .build();
    append_child(&form, &submit_btn)?;

    // Submit del formulario
    {
        let username = username.clone();
        let password = password.clone();
        let error_line = error_line.clone();
        let submit_btn = submit_btn.clone();
        let state = state.clone();

        on_submit(&form, move |e| {
            e.prevent_default();

            let username_val = username.borrow().trim().to_string();
            let password_val = password.borrow().trim().to_string();

            if username_val.is_empty() || password_val.is_empty() {
                set_text_content(&error_line, "아이디와 비밀번호를 모두 입력해주세요.");
                return;
            }

            set_text_content(&error_line, "");
            let _ = set_attribute(&submit_btn, "disabled", "true");
            set_text_content(&submit_btn, "로그인 중...");

            let state = state.clone();
            let error_line = error_line.clone();
            let submit_btn = submit_btn.clone();

            spawn_local(async move {
                let vm = AuthViewModel::new();
                match vm.login(&state.auth, &username_val, &password_val).await {
                    Ok(()) => {
                        log::info!("✅ [LOGIN] Login exitoso, volviendo al inicio");
                        state.navigate(Route::Home);
                    }
                    Err(error) => {
                        log::error!("❌ [LOGIN] Login fallido: {}", error);
                        set_text_content(&error_line, "아이디 또는 비밀번호가 올바르지 않습니다.");
                        let _ = remove_attribute(&submit_btn, "disabled");
                        set_text_content(&submit_btn, "로그인");
                    }
                }
            });
        })?;
    }

    append_child(&page, &form)?;

    // Acceso al registro
    let footer = ElementBuilder::new("p")?
        .class("auth-footer")
        .text("아직 계정이 없으신가요?")
        .build();
    let signup_link = ElementBuilder::new("button")?
        .class("link")
        .text("회원가입")
        .build();
    {
        let state = state.clone();
        crate::dom::on_click(&signup_link, move |_| state.navigate(Route::Signup))?;
    }
    append_child(&footer, &signup_link)?;
    append_child(&page, &footer)?;

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
