// ============================================================================
// LOGIN VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::router::Route;
use crate::state::AppState;
use crate::utils::i18n::t;
use crate::viewmodels::AuthViewModel;
use crate::views::shared::{form_field, nav_link, page, spawn_action, submit_button};

pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.lang();
    let values = state.login_form.borrow().clone();

    let form = ElementBuilder::new("form")?.class("auth-form").build();
    append_child(&form, &ElementBuilder::new("h2")?.text(&t("iniciar_sesion", &lang)).build())?;
    append_child(
        &form,
        &form_field(&t("numero_estudiante", &lang), "text", &values.id, state.login_form.clone(), |f, v| f.id = v)?,
    )?;
    append_child(
        &form,
        &form_field(&t("contrasena", &lang), "password", &values.password, state.login_form.clone(), |f, v| {
            f.password = v
        })?,
    )?;
    append_child(&form, &submit_button(&t("iniciar_sesion", &lang), state.is_busy())?)?;

    {
        let state = state.clone();
        on_submit(&form, move || {
            let snapshot = state.login_form.borrow().clone();
            let vm = AuthViewModel::new(state.api.clone());
            let login_form = state.login_form.clone();
            spawn_action(&state, async move {
                let result = vm.login(&snapshot).await;
                if result.is_err() {
                    login_form.borrow_mut().clear();
                }
                result.map(|_| ())
            });
        })?;
    }

    let links = ElementBuilder::new("div")?.class("auth-links").build();
    append_child(&links, &nav_link(state, &t("registrarse", &lang), Route::Register, false)?)?;
    append_child(&links, &nav_link(state, &t("cambiar_contrasena", &lang), Route::ChangePassword, false)?)?;
    append_child(&links, &nav_link(state, &t("recuperar_cuenta", &lang), Route::AccountRecovery, false)?)?;
    append_child(&form, &links)?;

    page(state, "login-page", form)
}
