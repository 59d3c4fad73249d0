// ============================================================================
// VERIFICATION FORMS - registro, cambio de contraseña, recuperación
// ============================================================================
// Las tres pantallas comparten: email + "enviar código" + código + "verificar"
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::dom::{append_child, on_click, on_submit, ElementBuilder};
use crate::models::VerificationPurpose;
use crate::state::AppState;
use crate::utils::i18n::t;
use crate::viewmodels::AuthViewModel;
use crate::views::shared::{button, form_field, page, spawn_action, submit_button};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Screen {
    Register,
    ChangePassword,
    AccountRecovery,
}

impl Screen {
    fn purpose(self) -> VerificationPurpose {
        match self {
            Screen::Register => VerificationPurpose::Register,
            Screen::ChangePassword => VerificationPurpose::ResetPassword,
            Screen::AccountRecovery => VerificationPurpose::RecoverAccount,
        }
    }

    fn title_key(self) -> &'static str {
        match self {
            Screen::Register => "registrarse",
            Screen::ChangePassword => "cambiar_contrasena",
            Screen::AccountRecovery => "recuperar_cuenta",
        }
    }

    fn page_class(self) -> &'static str {
        match self {
            Screen::Register => "register-page",
            Screen::ChangePassword => "changepw-page",
            Screen::AccountRecovery => "recovery-page",
        }
    }
}

pub fn render_register(state: &AppState) -> Result<Element, JsValue> {
    render_screen(state, Screen::Register)
}

pub fn render_change_password(state: &AppState) -> Result<Element, JsValue> {
    render_screen(state, Screen::ChangePassword)
}

pub fn render_account_recovery(state: &AppState) -> Result<Element, JsValue> {
    render_screen(state, Screen::AccountRecovery)
}

fn render_screen(state: &AppState, screen: Screen) -> Result<Element, JsValue> {
    let lang = state.lang();
    let values = state.auth_form.borrow().clone();
    let shared = state.auth_form.clone();
    let loading = state.is_busy();

    let form = ElementBuilder::new("form")?.class("auth-form").build();
    append_child(&form, &ElementBuilder::new("h2")?.text(&t(screen.title_key(), &lang)).build())?;

    if screen != Screen::ChangePassword {
        append_child(&form, &form_field(&t("nombre", &lang), "text", &values.name, shared.clone(), |f, v| f.name = v)?)?;
    }
    append_child(&form, &form_field(&t("numero_estudiante", &lang), "text", &values.id, shared.clone(), |f, v| f.id = v)?)?;
    if screen != Screen::AccountRecovery {
        let label_key = if screen == Screen::Register { "contrasena" } else { "nueva_contrasena" };
        append_child(
            &form,
            &form_field(&t(label_key, &lang), "password", &values.password, shared.clone(), |f, v| f.password = v)?,
        )?;
    }

    // Email + enviar código
    let email_row = ElementBuilder::new("div")?.class("form-row").build();
    append_child(
        &email_row,
        &form_field(&t("email", &lang), "email", &values.email, shared.clone(), |f, v| {
            // Otro email invalida la verificación anterior
            if f.email != v {
                f.verified = false;
            }
            f.email = v
        })?,
    )?;
    let send_btn = button(&t("enviar_codigo", &lang), "btn-secondary", loading)?;
    {
        let state = state.clone();
        on_click(&send_btn, move |_e: MouseEvent| {
            let vm = AuthViewModel::new(state.api.clone());
            let form = state.auth_form.clone();
            spawn_action(&state, async move { vm.request_code(screen.purpose(), &form).await });
        })?;
    }
    append_child(&email_row, &send_btn)?;
    append_child(&form, &email_row)?;

    // Código + verificar
    let code_row = ElementBuilder::new("div")?.class("form-row").build();
    append_child(
        &code_row,
        &form_field(&t("codigo_verificacion", &lang), "text", &values.code, shared.clone(), |f, v| f.code = v)?,
    )?;
    let verify_label = if values.verified { t("verificado", &lang) } else { t("verificar", &lang) };
    let verify_btn = button(&verify_label, "btn-secondary", loading || values.verified)?;
    {
        let state = state.clone();
        on_click(&verify_btn, move |_e: MouseEvent| {
            let vm = AuthViewModel::new(state.api.clone());
            let form = state.auth_form.clone();
            spawn_action(&state, async move { vm.verify_code(&form).await });
        })?;
    }
    append_child(&code_row, &verify_btn)?;
    append_child(&form, &code_row)?;

    append_child(&form, &submit_button(&t(screen.title_key(), &lang), loading)?)?;

    {
        let state = state.clone();
        on_submit(&form, move || {
            let vm = AuthViewModel::new(state.api.clone());
            let form = state.auth_form.clone();
            spawn_action(&state, async move {
                match screen {
                    Screen::Register => vm.register(&form).await,
                    Screen::ChangePassword => vm.reset_password(&form).await,
                    Screen::AccountRecovery => vm.recover_account(&form).await,
                }
            });
        })?;
    }

    page(state, screen.page_class(), form)
}
