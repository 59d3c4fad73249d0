// ============================================================================
// MAIN VIEW - grilla de asientos + perfil
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::AppState;
use crate::utils::i18n::t;
use crate::viewmodels::{alert_error, ProfileViewModel, SeatViewModel};
use crate::views::shared::{button, form_field, page, readonly_field, spawn_action, status_line};

pub fn render_main(state: &AppState) -> Result<Element, JsValue> {
    let content = ElementBuilder::new("div")?.class("main-layout").build();
    append_child(&content, &render_seat_section(state)?)?;
    if state.session.is_logged_in() {
        append_child(&content, &render_profile_section(state)?)?;
    }
    page(state, "main-page", content)
}

fn seat_vm(state: &AppState) -> SeatViewModel {
    SeatViewModel::new(state.api.clone(), state.seats.clone())
}

fn render_seat_section(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.lang();
    let board = state.seats.borrow().clone();

    let section = ElementBuilder::new("section")?.class("seat-section").build();
    append_child(&section, &ElementBuilder::new("h2")?.text(&t("seleccion_asiento", &lang)).build())?;
    if let Some(status) = status_line(state)? {
        append_child(&section, &status)?;
    }

    let grid = ElementBuilder::new("div")?.class("seat-grid").build();
    for seat in board.seats() {
        let booked = board.is_booked(seat.seat_id);
        let selected = board.selected() == Some(seat.seat_id);
        let class = match (booked, selected) {
            (true, _) => "seat booked",
            (false, true) => "seat selected",
            _ => "seat free",
        };
        let seat_btn = button(&seat.name, class, booked)?;
        let state = state.clone();
        let seat_id = seat.seat_id;
        on_click(&seat_btn, move |_e: MouseEvent| match seat_vm(&state).select(seat_id) {
            Ok(_) => state.notify_subscribers(),
            Err(e) => alert_error(&state.session, &e),
        })?;
        append_child(&grid, &seat_btn)?;
    }
    append_child(&section, &grid)?;

    let summary = match board.selected_seat() {
        Some(seat) => format!("{}: {}", t("asiento_seleccionado", &lang), seat.name),
        None => format!("{}: {}", t("asientos_libres", &lang), board.free_count()),
    };
    append_child(&section, &ElementBuilder::new("p")?.class("seat-summary").text(&summary).build())?;

    let actions = ElementBuilder::new("div")?.class("seat-actions").build();
    let reserve_btn = button(&t("reservar", &lang), "btn-primary", state.is_busy())?;
    {
        let state = state.clone();
        on_click(&reserve_btn, move |_e: MouseEvent| {
            let vm = seat_vm(&state);
            spawn_action(&state, async move { vm.reserve().await });
        })?;
    }
    let exit_btn = button(&t("salir_asiento", &lang), "btn-secondary", state.is_busy())?;
    {
        let state = state.clone();
        on_click(&exit_btn, move |_e: MouseEvent| {
            let vm = seat_vm(&state);
            spawn_action(&state, async move { vm.exit().await });
        })?;
    }
    append_child(&actions, &reserve_btn)?;
    append_child(&actions, &exit_btn)?;
    append_child(&section, &actions)?;

    Ok(section)
}

fn profile_vm(state: &AppState) -> ProfileViewModel {
    ProfileViewModel::new(state.api.clone(), state.profile.clone())
}

fn render_profile_section(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.lang();
    let values = state.profile.borrow().clone();
    let form = state.profile.clone();
    let loading = state.is_busy();

    let section = ElementBuilder::new("section")?.class("profile-section").build();
    append_child(&section, &ElementBuilder::new("h2")?.text(&t("mi_informacion", &lang)).build())?;
    append_child(&section, &readonly_field(&t("numero_estudiante", &lang), &values.id)?)?;
    append_child(&section, &form_field(&t("nombre", &lang), "text", &values.name, form.clone(), |f, v| f.name = v)?)?;

    let email_row = ElementBuilder::new("div")?.class("form-row").build();
    append_child(&email_row, &form_field(&t("email", &lang), "email", &values.email, form.clone(), |f, v| f.set_email(v))?)?;
    let send_btn = button(&t("enviar_codigo", &lang), "btn-secondary", loading)?;
    {
        let state = state.clone();
        on_click(&send_btn, move |_e: MouseEvent| {
            let vm = profile_vm(&state);
            spawn_action(&state, async move { vm.request_email_code().await });
        })?;
    }
    append_child(&email_row, &send_btn)?;
    append_child(&section, &email_row)?;

    let code_row = ElementBuilder::new("div")?.class("form-row").build();
    append_child(
        &code_row,
        &form_field(&t("codigo_verificacion", &lang), "text", &values.code, form.clone(), |f, v| f.code = v)?,
    )?;
    let verify_label = if values.verified { t("verificado", &lang) } else { t("verificar", &lang) };
    let verify_btn = button(&verify_label, "btn-secondary", loading || values.verified)?;
    {
        let state = state.clone();
        on_click(&verify_btn, move |_e: MouseEvent| {
            let vm = profile_vm(&state);
            spawn_action(&state, async move { vm.verify_code().await });
        })?;
    }
    append_child(&code_row, &verify_btn)?;
    append_child(&section, &code_row)?;

    append_child(
        &section,
        &form_field(&t("contrasena_actual", &lang), "password", &values.password, form.clone(), |f, v| f.password = v)?,
    )?;
    append_child(
        &section,
        &form_field(&t("nueva_contrasena", &lang), "password", &values.new_password, form, |f, v| f.new_password = v)?,
    )?;

    let actions = ElementBuilder::new("div")?.class("profile-actions").build();

    let modify_btn = button(&t("guardar_cambios", &lang), "btn-primary", loading)?;
    {
        let state = state.clone();
        on_click(&modify_btn, move |_e: MouseEvent| {
            let vm = profile_vm(&state);
            spawn_action(&state, async move { vm.modify().await });
        })?;
    }

    let logout_btn = button(&t("cerrar_sesion", &lang), "btn-secondary", loading)?;
    {
        let state = state.clone();
        on_click(&logout_btn, move |_e: MouseEvent| {
            let vm = profile_vm(&state);
            spawn_action(&state, async move { vm.logout().await });
        })?;
    }

    let withdraw_btn = button(&t("darse_de_baja", &lang), "btn-danger", loading)?;
    {
        let state = state.clone();
        on_click(&withdraw_btn, move |_e: MouseEvent| {
            let confirmed = state
                .session
                .notifier()
                .confirm(&t("confirmar_baja", &state.lang()));
            let vm = profile_vm(&state);
            spawn_action(&state, async move { vm.withdraw(confirmed).await });
        })?;
    }

    append_child(&actions, &modify_btn)?;
    append_child(&actions, &logout_btn)?;
    append_child(&actions, &withdraw_btn)?;
    append_child(&section, &actions)?;

    Ok(section)
}
