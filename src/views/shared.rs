// ============================================================================
// SHARED VIEW HELPERS - header, inputs, botones y acciones async
// ============================================================================

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};

use crate::dom::{append_child, bind_input, on_click, set_input_value, ElementBuilder};
use crate::error::FormError;
use crate::router::Route;
use crate::state::AppState;
use crate::utils::i18n::{t, SUPPORTED_LANGUAGES};
use crate::viewmodels::alert_error;

/// Ejecutar un flujo async: alert si falla, re-render al terminar
pub fn spawn_action<Fut>(state: &AppState, action: Fut)
where
    Fut: Future<Output = Result<(), FormError>> + 'static,
{
    if !state.activity.try_start_action() {
        log::warn!("⚠️ [UI] Acción ignorada: hay otra en curso");
        return;
    }
    let state = state.clone();
    spawn_local(async move {
        let result = action.await;
        state.activity.finish_action();
        if let Err(e) = &result {
            alert_error(&state.session, e);
        }
        state.notify_subscribers();
    });
}

/// Cabecera común: título, navegación e idioma
pub fn render_header(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.lang();
    let route = state.current_route();

    let title = ElementBuilder::new("h1")?
        .class("app-title")
        .text(&t("titulo_app", &lang))
        .build();
    {
        let state = state.clone();
        on_click(&title, move |_e: MouseEvent| state.session.navigate(Route::Main))?;
    }

    let nav = ElementBuilder::new("nav")?.class("app-nav").build();
    let mut links = vec![
        ("nav_asientos", Route::Main),
        ("nav_avisos", Route::Notices { page: 1 }),
    ];
    if state.session.is_logged_in() {
        links.push(("nav_mis_reservas", Route::MyReservations));
    } else {
        links.push(("nav_login", Route::Login));
    }
    for (key, target) in links {
        let active = std::mem::discriminant(&route) == std::mem::discriminant(&target);
        append_child(&nav, &nav_link(state, &t(key, &lang), target, active)?)?;
    }

    let lang_toggle = ElementBuilder::new("div")?.class("language-toggle").build();
    for code in SUPPORTED_LANGUAGES {
        let button = ElementBuilder::new("button")?
            .class(if *code == lang { "toggle-btn active" } else { "toggle-btn" })
            .attr("type", "button")?
            .text(code)
            .build();
        let state = state.clone();
        let code = code.to_string();
        on_click(&button, move |_e: MouseEvent| state.set_language(&code))?;
        append_child(&lang_toggle, &button)?;
    }

    Ok(ElementBuilder::new("header")?
        .class("app-header")
        .child(title)?
        .child(nav)?
        .child(lang_toggle)?
        .build())
}

/// Enlace interno (pushState, sin recarga)
pub fn nav_link(state: &AppState, label: &str, route: Route, active: bool) -> Result<Element, JsValue> {
    let link = ElementBuilder::new("a")?
        .class(if active { "nav-link active" } else { "nav-link" })
        .attr("href", &route.to_path())?
        .text(label)
        .build();
    let state = state.clone();
    on_click(&link, move |e: MouseEvent| {
        e.prevent_default();
        state.session.navigate(route.clone());
    })?;
    Ok(link)
}

/// <label> + <input> ligado a un campo del formulario
pub fn form_field<S, F>(
    label: &str,
    input_type: &str,
    initial: &str,
    form: Rc<RefCell<S>>,
    write: F,
) -> Result<Element, JsValue>
where
    S: 'static,
    F: FnMut(&mut S, String) + 'static,
{
    let input = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", input_type)?
        .attr("placeholder", label)?
        .build();
    set_input_value(&input, initial);
    bind_input(&input, form, write)?;

    ElementBuilder::new("label")?
        .class("form-group")
        .child(ElementBuilder::new("span")?.class("form-label").text(label).build())?
        .child(input)
        .map(ElementBuilder::build)
}

/// Campo de solo lectura (p.ej. 학번 en el perfil)
pub fn readonly_field(label: &str, value: &str) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", "text")?
        .flag("readonly", true)?
        .build();
    set_input_value(&input, value);

    ElementBuilder::new("label")?
        .class("form-group")
        .child(ElementBuilder::new("span")?.class("form-label").text(label).build())?
        .child(input)
        .map(ElementBuilder::build)
}

pub fn button(label: &str, class: &str, disabled: bool) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .class(class)
        .attr("type", "button")?
        .flag("disabled", disabled)?
        .text(label)
        .build())
}

pub fn submit_button(label: &str, disabled: bool) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .class("btn-primary")
        .attr("type", "submit")?
        .flag("disabled", disabled)?
        .text(label)
        .build())
}

/// Contenedor de página con la cabecera arriba
pub fn page(state: &AppState, class: &str, content: Element) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("app-page")
        .child(render_header(state)?)?
        .child(ElementBuilder::new("main")?.class(class).child(content)?.build())?
        .build())
}

/// "Cargando..." o el error de carga, si hay
pub fn status_line(state: &AppState) -> Result<Option<Element>, JsValue> {
    let lang = state.lang();
    if let Some(error) = state.load_error.borrow().as_ref() {
        return Ok(Some(ElementBuilder::new("p")?.class("load-error").text(error).build()));
    }
    if state.is_loading() {
        return Ok(Some(
            ElementBuilder::new("p")?.class("loading").text(&t("cargando", &lang)).build(),
        ));
    }
    Ok(None)
}
