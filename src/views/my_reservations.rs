// ============================================================================
// MY RESERVATIONS VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::router::Route;
use crate::state::AppState;
use crate::utils::i18n::t;
use crate::views::shared::{nav_link, page, status_line};

pub fn render_my_reservations(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.lang();
    let content = ElementBuilder::new("div")?.class("reservation-history").build();
    append_child(&content, &ElementBuilder::new("h2")?.text(&t("mis_reservas", &lang)).build())?;

    if !state.session.is_logged_in() {
        append_child(&content, &ElementBuilder::new("p")?.text(&t("login_requerido", &lang)).build())?;
        append_child(&content, &nav_link(state, &t("nav_login", &lang), Route::Login, false)?)?;
        return page(state, "reservations-page", content);
    }

    if let Some(status) = status_line(state)? {
        append_child(&content, &status)?;
    }

    let head = ElementBuilder::new("tr")?.build();
    for key in ["estado", "fecha_reserva", "asiento", "motivo_cancelacion"] {
        append_child(&head, &ElementBuilder::new("th")?.text(&t(key, &lang)).build())?;
    }

    let body = ElementBuilder::new("tbody")?.build();
    let rows = state.reservations.borrow();
    if rows.is_empty() && !state.is_loading() {
        let empty = ElementBuilder::new("td")?
            .attr("colspan", "4")?
            .text(&t("sin_reservas", &lang))
            .build();
        append_child(&body, &ElementBuilder::new("tr")?.child(empty)?.build())?;
    }
    for row in rows.iter() {
        let tr = ElementBuilder::new("tr")?.build();
        for text in [row.status.label(&lang), row.booked_at.clone(), row.seat_name.clone(), row.cancel_reason.clone()] {
            append_child(&tr, &ElementBuilder::new("td")?.text(&text).build())?;
        }
        append_child(&body, &tr)?;
    }

    let table = ElementBuilder::new("table")?
        .class("reservation-table")
        .child(ElementBuilder::new("thead")?.child(head)?.build())?
        .child(body)?
        .build();
    append_child(&content, &table)?;

    page(state, "reservations-page", content)
}
