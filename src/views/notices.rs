// ============================================================================
// NOTICE VIEWS - tabla paginada y detalle
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::router::Route;
use crate::state::AppState;
use crate::utils::i18n::t;
use crate::views::shared::{button, nav_link, page, status_line};

fn cell(tag: &str, text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new(tag)?.text(text).build())
}

pub fn render_notice_list(state: &AppState, page_number: usize) -> Result<Element, JsValue> {
    let lang = state.lang();
    let pager = state.notices.borrow().clone();

    let content = ElementBuilder::new("div")?.class("notice-board").build();
    append_child(&content, &ElementBuilder::new("h2")?.text(&t("avisos", &lang)).build())?;
    if let Some(status) = status_line(state)? {
        append_child(&content, &status)?;
    }

    let head = ElementBuilder::new("tr")?
        .children([
            cell("th", &t("numero", &lang))?,
            cell("th", &t("titulo", &lang))?,
            cell("th", &t("fecha", &lang))?,
            cell("th", &t("vistas", &lang))?,
        ])?
        .build();
    let body = ElementBuilder::new("tbody")?.build();

    let rows = pager.page_slice(page_number);
    if rows.is_empty() && !state.is_loading() {
        let empty = ElementBuilder::new("td")?
            .attr("colspan", "4")?
            .text(&t("sin_avisos", &lang))
            .build();
        append_child(&body, &ElementBuilder::new("tr")?.child(empty)?.build())?;
    }
    for (index, notice) in rows.iter().enumerate() {
        let title_cell = ElementBuilder::new("td")?
            .child(nav_link(state, &notice.title, Route::NoticeDetail(notice.notice_id), false)?)?
            .build();
        let row = ElementBuilder::new("tr")?
            .children([
                cell("td", &pager.row_number(page_number, index).to_string())?,
                title_cell,
                cell("td", &notice.date)?,
                cell("td", &notice.views.to_string())?,
            ])?
            .build();
        append_child(&body, &row)?;
    }

    let table = ElementBuilder::new("table")?
        .class("notice-table")
        .child(ElementBuilder::new("thead")?.child(head)?.build())?
        .child(body)?
        .build();
    append_child(&content, &table)?;

    let pagination = ElementBuilder::new("div")?.class("pagination").build();
    for number in 1..=pager.page_count() {
        let class = if number == page_number { "page-btn active" } else { "page-btn" };
        let page_btn = button(&number.to_string(), class, false)?;
        let state = state.clone();
        on_click(&page_btn, move |_e: MouseEvent| {
            state.session.navigate(Route::Notices { page: number });
        })?;
        append_child(&pagination, &page_btn)?;
    }
    append_child(&content, &pagination)?;

    page(state, "notice-list-page", content)
}

pub fn render_notice_detail(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.lang();
    let content = ElementBuilder::new("article")?.class("notice-detail").build();

    if let Some(status) = status_line(state)? {
        append_child(&content, &status)?;
    }
    if let Some(notice) = state.notice_detail.borrow().as_ref() {
        append_child(&content, &ElementBuilder::new("h2")?.text(&notice.title).build())?;
        append_child(
            &content,
            &ElementBuilder::new("p")?
                .class("notice-author")
                .text(&format!("{}: {}", t("autor", &lang), notice.author_name))
                .build(),
        )?;
        // Texto plano: el contenido del servidor nunca se inserta como HTML
        append_child(&content, &ElementBuilder::new("div")?.class("notice-body").text(&notice.content).build())?;
    }

    append_child(&content, &nav_link(state, &t("volver_lista", &lang), Route::Notices { page: 1 }, false)?)?;
    page(state, "notice-detail-page", content)
}
