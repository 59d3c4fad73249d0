// ============================================================================
// VIEWS - funciones que renderizan DOM (sin lógica de negocio)
// ============================================================================

pub mod shared;
pub mod login;
pub mod verification;
pub mod main_page;
pub mod notices;
pub mod my_reservations;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::router::Route;
use crate::state::AppState;

pub use login::render_login;
pub use main_page::render_main;
pub use my_reservations::render_my_reservations;
pub use notices::{render_notice_detail, render_notice_list};
pub use verification::{render_account_recovery, render_change_password, render_register};

/// Vista de la ruta actual
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    match state.current_route() {
        Route::Main => render_main(state),
        Route::Login => render_login(state),
        Route::Register => render_register(state),
        Route::ChangePassword => render_change_password(state),
        Route::AccountRecovery => render_account_recovery(state),
        Route::Notices { page } => render_notice_list(state, page),
        Route::NoticeDetail(_) => render_notice_detail(state),
        Route::MyReservations => render_my_reservations(state),
    }
}
