// ============================================================================
// SEAT RESERVATION PWA - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: funciones que renderizan DOM
// - ViewModels: lógica de los flujos
// - Services: API (con refresh de tokens) + sesión
// - State: Rc<RefCell> + subscribers
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod dom;
pub mod views;
pub mod utils;
pub mod app;

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!("🚀 Seat Reservation App - Rust Puro + MVVM ({})", CONFIG.backend_url);

    let mut app = App::new()?;
    app.render()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    router::listen_popstate()?;
    Ok(())
}

/// Re-render completo. Se difiere al siguiente tick para poder llamarse
/// desde dentro de un render o de un handler.
pub fn rerender_app() {
    Timeout::new(0, render_now).forget();
}

fn render_now() {
    APP.with(|cell| match cell.try_borrow_mut() {
        Ok(mut guard) => match guard.as_mut() {
            Some(app) => {
                if let Err(e) = app.render() {
                    log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
        },
        Err(_) => {
            log::warn!("⚠️ [RERENDER] Render en curso, reintentando");
            rerender_app();
        }
    });
}
