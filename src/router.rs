// ============================================================================
// ROUTER - rutas de la SPA sobre history.pushState
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::services::session_service::Navigator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Main,
    Login,
    Register,
    ChangePassword,
    AccountRecovery,
    Notices { page: usize },
    NoticeDetail(i64),
    MyReservations,
}

impl Route {
    /// Parsear path + query ("?page=2"). Rutas desconocidas -> Main
    pub fn parse(path: &str, query: &str) -> Self {
        let segments: Vec<&str> = path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Route::Main,
            [one] => match one.to_ascii_lowercase().as_str() {
                "login" => Route::Login,
                "register" => Route::Register,
                "changepw" => Route::ChangePassword,
                "accountrecovery" => Route::AccountRecovery,
                "myreservation" => Route::MyReservations,
                "notice" => Route::Notices { page: page_from_query(query) },
                _ => Route::Main,
            },
            ["notice", id] => id
                .parse()
                .map(Route::NoticeDetail)
                .unwrap_or(Route::Notices { page: 1 }),
            _ => Route::Main,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Main => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::ChangePassword => "/changepw".to_string(),
            Route::AccountRecovery => "/accountrecovery".to_string(),
            Route::Notices { page } if *page > 1 => format!("/notice?page={}", page),
            Route::Notices { .. } => "/notice".to_string(),
            Route::NoticeDetail(id) => format!("/notice/{}", id),
            Route::MyReservations => "/myreservation".to_string(),
        }
    }
}

fn page_from_query(query: &str) -> usize {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == "page")
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

/// Ruta actual según window.location
pub fn current_route() -> Route {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return Route::Main;
    };
    let path = location.pathname().unwrap_or_default();
    let query = location.search().unwrap_or_default();
    Route::parse(&path, &query)
}

/// Navegación real: pushState + re-render
#[derive(Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, route: Route) {
        let path = route.to_path();
        log::info!("🧭 [ROUTER] Navegando a {}", path);

        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&path)) {
                log::error!("❌ [ROUTER] pushState falló: {:?}", e);
            }
        }
        crate::rerender_app();
    }
}

/// Re-render con back/forward del navegador. Registrar UNA sola vez en el arranque.
pub fn listen_popstate() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
        log::info!("🧭 [ROUTER] popstate -> {:?}", current_route());
        crate::rerender_app();
    }) as Box<dyn FnMut(web_sys::Event)>);

    window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
