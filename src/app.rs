// ============================================================================
// APP - Aplicación principal: ruta actual -> carga de datos -> render
// ============================================================================

use std::future::Future;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, clear_children, get_element_by_id};
use crate::error::FormError;
use crate::router::{current_route, Route};
use crate::state::AppState;
use crate::viewmodels::{NoticeViewModel, ProfileViewModel, ReservationViewModel, SeatViewModel};
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
    entered: Option<Route>,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app").ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();
        state.session.restore();
        state.subscribe_to_changes(crate::rerender_app);

        Ok(Self {
            state,
            root,
            entered: None,
        })
    }

    pub fn render(&mut self) -> Result<(), JsValue> {
        let route = current_route();

        if self.entered.as_ref() != Some(&route) {
            // Con sesión activa el login no tiene sentido
            if route == Route::Login && self.state.session.is_logged_in() {
                self.state.session.navigate(Route::Main);
                return Ok(());
            }
            log::info!("🧭 [APP] Entrando en {:?}", route);
            self.state.enter_route(route.clone());
            self.load_route_data(&route);
            self.entered = Some(route);
        }

        clear_children(&self.root);
        append_child(&self.root, &render_app(&self.state)?)
    }

    /// Datos que cada página pide al entrar
    fn load_route_data(&self, route: &Route) {
        let state = &self.state;
        let api = state.api.clone();

        match route {
            Route::Main => {
                let seats = SeatViewModel::new(api.clone(), state.seats.clone());
                let profile = ProfileViewModel::new(api, state.profile.clone());
                self.spawn_load(async move {
                    seats.load().await?;
                    profile.load().await
                });
            }
            Route::Notices { .. } => {
                let vm = NoticeViewModel::new(api, state.notices.clone());
                self.spawn_load(async move { vm.load_list().await });
            }
            Route::NoticeDetail(id) => {
                let id = *id;
                let vm = NoticeViewModel::new(api, state.notices.clone());
                let counter = NoticeViewModel::new(state.api.clone(), state.notices.clone());
                spawn_local(async move { counter.count_view(id).await });

                let detail = state.notice_detail.clone();
                *detail.borrow_mut() = None;
                self.spawn_load(async move {
                    let notice = vm.load_detail(id).await?;
                    *detail.borrow_mut() = Some(notice);
                    Ok::<(), FormError>(())
                });
            }
            Route::MyReservations if state.session.is_logged_in() => {
                let vm = ReservationViewModel::new(api);
                let rows = state.reservations.clone();
                self.spawn_load(async move {
                    let loaded = vm.load().await?;
                    *rows.borrow_mut() = loaded;
                    Ok::<(), FormError>(())
                });
            }
            _ => {}
        }
    }

    /// Carga en segundo plano; el error queda en pantalla en vez de un alert
    fn spawn_load<Fut>(&self, load: Fut)
    where
        Fut: Future<Output = Result<(), FormError>> + 'static,
    {
        let state = self.state.clone();
        state.activity.begin_load();
        spawn_local(async move {
            if let Err(e) = load.await {
                log::error!("❌ [APP] Error cargando datos: {}", e);
                *state.load_error.borrow_mut() = Some(e.user_message(&state.lang()));
            }
            state.activity.finish_load();
            state.notify_subscribers();
        });
    }
}
