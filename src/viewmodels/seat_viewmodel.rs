// ============================================================================
// SEAT VIEWMODEL - carga, selección, reserva y salida
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;

use crate::error::FormError;
use crate::models::ReserveRequest;
use crate::services::{ApiClient, GlooTransport, Transport};
use crate::state::SeatBoard;
use crate::utils::i18n::t;
use crate::viewmodels::server_or;

pub struct SeatViewModel<T: Transport = GlooTransport> {
    api: ApiClient<T>,
    board: Rc<RefCell<SeatBoard>>,
}

impl<T: Transport> SeatViewModel<T> {
    pub fn new(api: ApiClient<T>, board: Rc<RefCell<SeatBoard>>) -> Self {
        Self { api, board }
    }

    fn lang(&self) -> String {
        self.api.session().language()
    }

    /// `/seats` manda; `/reservations` solo añade ocupados
    pub async fn load(&self) -> Result<(), FormError> {
        let seats = self
            .api
            .seats()
            .await
            .map_err(|e| FormError::api("error_carga_asientos", e))?;

        let reserved: Vec<i64> = match self.api.booked_seats().await {
            Ok(booked) => booked.into_iter().map(|b| b.seat_id).collect(),
            Err(e) => {
                log::warn!("⚠️ [SEATS] No se pudieron obtener las reservas: {}", e);
                Vec::new()
            }
        };

        log::info!("💺 [SEATS] {} asientos, {} reservas", seats.len(), reserved.len());
        self.board.borrow_mut().load(seats, reserved);
        Ok(())
    }

    pub fn select(&self, seat_id: i64) -> Result<Option<i64>, FormError> {
        self.board.borrow_mut().select(seat_id)
    }

    pub async fn reserve(&self) -> Result<(), FormError> {
        let session = self.api.session();
        if !session.is_logged_in() {
            return Err(FormError::NotLoggedIn);
        }
        let seat_id = self.board.borrow().selected().ok_or(FormError::NoSeatSelected)?;

        let request = ReserveRequest::new(session.user_id(), seat_id, Utc::now());
        let response = self
            .api
            .reserve(&request)
            .await
            .map_err(|e| FormError::api("fallo_reserva", e))?;

        let message = response
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| t("reserva_exitosa", &self.lang()));
        session.notifier().alert(&message);

        self.board.borrow_mut().clear_selection();
        self.load().await
    }

    pub async fn exit(&self) -> Result<(), FormError> {
        let session = self.api.session();
        if !session.is_logged_in() {
            return Err(FormError::NotLoggedIn);
        }

        let response = self
            .api
            .exit_seat()
            .await
            .map_err(|e| server_or(e, "error_salida", &self.lang()))?;

        let message = response
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| t("salida_exitosa", &self.lang()));
        session.notifier().alert(&message);

        self.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::http::HttpMethod;
    use crate::services::testing::{MockTransport, TestHarness};
    use futures::executor::block_on;
    use serde_json::json;

    fn vm(h: &TestHarness) -> SeatViewModel<Rc<MockTransport>> {
        SeatViewModel::new(h.api.clone(), Rc::new(RefCell::new(SeatBoard::new())))
    }

    fn script_seats(h: &TestHarness) {
        h.transport
            .respond(
                HttpMethod::Get,
                "/seats",
                200,
                json!({ "seats": [
                    { "seat_id": 1, "name": "A1", "state": "free" },
                    { "seat_id": 2, "name": "A2", "state": "book" },
                    { "seat_id": 3, "name": "A3", "state": "free" }
                ] }),
            )
            .respond(HttpMethod::Get, "/reservations", 200, json!([{ "seat_id": "3" }]));
    }

    #[test]
    fn test_load_merges_reservations() {
        let h = TestHarness::logged_in();
        script_seats(&h);
        let vm = vm(&h);

        block_on(vm.load()).unwrap();

        let board = vm.board.borrow();
        assert_eq!(board.seats().len(), 3);
        assert!(board.is_booked(2));
        assert!(board.is_booked(3));
        assert!(!board.is_booked(1));
    }

    #[test]
    fn test_reservations_failure_does_not_block_seats() {
        let h = TestHarness::logged_in();
        h.transport.respond(
            HttpMethod::Get,
            "/seats",
            200,
            json!({ "seats": [{ "seat_id": 1, "name": "A1", "state": "free" }] }),
        );
        let vm = vm(&h);

        block_on(vm.load()).unwrap();
        assert_eq!(vm.board.borrow().seats().len(), 1);
    }

    #[test]
    fn test_reserve_requires_login_and_selection() {
        let h = TestHarness::new();
        assert_eq!(block_on(vm(&h).reserve()), Err(FormError::NotLoggedIn));

        let h = TestHarness::logged_in();
        assert_eq!(block_on(vm(&h).reserve()), Err(FormError::NoSeatSelected));
        assert!(h.transport.requests().is_empty());
    }

    #[test]
    fn test_reserve_sends_selection_and_reloads() {
        let h = TestHarness::logged_in();
        script_seats(&h);
        let vm = vm(&h);
        block_on(vm.load()).unwrap();
        vm.select(1).unwrap();

        h.transport
            .csrf(1)
            .respond(HttpMethod::Post, "/reservations", 200, json!({ "message": "A1 예약 완료" }));
        script_seats(&h);

        block_on(vm.reserve()).unwrap();

        let post = h
            .transport
            .requests()
            .into_iter()
            .find(|r| r.method == HttpMethod::Post)
            .unwrap();
        let body = post.body.unwrap();
        assert_eq!(body["userId"], 7);
        assert_eq!(body["seat_id"], "1");
        assert_eq!(post.headers.len(), 1);
        assert_eq!(h.notifier.alerts(), vec!["A1 예약 완료".to_string()]);
        assert_eq!(vm.board.borrow().selected(), None);
        assert_eq!(h.transport.count(HttpMethod::Get, "/seats"), 2);
    }

    #[test]
    fn test_selecting_booked_seat_through_viewmodel() {
        let h = TestHarness::logged_in();
        script_seats(&h);
        let vm = vm(&h);
        block_on(vm.load()).unwrap();

        assert_eq!(vm.select(2), Err(FormError::SeatAlreadyBooked(2)));
        assert_eq!(vm.board.borrow().selected(), None);
    }

    #[test]
    fn test_exit_failure_uses_server_message() {
        let h = TestHarness::logged_in();
        h.transport
            .csrf(1)
            .respond(HttpMethod::Delete, "/reservations", 400, json!({ "message": "no active seat" }));

        let err = block_on(vm(&h).exit()).unwrap_err();
        assert_eq!(err, FormError::Rejected("no active seat".into()));
    }
}
