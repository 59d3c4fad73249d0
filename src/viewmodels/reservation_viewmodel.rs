// ============================================================================
// RESERVATION VIEWMODEL - historial de reservas del usuario
// ============================================================================

use crate::error::FormError;
use crate::models::ReservationRow;
use crate::services::{ApiClient, GlooTransport, Transport};

pub struct ReservationViewModel<T: Transport = GlooTransport> {
    api: ApiClient<T>,
}

impl<T: Transport> ReservationViewModel<T> {
    pub fn new(api: ApiClient<T>) -> Self {
        Self { api }
    }

    pub async fn load(&self) -> Result<Vec<ReservationRow>, FormError> {
        if !self.api.session().is_logged_in() {
            return Err(FormError::NotLoggedIn);
        }
        let reservations = self
            .api
            .my_reservations()
            .await
            .map_err(|e| FormError::api("error_carga_reservas", e))?;
        Ok(reservations.iter().map(|r| r.to_row()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReservationStatus;
    use crate::services::http::HttpMethod;
    use crate::services::testing::TestHarness;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_logged_out_needs_login() {
        let h = TestHarness::new();
        let vm = ReservationViewModel::new(h.api.clone());
        assert_eq!(block_on(vm.load()), Err(FormError::NotLoggedIn));
        assert!(h.transport.requests().is_empty());
    }

    #[test]
    fn test_rows_are_mapped_for_display() {
        let h = TestHarness::logged_in();
        h.transport.csrf(1).respond(
            HttpMethod::Get,
            "/users/reservations",
            200,
            json!({ "reservations": [
                { "state": "book", "book_date": "2024-03-05 09:07:00", "seat_name": "A1", "cancel_reason": null },
                { "state": "cancel", "book_date": "2024-03-04 10:00:00", "seat_name": "B2", "cancel_reason": "no-show" }
            ] }),
        );
        let vm = ReservationViewModel::new(h.api.clone());

        let rows = block_on(vm.load()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].status, ReservationStatus::Active);
        assert_eq!(rows[0].booked_at, "2024. 03. 05. 09:07");
        assert_eq!(rows[0].cancel_reason, "-");
        assert_eq!(rows[1].cancel_reason, "no-show");
    }
}
