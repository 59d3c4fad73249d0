use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::UserId;

// ============================================================================
// RESERVAS - proyección de solo lectura + request de reserva
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationStatus {
    Active,
    Ended,
    Other(String),
}

impl ReservationStatus {
    pub fn from_wire(state: &str) -> Self {
        match state {
            "book" => ReservationStatus::Active,
            "end" | "cancel" => ReservationStatus::Ended,
            other => ReservationStatus::Other(other.to_string()),
        }
    }

    pub fn label(&self, lang: &str) -> String {
        use crate::utils::i18n::t;
        match self {
            ReservationStatus::Active => t("reserva_activa", lang),
            ReservationStatus::Ended => t("reserva_terminada", lang),
            ReservationStatus::Other(raw) => raw.clone(),
        }
    }
}

/// Elemento de `GET /users/reservations`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Reservation {
    pub state: String,
    pub book_date: String,
    pub seat_name: String,
    #[serde(default)]
    pub cancel_reason: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ReservationsResponse {
    #[serde(default)]
    pub reservations: Vec<Reservation>,
}

/// Fila lista para pintar en la tabla de "mis reservas"
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationRow {
    pub status: ReservationStatus,
    pub booked_at: String,
    pub seat_name: String,
    pub cancel_reason: String,
}

impl Reservation {
    pub fn to_row(&self) -> ReservationRow {
        ReservationRow {
            status: ReservationStatus::from_wire(&self.state),
            booked_at: format_book_date(&self.book_date),
            seat_name: self.seat_name.clone(),
            cancel_reason: self
                .cancel_reason
                .as_deref()
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .unwrap_or("-")
                .to_string(),
        }
    }
}

/// "2024-03-05T09:07:00Z" / "2024-03-05 09:07:00" -> "2024. 03. 05. 09:07".
/// Si no se puede parsear se muestra tal cual.
pub fn format_book_date(raw: &str) -> String {
    const DISPLAY: &str = "%Y. %m. %d. %H:%M";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY).to_string();
    }
    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format(DISPLAY).to_string();
        }
    }
    raw.to_string()
}

/// Body de `POST /reservations`
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct ReserveRequest {
    #[serde(rename = "userId")]
    pub user_id: Option<UserId>,
    pub seat_id: String,
    pub book_date: String,
}

impl ReserveRequest {
    pub fn new(user_id: Option<UserId>, seat_id: i64, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            seat_id: seat_id.to_string(),
            book_date: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}
