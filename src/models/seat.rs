use serde::{Deserialize, Serialize};

/// Valor de `state` con el que el backend marca un asiento ocupado
const BOOKED_STATE: &str = "book";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatStatus {
    Free,
    Booked,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Seat {
    pub seat_id: i64,
    pub name: String,
    #[serde(default)]
    pub state: String,
}

impl Seat {
    pub fn status(&self) -> SeatStatus {
        if self.state == BOOKED_STATE {
            SeatStatus::Booked
        } else {
            SeatStatus::Free
        }
    }

    pub fn is_booked(&self) -> bool {
        self.status() == SeatStatus::Booked
    }
}

/// Response de `GET /seats`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SeatsResponse {
    #[serde(default)]
    pub seats: Vec<Seat>,
}

/// Elemento de `GET /reservations` (solo interesa el asiento)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct BookedSeat {
    #[serde(deserialize_with = "crate::models::user::id_from_number_or_string")]
    pub seat_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_state() {
        let seats: SeatsResponse = serde_json::from_str(
            r#"{"seats":[{"seat_id":1,"name":"A1","state":"book"},{"seat_id":2,"name":"A2","state":"free"},{"seat_id":3,"name":"A3"}]}"#,
        )
        .unwrap();
        let statuses: Vec<_> = seats.seats.iter().map(Seat::status).collect();
        assert_eq!(statuses, vec![SeatStatus::Booked, SeatStatus::Free, SeatStatus::Free]);
    }

    #[test]
    fn test_booked_seat_accepts_string_ids() {
        let booked: Vec<BookedSeat> = serde_json::from_str(r#"[{"seat_id":"4"},{"seat_id":5}]"#).unwrap();
        assert_eq!(booked.iter().map(|b| b.seat_id).collect::<Vec<_>>(), vec![4, 5]);
    }
}
