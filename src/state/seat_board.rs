// ============================================================================
// SEAT BOARD - asientos + selección local (no persistida)
// ============================================================================

use std::collections::HashSet;

use crate::error::FormError;
use crate::models::Seat;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeatBoard {
    seats: Vec<Seat>,
    booked: HashSet<i64>,
    selected: Option<i64>,
}

impl SeatBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reemplaza los asientos. Ocupado = `state == "book"` en `/seats`
    /// o presente en `/reservations`.
    pub fn load(&mut self, seats: Vec<Seat>, reserved_ids: impl IntoIterator<Item = i64>) {
        let mut booked: HashSet<i64> = seats
            .iter()
            .filter(|seat| seat.is_booked())
            .map(|seat| seat.seat_id)
            .collect();
        booked.extend(reserved_ids);

        if let Some(id) = self.selected {
            if booked.contains(&id) || !seats.iter().any(|s| s.seat_id == id) {
                self.selected = None;
            }
        }

        self.seats = seats;
        self.booked = booked;
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn is_booked(&self, seat_id: i64) -> bool {
        self.booked.contains(&seat_id)
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    pub fn selected_seat(&self) -> Option<&Seat> {
        let id = self.selected?;
        self.seats.iter().find(|seat| seat.seat_id == id)
    }

    /// Click en un asiento: ocupado -> error sin tocar la selección,
    /// el mismo asiento -> deseleccionar, otro -> seleccionar
    pub fn select(&mut self, seat_id: i64) -> Result<Option<i64>, FormError> {
        if self.is_booked(seat_id) {
            return Err(FormError::SeatAlreadyBooked(seat_id));
        }
        self.selected = if self.selected == Some(seat_id) {
            None
        } else {
            Some(seat_id)
        };
        Ok(self.selected)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn free_count(&self) -> usize {
        self.seats.iter().filter(|s| !self.is_booked(s.seat_id)).count()
    }
}
