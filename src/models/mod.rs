pub mod session;
pub mod seat;
pub mod reservation;
pub mod notice;
pub mod user;

pub use session::{SessionState, UserId};
pub use seat::{Seat, SeatStatus, SeatsResponse, BookedSeat};
pub use reservation::{Reservation, ReservationStatus, ReservationRow, ReservationsResponse, ReserveRequest};
pub use notice::{NoticeSummary, NoticeDetail, NoticeListResponse, NoticeDetailResponse};
pub use user::*;
