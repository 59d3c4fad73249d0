// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod seat_board;
pub mod notice_pager;
pub mod form_state;
pub mod activity;
pub mod app_state;

pub use seat_board::SeatBoard;
pub use notice_pager::NoticePager;
pub use form_state::*;
pub use activity::Activity;
pub use app_state::AppState;
