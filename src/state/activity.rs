// ============================================================================
// ACTIVITY - cargas de página en curso y acción del usuario en curso
// ============================================================================
// Las cargas se cuentan (pueden solaparse); las acciones son de una en una.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct Activity {
    pending_loads: Rc<Cell<usize>>,
    action_running: Rc<Cell<bool>>,
}

impl Activity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&self) {
        self.pending_loads.set(self.pending_loads.get() + 1);
    }

    pub fn finish_load(&self) {
        self.pending_loads.set(self.pending_loads.get().saturating_sub(1));
    }

    pub fn is_loading(&self) -> bool {
        self.pending_loads.get() > 0
    }

    /// false si ya hay una acción en curso
    pub fn try_start_action(&self) -> bool {
        if self.action_running.get() {
            return false;
        }
        self.action_running.set(true);
        true
    }

    pub fn finish_action(&self) {
        self.action_running.set(false);
    }

    pub fn is_action_running(&self) -> bool {
        self.action_running.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_loads_stay_loading_until_last_finishes() {
        let activity = Activity::new();
        activity.begin_load();
        activity.begin_load();

        activity.finish_load();
        assert!(activity.is_loading());

        activity.finish_load();
        assert!(!activity.is_loading());

        activity.finish_load();
        assert!(!activity.is_loading());
    }

    #[test]
    fn test_action_is_not_blocked_by_page_load() {
        let activity = Activity::new();
        activity.begin_load();

        assert!(activity.try_start_action());
        assert!(!activity.try_start_action());
        assert!(activity.is_loading());

        activity.finish_action();
        assert!(!activity.is_action_running());
        assert!(activity.is_loading());
    }
}
