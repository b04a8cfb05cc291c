use super::ItemSpan;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AutoScrollState {
    Idle,
    Armed { target: f64 },
    Fired,
    Canceled,
}

/// Scroll offset that puts the center of `item` at the center of a
/// container `container_width` wide.
pub fn centering_offset(item: ItemSpan, container_width: f64) -> f64 {
    item.center() - container_width / 2.0
}

/// One-shot centering scroll. `Fired` and `Canceled` are terminal and
/// mutually exclusive; there is no way back to `Armed`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoScrollOnce {
    state: AutoScrollState,
}

impl Default for AutoScrollOnce {
    fn default() -> Self {
        Self {
            state: AutoScrollState::Idle,
        }
    }
}

impl AutoScrollOnce {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AutoScrollState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, AutoScrollState::Armed { .. })
    }

    pub fn arm(&mut self, target: f64) -> bool {
        if self.state != AutoScrollState::Idle {
            return false;
        }

        self.state = AutoScrollState::Armed { target };
        true
    }

    /// Returns the scroll target when this call moved the state to `Fired`.
    pub fn fire(&mut self) -> Option<f64> {
        let AutoScrollState::Armed { target } = self.state else {
            return None;
        };

        self.state = AutoScrollState::Fired;
        Some(target)
    }

    pub fn cancel(&mut self) -> bool {
        if !self.is_armed() {
            return false;
        }

        self.state = AutoScrollState::Canceled;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_centers_item_in_container() {
        let item = ItemSpan::new(600.0, 400.0);
        assert_eq!(centering_offset(item, 1_000.0), 300.0);
    }

    #[test]
    fn fire_after_arm_yields_target_once() {
        let mut auto_scroll = AutoScrollOnce::new();
        assert!(auto_scroll.arm(300.0));

        assert_eq!(auto_scroll.fire(), Some(300.0));
        assert_eq!(auto_scroll.fire(), None);
        assert!(!auto_scroll.cancel());
        assert_eq!(auto_scroll.state(), AutoScrollState::Fired);
    }

    #[test]
    fn cancel_before_fire_prevents_scroll() {
        let mut auto_scroll = AutoScrollOnce::new();
        auto_scroll.arm(300.0);

        assert!(auto_scroll.cancel());
        assert_eq!(auto_scroll.fire(), None);
        assert_eq!(auto_scroll.state(), AutoScrollState::Canceled);
    }

    #[test]
    fn terminal_states_cannot_rearm() {
        let mut auto_scroll = AutoScrollOnce::new();
        auto_scroll.arm(10.0);
        auto_scroll.cancel();

        assert!(!auto_scroll.arm(20.0));
        assert!(!AutoScrollOnce::new().cancel());
    }
}
