pub const CURSOR_EASING: f64 = 0.15;
pub const CURSOR_HOVER_SELECTOR: &str = "a, #menu, .work-item, button";

/// Cursor that closes a fixed fraction of the gap to the pointer each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFollower {
    x: f64,
    y: f64,
    easing: f64,
}

impl CursorFollower {
    pub fn new(easing: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            easing: easing.clamp(0.0, 1.0),
        }
    }

    pub fn step(&mut self, target_x: f64, target_y: f64) -> (f64, f64) {
        self.x += (target_x - self.x) * self.easing;
        self.y += (target_y - self.y) * self.easing;
        (self.x, self.y)
    }
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new(CURSOR_EASING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_moves_fifteen_percent() {
        let mut cursor = CursorFollower::default();
        let (x, y) = cursor.step(200.0, 100.0);

        assert!((x - 30.0).abs() < 1e-9);
        assert!((y - 15.0).abs() < 1e-9);
    }

    #[test]
    fn converges_on_a_still_pointer() {
        let mut cursor = CursorFollower::default();
        let mut position = (0.0, 0.0);
        for _ in 0..200 {
            position = cursor.step(640.0, 360.0);
        }

        let (x, y) = position;
        assert!((x - 640.0).abs() < 0.01);
        assert!((y - 360.0).abs() < 0.01);
    }
}
