#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    pub delta_y: f64,
    pub ctrl_key: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelDecision {
    /// Leave the event to the browser (pinch-zoom or native horizontal scroll).
    PassThrough,
    /// Suppress the native scroll and move the container by this many pixels.
    ScrollBy(f64),
}

pub fn remap(input: WheelInput, speed_ratio: f64) -> WheelDecision {
    if input.ctrl_key || input.delta_y == 0.0 {
        return WheelDecision::PassThrough;
    }

    WheelDecision::ScrollBy(input.delta_y * speed_ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_delta_becomes_scaled_horizontal_scroll() {
        let input = WheelInput {
            delta_y: 100.0,
            ctrl_key: false,
        };
        assert_eq!(remap(input, 2.5), WheelDecision::ScrollBy(250.0));

        let upward = WheelInput {
            delta_y: -40.0,
            ctrl_key: false,
        };
        assert_eq!(remap(upward, 3.0), WheelDecision::ScrollBy(-120.0));
    }

    #[test]
    fn zoom_gesture_and_horizontal_wheel_pass_through() {
        let zoom = WheelInput {
            delta_y: 100.0,
            ctrl_key: true,
        };
        let horizontal = WheelInput {
            delta_y: 0.0,
            ctrl_key: false,
        };

        assert_eq!(remap(zoom, 2.5), WheelDecision::PassThrough);
        assert_eq!(remap(horizontal, 2.5), WheelDecision::PassThrough);
    }
}
