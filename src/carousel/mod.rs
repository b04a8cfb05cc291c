//! Scroll-driven works carousel.
//!
//! Everything here is platform independent. The browser side implements
//! [`CarouselSurface`] over real elements; tests implement it over vectors.

pub mod auto_scroll;
pub mod controller;
pub mod indicator;
pub mod mapper;
pub mod tracker;
pub mod wheel;

pub use auto_scroll::{AutoScrollOnce, AutoScrollState};
pub use controller::CarouselController;
pub use tracker::{BandTracker, CentralBand, VisibilityChange, VisibilityFeed};
pub use wheel::{WheelDecision, WheelInput};

/// Horizontal extent of an item, in container content coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemSpan {
    pub left: f64,
    pub width: f64,
}

impl ItemSpan {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Everything the carousel needs from the page: the scroll container, the
/// items inside it, the companion text list, and the indicator dots.
pub trait CarouselSurface {
    fn item_count(&self) -> usize;
    fn text_count(&self) -> usize;
    fn dot_count(&self) -> usize;

    fn set_item_active(&mut self, index: usize, active: bool);
    fn set_text_active(&mut self, index: usize, active: bool);
    /// Signed distance of a text entry from the current text index.
    fn set_text_distance(&mut self, index: usize, distance: isize);
    fn set_text_translation(&mut self, offset_px: f64);
    fn set_dot_lit(&mut self, index: usize, lit: bool);

    fn viewport_width(&self) -> f64;
    fn container_width(&self) -> f64;
    fn item_span(&self, index: usize) -> Option<ItemSpan>;

    fn scroll_by_instant(&mut self, delta_x: f64);
    fn scroll_to_smooth(&mut self, left: f64);
    fn reset_scroll(&mut self);
}

#[cfg(test)]
pub(crate) mod fake {
    use super::{CarouselSurface, ItemSpan};

    #[derive(Clone, Debug, PartialEq)]
    pub struct FakeSurface {
        pub items: Vec<bool>,
        pub texts: Vec<bool>,
        pub distances: Vec<isize>,
        pub dots: Vec<bool>,
        pub translation: Option<f64>,
        pub spans: Vec<ItemSpan>,
        pub viewport_width: f64,
        pub container_width: f64,
        pub scroll_left: f64,
        pub smooth_target: Option<f64>,
    }

    impl FakeSurface {
        /// `content` content items between a lead and a contact item, each
        /// 400px wide in a 1000px container.
        pub fn with_content(content: usize) -> Self {
            let len = content + 2;
            Self {
                items: vec![false; len],
                texts: vec![false; content],
                distances: vec![0; content],
                dots: vec![false; len],
                translation: None,
                spans: (0..len)
                    .map(|index| ItemSpan::new(index as f64 * 400.0, 400.0))
                    .collect(),
                viewport_width: 1_280.0,
                container_width: 1_000.0,
                scroll_left: 0.0,
                smooth_target: None,
            }
        }

        pub fn active_items(&self) -> Vec<usize> {
            indices_of(&self.items)
        }

        pub fn active_texts(&self) -> Vec<usize> {
            indices_of(&self.texts)
        }

        pub fn lit_dots(&self) -> Vec<usize> {
            indices_of(&self.dots)
        }
    }

    fn indices_of(flags: &[bool]) -> Vec<usize> {
        flags
            .iter()
            .enumerate()
            .filter_map(|(index, flag)| flag.then_some(index))
            .collect()
    }

    impl CarouselSurface for FakeSurface {
        fn item_count(&self) -> usize {
            self.items.len()
        }

        fn text_count(&self) -> usize {
            self.texts.len()
        }

        fn dot_count(&self) -> usize {
            self.dots.len()
        }

        fn set_item_active(&mut self, index: usize, active: bool) {
            if let Some(slot) = self.items.get_mut(index) {
                *slot = active;
            }
        }

        fn set_text_active(&mut self, index: usize, active: bool) {
            if let Some(slot) = self.texts.get_mut(index) {
                *slot = active;
            }
        }

        fn set_text_distance(&mut self, index: usize, distance: isize) {
            if let Some(slot) = self.distances.get_mut(index) {
                *slot = distance;
            }
        }

        fn set_text_translation(&mut self, offset_px: f64) {
            self.translation = Some(offset_px);
        }

        fn set_dot_lit(&mut self, index: usize, lit: bool) {
            if let Some(slot) = self.dots.get_mut(index) {
                *slot = lit;
            }
        }

        fn viewport_width(&self) -> f64 {
            self.viewport_width
        }

        fn container_width(&self) -> f64 {
            self.container_width
        }

        fn item_span(&self, index: usize) -> Option<ItemSpan> {
            self.spans.get(index).copied()
        }

        fn scroll_by_instant(&mut self, delta_x: f64) {
            self.scroll_left += delta_x;
        }

        fn scroll_to_smooth(&mut self, left: f64) {
            self.smooth_target = Some(left);
            self.scroll_left = left;
        }

        fn reset_scroll(&mut self) {
            self.scroll_left = 0.0;
        }
    }
}
