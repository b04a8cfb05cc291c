use serde_json::json;

use super::auto_scroll::{centering_offset, AutoScrollOnce, AutoScrollState};
use super::indicator::Indicator;
use super::mapper::{Presentation, Presenter};
use super::tracker::{pick_centered, CentralBand, VisibilityChange};
use super::wheel::{remap, WheelDecision, WheelInput};
use super::CarouselSurface;
use crate::config::CarouselConfig;
use crate::log::EventLog;

/// Single owner of the carousel state: the active index, the lit dot, and
/// the auto-scroll lifecycle. Every page mutation goes through `surface`.
pub struct CarouselController<S> {
    surface: S,
    config: CarouselConfig,
    presenter: Presenter,
    indicator: Indicator,
    auto_scroll: AutoScrollOnce,
    active: Option<usize>,
    log: EventLog,
}

impl<S: CarouselSurface> CarouselController<S> {
    pub fn new(mut surface: S, config: CarouselConfig, log: EventLog) -> Self {
        surface.reset_scroll();
        let indicator = Indicator::new(surface.dot_count());
        indicator.render(&mut surface);

        Self {
            surface,
            presenter: Presenter::new(config.text_offset),
            config,
            indicator,
            auto_scroll: AutoScrollOnce::new(),
            active: None,
            log,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn lit_dot(&self) -> Option<usize> {
        self.indicator.lit()
    }

    pub fn auto_scroll_state(&self) -> AutoScrollState {
        self.auto_scroll.state()
    }

    pub fn band(&self) -> CentralBand {
        CentralBand::new(self.config.band_shrink, self.config.visibility_threshold)
    }

    /// Position of the item the auto-scroll centers: the first content item.
    pub fn first_content_index(&self) -> usize {
        self.config.text_offset
    }

    /// Handles one visibility batch; returns the newly applied index.
    pub fn on_visibility(&mut self, batch: &[VisibilityChange]) -> Option<usize> {
        let index = pick_centered(batch)?;
        self.select(index).map(|presentation| presentation.index)
    }

    pub fn select(&mut self, index: usize) -> Option<Presentation> {
        let row_height = self.config.row_height(self.surface.viewport_width());
        let Some(presentation) =
            self.presenter
                .present(&mut self.surface, &mut self.indicator, index, row_height)
        else {
            self.log.debug(
                "carousel_index_out_of_range",
                json!({ "index": index, "items": self.surface.item_count() }),
            );
            return None;
        };

        if self.active != Some(index) {
            self.log.debug(
                "carousel_index",
                json!({
                    "index": index,
                    "textIndex": presentation.text_index,
                    "translationPx": presentation.translation_px,
                }),
            );
        }
        self.active = Some(index);
        Some(presentation)
    }

    pub fn on_wheel(&mut self, input: WheelInput) -> WheelDecision {
        let decision = remap(input, self.config.speed_ratio);
        if let WheelDecision::ScrollBy(delta_x) = decision {
            self.surface.scroll_by_instant(delta_x);
        }
        decision
    }

    /// Arms the one-shot centering scroll. Returns the delay to schedule it
    /// with, or `None` when already used or the target item is missing.
    pub fn arm_auto_scroll(&mut self) -> Option<u32> {
        let first = self.first_content_index();
        let Some(item) = self.surface.item_span(first) else {
            self.log.debug("auto_scroll_target_missing", json!({ "index": first }));
            return None;
        };

        let target = centering_offset(item, self.surface.container_width());
        if !self.auto_scroll.arm(target) {
            return None;
        }

        self.log.debug(
            "auto_scroll_armed",
            json!({ "target": target, "delayMs": self.config.auto_scroll_delay_ms }),
        );
        Some(self.config.auto_scroll_delay_ms)
    }

    pub fn fire_auto_scroll(&mut self) -> bool {
        let Some(target) = self.auto_scroll.fire() else {
            return false;
        };

        self.surface.scroll_to_smooth(target);
        self.log.info("auto_scroll_fired", json!({ "target": target }));
        true
    }

    pub fn cancel_auto_scroll(&mut self) -> bool {
        if !self.auto_scroll.cancel() {
            return false;
        }

        self.log.info("auto_scroll_canceled", json!({}));
        true
    }
}
