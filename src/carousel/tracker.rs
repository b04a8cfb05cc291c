use super::ItemSpan;

/// One item's transition into or out of the central band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibilityChange {
    pub index: usize,
    pub intersecting: bool,
}

impl VisibilityChange {
    pub fn entered(index: usize) -> Self {
        Self {
            index,
            intersecting: true,
        }
    }

    pub fn left(index: usize) -> Self {
        Self {
            index,
            intersecting: false,
        }
    }
}

/// Lowest item index that entered the band in this batch.
pub fn pick_centered(batch: &[VisibilityChange]) -> Option<usize> {
    batch
        .iter()
        .filter(|change| change.intersecting)
        .map(|change| change.index)
        .min()
}

/// The judgment region: the container viewport shrunk by `shrink` of its
/// width from both horizontal edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CentralBand {
    shrink: f64,
    threshold: f64,
}

impl CentralBand {
    pub fn new(shrink: f64, threshold: f64) -> Self {
        Self {
            shrink: shrink.clamp(0.0, 0.49),
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Root margin string in IntersectionObserver syntax.
    pub fn root_margin(&self) -> String {
        let percent = (self.shrink * 100.0 * 100.0).round() / 100.0;
        format!("0px -{percent}% 0px -{percent}%")
    }

    /// Band edges for a viewport of `width`, relative to its left edge.
    pub fn edges(&self, width: f64) -> (f64, f64) {
        (width * self.shrink, width * (1.0 - self.shrink))
    }

    /// Fraction of the item's width inside the band. `item` is relative to
    /// the viewport's left edge.
    pub fn intersection_ratio(&self, viewport_width: f64, item: ItemSpan) -> f64 {
        if item.width <= 0.0 {
            return 0.0;
        }

        let (band_left, band_right) = self.edges(viewport_width);
        let overlap = item.right().min(band_right) - item.left.max(band_left);
        (overlap.max(0.0) / item.width).min(1.0)
    }

    pub fn is_centered(&self, viewport_width: f64, item: ItemSpan) -> bool {
        let ratio = self.intersection_ratio(viewport_width, item);
        ratio > 0.0 && ratio >= self.threshold
    }
}

/// Geometry-driven tracker reporting only threshold crossings, the way an
/// intersection observer would.
#[derive(Clone, Debug)]
pub struct BandTracker {
    band: CentralBand,
    centered: Vec<bool>,
}

impl BandTracker {
    pub fn new(band: CentralBand, item_count: usize) -> Self {
        Self {
            band,
            centered: vec![false; item_count],
        }
    }

    /// `spans` are in container content coordinates; `scroll_left` maps them
    /// into the viewport.
    pub fn observe(
        &mut self,
        scroll_left: f64,
        viewport_width: f64,
        spans: &[ItemSpan],
    ) -> Vec<VisibilityChange> {
        let mut changes = Vec::new();

        for (index, span) in spans.iter().enumerate() {
            let Some(previous) = self.centered.get_mut(index) else {
                break;
            };
            let relative = ItemSpan::new(span.left - scroll_left, span.width);
            let now = self.band.is_centered(viewport_width, relative);
            if now != *previous {
                *previous = now;
                changes.push(VisibilityChange {
                    index,
                    intersecting: now,
                });
            }
        }

        changes
    }
}

type Subscriber = Box<dyn FnMut(&[VisibilityChange])>;

/// Push-based producer of visibility batches.
#[derive(Default)]
pub struct VisibilityFeed {
    subscribers: Vec<Subscriber>,
}

impl VisibilityFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&[VisibilityChange]) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn publish(&mut self, batch: &[VisibilityChange]) {
        if batch.is_empty() {
            return;
        }

        for subscriber in self.subscribers.iter_mut() {
            subscriber(batch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn root_margin_matches_observer_syntax() {
        assert_eq!(CentralBand::new(0.25, 0.1).root_margin(), "0px -25% 0px -25%");
        assert_eq!(CentralBand::new(0.45, 0.1).root_margin(), "0px -45% 0px -45%");
        assert_eq!(CentralBand::new(0.0, 0.6).root_margin(), "0px -0% 0px -0%");
    }

    #[test]
    fn pick_prefers_lowest_index_among_entered() {
        let batch = [
            VisibilityChange::entered(3),
            VisibilityChange::left(1),
            VisibilityChange::entered(2),
        ];
        assert_eq!(pick_centered(&batch), Some(2));
        assert_eq!(pick_centered(&[VisibilityChange::left(4)]), None);
    }

    #[test]
    fn ratio_counts_only_the_band() {
        let band = CentralBand::new(0.25, 0.1);
        // band is 250..750 in a 1000px viewport
        assert_eq!(band.intersection_ratio(1_000.0, ItemSpan::new(0.0, 200.0)), 0.0);
        assert_eq!(band.intersection_ratio(1_000.0, ItemSpan::new(200.0, 100.0)), 0.5);
        assert_eq!(band.intersection_ratio(1_000.0, ItemSpan::new(300.0, 400.0)), 1.0);
    }

    #[test]
    fn higher_threshold_needs_more_of_the_item() {
        let item = ItemSpan::new(700.0, 200.0);
        assert!(CentralBand::new(0.25, 0.1).is_centered(1_000.0, item));
        assert!(!CentralBand::new(0.25, 0.6).is_centered(1_000.0, item));
    }

    #[test]
    fn tracker_reports_only_crossings() {
        let spans: Vec<ItemSpan> = (0..4)
            .map(|index| ItemSpan::new(index as f64 * 500.0, 500.0))
            .collect();
        let mut tracker = BandTracker::new(CentralBand::new(0.25, 0.1), spans.len());

        // band is 250..750: items 0 and 1 each have half their width inside
        let first = tracker.observe(0.0, 1_000.0, &spans);
        assert_eq!(
            first,
            vec![VisibilityChange::entered(0), VisibilityChange::entered(1)]
        );
        assert!(tracker.observe(0.0, 1_000.0, &spans).is_empty());

        let scrolled = tracker.observe(500.0, 1_000.0, &spans);
        assert_eq!(
            scrolled,
            vec![VisibilityChange::left(0), VisibilityChange::entered(2)]
        );
    }

    #[test]
    fn feed_delivers_every_batch_to_every_subscriber() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut feed = VisibilityFeed::new();

        for tag in ["a", "b"] {
            let seen = seen.clone();
            feed.subscribe(move |batch| seen.borrow_mut().push((tag, batch.len())));
        }

        feed.publish(&[VisibilityChange::entered(1), VisibilityChange::left(0)]);
        feed.publish(&[]);

        assert_eq!(feed.subscriber_count(), 2);
        assert_eq!(*seen.borrow(), vec![("a", 2), ("b", 2)]);
    }
}
