pub const MAX_STARS: u8 = 5;

/// Parses a `data-star` style rating. Unparsable values count as zero.
pub fn parse_stars(raw: &str) -> u8 {
    raw.trim()
        .parse::<i64>()
        .map(|value| value.clamp(0, i64::from(MAX_STARS)) as u8)
        .unwrap_or(0)
}

/// Filled flags for the `MAX_STARS` marks of a rating.
pub fn star_marks(stars: u8) -> [bool; MAX_STARS as usize] {
    let mut marks = [false; MAX_STARS as usize];
    for (position, mark) in marks.iter_mut().enumerate() {
        *mark = position < usize::from(stars);
    }
    marks
}

/// Exclusive selection within one section (skill tabs, process steps).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    len: usize,
    active: usize,
}

impl Selection {
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    pub fn active(&self) -> Option<usize> {
        (self.active < self.len).then_some(self.active)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active() == Some(index)
    }

    /// Returns `None` when `index` is already active or out of range.
    pub fn select(&self, index: usize) -> Option<Self> {
        if index >= self.len || index == self.active {
            return None;
        }

        Some(Self {
            len: self.len,
            active: index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_are_clamped_to_five() {
        assert_eq!(parse_stars("3"), 3);
        assert_eq!(parse_stars(" 9 "), 5);
        assert_eq!(parse_stars("-2"), 0);
        assert_eq!(parse_stars("many"), 0);
    }

    #[test]
    fn marks_fill_from_the_left() {
        assert_eq!(star_marks(2), [true, true, false, false, false]);
        assert_eq!(star_marks(0), [false; 5]);
        assert_eq!(star_marks(5), [true; 5]);
    }

    #[test]
    fn reselecting_active_entry_is_noop() {
        let selection = Selection::new(3);
        assert_eq!(selection.active(), Some(0));
        assert_eq!(selection.select(0), None);
        assert_eq!(selection.select(3), None);

        let next = selection.select(2).expect("different entry");
        assert!(next.is_active(2));
        assert!(!next.is_active(0));
    }

    #[test]
    fn empty_selection_has_nothing_active() {
        assert_eq!(Selection::new(0).active(), None);
    }
}
