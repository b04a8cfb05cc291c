use super::CarouselSurface;

/// One dot per carousel item; at most one lit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Indicator {
    len: usize,
    lit: Option<usize>,
}

impl Indicator {
    /// The first dot starts lit, matching the lead item shown on load.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            lit: (len > 0).then_some(0),
        }
    }

    pub fn lit(&self) -> Option<usize> {
        self.lit
    }

    /// Writes the current state to every dot.
    pub fn render(&self, surface: &mut impl CarouselSurface) {
        for index in 0..self.len.min(surface.dot_count()) {
            surface.set_dot_lit(index, self.lit == Some(index));
        }
    }

    pub fn light(&mut self, surface: &mut impl CarouselSurface, index: usize) {
        self.lit = (index < self.len).then_some(index);
        self.render(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::fake::FakeSurface;

    #[test]
    fn new_indicator_lights_first_dot() {
        let mut surface = FakeSurface::with_content(4);
        let indicator = Indicator::new(surface.dot_count());

        indicator.render(&mut surface);
        assert_eq!(surface.lit_dots(), vec![0]);
    }

    #[test]
    fn light_clears_previous_dot() {
        let mut surface = FakeSurface::with_content(4);
        let mut indicator = Indicator::new(surface.dot_count());

        indicator.light(&mut surface, 3);
        indicator.light(&mut surface, 5);
        assert_eq!(surface.lit_dots(), vec![5]);
        assert_eq!(indicator.lit(), Some(5));
    }

    #[test]
    fn empty_indicator_lights_nothing() {
        let mut surface = FakeSurface::with_content(2);
        let indicator = Indicator::new(0);
        assert_eq!(indicator.lit(), None);

        indicator.render(&mut surface);
        assert!(surface.lit_dots().is_empty());
    }
}
