use super::indicator::Indicator;
use super::CarouselSurface;

/// Text entry that belongs to item `index`, if any. The lead item and the
/// contact item have no companion text.
pub fn text_index(index: usize, offset: usize, text_count: usize) -> Option<usize> {
    index
        .checked_sub(offset)
        .filter(|text_index| *text_index < text_count)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Presentation {
    pub index: usize,
    pub text_index: Option<usize>,
    pub translation_px: Option<f64>,
}

/// Maps the active index onto item highlight, text panel, and indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Presenter {
    offset: usize,
}

impl Presenter {
    pub fn new(offset: usize) -> Self {
        Self { offset }
    }

    /// Returns `None` without touching the surface when `index` is outside
    /// the item list.
    pub fn present(
        &self,
        surface: &mut impl CarouselSurface,
        indicator: &mut Indicator,
        index: usize,
        row_height: f64,
    ) -> Option<Presentation> {
        let item_count = surface.item_count();
        if index >= item_count {
            return None;
        }

        for item in 0..item_count {
            surface.set_item_active(item, item == index);
        }

        let text_count = surface.text_count();
        let text_index = text_index(index, self.offset, text_count);
        let signed_text_index = index as isize - self.offset as isize;

        for text in 0..text_count {
            surface.set_text_active(text, Some(text) == text_index);
            surface.set_text_distance(text, text as isize - signed_text_index);
        }

        let translation_px = text_index.map(|text_index| text_index as f64 * row_height);
        if let Some(offset_px) = translation_px {
            surface.set_text_translation(offset_px);
        }

        indicator.light(surface, index);

        Some(Presentation {
            index,
            text_index,
            translation_px,
        })
    }
}
