use wasm_bindgen::JsCast;
use web_sys::{
    window, Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Storage,
};

use crate::carousel::{CarouselSurface, ItemSpan};
use crate::splash::{FirstVisitGate, SPLASH_FLAG_KEY, SPLASH_FLAG_VALUE};

pub fn document() -> Option<Document> {
    window()?.document()
}

fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok().flatten()
}

pub fn root_attribute(name: &str) -> Option<String> {
    document()?.document_element()?.get_attribute(name)
}

pub fn set_root_class(class: &str, present: bool) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.class_list().toggle_with_force(class, present);
    }
}

pub fn set_body_class(class: &str, present: bool) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let _ = body.class_list().toggle_with_force(class, present);
    }
}

pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let value = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0)
}

pub fn collect<T: JsCast>(parent: &Element, selector: &str) -> Vec<T> {
    let Ok(nodes) = parent.query_selector_all(selector) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// `sessionStorage` backed first-visit flag. Without storage every visit is
/// a first visit.
pub struct SessionGate {
    storage: Option<Storage>,
}

impl SessionGate {
    pub fn new() -> Self {
        Self {
            storage: session_storage(),
        }
    }
}

impl FirstVisitGate for SessionGate {
    fn is_consumed(&self) -> bool {
        self.storage
            .as_ref()
            .and_then(|storage| storage.get_item(SPLASH_FLAG_KEY).ok().flatten())
            .is_some_and(|value| value == SPLASH_FLAG_VALUE)
    }

    fn consume(&mut self) {
        if let Some(storage) = self.storage.as_ref() {
            let _ = storage.set_item(SPLASH_FLAG_KEY, SPLASH_FLAG_VALUE);
        }
    }
}

/// The works carousel as rendered in the page.
pub struct DomSurface {
    list: HtmlElement,
    text_list: HtmlElement,
    items: Vec<HtmlElement>,
    texts: Vec<Element>,
    dots: Vec<Element>,
}

impl DomSurface {
    pub fn collect(list: HtmlElement, text_list: HtmlElement, indicator: Option<Element>) -> Self {
        let items = collect::<HtmlElement>(&list, ".work-item");
        let texts = collect::<Element>(&text_list, ".work-text-item");
        let dots = indicator
            .map(|indicator| collect::<Element>(&indicator, ".indicator-dot"))
            .unwrap_or_default();

        Self {
            list,
            text_list,
            items,
            texts,
            dots,
        }
    }

    pub fn list(&self) -> &HtmlElement {
        &self.list
    }

    pub fn items(&self) -> &[HtmlElement] {
        &self.items
    }

    pub fn scroll_left(&self) -> f64 {
        f64::from(self.list.scroll_left())
    }

    pub fn item_attribute(&self, index: usize, name: &str) -> Option<String> {
        self.items.get(index)?.get_attribute(name)
    }

    fn scroll_options(left: f64, behavior: ScrollBehavior) -> ScrollToOptions {
        let options = ScrollToOptions::new();
        options.set_left(left);
        options.set_behavior(behavior);
        options
    }
}

fn toggle_active(element: Option<&impl AsRef<Element>>, active: bool) {
    if let Some(element) = element {
        let _ = element
            .as_ref()
            .class_list()
            .toggle_with_force("is-active", active);
    }
}

impl CarouselSurface for DomSurface {
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
        toggle_active(self.items.get(index), active);
    }

    fn set_text_active(&mut self, index: usize, active: bool) {
        toggle_active(self.texts.get(index), active);
    }

    fn set_text_distance(&mut self, index: usize, distance: isize) {
        if let Some(text) = self.texts.get(index) {
            let _ = text.set_attribute("data-index-diff", &distance.to_string());
        }
    }

    fn set_text_translation(&mut self, offset_px: f64) {
        let _ = self
            .text_list
            .style()
            .set_property("transform", &format!("translateY(-{offset_px}px)"));
    }

    fn set_dot_lit(&mut self, index: usize, lit: bool) {
        toggle_active(self.dots.get(index), lit);
    }

    fn viewport_width(&self) -> f64 {
        viewport_width()
    }

    fn container_width(&self) -> f64 {
        f64::from(self.list.client_width())
    }

    fn item_span(&self, index: usize) -> Option<ItemSpan> {
        let item = self.items.get(index)?;
        Some(ItemSpan::new(
            f64::from(item.offset_left()),
            f64::from(item.client_width()),
        ))
    }

    fn scroll_by_instant(&mut self, delta_x: f64) {
        self.list
            .scroll_by_with_scroll_to_options(&Self::scroll_options(delta_x, ScrollBehavior::Auto));
    }

    fn scroll_to_smooth(&mut self, left: f64) {
        self.list
            .scroll_to_with_scroll_to_options(&Self::scroll_options(left, ScrollBehavior::Smooth));
    }

    fn reset_scroll(&mut self) {
        self.list.set_scroll_left(0);
    }
}
