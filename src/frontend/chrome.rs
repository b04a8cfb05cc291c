use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, MouseEvent};
use yew::prelude::*;

use super::dom;
use crate::content::Banner;
use crate::cursor::{CursorFollower, CURSOR_HOVER_SELECTOR};
use crate::overlay::ModalImage;

struct CursorLoop {
    element: HtmlElement,
    pointer: Cell<(f64, f64)>,
    follower: RefCell<CursorFollower>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl CursorLoop {
    fn schedule(self: &Rc<Self>) {
        let cursor = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            cursor.frame.borrow_mut().take();
            cursor.draw();
            cursor.schedule();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn draw(&self) {
        let (target_x, target_y) = self.pointer.get();
        let (x, y) = self.follower.borrow_mut().step(target_x, target_y);
        let style = self.element.style();
        let _ = style.set_property("--x", &format!("{x}px"));
        let _ = style.set_property("--y", &format!("{y}px"));
    }

    fn set_large(&self, large: bool) {
        let _ = self
            .element
            .class_list()
            .toggle_with_force("cursor-large", large);
    }
}

#[function_component(Cursor)]
pub fn cursor() -> Html {
    let cursor_ref = use_node_ref();

    {
        let cursor_ref = cursor_ref.clone();
        use_effect_with((), move |_| {
            let mut listeners = Vec::new();
            let mut cursor_loop = None;

            if let (Some(element), Some(document)) =
                (cursor_ref.cast::<HtmlElement>(), dom::document())
            {
                let state = Rc::new(CursorLoop {
                    element,
                    pointer: Cell::new((0.0, 0.0)),
                    follower: RefCell::new(CursorFollower::default()),
                    frame: RefCell::new(None),
                });

                let tracked = Rc::clone(&state);
                listeners.push(EventListener::new(&document, "mousemove", move |event: &Event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        tracked
                            .pointer
                            .set((f64::from(event.client_x()), f64::from(event.client_y())));
                    }
                }));

                let hovered = Rc::clone(&state);
                listeners.push(EventListener::new(&document, "mouseover", move |event: &Event| {
                    let large = event
                        .target()
                        .and_then(|target| target.dyn_into::<Element>().ok())
                        .and_then(|target| target.closest(CURSOR_HOVER_SELECTOR).ok().flatten())
                        .is_some();
                    hovered.set_large(large);
                }));

                state.schedule();
                cursor_loop = Some(state);
            }

            move || {
                drop(listeners);
                if let Some(state) = cursor_loop {
                    state.frame.borrow_mut().take();
                }
            }
        });
    }

    html! { <div id="cursor" class="cursor" ref={cursor_ref} aria-hidden="true" /> }
}

#[derive(Properties, PartialEq)]
pub struct MenuButtonProps {
    pub open: bool,
    pub on_toggle: Callback<MouseEvent>,
}

#[function_component(MenuButton)]
pub fn menu_button(props: &MenuButtonProps) -> Html {
    html! {
        <button
            id="menu"
            class={classes!("menu-button", props.open.then_some("show"))}
            type="button"
            aria-controls="global-nav"
            aria-expanded={props.open.to_string()}
            aria-label={if props.open { "Close menu" } else { "Open menu" }}
            onclick={props.on_toggle.clone()}
        >
            <span class="menu-line" />
            <span class="menu-line" />
            <span class="menu-line" />
        </button>
    }
}

const NAV_LINKS: [(&str, &str); 4] = [
    ("#works", "Works"),
    ("#skills", "Skills"),
    ("#process", "Process"),
    ("#contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct GlobalNavProps {
    pub open: bool,
    pub on_navigate: Callback<MouseEvent>,
}

#[function_component(GlobalNav)]
pub fn global_nav(props: &GlobalNavProps) -> Html {
    html! {
        <nav id="global-nav" class={classes!("global-nav", props.open.then_some("show"))}>
            <ul class="global-nav-list">
                { for NAV_LINKS.iter().map(|(href, label)| html! {
                    <li class="global-nav-item">
                        <a href={*href} onclick={props.on_navigate.clone()}>{*label}</a>
                    </li>
                }) }
            </ul>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct BannerGalleryProps {
    pub banners: Vec<Banner>,
    pub on_open: Callback<ModalImage>,
}

#[function_component(BannerGallery)]
pub fn banner_gallery(props: &BannerGalleryProps) -> Html {
    if props.banners.is_empty() {
        return html! {};
    }

    html! {
        <section class="banner-gallery" aria-label="Banners">
            { for props.banners.iter().map(|banner| {
                let on_open = props.on_open.clone();
                let image = ModalImage {
                    src: banner.image.clone(),
                    alt: banner.alt.clone(),
                };
                let onclick = Callback::from(move |_: MouseEvent| on_open.emit(image.clone()));
                html! {
                    <button class="modal-trigger-button" type="button" {onclick}>
                        <img src={banner.image.clone()} alt={banner.alt.clone()} loading="lazy" />
                    </button>
                }
            }) }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub image: Option<ModalImage>,
    pub on_close: Callback<MouseEvent>,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let (src, alt) = props
        .image
        .as_ref()
        .map(|image| (image.src.clone(), image.alt.clone()))
        .unwrap_or_default();

    html! {
        <div
            id="modal"
            class={classes!("modal", props.image.is_some().then_some("show"))}
            role="dialog"
            aria-modal="true"
            aria-hidden={props.image.is_none().to_string()}
        >
            <button class="modal-close" type="button" aria-label="Close" onclick={props.on_close.clone()}>
                {"×"}
            </button>
            <img id="modal-img" {src} {alt} />
        </div>
    }
}
