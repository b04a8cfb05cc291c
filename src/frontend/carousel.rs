use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::timers::callback::Timeout;
use js_sys::{Array, Reflect};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, WheelEvent,
};
use yew::prelude::*;

use super::dom::DomSurface;
use crate::carousel::{
    BandTracker, CarouselController, CarouselSurface, CentralBand, VisibilityChange,
    VisibilityFeed, WheelDecision, WheelInput,
};
use crate::config::CarouselConfig;
use crate::content::{WorkEntry, WorkMeta};
use crate::log::{EventLog, LogLevel};

type SharedController = Rc<RefCell<CarouselController<DomSurface>>>;

const NON_PASSIVE: EventListenerOptions = EventListenerOptions {
    phase: EventListenerPhase::Bubble,
    passive: false,
};

/// Keeps an IntersectionObserver and its callback alive; disconnects on drop.
struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

enum VisibilitySource {
    Observer(ObserverGuard),
    ScrollFallback(EventListener),
}

#[derive(Default)]
struct AutoScrollHandles {
    timeout: Option<Timeout>,
    cancel_listeners: Vec<EventListener>,
}

impl AutoScrollHandles {
    fn release(handles: &RefCell<Self>) {
        let stale = {
            let mut handles = handles.borrow_mut();
            (handles.timeout.take(), std::mem::take(&mut handles.cancel_listeners))
        };
        drop(stale);
    }
}

struct CarouselRuntime {
    controller: SharedController,
    _visibility: VisibilitySource,
    _wheel: EventListener,
    auto_scroll: Rc<RefCell<AutoScrollHandles>>,
    log: EventLog,
}

impl CarouselRuntime {
    fn start(
        list: HtmlElement,
        text_list: HtmlElement,
        indicator: Option<Element>,
        config: CarouselConfig,
        log: EventLog,
    ) -> Option<Self> {
        let surface = DomSurface::collect(list.clone(), text_list, indicator);
        if surface.item_count() == 0 {
            log.debug("carousel_absent", json!({ "reason": "no items" }));
            return None;
        }

        let item_elements: Vec<Element> = surface
            .items()
            .iter()
            .map(|item| item.clone().unchecked_into::<Element>())
            .collect();
        let controller: SharedController = Rc::new(RefCell::new(CarouselController::new(
            surface, config, log,
        )));
        let band = controller.borrow().band();

        let feed = Rc::new(RefCell::new(VisibilityFeed::new()));
        {
            let controller = controller.clone();
            feed.borrow_mut().subscribe(move |batch| {
                let mut controller = controller.borrow_mut();
                let Some(index) = controller.on_visibility(batch) else {
                    return;
                };
                if log.enabled(LogLevel::Debug) {
                    let meta = WorkMeta::from_attributes(|name| {
                        controller.surface().item_attribute(index, name)
                    });
                    if let Some(meta) = meta {
                        log.debug(
                            "work_centered",
                            json!({ "index": index, "type": meta.kind, "title": meta.title }),
                        );
                    }
                }
            });
        }

        let visibility = if supports_intersection_observer() {
            match observe_band(&list, item_elements, band, feed.clone()) {
                Some(guard) => VisibilitySource::Observer(guard),
                None => VisibilitySource::ScrollFallback(track_on_scroll(
                    &list,
                    controller.clone(),
                    band,
                    feed.clone(),
                )),
            }
        } else {
            log.info("intersection_observer_unavailable", json!({}));
            VisibilitySource::ScrollFallback(track_on_scroll(&list, controller.clone(), band, feed))
        };

        let wheel = {
            let controller = controller.clone();
            EventListener::new_with_options(&list, "wheel", NON_PASSIVE, move |event: &Event| {
                let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                    return;
                };
                let decision = controller.borrow_mut().on_wheel(WheelInput {
                    delta_y: wheel.delta_y(),
                    ctrl_key: wheel.ctrl_key(),
                });
                if let WheelDecision::ScrollBy(_) = decision {
                    event.prevent_default();
                }
            })
        };

        Some(Self {
            controller,
            _visibility: visibility,
            _wheel: wheel,
            auto_scroll: Rc::new(RefCell::new(AutoScrollHandles::default())),
            log,
        })
    }

    fn arm_auto_scroll(&self) {
        let Some(delay_ms) = self.controller.borrow_mut().arm_auto_scroll() else {
            return;
        };
        let list = self.controller.borrow().surface().list().clone();

        let timeout = {
            let controller = self.controller.clone();
            let handles = self.auto_scroll.clone();
            Timeout::new(delay_ms, move || {
                controller.borrow_mut().fire_auto_scroll();
                let listeners = std::mem::take(&mut handles.borrow_mut().cancel_listeners);
                drop(listeners);
            })
        };

        let cancel_listeners = ["wheel", "touchstart"]
            .into_iter()
            .map(|event_type| {
                let controller = self.controller.clone();
                let handles = self.auto_scroll.clone();
                EventListener::new(&list, event_type, move |_event: &Event| {
                    controller.borrow_mut().cancel_auto_scroll();
                    AutoScrollHandles::release(&handles);
                })
            })
            .collect();

        let mut handles = self.auto_scroll.borrow_mut();
        handles.timeout = Some(timeout);
        handles.cancel_listeners = cancel_listeners;
        self.log.debug("auto_scroll_scheduled", json!({ "delayMs": delay_ms }));
    }
}

impl Drop for CarouselRuntime {
    fn drop(&mut self) {
        AutoScrollHandles::release(&self.auto_scroll);
    }
}

fn supports_intersection_observer() -> bool {
    window()
        .map(|w| Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

fn observe_band(
    list: &HtmlElement,
    items: Vec<Element>,
    band: CentralBand,
    feed: Rc<RefCell<VisibilityFeed>>,
) -> Option<ObserverGuard> {
    let targets = items.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            let batch: Vec<VisibilityChange> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let target = entry.target();
                    let index = items.iter().position(|item| *item == target)?;
                    Some(VisibilityChange {
                        index,
                        intersecting: entry.is_intersecting(),
                    })
                })
                .collect();
            feed.borrow_mut().publish(&batch);
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root(Some(list));
    options.set_root_margin(&band.root_margin());
    options.set_threshold(&JsValue::from_f64(band.threshold()));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    for target in &targets {
        observer.observe(target);
    }

    Some(ObserverGuard {
        observer,
        _callback: callback,
    })
}

fn track_on_scroll(
    list: &HtmlElement,
    controller: SharedController,
    band: CentralBand,
    feed: Rc<RefCell<VisibilityFeed>>,
) -> EventListener {
    let item_count = controller.borrow().surface().item_count();
    let tracker = RefCell::new(BandTracker::new(band, item_count));

    let measure = move || {
        let (scroll_left, width, spans) = {
            let controller = controller.borrow();
            let surface = controller.surface();
            let spans: Vec<_> = (0..item_count)
                .filter_map(|index| surface.item_span(index))
                .collect();
            (surface.scroll_left(), surface.container_width(), spans)
        };
        let batch = tracker.borrow_mut().observe(scroll_left, width, &spans);
        feed.borrow_mut().publish(&batch);
    };
    measure();

    EventListener::new(list, "scroll", move |_event: &Event| measure())
}

#[derive(Properties, PartialEq)]
pub struct WorksCarouselProps {
    pub works: Vec<WorkEntry>,
    pub config: CarouselConfig,
    pub log: EventLog,
    /// Set once the splash is gone; arms the centering scroll.
    pub ready: bool,
}

#[function_component(WorksCarousel)]
pub fn works_carousel(props: &WorksCarouselProps) -> Html {
    let list_ref = use_node_ref();
    let text_ref = use_node_ref();
    let indicator_ref = use_node_ref();
    let runtime = use_mut_ref(|| None::<CarouselRuntime>);

    {
        let list_ref = list_ref.clone();
        let text_ref = text_ref.clone();
        let indicator_ref = indicator_ref.clone();
        let runtime = runtime.clone();
        let config = props.config;
        let log = props.log;
        use_effect_with((), move |_| {
            match (list_ref.cast::<HtmlElement>(), text_ref.cast::<HtmlElement>()) {
                (Some(list), Some(text_list)) => {
                    *runtime.borrow_mut() = CarouselRuntime::start(
                        list,
                        text_list,
                        indicator_ref.cast::<Element>(),
                        config,
                        log,
                    );
                }
                _ => log.debug("carousel_absent", json!({ "reason": "missing container" })),
            }

            move || {
                runtime.borrow_mut().take();
            }
        });
    }

    {
        let runtime = runtime.clone();
        use_effect_with(props.ready, move |ready| {
            if *ready {
                if let Some(runtime) = runtime.borrow().as_ref() {
                    runtime.arm_auto_scroll();
                }
            }
            || ()
        });
    }

    let item_count = props.works.len() + 2;

    html! {
        <section id="works" class="works" aria-label="Works">
            <div class="works-list" id="js-work-list" ref={list_ref}>
                <div class="work-item work-lead">
                    <p class="copy-en">{"Design that moves."}</p>
                    <p class="copy-jp">{"Scroll to browse the works"}</p>
                </div>
                { for props.works.iter().enumerate().map(|(position, work)| html! {
                    <div
                        class={classes!("work-item", (position == 0).then_some("first-work"))}
                        data-type={work.meta.kind.clone()}
                        data-title={work.meta.title.clone()}
                        data-description={work.meta.description.clone()}
                    >
                        <img src={work.image.clone()} alt={work.alt.clone()} loading="lazy" />
                    </div>
                }) }
                <div class="work-item work-contact" id="contact">
                    <a href="mailto:hello@example.com">{"Contact"}</a>
                </div>
            </div>

            <div class="work-text-panel">
                <ul class="work-text-list" id="js-work-text-list" ref={text_ref}>
                    { for props.works.iter().enumerate().map(|(position, work)| html! {
                        <li class="work-text-item" data-index-diff={(position + 1).to_string()}>
                            <span class="work-text-type">{work.meta.kind.clone()}</span>
                            <p class="work-text-title">{work.meta.title.clone()}</p>
                            <p class="work-text-description">{work.meta.description.clone()}</p>
                        </li>
                    }) }
                </ul>
            </div>

            <div class="indicator" id="js-indicator" ref={indicator_ref} aria-hidden="true">
                { for (0..item_count).map(|index| html! {
                    <span class={classes!("indicator-dot", (index == 0).then_some("is-active"))} />
                }) }
            </div>
        </section>
    }
}
