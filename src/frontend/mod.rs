mod carousel;
mod chrome;
mod dom;
mod skills;
mod splash;

use serde_json::json;
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use crate::config::MotionConfig;
use crate::content::{load_site_content, SiteContent};
use crate::log::EventLog;
use crate::overlay::{ModalImage, OverlayState};
use carousel::WorksCarousel;
use chrome::{BannerGallery, Cursor, GlobalNav, MenuButton, Modal};
use skills::{Process, Skills};
use splash::Splash;

fn resolve_config() -> MotionConfig {
    MotionConfig::from_lookup(dom::root_attribute)
}

fn resolve_content(log: EventLog) -> SiteContent {
    load_site_content().unwrap_or_else(|error| {
        log.error("site_content_invalid", json!({ "error": error.to_string() }));
        SiteContent::default()
    })
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| resolve_config());
    let log = EventLog::new(config.log_level);
    let content = use_memo((), move |_| resolve_content(log));
    let ready = use_state(|| false);
    let overlay = use_state(OverlayState::default);

    {
        let locked = overlay.scroll_locked();
        use_effect_with(locked, |locked| {
            dom::set_body_scroll_locked(*locked);
            || ()
        });
    }

    let on_revealed = {
        let ready = ready.clone();
        Callback::from(move |_: ()| {
            dom::set_body_class("content-ready", true);
            ready.set(true);
        })
    };

    let on_toggle_menu = {
        let overlay = overlay.clone();
        Callback::from(move |_: MouseEvent| overlay.set(overlay.toggle_menu()))
    };

    let on_mask = {
        let overlay = overlay.clone();
        Callback::from(move |_: MouseEvent| overlay.set(overlay.click_mask()))
    };

    let on_open_modal = {
        let overlay = overlay.clone();
        Callback::from(move |image: ModalImage| overlay.set(overlay.open_modal(image)))
    };

    let on_close_modal = {
        let overlay = overlay.clone();
        Callback::from(move |_: MouseEvent| overlay.set(overlay.close_modal()))
    };

    html! {
        <>
            <Cursor />
            <Splash config={config.splash} {log} {on_revealed} />
            <header class="site-header">
                <a class="site-logo" href="#works">{"Portfolio"}</a>
                <MenuButton open={overlay.menu_open()} on_toggle={on_toggle_menu.clone()} />
            </header>
            <GlobalNav open={overlay.menu_open()} on_navigate={on_toggle_menu} />
            <div
                id="mask"
                class={classes!(
                    "mask",
                    overlay.menu_open().then_some("show"),
                    overlay.modal_open().then_some("is-modal"),
                )}
                onclick={on_mask}
            />
            <main id="content">
                <WorksCarousel
                    works={content.works.clone()}
                    config={config.carousel}
                    {log}
                    ready={*ready}
                />
                <BannerGallery banners={content.banners.clone()} on_open={on_open_modal} />
                <Skills groups={content.skills.clone()} />
                <Process groups={content.process.clone()} />
            </main>
            <Modal image={overlay.modal().cloned()} on_close={on_close_modal} />
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
