use gloo::timers::callback::{Interval, Timeout};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

use super::dom::{self, SessionGate};
use crate::config::SplashConfig;
use crate::log::EventLog;
use crate::splash::{step_from_unit, SplashPhase, SplashSequencer};

#[derive(Default)]
struct SplashTimers {
    intro: Option<Timeout>,
    tick: Option<Interval>,
    settle: Option<Timeout>,
    fade: Option<Timeout>,
}

struct SplashDriver {
    sequencer: RefCell<SplashSequencer>,
    gate: RefCell<SessionGate>,
    timers: RefCell<SplashTimers>,
    config: SplashConfig,
    log: EventLog,
    phase: UseStateHandle<SplashPhase>,
    count: UseStateHandle<u8>,
    on_revealed: Callback<()>,
}

impl SplashDriver {
    fn start(self: &Rc<Self>) {
        if self.sequencer.borrow().is_revealed() {
            self.log.debug("splash_skipped", json!({}));
            self.phase.set(SplashPhase::Revealed);
            self.on_revealed.emit(());
            return;
        }

        dom::set_root_class("is-first-visit", true);
        let driver = Rc::clone(self);
        let intro = Timeout::new(self.config.intro_ms, move || driver.begin_counting());
        self.timers.borrow_mut().intro = Some(intro);
    }

    fn begin_counting(self: &Rc<Self>) {
        if !self.sequencer.borrow_mut().begin_counting() {
            return;
        }
        self.phase.set(SplashPhase::Counting);

        let driver = Rc::clone(self);
        let interval = Interval::new(self.config.tick_ms, move || driver.tick());
        self.timers.borrow_mut().tick = Some(interval);
    }

    fn tick(self: &Rc<Self>) {
        let step = step_from_unit(js_sys::Math::random(), self.config.max_step);
        let (phase, count) = {
            let mut sequencer = self.sequencer.borrow_mut();
            (sequencer.tick(step), sequencer.count())
        };
        self.count.set(count);

        if phase != SplashPhase::Settling {
            return;
        }

        let stopped = self.timers.borrow_mut().tick.take();
        drop(stopped);
        self.phase.set(SplashPhase::Settling);

        let driver = Rc::clone(self);
        let settle = Timeout::new(self.config.settle_ms, move || driver.reveal());
        self.timers.borrow_mut().settle = Some(settle);
    }

    fn reveal(self: &Rc<Self>) {
        let revealed = {
            let mut gate = self.gate.borrow_mut();
            self.sequencer.borrow_mut().reveal(&mut *gate)
        };
        if !revealed {
            return;
        }

        self.log.info("splash_revealed", json!({}));
        self.phase.set(SplashPhase::Revealed);
        dom::set_root_class("is-first-visit", false);

        let on_revealed = self.on_revealed.clone();
        let fade = Timeout::new(self.config.fade_ms, move || on_revealed.emit(()));
        self.timers.borrow_mut().fade = Some(fade);
    }
}

#[derive(Properties, PartialEq)]
pub struct SplashProps {
    pub config: SplashConfig,
    pub log: EventLog,
    pub on_revealed: Callback<()>,
}

#[function_component(Splash)]
pub fn splash(props: &SplashProps) -> Html {
    let opened = use_mut_ref(|| {
        let mut gate = SessionGate::new();
        let sequencer = SplashSequencer::open(&mut gate);
        Some((sequencer, gate))
    });
    let phase = use_state(|| {
        opened
            .borrow()
            .as_ref()
            .map_or(SplashPhase::Revealed, |(sequencer, _)| sequencer.phase())
    });
    let count = use_state(|| 0u8);

    {
        let phase = phase.clone();
        let count = count.clone();
        let config = props.config;
        let log = props.log;
        let on_revealed = props.on_revealed.clone();
        use_effect_with((), move |_| {
            let driver = opened.borrow_mut().take().map(|(sequencer, gate)| {
                Rc::new(SplashDriver {
                    sequencer: RefCell::new(sequencer),
                    gate: RefCell::new(gate),
                    timers: RefCell::new(SplashTimers::default()),
                    config,
                    log,
                    phase,
                    count,
                    on_revealed,
                })
            });
            if let Some(driver) = driver.as_ref() {
                driver.start();
            }

            move || {
                if let Some(driver) = driver {
                    driver.timers.replace(SplashTimers::default());
                }
            }
        });
    }

    let counter_active = matches!(*phase, SplashPhase::Counting | SplashPhase::Settling);

    html! {
        <div
            id="loading"
            class={classes!("loading", (*phase == SplashPhase::Revealed).then_some("is-hidden"))}
            aria-hidden="true"
        >
            <div
                id="js-loading-counter"
                class={classes!("loading-counter", counter_active.then_some("is-active"))}
            >
                <span id="js-loading-num" class="loading-num">{count.to_string()}</span>
                <span class="loading-unit">{"%"}</span>
            </div>
        </div>
    }
}
