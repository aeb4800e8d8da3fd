use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, AddEventListenerOptions, Element, Window};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::counter::CountAnimation;
use crate::animation::motion::parallax_offset;
use crate::animation::trigger::ViewportTrigger;
use crate::animation::watcher::{IntersectionWatcher, TriggerOptions};
use crate::Route;

pub struct ScrollTrigger {
    pub node_ref: NodeRef,
    pub has_fired: bool,
}

/// Attach `node_ref` to a section; `has_fired` turns true the first time
/// the section scrolls into view and stays true.
#[hook]
pub fn use_scroll_trigger(options: TriggerOptions) -> ScrollTrigger {
    let node_ref = use_node_ref();
    let has_fired = use_state_eq(|| false);

    {
        let node_ref = node_ref.clone();
        let has_fired = has_fired.clone();
        use_effect_with_deps(
            move |options| {
                let element = if *has_fired { None } else { node_ref.cast::<Element>() };
                let trigger = ViewportTrigger::observe(
                    Rc::new(IntersectionWatcher::new()),
                    element,
                    options,
                    move || has_fired.set(true),
                );
                move || drop(trigger)
            },
            options,
        );
    }

    ScrollTrigger {
        node_ref,
        has_fired: *has_fired,
    }
}

/// Displayed value of a 0 → `target` count-up. Nothing runs until
/// `should_start` is true.
#[hook]
pub fn use_count_animation(target: u32, duration_ms: u32, should_start: bool) -> u32 {
    let animation = CountAnimation::new(target, duration_ms);
    let step = use_state_eq(|| 0u32);

    {
        let deps = (*step, should_start);
        let step = step.clone();
        use_effect_with_deps(
            move |(current, should_start)| {
                let timeout = animation.next_step(*current, *should_start).map(|next| {
                    Timeout::new(animation.step_interval_ms(), move || step.set(next))
                });
                move || drop(timeout)
            },
            deps,
        );
    }

    animation.value_at_step(*step)
}

struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    fn attach(on_scroll: impl Fn(f64) + 'static) -> Option<Self> {
        let window = window()?;
        let reader = window.clone();
        let callback = Closure::wrap(Box::new(move || {
            on_scroll(reader.scroll_y().unwrap_or(0.0));
        }) as Box<dyn FnMut()>);

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            warn!("Could not listen for scroll events: {:?}", err);
            return None;
        }
        Some(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

/// Current `window.scrollY`, updated from a passive scroll listener.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state_eq(|| window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0));

    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let listener = ScrollListener::attach(move |y| scroll_y.set(y));
                move || drop(listener)
            },
            (),
        );
    }

    *scroll_y
}

#[hook]
pub fn use_parallax(offset: f64) -> f64 {
    parallax_offset(use_scroll_y(), offset)
}

/// Callback sections use to ask for another page.
#[hook]
pub fn use_page_navigation() -> Callback<Route> {
    let navigator = use_navigator();
    Callback::from(move |route: Route| match &navigator {
        Some(navigator) => navigator.push(&route),
        None => warn!("Navigation requested outside the router"),
    })
}
