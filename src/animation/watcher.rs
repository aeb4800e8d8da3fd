use std::cell::RefCell;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[derive(Clone, Debug, PartialEq)]
pub struct TriggerOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for TriggerOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px".to_string(),
        }
    }
}

impl TriggerOptions {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }
}

/// The initial notification an observer sends on `observe` reports
/// `isIntersecting` for any sliver on screen, so the ratio is checked too.
pub fn reaches_threshold(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio >= threshold
}

/// Something that can report when an element first becomes visible.
///
/// `on_first_visible` runs at most once per `watch`, after which the element
/// is no longer watched. `unwatch` releases whatever was registered for the
/// element and must be safe to call after the callback already ran.
pub trait VisibilityWatcher {
    type Element;

    fn watch(
        &self,
        element: &Self::Element,
        options: &TriggerOptions,
        on_first_visible: Box<dyn FnOnce()>,
    );

    fn unwatch(&self, element: &Self::Element);
}

struct Observation {
    element: Element,
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

/// Browser watcher backed by one `IntersectionObserver` per element.
#[derive(Default)]
pub struct IntersectionWatcher {
    observations: RefCell<Vec<Observation>>,
}

impl IntersectionWatcher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VisibilityWatcher for IntersectionWatcher {
    type Element = Element;

    fn watch(
        &self,
        element: &Element,
        options: &TriggerOptions,
        on_first_visible: Box<dyn FnOnce()>,
    ) {
        let mut pending = Some(on_first_visible);
        let threshold = options.threshold;
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !reaches_threshold(entry.is_intersecting(), entry.intersection_ratio(), threshold) {
                    continue;
                }
                observer.unobserve(&entry.target());
                if let Some(fire) = pending.take() {
                    fire();
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(element);
                self.observations.borrow_mut().push(Observation {
                    element: element.clone(),
                    observer,
                    _callback: callback,
                });
            }
            Err(err) => warn!("IntersectionObserver unavailable: {:?}", err),
        }
    }

    fn unwatch(&self, element: &Element) {
        let mut observations = self.observations.borrow_mut();
        observations.retain(|observation| {
            if &observation.element == element {
                observation.observer.disconnect();
                false
            } else {
                true
            }
        });
    }
}

impl Drop for IntersectionWatcher {
    fn drop(&mut self) {
        for observation in self.observations.get_mut().drain(..) {
            observation.observer.disconnect();
        }
    }
}

#[cfg(test)]
pub mod simulated {
    use std::cell::RefCell;

    use super::{reaches_threshold, TriggerOptions, VisibilityWatcher};

    struct Watch {
        element: u32,
        threshold: f64,
        on_first_visible: Box<dyn FnOnce()>,
    }

    /// Headless watcher driven by `set_intersection`. Elements are plain ids.
    #[derive(Default)]
    pub struct SimulatedWatcher {
        watches: RefCell<Vec<Watch>>,
        unwatch_calls: RefCell<Vec<u32>>,
    }

    impl SimulatedWatcher {
        pub fn new() -> Self {
            Self::default()
        }

        /// Reports a new intersection ratio for `element`, firing its
        /// callback if the ratio reaches the watch threshold.
        pub fn set_intersection(&self, element: u32, ratio: f64) {
            let fired = {
                let mut watches = self.watches.borrow_mut();
                watches
                    .iter()
                    .position(|w| w.element == element && reaches_threshold(ratio > 0.0, ratio, w.threshold))
                    .map(|index| watches.remove(index))
            };
            if let Some(watch) = fired {
                (watch.on_first_visible)();
            }
        }

        pub fn is_watching(&self, element: u32) -> bool {
            self.watches.borrow().iter().any(|w| w.element == element)
        }

        pub fn unwatch_calls(&self) -> Vec<u32> {
            self.unwatch_calls.borrow().clone()
        }
    }

    impl VisibilityWatcher for SimulatedWatcher {
        type Element = u32;

        fn watch(&self, element: &u32, options: &TriggerOptions, on_first_visible: Box<dyn FnOnce()>) {
            self.watches.borrow_mut().push(Watch {
                element: *element,
                threshold: options.threshold,
                on_first_visible,
            });
        }

        fn unwatch(&self, element: &u32) {
            self.unwatch_calls.borrow_mut().push(*element);
            self.watches.borrow_mut().retain(|w| w.element != *element);
        }
    }
}
