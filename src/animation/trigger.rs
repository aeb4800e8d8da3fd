use std::cell::Cell;
use std::rc::Rc;

use super::watcher::{TriggerOptions, VisibilityWatcher};

/// One-shot "has this section been seen" flag.
///
/// The flag only ever goes from false to true. Dropping the trigger
/// unregisters the element from its watcher, so a section that unmounts
/// before it was scrolled into view leaves nothing behind.
pub struct ViewportTrigger<W: VisibilityWatcher> {
    watcher: Rc<W>,
    element: Option<W::Element>,
    fired: Rc<Cell<bool>>,
}

impl<W: VisibilityWatcher> ViewportTrigger<W> {
    /// Starts watching `element`. `None` is a no-op: the trigger never fires.
    pub fn observe(
        watcher: Rc<W>,
        element: Option<W::Element>,
        options: &TriggerOptions,
        on_fire: impl FnOnce() + 'static,
    ) -> Self {
        let fired = Rc::new(Cell::new(false));

        if let Some(element) = element.as_ref() {
            let flag = fired.clone();
            watcher.watch(
                element,
                options,
                Box::new(move || {
                    if !flag.replace(true) {
                        on_fire();
                    }
                }),
            );
        }

        Self {
            watcher,
            element,
            fired,
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }
}

impl<W: VisibilityWatcher> Drop for ViewportTrigger<W> {
    fn drop(&mut self) {
        if let Some(element) = self.element.take() {
            self.watcher.unwatch(&element);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::watcher::simulated::SimulatedWatcher;

    fn counting_trigger(
        watcher: &Rc<SimulatedWatcher>,
        element: Option<u32>,
        options: &TriggerOptions,
    ) -> (ViewportTrigger<SimulatedWatcher>, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let trigger = ViewportTrigger::observe(watcher.clone(), element, options, move || {
            counter.set(counter.get() + 1)
        });
        (trigger, calls)
    }

    #[test]
    fn fires_once_when_threshold_is_reached() {
        let watcher = Rc::new(SimulatedWatcher::new());
        let (trigger, calls) = counting_trigger(&watcher, Some(1), &TriggerOptions::default());

        watcher.set_intersection(1, 0.05);
        assert!(!trigger.has_fired());

        watcher.set_intersection(1, 0.1);
        assert!(trigger.has_fired());
        assert_eq!(calls.get(), 1);
        assert!(!watcher.is_watching(1));
    }

    #[test]
    fn scrolling_away_and_back_does_not_refire_or_reset() {
        let watcher = Rc::new(SimulatedWatcher::new());
        let (trigger, calls) = counting_trigger(&watcher, Some(7), &TriggerOptions::with_threshold(0.2));

        for ratio in [0.3, 0.0, 0.9, 0.0, 1.0] {
            watcher.set_intersection(7, ratio);
            assert!(trigger.has_fired());
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn missing_element_is_a_no_op() {
        let watcher = Rc::new(SimulatedWatcher::new());
        let (trigger, calls) = counting_trigger(&watcher, None, &TriggerOptions::default());

        watcher.set_intersection(1, 1.0);
        assert!(!trigger.has_fired());
        assert_eq!(calls.get(), 0);

        drop(trigger);
        assert!(watcher.unwatch_calls().is_empty());
    }

    #[test]
    fn unmounting_before_visible_releases_the_watch() {
        let watcher = Rc::new(SimulatedWatcher::new());
        let (trigger, calls) = counting_trigger(&watcher, Some(3), &TriggerOptions::default());
        assert!(watcher.is_watching(3));

        drop(trigger);
        assert!(!watcher.is_watching(3));
        assert_eq!(watcher.unwatch_calls(), vec![3]);

        watcher.set_intersection(3, 1.0);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn triggers_on_one_watcher_are_independent() {
        let watcher = Rc::new(SimulatedWatcher::new());
        let (first, _) = counting_trigger(&watcher, Some(1), &TriggerOptions::default());
        let (second, _) = counting_trigger(&watcher, Some(2), &TriggerOptions::default());

        watcher.set_intersection(2, 0.5);
        assert!(!first.has_fired());
        assert!(second.has_fired());
    }
}
