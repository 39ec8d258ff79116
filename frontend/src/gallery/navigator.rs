use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::config::TRANSITION_GUARD_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryNavigator {
    len: usize,
    current: usize,
    transitioning: bool,
}

impl GalleryNavigator {
    pub fn new(len: usize) -> Self {
        Self::seeded(len, 0)
    }

    pub fn seeded(len: usize, index: usize) -> Self {
        Self {
            len,
            current: if index < len { index } else { 0 },
            transitioning: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    pub fn position_label(&self) -> Option<String> {
        (!self.is_empty()).then(|| format!("{} of {}", self.current + 1, self.len))
    }

    pub fn next(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        let target = if self.current + 1 == self.len { 0 } else { self.current + 1 };
        self.go_to(target)
    }

    pub fn previous(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        let target = if self.current == 0 { self.len - 1 } else { self.current - 1 };
        self.go_to(target)
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.current {
            return false;
        }
        self.go_to(index)
    }

    pub fn settle(&mut self) -> bool {
        std::mem::replace(&mut self.transitioning, false)
    }

    fn go_to(&mut self, target: usize) -> bool {
        if self.transitioning {
            return false;
        }
        self.transitioning = target != self.current;
        self.current = target;
        self.transitioning
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Next,
    Previous,
    Select(usize),
    Settle,
    Reset(usize),
}

impl Reducible for GalleryNavigator {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        let changed = match action {
            NavAction::Next => next.next(),
            NavAction::Previous => next.previous(),
            NavAction::Select(index) => next.select(index),
            NavAction::Settle => next.settle(),
            NavAction::Reset(len) => {
                next = GalleryNavigator::new(len);
                next != *self
            }
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Every index change opens a guard window that drops further navigation
/// until the timer settles it.
#[hook]
pub fn use_gallery_navigator(len: usize) -> UseReducerHandle<GalleryNavigator> {
    let nav = use_reducer(move || GalleryNavigator::new(len));

    {
        let dispatcher = nav.dispatcher();
        let current_len = nav.len();
        use_effect_with_deps(
            move |len| {
                if *len != current_len {
                    debug!("Gallery resized from {} to {} pairs", current_len, len);
                    dispatcher.dispatch(NavAction::Reset(*len));
                }
                || ()
            },
            len,
        );
    }

    {
        let dispatcher = nav.dispatcher();
        use_effect_with_deps(
            move |transitioning| {
                let guard = transitioning.then(|| {
                    Timeout::new(TRANSITION_GUARD_MS, move || {
                        dispatcher.dispatch(NavAction::Settle);
                    })
                });
                move || drop(guard)
            },
            nav.is_transitioning(),
        );
    }

    nav
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_cycles_through_all_pairs() {
        let mut nav = GalleryNavigator::new(3);
        let mut seen = vec![nav.current_index()];
        for _ in 0..3 {
            assert!(nav.next());
            nav.settle();
            seen.push(nav.current_index());
        }
        assert_eq!(seen, vec![0, 1, 2, 0]);
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut nav = GalleryNavigator::new(3);
        assert!(nav.previous());
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn guard_window_absorbs_rapid_input() {
        let mut nav = GalleryNavigator::new(3);
        assert!(nav.next());
        assert!(nav.is_transitioning());
        assert!(!nav.next());
        assert!(!nav.previous());
        assert!(!nav.select(2));
        assert_eq!(nav.current_index(), 1);

        assert!(nav.settle());
        assert!(nav.next());
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn selecting_the_current_pair_is_a_noop() {
        let mut nav = GalleryNavigator::new(3);
        assert!(!nav.select(0));
        assert!(!nav.is_transitioning());

        assert!(nav.select(2));
        nav.settle();
        assert!(!nav.select(2));
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut nav = GalleryNavigator::new(2);
        assert!(!nav.select(2));
        assert!(!nav.select(usize::MAX));
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn empty_gallery_ignores_everything() {
        let mut nav = GalleryNavigator::new(0);
        assert!(nav.is_empty());
        assert!(!nav.has_controls());
        assert!(!nav.next());
        assert!(!nav.previous());
        assert!(!nav.select(0));
        assert!(!nav.settle());
        assert_eq!(nav.position_label(), None);
    }

    #[test]
    fn single_pair_never_transitions() {
        let mut nav = GalleryNavigator::new(1);
        assert!(!nav.has_controls());
        assert!(!nav.next());
        assert!(!nav.previous());
        assert!(!nav.is_transitioning());
        assert_eq!(nav.position_label().as_deref(), Some("1 of 1"));
    }

    #[test]
    fn position_label_is_one_based() {
        let mut nav = GalleryNavigator::new(5);
        nav.previous();
        assert_eq!(nav.position_label().as_deref(), Some("5 of 5"));
    }

    #[test]
    fn seed_out_of_range_falls_back_to_first() {
        assert_eq!(GalleryNavigator::seeded(3, 2).current_index(), 2);
        assert_eq!(GalleryNavigator::seeded(3, 7).current_index(), 0);
        assert_eq!(GalleryNavigator::seeded(0, 0).current_index(), 0);
    }

    #[test]
    fn reducer_drops_second_next_within_guard() {
        let state = Rc::new(GalleryNavigator::new(3));
        let after_first = Rc::clone(&state).reduce(NavAction::Next);
        let after_second = Rc::clone(&after_first).reduce(NavAction::Next);
        assert!(Rc::ptr_eq(&after_first, &after_second));
        assert_eq!(after_second.current_index(), 1);

        let settled = after_second.reduce(NavAction::Settle);
        assert!(!settled.is_transitioning());
        assert_eq!(settled.reduce(NavAction::Next).current_index(), 2);
    }

    #[test]
    fn reset_returns_to_first_pair() {
        let state = Rc::new(GalleryNavigator::seeded(4, 3));
        let reset = state.reduce(NavAction::Reset(2));
        assert_eq!(reset.len(), 2);
        assert_eq!(reset.current_index(), 0);
        assert!(!reset.is_transitioning());
    }
}
