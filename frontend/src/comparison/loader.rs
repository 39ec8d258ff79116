use std::rc::Rc;

use gloo_events::EventListener;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    Element, Event, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};
use yew::prelude::*;

use crate::config::{LAZY_LOAD_ROOT_MARGIN, LAZY_LOAD_THRESHOLD};
use crate::error;
use crate::models::ComparisonPair;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Before,
    After,
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::Before => "before",
            Side::After => "after",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SideState {
    pub loaded: bool,
    pub failed: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadState {
    pub visible: bool,
    pub before: SideState,
    pub after: SideState,
}

impl LoadState {
    pub fn side(&self, side: Side) -> SideState {
        match side {
            Side::Before => self.before,
            Side::After => self.after,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut SideState {
        match side {
            Side::Before => &mut self.before,
            Side::After => &mut self.after,
        }
    }

    pub fn both_loaded(&self) -> bool {
        self.before.loaded && self.after.loaded
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadEvent {
    Visible,
    Loaded(Side),
    Failed(Side),
}

impl Reducible for LoadState {
    type Action = LoadEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            LoadEvent::Visible => next.visible = true,
            // Completion can only follow a request, which only follows visibility.
            LoadEvent::Loaded(side) if next.visible => next.side_mut(side).loaded = true,
            LoadEvent::Failed(side) if next.visible => {
                let state = next.side_mut(side);
                state.loaded = true;
                state.failed = true;
            }
            LoadEvent::Loaded(_) | LoadEvent::Failed(_) => {}
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

// The first callback reports any overlap as intersecting, even below the threshold
fn reached_threshold(is_intersecting: bool, ratio: f64) -> bool {
    is_intersecting && ratio >= LAZY_LOAD_THRESHOLD
}

// Disconnects on first intersection or drop
struct VisibilityWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityWatch {
    fn observe(target: &Element, on_visible: Callback<()>) -> error::Result<Self> {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|entry| reached_threshold(entry.is_intersecting(), entry.intersection_ratio()))
                    .unwrap_or(false)
            });
            if intersecting {
                observer.disconnect();
                on_visible.emit(());
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(LAZY_LOAD_ROOT_MARGIN);
        options.set_threshold(&LAZY_LOAD_THRESHOLD.into());

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(target);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

struct Preload {
    _image: HtmlImageElement,
    _listeners: [EventListener; 2],
}

impl Preload {
    fn start(url: &str, side: Side, dispatcher: UseReducerDispatcher<LoadState>) -> error::Result<Self> {
        let image = HtmlImageElement::new()?;

        let on_load = {
            let dispatcher = dispatcher.clone();
            EventListener::once(&image, "load", move |_event: &Event| {
                debug!("Loaded {} image", side.label());
                dispatcher.dispatch(LoadEvent::Loaded(side));
            })
        };
        let on_error = {
            let url = url.to_string();
            EventListener::once(&image, "error", move |_event: &Event| {
                warn!("Failed to load {} image {}, showing it broken", side.label(), url);
                dispatcher.dispatch(LoadEvent::Failed(side));
            })
        };

        image.set_src(url);
        Ok(Self {
            _image: image,
            _listeners: [on_load, on_error],
        })
    }
}

/// Watches `container` and preloads both sides of `pair` once it is near
/// the viewport. A side that fails to load still counts as loaded.
#[hook]
pub fn use_image_loader(container: NodeRef, pair: ComparisonPair) -> UseReducerHandle<LoadState> {
    let state = use_reducer(LoadState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let on_visible = {
                    let dispatcher = dispatcher.clone();
                    Callback::from(move |_| dispatcher.dispatch(LoadEvent::Visible))
                };
                let watch = match container.cast::<Element>() {
                    Some(target) => match VisibilityWatch::observe(&target, on_visible) {
                        Ok(watch) => Some(watch),
                        Err(err) => {
                            warn!("Lazy loading unavailable ({}), loading eagerly", err);
                            dispatcher.dispatch(LoadEvent::Visible);
                            None
                        }
                    },
                    None => {
                        dispatcher.dispatch(LoadEvent::Visible);
                        None
                    }
                };
                move || drop(watch)
            },
            (),
        );
    }

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |visible| {
                let mut preloads = Vec::new();
                if *visible {
                    for (side, url) in [(Side::Before, &pair.before_url), (Side::After, &pair.after_url)] {
                        match Preload::start(url, side, dispatcher.clone()) {
                            Ok(preload) => preloads.push(preload),
                            Err(err) => {
                                warn!("Could not preload {} image: {}", side.label(), err);
                                dispatcher.dispatch(LoadEvent::Failed(side));
                            }
                        }
                    }
                }
                move || drop(preloads)
            },
            state.visible,
        );
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(events: &[LoadEvent]) -> LoadState {
        *events
            .iter()
            .fold(Rc::new(LoadState::default()), |state, event| state.reduce(*event))
    }

    #[test]
    fn nothing_is_ready_before_completion() {
        let state = apply(&[LoadEvent::Visible]);
        assert!(state.visible);
        assert!(!state.both_loaded());
    }

    #[test]
    fn one_side_is_not_enough() {
        let state = apply(&[LoadEvent::Visible, LoadEvent::Loaded(Side::After)]);
        assert!(!state.both_loaded());
        assert!(state.side(Side::After).loaded);
        assert!(!state.side(Side::Before).loaded);
    }

    #[test]
    fn both_sides_open_the_gate_in_either_order() {
        let forward = apply(&[
            LoadEvent::Visible,
            LoadEvent::Loaded(Side::Before),
            LoadEvent::Loaded(Side::After),
        ]);
        let reverse = apply(&[
            LoadEvent::Visible,
            LoadEvent::Loaded(Side::After),
            LoadEvent::Loaded(Side::Before),
        ]);
        assert!(forward.both_loaded());
        assert_eq!(forward, reverse);
    }

    #[test]
    fn errors_fail_open() {
        let state = apply(&[
            LoadEvent::Visible,
            LoadEvent::Failed(Side::Before),
            LoadEvent::Loaded(Side::After),
        ]);
        assert!(state.both_loaded());
        assert!(state.before.failed);
        assert!(!state.after.failed);

        let both_failed = apply(&[
            LoadEvent::Visible,
            LoadEvent::Failed(Side::After),
            LoadEvent::Failed(Side::Before),
        ]);
        assert!(both_failed.both_loaded());
    }

    #[test]
    fn completion_without_visibility_is_ignored() {
        let state = apply(&[LoadEvent::Loaded(Side::Before), LoadEvent::Failed(Side::After)]);
        assert_eq!(state, LoadState::default());
    }

    #[test]
    fn visibility_is_one_shot() {
        let state = Rc::new(LoadState::default()).reduce(LoadEvent::Visible);
        let again = Rc::clone(&state).reduce(LoadEvent::Visible);
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn slight_overlap_does_not_count_as_visible() {
        assert!(!reached_threshold(true, 0.02));
        assert!(!reached_threshold(false, 0.5));
        assert!(reached_threshold(true, LAZY_LOAD_THRESHOLD));
        assert!(reached_threshold(true, 1.0));
    }
}
