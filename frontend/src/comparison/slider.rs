use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::use_unmount;

use super::loader::{use_image_loader, LoadState, Side};
use super::position::{after_clip_path, KeyAction, SliderAction, SliderState, MAX_POSITION, MIN_POSITION};
use super::tracker::{begin_drag, first_touch_x, DomDragTracker, DragContext};
use crate::models::ComparisonPair;

#[derive(Properties, PartialEq, Clone)]
pub struct BeforeAfterSliderProps {
    pub pair: ComparisonPair,
    /// Index of `pair` within the set it is browsed from.
    #[prop_or_default]
    pub position: usize,
    pub alt: String,
    #[prop_or_else(|| "Before".to_string())]
    pub before_label: String,
    #[prop_or_else(|| "After".to_string())]
    pub after_label: String,
    #[prop_or_default]
    pub class: Classes,
}

/// Drag and load state belong to the shown pair and position, so moving to
/// another one remounts the view with fresh state.
#[function_component(BeforeAfterSlider)]
pub fn before_after_slider(props: &BeforeAfterSliderProps) -> Html {
    html! {
        <ComparisonView
            key={props.pair.view_key(props.position)}
            pair={props.pair.clone()}
            position={props.position}
            alt={props.alt.clone()}
            before_label={props.before_label.clone()}
            after_label={props.after_label.clone()}
            class={props.class.clone()}
        />
    }
}

#[function_component(ComparisonView)]
fn comparison_view(props: &BeforeAfterSliderProps) -> Html {
    let container_ref = use_node_ref();
    let slider = use_reducer(SliderState::default);
    let tracker = use_mut_ref(DomDragTracker::default);
    let load = use_image_loader(container_ref.clone(), props.pair.clone());
    let load_state = *load;
    let ready = load_state.both_loaded();

    {
        let tracker = tracker.clone();
        use_unmount(move || {
            let mut tracker = tracker.borrow_mut();
            if tracker.has_capture() || tracker.has_pending_frame() {
                debug!("Slider unmounted mid-drag, releasing pointer capture");
            }
            tracker.release();
        });
    }

    let ctx = DragContext::new(&tracker, container_ref.clone(), slider.dispatcher());

    let on_mouse_down = {
        let ctx = ctx.clone();
        Callback::from(move |e: MouseEvent| {
            if !accepts_drag(&load_state, Some(e.button())) {
                return;
            }
            e.prevent_default();
            begin_drag(&ctx, e.client_x() as f64);
        })
    };

    let on_touch_start = {
        let ctx = ctx.clone();
        Callback::from(move |e: TouchEvent| {
            if !accepts_drag(&load_state, None) {
                return;
            }
            if let Some(x) = first_touch_x(&e) {
                begin_drag(&ctx, x);
            }
        })
    };

    let on_key_down = {
        let dispatcher = slider.dispatcher();
        Callback::from(move |e: KeyboardEvent| {
            if !accepts_keys(&load_state) {
                return;
            }
            if let Some(action) = KeyAction::from_key(&e.key()) {
                e.prevent_default();
                dispatcher.dispatch(SliderAction::Key(action));
            }
        })
    };

    let position = slider.reveal_position;
    let container_class = classes!(
        "comparison",
        props.class.clone(),
        (!ready).then_some("comparison--loading"),
        slider.is_dragging.then_some("comparison--dragging"),
    );

    html! {
        <div
            ref={container_ref}
            class={container_class}
            onmousedown={on_mouse_down}
            ontouchstart={on_touch_start}
        >
            <style>{COMPARISON_CSS}</style>
            { layers(props, &load_state, position, ready) }
            <div
                class="comparison-handle"
                style={format!("left: {:.2}%;", position)}
                role="slider"
                tabindex={handle_tab_index(ready)}
                aria-label={format!("{} comparison", props.alt)}
                aria-valuemin={MIN_POSITION.to_string()}
                aria-valuemax={MAX_POSITION.to_string()}
                aria-valuenow={format!("{:.0}", position)}
                aria-disabled={(!ready).to_string()}
                onkeydown={on_key_down}
            >
                <span class="comparison-grip">{"\u{2039}\u{203A}"}</span>
            </div>
        </div>
    }
}

// Touches pass `None`; mouse drags need the primary button.
fn accepts_drag(load: &LoadState, button: Option<i16>) -> bool {
    load.both_loaded() && button.map_or(true, |button| button == 0)
}

fn accepts_keys(load: &LoadState) -> bool {
    load.both_loaded()
}

fn handle_tab_index(ready: bool) -> &'static str {
    if ready {
        "0"
    } else {
        "-1"
    }
}

fn layers(props: &BeforeAfterSliderProps, load: &LoadState, position: f64, ready: bool) -> Html {
    if !ready {
        return html! { <div class="comparison-skeleton" aria-busy="true"></div> };
    }

    let image_class = |side: Side| classes!("comparison-image", load.side(side).failed.then_some("comparison-image--broken"));

    html! {
        <>
            <img
                class={image_class(Side::Before)}
                src={props.pair.before_url.clone()}
                alt={format!("{} - Before", props.alt)}
                draggable="false"
            />
            <div class="comparison-after" style={format!("clip-path: {};", after_clip_path(position))}>
                <img
                    class={image_class(Side::After)}
                    src={props.pair.after_url.clone()}
                    alt={format!("{} - After", props.alt)}
                    draggable="false"
                />
            </div>
            <div class="comparison-divider" style={format!("left: {:.2}%;", position)}></div>
            <span class="comparison-label comparison-label--before">{props.before_label.clone()}</span>
            <span class="comparison-label comparison-label--after">{props.after_label.clone()}</span>
        </>
    }
}

const COMPARISON_CSS: &str = r#"
    .comparison {
        position: relative;
        width: 100%;
        height: 100%;
        min-height: 240px;
        overflow: hidden;
        border-radius: 8px;
        user-select: none;
        touch-action: pan-y;
        cursor: ew-resize;
    }
    .comparison--loading { cursor: wait; }
    .comparison-image,
    .comparison-after {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .comparison-skeleton {
        position: absolute;
        inset: 0;
        background: linear-gradient(90deg, #1e1e1e 25%, #2a2a2a 50%, #1e1e1e 75%);
        background-size: 200% 100%;
        animation: comparisonShimmer 1.4s linear infinite;
    }
    @keyframes comparisonShimmer {
        from { background-position: 200% 0; }
        to { background-position: -200% 0; }
    }
    .comparison-divider {
        position: absolute;
        top: 0;
        bottom: 0;
        width: 2px;
        background: #fff;
        transform: translateX(-50%);
        pointer-events: none;
    }
    .comparison-handle {
        position: absolute;
        top: 50%;
        width: 36px;
        height: 36px;
        border-radius: 50%;
        background: #fff;
        color: #111;
        display: flex;
        align-items: center;
        justify-content: center;
        transform: translate(-50%, -50%);
    }
    .comparison--loading .comparison-handle { opacity: 0.4; cursor: not-allowed; }
    .comparison-handle:focus-visible { outline: 2px solid #1e90ff; outline-offset: 2px; }
    .comparison-label {
        position: absolute;
        top: 16px;
        padding: 4px 12px;
        border-radius: 999px;
        background: rgba(0, 0, 0, 0.6);
        color: #fff;
        font-size: 14px;
        pointer-events: none;
    }
    .comparison-label--before { left: 16px; }
    .comparison-label--after { right: 16px; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::loader::LoadEvent;
    use std::rc::Rc;

    #[test]
    fn handle_is_focusable_only_once_both_images_settle() {
        let mut state = Rc::new(LoadState::default()).reduce(LoadEvent::Visible);
        assert_eq!(handle_tab_index(state.both_loaded()), "-1");

        state = state.reduce(LoadEvent::Failed(Side::Before));
        assert_eq!(handle_tab_index(state.both_loaded()), "-1");

        state = state.reduce(LoadEvent::Failed(Side::After));
        assert_eq!(handle_tab_index(state.both_loaded()), "0");
    }

    fn drive(load: &LoadState, actions: &[(Option<i16>, SliderAction)]) -> Rc<SliderState> {
        let mut slider = Rc::new(SliderState::default());
        for (button, action) in actions {
            let accepted = match action {
                SliderAction::Key(_) => accepts_keys(load),
                _ => accepts_drag(load, *button),
            };
            if accepted {
                slider = slider.reduce(*action);
            }
        }
        slider
    }

    #[test]
    fn input_is_ignored_until_both_sides_settle() {
        let input = [
            (Some(0), SliderAction::Grab(Some(10.0))),
            (None, SliderAction::Key(KeyAction::Jump(MAX_POSITION))),
        ];

        let hidden = LoadState::default();
        let slider = drive(&hidden, &input);
        assert_eq!(slider.reveal_position, 50.0);
        assert!(!slider.is_dragging);

        let half = Rc::new(hidden)
            .reduce(LoadEvent::Visible)
            .reduce(LoadEvent::Loaded(Side::After));
        let slider = drive(&half, &input);
        assert_eq!(slider.reveal_position, 50.0);
        assert!(!slider.is_dragging);
    }

    #[test]
    fn mixed_failure_and_success_opens_the_gate() {
        let load = Rc::new(LoadState::default())
            .reduce(LoadEvent::Visible)
            .reduce(LoadEvent::Failed(Side::Before))
            .reduce(LoadEvent::Loaded(Side::After));
        assert!(accepts_keys(&load));
        assert!(accepts_drag(&load, None));

        let slider = drive(&load, &[(Some(0), SliderAction::Grab(Some(10.0)))]);
        assert_eq!(slider.reveal_position, 10.0);
        assert!(slider.is_dragging);

        let slider = drive(&load, &[(None, SliderAction::Key(KeyAction::Jump(MAX_POSITION)))]);
        assert_eq!(slider.reveal_position, 100.0);
    }

    #[test]
    fn only_the_primary_button_starts_a_drag() {
        let load = Rc::new(LoadState::default())
            .reduce(LoadEvent::Visible)
            .reduce(LoadEvent::Loaded(Side::Before))
            .reduce(LoadEvent::Loaded(Side::After));
        assert!(accepts_drag(&load, Some(0)));
        assert!(!accepts_drag(&load, Some(2)));
    }
}
