use log::debug;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::use_event_with_window;

use super::navigator::{use_gallery_navigator, NavAction};
use crate::comparison::BeforeAfterSlider;
use crate::models::ComparisonPair;
use crate::scroll::use_scroll_lock;

#[derive(Properties, PartialEq)]
pub struct PortfolioModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub title: String,
    pub description: String,
    #[prop_or_default]
    pub tags: Vec<String>,
    pub images: Vec<ComparisonPair>,
}

// Navigation state lives in the body, so every opening starts at the first pair
#[function_component(PortfolioModal)]
pub fn portfolio_modal(props: &PortfolioModalProps) -> Html {
    if !shows_body(props.is_open, props.images.len()) {
        return html! {};
    }

    html! {
        <ModalBody
            on_close={props.on_close.clone()}
            title={props.title.clone()}
            description={props.description.clone()}
            tags={props.tags.clone()}
            images={props.images.clone()}
        />
    }
}

// An empty set renders nothing, not even the backdrop
fn shows_body(is_open: bool, image_count: usize) -> bool {
    is_open && image_count > 0
}

#[derive(Properties, PartialEq)]
struct ModalBodyProps {
    on_close: Callback<()>,
    title: String,
    description: String,
    tags: Vec<String>,
    images: Vec<ComparisonPair>,
}

#[function_component(ModalBody)]
fn modal_body(props: &ModalBodyProps) -> Html {
    let nav = use_gallery_navigator(props.images.len());

    use_scroll_lock();

    {
        let on_close = props.on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                debug!("Closing portfolio modal from keyboard");
                on_close.emit(());
            }
        });
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // Press on the backdrop itself, so a drag that ends outside the dialog
    // does not close it.
    let close_outside = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target().is_some() && e.target() == e.current_target() {
                on_close.emit(());
            }
        })
    };
    let on_previous = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::Previous))
    };
    let on_next = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::Next))
    };

    let stage = match props.images.get(nav.current_index()) {
        Some(pair) => html! {
            <div class="modal-stage">
                <div class={classes!("modal-slider", nav.is_transitioning().then_some("modal-slider--transitioning"))}>
                    <BeforeAfterSlider
                        pair={pair.clone()}
                        position={nav.current_index()}
                        alt={props.title.clone()}
                        class="modal-comparison"
                    />
                </div>
                if nav.has_controls() {
                    <>
                    <button class="modal-arrow modal-arrow--previous" onclick={on_previous} aria-label="Previous image">
                        {"\u{2039}"}
                    </button>
                    <button class="modal-arrow modal-arrow--next" onclick={on_next} aria-label="Next image">
                        {"\u{203A}"}
                    </button>
                    <div class="modal-counter">{nav.position_label().unwrap_or_default()}</div>
                    </>
                }
            </div>
        },
        None => html! {},
    };

    let thumbnails = if nav.has_controls() {
        html! {
            <div class="modal-thumbnails">
                { for props.images.iter().enumerate().map(|(index, pair)| {
                    let onclick = {
                        let nav = nav.clone();
                        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::Select(index)))
                    };
                    html! {
                        <button
                            key={index}
                            class={classes!("modal-thumbnail", (index == nav.current_index()).then_some("modal-thumbnail--active"))}
                            {onclick}
                        >
                            <img src={pair.before_url.clone()} alt={format!("{} {}", props.title, index + 1)} loading="lazy" />
                        </button>
                    }
                }) }
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div class="modal-backdrop" onmousedown={close_outside}>
            <div class="modal" role="dialog" aria-modal="true" aria-label={props.title.clone()}>
                <div class="modal-header">
                    <div>
                        <h2 class="modal-title">{props.title.clone()}</h2>
                        <p class="modal-description">{props.description.clone()}</p>
                        <div class="modal-tags">
                            { for props.tags.iter().map(|tag| html! { <span key={tag.clone()} class="tag">{tag.clone()}</span> }) }
                        </div>
                    </div>
                    <button class="modal-close" onclick={close} aria-label="Close">{"\u{00D7}"}</button>
                </div>
                { stage }
                { thumbnails }
            </div>
        </div>
    }
}
