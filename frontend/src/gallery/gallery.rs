use yew::prelude::*;

use super::navigator::{use_gallery_navigator, NavAction};
use crate::comparison::BeforeAfterSlider;
use crate::models::ComparisonPair;

#[derive(Properties, PartialEq)]
pub struct PortfolioGalleryProps {
    pub images: Vec<ComparisonPair>,
    pub title: String,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(PortfolioGallery)]
pub fn portfolio_gallery(props: &PortfolioGalleryProps) -> Html {
    let nav = use_gallery_navigator(props.images.len());

    let Some(pair) = props.images.get(nav.current_index()) else {
        return html! {};
    };

    let on_previous = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::Previous))
    };
    let on_next = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::Next))
    };

    html! {
        <div class={classes!("gallery", props.class.clone())}>
            <div class={classes!("gallery-stage", nav.is_transitioning().then_some("gallery-stage--transitioning"))}>
                <BeforeAfterSlider pair={pair.clone()} position={nav.current_index()} alt={props.title.clone()} />
                if nav.has_controls() {
                    <>
                    <button class="gallery-arrow gallery-arrow--previous" onclick={on_previous} aria-label="Previous image">
                        {"\u{2039}"}
                    </button>
                    <button class="gallery-arrow gallery-arrow--next" onclick={on_next} aria-label="Next image">
                        {"\u{203A}"}
                    </button>
                    <div class="gallery-counter">{nav.position_label().unwrap_or_default()}</div>
                    </>
                }
            </div>
            if nav.has_controls() {
                <div class="gallery-dots">
                    { for (0..nav.len()).map(|index| {
                        let onclick = {
                            let nav = nav.clone();
                            Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::Select(index)))
                        };
                        html! {
                            <button
                                key={index}
                                class={classes!("gallery-dot", (index == nav.current_index()).then_some("gallery-dot--active"))}
                                aria-label={format!("Go to image {}", index + 1)}
                                {onclick}
                            />
                        }
                    }) }
                </div>
            }
        </div>
    }
}
