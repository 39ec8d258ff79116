use log::{error, info};
use yew::prelude::*;

use crate::catalog::{find_section, portfolio_sections};
use crate::gallery::{PortfolioGallery, PortfolioModal};

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let sections = use_memo(
        |_| match portfolio_sections() {
            Ok(sections) => sections,
            Err(err) => {
                error!("Portfolio unavailable: {}", err);
                Vec::new()
            }
        },
        (),
    );
    let selected = use_state(|| None::<String>);

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    let modal = match selected.as_deref().and_then(|id| find_section(&sections, id)) {
        Some(section) => html! {
            <PortfolioModal
                is_open={true}
                on_close={on_close}
                title={section.title.clone()}
                description={section.description.clone()}
                tags={section.tags.clone()}
                images={section.images.clone()}
            />
        },
        None => html! {},
    };

    html! {
        <section id="portfolio" class="portfolio">
            <style>{PORTFOLIO_CSS}</style>
            <div class="portfolio-header">
                <h2>{"My Portfolio"}</h2>
                <p>{"Explore my work across different editing styles and techniques. Each project showcases attention to detail and professional quality."}</p>
            </div>
            <div class="portfolio-grid">
                { for sections.iter().map(|section| {
                    let open = {
                        let selected = selected.clone();
                        let id = section.id.clone();
                        Callback::from(move |_: MouseEvent| {
                            info!("Opening full set for {}", id);
                            selected.set(Some(id.clone()));
                        })
                    };
                    html! {
                        <div key={section.id.clone()} class="portfolio-card">
                            <div class="portfolio-card-header">
                                <h3>{section.title.clone()}</h3>
                                <div class="portfolio-tags">
                                    { for section.tags.iter().map(|tag| html! { <span key={tag.clone()} class="tag">{tag.clone()}</span> }) }
                                </div>
                                <p>{section.description.clone()}</p>
                            </div>
                            <PortfolioGallery images={section.images.clone()} title={section.title.clone()} />
                            <button class="portfolio-cta" onclick={open}>{"View Full Set \u{2192}"}</button>
                        </div>
                    }
                }) }
            </div>
            { modal }
        </section>
    }
}

const PORTFOLIO_CSS: &str = r#"
    .portfolio {
        padding: 80px 24px;
    }
    .portfolio-header {
        text-align: center;
        margin-bottom: 64px;
    }
    .portfolio-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(360px, 1fr));
        gap: 32px;
        max-width: 1280px;
        margin: 0 auto;
    }
    .portfolio-card {
        padding: 24px;
        border-radius: 12px;
        background: rgba(255, 255, 255, 0.04);
        border: 1px solid rgba(255, 255, 255, 0.1);
    }
    .tag {
        display: inline-block;
        margin-right: 8px;
        padding: 4px 8px;
        font-size: 12px;
        border-radius: 6px;
        background: rgba(30, 144, 255, 0.2);
        color: #1e90ff;
    }
    .gallery-stage,
    .modal-stage {
        position: relative;
        height: 320px;
    }
    .modal-stage { height: 500px; }
    .gallery-stage--transitioning,
    .modal-slider--transitioning { opacity: 0.5; }
    .gallery-stage,
    .modal-slider { transition: opacity 0.3s ease; }
    .modal-slider { height: 100%; }
    .gallery-arrow,
    .modal-arrow {
        position: absolute;
        top: 50%;
        transform: translateY(-50%);
        width: 32px;
        height: 32px;
        border: none;
        border-radius: 50%;
        background: rgba(0, 0, 0, 0.5);
        color: #fff;
        cursor: pointer;
    }
    .gallery-arrow--previous,
    .modal-arrow--previous { left: 8px; }
    .gallery-arrow--next,
    .modal-arrow--next { right: 8px; }
    .gallery-counter,
    .modal-counter {
        position: absolute;
        bottom: 8px;
        left: 50%;
        transform: translateX(-50%);
        padding: 2px 8px;
        border-radius: 6px;
        background: rgba(0, 0, 0, 0.6);
        color: #fff;
        font-size: 12px;
    }
    .gallery-dots {
        display: flex;
        justify-content: center;
        gap: 8px;
        margin-top: 12px;
    }
    .gallery-dot {
        width: 8px;
        height: 8px;
        padding: 0;
        border: none;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.4);
        cursor: pointer;
    }
    .gallery-dot--active { background: #1e90ff; transform: scale(1.25); }
    .portfolio-cta {
        display: block;
        margin: 24px auto 0;
        padding: 8px 20px;
        border-radius: 8px;
        border: 1px solid rgba(255, 255, 255, 0.2);
        background: transparent;
        color: inherit;
        cursor: pointer;
    }
    .modal-backdrop {
        position: fixed;
        inset: 0;
        z-index: 100;
        display: flex;
        align-items: center;
        justify-content: center;
        background: rgba(0, 0, 0, 0.8);
    }
    .modal {
        width: min(1152px, 95vw);
        max-height: 90vh;
        overflow-y: auto;
        padding: 24px;
        border-radius: 12px;
        background: #141414;
    }
    .modal-header {
        display: flex;
        justify-content: space-between;
        align-items: flex-start;
        margin-bottom: 16px;
    }
    .modal-close {
        border: none;
        background: transparent;
        color: inherit;
        font-size: 28px;
        cursor: pointer;
    }
    .modal-thumbnails {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 8px;
        margin-top: 24px;
    }
    .modal-thumbnail {
        width: 64px;
        height: 64px;
        padding: 0;
        overflow: hidden;
        border-radius: 8px;
        border: 2px solid rgba(255, 255, 255, 0.2);
        background: none;
        cursor: pointer;
    }
    .modal-thumbnail--active { border-color: #1e90ff; }
    .modal-thumbnail img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
"#;
