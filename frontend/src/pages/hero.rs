use yew::prelude::*;

use super::navigation::{scroll_to, Section};

#[function_component(Hero)]
pub fn hero() -> Html {
    let hire = Callback::from(|_: MouseEvent| scroll_to(Section::Contact));

    html! {
        <section id="hero" class="hero">
            <style>{HERO_CSS}</style>
            <div class="hero-content">
                <h1>{"Hi, I'm "}<span class="hero-name">{"Shaik Abdul Taufiq"}</span></h1>
                <h2>{"Real Estate Photo Editor"}</h2>
                <p class="hero-services">
                    {"HDR Bracketing \u{2022} Single-Exposure Retouch \u{2022} Flambient \u{2022} Virtual Staging"}
                </p>
                <p class="hero-pitch">
                    {"Delivering natural, listing-ready edits with consistent color science and lifelike lighting, optimized for MLS, Airbnb, and luxury portfolios."}
                </p>
                <button class="hero-cta" onclick={hire}>{"Hire Me \u{2192}"}</button>
            </div>
        </section>
    }
}

const HERO_CSS: &str = r#"
    .hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 0 24px;
        text-align: center;
    }
    .hero-content { max-width: 900px; }
    .hero h1 {
        font-size: clamp(40px, 8vw, 96px);
        font-weight: 300;
        margin: 0 0 16px;
    }
    .hero-name {
        font-weight: 600;
        background: linear-gradient(90deg, #1e90ff, #00e5ff);
        -webkit-background-clip: text;
        color: transparent;
    }
    .hero h2 { font-weight: 300; opacity: 0.8; }
    .hero-services,
    .hero-pitch { opacity: 0.7; line-height: 1.6; }
    .hero-cta {
        margin-top: 24px;
        padding: 16px 40px;
        border: none;
        border-radius: 999px;
        background: #1e90ff;
        color: #fff;
        font-size: 18px;
        cursor: pointer;
    }
"#;
