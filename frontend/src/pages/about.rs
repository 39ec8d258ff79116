use yew::prelude::*;

const SERVICES: [&str; 6] = [
    "HDR Bracketing",
    "Single Exposure",
    "Flambient",
    "Virtual Staging",
    "Quick Turnaround",
    "Quality Control",
];

const PORTRAIT_URL: &str =
    "https://github.com/taufiqz11/my-pro/blob/df958408c9d59dbf5c86e14d8fe652ad381276d8/pp.jpg?raw=true";

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about">
            <style>{ABOUT_CSS}</style>
            <div class="about-portrait">
                <img src={PORTRAIT_URL} alt="Shaik Abdul Taufiq - Photo Editor" loading="lazy" />
            </div>
            <div class="about-content">
                <h2>{"About Me"}</h2>
                <p>{"I deliver natural, listing-ready edits with consistent color science and lifelike lighting, optimized for MLS, Airbnb, and luxury portfolios."}</p>
                <p>{"With years of experience in architectural and real estate photography editing, I specialize in creating images that capture the true essence of spaces while enhancing their visual appeal through advanced techniques."}</p>
                <div class="about-services">
                    { for SERVICES.iter().map(|service| html! {
                        <span key={*service} class="about-service">{*service}</span>
                    }) }
                </div>
            </div>
        </section>
    }
}

const ABOUT_CSS: &str = r#"
    .about {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
        gap: 64px;
        align-items: center;
        max-width: 1200px;
        margin: 0 auto;
        padding: 80px 24px;
    }
    .about-portrait img {
        display: block;
        width: 320px;
        height: 320px;
        margin: 0 auto;
        border-radius: 50%;
        object-fit: cover;
    }
    .about-content p { opacity: 0.75; line-height: 1.7; }
    .about-services {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(140px, 1fr));
        gap: 16px;
        margin-top: 32px;
    }
    .about-service {
        padding: 16px;
        border-radius: 8px;
        background: rgba(255, 255, 255, 0.04);
        text-align: center;
        font-size: 14px;
    }
"#;
