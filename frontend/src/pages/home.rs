use log::debug;
use yew::prelude::*;

use super::about::About;
use super::contact::Contact;
use super::footer::Footer;
use super::hero::Hero;
use super::navigation::{scroll_to, Navigation, Section};
use super::portfolio::Portfolio;
use super::preloader::Preloader;
use crate::error;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    /// Section to bring into view once the preloader is gone.
    #[prop_or_default]
    pub section: Option<Section>,
}

fn fragment_section() -> Option<Section> {
    let hash = error::window().ok()?.location().hash().ok()?;
    Section::from_href(&hash)
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let loading = use_state(|| true);

    let on_loaded = {
        let loading = loading.clone();
        Callback::from(move |_: ()| loading.set(false))
    };

    use_effect_with_deps(
        |(loading, section)| {
            if !*loading {
                // A routed section wins over a #fragment in the URL
                if let Some(section) = (*section).or_else(fragment_section) {
                    debug!("Opening at {:?}", section);
                    scroll_to(section);
                }
            }
            || ()
        },
        (*loading, props.section),
    );

    html! {
        <>
            if *loading {
                <Preloader on_complete={on_loaded} />
            }
            <div class={classes!("site", (*loading).then_some("site--loading"))}>
                <style>{SITE_CSS}</style>
                <Navigation />
                <main>
                    <Hero />
                    <About />
                    <Portfolio />
                    <Contact />
                </main>
                <Footer />
            </div>
        </>
    }
}

const SITE_CSS: &str = r#"
    .site {
        opacity: 1;
        transition: opacity 1s ease;
    }
    .site--loading { opacity: 0; }
"#;
