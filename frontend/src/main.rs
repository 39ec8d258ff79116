use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod catalog;
mod config;
mod error;
mod models;
mod scroll;
mod comparison;
mod gallery;
mod pages {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod home;
    pub mod navigation;
    pub mod portfolio;
    pub mod preloader;
}

use pages::home::Home;
use pages::navigation::Section;

#[derive(Clone, Copy, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/portfolio")]
    Portfolio,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Home page section a route opens at.
    pub fn section(self) -> Option<Section> {
        match self {
            Route::Home | Route::NotFound => None,
            Route::About => Some(Section::About),
            Route::Portfolio => Some(Section::Portfolio),
            Route::Contact => Some(Section::Contact),
        }
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::About | Route::Portfolio | Route::Contact => {
            info!("Rendering Home page at {:?}", routes.section());
            html! { <Home section={routes.section()} /> }
        },
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_routes_open_their_anchor() {
        assert_eq!(Route::Contact.section(), Some(Section::Contact));
        assert_eq!(Route::Portfolio.section(), Some(Section::Portfolio));
        assert_eq!(Route::About.section(), Some(Section::About));
        assert_eq!(Route::Home.section(), None);
    }

    #[test]
    fn section_routes_are_recognized() {
        assert_eq!(Route::recognize("/contact"), Some(Route::Contact));
        assert_eq!(Route::recognize("/portfolio"), Some(Route::Portfolio));
        assert_eq!(Route::recognize("/"), Some(Route::Home));
    }
}
