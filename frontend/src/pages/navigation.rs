use log::{debug, warn};
use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::use_event_with_window;

use crate::config::NAV_SCROLLED_OFFSET;
use crate::scroll;

/// Anchored sections of the home page, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Portfolio,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Hero, Section::About, Section::Portfolio, Section::Contact];

    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Portfolio => "portfolio",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Portfolio => "Portfolio",
            Section::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    // Accepts "#contact" as well as a bare "contact"
    pub fn from_href(href: &str) -> Option<Self> {
        let id = href.strip_prefix('#').unwrap_or(href);
        Self::ALL.into_iter().find(|section| section.id() == id)
    }
}

pub fn scroll_to(section: Section) {
    debug!("Scrolling to #{}", section.id());
    if let Err(err) = scroll::scroll_to_element(section.id()) {
        warn!("Could not scroll to {}: {}", section.label(), err);
    }
}

fn nav_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_OFFSET
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| scroll::scroll_y().map(nav_scrolled).unwrap_or(false));

    {
        let is_scrolled = is_scrolled.clone();
        use_event_with_window("scroll", move |_: Event| match scroll::scroll_y() {
            Ok(y) => is_scrolled.set(nav_scrolled(y)),
            Err(err) => warn!("Could not read scroll offset: {}", err),
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let links = |class: &'static str| -> Html {
        html! {
            <>{ for Section::ALL.into_iter().map(|section| {
                let menu_open = menu_open.clone();
                let onclick = Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    scroll_to(section);
                    menu_open.set(false);
                });
                html! {
                    <a key={section.id()} class={class} href={section.href()} {onclick}>
                        {section.label()}
                    </a>
                }
            }) }</>
        }
    };
    let (toggle_label, toggle_icon) = if *menu_open {
        ("Close menu", "\u{2715}")
    } else {
        ("Open menu", "\u{2630}")
    };

    html! {
        <>
            <style>{NAV_CSS}</style>
            <nav class={classes!("site-nav", (*is_scrolled).then_some("site-nav--scrolled"))}>
                { links("site-nav-link") }
            </nav>
            <button
                class="site-nav-toggle"
                onclick={toggle_menu}
                aria-label={toggle_label}
                aria-expanded={menu_open.to_string()}
            >
                { toggle_icon }
            </button>
            if *menu_open {
                <div class="site-nav-overlay">
                    <nav class="site-nav-mobile">
                        { links("site-nav-mobile-link") }
                    </nav>
                </div>
            }
        </>
    }
}

const NAV_CSS: &str = r#"
    .site-nav {
        position: fixed;
        top: 24px;
        left: 50%;
        transform: translateX(-50%);
        z-index: 50;
        display: flex;
        gap: 32px;
        padding: 16px 32px;
        border-radius: 16px;
        background: transparent;
        transition: background 0.5s ease, backdrop-filter 0.5s ease;
    }
    .site-nav--scrolled {
        background: rgba(20, 20, 28, 0.7);
        backdrop-filter: blur(16px);
    }
    .site-nav-link {
        color: #e5e7eb;
        font-weight: 500;
        text-decoration: none;
    }
    .site-nav-link:hover { color: #1e90ff; }
    .site-nav-toggle {
        display: none;
        position: fixed;
        top: 24px;
        right: 24px;
        z-index: 50;
        padding: 12px;
        border: none;
        border-radius: 12px;
        background: rgba(20, 20, 28, 0.7);
        color: #e5e7eb;
        font-size: 20px;
    }
    .site-nav-overlay {
        position: fixed;
        inset: 0;
        z-index: 40;
        display: flex;
        align-items: center;
        justify-content: center;
        background: rgba(10, 10, 14, 0.8);
        backdrop-filter: blur(12px);
    }
    .site-nav-mobile {
        display: flex;
        flex-direction: column;
        gap: 24px;
        padding: 32px;
    }
    .site-nav-mobile-link {
        color: #e5e7eb;
        font-size: 24px;
        text-decoration: none;
    }
    @media (max-width: 768px) {
        .site-nav { display: none; }
        .site-nav-toggle { display: block; }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_map_back_to_their_sections() {
        for section in Section::ALL {
            assert_eq!(Section::from_href(&section.href()), Some(section));
        }
        assert_eq!(Section::from_href("#contact"), Some(Section::Contact));
        assert_eq!(Section::from_href("about"), Some(Section::About));
    }

    #[test]
    fn unknown_anchors_are_rejected() {
        assert_eq!(Section::from_href(""), None);
        assert_eq!(Section::from_href("#"), None);
        assert_eq!(Section::from_href("#pricing"), None);
        assert_eq!(Section::from_href("#Contact"), None);
    }

    #[test]
    fn hero_anchor_is_labelled_home() {
        assert_eq!(Section::Hero.href(), "#hero");
        assert_eq!(Section::Hero.label(), "Home");
    }

    #[test]
    fn nav_turns_solid_past_the_offset() {
        assert!(!nav_scrolled(0.0));
        assert!(!nav_scrolled(NAV_SCROLLED_OFFSET));
        assert!(nav_scrolled(NAV_SCROLLED_OFFSET + 1.0));
    }
}
