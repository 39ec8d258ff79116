use yew::prelude::*;

use super::navigation::{scroll_to, Section};
use crate::config::CONTACT_EMAIL;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <style>{FOOTER_CSS}</style>
            <div class="footer-row">
                <div>
                    <h3>{"Shaik Abdul Taufiq"}</h3>
                    <p>{"Professional Photo Editing & Retouching"}</p>
                </div>
                <nav class="footer-nav">
                    { for Section::ALL.into_iter().map(|section| {
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            scroll_to(section);
                        });
                        html! {
                            <a key={section.id()} href={section.href()} {onclick}>{section.label()}</a>
                        }
                    }) }
                </nav>
                <div class="footer-contact">
                    <p>{"Get in touch"}</p>
                    <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{"\u{00A9} 2024 Shaik Abdul Taufiq. All rights reserved."}</p>
                <p>{"Crafted with precision and passion"}</p>
            </div>
        </footer>
    }
}

const FOOTER_CSS: &str = r#"
    .footer {
        max-width: 1200px;
        margin: 80px auto 0;
        padding: 32px 24px 64px;
        border-top: 1px solid rgba(255, 255, 255, 0.08);
    }
    .footer-row,
    .footer-bottom {
        display: flex;
        flex-wrap: wrap;
        align-items: center;
        justify-content: space-between;
        gap: 24px;
    }
    .footer-nav { display: flex; gap: 32px; }
    .footer a { color: #1e90ff; text-decoration: none; }
    .footer-bottom { margin-top: 32px; font-size: 14px; opacity: 0.6; }
"#;
