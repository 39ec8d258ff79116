use gloo_timers::callback::Timeout;
use log::{info, warn};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::prelude::use_unmount;

use crate::config::{CONTACT_EMAIL, COPY_FEEDBACK_MS, FORM_RESET_MS};
use crate::error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn with(&self, field: Field, value: String) -> Self {
        let mut next = self.clone();
        match field {
            Field::Name => next.name = value,
            Field::Email => next.email = value,
            Field::Message => next.message = value,
        }
        next
    }

    /// `mailto:` link that opens the visitor's mail client with the form
    /// prefilled. Subject and body are percent-encoded in full.
    pub fn mailto_link(&self, to: &str) -> String {
        let subject = format!("New message from {}", self.name);
        let body = format!(
            "Name: {}\r\nEmail: {}\r\n\r\nMessage:\r\n{}",
            self.name, self.email, self.message
        );
        format!(
            "mailto:{}?subject={}&body={}",
            to,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        )
    }
}

async fn copy_to_clipboard(text: &str) -> error::Result<()> {
    let clipboard = error::window()?.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text)).await?;
    Ok(())
}

fn open_mail_client(link: &str) -> error::Result<()> {
    error::window()?.location().set_href(link)?;
    Ok(())
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let copied = use_state_eq(|| false);
    let reset_timer = use_mut_ref(|| None::<Timeout>);
    let copied_timer = use_mut_ref(|| None::<Timeout>);

    {
        let reset_timer = reset_timer.clone();
        let copied_timer = copied_timer.clone();
        use_unmount(move || {
            reset_timer.borrow_mut().take();
            copied_timer.borrow_mut().take();
        });
    }

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                Field::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                Field::Name | Field::Email => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            form.set(form.with(field, value));
        })
    };

    let on_submit = {
        let form = form.clone();
        let reset_timer = reset_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match open_mail_client(&form.mailto_link(CONTACT_EMAIL)) {
                Ok(()) => info!("Opened mail client for contact form"),
                Err(err) => warn!("Could not open mail client: {}", err),
            }
            let form = form.clone();
            *reset_timer.borrow_mut() = Some(Timeout::new(FORM_RESET_MS, move || {
                form.set(ContactForm::default());
            }));
        })
    };

    let on_copy = {
        let copied = copied.clone();
        let copied_timer = copied_timer.clone();
        Callback::from(move |_: MouseEvent| {
            let copied = copied.clone();
            let copied_timer = copied_timer.clone();
            spawn_local(async move {
                match copy_to_clipboard(CONTACT_EMAIL).await {
                    Ok(()) => {
                        copied.set(true);
                        let copied = copied.clone();
                        *copied_timer.borrow_mut() = Some(Timeout::new(COPY_FEEDBACK_MS, move || {
                            copied.set(false);
                        }));
                    }
                    Err(err) => warn!("Failed to copy email: {}", err),
                }
            });
        })
    };

    let copy_label = if *copied { "Copied \u{2713}" } else { "Copy" };

    html! {
        <section id="contact" class="contact">
            <style>{CONTACT_CSS}</style>
            <div class="contact-header">
                <h2>{"Get In Touch"}</h2>
                <p>{"Ready to enhance your photos? Let's discuss your project and create stunning visuals together."}</p>
            </div>
            <div class="contact-grid">
                <form class="contact-form" onsubmit={on_submit}>
                    <label for="contact-name">{"Name"}</label>
                    <input
                        id="contact-name"
                        type="text"
                        placeholder="Your name"
                        required=true
                        value={form.name.clone()}
                        oninput={on_input(Field::Name)}
                    />
                    <label for="contact-email">{"Email"}</label>
                    <input
                        id="contact-email"
                        type="email"
                        placeholder="your@email.com"
                        required=true
                        value={form.email.clone()}
                        oninput={on_input(Field::Email)}
                    />
                    <label for="contact-message">{"Message"}</label>
                    <textarea
                        id="contact-message"
                        rows="6"
                        placeholder="Tell me about your project..."
                        required=true
                        value={form.message.clone()}
                        oninput={on_input(Field::Message)}
                    />
                    <button type="submit" class="contact-submit">{"Send Message"}</button>
                </form>
                <div class="contact-info">
                    <h3>{"Contact Information"}</h3>
                    <p class="contact-label">{"Email"}</p>
                    <div class="contact-email">
                        <span>{CONTACT_EMAIL}</span>
                        <button class="contact-copy" title="Copy email" onclick={on_copy}>
                            { copy_label }
                        </button>
                    </div>
                    <p class="contact-label">{"Working Hours"}</p>
                    <p>{"Mon\u{2013}Sat, 1:00\u{2013}04:00 IST"}</p>
                    <h3>{"What I Offer"}</h3>
                    <ul class="contact-offer">
                        <li>{"Professional photo editing & retouching"}</li>
                        <li>{"Fast turnaround times (5-12 hours)"}</li>
                        <li>{"Consistent quality & style"}</li>
                        <li>{"Revision rounds included"}</li>
                    </ul>
                </div>
            </div>
        </section>
    }
}

const CONTACT_CSS: &str = r#"
    .contact {
        padding: 80px 24px;
        max-width: 1200px;
        margin: 0 auto;
    }
    .contact-header {
        text-align: center;
        margin-bottom: 64px;
    }
    .contact-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
        gap: 48px;
    }
    .contact-form,
    .contact-info {
        display: flex;
        flex-direction: column;
        gap: 12px;
        padding: 32px;
        border-radius: 12px;
        background: rgba(255, 255, 255, 0.04);
        border: 1px solid rgba(255, 255, 255, 0.08);
    }
    .contact-form input,
    .contact-form textarea {
        padding: 14px;
        border-radius: 8px;
        border: 1px solid rgba(255, 255, 255, 0.12);
        background: rgba(0, 0, 0, 0.3);
        color: inherit;
        resize: none;
    }
    .contact-submit {
        margin-top: 12px;
        padding: 14px;
        border: none;
        border-radius: 8px;
        background: #1e90ff;
        color: #fff;
        font-weight: 600;
        cursor: pointer;
    }
    .contact-label {
        font-size: 14px;
        opacity: 0.7;
        margin-bottom: 0;
    }
    .contact-email {
        display: flex;
        align-items: center;
        gap: 8px;
    }
    .contact-copy {
        padding: 4px 8px;
        border: none;
        border-radius: 4px;
        background: transparent;
        color: inherit;
        cursor: pointer;
    }
    .contact-offer { padding-left: 20px; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm::default()
            .with(Field::Name, name.to_string())
            .with(Field::Email, email.to_string())
            .with(Field::Message, message.to_string())
    }

    #[test]
    fn mailto_prefills_subject_and_body() {
        let form = filled("Ana", "ana@example.com", "Hi");
        assert_eq!(
            form.mailto_link("me@example.com"),
            "mailto:me@example.com?subject=New%20message%20from%20Ana\
             &body=Name%3A%20Ana%0D%0AEmail%3A%20ana%40example.com%0D%0A%0D%0AMessage%3A%0D%0AHi"
        );
    }

    #[test]
    fn mailto_escapes_query_syntax_in_fields() {
        let link = filled("Bo & Co", "bo@example.com", "50% off?\nthanks=yes").mailto_link(CONTACT_EMAIL);
        let query = link.split_once('?').map(|(_, query)| query).unwrap();
        let params: Vec<&str> = query.split('&').collect();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0], "subject=New%20message%20from%20Bo%20%26%20Co");
        assert!(params[1].contains("50%25%20off%3F%0Athanks%3Dyes"));
    }

    #[test]
    fn editing_one_field_keeps_the_others() {
        let form = filled("Ana", "ana@example.com", "Hi").with(Field::Email, "new@example.com".to_string());
        assert_eq!(form.name, "Ana");
        assert_eq!(form.email, "new@example.com");
        assert_eq!(form.message, "Hi");
    }
}
