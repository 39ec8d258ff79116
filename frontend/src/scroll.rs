use log::warn;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::error::{self, Error};

fn body() -> error::Result<HtmlElement> {
    error::document()?.body().ok_or(Error::NoBody)
}

pub fn scroll_y() -> error::Result<f64> {
    Ok(error::window()?.scroll_y()?)
}

/// Smooth-scrolls the element with `id` to the top of the viewport.
pub fn scroll_to_element(id: &str) -> error::Result<()> {
    let element = error::document()?
        .get_element_by_id(id)
        .ok_or_else(|| Error::MissingElement(id.to_string()))?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Keeps the page from scrolling while the calling component is mounted.
#[hook]
pub fn use_scroll_lock() {
    use_effect_with_deps(
        |_| {
            let locked = body().and_then(|body| {
                let style = body.style();
                let previous = style.get_property_value("overflow").unwrap_or_default();
                style.set_property("overflow", "hidden")?;
                Ok((body, previous))
            });
            if let Err(err) = &locked {
                warn!("Could not lock page scroll: {}", err);
            }
            move || {
                if let Ok((body, previous)) = locked {
                    if let Err(err) = body.style().set_property("overflow", &previous) {
                        warn!("Could not restore page scroll: {}", Error::from(err));
                    }
                }
            }
        },
        (),
    );
}
