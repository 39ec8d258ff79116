use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::config::PRELOADER_MS;
use crate::scroll::use_scroll_lock;

#[derive(Properties, PartialEq)]
pub struct PreloaderProps {
    pub on_complete: Callback<()>,
}

/// Full-screen loading splash. Page scrolling stays locked while it is
/// mounted.
#[function_component(Preloader)]
pub fn preloader(props: &PreloaderProps) -> Html {
    use_scroll_lock();

    {
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |_| {
                let timer = Timeout::new(PRELOADER_MS, move || {
                    debug!("Preloader finished");
                    on_complete.emit(());
                });
                move || drop(timer)
            },
            (),
        );
    }

    html! {
        <div class="preloader" aria-busy="true">
            <style>{PRELOADER_CSS}</style>
            <div class="preloader-content">
                <div class="preloader-text">{"LOADING"}</div>
                <div class="preloader-track">
                    <div class="preloader-bar"></div>
                </div>
            </div>
        </div>
    }
}

// Timeline: text 0.5s, bar fill 2.5s from 0.6s, fade out 1s from 3.1s
const PRELOADER_CSS: &str = r#"
    .preloader {
        position: fixed;
        inset: 0;
        z-index: 100;
        display: flex;
        align-items: center;
        justify-content: center;
        background: #0a0a0e;
        animation: preloaderExit 1s ease-in-out 3.1s forwards;
    }
    .preloader-content { text-align: center; }
    .preloader-text {
        margin-bottom: 32px;
        font-size: 24px;
        font-weight: 300;
        letter-spacing: 0.3em;
        opacity: 0;
        animation: preloaderFadeIn 0.5s ease-out forwards;
    }
    .preloader-track {
        width: 256px;
        height: 2px;
        border-radius: 999px;
        background: #27272f;
        overflow: hidden;
    }
    .preloader-bar {
        width: 0;
        height: 100%;
        border-radius: 999px;
        background: linear-gradient(90deg, #1e90ff, #00e5ff);
        animation: preloaderFill 2.5s ease-out 0.6s forwards;
    }
    @keyframes preloaderFadeIn { to { opacity: 1; } }
    @keyframes preloaderFill { to { width: 100%; } }
    @keyframes preloaderExit { to { opacity: 0; transform: scale(0.9); } }
"#;
