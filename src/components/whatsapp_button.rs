use log::warn;
use web_sys::window;
use yew::prelude::*;

use crate::config;

pub fn whatsapp_url(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(message))
}

pub fn maps_url((lat, lng): (f64, f64)) -> String {
    format!("https://www.google.com/maps?q={},{}", lat, lng)
}

pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window() {
        if window.open_with_url_and_target(url, "_blank").is_err() {
            warn!("Popup blocked for {}", url);
        }
    }
}

#[function_component(WhatsAppButton)]
pub fn whatsapp_button() -> Html {
    let is_hovered = use_state(|| false);

    let onclick = Callback::from(|_: MouseEvent| {
        open_in_new_tab(&whatsapp_url(config::whatsapp_number(), config::WHATSAPP_GREETING));
    });
    let onmouseenter = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(true))
    };
    let onmouseleave = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(false))
    };

    html! {
        <div class="whatsapp-float">
            <style>
                {r#"
                .whatsapp-float {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    z-index: 50;
                }
                .whatsapp-button {
                    position: relative;
                    width: 4rem;
                    height: 4rem;
                    border: none;
                    border-radius: 50%;
                    background: #25D366;
                    color: #fff;
                    cursor: pointer;
                    box-shadow: 0 16px 32px rgba(0,0,0,0.35);
                    transition: transform 0.3s ease, background 0.3s ease;
                }
                .whatsapp-button:hover {
                    background: #20BA5A;
                    transform: scale(1.1);
                }
                .whatsapp-tooltip {
                    position: absolute;
                    right: calc(100% + 1rem);
                    top: 50%;
                    transform: translate(0.5rem, -50%);
                    white-space: nowrap;
                    background: #0f172a;
                    color: #fff;
                    padding: 0.5rem 1rem;
                    border-radius: 8px;
                    font-size: 0.875rem;
                    opacity: 0;
                    pointer-events: none;
                    transition: all 0.3s ease;
                }
                .whatsapp-tooltip.visible {
                    opacity: 1;
                    transform: translate(0, -50%);
                }
                "#}
            </style>
            <button
                class="whatsapp-button"
                aria-label="Contact us on WhatsApp"
                {onclick}
                {onmouseenter}
                {onmouseleave}
            >
                <svg viewBox="0 0 32 32" fill="currentColor" width="32" height="32">
                    <path d="M16 0C7.2 0 0 7.2 0 16c0 2.8.7 5.5 2 7.8L.7 31.2l7.6-2c2.2 1.2 4.8 1.9 7.5 1.9 8.8 0 16-7.2 16-16S24.8 0 16 0zm0 29.3c-2.4 0-4.8-.6-6.8-1.9l-.5-.3-5.1 1.3 1.4-4.9-.3-.5C2.9 21 2.3 18.6 2.3 16 2.3 8.4 8.4 2.3 16 2.3S29.7 8.4 29.7 16 23.6 29.3 16 29.3z" />
                </svg>
                <span class={classes!("whatsapp-tooltip", (*is_hovered).then(|| "visible"))}>
                    {"Chat with us on WhatsApp"}
                </span>
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_encodes_greeting() {
        assert_eq!(
            whatsapp_url("919811066616", "Hi! I'd like to start"),
            "https://wa.me/919811066616?text=Hi%21%20I%27d%20like%20to%20start"
        );
    }

    #[test]
    fn maps_link_uses_coordinates() {
        assert_eq!(maps_url((28.5244, 77.3827)), "https://www.google.com/maps?q=28.5244,77.3827");
    }
}
