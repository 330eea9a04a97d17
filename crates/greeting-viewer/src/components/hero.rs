//! Hero panel: heading, nickname switcher and photo card.

use dioxus::prelude::*;

use greeting_core::{Glyph, HeroView, SelectionState};

#[component]
pub fn Hero(view: HeroView, selection: Signal<SelectionState>) -> Element {
    let mut selection_write = selection;

    rsx! {
        section {
            class: "card hero",

            div {
                class: "hero-text",

                div {
                    class: "hero-tagline",
                    span { class: "glyph", "{Glyph::Sparkles.symbol()}" }
                    "{view.tagline}"
                }

                h1 {
                    class: "hero-heading",
                    "{view.heading_prefix}"
                    span { class: "hero-heading-name", "{view.heading_name}" }
                }

                p { class: "hero-intro", "{view.intro}" }

                div {
                    class: "nickname-switcher",
                    for entry in view.switcher.iter() {
                        {
                            let slot = entry.slot;
                            let class = if entry.active { "nickname-btn active" } else { "nickname-btn" };
                            rsx! {
                                button {
                                    key: "{entry.key}",
                                    class: "{class}",
                                    onclick: move |_| selection_write.write().select(slot),
                                    span { class: "glyph {entry.glyph.css_class()}", "{entry.glyph.symbol()}" }
                                    "{entry.label}"
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "hero-photo",
                div {
                    class: "hero-photo-frame",
                    img {
                        src: "{view.image}",
                        alt: "{view.image_alt}",
                        "loading": "eager",
                    }
                }
                div {
                    class: "card hero-caption",
                    span { class: "glyph", "{Glyph::Sparkles.symbol()}" }
                    span { "{view.caption}" }
                }
            }
        }
    }
}
