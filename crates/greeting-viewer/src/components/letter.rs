//! Love letter section.

use dioxus::prelude::*;

use greeting_core::{Glyph, LetterView};

#[component]
pub fn Letter(view: LetterView) -> Element {
    rsx! {
        section {
            id: "love-letter",
            class: "card letter",

            h2 {
                class: "letter-title",
                span { class: "glyph glyph-heart", "{Glyph::Heart.symbol()}" }
                "{view.title}"
            }

            p { class: "letter-salutation", "{view.salutation}" }

            for (i, paragraph) in view.paragraphs.iter().enumerate() {
                p { key: "{i}", class: "letter-paragraph", "{paragraph}" }
            }

            p { class: "letter-signature", "{view.signature}" }
        }
    }
}
