//! Floating heart particles behind the page.

use dioxus::prelude::*;

use greeting_core::Glyph;

/// Decorative layer; one element per particle style, no interaction.
#[component]
pub fn ParticleLayer(styles: Vec<String>) -> Element {
    rsx! {
        div {
            class: "particle-layer",
            "aria-hidden": "true",
            for (i, style) in styles.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "particle",
                    style: "{style}",
                    "{Glyph::Heart.symbol()}"
                }
            }
        }
    }
}
