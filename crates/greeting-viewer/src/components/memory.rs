//! Memory section with a silent looping video.

use dioxus::prelude::*;

use greeting_core::MemoryView;

#[component]
pub fn Memory(view: MemoryView) -> Element {
    rsx! {
        section {
            id: "memory",
            class: "card memory",

            div {
                class: "memory-text",
                h3 { class: "memory-title", "{view.title}" }
                p { class: "memory-body", "{view.body}" }
            }

            div {
                class: "memory-video",
                video {
                    autoplay: true,
                    muted: true,
                    "loop": "true",
                    "playsinline": "true",
                    source { src: "{view.video}", r#type: "video/mp4" }
                }
            }
        }
    }
}
