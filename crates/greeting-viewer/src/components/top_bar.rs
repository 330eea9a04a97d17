//! Top bar with the clock, the music affordance and the theme toggle.

use dioxus::prelude::*;

use greeting_core::{AudioAutoplayController, Glyph, ThemeController, TopBarView};

use super::app::run_playback;

#[component]
pub fn TopBar(
    view: TopBarView,
    music: Signal<AudioAutoplayController>,
    theme: Signal<ThemeController>,
) -> Element {
    let mut music_write = music;
    let mut theme_write = theme;

    rsx! {
        div {
            class: "top-bar",

            div {
                class: "top-bar-left",
                div { class: "top-bar-badge", "{Glyph::Heart.symbol()}" }
                p { class: "top-bar-clock", "{view.clock}" }
            }

            div {
                class: "top-bar-right",

                if view.show_unmute {
                    button {
                        class: "unmute-btn",
                        title: "Enable music",
                        onclick: move |_| {
                            let attempt = music_write.write().begin_manual_enable();
                            if let Some(attempt) = attempt {
                                run_playback(music_write, attempt);
                            }
                        },
                        span { class: "glyph {view.unmute_glyph.css_class()}", "{view.unmute_glyph.symbol()}" }
                        span { class: "unmute-label", "{view.unmute_label}" }
                    }
                }

                button {
                    class: "theme-toggle",
                    onclick: move |_| {
                        theme_write.write().toggle();
                    },
                    span { class: "glyph {view.theme_glyph.css_class()}", "{view.theme_glyph.symbol()}" }
                    span { class: "theme-toggle-label", "{view.theme_label}" }
                }
            }
        }
    }
}
