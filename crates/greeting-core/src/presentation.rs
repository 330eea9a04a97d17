//! Composition of all state cells into one renderable page.
//!
//! [`PresentationRoot::render`] is a pure function: the same snapshot always
//! produces the same [`PageView`]. Hosts re-run it whenever a cell they
//! read changes and draw the result without further logic.

use crate::audio::AudioPlaybackState;
use crate::clock::ClockSnapshot;
use crate::content::{AssetHandle, GreetingContent, NAME_PLACEHOLDER};
use crate::nickname::{Glyph, NicknameSlot, SelectionState};
use crate::particles::ParticleField;
use crate::theme::ThemeMode;

/// Borrowed view of every state cell at one instant.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub content: &'a GreetingContent,
    pub clock: &'a ClockSnapshot,
    pub theme: ThemeMode,
    pub audio: AudioPlaybackState,
    pub selection: &'a SelectionState,
    pub particles: &'a ParticleField,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopBarView {
    pub clock: String,
    pub show_unmute: bool,
    pub unmute_label: &'static str,
    pub unmute_glyph: Glyph,
    pub theme_label: &'static str,
    pub theme_glyph: Glyph,
}

/// One entry of the nickname switcher.
#[derive(Debug, Clone, PartialEq)]
pub struct NicknameButton {
    pub slot: NicknameSlot,
    /// Stable roster key, unique even when labels repeat.
    pub key: String,
    pub label: String,
    pub glyph: Glyph,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroView {
    pub tagline: String,
    pub heading_prefix: String,
    pub heading_name: String,
    pub intro: String,
    pub switcher: Vec<NicknameButton>,
    pub image: AssetHandle,
    pub image_alt: String,
    /// Floating caption over the photo.
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LetterView {
    pub title: String,
    pub salutation: String,
    pub paragraphs: Vec<String>,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryView {
    pub title: String,
    pub body: String,
    pub video: AssetHandle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterView {
    pub copyright: String,
    pub credit: String,
}

/// The whole page, top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    /// Class marking the rendering root.
    pub theme_class: &'static str,
    pub audio_source: AssetHandle,
    pub top_bar: TopBarView,
    pub hero: HeroView,
    pub letter: LetterView,
    pub memory: MemoryView,
    pub footer: FooterView,
    /// Inline styles for the particle layer, one per particle.
    pub particle_styles: Vec<String>,
}

/// Stateless composer of [`PageView`]s.
pub struct PresentationRoot;

impl PresentationRoot {
    pub fn render(snapshot: &Snapshot<'_>) -> PageView {
        let content = snapshot.content;
        let active = snapshot.selection.active();
        let name = active.label.as_str();

        let top_bar = TopBarView {
            clock: snapshot.clock.to_string(),
            show_unmute: snapshot.audio == AudioPlaybackState::Blocked,
            unmute_label: "Unmute Music",
            unmute_glyph: Glyph::Music,
            theme_label: snapshot.theme.toggle_label(),
            theme_glyph: snapshot.theme.toggle_glyph(),
        };

        let switcher = snapshot
            .selection
            .roster()
            .iter()
            .map(|(slot, nickname)| NicknameButton {
                slot,
                key: nickname.key.clone(),
                label: nickname.label.clone(),
                glyph: nickname.icon,
                active: slot == snapshot.selection.active_slot(),
            })
            .collect();

        let hero = HeroView {
            tagline: content.tagline.clone(),
            heading_prefix: content.heading_prefix.clone(),
            heading_name: name.to_string(),
            intro: content.intro.clone(),
            switcher,
            image: content.assets.image.clone(),
            image_alt: content.assets.image_alt.clone(),
            caption: format!("For {name} with \u{2665}"),
        };

        let letter = LetterView {
            title: content.letter.title.clone(),
            salutation: format!("To my {name},"),
            paragraphs: content
                .letter
                .paragraphs
                .iter()
                .map(|p| p.replace(NAME_PLACEHOLDER, name))
                .collect(),
            signature: format!("\u{2014} {}", content.author),
        };

        let memory = MemoryView {
            title: content.memory.title.clone(),
            body: content.memory.body.clone(),
            video: content.assets.video.clone(),
        };

        let footer = FooterView {
            copyright: format!(
                "\u{a9} {} made with \u{2764}\u{fe0f} by {}",
                snapshot.clock.year(),
                content.author
            ),
            credit: format!("Crafted for {name}"),
        };

        PageView {
            theme_class: snapshot.theme.css_value(),
            audio_source: content.assets.audio.clone(),
            top_bar,
            hero,
            letter,
            memory,
            footer,
            particle_styles: snapshot
                .particles
                .particles()
                .iter()
                .map(|p| p.inline_style())
                .collect(),
        }
    }
}
