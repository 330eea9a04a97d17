//! Root application component for the greeting screen.

use dioxus::prelude::*;

use greeting_core::{
    attempt_with, AudioAutoplayController, ClockTicker, ParticleField, PlaybackAttempt,
    PresentationRoot, RefreshTimer, SelectionState, Snapshot, SystemClock, ThemeController,
    CLOCK_REFRESH_PERIOD,
};

use crate::config::viewer_config;
use crate::media::{DocumentRoot, WebviewPlayback, BACKGROUND_AUDIO_ID};

use super::{Footer, Hero, Letter, Memory, ParticleLayer, TopBar};

/// Root application component.
///
/// Owns one signal per state cell. The page is memoized from all of them,
/// so it is recomposed only when one of them changes.
#[component]
pub fn App() -> Element {
    let config = viewer_config();

    let mut clock = use_signal(|| ClockTicker::new(SystemClock, config.clock_format));
    let theme = use_signal(ThemeController::default);
    let mut music =
        use_signal(|| AudioAutoplayController::new(config.content.assets.audio.clone()));
    let selection = use_signal(|| SelectionState::new(config.content.roster.clone()));
    // Never written after creation
    let particles = use_signal(ParticleField::new);

    // Clock refresh; the timer is released when this future is dropped on unmount
    use_future(move || async move {
        let (_timer, mut ticks) = RefreshTimer::start(CLOCK_REFRESH_PERIOD);
        while ticks.recv().await.is_some() {
            clock.write().refresh();
        }
    });

    // Mark the document root on activation and after every toggle
    use_effect(move || {
        theme.read().apply_to(&DocumentRoot);
    });

    // Single unattended playback request per mount
    use_effect(move || {
        let attempt = music.write().begin_autoplay();
        if let Some(attempt) = attempt {
            run_playback(music, attempt);
        }
    });

    use_drop(|| {
        tracing::info!("Shutting down greeting screen");
    });

    let page = use_memo(move || {
        let clock = clock.read();
        let music = music.read();
        let selection = selection.read();
        let particles = particles.read();
        PresentationRoot::render(&Snapshot {
            content: &config.content,
            clock: clock.snapshot(),
            theme: theme.read().mode(),
            audio: music.state(),
            selection: &selection,
            particles: &particles,
        })
    });
    let page = page.read();

    rsx! {
        div {
            class: "greeting-root {page.theme_class}",
            "data-theme": "{page.theme_class}",

            // Hidden background track; playback is started by the controller
            audio {
                id: BACKGROUND_AUDIO_ID,
                src: "{page.audio_source}",
                "loop": "true",
                "preload": "auto",
            }

            ParticleLayer { styles: page.particle_styles.clone() }

            TopBar { view: page.top_bar.clone(), music, theme }

            main {
                class: "greeting-main",
                Hero { view: page.hero.clone(), selection }
                Letter { view: page.letter.clone() }
                Memory { view: page.memory.clone() }
            }

            Footer { view: page.footer.clone() }
        }
    }
}

/// Runs a playback request in the background and applies its outcome.
pub fn run_playback(mut music: Signal<AudioAutoplayController>, attempt: PlaybackAttempt) {
    spawn(async move {
        let host = WebviewPlayback::new(BACKGROUND_AUDIO_ID);
        let source = music.peek().source().clone();
        let (attempt, result) = attempt_with(&host, &source, attempt).await;
        music.write().complete(attempt, result);
    });
}
