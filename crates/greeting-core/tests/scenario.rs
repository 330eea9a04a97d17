//! End-to-end walk through the greeting screen's state cells.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use chrono::{FixedOffset, TimeZone};

use greeting_core::{
    attempt_with, AssetHandle, AudioAutoplayController, AudioPlaybackState, ClockFormat,
    ClockTicker, GreetingContent, ManualClock, NicknameSlot, PageView, ParticleField,
    PlaybackError, PlaybackHost, PresentationRoot, SelectionState, Snapshot, ThemeController,
    ThemeMode, CLOCK_REFRESH_PERIOD,
};

/// Host whose answers are queued by the test.
#[derive(Default)]
struct SimulatedHost {
    answers: RefCell<VecDeque<Result<(), PlaybackError>>>,
}

impl SimulatedHost {
    fn answer(&self, result: Result<(), PlaybackError>) {
        self.answers.borrow_mut().push_back(result);
    }
}

#[async_trait(?Send)]
impl PlaybackHost for SimulatedHost {
    async fn play(&self, _source: &AssetHandle) -> Result<(), PlaybackError> {
        self.answers
            .borrow_mut()
            .pop_front()
            .expect("test did not queue an answer")
    }
}

struct Screen {
    content: GreetingContent,
    clock: ClockTicker<ManualClock>,
    manual_clock: ManualClock,
    theme: ThemeController,
    audio: AudioAutoplayController,
    selection: SelectionState,
    particles: ParticleField,
}

impl Screen {
    fn new() -> Self {
        let content = GreetingContent::default();
        let start = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2026, 10, 16, 9, 15, 10)
            .unwrap();
        let manual_clock = ManualClock::new(start);
        Self {
            clock: ClockTicker::new(manual_clock.clone(), ClockFormat::default()),
            manual_clock,
            theme: ThemeController::default(),
            audio: AudioAutoplayController::new(content.assets.audio.clone()),
            selection: SelectionState::new(content.roster.clone()),
            particles: ParticleField::with_seed(2026),
            content,
        }
    }

    fn render(&self) -> PageView {
        PresentationRoot::render(&Snapshot {
            content: &self.content,
            clock: self.clock.snapshot(),
            theme: self.theme.mode(),
            audio: self.audio.state(),
            selection: &self.selection,
            particles: &self.particles,
        })
    }
}

fn resolve(screen: &mut Screen, host: &SimulatedHost, manual: bool) {
    let attempt = if manual {
        screen.audio.begin_manual_enable()
    } else {
        screen.audio.begin_autoplay()
    }
    .expect("attempt should be issued");
    let source = screen.audio.source().clone();
    let (attempt, result) = tokio_test::block_on(attempt_with(host, &source, attempt));
    screen.audio.complete(attempt, result);
}

#[test]
fn test_full_scenario() {
    let mut screen = Screen::new();
    let host = SimulatedHost::default();

    // Defaults
    assert_eq!(screen.selection.active_slot(), NicknameSlot::First);
    assert_eq!(screen.theme.mode(), ThemeMode::Dark);
    assert_eq!(screen.audio.state(), AudioPlaybackState::Attempting);
    let initial = screen.render();
    let initial_particles = initial.particle_styles.clone();

    // Autoplay denied
    host.answer(Err(PlaybackError::NotAllowed));
    resolve(&mut screen, &host, false);
    assert_eq!(screen.audio.state(), AudioPlaybackState::Blocked);
    assert!(screen.render().top_bar.show_unmute);

    // Manual enable succeeds
    host.answer(Ok(()));
    resolve(&mut screen, &host, true);
    assert_eq!(screen.audio.state(), AudioPlaybackState::Playing);
    assert!(!screen.render().top_bar.show_unmute);

    // Toggle theme once
    screen.theme.toggle();
    assert_eq!(screen.theme.mode(), ThemeMode::Light);
    assert_eq!(screen.render().theme_class, "light");

    // Select the third nickname
    screen.selection.select(NicknameSlot::Third);
    let page = screen.render();
    let label = &screen.content.roster.get(NicknameSlot::Third).label;
    assert_eq!(&page.hero.heading_name, label);
    assert_eq!(page.letter.salutation, format!("To my {label},"));
    assert_eq!(page.hero.caption, format!("For {label} with \u{2665}"));
    assert_eq!(page.footer.credit, format!("Crafted for {label}"));

    // Particles never re-rolled across all of the above
    assert_eq!(page.particle_styles, initial_particles);
}

#[test]
fn test_clock_refresh_reaches_page() {
    let mut screen = Screen::new();
    let before = screen.render().top_bar.clock;
    assert_eq!(before, "Friday, October 16, 2026 at 9:15 AM");

    screen.manual_clock.advance(CLOCK_REFRESH_PERIOD);
    assert!(!screen.clock.refresh());
    assert_eq!(screen.render().top_bar.clock, before);

    screen.manual_clock.advance(CLOCK_REFRESH_PERIOD);
    assert!(screen.clock.refresh());
    assert_eq!(
        screen.render().top_bar.clock,
        "Friday, October 16, 2026 at 9:16 AM"
    );
}

#[test]
fn test_repeated_denials_never_surface() {
    let mut screen = Screen::new();
    let host = SimulatedHost::default();

    host.answer(Err(PlaybackError::NotAllowed));
    resolve(&mut screen, &host, false);
    for _ in 0..5 {
        host.answer(Err(PlaybackError::NotAllowed));
        resolve(&mut screen, &host, true);
        let page = screen.render();
        assert!(page.top_bar.show_unmute);
        assert_eq!(page.top_bar.unmute_label, "Unmute Music");
    }
    assert!(screen.audio.begin_autoplay().is_none());
}
