//! Presentation state and ambient media controller for the greeting screen
//!
//! This crate owns every piece of runtime state behind the greeting screen
//! and knows nothing about the UI toolkit that eventually draws it. Each
//! concern is an independent state cell with a single writer:
//!
//! - [`ClockTicker`]: the periodically refreshed "current moment" string
//! - [`ThemeController`]: the light/dark flag applied to the rendering root
//! - [`AudioAutoplayController`]: the autoplay permission state machine
//! - [`ParticleField`]: 36 decorative particles, randomized once
//! - [`SelectionState`]: the active nickname
//!
//! [`PresentationRoot`] composes a snapshot of all of them into a
//! [`PageView`], a plain data tree the host UI renders verbatim.
//!
//! # Quick Start
//!
//! ```ignore
//! use greeting_core::{
//!     AudioAutoplayController, ClockFormat, ClockTicker, GreetingContent,
//!     ParticleField, PresentationRoot, SelectionState, Snapshot, SystemClock,
//!     ThemeController,
//! };
//!
//! let content = GreetingContent::default();
//! let clock = ClockTicker::new(SystemClock, ClockFormat::default());
//! let theme = ThemeController::default();
//! let audio = AudioAutoplayController::new(content.assets.audio.clone());
//! let selection = SelectionState::new(content.roster.clone());
//! let particles = ParticleField::new();
//!
//! let page = PresentationRoot::render(&Snapshot {
//!     content: &content,
//!     clock: clock.snapshot(),
//!     theme: theme.mode(),
//!     audio: audio.state(),
//!     selection: &selection,
//!     particles: &particles,
//! });
//! ```

pub mod audio;
pub mod clock;
pub mod content;
pub mod error;
pub mod nickname;
pub mod particles;
pub mod presentation;
pub mod theme;

pub use audio::{
    attempt_with, AttemptKind, AudioAutoplayController, AudioPlaybackState, PlaybackAttempt,
    PlaybackHost,
};
pub use clock::{
    Clock, ClockFormat, ClockSnapshot, ClockTicker, ManualClock, RefreshTimer, SystemClock,
    CLOCK_REFRESH_PERIOD,
};
pub use content::{AssetHandle, GreetingContent, LetterContent, MediaAssets, MemoryContent};
pub use error::{ContentError, PlaybackError};
pub use nickname::{Glyph, Nickname, NicknameRoster, NicknameSlot, SelectionState};
pub use particles::{Particle, ParticleField, ParticleFrame, PARTICLE_COUNT};
pub use presentation::{
    FooterView, HeroView, LetterView, MemoryView, NicknameButton, PageView, PresentationRoot,
    Snapshot, TopBarView,
};
pub use theme::{ThemeController, ThemeMode, ThemeTarget};
