//! Autoplay permission state machine for the background track.
//!
//! Hosts may refuse to start audio without a user gesture. The controller
//! issues exactly one unattended request on activation; if that is refused
//! it exposes a manual-enable affordance that re-issues the same request
//! whenever the user asks, for as long as it keeps failing.
//!
//! Requests are split into two halves so the state cell never has to be
//! borrowed across an await point: `begin_*` hands out a
//! [`PlaybackAttempt`] ticket, the caller runs it against a
//! [`PlaybackHost`], and [`AudioAutoplayController::complete`] applies the
//! outcome.

use async_trait::async_trait;

use crate::content::AssetHandle;
use crate::error::PlaybackError;

/// Playback status of the background track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AudioPlaybackState {
    /// The automatic request has not resolved yet.
    #[default]
    Attempting,
    /// The track is playing (looping).
    Playing,
    /// The host refused playback; waiting for the user.
    Blocked,
}

/// Who triggered a playback request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptKind {
    Automatic,
    Manual,
}

/// Ticket for one outstanding playback request.
///
/// Not `Clone`: each ticket is completed at most once.
#[derive(Debug, PartialEq, Eq)]
pub struct PlaybackAttempt {
    id: u64,
    kind: AttemptKind,
}

impl PlaybackAttempt {
    pub fn kind(&self) -> AttemptKind {
        self.kind
    }
}

/// The environment that actually starts playback.
#[async_trait(?Send)]
pub trait PlaybackHost {
    /// Requests playback of `source`, resolving once the host accepts or
    /// refuses.
    async fn play(&self, source: &AssetHandle) -> Result<(), PlaybackError>;
}

/// Runs `attempt` against `host` and returns it with the outcome, ready for
/// [`AudioAutoplayController::complete`].
pub async fn attempt_with<H: PlaybackHost + ?Sized>(
    host: &H,
    source: &AssetHandle,
    attempt: PlaybackAttempt,
) -> (PlaybackAttempt, Result<(), PlaybackError>) {
    let result = host.play(source).await;
    (attempt, result)
}

/// State cell for the background track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioAutoplayController {
    source: AssetHandle,
    state: AudioPlaybackState,
    autoplay_issued: bool,
    outstanding: Option<u64>,
    next_id: u64,
}

impl AudioAutoplayController {
    pub fn new(source: AssetHandle) -> Self {
        Self {
            source,
            state: AudioPlaybackState::Attempting,
            autoplay_issued: false,
            outstanding: None,
            next_id: 0,
        }
    }

    pub fn source(&self) -> &AssetHandle {
        &self.source
    }

    pub fn state(&self) -> AudioPlaybackState {
        self.state
    }

    /// Whether the manual-enable affordance should be shown.
    pub fn show_unmute(&self) -> bool {
        self.state == AudioPlaybackState::Blocked
    }

    /// Whether a request has been handed out and not yet completed.
    pub fn is_request_outstanding(&self) -> bool {
        self.outstanding.is_some()
    }

    fn issue(&mut self, kind: AttemptKind) -> PlaybackAttempt {
        let id = self.next_id;
        self.next_id += 1;
        self.outstanding = Some(id);
        tracing::debug!(?kind, source = %self.source, "Requesting playback");
        PlaybackAttempt { id, kind }
    }

    /// Issues the one automatic request for this activation.
    ///
    /// Every later call returns `None`; the controller never retries on its
    /// own.
    pub fn begin_autoplay(&mut self) -> Option<PlaybackAttempt> {
        if self.autoplay_issued {
            return None;
        }
        self.autoplay_issued = true;
        Some(self.issue(AttemptKind::Automatic))
    }

    /// Issues a user-triggered request.
    ///
    /// Only allowed while blocked with nothing outstanding, which also means
    /// the automatic request has already resolved.
    pub fn begin_manual_enable(&mut self) -> Option<PlaybackAttempt> {
        if self.state != AudioPlaybackState::Blocked || self.outstanding.is_some() {
            return None;
        }
        Some(self.issue(AttemptKind::Manual))
    }

    /// Applies the outcome of a request.
    pub fn complete(&mut self, attempt: PlaybackAttempt, result: Result<(), PlaybackError>) {
        if self.outstanding != Some(attempt.id) {
            tracing::warn!(kind = ?attempt.kind, "Ignoring completion of unknown playback request");
            return;
        }
        self.outstanding = None;

        match result {
            Ok(()) => {
                tracing::info!(kind = ?attempt.kind, "Background music playing");
                self.state = AudioPlaybackState::Playing;
            }
            Err(err) => match attempt.kind {
                AttemptKind::Automatic => {
                    tracing::info!(error = %err, "Autoplay blocked, offering manual enable");
                    self.state = AudioPlaybackState::Blocked;
                }
                AttemptKind::Manual => {
                    tracing::debug!(error = %err, "Manual enable failed");
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    /// Host that replays a fixed list of outcomes.
    struct ScriptedHost {
        outcomes: RefCell<VecDeque<Result<(), PlaybackError>>>,
        calls: RefCell<u32>,
    }

    impl ScriptedHost {
        fn new(outcomes: Vec<Result<(), PlaybackError>>) -> Self {
            Self {
                outcomes: RefCell::new(outcomes.into()),
                calls: RefCell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl PlaybackHost for ScriptedHost {
        async fn play(&self, _source: &AssetHandle) -> Result<(), PlaybackError> {
            *self.calls.borrow_mut() += 1;
            self.outcomes
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(PlaybackError::NotAllowed))
        }
    }

    fn controller() -> AudioAutoplayController {
        AudioAutoplayController::new(AssetHandle::new("assets/track.mp3"))
    }

    fn run(
        controller: &mut AudioAutoplayController,
        host: &ScriptedHost,
        attempt: PlaybackAttempt,
    ) {
        let source = controller.source().clone();
        let (attempt, result) = tokio_test::block_on(attempt_with(host, &source, attempt));
        controller.complete(attempt, result);
    }

    #[test]
    fn test_starts_attempting() {
        let audio = controller();
        assert_eq!(audio.state(), AudioPlaybackState::Attempting);
        assert!(!audio.show_unmute());
    }

    #[test]
    fn test_autoplay_success() {
        let mut audio = controller();
        let host = ScriptedHost::new(vec![Ok(())]);
        let attempt = audio.begin_autoplay().unwrap();
        run(&mut audio, &host, attempt);
        assert_eq!(audio.state(), AudioPlaybackState::Playing);
        assert!(!audio.show_unmute());
    }

    #[test]
    fn test_autoplay_denied() {
        let mut audio = controller();
        let host = ScriptedHost::new(vec![Err(PlaybackError::NotAllowed)]);
        let attempt = audio.begin_autoplay().unwrap();
        run(&mut audio, &host, attempt);
        assert_eq!(audio.state(), AudioPlaybackState::Blocked);
        assert!(audio.show_unmute());
    }

    #[test]
    fn test_any_error_blocks() {
        let mut audio = controller();
        let attempt = audio.begin_autoplay().unwrap();
        audio.complete(attempt, Err(PlaybackError::Host("AbortError: gone".into())));
        assert_eq!(audio.state(), AudioPlaybackState::Blocked);
    }

    #[test]
    fn test_autoplay_issued_once() {
        let mut audio = controller();
        let attempt = audio.begin_autoplay().unwrap();
        assert!(audio.begin_autoplay().is_none());
        audio.complete(attempt, Err(PlaybackError::NotAllowed));
        assert!(audio.begin_autoplay().is_none());
    }

    #[test]
    fn test_manual_enable_success() {
        let mut audio = controller();
        let host = ScriptedHost::new(vec![Err(PlaybackError::NotAllowed), Ok(())]);
        let attempt = audio.begin_autoplay().unwrap();
        run(&mut audio, &host, attempt);

        let attempt = audio.begin_manual_enable().unwrap();
        assert_eq!(attempt.kind(), AttemptKind::Manual);
        run(&mut audio, &host, attempt);
        assert_eq!(audio.state(), AudioPlaybackState::Playing);
        assert!(!audio.show_unmute());
        assert_eq!(*host.calls.borrow(), 2);
    }

    #[test]
    fn test_manual_enable_failure_is_retryable() {
        let mut audio = controller();
        let host = ScriptedHost::new(vec![
            Err(PlaybackError::NotAllowed),
            Err(PlaybackError::NotAllowed),
            Err(PlaybackError::Unsupported),
            Ok(()),
        ]);
        let attempt = audio.begin_autoplay().unwrap();
        run(&mut audio, &host, attempt);

        for _ in 0..2 {
            let attempt = audio.begin_manual_enable().unwrap();
            run(&mut audio, &host, attempt);
            assert_eq!(audio.state(), AudioPlaybackState::Blocked);
            assert!(audio.show_unmute());
        }

        let attempt = audio.begin_manual_enable().unwrap();
        run(&mut audio, &host, attempt);
        assert_eq!(audio.state(), AudioPlaybackState::Playing);
    }

    #[test]
    fn test_manual_enable_waits_for_autoplay() {
        let mut audio = controller();
        assert!(audio.begin_manual_enable().is_none());
        let _attempt = audio.begin_autoplay().unwrap();
        assert!(audio.begin_manual_enable().is_none());
    }

    #[test]
    fn test_one_request_outstanding() {
        let mut audio = controller();
        let attempt = audio.begin_autoplay().unwrap();
        audio.complete(attempt, Err(PlaybackError::NotAllowed));

        let manual = audio.begin_manual_enable().unwrap();
        assert!(audio.is_request_outstanding());
        assert!(audio.begin_manual_enable().is_none());
        audio.complete(manual, Err(PlaybackError::NotAllowed));
        assert!(!audio.is_request_outstanding());
        assert!(audio.begin_manual_enable().is_some());
    }

    #[test]
    fn test_manual_enable_idempotent_when_playing() {
        let mut audio = controller();
        let attempt = audio.begin_autoplay().unwrap();
        audio.complete(attempt, Ok(()));
        assert!(audio.begin_manual_enable().is_none());
        assert_eq!(audio.state(), AudioPlaybackState::Playing);
    }

    #[test]
    fn test_stray_ticket_ignored() {
        let mut audio = controller();
        audio.complete(
            PlaybackAttempt {
                id: 7,
                kind: AttemptKind::Manual,
            },
            Ok(()),
        );
        assert_eq!(audio.state(), AudioPlaybackState::Attempting);
        assert!(audio.begin_autoplay().is_some());
    }
}
