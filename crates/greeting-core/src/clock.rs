//! Periodically refreshed "current moment" text.
//!
//! [`ClockTicker`] is the state cell; [`RefreshTimer`] is the background
//! task that tells it when to refresh. The two are separate so the ticker
//! can be driven by a simulated clock in tests and by the UI runtime in the
//! viewer.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use chrono::{DateTime, Datelike, FixedOffset, Local, Locale};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// How often the clock text is regenerated.
pub const CLOCK_REFRESH_PERIOD: Duration = Duration::from_secs(30);

/// Source of wall-clock time.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// The host's wall clock in its local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<FixedOffset>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<FixedOffset>) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn set(&self, at: DateTime<FixedOffset>) {
        self.now.set(at);
    }

    pub fn advance(&self, by: Duration) {
        let delta = chrono::Duration::from_std(by).unwrap_or(chrono::Duration::zero());
        self.now.set(self.now.get() + delta);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.now.get()
    }
}

/// Locale-aware "full date, short time" formatting.
#[derive(Debug, Clone, Copy)]
pub struct ClockFormat {
    locale: Locale,
}

impl Default for ClockFormat {
    fn default() -> Self {
        Self {
            locale: Locale::en_US,
        }
    }
}

impl ClockFormat {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Parses names like `fr_FR`, `fr-FR` or `fr_FR.UTF-8`.
    pub fn parse(name: &str) -> Option<Self> {
        let base = name.split(['.', '@']).next().unwrap_or(name);
        let normalized = base.replace('-', "_");
        Locale::try_from(normalized.as_str()).ok().map(Self::new)
    }

    /// Picks the locale from `LC_ALL`, `LC_TIME` or `LANG`, in that order.
    ///
    /// Falls back to `en_US` when none is set or recognised.
    pub fn from_env() -> Self {
        ["LC_ALL", "LC_TIME", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .filter(|value| !value.is_empty() && value != "C" && value != "POSIX")
            .find_map(|value| Self::parse(&value))
            .unwrap_or_default()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Formats an instant, e.g. `Friday, October 16, 2026 at 3:45 PM`.
    pub fn format(&self, at: &DateTime<FixedOffset>) -> String {
        at.format_localized(self.pattern(), self.locale).to_string()
    }

    fn pattern(&self) -> &'static str {
        match self.locale {
            Locale::en_US => "%A, %B %-d, %Y at %-I:%M %p",
            Locale::en_GB => "%A %-d %B %Y at %H:%M",
            Locale::de_DE => "%A, %-d. %B %Y um %H:%M",
            Locale::fr_FR => "%A %-d %B %Y à %H:%M",
            Locale::es_ES => "%A, %-d de %B de %Y, %H:%M",
            Locale::it_IT => "%A %-d %B %Y alle ore %H:%M",
            Locale::pt_BR => "%A, %-d de %B de %Y às %H:%M",
            Locale::nl_NL => "%A %-d %B %Y om %H:%M",
            _ => "%A %-d %B %Y, %H:%M",
        }
    }
}

/// One regenerated reading of the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockSnapshot {
    text: String,
    year: i32,
}

impl ClockSnapshot {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Calendar year the snapshot was taken in.
    pub fn year(&self) -> i32 {
        self.year
    }
}

impl fmt::Display for ClockSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// State cell for the formatted current moment.
#[derive(Debug, Clone)]
pub struct ClockTicker<C: Clock> {
    clock: C,
    format: ClockFormat,
    snapshot: ClockSnapshot,
}

impl<C: Clock> ClockTicker<C> {
    pub fn new(clock: C, format: ClockFormat) -> Self {
        let snapshot = Self::read(&clock, &format);
        Self {
            clock,
            format,
            snapshot,
        }
    }

    fn read(clock: &C, format: &ClockFormat) -> ClockSnapshot {
        let now = clock.now();
        ClockSnapshot {
            text: format.format(&now),
            year: now.year(),
        }
    }

    pub fn snapshot(&self) -> &ClockSnapshot {
        &self.snapshot
    }

    /// Replaces the snapshot with a fresh reading.
    ///
    /// Returns whether the formatted text changed.
    pub fn refresh(&mut self) -> bool {
        let next = Self::read(&self.clock, &self.format);
        let changed = next.text != self.snapshot.text;
        self.snapshot = next;
        if changed {
            tracing::trace!(clock = %self.snapshot, "Clock refreshed");
        }
        changed
    }
}

/// Background task emitting one tick per period.
///
/// The first tick arrives one full period after [`RefreshTimer::start`].
/// The task is aborted when the timer is stopped or dropped; the tick
/// receiver then yields `None`.
#[derive(Debug)]
pub struct RefreshTimer {
    task: JoinHandle<()>,
}

impl RefreshTimer {
    /// Spawns the timer task on the current tokio runtime.
    pub fn start(period: Duration) -> (Self, mpsc::UnboundedReceiver<Instant>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                let at = interval.tick().await;
                if tx.send(at).is_err() {
                    break;
                }
            }
        });
        tracing::debug!(?period, "Refresh timer started");
        (Self { task }, rx)
    }

    /// Stops the timer. Consumes it, so it cannot be stopped twice.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for RefreshTimer {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!("Refresh timer stopped");
    }
}
