//! Timestamp provider for `created_at` / `updated_at` fields.

use chrono::{Duration, Local, NaiveDateTime};
use serde::Deserialize;
use std::cell::Cell;

/// Layout used when rendering timestamps.
///
/// Both layouts sort lexicographically in chronological order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampFormat {
    /// `yyyy-MM-dd HH:mm:ss`
    #[default]
    Seconds,
    /// `yyyy-MM-dd HH:mm`
    Minutes,
}

impl TimestampFormat {
    /// Returns the chrono format string for this layout.
    pub fn pattern(self) -> &'static str {
        match self {
            TimestampFormat::Seconds => "%Y-%m-%d %H:%M:%S",
            TimestampFormat::Minutes => "%Y-%m-%d %H:%M",
        }
    }

    /// Formats a naive local date-time with this layout.
    pub fn render(self, at: NaiveDateTime) -> String {
        at.format(self.pattern()).to_string()
    }

    /// Smallest step this layout can show.
    pub fn unit(self) -> Duration {
        match self {
            TimestampFormat::Seconds => Duration::seconds(1),
            TimestampFormat::Minutes => Duration::minutes(1),
        }
    }

    /// Returns the timestamp one unit after `stamp`, if `stamp` uses this layout.
    pub fn next_after(self, stamp: &str) -> Option<String> {
        let at = NaiveDateTime::parse_from_str(stamp, self.pattern()).ok()?;
        Some(self.render(at + self.unit()))
    }
}

/// Source of formatted "now" timestamps.
pub trait Clock {
    /// Returns the current time as a formatted timestamp string.
    fn now(&self) -> String;

    /// Returns a timestamp strictly later than `prev`.
    ///
    /// Normally that is [`Clock::now`]. When `prev` is not earlier than now
    /// (same second, or same minute for [`TimestampFormat::Minutes`]), the
    /// result is `prev` advanced by one unit of its own layout. A `prev`
    /// in neither layout yields plain `now`.
    fn now_after(&self, prev: &str) -> String {
        let now = self.now();
        if now.as_str() > prev {
            return now;
        }
        [TimestampFormat::Seconds, TimestampFormat::Minutes]
            .into_iter()
            .find_map(|format| format.next_after(prev))
            .unwrap_or(now)
    }
}

/// Wall clock in the local time zone. No offset is recorded.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock {
    format: TimestampFormat,
}

impl LocalClock {
    pub fn new(format: TimestampFormat) -> Self {
        Self { format }
    }
}

impl Clock for LocalClock {
    fn now(&self) -> String {
        self.format.render(Local::now().naive_local())
    }
}

/// Deterministic clock that advances by a fixed step on every reading.
///
/// Useful wherever a test needs `updated_at` to differ from `created_at`
/// without sleeping.
///
/// ```
/// use jotter::domain::{Clock, ManualClock};
///
/// let clock = ManualClock::starting_at("2024-01-15 10:30:00").unwrap();
/// assert_eq!(clock.now(), "2024-01-15 10:30:00");
/// assert_eq!(clock.now(), "2024-01-15 10:30:01");
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    next: Cell<NaiveDateTime>,
    step: Duration,
    format: TimestampFormat,
}

impl ManualClock {
    /// Starts at the given `yyyy-MM-dd HH:mm:ss` instant, stepping one second per reading.
    pub fn starting_at(start: &str) -> Result<Self, chrono::ParseError> {
        let next = NaiveDateTime::parse_from_str(start, TimestampFormat::Seconds.pattern())?;
        Ok(Self {
            next: Cell::new(next),
            step: Duration::seconds(1),
            format: TimestampFormat::Seconds,
        })
    }

    /// Sets the amount the clock advances after each reading.
    pub fn with_step(mut self, step: Duration) -> Self {
        self.step = step;
        self
    }

    /// Sets the output layout.
    pub fn with_format(mut self, format: TimestampFormat) -> Self {
        self.format = format;
        self
    }
}

impl Clock for ManualClock {
    fn now(&self) -> String {
        let current = self.next.get();
        self.next.set(current + self.step);
        self.format.render(current)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> String {
        (**self).now()
    }

    fn now_after(&self, prev: &str) -> String {
        (**self).now_after(prev)
    }
}
