//! Identifier and timestamp sources for newly created records.
//!
//! Both are traits so the store and the handlers can be exercised with
//! deterministic fakes; the default implementations are [`UuidGenerator`] and
//! [`SystemClock`].

use chrono::{DateTime, SecondsFormat, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Canonical creation instant: ISO-8601 UTC with millisecond precision
/// (`2024-05-01T12:00:00.000Z`).
///
/// The representation is fixed-width, so the derived string ordering is also
/// chronological ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    pub fn from_datetime(instant: DateTime<Utc>) -> Self {
        Self(instant.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Produces opaque, globally unique record identifiers
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random (v4) UUIDs in their hyphenated lowercase form
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Produces the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall clock that never goes backwards.
///
/// If the system time steps back (NTP adjustment, VM migration) the last issued
/// instant is returned again, so consecutive calls are non-decreasing.
#[derive(Debug, Default)]
pub struct SystemClock {
    last: Mutex<Option<DateTime<Utc>>>,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }

    fn advance(&self, observed: DateTime<Utc>) -> DateTime<Utc> {
        let mut last = self.last.lock();
        let instant = match *last {
            Some(previous) if previous > observed => previous,
            _ => observed,
        };
        *last = Some(instant);
        instant
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_datetime(self.advance(Utc::now()))
    }
}
