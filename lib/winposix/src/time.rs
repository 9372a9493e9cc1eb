//! POSIX seconds ↔ Windows `FILETIME`.
//!
//! A `FILETIME` counts 100-nanosecond ticks since 1601-01-01 UTC.

use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds between 1601-01-01 and 1970-01-01 (369 years, 89 of them leap).
pub const EPOCH_OFFSET_SECONDS: i64 = 11_644_473_600;

/// `FILETIME` resolution.
pub const TICKS_PER_SECOND: i64 = 10_000_000;

/// A tick count split the way the native `FILETIME` struct stores it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileTime {
    pub high: u32,
    pub low: u32,
}

impl FileTime {
    pub const fn from_ticks(ticks: u64) -> Self {
        Self {
            high: (ticks >> 32) as u32,
            low: ticks as u32,
        }
    }

    pub const fn ticks(self) -> u64 {
        ((self.high as u64) << 32) | self.low as u64
    }
}

/// Converts POSIX seconds to a `FILETIME`.
///
/// Whole seconds always land on a tick boundary. Instants before 1601 clamp
/// to tick 0 and instants past the end of the 64-bit range clamp to the
/// maximum.
pub fn to_native_time(unix_seconds: i64) -> FileTime {
    let ticks = (i128::from(unix_seconds) + i128::from(EPOCH_OFFSET_SECONDS))
        * i128::from(TICKS_PER_SECOND);
    FileTime::from_ticks(ticks.clamp(0, i128::from(u64::MAX)) as u64)
}

/// Converts a `FILETIME` back to POSIX seconds, dropping sub-second ticks.
pub fn from_native_time(time: FileTime) -> i64 {
    (time.ticks() / TICKS_PER_SECOND as u64) as i64 - EPOCH_OFFSET_SECONDS
}

/// Current wall-clock time in POSIX seconds.
pub fn unix_now() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs() as i64,
        Err(err) => -(err.duration().as_secs() as i64),
    }
}
