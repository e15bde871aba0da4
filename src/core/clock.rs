use chrono::{FixedOffset, NaiveDateTime, Utc};

use crate::core::{AppError, Result};

/// Source of the current local time.
///
/// Order timestamps are stored as naive DATETIME values in the application
/// timezone, so "now" is expressed the same way.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock shifted to the application's fixed UTC offset
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Build from an offset in minutes east of UTC (e.g. 420 for UTC+7)
    pub fn from_offset_minutes(minutes: i32) -> Result<Self> {
        let offset = utc_offset(minutes)?;
        Ok(Self::new(offset))
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.offset).naive_local()
    }
}

/// Clock pinned to a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Convert an offset in minutes east of UTC into a `FixedOffset`
pub fn utc_offset(minutes: i32) -> Result<FixedOffset> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| AppError::configuration(format!("Invalid UTC offset: {} minutes", minutes)))
}
