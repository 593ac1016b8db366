use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;
use thiserror::Error;

/// A wall-clock time compiled into the binary. It has no offset of its own;
/// `resolve` pins it to a concrete instant in a given time zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReferenceDate {
    pub label: &'static str,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

pub const ELECTION_DAY: ReferenceDate = ReferenceDate {
    label: "election day",
    year: 2024,
    month: 11,
    day: 5,
    hour: 0,
    minute: 0,
};

pub const FIRST_TERM_END: ReferenceDate = ReferenceDate {
    label: "first term end",
    year: 2025,
    month: 1,
    day: 20,
    hour: 12,
    minute: 0,
};

pub const SECOND_TERM_END: ReferenceDate = ReferenceDate {
    label: "second term end",
    year: 2029,
    month: 1,
    day: 20,
    hour: 12,
    minute: 0,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("{label}: {year:04}-{month:02}-{day:02} {hour:02}:{minute:02} is not a valid date")]
    InvalidReferenceDate {
        label: &'static str,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    },
    #[error("{label}: local time {naive} does not exist in this time zone")]
    NonexistentLocalTime {
        label: &'static str,
        naive: NaiveDateTime,
    },
    #[error("{label}: local time {naive} is ambiguous in this time zone")]
    AmbiguousLocalTime {
        label: &'static str,
        naive: NaiveDateTime,
    },
}

impl ReferenceDate {
    pub fn naive(&self) -> Result<NaiveDateTime, ReferenceError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|d| d.and_hms_opt(self.hour, self.minute, 0))
            .ok_or(ReferenceError::InvalidReferenceDate {
                label: self.label,
                year: self.year,
                month: self.month,
                day: self.day,
                hour: self.hour,
                minute: self.minute,
            })
    }

    /// Pin the wall-clock time to an instant using the offset `tz` has in
    /// force on that date.
    pub fn resolve<Tz: TimeZone>(&self, tz: &Tz) -> Result<DateTime<Utc>, ReferenceError> {
        let naive = self.naive()?;
        match tz.from_local_datetime(&naive) {
            LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
            LocalResult::None => Err(ReferenceError::NonexistentLocalTime {
                label: self.label,
                naive,
            }),
            LocalResult::Ambiguous(_, _) => Err(ReferenceError::AmbiguousLocalTime {
                label: self.label,
                naive,
            }),
        }
    }
}

/// The three instants every tick is measured against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ReferenceDates {
    pub election: DateTime<Utc>,
    pub first_end: DateTime<Utc>,
    pub second_end: DateTime<Utc>,
}

impl ReferenceDates {
    pub fn new(
        election: DateTime<Utc>,
        first_end: DateTime<Utc>,
        second_end: DateTime<Utc>,
    ) -> Self {
        Self {
            election,
            first_end,
            second_end,
        }
    }

    /// The compiled-in dates, read as wall-clock times in `tz`.
    pub fn in_zone<Tz: TimeZone>(tz: &Tz) -> Result<Self, ReferenceError> {
        Ok(Self {
            election: ELECTION_DAY.resolve(tz)?,
            first_end: FIRST_TERM_END.resolve(tz)?,
            second_end: SECOND_TERM_END.resolve(tz)?,
        })
    }

    pub fn local() -> Result<Self, ReferenceError> {
        Self::in_zone(&chrono::Local)
    }
}
