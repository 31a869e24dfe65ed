//! Short relative ages for feed captions ("42s", "3h", "5mo").

use std::fmt;
use time::{Date, Duration, Month, OffsetDateTime};

/// Granularity of an [`Age`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
}

impl AgeUnit {
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            AgeUnit::Seconds => "s",
            AgeUnit::Minutes => "m",
            AgeUnit::Hours => "h",
            AgeUnit::Days => "d",
            AgeUnit::Weeks => "w",
            AgeUnit::Months => "mo",
        }
    }
}

/// Elapsed time truncated to a single unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Age {
    pub value: i64,
    pub unit: AgeUnit,
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

/// A Julian year (365.25 days).
const YEAR: Duration = Duration::seconds(31_557_600);

/// Finest to coarsest. The first limit the elapsed time stays strictly below
/// picks the unit.
const AGE_TABLE: [(Duration, AgeUnit); 6] = [
    (Duration::MINUTE, AgeUnit::Seconds),
    (Duration::HOUR, AgeUnit::Minutes),
    (Duration::DAY, AgeUnit::Hours),
    (Duration::WEEK, AgeUnit::Days),
    (Duration::days(30), AgeUnit::Weeks),
    (YEAR, AgeUnit::Months),
];

/// Age of `created` relative to `now`.
///
/// Returns `None` when `created` is missing or lies a year or more in the
/// past; callers decide what to show instead. Timestamps after `now` count as
/// zero elapsed.
#[must_use]
pub fn format_age(now: OffsetDateTime, created: Option<OffsetDateTime>) -> Option<Age> {
    let created = created?;
    let elapsed = (now - created).max(Duration::ZERO);
    let unit = AGE_TABLE
        .iter()
        .find(|(limit, _)| elapsed < *limit)
        .map(|(_, unit)| *unit)?;

    let value = match unit {
        AgeUnit::Seconds => elapsed.whole_seconds(),
        AgeUnit::Minutes => elapsed.whole_minutes(),
        AgeUnit::Hours => elapsed.whole_hours(),
        AgeUnit::Days => elapsed.whole_days(),
        AgeUnit::Weeks => elapsed.whole_weeks(),
        // Thirty days can fall short of a calendar month; the bucket starts at 1.
        AgeUnit::Months => whole_months(created, now).max(1),
    };
    Some(Age { value, unit })
}

/// Calendar months from `from` that do not overshoot `to`.
fn whole_months(from: OffsetDateTime, to: OffsetDateTime) -> i64 {
    let from = from.to_offset(to.offset());
    let mut months = i64::from(to.year() - from.year()) * 12 + i64::from(u8::from(to.month()))
        - i64::from(u8::from(from.month()));
    if months > 0 && add_months(from, months).map_or(true, |anchor| anchor > to) {
        months -= 1;
    }
    months.max(0)
}

/// Shifts by whole months, clamping the day to the target month's length.
fn add_months(at: OffsetDateTime, months: i64) -> Option<OffsetDateTime> {
    let index = i64::from(at.year()) * 12 + i64::from(u8::from(at.month())) - 1 + months;
    let year = i32::try_from(index.div_euclid(12)).ok()?;
    let month = Month::try_from(u8::try_from(index.rem_euclid(12) + 1).ok()?).ok()?;

    let mut day = at.day();
    let date = loop {
        if let Ok(date) = Date::from_calendar_date(year, month, day) {
            break date;
        }
        if day <= 28 {
            return None;
        }
        day -= 1;
    };
    Some(at.replace_date(date))
}
