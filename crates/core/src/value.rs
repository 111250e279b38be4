use std::fmt;
use std::num::TryFromIntError;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat, TimeZone};

/// Values that can render themselves in ISO-8601 form.
pub trait Iso8601 {
    /// Render the value as an ISO-8601 string.
    fn to_iso8601(&self) -> String;
}

impl<Tz: TimeZone> Iso8601 for DateTime<Tz> {
    fn to_iso8601(&self) -> String {
        self.fixed_offset().to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl Iso8601 for NaiveDate {
    fn to_iso8601(&self) -> String {
        self.format("%Y-%m-%d").to_string()
    }
}

/// A point in time or a calendar date accepted by the time-window parameters.
///
/// Instants render with whole-second precision, using `Z` for a zero offset
/// and `+HH:MM` otherwise. Dates render as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    /// A point in time with its original UTC offset.
    Instant(DateTime<FixedOffset>),
    /// A calendar date without a time component.
    Date(NaiveDate),
}

impl Iso8601 for Timestamp {
    fn to_iso8601(&self) -> String {
        match self {
            Self::Instant(dt) => dt.to_iso8601(),
            Self::Date(date) => date.to_iso8601(),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(dt: DateTime<Tz>) -> Self {
        Self::Instant(dt.fixed_offset())
    }
}

impl From<NaiveDate> for Timestamp {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

/// A caller-supplied argument value before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Free-form text, e.g. an entity name or a summary.
    Text(String),
    /// A whole number, e.g. a duration in seconds.
    Integer(i64),
    /// A time value.
    Timestamp(Timestamp),
}

impl ParamValue {
    /// Human-readable name of the variant, used in type errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Timestamp(_) => "timestamp",
        }
    }

    /// Render the value in the form sent on the wire, before escaping.
    ///
    /// Timestamps use their ISO-8601 form; everything else its canonical
    /// string form.
    pub fn render(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Integer(n) => n.to_string(),
            Self::Timestamp(ts) => ts.to_iso8601(),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for ParamValue {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

macro_rules! integer_param {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ParamValue {
                fn from(n: $t) -> Self {
                    Self::Integer(i64::from(n))
                }
            }
        )*
    };
}

integer_param!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! wide_integer_param {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for ParamValue {
                type Error = TryFromIntError;

                fn try_from(n: $t) -> Result<Self, Self::Error> {
                    i64::try_from(n).map(Self::Integer)
                }
            }
        )*
    };
}

wide_integer_param!(u64, usize, i128, u128, isize);

/// Whole seconds, saturating at `i64::MAX`.
impl From<Duration> for ParamValue {
    fn from(duration: Duration) -> Self {
        Self::Integer(i64::try_from(duration.as_secs()).unwrap_or(i64::MAX))
    }
}

impl From<Timestamp> for ParamValue {
    fn from(ts: Timestamp) -> Self {
        Self::Timestamp(ts)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for ParamValue {
    fn from(dt: DateTime<Tz>) -> Self {
        Self::Timestamp(dt.into())
    }
}

impl From<NaiveDate> for ParamValue {
    fn from(date: NaiveDate) -> Self {
        Self::Timestamp(date.into())
    }
}
