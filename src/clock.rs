//! Wall-clock time for the face: a date plus hour and minute.

use std::fmt;
use std::time::UNIX_EPOCH;

use crate::CalendarDate;
use crate::format::Formatted;

/// A local date and time of day, with minute precision.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct LocalTime {
  date: CalendarDate,
  hour: u8,
  minute: u8,
}

impl LocalTime {
  /// Construct a new `LocalTime`.
  ///
  /// ## Panic
  ///
  /// Panics if `hour` exceeds 23 or `minute` exceeds 59.
  pub const fn new(date: CalendarDate, hour: u8, minute: u8) -> Self {
    assert!(hour < 24, "Hour out-of-bounds");
    assert!(minute < 60, "Minute out-of-bounds");
    Self { date, hour, minute }
  }

  /// The first minute of the given date.
  pub const fn midnight(date: CalendarDate) -> Self {
    Self { date, hour: 0, minute: 0 }
  }

  /// The UTC time at which the given Unix timestamp occurred, truncated to the minute.
  ///
  /// ## Examples
  ///
  /// ```
  /// use timely::{date, LocalTime};
  ///
  /// let t = LocalTime::from_timestamp(1_677_684_300);
  /// assert_eq!(t.date(), date! { 2023-03-01 });
  /// assert_eq!((t.hour(), t.minute()), (15, 25));
  /// ```
  pub const fn from_timestamp(unix_timestamp: i64) -> Self {
    let seconds_of_day = unix_timestamp.rem_euclid(86_400);
    Self {
      date: CalendarDate::from_timestamp(unix_timestamp),
      hour: (seconds_of_day / 3_600) as u8,
      minute: (seconds_of_day % 3_600 / 60) as u8,
    }
  }

  /// The current time in UTC.
  ///
  /// ## Panic
  ///
  /// This function will panic if the system clock is set to a time prior to January 1, 1970.
  pub fn now_utc() -> Self {
    let now =
      crate::now().duration_since(UNIX_EPOCH).expect("system time set prior to 1970").as_secs();
    Self::from_timestamp(now as i64)
  }

  /// The current time in the system's local time zone.
  #[cfg(feature = "tz")]
  pub fn now() -> Result<Self, ClockError> {
    let tz = tzdb::local_tz().ok_or(ClockError::UnknownZone(None))?;
    Self::now_in(tz)
  }

  /// The current time in the named time zone (e.g. `"Europe/Berlin"`).
  #[cfg(feature = "tz")]
  pub fn now_tz(tz_name: &str) -> Result<Self, ClockError> {
    let tz =
      tzdb::tz_by_name(tz_name).ok_or_else(|| ClockError::UnknownZone(Some(tz_name.into())))?;
    Self::now_in(tz)
  }

  #[cfg(feature = "tz")]
  fn now_in(tz: tz::TimeZoneRef<'static>) -> Result<Self, ClockError> {
    let now = crate::now().duration_since(UNIX_EPOCH).map_err(|_| ClockError::BeforeEpoch)?;
    let now = now.as_secs() as i64;
    let offset = tz.find_local_time_type(now).map_err(|_| ClockError::NoLocalTime)?.ut_offset();
    Ok(Self::from_timestamp(now + offset as i64))
  }
}

impl LocalTime {
  /// The calendar date.
  #[inline]
  pub const fn date(&self) -> CalendarDate {
    self.date
  }

  /// The hour of the day, `0..=23`.
  #[inline]
  pub const fn hour(&self) -> u8 {
    self.hour
  }

  /// The hour on a 12-hour clock, `1..=12`.
  pub const fn hour12(&self) -> u8 {
    match self.hour % 12 {
      0 => 12,
      h => h,
    }
  }

  /// The minute of the hour, `0..=59`.
  #[inline]
  pub const fn minute(&self) -> u8 {
    self.minute
  }

  /// `"AM"` before noon, `"PM"` from noon on.
  pub const fn am_pm(&self) -> &'static str {
    if self.hour < 12 { "AM" } else { "PM" }
  }

  /// The text shown by the clock.
  ///
  /// A 24-hour clock is zero padded (`"09:05"`); a 12-hour clock drops the leading zero of the
  /// hour (`"9:05"`).
  pub fn clock_text(&self, use_24h: bool) -> String {
    match use_24h {
      true => self.format("%R").to_string(),
      false => self.format("%-I:%M").to_string(),
    }
  }

  /// Format according to the provided `strftime` specifier.
  pub fn format<'a>(&self, format_str: &'a str) -> Formatted<'a> {
    Formatted { time: *self, format: format_str }
  }
}

impl fmt::Debug for LocalTime {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.format("%Y-%m-%d %H:%M"))
  }
}

impl fmt::Display for LocalTime {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.format("%Y-%m-%d %H:%M"))
  }
}

/// Failure to read the local time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
  /// The system clock reads earlier than 1970-01-01.
  BeforeEpoch,
  /// The time zone could not be found; `None` stands for the system's local zone.
  UnknownZone(Option<String>),
  /// The zone has no local time type for the current instant.
  NoLocalTime,
}

impl std::error::Error for ClockError {}

impl fmt::Display for ClockError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::BeforeEpoch => f.write_str("System time set prior to 1970"),
      Self::UnknownZone(Some(name)) => write!(f, "Time zone not found: {}", name),
      Self::UnknownZone(None) => f.write_str("Could not determine local time zone"),
      Self::NoLocalTime => f.write_str("Time zone lacks information for this timestamp"),
    }
  }
}
