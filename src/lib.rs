//! The `timely` crate computes everything a watchface needs to paint a clock and a rolling
//! three-week calendar: the previous, current, and next week around today, laid out in a fixed
//! 3x7 grid whose leftmost column is a configurable first day of the week.
//!
//! The heart of the crate is [`CalendarGrid::build`], a pure function of today's date and the
//! first day of the week. Around it sit the pieces a display loop calls on every minute tick or
//! settings change: clock and date text ([`LocalTime`]), the user [`Settings`], tick handling
//! ([`tick`]), status-bar state ([`status`]), and the combined [`face::plan`].
//!
//! ## Examples
//!
//! ```
//! use timely::{date, CalendarGrid, Weekday};
//!
//! let grid = CalendarGrid::build(date! { 2023-03-01 }, Weekday::Sunday);
//! let days: Vec<u8> = grid.cells().iter().map(|c| c.day).collect();
//! assert_eq!(&days[..7], &[19, 20, 21, 22, 23, 24, 25]);
//! assert_eq!(grid.today_index(), 10);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use strptime::Parser;

/// Construct a [`CalendarDate`] from a `YYYY-MM-DD` literal.
///
/// ## Examples
///
/// ```
/// # use timely::date;
/// let d = date! { 2024-01-01 };
/// assert_eq!(d.year(), 2024);
/// assert_eq!(d.month(), 1);
/// assert_eq!(d.day(), 1);
/// ```
#[macro_export]
macro_rules! date {
  ($y:literal-$m:literal-$d:literal) => {{
    #[allow(clippy::zero_prefixed_literal)]
    {
      $crate::CalendarDate::new($y, $m, $d)
    }
  }};
}

pub mod clock;
pub mod face;
mod format;
pub mod grid;
pub mod iter;
mod month;
#[cfg(feature = "serde")]
mod serde;
pub mod settings;
pub mod status;
pub mod tick;
mod utils;
mod weekday;

pub use clock::LocalTime;
pub use format::Formatted;
pub use grid::CalendarCell;
pub use grid::CalendarGrid;
pub use grid::MonthPosition;
pub use month::days_in_month;
pub use settings::Settings;
pub use utils::is_leap_year;
pub use weekday::ParseWeekdayError;
pub use weekday::Weekday;

/// A single Gregorian calendar date, captured once per render pass.
///
/// The weekday is derived from the year, month, and day when the date is constructed, so a date
/// and its weekday can never disagree.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
  year: i16,
  month: u8,
  day: u8,
  weekday: Weekday,
}

impl CalendarDate {
  /// Construct a new `CalendarDate` from the provided year, month (starting from 1), and day.
  ///
  /// ## Examples
  ///
  /// ```
  /// use timely::{CalendarDate, Weekday};
  /// let date = CalendarDate::new(2023, 3, 1);
  /// assert_eq!(date.month0(), 2);
  /// assert_eq!(date.weekday(), Weekday::Wednesday);
  /// ```
  ///
  /// ## Panic
  ///
  /// This function panics if it receives out-of-bounds values (e.g. "March 32", "February 29" on
  /// a common year, or a year before 1). Use [`CalendarDate::checked_new`] for untrusted input.
  pub const fn new(year: i16, month: u8, day: u8) -> Self {
    assert!(year >= 1, "Year out-of-bounds");
    assert!(month >= 1 && month <= 12, "Month out-of-bounds");
    assert!(day >= 1 && day <= days_in_month(month as i8 - 1, year), "Day out-of-bounds");
    let weekday = match Weekday::from_index((utils::days_from_civil(year, month, day) + 4)
      .rem_euclid(7) as u8)
    {
      Some(w) => w,
      #[cfg(not(tarpaulin_include))]
      None => panic!("Unreachable: rem_euclid(7) is always within 0..7"),
    };
    Self { year, month, day, weekday }
  }

  /// Construct a new `CalendarDate`, or `None` if the parts do not form a valid date.
  pub const fn checked_new(year: i16, month: u8, day: u8) -> Option<Self> {
    if year < 1 || month < 1 || month > 12 {
      return None;
    }
    if day < 1 || day > days_in_month(month as i8 - 1, year) {
      return None;
    }
    Some(Self::new(year, month, day))
  }

  /// The date (in UTC) on which the given Unix timestamp occurred.
  ///
  /// ## Examples
  ///
  /// ```
  /// use timely::{date, CalendarDate};
  ///
  /// assert_eq!(CalendarDate::from_timestamp(0), date! { 1970-01-01 });
  /// assert_eq!(CalendarDate::from_timestamp(15_451 * 86_400 + 3_600), date! { 2012-04-21 });
  /// ```
  pub const fn from_timestamp(unix_timestamp: i64) -> Self {
    let (year, month, day) = utils::civil_from_days(unix_timestamp.div_euclid(86_400) as i32);
    Self::new(year, month, day)
  }

  /// The date representing today, in UTC.
  ///
  /// ## Panic
  ///
  /// This function will panic if the system clock is set to a time prior to January 1, 1970.
  pub fn today_utc() -> Self {
    let now = now().duration_since(UNIX_EPOCH).expect("system time set prior to 1970").as_secs();
    Self::from_timestamp(now as i64)
  }

  /// Parse a date from a string, according to the provided format string.
  ///
  /// Input that matches the format but names a day that does not exist (`2023-02-30`, year `0`)
  /// is an error, not a panic.
  pub fn parse(date_str: impl AsRef<str>, date_fmt: &'static str) -> Result<Self, ParseDateError> {
    let parser = Parser::new(date_fmt);
    let raw_date = parser.parse(date_str)?.date()?;
    Self::try_from(raw_date)
  }
}

impl CalendarDate {
  /// Returns the year number in the calendar date.
  #[inline]
  pub const fn year(&self) -> i16 {
    self.year
  }

  /// Returns the month number, starting from 1.
  #[inline]
  pub const fn month(&self) -> u8 {
    self.month
  }

  /// Returns the zero-based month index (`0` is January), as used by [`days_in_month`].
  #[inline]
  pub const fn month0(&self) -> i8 {
    self.month as i8 - 1
  }

  /// Returns the day of the month, starting from 1.
  #[inline]
  pub const fn day(&self) -> u8 {
    self.day
  }

  /// Returns the day of the week.
  #[inline]
  pub const fn weekday(&self) -> Weekday {
    self.weekday
  }

  /// The day of the current year. Range: `[1, 366]`
  pub const fn day_of_year(&self) -> u16 {
    (utils::days_from_civil(self.year, self.month, self.day)
      - utils::days_from_civil(self.year, 1, 1)
      + 1) as u16
  }

  /// The number of days in this date's month.
  #[inline]
  pub const fn days_in_month(&self) -> u8 {
    days_in_month(self.month0(), self.year)
  }

  /// The following day.
  pub const fn succ(&self) -> Self {
    let (year, month, day) = utils::civil_from_days(self.days_since_epoch() + 1);
    Self::new(year, month, day)
  }

  /// The preceding day.
  ///
  /// ## Panic
  ///
  /// Panics when called on January 1 of year 1.
  pub const fn pred(&self) -> Self {
    let (year, month, day) = utils::civil_from_days(self.days_since_epoch() - 1);
    Self::new(year, month, day)
  }

  const fn days_since_epoch(&self) -> i32 {
    utils::days_from_civil(self.year, self.month, self.day)
  }
}

impl CalendarDate {
  /// Format the date according to the provided `strftime` specifier.
  ///
  /// Time directives (`%H`, `%M`, ...) render as midnight.
  pub fn format<'a>(&self, format_str: &'a str) -> Formatted<'a> {
    Formatted { time: LocalTime::midnight(*self), format: format_str }
  }
}

impl fmt::Debug for CalendarDate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.format("%Y-%m-%d"))
  }
}

impl fmt::Display for CalendarDate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.format("%Y-%m-%d"))
  }
}

impl FromStr for CalendarDate {
  type Err = ParseDateError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s, "%Y-%m-%d")
  }
}

impl TryFrom<strptime::RawDate> for CalendarDate {
  type Error = ParseDateError;

  fn try_from(value: strptime::RawDate) -> Result<Self, Self::Error> {
    let (year, month, day) = (value.year(), value.month(), value.day());
    Self::checked_new(year, month, day).ok_or(ParseDateError::OutOfRange { year, month, day })
  }
}

/// An error parsing a [`CalendarDate`] from a string.
#[derive(Debug)]
pub enum ParseDateError {
  /// The input did not match the format.
  Syntax(strptime::ParseError),
  /// The input matched the format, but the parts are not a date.
  OutOfRange { year: i16, month: u8, day: u8 },
}

impl From<strptime::ParseError> for ParseDateError {
  fn from(value: strptime::ParseError) -> Self {
    Self::Syntax(value)
  }
}

impl std::error::Error for ParseDateError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Syntax(e) => Some(e),
      Self::OutOfRange { .. } => None,
    }
  }
}

impl fmt::Display for ParseDateError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Syntax(e) => write!(f, "{}", e),
      Self::OutOfRange { year, month, day } => {
        write!(f, "Not a valid calendar date: {:04}-{:02}-{:02}", year, month, day)
      },
    }
  }
}

#[cfg(not(test))]
pub(crate) fn now() -> SystemTime {
  SystemTime::now()
}

#[cfg(test)]
pub(crate) use tests::now;

#[cfg(test)]
mod tests {
  use std::cell::RefCell;

  use assert2::check;

  use super::*;

  thread_local! {
    static MOCK_TIME: RefCell<Option<SystemTime>> = const { RefCell::new(None) };
  }

  pub(crate) fn set_now(time: SystemTime) {
    MOCK_TIME.with(|cell| *cell.borrow_mut() = Some(time));
  }

  pub(crate) fn clear_now() {
    MOCK_TIME.with(|cell| *cell.borrow_mut() = None);
  }

  pub(crate) fn now() -> SystemTime {
    MOCK_TIME.with(|cell| cell.borrow().as_ref().cloned().unwrap_or_else(SystemTime::now))
  }

  #[test]
  fn test_weekday_derivation() {
    check!(date! { 1970-01-01 }.weekday() == Weekday::Thursday);
    check!(date! { 2000-01-01 }.weekday() == Weekday::Saturday);
    check!(date! { 2023-03-01 }.weekday() == Weekday::Wednesday);
    check!(date! { 2023-12-31 }.weekday() == Weekday::Sunday);
    check!(date! { 1900-01-01 }.weekday() == Weekday::Monday);
    check!(date! { 0001-01-01 }.weekday() == Weekday::Monday);
  }

  #[test]
  fn test_weekday_advances() {
    let mut date = date! { 2019-12-29 }; // A Sunday.
    for weekday in Weekday::ALL.into_iter().cycle().take(800) {
      check!(date.weekday() == weekday, "Incorrect on: {:?}", date);
      date = date.succ();
    }
  }

  #[test]
  fn test_succ_pred() {
    check!(date! { 2023-02-28 }.succ() == date! { 2023-03-01 });
    check!(date! { 2024-02-28 }.succ() == date! { 2024-02-29 });
    check!(date! { 2023-12-31 }.succ() == date! { 2024-01-01 });
    check!(date! { 2024-01-01 }.pred() == date! { 2023-12-31 });
    check!(date! { 2024-03-01 }.pred() == date! { 2024-02-29 });
  }

  #[test]
  fn test_checked_new() {
    check!(CalendarDate::checked_new(2023, 2, 29).is_none());
    check!(CalendarDate::checked_new(2024, 2, 29) == Some(date! { 2024-02-29 }));
    check!(CalendarDate::checked_new(2023, 13, 1).is_none());
    check!(CalendarDate::checked_new(2023, 4, 31).is_none());
    check!(CalendarDate::checked_new(0, 1, 1).is_none());
    check!(CalendarDate::checked_new(2023, 1, 0).is_none());
  }

  #[test]
  #[should_panic]
  fn test_overflow_panic_day() {
    CalendarDate::new(2012, 4, 31);
  }

  #[test]
  #[should_panic]
  fn test_overflow_panic_month() {
    CalendarDate::new(2012, 13, 1);
  }

  #[test]
  #[should_panic]
  fn test_overflow_panic_ly() {
    CalendarDate::new(2100, 2, 29);
  }

  #[test]
  fn test_day_of_year() {
    check!(date! { 2023-01-01 }.day_of_year() == 1);
    check!(date! { 2023-12-31 }.day_of_year() == 365);
    check!(date! { 2024-12-31 }.day_of_year() == 366);
    check!(date! { 2012-04-21 }.day_of_year() == 112);
  }

  #[test]
  fn test_display() {
    check!(date! { 2012-04-21 }.to_string() == "2012-04-21");
    check!(format!("{:?}", date! { 2012-04-21 }) == "2012-04-21");
  }

  #[test]
  fn test_today() {
    set_now(SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(86_400));
    check!(CalendarDate::today_utc() == date! { 1970-01-02 });
    clear_now();
  }

  #[test]
  fn test_from_str() -> Result<(), ParseDateError> {
    check!("2012-04-21".parse::<CalendarDate>()? == date! { 2012-04-21 });
    check!("2012-4-21".parse::<CalendarDate>().is_err());
    check!("04/21/2012".parse::<CalendarDate>().is_err());
    check!("foo".parse::<CalendarDate>().map_err(|e| e.to_string()).unwrap_err().contains("foo"));
    Ok(())
  }

  #[test]
  fn test_parse() -> Result<(), ParseDateError> {
    check!(CalendarDate::parse("03/01/23", "%m/%d/%y")? == date! { 2023-03-01 });
    check!(CalendarDate::parse("March 1, 2023", "%B %-d, %Y")? == date! { 2023-03-01 });
    Ok(())
  }

  #[test]
  fn test_parse_impossible_dates() {
    let err = "2023-02-30".parse::<CalendarDate>().map_err(|e| e.to_string());
    check!(err == Err("Not a valid calendar date: 2023-02-30".into()));
    check!(matches!(
      "0000-06-15".parse::<CalendarDate>(),
      Err(ParseDateError::OutOfRange { year: 0, month: 6, day: 15 })
    ));
    check!("2023-04-31".parse::<CalendarDate>().is_err());
    check!("2100-02-29".parse::<CalendarDate>().is_err());
    check!(CalendarDate::parse("02/30/23", "%m/%d/%y").is_err());
    check!(matches!("foo".parse::<CalendarDate>(), Err(ParseDateError::Syntax(_))));
  }
}
