use std::fmt;
use std::str::FromStr;

/// A representation of the day of the week.
///
/// The discriminant is the index used throughout the crate: `0` is Sunday and `6` is Saturday. A
/// `Weekday` also serves as the first-day-of-week offset of the calendar grid.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Weekday {
  #[default]
  Sunday = 0,
  Monday = 1,
  Tuesday = 2,
  Wednesday = 3,
  Thursday = 4,
  Friday = 5,
  Saturday = 6,
}

impl Weekday {
  /// All seven weekdays, starting from Sunday.
  pub const ALL: [Weekday; 7] = [
    Self::Sunday,
    Self::Monday,
    Self::Tuesday,
    Self::Wednesday,
    Self::Thursday,
    Self::Friday,
    Self::Saturday,
  ];

  /// The weekday for the given index (`0` is Sunday), or `None` if the index exceeds 6.
  pub const fn from_index(index: u8) -> Option<Self> {
    match index {
      0..=6 => Some(Self::ALL[index as usize]),
      _ => None,
    }
  }

  /// The index of this weekday, `0` for Sunday through `6` for Saturday.
  #[inline]
  pub const fn index(self) -> u8 {
    self as u8
  }

  /// The following weekday.
  pub const fn succ(self) -> Self {
    Self::ALL[(self as usize + 1) % 7]
  }

  /// The number of days from `first` forward to this weekday, in `0..7`.
  ///
  /// This is the column a weekday occupies in a week that starts on `first`.
  pub const fn days_since(self, first: Weekday) -> u8 {
    (self as u8 + 7 - first as u8) % 7
  }

  /// The weekdays in column order for a week starting on `first`.
  ///
  /// ## Examples
  ///
  /// ```
  /// use timely::Weekday;
  ///
  /// let header = Weekday::header(Weekday::Monday);
  /// assert_eq!(header[0], Weekday::Monday);
  /// assert_eq!(header[6], Weekday::Sunday);
  /// ```
  pub const fn header(first: Weekday) -> [Weekday; 7] {
    let mut header = [Weekday::Sunday; 7];
    let mut col = 0;
    while col < 7 {
      header[col] = Self::ALL[(col + first as usize) % 7];
      col += 1;
    }
    header
  }

  /// The three-letter abbreviation for this weekday.
  pub const fn abbv(self) -> &'static str {
    match self {
      Self::Sunday => "Sun",
      Self::Monday => "Mon",
      Self::Tuesday => "Tue",
      Self::Wednesday => "Wed",
      Self::Thursday => "Thu",
      Self::Friday => "Fri",
      Self::Saturday => "Sat",
    }
  }

  /// The English name of this weekday.
  pub const fn name(self) -> &'static str {
    match self {
      Self::Sunday => "Sunday",
      Self::Monday => "Monday",
      Self::Tuesday => "Tuesday",
      Self::Wednesday => "Wednesday",
      Self::Thursday => "Thursday",
      Self::Friday => "Friday",
      Self::Saturday => "Saturday",
    }
  }
}

impl fmt::Display for Weekday {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Weekday {
  type Err = ParseWeekdayError;

  /// Parse a full or three-letter English weekday name, ignoring case.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|w| w.name().eq_ignore_ascii_case(s) || w.abbv().eq_ignore_ascii_case(s))
      .ok_or_else(|| ParseWeekdayError { src: s.into() })
  }
}

impl TryFrom<u8> for Weekday {
  type Error = u8;

  fn try_from(index: u8) -> Result<Self, Self::Error> {
    Self::from_index(index).ok_or(index)
  }
}

/// The error returned when a string does not name a weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWeekdayError {
  src: String,
}

impl std::error::Error for ParseWeekdayError {}

impl fmt::Display for ParseWeekdayError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Not a weekday: {}", self.src)
  }
}
