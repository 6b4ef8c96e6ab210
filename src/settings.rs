//! User settings for the face.
//!
//! Settings are an explicit value handed to every render; nothing in the crate keeps them as
//! ambient state. A companion app changes them with integer-keyed messages (see [`MessageKey`]),
//! and the host persists them as a 7-byte record ([`Settings::to_bytes`]).

use std::fmt;

use crate::Weekday;

/// How the date line above the clock is written.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum DateFormat {
  /// `March 01, 2023`
  #[default]
  MonthDayYear = 0,
  /// `01.03.2023`
  DayMonthYear = 1,
}

impl DateFormat {
  /// The `strftime` specifier for this format.
  pub const fn pattern(self) -> &'static str {
    match self {
      Self::MonthDayYear => "%B %d, %Y",
      Self::DayMonthYear => "%d.%m.%Y",
    }
  }

  const fn from_u8(value: u8) -> Option<Self> {
    match value {
      0 => Some(Self::MonthDayYear),
      1 => Some(Self::DayMonthYear),
      _ => None,
    }
  }
}

/// The persisted face configuration.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
  /// Light face instead of dark.
  pub inverted: bool,
  /// Highlight today's cell in the calendar.
  pub day_invert: bool,
  /// Draw cell backgrounds in the calendar.
  pub grid: bool,
  /// Vibrate at the top of every hour.
  pub vibe_hour: bool,
  /// The leftmost column of the calendar.
  pub first_day: Weekday,
  pub date_format: DateFormat,
  /// Show AM/PM next to a 12-hour clock.
  pub show_am_pm: bool,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      inverted: false,
      day_invert: true,
      grid: true,
      vibe_hour: false,
      first_day: Weekday::Sunday,
      date_format: DateFormat::MonthDayYear,
      show_am_pm: false,
    }
  }
}

/// Keys of a settings update message. The discriminant is the key on the wire and the byte offset
/// in the persisted record.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u32)]
pub enum MessageKey {
  StyleInverted = 0,
  StyleDayInverted = 1,
  StyleGrid = 2,
  VibeHour = 3,
  FirstDayOfWeek = 4,
  DateFormat = 5,
  ShowAmPm = 6,
}

impl MessageKey {
  /// Every key, in record order.
  pub const ALL: [MessageKey; 7] = [
    Self::StyleInverted,
    Self::StyleDayInverted,
    Self::StyleGrid,
    Self::VibeHour,
    Self::FirstDayOfWeek,
    Self::DateFormat,
    Self::ShowAmPm,
  ];
}

impl TryFrom<u32> for MessageKey {
  type Error = SettingsError;

  fn try_from(key: u32) -> Result<Self, Self::Error> {
    Self::ALL.get(key as usize).copied().ok_or(SettingsError::UnknownKey(key))
  }
}

impl Settings {
  /// Length of the persisted record.
  pub const RECORD_LEN: usize = MessageKey::ALL.len();

  /// These settings with one value changed.
  ///
  /// Flags treat any nonzero value as on. The first day of the week must be `0..=6` and the date
  /// format `0..=1`.
  ///
  /// ## Examples
  ///
  /// ```
  /// use timely::settings::{MessageKey, Settings};
  /// use timely::Weekday;
  ///
  /// let settings = Settings::default().apply(MessageKey::FirstDayOfWeek, 1).unwrap();
  /// assert_eq!(settings.first_day, Weekday::Monday);
  /// assert!(Settings::default().apply(MessageKey::FirstDayOfWeek, 7).is_err());
  /// ```
  pub fn apply(self, key: MessageKey, value: u8) -> Result<Self, SettingsError> {
    let invalid = SettingsError::InvalidValue { key, value };
    let mut next = self;
    match key {
      MessageKey::StyleInverted => next.inverted = value != 0,
      MessageKey::StyleDayInverted => next.day_invert = value != 0,
      MessageKey::StyleGrid => next.grid = value != 0,
      MessageKey::VibeHour => next.vibe_hour = value != 0,
      MessageKey::FirstDayOfWeek => next.first_day = Weekday::from_index(value).ok_or(invalid)?,
      MessageKey::DateFormat => next.date_format = DateFormat::from_u8(value).ok_or(invalid)?,
      MessageKey::ShowAmPm => next.show_am_pm = value != 0,
    }
    Ok(next)
  }

  /// Apply every `(key, value)` pair of an update message.
  ///
  /// Keys this face does not know are skipped, so a companion app may send fields meant for other
  /// faces. A known key with an out-of-range value rejects the whole message: the error is
  /// returned and the original settings remain in effect.
  pub fn apply_all(
    self,
    message: impl IntoIterator<Item = (u32, u8)>,
  ) -> Result<Self, SettingsError> {
    let mut next = self;
    for (key, value) in message {
      let Ok(message_key) = MessageKey::try_from(key) else {
        log::warn!(key = key, value = value; "Ignoring unknown settings key");
        continue;
      };
      next = next.apply(message_key, value).inspect_err(|e| {
        log::warn!(key = key, value = value; "Rejected settings message: {}", e);
      })?;
    }
    if next != self {
      log::debug!(
        first_day:% = next.first_day,
        inverted = next.inverted,
        vibe_hour = next.vibe_hour;
        "Applied settings message"
      );
    }
    Ok(next)
  }

  /// The persisted record: one byte per [`MessageKey`], in key order.
  pub const fn to_bytes(&self) -> [u8; Self::RECORD_LEN] {
    [
      self.inverted as u8,
      self.day_invert as u8,
      self.grid as u8,
      self.vibe_hour as u8,
      self.first_day as u8,
      self.date_format as u8,
      self.show_am_pm as u8,
    ]
  }

  /// Read settings back from a persisted record.
  ///
  /// Bytes past the record length are ignored, so a longer record written by a later version
  /// still loads.
  pub fn from_bytes(bytes: &[u8]) -> Result<Self, SettingsError> {
    if bytes.len() < Self::RECORD_LEN {
      return Err(SettingsError::Truncated { len: bytes.len() });
    }
    MessageKey::ALL
      .into_iter()
      .zip(bytes.iter().copied())
      .try_fold(Self::default(), |settings, (key, value)| settings.apply(key, value))
  }
}

/// A rejected settings message or record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsError {
  /// The message used a key this face does not know.
  UnknownKey(u32),
  /// The value is out of range for its key.
  InvalidValue { key: MessageKey, value: u8 },
  /// The persisted record is shorter than [`Settings::RECORD_LEN`].
  Truncated { len: usize },
}

impl std::error::Error for SettingsError {}

impl fmt::Display for SettingsError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnknownKey(key) => write!(f, "Unknown settings key {}", key),
      Self::InvalidValue { key, value } => write!(f, "Invalid value {} for {:?}", value, key),
      Self::Truncated { len } => {
        write!(f, "Settings record too short: {} of {} bytes", len, Settings::RECORD_LEN)
      },
    }
  }
}
