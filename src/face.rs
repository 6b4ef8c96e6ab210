//! The render plan for one redraw of the face.

use crate::CalendarGrid;
use crate::LocalTime;
use crate::Settings;
use crate::Weekday;

/// Everything the painter needs to draw the face once.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FacePlan {
  /// The date line, in the configured [`DateFormat`](crate::settings::DateFormat).
  pub date_text: String,
  /// The clock.
  pub time_text: String,
  /// `"AM"` or `"PM"`, shown only on a 12-hour clock when enabled.
  pub am_pm: Option<&'static str>,
  /// Weekday of each calendar column.
  pub header: [Weekday; 7],
  pub grid: CalendarGrid,
  /// Light face instead of dark.
  pub inverted: bool,
  /// Draw today's cell (and its header) in inverted colors.
  pub highlight_today: bool,
  /// Draw cell backgrounds.
  pub grid_lines: bool,
}

impl FacePlan {
  /// The three-letter labels of the header row.
  pub fn header_labels(&self) -> impl Iterator<Item = &'static str> + '_ {
    self.header.iter().map(|w| w.abbv())
  }

  /// The column shared by today's cell and its header label.
  #[inline]
  pub const fn today_column(&self) -> usize {
    self.grid.today_column()
  }
}

/// Compute the plan for `now` under `settings`.
///
/// `use_24h` is the system clock preference, which the face follows rather than storing.
///
/// ## Examples
///
/// ```
/// use timely::{date, face, LocalTime, Settings, Weekday};
///
/// let now = LocalTime::new(date! { 2023-03-01 }, 9, 41);
/// let plan = face::plan(&now, &Settings::default(), false);
/// assert_eq!(plan.date_text, "March 01, 2023");
/// assert_eq!(plan.time_text, "9:41");
/// assert_eq!(plan.header[plan.today_column()], Weekday::Wednesday);
/// ```
pub fn plan(now: &LocalTime, settings: &Settings, use_24h: bool) -> FacePlan {
  let today = now.date();
  FacePlan {
    date_text: today.format(settings.date_format.pattern()).to_string(),
    time_text: now.clock_text(use_24h),
    am_pm: match !use_24h && settings.show_am_pm {
      true => Some(now.am_pm()),
      false => None,
    },
    header: Weekday::header(settings.first_day),
    grid: CalendarGrid::build(today, settings.first_day),
    inverted: settings.inverted,
    highlight_today: settings.day_invert,
    grid_lines: settings.grid,
  }
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;
  use crate::settings::DateFormat;
  use crate::settings::MessageKey;

  #[test]
  fn test_default_plan() {
    let now = LocalTime::new(date! { 2023-03-01 }, 21, 5);
    let plan = plan(&now, &Settings::default(), true);
    check!(plan.date_text == "March 01, 2023");
    check!(plan.time_text == "21:05");
    check!(plan.am_pm.is_none());
    check!(
      plan.header_labels().collect::<Vec<_>>() == ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
    );
    check!(plan.today_column() == 3);
    check!(plan.grid == CalendarGrid::build(date! { 2023-03-01 }, Weekday::Sunday));
    check!(!plan.inverted);
    check!(plan.highlight_today);
    check!(plan.grid_lines);
  }

  #[test]
  fn test_configured_plan() {
    let settings = Settings {
      inverted: true,
      day_invert: false,
      first_day: Weekday::Monday,
      date_format: DateFormat::DayMonthYear,
      show_am_pm: true,
      ..Settings::default()
    };
    let now = LocalTime::new(date! { 2023-03-05 }, 21, 5);
    let plan = plan(&now, &settings, false);
    check!(plan.date_text == "05.03.2023");
    check!(plan.time_text == "9:05");
    check!(plan.am_pm == Some("PM"));
    check!(plan.header[0] == Weekday::Monday);
    check!(plan.header[plan.today_column()] == Weekday::Sunday);
    check!(plan.grid.today_index() == 13);
    check!(plan.inverted);
    check!(!plan.highlight_today);
  }

  #[test]
  fn test_am_pm_hidden_on_24h_clock() {
    let settings = Settings { show_am_pm: true, ..Settings::default() };
    let now = LocalTime::new(date! { 2023-03-05 }, 8, 0);
    check!(plan(&now, &settings, true).am_pm.is_none());
    check!(plan(&now, &settings, false).am_pm == Some("AM"));
  }

  #[test]
  fn test_settings_message_moves_today() -> Result<(), crate::settings::SettingsError> {
    let now = LocalTime::new(date! { 2023-03-01 }, 12, 0);
    let sunday_first = Settings::default();
    let saturday_first = sunday_first.apply(MessageKey::FirstDayOfWeek, 6)?;
    check!(plan(&now, &sunday_first, true).today_column() == 3);
    check!(plan(&now, &saturday_first, true).today_column() == 4);
    Ok(())
  }
}
