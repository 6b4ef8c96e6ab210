//! Deciding what to redraw on a clock tick.

use bitflags::bitflags;

use crate::Settings;

bitflags! {
  /// The calendar units that changed since the previous tick.
  ///
  /// A coarser unit changing implies every finer one changed too; hosts usually pass, say,
  /// `MINUTE | HOUR | DAY` at midnight.
  #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
  pub struct TimeUnits: u8 {
    const SECOND = 1 << 0;
    const MINUTE = 1 << 1;
    const HOUR = 1 << 2;
    const DAY = 1 << 3;
    const MONTH = 1 << 4;
    const YEAR = 1 << 5;
  }
}

bitflags! {
  /// Parts of the face that must be repainted.
  #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
  pub struct Redraw: u8 {
    /// The clock text.
    const TIME = 1 << 0;
    /// The date line.
    const DATE = 1 << 1;
    /// The calendar grid and its header.
    const CALENDAR = 1 << 2;
    /// Colors, inversion, grid lines, and status icons.
    const STYLE = 1 << 3;
  }
}

/// The response to a tick or a settings change.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct TickAction {
  pub redraw: Redraw,
  /// Give a short vibration pulse.
  pub vibrate: bool,
}

/// Handle a minute tick.
///
/// The clock text always changes. The date line and the calendar change with the day, and a new
/// hour vibrates when the user asked for it.
///
/// ## Examples
///
/// ```
/// use timely::tick::{on_tick, Redraw, TimeUnits};
/// use timely::Settings;
///
/// let action = on_tick(TimeUnits::MINUTE, &Settings::default());
/// assert_eq!(action.redraw, Redraw::TIME);
/// assert!(!action.vibrate);
/// ```
pub fn on_tick(changed: TimeUnits, settings: &Settings) -> TickAction {
  let mut redraw = Redraw::TIME;
  if changed.intersects(TimeUnits::DAY | TimeUnits::MONTH | TimeUnits::YEAR) {
    redraw |= Redraw::DATE | Redraw::CALENDAR;
  }
  let vibrate = settings.vibe_hour && changed.contains(TimeUnits::HOUR);
  log::trace!(changed = changed.bits(), redraw = redraw.bits(), vibrate = vibrate; "Tick");
  TickAction { redraw, vibrate }
}

/// Handle a settings change: everything is repainted.
pub fn on_settings_changed() -> TickAction {
  TickAction { redraw: Redraw::all(), vibrate: false }
}
