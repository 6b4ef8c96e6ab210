//! Status bar: phone link and power.

use crate::Settings;

/// Battery state, as reported by the host.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct PowerState {
  /// Charge level, `0..=100`.
  pub percent: u8,
  pub charging: bool,
  pub plugged: bool,
}

/// The icon next to the link text.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum StatusIcon {
  /// The battery is charging.
  Charging,
  /// Running on battery with hourly vibration enabled.
  HourVibe,
}

/// What the status bar shows.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct StatusPlan {
  pub link_text: &'static str,
  pub icon: Option<StatusIcon>,
  /// Charge level for the battery bar, capped at 100.
  pub battery_percent: u8,
}

impl StatusPlan {
  /// Filled length of a battery bar `width` units long, in whole tenths of the charge.
  pub const fn battery_fill(&self, width: u16) -> u16 {
    (self.battery_percent / 10) as u16 * width / 10
  }
}

/// Compute the status bar.
///
/// Plugged in but not charging means the battery is full; neither icon is shown then.
pub fn plan(power: PowerState, connected: bool, settings: &Settings) -> StatusPlan {
  let icon = match (power.charging, power.plugged) {
    (true, _) => Some(StatusIcon::Charging),
    (false, false) if settings.vibe_hour => Some(StatusIcon::HourVibe),
    _ => None,
  };
  StatusPlan {
    link_text: if connected { "Linked" } else { "NO LINK" },
    icon,
    battery_percent: power.percent.min(100),
  }
}

/// Whether a change of the phone link should vibrate (a double pulse), which it does when the
/// link is lost.
pub fn on_link_change(was_connected: bool, connected: bool) -> bool {
  let lost = was_connected && !connected;
  if lost {
    log::info!("Phone link lost");
  }
  lost
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_link_text() {
    let settings = Settings::default();
    check!(plan(PowerState::default(), true, &settings).link_text == "Linked");
    check!(plan(PowerState::default(), false, &settings).link_text == "NO LINK");
  }

  #[test]
  fn test_icons() {
    let quiet = Settings::default();
    let buzzy = Settings { vibe_hour: true, ..Settings::default() };
    let charging = PowerState { percent: 40, charging: true, plugged: true };
    let full = PowerState { percent: 100, charging: false, plugged: true };
    let battery = PowerState::default();

    check!(plan(charging, true, &quiet).icon == Some(StatusIcon::Charging));
    check!(plan(charging, true, &buzzy).icon == Some(StatusIcon::Charging));
    check!(plan(full, true, &buzzy).icon.is_none());
    check!(plan(battery, true, &buzzy).icon == Some(StatusIcon::HourVibe));
    check!(plan(battery, true, &quiet).icon.is_none());
  }

  #[test]
  fn test_battery_level() {
    let settings = Settings::default();
    let power = |percent| PowerState { percent, ..PowerState::default() };
    check!(plan(power(70), true, &settings).battery_percent == 70);
    check!(plan(power(255), true, &settings).battery_percent == 100);
    check!(plan(power(0), true, &settings).battery_fill(36) == 0);
    check!(plan(power(59), true, &settings).battery_fill(36) == 18);
    check!(plan(power(100), true, &settings).battery_fill(36) == 36);
    check!(plan(power(200), true, &settings).battery_fill(36) == 36);
  }

  #[test]
  fn test_link_change() {
    check!(on_link_change(true, false));
    check!(!on_link_change(false, true));
    check!(!on_link_change(true, true));
    check!(!on_link_change(false, false));
  }
}
