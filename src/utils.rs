/// Return true if this is a leap year, false otherwise.
pub const fn is_leap_year(year: i16) -> bool {
  is_leap(year as i32)
}

/// [`is_leap_year`] over the wider year range used for month arithmetic.
pub(crate) const fn is_leap(year: i32) -> bool {
  year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// The number of days between 1970-01-01 and the given civil date.
///
/// The algorithm is taken from here:
/// https://howardhinnant.github.io/date_algorithms.html#days_from_civil
pub(crate) const fn days_from_civil(year: i16, month: u8, day: u8) -> i32 {
  let year = year as i32 - if month <= 2 { 1 } else { 0 };
  let month = month as i32;
  let era = if year >= 0 { year } else { year - 399 } / 400;
  let year_of_era = year - era * 400;
  let mp = if month > 2 { month - 3 } else { month + 9 };
  let day_of_year = (153 * mp + 2) / 5 + day as i32 - 1;
  let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
  era * 146_097 + day_of_era - 719_468
}

/// The civil date for the given number of days since 1970-01-01.
///
/// https://howardhinnant.github.io/date_algorithms.html#civil_from_days
pub(crate) const fn civil_from_days(days: i32) -> (i16, u8, u8) {
  let shifted = days + 719_468; // Days from March 1, 0 A.D.
  let era = if shifted >= 0 { shifted } else { shifted - 146_096 } / 146_097;
  let doe = shifted - era * 146_097;
  let year_of_era = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
  let year = year_of_era + era * 400;
  let day_of_year = doe - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
  let mp = (5 * day_of_year + 2) / 153;
  let day = day_of_year - (153 * mp + 2) / 5 + 1;
  let month = if mp < 10 { mp + 3 } else { mp - 9 };
  (year as i16 + if month <= 2 { 1 } else { 0 }, month as u8, day as u8)
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_leap_years() {
    check!(is_leap_year(2000));
    check!(is_leap_year(2004));
    check!(is_leap_year(2024));
    check!(!is_leap_year(1900));
    check!(!is_leap_year(2023));
    check!(!is_leap_year(2100));
  }

  #[test]
  fn test_civil_epoch() {
    check!(days_from_civil(1970, 1, 1) == 0);
    check!(days_from_civil(1969, 12, 31) == -1);
    check!(days_from_civil(2012, 4, 21) == 15_451);
    check!(civil_from_days(0) == (1970, 1, 1));
    check!(civil_from_days(15_451) == (2012, 4, 21));
    check!(civil_from_days(-1) == (1969, 12, 31));
  }

  #[test]
  fn test_civil_readback() {
    for days in (-800_000..800_000).step_by(997) {
      let (y, m, d) = civil_from_days(days);
      check!(days_from_civil(y, m, d) == days);
    }
  }
}
