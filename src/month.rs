//! Month lengths.

use crate::utils;

/// Days per month, indexed from 0 (January), for a common year.
const MONTH_DAYS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// The number of days in the given zero-based month of the given year.
///
/// `month0` may fall outside `0..=11`; it is normalized against `year`, so `-1` is December of the
/// previous year and `12` is January of the next one. This lets callers ask for "the month before"
/// or "the month after" without handling year boundaries themselves.
///
/// ## Examples
///
/// ```
/// use timely::days_in_month;
///
/// assert_eq!(days_in_month(1, 2000), 29);
/// assert_eq!(days_in_month(1, 1900), 28);
/// assert_eq!(days_in_month(3, 2023), 30);
/// assert_eq!(days_in_month(-1, 2023), 31); // December 2022
/// ```
pub const fn days_in_month(month0: i8, year: i16) -> u8 {
  // Widened so that the month after December of `i16::MAX` still has a year.
  let year = year as i32 + month0.div_euclid(12) as i32;
  let month0 = month0.rem_euclid(12) as usize;
  match month0 == 1 && utils::is_leap(year) {
    true => 29,
    false => MONTH_DAYS[month0],
  }
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_thirty_day_months() {
    for month0 in [3, 5, 8, 10] {
      check!(days_in_month(month0, 2023) == 30);
      check!(days_in_month(month0, 2024) == 30);
    }
  }

  #[test]
  fn test_thirty_one_day_months() {
    for month0 in [0, 2, 4, 6, 7, 9, 11] {
      check!(days_in_month(month0, 2023) == 31);
    }
  }

  #[test]
  fn test_february() {
    check!(days_in_month(1, 2000) == 29);
    check!(days_in_month(1, 1900) == 28);
    check!(days_in_month(1, 2004) == 29);
    check!(days_in_month(1, 2023) == 28);
    check!(days_in_month(1, 2100) == 28);
    check!(days_in_month(1, 2400) == 29);
  }

  #[test]
  fn test_out_of_range_months() {
    // December of the prior year, January of the next.
    check!(days_in_month(-1, 2024) == 31);
    check!(days_in_month(12, 2023) == 31);
    // February on either side of a year boundary follows the normalized year.
    check!(days_in_month(13, 2023) == 29);
    check!(days_in_month(-11, 2001) == 29);
    check!(days_in_month(-11, 2002) == 28);
  }

  #[test]
  fn test_year_range_edges() {
    check!(days_in_month(12, i16::MAX) == 31);
    check!(days_in_month(13, i16::MAX) == 29); // February 32768
    check!(days_in_month(-1, i16::MIN) == 31);
    check!(days_in_month(i8::MAX, i16::MAX) == 31);
    check!(days_in_month(i8::MIN, i16::MIN) == 31);
  }

  #[test]
  fn test_always_in_range() {
    for year in 1..=2500 {
      for month0 in -1..=12 {
        let days = days_in_month(month0, year);
        check!((28..=31).contains(&days), "{month0} {year}");
      }
    }
  }
}
