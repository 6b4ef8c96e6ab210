//! The rolling three-week calendar window.
//!
//! The window always shows the week before the current one, the current week, and the week after
//! it, with columns starting on a configurable first day of the week. Today therefore always lands
//! in the middle row, in the column `today.weekday().days_since(first_day)`.

use std::ops::Index;

use crate::CalendarDate;
use crate::Weekday;
use crate::iter::Weeks;
use crate::month::days_in_month;

/// Number of columns in the grid.
pub const DAYS_PER_WEEK: usize = 7;

/// Number of rows in the grid.
pub const WEEKS: usize = 3;

/// Number of cells in the grid.
pub const CELLS: usize = DAYS_PER_WEEK * WEEKS;

/// Which month a cell belongs to, relative to today's month.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum MonthPosition {
  /// The tail of the month before today's.
  Previous,
  /// Today's month.
  #[default]
  Current,
  /// The head of the month after today's.
  Next,
}

/// A single day in the calendar grid.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct CalendarCell {
  /// The day of its month, `1..=31`.
  pub day: u8,
  /// Whether this cell is today.
  pub is_today: bool,
  /// The month this day belongs to.
  pub month: MonthPosition,
}

/// Twenty-one days around today, in display order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CalendarGrid {
  cells: [CalendarCell; CELLS],
  today_index: u8,
}

impl CalendarGrid {
  /// Compute the calendar window for `today`, with `first_day` as the leftmost column.
  ///
  /// When today falls before `first_day` in the Sunday-based week, the current display week began
  /// in the previous Sunday-based week; an extra week is added before today so that a full week
  /// row precedes it. Otherwise the extra week is added after today.
  ///
  /// ## Examples
  ///
  /// ```
  /// use timely::{date, CalendarGrid, Weekday};
  ///
  /// // Sunday, December 31 2023, with weeks starting on Monday.
  /// let grid = CalendarGrid::build(date! { 2023-12-31 }, Weekday::Monday);
  /// let days: Vec<u8> = grid.cells().iter().map(|c| c.day).collect();
  /// assert_eq!(&days[..14], &[18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31]);
  /// assert_eq!(&days[14..], &[1, 2, 3, 4, 5, 6, 7]);
  /// assert_eq!(grid.today_index(), 13);
  /// ```
  pub fn build(today: CalendarDate, first_day: Weekday) -> Self {
    let weekday = today.weekday().index();
    let offset = first_day.index();
    let day = today.day();
    let this_month_len = days_in_month(today.month0(), today.year());

    // Both counts include any days from the neighboring months.
    let (days_prior, days_after) = match weekday < offset {
      true => (14 + weekday - offset, 6 + offset - weekday),
      false => (7 + weekday - offset, 13 + offset - weekday),
    };
    debug_assert_eq!(days_prior as usize + 1 + days_after as usize, CELLS);

    let mut builder = GridBuilder::new();

    let prev_visible = match days_prior >= day {
      true => days_prior - day + 1,
      false => 0,
    };
    if prev_visible > 0 {
      let prev_month_len = days_in_month(today.month0() - 1, today.year());
      for d in prev_month_len - prev_visible + 1..=prev_month_len {
        builder.push(d, MonthPosition::Previous);
      }
    }

    let first_shown = day + prev_visible - days_prior;
    for d in first_shown..day {
      builder.push(d, MonthPosition::Current);
    }

    builder.push_today(day);

    let next_visible = (day + days_after).saturating_sub(this_month_len);
    for d in day + 1..=day + days_after - next_visible {
      builder.push(d, MonthPosition::Current);
    }
    for d in 1..=next_visible {
      builder.push(d, MonthPosition::Next);
    }

    let grid = builder.finish();
    log::trace!(
      today:% = today,
      first_day:% = first_day,
      prev_visible = prev_visible,
      next_visible = next_visible;
      "Built calendar window"
    );
    grid
  }
}

impl CalendarGrid {
  /// All cells, in display order.
  #[inline]
  pub const fn cells(&self) -> &[CalendarCell; CELLS] {
    &self.cells
  }

  /// The position of today within [`CalendarGrid::cells`].
  #[inline]
  pub const fn today_index(&self) -> usize {
    self.today_index as usize
  }

  /// The column of today within its week.
  #[inline]
  pub const fn today_column(&self) -> usize {
    self.today_index as usize % DAYS_PER_WEEK
  }

  /// Today's cell.
  pub const fn today(&self) -> &CalendarCell {
    &self.cells[self.today_index as usize]
  }

  /// The three week rows: previous, current, and next.
  pub fn weeks(&self) -> Weeks<'_> {
    Weeks::new(self)
  }
}

impl Index<usize> for CalendarGrid {
  type Output = CalendarCell;

  fn index(&self, index: usize) -> &Self::Output {
    &self.cells[index]
  }
}

impl<'a> IntoIterator for &'a CalendarGrid {
  type Item = &'a CalendarCell;
  type IntoIter = std::slice::Iter<'a, CalendarCell>;

  fn into_iter(self) -> Self::IntoIter {
    self.cells.iter()
  }
}

/// Appends cells in order, tracking the running position and today's index.
struct GridBuilder {
  cells: [CalendarCell; CELLS],
  len: usize,
  today_index: Option<u8>,
}

impl GridBuilder {
  const fn new() -> Self {
    let empty = CalendarCell { day: 0, is_today: false, month: MonthPosition::Current };
    Self { cells: [empty; CELLS], len: 0, today_index: None }
  }

  fn push(&mut self, day: u8, month: MonthPosition) {
    self.cells[self.len] = CalendarCell { day, is_today: false, month };
    self.len += 1;
  }

  fn push_today(&mut self, day: u8) {
    self.today_index = Some(self.len as u8);
    self.cells[self.len] = CalendarCell { day, is_today: true, month: MonthPosition::Current };
    self.len += 1;
  }

  fn finish(self) -> CalendarGrid {
    assert_eq!(self.len, CELLS, "Calendar window must hold exactly {CELLS} days");
    match self.today_index {
      Some(today_index) => CalendarGrid { cells: self.cells, today_index },
      #[cfg(not(tarpaulin_include))]
      None => panic!("Unreachable: today is always pushed"),
    }
  }
}
