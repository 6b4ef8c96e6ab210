//! Iterator over the week rows of a calendar grid

use std::iter::FusedIterator;
use std::iter::Iterator;

use crate::CalendarCell;
use crate::CalendarGrid;
use crate::grid::DAYS_PER_WEEK;
use crate::grid::WEEKS;

/// An iterator that yields the rows of a [`CalendarGrid`], seven cells at a time.
pub struct Weeks<'a> {
  grid: &'a CalendarGrid,
  cursor: usize,
}

impl<'a> Weeks<'a> {
  pub(crate) const fn new(grid: &'a CalendarGrid) -> Self {
    Self { grid, cursor: 0 }
  }
}

impl<'a> Iterator for Weeks<'a> {
  type Item = &'a [CalendarCell];

  fn next(&mut self) -> Option<Self::Item> {
    match self.cursor >= WEEKS {
      true => None,
      false => {
        let start = self.cursor * DAYS_PER_WEEK;
        self.cursor += 1;
        Some(&self.grid.cells()[start..start + DAYS_PER_WEEK])
      },
    }
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = WEEKS.saturating_sub(self.cursor);
    (remaining, Some(remaining))
  }
}

impl ExactSizeIterator for Weeks<'_> {}

impl FusedIterator for Weeks<'_> {}
