use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Error;
use std::fmt::Formatter;
use std::fmt::Result;
use std::fmt::Write;

use crate::LocalTime;

/// A date or time with a requested `strftime`-style format.
pub struct Formatted<'a> {
  pub(crate) time: LocalTime,
  pub(crate) format: &'a str,
}

impl Debug for Formatted<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    Display::fmt(self, f)
  }
}

impl Display for Formatted<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    let t = self.time;
    let d = t.date();
    let mut flag = false;
    let mut padding = Padding::Default;
    for c in self.format.chars() {
      if !flag {
        match c {
          '%' => {
            flag = true;
            padding = Padding::Default;
          },
          _ => f.write_char(c)?,
        }
        continue;
      }

      #[rustfmt::skip]
      match c {
        '0' => { padding = Padding::Zero; continue; },
        '-' => { padding = Padding::Suppress; continue; },
        '_' => { padding = Padding::Space; continue; },
        _ => {},
      };

      flag = false;
      match c {
        'Y' => padding.write(f, 4, d.year())?,
        'C' => padding.write(f, 2, d.year() / 100)?,
        'y' => padding.write(f, 2, d.year() % 100)?,
        'm' => padding.write(f, 2, d.month())?,
        'b' | 'h' => f.write_str(month_abbv(d.month()))?,
        'B' => f.write_str(month_name(d.month()))?,
        'd' => padding.write(f, 2, d.day())?,
        'e' => padding.or(Padding::Space).write(f, 2, d.day())?,
        'j' => padding.write(f, 3, d.day_of_year())?,
        'a' => f.write_str(d.weekday().abbv())?,
        'A' => f.write_str(d.weekday().name())?,
        'w' => write!(f, "{}", d.weekday().index())?,
        'u' => write!(f, "{}", match d.weekday().index() {
          0 => 7,
          i => i,
        })?,
        'H' => padding.write(f, 2, t.hour())?,
        'I' => padding.write(f, 2, t.hour12())?,
        'M' => padding.write(f, 2, t.minute())?,
        'p' => f.write_str(t.am_pm())?,
        'R' => write!(f, "{:02}:{:02}", t.hour(), t.minute())?,
        'T' => write!(f, "{:02}:{:02}:00", t.hour(), t.minute())?,
        'D' => write!(f, "{:02}/{:02}/{:02}", d.month(), d.day(), d.year() % 100)?,
        'F' => write!(f, "{:04}-{:02}-{:02}", d.year(), d.month(), d.day())?,
        't' => f.write_char('\t')?,
        'n' => f.write_char('\n')?,
        '%' => f.write_char('%')?,
        _ => Err(Error)?,
      }
    }
    Ok(())
  }
}

impl PartialEq<&str> for Formatted<'_> {
  fn eq(&self, other: &&str) -> bool {
    &self.to_string().as_str() == other
  }
}

macro_rules! month_str {
  ($($num:literal => $short:ident ~ $long:ident)*) => {
    /// The English name of the month (starting from 1).
    const fn month_name(month: u8) -> &'static str {
      match month {
        $($num => stringify!($long),)*
        #[cfg(not(tarpaulin_include))]
        _ => panic!("Fictitious month"),
      }
    }

    /// The three-letter abbreviation of the month (starting from 1).
    const fn month_abbv(month: u8) -> &'static str {
      match month {
        $($num => stringify!($short),)*
        #[cfg(not(tarpaulin_include))]
        _ => panic!("Fictitious month"),
      }
    }
  }
}
month_str! {
   1 => Jan ~ January
   2 => Feb ~ February
   3 => Mar ~ March
   4 => Apr ~ April
   5 => May ~ May
   6 => Jun ~ June
   7 => Jul ~ July
   8 => Aug ~ August
   9 => Sep ~ September
  10 => Oct ~ October
  11 => Nov ~ November
  12 => Dec ~ December
}

/// A padding modifier
#[derive(Copy, Clone, Eq, PartialEq)]
enum Padding {
  /// Use the default padding for the directive.
  Default,
  /// Explicitly pad with `0`
  Zero,
  /// Explicitly pad with ` `.
  Space,
  /// Explicitly prevent padding, even if the token has default padding.
  Suppress,
}

impl Padding {
  /// This padding, or `default` if none was requested.
  const fn or(self, default: Padding) -> Padding {
    match self {
      Padding::Default => default,
      other => other,
    }
  }

  fn write(self, f: &mut Formatter<'_>, width: usize, value: impl Display) -> Result {
    match self {
      Padding::Default | Padding::Zero => write!(f, "{:0width$}", value, width = width),
      Padding::Space => write!(f, "{:width$}", value, width = width),
      Padding::Suppress => write!(f, "{}", value),
    }
  }
}
