use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::Visitor;

use crate::CalendarDate;

impl Serialize for CalendarDate {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&self.format("%Y-%m-%d"))
  }
}

struct CalendarDateVisitor;

impl Visitor<'_> for CalendarDateVisitor {
  type Value = CalendarDate;

  #[cfg(not(tarpaulin_include))]
  fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.write_str("a YYYY-MM-DD date string")
  }

  fn visit_str<E: serde::de::Error>(self, s: &str) -> Result<Self::Value, E> {
    let date = strptime::Parser::new("%Y-%m-%d").parse(s).and_then(|raw| raw.date());
    CalendarDate::try_from(date.map_err(E::custom)?).map_err(E::custom)
  }
}

impl<'de> Deserialize<'de> for CalendarDate {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_str(CalendarDateVisitor)
  }
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;
  use crate::Weekday;

  #[test]
  fn test_serde() -> Result<(), serde_json::Error> {
    let json = r#"{"date":"2023-03-01","first_day":"Monday"}"#;
    let struct_: TestStruct = serde_json::from_str(json)?;
    check!(struct_.date == date! { 2023-03-01 });
    check!(struct_.first_day == Weekday::Monday);
    let json = serde_json::to_string(&struct_)?;
    check!(json == r#"{"date":"2023-03-01","first_day":"Monday"}"#);
    Ok(())
  }

  #[test]
  fn test_invalid_date() {
    check!(
      serde_json::from_str::<TestStruct>(r#"{"date":"2023-02-29","first_day":"Monday"}"#).is_err()
    );
    check!(
      serde_json::from_str::<TestStruct>(r#"{"date":"tomorrow","first_day":"Monday"}"#).is_err()
    );
  }

  #[derive(Deserialize, Serialize)]
  struct TestStruct {
    date: CalendarDate,
    first_day: Weekday,
  }
}
