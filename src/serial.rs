use crate::value::Value;
use chrono::{Duration, NaiveDate};

/// Day zero of the host engine's 1900 date system. Offsetting from
/// 1899-12-30 makes the day count line up with the serials the engine
/// hands us for any date from March 1900 onwards.
fn serial_epoch() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1899, 12, 30)
}

/// Converts a date serial to a calendar date. Fractional serials carry a
/// time-of-day part which we do not care about, so they floor to the day.
pub fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    let days = Duration::try_days(serial.floor() as i64)?;
    serial_epoch()?.checked_add_signed(days)
}

/// Converts a calendar date back to a serial number.
pub fn date_to_serial(date: NaiveDate) -> Option<f64> {
    Some((date - serial_epoch()?).num_days() as f64)
}

/// Parses a date literal as typed in a cell, `21/12/2022` or `2022-12-21`.
pub fn parse_date_literal(input: &str) -> Option<NaiveDate> {
    for format in ["%d/%m/%Y", "%Y-%m-%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Some(date);
        }
    }
    None
}

/// Reads a cell value as a date: a serial number, numeric text, or a
/// date literal.
pub fn coerce_to_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::Number(number) => serial_to_date(*number),
        Value::Text(text) => {
            let trimmed = text.trim();
            match trimmed.parse::<f64>() {
                Ok(number) => serial_to_date(number),
                Err(_) => parse_date_literal(trimmed),
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::serial::{coerce_to_date, date_to_serial, serial_to_date};
    use crate::value::Value;
    use anyhow::{anyhow, Result};
    use chrono::NaiveDate;

    #[test]
    fn serial_round_trip() -> Result<()> {
        let date = serial_to_date(44562.0).ok_or(anyhow!("invalid serial"))?;
        assert_eq!(date, NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
        assert_eq!(date_to_serial(date), Some(44562.0));
        Ok(())
    }

    #[test]
    fn fractional_serial_floors_to_the_day() -> Result<()> {
        let date = serial_to_date(44562.75).ok_or(anyhow!("invalid serial"))?;
        assert_eq!(date, NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
        Ok(())
    }

    #[test]
    fn serial_of_the_year_ceiling() -> Result<()> {
        let date = serial_to_date(3000.0).ok_or(anyhow!("invalid serial"))?;
        assert_eq!(date, NaiveDate::from_ymd_opt(1908, 3, 18).unwrap());
        Ok(())
    }

    #[test]
    fn out_of_range_serial_is_rejected() {
        assert_eq!(serial_to_date(f64::MAX), None);
    }

    #[test]
    fn coerce_date_values() -> Result<()> {
        let expected = NaiveDate::from_ymd_opt(2022, 12, 21);
        assert_eq!(coerce_to_date(&Value::Text("21/12/2022".into())), expected);
        assert_eq!(coerce_to_date(&Value::Text("2022-12-21".into())), expected);
        assert_eq!(
            coerce_to_date(&Value::Number(44562.0)),
            NaiveDate::from_ymd_opt(2022, 1, 1)
        );
        assert_eq!(coerce_to_date(&Value::Text("hello".into())), None);
        assert_eq!(coerce_to_date(&Value::Empty), None);
        Ok(())
    }
}
