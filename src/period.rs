use crate::parser::{try_rule, Rule};
use crate::serial;
use crate::value::{self, Value};
use anyhow::{anyhow, Result};
use chrono::Datelike;

/// A whole number below this ceiling is read as a year rather than a
/// date serial. Serial 3000 is 18 March 1908, long before any bookkeeping
/// data this library will ever see, so the two readings cannot collide.
pub const YEAR_CEILING: f64 = 3000.0;

/// A parsed accounting period. Exactly one variant comes out of a parse,
/// and the tag fully determines which fields are meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateRange {
    Year { year: i32 },
    Quarter { year: i32, quarter: u8 },
    Month { year: i32, month: u32 },
    Day { year: i32, month: u32, day: u32 },
}

fn quarter_period(input: &str) -> Option<DateRange> {
    let mut pairs = try_rule(Rule::quarter_period, input)?.next()?.into_inner();
    let quarter = pairs.next()?.as_str().parse().ok()?;
    let year = pairs.next()?.as_str().parse().ok()?;
    Some(DateRange::Quarter { year, quarter })
}

fn month_period(input: &str) -> Option<DateRange> {
    let mut pairs = try_rule(Rule::month_period, input)?.next()?.into_inner();
    let month = pairs.next()?.as_str().parse().ok()?;
    let year = pairs.next()?.as_str().parse().ok()?;
    Some(DateRange::Month { year, month })
}

fn year_period(input: &str) -> Option<DateRange> {
    let number: f64 = input.parse().ok()?;
    if number < YEAR_CEILING {
        return Some(DateRange::Year {
            year: number as i32,
        });
    }
    None
}

fn day_period(input: &str) -> Option<DateRange> {
    let date = match input.parse::<f64>() {
        Ok(number) => serial::serial_to_date(number)?,
        Err(_) => serial::parse_date_literal(input)?,
    };
    Some(DateRange::Day {
        year: date.year(),
        month: date.month(),
        day: date.day(),
    })
}

fn invalid_period(input: &str) -> anyhow::Error {
    anyhow!(format!(
        "`{}' is not a valid period, supported formats are \"21/12/2022\", \"Q1/2022\", \"12/2022\", and \"2022\"",
        input
    ))
}

impl TryFrom<&str> for DateRange {
    type Error = anyhow::Error;

    /// Tries each period shape in priority order, first match wins.
    /// Order matters: a bare number below [`YEAR_CEILING`] is a year,
    /// anything else numeric is a date serial.
    fn try_from(input: &str) -> Result<Self, Self::Error> {
        let trimmed = input.trim();
        quarter_period(trimmed)
            .or_else(|| month_period(trimmed))
            .or_else(|| year_period(trimmed))
            .or_else(|| day_period(trimmed))
            .ok_or_else(|| invalid_period(trimmed))
    }
}

/// Parses a period as entered in a cell, either text or a numeric date
/// serial produced by another formula.
pub fn parse_period(input: &Value) -> Result<DateRange> {
    let text = value::to_text(input);
    text.as_str().try_into()
}
