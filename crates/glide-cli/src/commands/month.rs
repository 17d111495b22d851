use anyhow::{anyhow, Result};
use chrono::{Datelike, NaiveDate};

use glide_core::calendar::{day_by_offset, is_last_row_in_month, month_end, month_title, today};
use glide_core::AppConfig;

pub fn run(
    config: &AppConfig,
    year: Option<i32>,
    month: Option<u32>,
    first_day: Option<u32>,
) -> Result<()> {
    let current = today();
    let year = year.unwrap_or_else(|| current.year());
    let month = month.unwrap_or_else(|| current.month());
    let first_day = first_day.unwrap_or(config.calendar.first_day_of_week) % 7;

    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow!("invalid month: {year}-{month}"))?;
    // grid position of day 1, relative to the configured week start
    let offset = (first.weekday().num_days_from_sunday() + 7 - first_day) % 7;

    println!("{}", month_title(first));
    println!("{}", header(first_day));

    let days = month_end(first).day();
    let mut line = String::new();
    for _ in 0..offset {
        line.push_str("    ");
    }
    for day in 1..=days {
        let date = day_by_offset(first, i64::from(day - 1));
        line.push_str(&format!("{day:>3} "));
        if (offset + day - 1) % 7 == 6 {
            println!("{line}{}", row_marker(date, offset));
            line.clear();
        }
    }
    if !line.is_empty() {
        let filled = (offset + days) % 7;
        for _ in filled..7 {
            line.push_str("    ");
        }
        let last = day_by_offset(first, i64::from(days - 1));
        println!("{line}{}", row_marker(last, offset));
    }

    Ok(())
}

fn header(first_day: u32) -> String {
    const NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
    (0..7)
        .map(|i| format!("{:>3} ", NAMES[((first_day + i) % 7) as usize]))
        .collect()
}

fn row_marker(date: NaiveDate, offset: u32) -> &'static str {
    if is_last_row_in_month(date, offset) {
        " < last row"
    } else {
        ""
    }
}
