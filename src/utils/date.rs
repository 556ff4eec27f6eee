use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// First day of the month. Infallible for month in 1..=12.
pub fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        first_of_month(year + 1, 1)
    } else {
        first_of_month(year, month + 1)
    };
    next.pred_opt().unwrap().day()
}

/// Number of leading empty cells in a Sunday-first week grid (Sunday = 0).
pub fn first_weekday_offset(year: i32, month: u32) -> u32 {
    first_of_month(year, month).weekday().num_days_from_sunday()
}

pub fn month_bounds(year: i32, month: u32) -> (NaiveDate, NaiveDate) {
    let start = first_of_month(year, month);
    let end = NaiveDate::from_ymd_opt(year, month, days_in_month(year, month)).unwrap();
    (start, end)
}

/// Human month header, e.g. "March 2024".
pub fn month_label(year: i32, month: u32) -> String {
    first_of_month(year, month).format("%B %Y").to_string()
}

/// Parse "YYYY-MM" into (year, month).
pub fn parse_month(p: &str) -> Option<(i32, u32)> {
    let d = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d").ok()?;
    Some((d.year(), d.month()))
}

fn period_start_end(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Some((y, m)) = parse_month(p) {
        return Ok(month_bounds(y, m));
    }

    // YYYY
    if let Ok(year) = p.parse::<i32>() {
        return Ok((
            first_of_month(year, 1),
            NaiveDate::from_ymd_opt(year, 12, 31).unwrap(),
        ));
    }

    Err(format!("Invalid period: {}", p))
}

/// Resolve a period expression into inclusive date bounds.
///
/// Accepted forms: `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, and ranges of any of
/// those joined with `:` (e.g. `2024-01:2024-03`).
pub fn period_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    if let Some((a, b)) = p.split_once(':') {
        let (start, _) = period_start_end(a)?;
        let (_, end) = period_start_end(b)?;
        if end < start {
            return Err(format!("Invalid period: end before start in '{}'", p));
        }
        return Ok((start, end));
    }

    period_start_end(p)
}
