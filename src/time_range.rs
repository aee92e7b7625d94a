use std::fmt;
use std::str::FromStr;

use chrono::{Days, Months, NaiveDate};

/// Creation window used when no free-text query is given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimeRange {
    Day,
    Week,
    #[default]
    Month,
    Year,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::Day,
        TimeRange::Week,
        TimeRange::Month,
        TimeRange::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Day => "day",
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Year => "year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Day => "Today",
            TimeRange::Week => "This week",
            TimeRange::Month => "This month",
            TimeRange::Year => "This year",
        }
    }

    /// Border colour of the range's selector button.
    pub fn accent(&self) -> &'static str {
        match self {
            TimeRange::Day => "#3b82f6",
            TimeRange::Week => "#22c55e",
            TimeRange::Month => "#a855f7",
            TimeRange::Year => "#f97316",
        }
    }

    /// Oldest creation date still inside the window ending at `today`.
    ///
    /// Month arithmetic clamps to the end of the shorter month, so March 31
    /// minus one month is the last day of February.
    pub fn since(&self, today: NaiveDate) -> NaiveDate {
        let threshold = match self {
            TimeRange::Day => today.checked_sub_days(Days::new(1)),
            TimeRange::Week => today.checked_sub_days(Days::new(7)),
            TimeRange::Month => today.checked_sub_months(Months::new(1)),
            TimeRange::Year => today.checked_sub_months(Months::new(12)),
        };
        threshold.unwrap_or(NaiveDate::MIN)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(TimeRange::Day),
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            "year" => Ok(TimeRange::Year),
            _ => Err(format!(
                "Invalid time range: {s}. Valid values are: day, week, month, year"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn thresholds_subtract_calendar_intervals() {
        let today = date(2024, 6, 15);
        assert_eq!(TimeRange::Day.since(today), date(2024, 6, 14));
        assert_eq!(TimeRange::Week.since(today), date(2024, 6, 8));
        assert_eq!(TimeRange::Month.since(today), date(2024, 5, 15));
        assert_eq!(TimeRange::Year.since(today), date(2023, 6, 15));
    }

    #[test]
    fn day_and_week_cross_month_and_year_boundaries() {
        assert_eq!(TimeRange::Day.since(date(2024, 3, 1)), date(2024, 2, 29));
        assert_eq!(TimeRange::Week.since(date(2025, 1, 3)), date(2024, 12, 27));
    }

    #[test]
    fn month_arithmetic_clamps_to_month_end() {
        assert_eq!(TimeRange::Month.since(date(2023, 3, 31)), date(2023, 2, 28));
        assert_eq!(TimeRange::Year.since(date(2024, 2, 29)), date(2023, 2, 28));
    }

    #[test]
    fn parses_its_own_display() {
        for range in TimeRange::ALL {
            assert_eq!(range.to_string().parse::<TimeRange>(), Ok(range));
        }
        assert!("fortnight".parse::<TimeRange>().is_err());
    }

    #[test]
    fn defaults_to_month() {
        assert_eq!(TimeRange::default(), TimeRange::Month);
    }
}
