//! Countdown Arithmetic

use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    /// (label, zero-padded value) in display order
    pub fn units(&self) -> [(&'static str, String); 4] {
        [
            ("Days", format!("{:02}", self.days)),
            ("Hours", format!("{:02}", self.hours)),
            ("Minutes", format!("{:02}", self.minutes)),
            ("Seconds", format!("{:02}", self.seconds)),
        ]
    }
}

/// Time until midnight UTC of `date`; all zeros once it has passed
pub fn time_left(date: NaiveDate, now: DateTime<Utc>) -> TimeLeft {
    let Some(target) = date.and_hms_opt(0, 0, 0) else {
        return TimeLeft::default();
    };
    let remaining = target.and_utc().signed_duration_since(now).num_seconds();
    if remaining <= 0 {
        return TimeLeft::default();
    }
    TimeLeft {
        days: remaining / 86_400,
        hours: remaining % 86_400 / 3_600,
        minutes: remaining % 3_600 / 60,
        seconds: remaining % 60,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn wedding() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_breakdown() {
        let now = Utc.with_ymd_and_hms(2025, 6, 13, 21, 59, 30).unwrap();
        assert_eq!(time_left(wedding(), now), TimeLeft { days: 1, hours: 2, minutes: 0, seconds: 30 });
    }

    #[test]
    fn test_zero_after_the_date() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 0, 0, 1).unwrap();
        assert_eq!(time_left(wedding(), now), TimeLeft::default());
    }

    #[test]
    fn test_units_are_zero_padded() {
        let left = TimeLeft { days: 120, hours: 3, minutes: 0, seconds: 9 };
        let values: Vec<String> = left.units().into_iter().map(|(_, v)| v).collect();
        assert_eq!(values, vec!["120", "03", "00", "09"]);
    }
}
