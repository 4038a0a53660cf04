use chrono::{Datelike, Duration, NaiveDate};

/// A display week: seven consecutive calendar dates, Sunday first.
///
/// Weeks are the pagination unit of the grid view. Two weeks are equal
/// exactly when they start on the same Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Week {
    start: NaiveDate,
}

/// Sunday on or before the given date.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

impl Week {
    /// The week containing the given date.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            start: week_start(date),
        }
    }

    /// First date of the week (a Sunday).
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last date of the week (the following Saturday).
    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(6)
    }

    /// The seven dates of this week in order.
    pub fn dates(&self) -> [NaiveDate; 7] {
        let mut out = [self.start; 7];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.start + Duration::days(i as i64);
        }
        out
    }

    /// Whether the given date falls inside this week.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start() && date <= self.end()
    }

    /// The week immediately after this one.
    pub fn next(&self) -> Self {
        Self {
            start: self.start + Duration::days(7),
        }
    }

    /// All weeks from `first` through `last`, inclusive.
    ///
    /// Returns just `first`'s week when `last` is earlier than `first`.
    pub fn span(first: NaiveDate, last: NaiveDate) -> Vec<Week> {
        let last_week = Week::containing(first.max(last));
        let mut week = Week::containing(first);
        let mut out = vec![week];
        while week < last_week {
            week = week.next();
            out.push(week);
        }
        out
    }
}
