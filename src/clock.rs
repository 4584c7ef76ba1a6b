use chrono::{Local, NaiveDate};

/// Source of the current calendar date.
///
/// Layouts that print "today" read it through this trait so tests can pin the
/// date with [`FixedClock`].
pub trait Clock: Send {
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    pub fn ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// A date rendered the three ways the dashboards print it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dateline {
    /// `Thursday, February 5, 2026`
    pub long: String,
    /// `Thu • Feb 5 2026`
    pub condensed: String,
    /// `2026-02-05`
    pub iso: String,
}

impl Dateline {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            long: date.format("%A, %B %-d, %Y").to_string(),
            condensed: date.format("%a • %b %-d %Y").to_string(),
            iso: date.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn today(clock: &dyn Clock) -> Self {
        Self::from_date(clock.today())
    }
}
