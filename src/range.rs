//! A date range picker that reports its selection once its popover is closed

use chrono::{Duration, NaiveDate};

/// Label shown when no start date is selected
pub const EMPTY_LABEL: &str = "Pick a date";

/// Number of days between the fallback start and end dates
const FALLBACK_RANGE_DAYS: i64 = 20;

fn fallback_from() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 20).unwrap_or(NaiveDate::MIN)
}

/// The selection of a [`DateRangePicker`]. Both bounds may be missing while the user is picking
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RangeSelection {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl RangeSelection {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Both bounds, if the selection is complete
    pub fn complete(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.from, self.to) {
            (Some(from), Some(to)) => Some((from, to)),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DateRangePicker {
    selection: RangeSelection,
    open: bool,
}

impl DateRangePicker {
    /// Create a closed picker. Missing bounds are replaced by a fallback range
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        let from = from.unwrap_or_else(fallback_from);
        let to = to.unwrap_or_else(|| fallback_from() + Duration::days(FALLBACK_RANGE_DAYS));
        Self {
            selection: RangeSelection::new(Some(from), Some(to)),
            open: false,
        }
    }

    pub fn selection(&self) -> RangeSelection { self.selection }
    pub fn is_open(&self) -> bool { self.open }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Change the selected range. This is not reported until the popover is closed
    pub fn select(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.selection = RangeSelection::new(from, to);
    }

    /// Close the popover, and return the selection that should be reported.
    ///
    /// Closing a popover that is not open reports nothing.
    pub fn close(&mut self) -> Option<RangeSelection> {
        if self.open == false {
            return None;
        }
        self.open = false;
        Some(self.selection)
    }

    /// The text shown on the button that opens the popover
    pub fn label(&self) -> String {
        match (self.selection.from, self.selection.to) {
            (None, _) => EMPTY_LABEL.to_string(),
            (Some(from), None) => format_date(from),
            (Some(from), Some(to)) => format!("{} - {}", format_date(from), format_date(to)),
        }
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%d. %b %Y").to_string()
}
