// Calendar view state
// Single source of truth for the window of time the calendar is showing

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime};

use crate::utils::date::{
    end_of_day, end_of_week, first_of_month, last_of_month, shift_month_preserving_day,
    start_of_day, start_of_week,
};

/// Calendar view types offered by the booking grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewType {
    Day,
    Week,
    Month,
}

/// Direction for stepping the anchor date by one view unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigateDirection {
    Previous,
    Next,
}

/// Inclusive wall-clock bounds of the window currently in view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Current view type plus anchor date, with the visible range, navigation
/// stepping, and display title derived from them.
///
/// Ephemeral session state: recreated per session, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    view: ViewType,
    anchor: NaiveDate,
}

impl ViewState {
    pub fn new(view: ViewType, anchor: NaiveDate) -> Self {
        Self { view, anchor }
    }

    /// Start on today's date.
    pub fn today(view: ViewType) -> Self {
        Self::new(view, Local::now().date_naive())
    }

    pub fn view(&self) -> ViewType {
        self.view
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Switch the view type. The anchor date stays where it is.
    pub fn set_view(&mut self, view: ViewType) {
        self.view = view;
    }

    /// Step the anchor by one unit of the current view: a day, a week, or
    /// a calendar month (day-of-month clamped on overflow).
    pub fn navigate(&mut self, direction: NavigateDirection) {
        let sign: i32 = match direction {
            NavigateDirection::Previous => -1,
            NavigateDirection::Next => 1,
        };
        self.anchor = match self.view {
            ViewType::Day => self.anchor + Duration::days(sign as i64),
            ViewType::Week => self.anchor + Duration::weeks(sign as i64),
            ViewType::Month => shift_month_preserving_day(self.anchor, sign),
        };
    }

    pub fn go_to_today(&mut self) {
        self.anchor = Local::now().date_naive();
    }

    pub fn go_to_date(&mut self, date: NaiveDate) {
        self.anchor = date;
    }

    /// The visible range for the current view.
    ///
    /// Day: the anchor's full day. Week: Monday through Sunday of the
    /// anchor's ISO week, independent of locale. Month: first through last
    /// calendar day of the anchor's month. Bounds are full-day
    /// (00:00:00.000 to 23:59:59.999).
    pub fn date_range(&self) -> DateRange {
        let (first, last) = match self.view {
            ViewType::Day => (self.anchor, self.anchor),
            ViewType::Week => (start_of_week(self.anchor), end_of_week(self.anchor)),
            ViewType::Month => (first_of_month(self.anchor), last_of_month(self.anchor)),
        };
        DateRange {
            start: start_of_day(first),
            end: end_of_day(last),
        }
    }

    /// Inclusive day-granularity check against the visible range.
    pub fn is_date_in_view(&self, date: NaiveDate) -> bool {
        let range = self.date_range();
        date >= range.start.date() && date <= range.end.date()
    }

    /// Display label for the visible range, derived from [`date_range`].
    ///
    /// English month names; localized formatting is the caller's concern.
    ///
    /// [`date_range`]: ViewState::date_range
    pub fn view_title(&self) -> String {
        let range = self.date_range();
        let start = range.start.date();
        let end = range.end.date();

        match self.view {
            ViewType::Day => start.format("%A, %-d %B %Y").to_string(),
            ViewType::Week => {
                if start.month() == end.month() && start.year() == end.year() {
                    format!(
                        "{}\u{2013}{} {}",
                        start.day(),
                        end.day(),
                        start.format("%B %Y")
                    )
                } else if start.year() == end.year() {
                    format!(
                        "{} \u{2013} {} {}",
                        start.format("%-d %B"),
                        end.format("%-d %B"),
                        end.year()
                    )
                } else {
                    format!(
                        "{} \u{2013} {}",
                        start.format("%-d %B %Y"),
                        end.format("%-d %B %Y")
                    )
                }
            }
            ViewType::Month => start.format("%B %Y").to_string(),
        }
    }
}
