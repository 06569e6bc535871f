// Booking module
// Scheduled-booking records as delivered by the platform's data store

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle status of a booking, as stored by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// Validation errors for locally constructed bookings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("booking title cannot be empty")]
    EmptyTitle,
    #[error("booking end time must be after start time")]
    EndNotAfterStart,
}

/// Errors from decoding a store snapshot payload.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed booking snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A scheduled booking on a resource, one record of the snapshot the data
/// store hands over for the window currently in view.
///
/// `start_time`/`end_time` stay RFC 3339 strings exactly as the store
/// delivered them; [`Booking::interval`] parses on demand. Records whose
/// stamps do not parse are carried along but treated as conflict-free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub resource_id: String,
    pub start_time: String,
    pub end_time: String,
    pub title: String,
    pub status: BookingStatus,
}

impl Booking {
    /// Create a validated booking from parsed local datetimes.
    ///
    /// # Examples
    /// ```
    /// use booking_calendar::models::booking::Booking;
    /// use chrono::Local;
    ///
    /// let start = Local::now();
    /// let end = start + chrono::Duration::hours(1);
    /// let booking = Booking::new("bk_1", "room-a", "Team offsite", start, end).unwrap();
    /// assert!(booking.interval().is_some());
    /// ```
    pub fn new(
        id: impl Into<String>,
        resource_id: impl Into<String>,
        title: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Result<Self, BookingError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(BookingError::EmptyTitle);
        }
        if end <= start {
            return Err(BookingError::EndNotAfterStart);
        }

        Ok(Self {
            id: id.into(),
            resource_id: resource_id.into(),
            start_time: start.to_rfc3339(),
            end_time: end.to_rfc3339(),
            title,
            status: BookingStatus::Pending,
        })
    }

    /// Parse the stored timestamps into a local time interval.
    ///
    /// Returns `None` when either stamp fails to parse; callers skip such
    /// records rather than erroring (the store is the source of truth and
    /// this core never rejects its data).
    pub fn interval(&self) -> Option<(DateTime<Local>, DateTime<Local>)> {
        let start = parse_local(&self.start_time)?;
        let end = parse_local(&self.end_time)?;
        Some((start, end))
    }

    /// Duration of the booking, when its timestamps parse.
    pub fn duration(&self) -> Option<chrono::Duration> {
        self.interval().map(|(start, end)| end - start)
    }
}

fn parse_local(value: &str) -> Option<DateTime<Local>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Local))
}

/// Decode a JSON snapshot payload from the data store.
///
/// The payload is a JSON array of camelCase booking records. A malformed
/// document is an error; well-formed records with unparseable timestamps
/// decode fine and simply never participate in conflict detection.
pub fn snapshot_from_json(json: &str) -> Result<Vec<Booking>, SnapshotError> {
    Ok(serde_json::from_str(json)?)
}
