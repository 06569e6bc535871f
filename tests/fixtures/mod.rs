// Test fixtures - reusable test data
// Shared sample dates and booking snapshots for integration tests

use chrono::NaiveDate;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Friday 7 August 2026, the anchor used across scenarios
    pub fn friday_aug_7() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }
}

/// Booking snapshots as the data store would deliver them
pub mod snapshots {
    /// A morning on two meeting rooms:
    /// - "standup" and "design-review" overlap on room-a
    /// - "intro-call" touches "design-review" end-to-start on room-a (no conflict)
    /// - "maintenance" sits on room-b at the same hour as the room-a overlap
    /// - "legacy-import" carries an unparseable start stamp
    pub fn busy_morning() -> &'static str {
        r#"[
            {
                "id": "standup",
                "resourceId": "room-a",
                "startTime": "2026-08-07T09:00:00+02:00",
                "endTime": "2026-08-07T10:00:00+02:00",
                "title": "Daily standup",
                "status": "confirmed"
            },
            {
                "id": "design-review",
                "resourceId": "room-a",
                "startTime": "2026-08-07T09:30:00+02:00",
                "endTime": "2026-08-07T11:00:00+02:00",
                "title": "Design review",
                "status": "pending"
            },
            {
                "id": "intro-call",
                "resourceId": "room-a",
                "startTime": "2026-08-07T11:00:00+02:00",
                "endTime": "2026-08-07T11:30:00+02:00",
                "title": "Intro call",
                "status": "confirmed"
            },
            {
                "id": "maintenance",
                "resourceId": "room-b",
                "startTime": "2026-08-07T09:00:00+02:00",
                "endTime": "2026-08-07T11:00:00+02:00",
                "title": "Projector maintenance",
                "status": "confirmed"
            },
            {
                "id": "legacy-import",
                "resourceId": "room-a",
                "startTime": "last tuesday",
                "endTime": "2026-08-07T12:00:00+02:00",
                "title": "Imported from the old system",
                "status": "cancelled"
            }
        ]"#
    }
}
