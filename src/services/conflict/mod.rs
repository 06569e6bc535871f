// Conflict detection
// Per-resource pairwise time-overlap detection over a booking snapshot

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Local};

use crate::models::booking::Booking;

/// All bookings conflicting with one booking.
///
/// Derived data: recomputed per snapshot, never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ConflictResult {
    pub booking_id: String,
    pub conflicting: Vec<Booking>,
}

/// Pairwise overlap conflicts for a snapshot of bookings, scoped per
/// resource: bookings on different resources never conflict, whatever
/// their times.
///
/// The overlap predicate is strict half-open: A conflicts with B iff
/// `A.start < B.end && A.end > B.start`, so intervals that merely touch
/// (`A.end == B.start`) do not conflict. Records with unparseable
/// timestamps are excluded from every comparison. Re-run [`detect`] when
/// the snapshot or the enabled flag changes.
///
/// [`detect`]: ConflictDetector::detect
#[derive(Debug, Clone, Default)]
pub struct ConflictDetector {
    conflicts: HashMap<String, ConflictResult>,
    conflicting_ids: HashSet<String>,
}

impl ConflictDetector {
    /// Compute conflicts for a snapshot.
    ///
    /// With `enabled` false the result reports zero conflicts for any
    /// input; the platform exposes detection as a per-tenant toggle.
    pub fn detect(bookings: &[Booking], enabled: bool) -> Self {
        if !enabled {
            return Self::default();
        }

        let mut by_resource: HashMap<&str, Vec<Timed<'_>>> = HashMap::new();
        for booking in bookings {
            let Some((start, end)) = booking.interval() else {
                log::debug!(
                    "booking {} has unparseable timestamps, excluded from conflict detection",
                    booking.id
                );
                continue;
            };
            by_resource
                .entry(booking.resource_id.as_str())
                .or_default()
                .push(Timed { booking, start, end });
        }

        let mut detector = Self::default();
        for group in by_resource.values() {
            for (i, a) in group.iter().enumerate() {
                for b in &group[i + 1..] {
                    if a.start < b.end && a.end > b.start {
                        detector.record(a.booking, b.booking);
                        detector.record(b.booking, a.booking);
                    }
                }
            }
        }
        detector
    }

    fn record(&mut self, booking: &Booking, other: &Booking) {
        self.conflicting_ids.insert(booking.id.clone());
        self.conflicts
            .entry(booking.id.clone())
            .or_insert_with(|| ConflictResult {
                booking_id: booking.id.clone(),
                conflicting: Vec::new(),
            })
            .conflicting
            .push(other.clone());
    }

    /// Does this booking overlap another booking on its resource?
    pub fn has_conflict(&self, booking_id: &str) -> bool {
        self.conflicts.contains_key(booking_id)
    }

    /// The bookings conflicting with the given one, or `None` when it has
    /// no conflicts or is not in the snapshot.
    pub fn conflicts_for(&self, booking_id: &str) -> Option<&ConflictResult> {
        self.conflicts.get(booking_id)
    }

    /// Ids of every booking participating in at least one conflicting pair.
    pub fn conflicting_ids(&self) -> &HashSet<String> {
        &self.conflicting_ids
    }

    /// Conflict participation count: one overlapping pair contributes 2,
    /// one per member.
    pub fn conflict_count(&self) -> usize {
        self.conflicts.len()
    }

    pub fn has_any_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}

struct Timed<'a> {
    booking: &'a Booking,
    start: DateTime<Local>,
    end: DateTime<Local>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::booking::BookingStatus;

    fn booking(id: &str, resource: &str, start: &str, end: &str) -> Booking {
        Booking {
            id: id.into(),
            resource_id: resource.into(),
            start_time: start.into(),
            end_time: end.into(),
            title: format!("Booking {id}"),
            status: BookingStatus::Confirmed,
        }
    }

    fn at(hhmm: &str) -> String {
        format!("2026-08-07T{hhmm}:00+02:00")
    }

    #[test]
    fn test_overlapping_pair_conflicts_both_ways() {
        let snapshot = vec![
            booking("a", "room-1", &at("10:00"), &at("12:00")),
            booking("b", "room-1", &at("11:00"), &at("13:00")),
        ];
        let detector = ConflictDetector::detect(&snapshot, true);

        assert!(detector.has_conflict("a"));
        assert!(detector.has_conflict("b"));
        assert_eq!(detector.conflict_count(), 2);
        assert!(detector.has_any_conflicts());

        let result = detector.conflicts_for("a").unwrap();
        assert_eq!(result.booking_id, "a");
        assert_eq!(result.conflicting.len(), 1);
        assert_eq!(result.conflicting[0].id, "b");
    }

    #[test]
    fn test_touching_intervals_do_not_conflict() {
        let snapshot = vec![
            booking("a", "room-1", &at("10:00"), &at("11:00")),
            booking("b", "room-1", &at("11:00"), &at("12:00")),
        ];
        let detector = ConflictDetector::detect(&snapshot, true);

        assert!(!detector.has_conflict("a"));
        assert!(!detector.has_conflict("b"));
        assert_eq!(detector.conflict_count(), 0);
        assert!(!detector.has_any_conflicts());
    }

    #[test]
    fn test_different_resources_never_conflict() {
        let snapshot = vec![
            booking("a", "room-1", &at("10:00"), &at("12:00")),
            booking("b", "room-2", &at("10:00"), &at("12:00")),
        ];
        let detector = ConflictDetector::detect(&snapshot, true);

        assert!(!detector.has_any_conflicts());
        assert!(detector.conflicting_ids().is_empty());
    }

    #[test]
    fn test_disabled_reports_nothing() {
        let snapshot = vec![
            booking("a", "room-1", &at("10:00"), &at("12:00")),
            booking("b", "room-1", &at("10:30"), &at("11:30")),
        ];
        let detector = ConflictDetector::detect(&snapshot, false);

        assert!(!detector.has_any_conflicts());
        assert_eq!(detector.conflict_count(), 0);
        assert!(detector.conflicts_for("a").is_none());
    }

    #[test]
    fn test_empty_snapshot() {
        let detector = ConflictDetector::detect(&[], true);
        assert!(!detector.has_any_conflicts());
        assert_eq!(detector.conflict_count(), 0);
    }

    #[test]
    fn test_invalid_timestamps_are_excluded_not_fatal() {
        let snapshot = vec![
            booking("ok-1", "room-1", &at("10:00"), &at("12:00")),
            booking("bad", "room-1", "whenever", &at("12:00")),
            booking("ok-2", "room-1", &at("11:00"), &at("13:00")),
        ];
        let detector = ConflictDetector::detect(&snapshot, true);

        assert!(!detector.conflicting_ids().contains("bad"));
        assert!(detector.conflicts_for("bad").is_none());
        assert!(detector.has_conflict("ok-1"));
        assert!(detector.has_conflict("ok-2"));
        assert_eq!(detector.conflict_count(), 2);
    }

    #[test]
    fn test_three_way_overlap_counts_each_participant_once() {
        let snapshot = vec![
            booking("a", "room-1", &at("09:00"), &at("12:00")),
            booking("b", "room-1", &at("10:00"), &at("13:00")),
            booking("c", "room-1", &at("11:00"), &at("14:00")),
        ];
        let detector = ConflictDetector::detect(&snapshot, true);

        assert_eq!(detector.conflict_count(), 3);
        // a overlaps b and c, b overlaps a and c, c overlaps a and b
        assert_eq!(detector.conflicts_for("a").unwrap().conflicting.len(), 2);
        assert_eq!(detector.conflicts_for("b").unwrap().conflicting.len(), 2);
        assert_eq!(detector.conflicts_for("c").unwrap().conflicting.len(), 2);
    }

    #[test]
    fn test_unknown_id_reports_no_conflict() {
        let detector = ConflictDetector::detect(&[], true);
        assert!(!detector.has_conflict("ghost"));
        assert!(detector.conflicts_for("ghost").is_none());
    }
}
