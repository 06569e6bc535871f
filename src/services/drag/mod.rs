// Drag-to-create booking system
//
// Turns a pointer drag over the rendered time grid into a candidate
// booking interval: pixel-to-time conversion, snapping, minimum-duration
// enforcement, and creation-intent emission on release.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::utils::date::start_of_day;

/// Pixel geometry of the rendered time grid, supplied by the caller.
///
/// Kept as explicit configuration rather than read from ambient viewport
/// state; the rendering layer owns the actual layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Earliest hour represented at the grid's top edge.
    pub start_hour: u32,
    /// Hour bounding the grid's bottom edge; pointer positions below it
    /// clamp here.
    pub end_hour: u32,
    /// Pixels representing one hour.
    pub hour_height: f32,
    /// Pixel offset of the time-zero row, excluding header chrome.
    pub header_offset: f32,
    /// Floor for the duration of any created booking.
    pub min_duration_minutes: i64,
    /// Granularity the raw pixel-derived time is rounded to.
    pub snap_interval_minutes: i64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start_hour: 0,
            end_hour: 24,
            hour_height: 60.0,
            header_offset: 0.0,
            min_duration_minutes: 30,
            snap_interval_minutes: 15,
        }
    }
}

impl GridConfig {
    fn grid_start_minutes(&self) -> i64 {
        self.start_hour as i64 * 60
    }

    fn grid_end_minutes(&self) -> i64 {
        self.end_hour as i64 * 60
    }

    /// Convert a pointer Y coordinate (relative to the grid container)
    /// into a snapped minute-of-day, clamped onto the grid.
    fn minutes_at(&self, y: f32) -> i64 {
        let elapsed_hours = (y - self.header_offset) / self.hour_height;
        let raw_minutes = self.start_hour as f32 * 60.0 + elapsed_hours * 60.0;
        let snap = self.snap_interval_minutes as f32;
        let snapped = ((raw_minutes / snap).round() * snap) as i64;
        snapped.clamp(self.grid_start_minutes(), self.grid_end_minutes())
    }

    /// Y coordinate (relative to the grid container) of a time of day.
    /// Inverse of the pointer conversion; used to place events and the
    /// drag preview.
    pub fn y_for_time(&self, time: NaiveTime) -> f32 {
        let minutes = (time.hour() * 60 + time.minute()) as f32;
        let elapsed_hours = (minutes - self.start_hour as f32 * 60.0) / 60.0;
        elapsed_hours * self.hour_height + self.header_offset
    }
}

/// Resource and date metadata the rendering layer attaches to grid cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotContext {
    pub resource_id: String,
    pub date: NaiveDate,
}

/// The candidate booking span under an in-progress drag.
///
/// Hidden and empty outside an interaction; populated on pointer-down,
/// updated on pointer-move, and cleared again on finalize or cancel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragPreview {
    pub visible: bool,
    pub resource_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
}

impl DragPreview {
    fn clear(&mut self) {
        *self = Self::default();
    }

    /// Overlay label for the preview span, e.g. "09:00 – 10:30".
    pub fn time_label(&self) -> Option<String> {
        let (start, end) = (self.start_time?, self.end_time?);
        Some(format!(
            "{} \u{2013} {}",
            start.format("%H:%M"),
            end.format("%H:%M")
        ))
    }
}

/// Creation intent handed to the external booking-creation interface when
/// a drag finalizes. A request, not a guarantee: the persistence layer
/// re-validates conflicts server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub resource_id: String,
    pub date: NaiveDate,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

struct ActiveDrag {
    context: SlotContext,
    start_minutes: i64,
    end_minutes: i64,
}

/// Pointer-drag state machine over the time grid.
///
/// Idle until a pointer-down on a grid cell; dragging until pointer-up
/// (finalize), pointer-leave of the grid container (cancel), or
/// [`reset`](DragScheduler::reset).
pub struct DragScheduler {
    config: GridConfig,
    active: Option<ActiveDrag>,
    preview: DragPreview,
}

impl DragScheduler {
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            active: None,
            preview: DragPreview::default(),
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn preview(&self) -> &DragPreview {
        &self.preview
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Begin a drag on the cell carrying `context`, at pointer Y `y`
    /// relative to the grid container.
    ///
    /// The preview opens one snap interval long. A pointer-down while a
    /// drag is already active starts over with the new target; the
    /// overwritten drag emits nothing.
    pub fn pointer_down(&mut self, context: &SlotContext, y: f32) {
        if self.active.is_some() {
            log::debug!("pointer down during active drag, starting over");
        }

        // Leave room below the start for both the initial one-slot preview
        // and the minimum duration the drag must end up with.
        let reserved = self
            .config
            .snap_interval_minutes
            .max(self.config.min_duration_minutes);
        let start_cap = self.config.grid_end_minutes() - reserved;
        let start_minutes = self.config.minutes_at(y).min(start_cap);
        let end_minutes = start_minutes + self.config.snap_interval_minutes;

        self.active = Some(ActiveDrag {
            context: context.clone(),
            start_minutes,
            end_minutes,
        });
        self.sync_preview();
        log::debug!(
            "drag started on {} at minute {}",
            context.resource_id,
            start_minutes
        );
    }

    /// Extend or shrink the candidate span to the pointer's new Y.
    ///
    /// The end never comes closer to the start than the configured
    /// minimum duration. Ignored while idle.
    pub fn pointer_move(&mut self, y: f32) {
        let end_minutes = self.config.minutes_at(y);
        let min = self.config.min_duration_minutes;
        let Some(drag) = self.active.as_mut() else {
            return;
        };
        drag.end_minutes = end_minutes.max(drag.start_minutes + min);
        self.sync_preview();
    }

    /// Finalize the drag into a creation intent and return to idle.
    ///
    /// The minimum-duration floor is applied here as well, so a release
    /// with no intervening move still produces a valid span. Returns
    /// `None` while idle.
    pub fn pointer_up(&mut self) -> Option<BookingDraft> {
        let drag = self.active.take()?;
        let min = self.config.min_duration_minutes;
        let end_minutes = drag.end_minutes.max(drag.start_minutes + min);

        let day_start = start_of_day(drag.context.date);
        let draft = BookingDraft {
            resource_id: drag.context.resource_id,
            date: drag.context.date,
            start_time: day_start + Duration::minutes(drag.start_minutes),
            end_time: day_start + Duration::minutes(end_minutes),
        };
        self.preview.clear();
        log::debug!(
            "drag finalized on {}: {} minutes",
            draft.resource_id,
            end_minutes - drag.start_minutes
        );
        Some(draft)
    }

    /// Handle a pointer-leave event. `exited_grid` is whether the event's
    /// target was the grid container itself rather than a transition onto
    /// a child element; only a genuine exit cancels the drag.
    pub fn pointer_leave(&mut self, exited_grid: bool) {
        if exited_grid && self.active.is_some() {
            log::debug!("pointer left the grid, drag cancelled");
            self.active = None;
            self.preview.clear();
        }
    }

    /// Unconditionally return to idle with a cleared preview. Callable
    /// from any state; used for external cancellation (escape key, modal
    /// dismissal).
    pub fn reset(&mut self) {
        self.active = None;
        self.preview.clear();
    }

    fn sync_preview(&mut self) {
        let Some(drag) = self.active.as_ref() else {
            return;
        };
        let day_start = start_of_day(drag.context.date);
        self.preview = DragPreview {
            visible: true,
            resource_id: Some(drag.context.resource_id.clone()),
            date: Some(drag.context.date),
            start_time: Some(day_start + Duration::minutes(drag.start_minutes)),
            end_time: Some(day_start + Duration::minutes(drag.end_minutes)),
        };
    }
}
